//! Search budget and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bounds on the generator's backtracking search.
///
/// The budget turns an exponential worst case into a bounded run: when a
/// bound is hit the generator stops and reports the tasks it could not
/// place instead of searching forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBudget {
    /// Total backtrack steps allowed across the whole run.
    pub max_backtracks: usize,
    /// Times a single task's placement may be undone before the run stops.
    pub retries_per_task: u32,
}

impl SearchBudget {
    /// Creates the default budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total backtrack bound.
    pub fn with_max_backtracks(mut self, max_backtracks: usize) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Sets the per-task retry bound.
    pub fn with_retries_per_task(mut self, retries: u32) -> Self {
        self.retries_per_task = retries;
        self
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_backtracks: 10_000,
            retries_per_task: 32,
        }
    }
}

/// Shared flag for cancelling a generation run between placement steps.
///
/// Clone the token, hand one copy to the generator, and call `cancel` from
/// another thread. The generator checks the flag once per task iteration;
/// cancellation yields a partial result, never a corrupt one.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_builder() {
        let b = SearchBudget::new()
            .with_max_backtracks(100)
            .with_retries_per_task(4);
        assert_eq!(b.max_backtracks, 100);
        assert_eq!(b.retries_per_task, 4);
    }

    #[test]
    fn test_cancel_token_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
