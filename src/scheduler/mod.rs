//! Timetable generation.
//!
//! `Generator` runs a deterministic backtracking search that places every
//! weekly requirement into a (room, time slot) cell, pruning through the
//! slot index. Infeasible input yields a partial schedule plus the unmet
//! remainder; it is reported, never raised as an error.
//!
//! `SearchBudget` bounds the search, `CancelToken` stops it cooperatively
//! between placement steps.

mod budget;
mod generator;

pub use budget::{CancelToken, SearchBudget};
pub use generator::{GenerationOutcome, Generator, UnmetTask};
