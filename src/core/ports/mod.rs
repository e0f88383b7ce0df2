//! Port traits (interfaces) for external dependencies
//!
//! The engine itself has no external dependencies beyond the calendar date.
//! That single input is abstracted here so tests can pin it.

mod clock;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, FixedClock, SystemClock, evaluation_date};
