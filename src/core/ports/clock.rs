//! Clock port
//!
//! The one place "today" comes from. Engine functions take an explicit
//! `as_of` date; callers obtain it from a [`Clock`] at the outermost boundary.

use chrono::NaiveDate;

/// Source of the evaluation date
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Today's calendar date
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The evaluation date: `pinned` when given, otherwise `clock.today()`.
///
/// A pinned date never consults the clock.
#[must_use]
pub fn evaluation_date(pinned: Option<NaiveDate>, clock: &dyn Clock) -> NaiveDate {
    pinned.unwrap_or_else(|| clock.today())
}
