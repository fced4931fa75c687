//! Clock port
//!
//! The start-date rule compares against "today". Reading the date through
//! this port keeps the session store deterministic under test.

use chrono::NaiveDate;

/// Source of the current calendar date
///
/// The production implementation lives in the infrastructure layer
/// (`SystemClock`); tests use [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Today's date in the user's local calendar
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
