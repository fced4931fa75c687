//! System clock adapter

use chrono::{Local, NaiveDate};
use folio_application::Clock;

/// Reads today's date from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock::new().today();
        let after = Local::now().date_naive();
        // Tolerate the test straddling midnight
        assert!(today == before || today == after);
    }
}
