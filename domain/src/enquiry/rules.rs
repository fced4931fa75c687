//! Pure per-field predicates used by the validator.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: one `@`, a dot in the domain part, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// UK-style number once whitespace is stripped: `+44`, `0044` or `0`, then 9-10 digits.
pub const UK_PHONE_PATTERN: &str = r"^(?:\+44|0|0044)[0-9]{9,10}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

static UK_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UK_PHONE_PATTERN).expect("valid phone regex"));

/// Basic email shape check. The value is tested as given, so surrounding
/// whitespace fails.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Case-insensitive comparison after trimming both sides.
pub fn emails_match(email: &str, confirm_email: &str) -> bool {
    email.trim().to_lowercase() == confirm_email.trim().to_lowercase()
}

/// UK phone check. Accepts `07123456789`, `+447123456789`, `00447123456789`
/// and spaced variants such as `+44 7123 456 789`.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    UK_PHONE_RE.is_match(&cleaned)
}

/// Whether `date` falls on a calendar day after `today`.
///
/// Both sides are plain dates, so the time of day never matters: tomorrow
/// always qualifies, today never does.
pub fn is_at_least_one_day_ahead(date: NaiveDate, today: NaiveDate) -> bool {
    (date - today).num_days() >= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("name.surname+tag@mail.example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(" a@b.com"));
    }

    #[test]
    fn test_emails_match_ignores_case_and_padding() {
        assert!(emails_match("a@b.com", "A@B.com"));
        assert!(emails_match("  Karim@Example.com", "karim@example.COM  "));
        assert!(!emails_match("a@b.com", "different@b.com"));
        assert!(!emails_match("a@b.com", "a@c.com"));
    }

    #[test]
    fn test_uk_phone_numbers_pass() {
        assert!(is_valid_phone("07123456789"));
        assert!(is_valid_phone("+447123456789"));
        assert!(is_valid_phone("00447123456789"));
        assert!(is_valid_phone("+44 7123 456 789"));
        assert!(is_valid_phone("0121 496 0000"));
    }

    #[test]
    fn test_non_uk_phone_numbers_fail() {
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("+1 212 555 0100"));
        assert!(!is_valid_phone("07123-456-789"));
        assert!(!is_valid_phone("0712345678901"));
        assert!(!is_valid_phone("+44７１２３４５６７８９"));
    }

    #[test]
    fn test_one_day_ahead() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
        let last_year = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();

        assert!(is_at_least_one_day_ahead(tomorrow, today));
        assert!(!is_at_least_one_day_ahead(today, today));
        assert!(!is_at_least_one_day_ahead(last_year, today));
    }

    #[test]
    fn test_one_day_ahead_across_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let next = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert!(is_at_least_one_day_ahead(next, today));
    }
}
