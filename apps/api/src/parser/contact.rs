//! Pattern field extractors for email and phone. Each scans the entire
//! raw text (not normalized lines, to tolerate inline formatting) with a
//! single fixed grammar; the leftmost match wins and absence yields an
//! empty string.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Optional country code, 3-digit area code (optionally parenthesized),
/// separator-tolerant 3- and 4-digit groups.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap());

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_basic() {
        assert_eq!(
            extract_email("reach me at jane.doe@example.com anytime"),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn test_email_leftmost_wins() {
        let text = "primary: a.first@one.io backup: z.second@two.io";
        assert_eq!(extract_email(text), "a.first@one.io");
    }

    #[test]
    fn test_email_absent_without_at_sign() {
        assert_eq!(extract_email("no contact details here"), "");
    }

    #[test]
    fn test_email_requires_tld() {
        assert_eq!(extract_email("not-an-email@localhost"), "");
    }

    #[test]
    fn test_phone_parenthesized_area_code() {
        assert_eq!(extract_phone("call (555) 123-4567 today"), "(555) 123-4567");
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(extract_phone("+1-555-123-4567"), "+1-555-123-4567");
    }

    #[test]
    fn test_phone_dotted() {
        assert_eq!(extract_phone("555.123.4567"), "555.123.4567");
    }

    #[test]
    fn test_phone_absent() {
        assert_eq!(extract_phone("digits 12 34 but no phone"), "");
    }

    #[test]
    fn test_phone_leftmost_wins() {
        assert_eq!(
            extract_phone("home (111) 222-3333 work (444) 555-6666"),
            "(111) 222-3333"
        );
    }
}
