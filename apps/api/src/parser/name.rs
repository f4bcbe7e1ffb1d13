//! Name inference. Positional and casing heuristics only; tuned for
//! Latin-script résumés and intentionally left that way.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder returned when no line looks like a name. Consumed
/// downstream as a literal, so the exact string matters.
pub const NAME_NOT_FOUND: &str = "Name Not Found";

/// How many leading lines the first pass inspects.
const HEADER_WINDOW: usize = 5;

static TWO_WORD_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+").unwrap());
static SINGLE_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());
static FULL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+( [A-Z][a-z]+)?$").unwrap());

/// Two-pass scan: the first few lines for a name-shaped token, then the
/// whole document against a stricter two-or-three-word personal-name
/// shape. Falls back to the [`NAME_NOT_FOUND`] sentinel.
pub fn extract_name(lines: &[&str]) -> String {
    for line in lines.iter().take(HEADER_WINDOW) {
        if line.contains('@')
            || line.contains("http")
            || line.contains("www.")
            || line.contains('+')
        {
            continue;
        }
        if line.len() <= 5 || line.len() >= 50 {
            continue;
        }
        if TWO_WORD_PREFIX_RE.is_match(line) || SINGLE_WORD_RE.is_match(line) {
            return (*line).to_string();
        }
    }

    for line in lines {
        if FULL_NAME_RE.is_match(line) && !line.contains('@') && line.len() < 50 {
            return (*line).to_string();
        }
    }

    NAME_NOT_FOUND.to_string()
}
