//! Location inference: ordered "City, State" shaped patterns filtered
//! against an institutional-noise denylist.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered shape patterns: "City, ST", "City, State", "Multi-word City, ST".
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"[A-Z][a-z]+,?\s*[A-Z]{2}").unwrap(),
        Regex::new(r"[A-Z][a-z]+,?\s*[A-Z][a-z]+").unwrap(),
        Regex::new(r"[A-Z][a-z]+\s*[A-Z][a-z]+,?\s*[A-Z]{2}").unwrap(),
    ]
});

/// Matches containing these terms are institution names, not places.
const NOISE_TERMS: &[&str] = &["university", "college", "company", "corp"];

/// Returns the first surviving match from the first pattern that produced
/// any surviving match; empty string if none survive.
pub fn extract_location(text: &str) -> String {
    for pattern in LOCATION_PATTERNS.iter() {
        let survivor = pattern.find_iter(text).map(|m| m.as_str()).find(|candidate| {
            let lower = candidate.to_lowercase();
            !NOISE_TERMS.iter().any(|noise| lower.contains(noise))
        });
        if let Some(location) = survivor {
            return location.to_string();
        }
    }
    String::new()
}
