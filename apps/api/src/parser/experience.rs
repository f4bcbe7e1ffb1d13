//! Experience extraction: explicit section lines first, then a whole-text
//! job-title fallback when no section was found.

use once_cell::sync::Lazy;
use regex::Regex;

static JOB_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(engineer|developer|manager|analyst|specialist|coordinator|director|lead|senior|junior)\b",
    )
    .unwrap()
});

/// "at CompanyName" / "@ CompanyName" shape.
static AT_COMPANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(at|@)\s+[A-Z][a-z]+").unwrap());

const MAX_ENTRIES: usize = 8;

/// Section lines longer than 20 chars without an `@`; if none survive,
/// every normalized line matching a job-title or at-company shape.
/// Capped at 8 entries either way.
pub fn extract_experience(lines: &[&str], section_lines: &[&str]) -> Vec<String> {
    let mut entries: Vec<String> = section_lines
        .iter()
        .filter(|line| line.len() > 20 && !line.contains('@'))
        .map(|line| (*line).to_string())
        .collect();

    if entries.is_empty() {
        entries = lines
            .iter()
            .filter(|line| {
                line.len() > 20 && (JOB_TITLE_RE.is_match(line) || AT_COMPANY_RE.is_match(line))
            })
            .map(|line| (*line).to_string())
            .collect();
    }

    entries.truncate(MAX_ENTRIES);
    entries
}
