//! Summary extraction: a bounded window after a summary header, then a
//! first-long-paragraph fallback. Strategies are tried in order and the
//! first non-empty result wins.

/// Lines inspected after a summary header.
const WINDOW: usize = 4;
const MIN_LINE_LEN: usize = 20;
const MIN_PARAGRAPH_LEN: usize = 100;

/// `summary_run` is the first explicit summary section yielded by the
/// scanner; the window keeps its first lines that read like prose.
pub fn extract_summary(text: &str, summary_run: &[&str]) -> String {
    let collected: Vec<&str> = summary_run
        .iter()
        .take(WINDOW)
        .filter(|line| line.len() > MIN_LINE_LEN)
        .copied()
        .collect();
    if !collected.is_empty() {
        return collected.join(" ");
    }

    first_long_paragraph(text)
}

/// First paragraph longer than 100 chars that is not contact information
/// and does not mention experience or education.
fn first_long_paragraph(text: &str) -> String {
    for paragraph in text.split("\n\n") {
        let trimmed = paragraph.trim();
        if trimmed.len() <= MIN_PARAGRAPH_LEN || trimmed.contains('@') || trimmed.contains('+') {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if lower.contains("experience") || lower.contains("education") {
            continue;
        }
        return trimmed.to_string();
    }
    String::new()
}
