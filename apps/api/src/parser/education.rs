//! Education extraction: explicit section lines merged with a whole-text
//! degree/institution keyword scan.

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "certificate",
    "diploma",
];

const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

const MAX_ENTRIES: usize = 5;

/// Section lines longer than 10 chars without an `@`, then any line in
/// the document carrying a degree or institution keyword, appended when
/// not already present. Capped at 5 entries.
pub fn extract_education(lines: &[&str], section_lines: &[&str]) -> Vec<String> {
    let mut entries: Vec<String> = section_lines
        .iter()
        .filter(|line| line.len() > 10 && !line.contains('@'))
        .map(|line| (*line).to_string())
        .collect();

    for line in lines {
        let lower = line.to_lowercase();
        let keyword_hit = DEGREE_KEYWORDS.iter().any(|kw| lower.contains(kw))
            || INSTITUTION_KEYWORDS.iter().any(|kw| lower.contains(kw));
        if keyword_hit && line.len() > 10 && !entries.iter().any(|existing| existing == line) {
            entries.push((*line).to_string());
        }
    }

    entries.truncate(MAX_ENTRIES);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lines_kept() {
        let section = ["Bachelor of Science in Computer Science, UT Austin"];
        let entries = extract_education(&[], &section);
        assert_eq!(entries, vec![section[0].to_string()]);
    }

    #[test]
    fn test_keyword_scan_is_additive() {
        let lines = [
            "Jane Doe",
            "Certificate in Data Engineering, 2021",
            "Hobbies include chess",
        ];
        let section = ["BSc Computer Science, 2017"];
        let entries = extract_education(&lines, &section);
        assert_eq!(
            entries,
            vec![
                "BSc Computer Science, 2017".to_string(),
                "Certificate in Data Engineering, 2021".to_string(),
            ]
        );
    }

    #[test]
    fn test_keyword_scan_dedups_against_section() {
        let line = "Bachelor of Science in Computer Science, UT Austin";
        let entries = extract_education(&[line], &[line]);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_short_lines_dropped() {
        let entries = extract_education(&["MIT school"], &["BSc, 2017"]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_at_sign_filter_applies_to_section_lines_only() {
        let section = ["registrar@university.example.edu transcript requests"];
        assert!(extract_education(&[], &section).is_empty());
        // The keyword scan has no @ filter; it keeps the line.
        let entries = extract_education(&["registrar@university.example.edu office"], &[]);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_capped_at_five() {
        let lines = [
            "Bachelor of Arts, 2010",
            "Master of Arts, 2012",
            "PhD in History, 2016",
            "Diploma in Teaching, 2017",
            "Certificate in Archives, 2018",
            "Associate of Arts, 2008",
        ];
        assert_eq!(extract_education(&lines, &[]).len(), 5);
    }
}
