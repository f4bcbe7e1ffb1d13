// Extraction engine: segments raw résumé text into sections and pulls out
// name, contact details, location, summary, skills, experience, and
// education, degrading gracefully when a field cannot be found.
// Pure and synchronous; one call, one immutable record, no shared state.

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod lines;
pub mod location;
pub mod name;
pub mod sections;
pub mod skills;
pub mod summary;

use crate::models::resume::ResumeRecord;
use sections::Section;

/// Runs every extractor over the same text and composes the record.
/// Extractors are independent: none observes another's output, and each
/// resolves absence to its documented default instead of failing.
pub fn parse_resume_text(text: &str) -> ResumeRecord {
    let lines = lines::normalize_lines(text);
    let runs = sections::scan_sections(&lines);

    let skills_lines = sections::section_lines(&runs, Section::Skills);
    let experience_lines = sections::section_lines(&runs, Section::Experience);
    let education_lines = sections::section_lines(&runs, Section::Education);
    let summary_run = runs
        .iter()
        .find(|run| run.section == Section::Summary)
        .map(|run| run.lines.as_slice())
        .unwrap_or_default();

    ResumeRecord {
        name: name::extract_name(&lines),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        location: location::extract_location(text),
        summary: summary::extract_summary(text, summary_run),
        skills: skills::extract_skills(text, &skills_lines),
        experience: experience::extract_experience(&lines, &experience_lines),
        education: education::extract_education(&lines, &education_lines),
        raw_text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED: &str = "Jane Doe\njane.doe@example.com\n(555) 123-4567\nAustin, TX\n\nSKILLS\nPython, SQL, Leadership\n\nEXPERIENCE\nSoftware Engineer at Acme Corp building internal tools for five years\n\nEDUCATION\nBachelor of Science in Computer Science, UT Austin";

    const UNSTRUCTURED: &str = "random text with no structure at all and nothing useful";

    #[test]
    fn test_structured_resume_extracts_every_field() {
        let record = parse_resume_text(STRUCTURED);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane.doe@example.com");
        assert_eq!(record.phone, "(555) 123-4567");
        assert_eq!(record.location, "Austin, TX");
        assert!(record.skills.contains(&"python".to_string()));
        assert!(record.skills.contains(&"sql".to_string()));
        assert!(record
            .experience
            .iter()
            .any(|entry| entry.contains("Acme Corp")));
        assert!(record
            .education
            .iter()
            .any(|entry| entry.contains("Bachelor of Science")));
        assert_eq!(record.raw_text, STRUCTURED);
    }

    #[test]
    fn test_unstructured_text_yields_defaults() {
        let record = parse_resume_text(UNSTRUCTURED);
        assert_eq!(record.name, name::NAME_NOT_FOUND);
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.location, "");
        assert_eq!(record.summary, "");
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_leftmost_email_wins() {
        let record = parse_resume_text("first.one@a.io and second.one@b.io");
        assert_eq!(record.email, "first.one@a.io");
    }

    #[test]
    fn test_experience_header_ends_skills_section() {
        let record =
            parse_resume_text("SKILLS\nPython\nEXPERIENCE\nSoftware Engineer at Acme Corp for years");
        assert!(!record.skills.iter().any(|s| s.to_lowercase().contains("experience")));
        assert!(record.experience.iter().any(|e| e.contains("Acme Corp")));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_resume_text(STRUCTURED);
        let second = parse_resume_text(STRUCTURED);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_on_degenerate_inputs() {
        for text in ["", "   \n\n \t", "@", "\u{00e9}\u{00e9}\u{00e9}", "SKILLS"] {
            let record = parse_resume_text(text);
            assert_eq!(record.raw_text, text);
            assert!(record.skills.len() <= 12);
        }
    }

    #[test]
    fn test_no_at_sign_means_no_email() {
        let record = parse_resume_text("Jane Doe\nAustin, TX\nSKILLS\nPython");
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_cap_invariants() {
        let mut text = String::from("SKILLS\n");
        text.push_str("Tool01, Tool02, Tool03, Tool04, Tool05, Tool06, Tool07\n");
        text.push_str("Tool08, Tool09, Tool10, Tool11, Tool12, Tool13, Tool14\n");
        text.push_str("EXPERIENCE\n");
        for i in 0..12 {
            text.push_str(&format!("Software Engineer on platform team number {i:02}\n"));
        }
        text.push_str("EDUCATION\n");
        for i in 0..8 {
            text.push_str(&format!("Bachelor of Science, class of 20{i:02}\n"));
        }
        let record = parse_resume_text(&text);
        assert!(record.skills.len() <= 12, "skills: {:?}", record.skills);
        assert!(
            record.experience.len() <= 8,
            "experience: {:?}",
            record.experience
        );
        assert!(
            record.education.len() <= 5,
            "education: {:?}",
            record.education
        );
    }

    #[test]
    fn test_skills_never_repeat() {
        let record = parse_resume_text("SKILLS\npython, python, Python\npython and more python");
        let mut seen = std::collections::HashSet::new();
        for skill in &record.skills {
            assert!(seen.insert(skill.clone()), "duplicate skill: {skill}");
        }
    }

    #[test]
    fn test_summary_from_explicit_section() {
        let text = "Jane Doe\n\nSUMMARY\nBackend engineer who enjoys building resilient systems.\nKeen on mentoring and code review culture.\n\nSKILLS\nPython";
        let record = parse_resume_text(text);
        assert_eq!(
            record.summary,
            "Backend engineer who enjoys building resilient systems. Keen on mentoring and code review culture."
        );
    }
}
