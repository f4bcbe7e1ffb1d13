//! Section scanner: a finite-state walk over the normalized lines.
//!
//! A line containing a section's trigger keyword is a header: it is
//! consumed (never emitted as content) and moves the scanner into that
//! section's state. While inside a section, a header for another section
//! ends the current run and opens the next one in the same step, and a
//! section-specific exit keyword ends the run without opening a new one.
//! Everything else inside a section is content. There is no terminal
//! state; the scanner stops at end of input.

/// The four recognized résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Skills,
    Experience,
    Education,
    Summary,
}

/// Scanner states. `Seeking` is the initial state and the state after an
/// exit keyword; each `In*` state corresponds to one [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Seeking,
    InSkills,
    InExperience,
    InEducation,
    InSummary,
}

const SKILLS_TRIGGERS: &[&str] = &["skill", "technolog", "competenc"];
const EXPERIENCE_TRIGGERS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
];
const EDUCATION_TRIGGERS: &[&str] = &["education", "academic", "degree"];
const SUMMARY_TRIGGERS: &[&str] = &["summary", "objective", "profile", "about"];

// Content-boundary guards: keywords that end a section without starting
// another. Kept per-section to mirror the entry tables above.
const SKILLS_EXITS: &[&str] = &["experience", "education", "work"];
const EXPERIENCE_EXITS: &[&str] = &["education", "skills", "certifications"];
const EDUCATION_EXITS: &[&str] = &["experience", "skills", "certifications"];
const SUMMARY_EXITS: &[&str] = &[];

impl Section {
    /// Evaluation order for header recognition.
    pub const ALL: [Section; 4] = [
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Summary,
    ];

    fn triggers(self) -> &'static [&'static str] {
        match self {
            Section::Skills => SKILLS_TRIGGERS,
            Section::Experience => EXPERIENCE_TRIGGERS,
            Section::Education => EDUCATION_TRIGGERS,
            Section::Summary => SUMMARY_TRIGGERS,
        }
    }

    fn exit_keywords(self) -> &'static [&'static str] {
        match self {
            Section::Skills => SKILLS_EXITS,
            Section::Experience => EXPERIENCE_EXITS,
            Section::Education => EDUCATION_EXITS,
            Section::Summary => SUMMARY_EXITS,
        }
    }

    fn state(self) -> ScanState {
        match self {
            Section::Skills => ScanState::InSkills,
            Section::Experience => ScanState::InExperience,
            Section::Education => ScanState::InEducation,
            Section::Summary => ScanState::InSummary,
        }
    }
}

impl ScanState {
    fn section(self) -> Option<Section> {
        match self {
            ScanState::Seeking => None,
            ScanState::InSkills => Some(Section::Skills),
            ScanState::InExperience => Some(Section::Experience),
            ScanState::InEducation => Some(Section::Education),
            ScanState::InSummary => Some(Section::Summary),
        }
    }
}

/// One recognized section and its contiguous run of content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRun<'a> {
    pub section: Section,
    pub lines: Vec<&'a str>,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Walks the normalized lines once and yields every recognized run in
/// document order. A section that appears twice yields two runs.
pub fn scan_sections<'a>(lines: &[&'a str]) -> Vec<SectionRun<'a>> {
    let mut runs: Vec<SectionRun<'a>> = Vec::new();
    let mut state = ScanState::Seeking;

    for &line in lines {
        let lower = line.to_lowercase();

        // A repeated header for the active section is consumed in place.
        if let Some(active) = state.section() {
            if contains_any(&lower, active.triggers()) {
                continue;
            }
        }

        // A header for any other section opens its run in the same step.
        let next = Section::ALL
            .iter()
            .copied()
            .find(|section| contains_any(&lower, section.triggers()));
        if let Some(section) = next {
            state = section.state();
            runs.push(SectionRun {
                section,
                lines: Vec::new(),
            });
            continue;
        }

        match state.section() {
            Some(active) if contains_any(&lower, active.exit_keywords()) => {
                state = ScanState::Seeking;
            }
            Some(_) => {
                if let Some(run) = runs.last_mut() {
                    run.lines.push(line);
                }
            }
            None => {}
        }
    }

    runs
}

/// All content lines emitted for `section`, across every run.
pub fn section_lines<'a>(runs: &[SectionRun<'a>], section: Section) -> Vec<&'a str> {
    runs.iter()
        .filter(|run| run.section == section)
        .flat_map(|run| run.lines.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<SectionRun<'_>> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        scan_sections(&lines)
    }

    #[test]
    fn test_header_is_consumed_not_emitted() {
        let runs = scan("SKILLS\nPython, SQL");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].section, Section::Skills);
        assert_eq!(runs[0].lines, vec!["Python, SQL"]);
    }

    #[test]
    fn test_next_header_ends_run_and_opens_new_one() {
        // The Experience header must not appear as skills content.
        let runs = scan("SKILLS\nPython\nEXPERIENCE\nBuilt internal tools at Acme for years");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].section, Section::Skills);
        assert_eq!(runs[0].lines, vec!["Python"]);
        assert_eq!(runs[1].section, Section::Experience);
        assert_eq!(
            runs[1].lines,
            vec!["Built internal tools at Acme for years"]
        );
    }

    #[test]
    fn test_exit_keyword_without_new_header() {
        // "Certifications" ends the experience run but opens nothing.
        let runs = scan("EXPERIENCE\nShipped the billing rewrite\nCertifications\nAWS Certified");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].lines, vec!["Shipped the billing rewrite"]);
    }

    #[test]
    fn test_bare_work_exits_skills() {
        let runs = scan("SKILLS\nPython\nWork\nsomething else");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].lines, vec!["Python"]);
    }

    #[test]
    fn test_repeated_section_yields_second_run() {
        let runs = scan("SKILLS\nPython\nEDUCATION\nBachelor of Arts in Design\nTECHNOLOGIES\nDocker");
        let skills = section_lines(&runs, Section::Skills);
        assert_eq!(skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_repeated_header_of_active_section_is_consumed() {
        let runs = scan("SKILLS\nTechnologies\nPython");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].lines, vec!["Python"]);
    }

    #[test]
    fn test_summary_run() {
        let runs = scan("PROFILE\nSeasoned engineer who enjoys hard infrastructure problems.");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].section, Section::Summary);
        assert_eq!(runs[0].lines.len(), 1);
    }

    #[test]
    fn test_no_headers_no_runs() {
        assert!(scan("random text with no structure at all and nothing useful").is_empty());
    }

    #[test]
    fn test_content_before_any_header_is_dropped() {
        let runs = scan("Jane Doe\nAustin, TX\nSKILLS\nPython");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].lines, vec!["Python"]);
    }
}
