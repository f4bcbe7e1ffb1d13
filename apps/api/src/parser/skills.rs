//! Skills extraction: a fixed catalog matched anywhere in the text,
//! merged with tokens harvested from an explicit skills section.

/// Process-wide skill catalog, matched as case-insensitive substrings.
/// Catalog order fixes the output order of dictionary hits.
const SKILL_CATALOG: &[&str] = &[
    "javascript",
    "python",
    "react",
    "node.js",
    "typescript",
    "html",
    "css",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "machine learning",
    "data analysis",
    "figma",
    "photoshop",
    "excel",
    "project management",
    "leadership",
    "communication",
    "java",
    "c++",
    "angular",
    "vue.js",
    "mongodb",
    "postgresql",
    "redis",
    "jenkins",
    "terraform",
    "ansible",
    "linux",
    "windows",
    "macos",
    "azure",
    "google cloud",
    "firebase",
    "graphql",
    "rest api",
    "microservices",
    "devops",
    "ci/cd",
    "testing",
    "debugging",
    "optimization",
];

const MAX_SKILLS: usize = 12;
const MAX_SECTION_TOKENS: usize = 10;

fn is_separator(c: char) -> bool {
    matches!(c, ',' | '•' | '·' | '-' | '|')
}

/// Catalog matches first (catalog order), then up to the first 10 tokens
/// split out of the explicit section lines. Exact-string dedup, capped
/// at 12 entries.
pub fn extract_skills(text: &str, section_lines: &[&str]) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut skills: Vec<String> = SKILL_CATALOG
        .iter()
        .copied()
        .filter(|skill| haystack.contains(skill))
        .map(str::to_string)
        .collect();

    let tokens = section_lines
        .iter()
        .flat_map(|line| line.split(is_separator))
        .map(str::trim)
        .filter(|token| token.len() > 2);
    for token in tokens.take(MAX_SECTION_TOKENS) {
        if !skills.iter().any(|existing| existing == token) {
            skills.push(token.to_string());
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}
