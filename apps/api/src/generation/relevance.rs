//! Relevance ranking: reorders a record's skills for a target role using
//! a fixed role-to-keyword table. No scoring; matched skills simply come
//! first, in their original order.

/// Role keys are matched by exact lowercased lookup. Unknown roles get an
/// empty keyword list, which keeps the record's own skill order.
const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &["javascript", "python", "react", "node.js", "typescript", "html", "css", "sql", "git", "aws"],
    ),
    (
        "data scientist",
        &["python", "machine learning", "sql", "pandas", "numpy", "tensorflow", "scikit-learn", "tableau", "r", "statistics"],
    ),
    (
        "product manager",
        &["project management", "agile", "scrum", "analytics", "user research", "roadmapping", "stakeholder management"],
    ),
    (
        "ux/ui designer",
        &["figma", "sketch", "adobe creative suite", "user research", "prototyping", "wireframing", "design systems"],
    ),
    (
        "devops engineer",
        &["docker", "kubernetes", "aws", "jenkins", "terraform", "ansible", "linux", "ci/cd", "monitoring"],
    ),
    (
        "frontend developer",
        &["javascript", "react", "vue.js", "angular", "typescript", "html", "css", "webpack", "responsive design"],
    ),
    (
        "backend developer",
        &["node.js", "python", "java", "sql", "mongodb", "rest api", "microservices", "docker", "aws"],
    ),
    (
        "full stack developer",
        &["javascript", "react", "node.js", "python", "sql", "mongodb", "html", "css", "git", "aws"],
    ),
    (
        "marketing manager",
        &["digital marketing", "seo", "social media", "analytics", "content marketing", "email marketing"],
    ),
    (
        "sales representative",
        &["crm", "lead generation", "customer relationship management", "negotiation", "communication"],
    ),
];

const MAX_SKILLS: usize = 12;

fn keywords_for(target_role: &str) -> &'static [&'static str] {
    let role = target_role.to_lowercase();
    ROLE_KEYWORDS
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

fn matches_keyword(skill: &str, keyword: &str) -> bool {
    let skill = skill.to_lowercase();
    skill.contains(keyword) || keyword.contains(skill.as_str())
}

/// Skills matching a role keyword first, then the rest, both in record
/// order. Capped at 12.
pub fn relevant_skills(skills: &[String], target_role: &str) -> Vec<String> {
    let keywords = keywords_for(target_role);

    let matched: Vec<String> = skills
        .iter()
        .filter(|skill| keywords.iter().any(|kw| matches_keyword(skill, kw)))
        .cloned()
        .collect();

    let mut ordered = if matched.is_empty() {
        skills.to_vec()
    } else {
        let rest: Vec<String> = skills
            .iter()
            .filter(|skill| !matched.contains(skill))
            .cloned()
            .collect();
        matched.into_iter().chain(rest).collect()
    };

    ordered.truncate(MAX_SKILLS);
    ordered
}
