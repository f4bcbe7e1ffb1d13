//! Content generation: four template artifacts synthesized from a parsed
//! record, a target role, and optional project entries. Fully
//! deterministic; every record field has a template fallback, so
//! generation always succeeds even for a mostly-empty record.

use serde::{Deserialize, Serialize};

use crate::generation::relevance::relevant_skills;
use crate::models::project::Project;
use crate::models::resume::ResumeRecord;

/// The full set of generated artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub tailored_resume: String,
    pub cover_letter: String,
    pub linkedin_bio: String,
    pub github_bio: String,
}

pub fn generate_content(
    record: &ResumeRecord,
    target_role: &str,
    projects: &[Project],
) -> GeneratedContent {
    GeneratedContent {
        tailored_resume: tailored_resume(record, target_role, projects),
        cover_letter: cover_letter(record, target_role),
        linkedin_bio: linkedin_bio(record, target_role),
        github_bio: github_bio(record, target_role),
    }
}

fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// First sentence of the summary, period restored.
fn first_sentence(summary: &str) -> String {
    format!("{}.", summary.split('.').next().unwrap_or(""))
}

fn top(skills: &[String], n: usize, separator: &str) -> String {
    skills
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

const STOCK_EXPERIENCE: &str = "\u{2022} Developed and maintained applications using modern technologies\n\u{2022} Collaborated with cross-functional teams to deliver projects on time\n\u{2022} Implemented best practices for code quality and performance optimization\n\u{2022} Contributed to technical decision-making and architecture planning";

const STOCK_ACHIEVEMENTS: &str = "\u{2022} Successfully delivered projects that improved efficiency and user experience\n\u{2022} Demonstrated strong problem-solving skills in challenging technical environments\n\u{2022} Maintained high code quality standards and contributed to team knowledge sharing\n\u{2022} Adapted quickly to new technologies and methodologies";

fn tailored_resume(record: &ResumeRecord, target_role: &str, projects: &[Project]) -> String {
    let skills = relevant_skills(&record.skills, target_role);

    let summary = if record.summary.is_empty() {
        format!(
            "Dedicated {target_role} with expertise in {}. Proven track record of delivering high-quality solutions and driving results in fast-paced environments. Passionate about leveraging technology to solve complex problems and create meaningful impact.",
            top(&skills, 3, ", ")
        )
    } else {
        record.summary.clone()
    };

    let experience = if record.experience.is_empty() {
        STOCK_EXPERIENCE.to_string()
    } else {
        record.experience.join("\n\n")
    };

    let mut content = format!(
        "{name}\n{target_role}\n{email} | {phone} | {location}\n\nPROFESSIONAL SUMMARY\n{summary}\n\nCORE COMPETENCIES\n{competencies}\n\nPROFESSIONAL EXPERIENCE\n{experience}",
        name = record.name,
        email = record.email,
        phone = record.phone,
        location = record.location,
        competencies = skills.join(" \u{2022} "),
    );

    if !projects.is_empty() {
        let blocks: Vec<String> = projects.iter().map(project_block).collect();
        content.push_str("\n\nKEY PROJECTS\n");
        content.push_str(&blocks.join("\n\n"));
    }

    let education = if record.education.is_empty() {
        "Education details to be added".to_string()
    } else {
        record.education.join("\n")
    };
    content.push_str(&format!(
        "\n\nEDUCATION\n{education}\n\nKEY ACHIEVEMENTS\n{STOCK_ACHIEVEMENTS}"
    ));

    content
}

fn project_block(project: &Project) -> String {
    let mut block = format!(
        "{}\n{}\nTechnologies: {}",
        project.title,
        project.description,
        project.technologies.join(", ")
    );
    if let Some(url) = &project.github_url {
        block.push_str(&format!("\nGitHub: {url}"));
    }
    if let Some(url) = &project.live_url {
        block.push_str(&format!("\nLive: {url}"));
    }
    block
}

fn cover_letter(record: &ResumeRecord, target_role: &str) -> String {
    let skills = relevant_skills(&record.skills, target_role);

    let opener = if record.summary.is_empty() {
        format!("As a passionate {target_role}, I bring a unique combination of technical expertise and problem-solving abilities.")
    } else {
        first_sentence(&record.summary)
    };

    format!(
        "Dear Hiring Manager,\n\nI am writing to express my strong interest in the {target_role} position at your organization. With my background in {top3}, I am excited about the opportunity to contribute to your team's continued success.\n\n{opener} My experience has enabled me to tackle complex challenges while maintaining a focus on delivering high-quality solutions that drive business value.\n\nWhat particularly excites me about this opportunity is the chance to leverage my expertise in {top2} to make a meaningful impact. I am confident that my technical skills, combined with my dedication to continuous learning and collaboration, would make me a valuable addition to your team.\n\nKey highlights of my qualifications include:\n\u{2022} Proficiency in {top4}\n\u{2022} Strong track record of delivering projects on time and within scope\n\u{2022} Excellent communication and teamwork abilities\n\u{2022} Passion for staying current with industry trends and best practices\n\nI would welcome the opportunity to discuss how my experience and enthusiasm can contribute to your organization's objectives. Thank you for your consideration, and I look forward to hearing from you.\n\nBest regards,\n{name}",
        top3 = top(&skills, 3, ", "),
        top2 = top(&skills, 2, " and "),
        top4 = top(&skills, 4, ", "),
        name = record.name,
    )
}

fn linkedin_bio(record: &ResumeRecord, target_role: &str) -> String {
    let skills = relevant_skills(&record.skills, target_role);

    let intro = if record.summary.is_empty() {
        format!("Passionate {target_role} with expertise in modern technologies and a commitment to delivering exceptional results.")
    } else {
        first_sentence(&record.summary)
    };

    format!(
        "{target_role} | {top3} | Building innovative solutions\n\n{intro} Currently seeking new opportunities to drive impact in {role_lower} roles.\n\n\u{1F680} Expertise: {top5}\n\u{1F4A1} Passionate about continuous learning and emerging technologies\n\u{1F91D} Always open to connecting with fellow professionals\n\u{1F3AF} Focused on delivering solutions that create meaningful business value\n\u{1F4CD} {location}\n\nLet's connect and explore how we can collaborate to build something amazing together!\n\n#{hashtag} #Technology #Innovation #ProfessionalDevelopment",
        top3 = top(&skills, 3, " \u{2022} "),
        role_lower = target_role.to_lowercase(),
        top5 = top(&skills, 5, ", "),
        location = record.location,
        hashtag = compact_role(target_role),
    )
}

fn github_bio(record: &ResumeRecord, target_role: &str) -> String {
    let skills = relevant_skills(&record.skills, target_role);

    let intro = if record.summary.is_empty() {
        format!("Passionate {target_role} with expertise in modern technologies and a love for building innovative solutions.")
    } else {
        first_sentence(&record.summary)
    };

    format!(
        "# Hi there! \u{1F44B} I'm {first}\n\n## {target_role} | {top3}\n\n{intro}\n\n### \u{1F52D} Currently working on\n- Building scalable applications using {top2}\n- Exploring new technologies and best practices\n- Contributing to open source projects\n\n### \u{1F331} Always learning\n- Latest trends in {role_lower} development\n- Best practices for code quality and performance\n- New frameworks and tools in the tech ecosystem\n\n### \u{1F4AC} Ask me about\n{top4}, system architecture, and best practices\n\n### \u{1F4EB} How to reach me\n- Email: {email}\n- Location: {location}\n\n### \u{26A1} Fun fact\nI love turning complex problems into elegant, scalable solutions!\n\n---\n\n**\u{1F6E0}\u{FE0F} Tech Stack:** {all_skills}\n\n**\u{1F3AF} Focus Areas:** Clean Code \u{2022} Performance Optimization \u{2022} User Experience \u{2022} Continuous Learning",
        first = first_name(&record.name),
        top3 = top(&skills, 3, " \u{2022} "),
        top2 = top(&skills, 2, " and "),
        role_lower = target_role.to_lowercase(),
        top4 = top(&skills, 4, ", "),
        email = record.email,
        location = record.location,
        all_skills = skills.join(" | "),
    )
}

/// Role with all whitespace removed, for the hashtag line.
fn compact_role(target_role: &str) -> String {
    target_role.split_whitespace().collect()
}
