// Portfolio builder: renders a single-file static HTML site from a parsed
// record, target role, and project entries. Pure templating; the output is
// what the deployer ships verbatim.

pub mod handlers;

use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::models::project::Project;
use crate::models::resume::ResumeRecord;

/// Everything the portfolio template interpolates.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioData {
    pub resume: ResumeRecord,
    pub target_role: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

const GITHUB_ICON: &str = r##"<svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M10 0C4.477 0 0 4.484 0 10.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0110 4.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.203 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.942.359.31.678.921.678 1.856 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0020 10.017C20 4.484 15.522 0 10 0z" clip-rule="evenodd"></path></svg>"##;

const LINK_ICON: &str = r##"<svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"></path></svg>"##;

/// Renders the complete portfolio document. Interpolation is verbatim;
/// the record is trusted content supplied by its owner.
pub fn render_portfolio(data: &PortfolioData) -> String {
    let resume = &data.resume;
    let first_name = resume.name.split(' ').next().unwrap_or(&resume.name);

    let about = if resume.summary.is_empty() {
        format!(
            "Passionate {} with expertise in modern technologies and a commitment to delivering exceptional results. I love building innovative solutions that make a real impact.",
            data.target_role
        )
    } else {
        resume.summary.clone()
    };

    let mut html = format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - {role}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <style>
        body {{ font-family: 'Inter', sans-serif; }}
        .gradient-bg {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }}
        .card-hover {{ transition: all 0.3s ease; }}
        .card-hover:hover {{ transform: translateY(-5px); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04); }}
    </style>
</head>
<body class="bg-gray-50">
    <nav class="fixed top-0 w-full bg-white/90 backdrop-blur-md z-50 border-b border-gray-200">
        <div class="max-w-6xl mx-auto px-4 py-4">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gray-800">{first_name}</h1>
                <div class="hidden md:flex space-x-8">
                    <a href="#about" class="text-gray-600 hover:text-purple-600 transition-colors">About</a>
                    <a href="#skills" class="text-gray-600 hover:text-purple-600 transition-colors">Skills</a>
                    <a href="#projects" class="text-gray-600 hover:text-purple-600 transition-colors">Projects</a>
                    <a href="#experience" class="text-gray-600 hover:text-purple-600 transition-colors">Experience</a>
                    <a href="#contact" class="text-gray-600 hover:text-purple-600 transition-colors">Contact</a>
                </div>
            </div>
        </div>
    </nav>

    <section class="gradient-bg min-h-screen flex items-center justify-center text-white">
        <div class="text-center max-w-4xl mx-auto px-4">
            <h1 class="text-5xl md:text-7xl font-bold mb-6">{name}</h1>
            <h2 class="text-2xl md:text-3xl font-light mb-8">{role}</h2>
            <p class="text-xl md:text-2xl mb-12 opacity-90">{location}</p>
            <div class="flex justify-center space-x-6">
                {hero_links}<a href="#contact" class="bg-white text-purple-600 px-8 py-3 rounded-full hover:bg-gray-100 transition-all duration-300 font-semibold">Get In Touch</a>
            </div>
        </div>
    </section>

    <section id="about" class="py-20 bg-white">
        <div class="max-w-6xl mx-auto px-4">
            <div class="text-center mb-16">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">About Me</h2>
                <div class="w-24 h-1 bg-purple-600 mx-auto"></div>
            </div>
            <div class="max-w-4xl mx-auto">
                <p class="text-lg text-gray-600 leading-relaxed text-center">{about}</p>
            </div>
        </div>
    </section>

    <section id="skills" class="py-20 bg-gray-50">
        <div class="max-w-6xl mx-auto px-4">
            <div class="text-center mb-16">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">Skills &amp; Technologies</h2>
                <div class="w-24 h-1 bg-purple-600 mx-auto"></div>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4">
{skills}            </div>
        </div>
    </section>
"##,
        name = resume.name,
        role = data.target_role,
        first_name = first_name,
        location = resume.location,
        hero_links = hero_links(data),
        about = about,
        skills = skills_grid(&resume.skills),
    );

    if !data.projects.is_empty() {
        html.push_str(&projects_section(&data.projects));
    }

    html.push_str(&experience_section(resume));
    html.push_str(&contact_section(resume));
    html.push_str(&format!(
        r##"    <footer class="bg-gray-800 text-white py-8">
        <div class="max-w-6xl mx-auto px-4 text-center">
            <p>&copy; {year} {name}. All rights reserved.</p>
        </div>
    </footer>

    <script>
        document.querySelectorAll('a[href^="#"]').forEach(anchor => {{
            anchor.addEventListener('click', function (e) {{
                e.preventDefault();
                document.querySelector(this.getAttribute('href')).scrollIntoView({{
                    behavior: 'smooth'
                }});
            }});
        }});
    </script>
</body>
</html>"##,
        year = Utc::now().year(),
        name = resume.name,
    ));

    html
}

fn hero_links(data: &PortfolioData) -> String {
    let mut links = String::new();
    if let Some(url) = &data.github_url {
        links.push_str(&format!(
            r#"<a href="{url}" target="_blank" class="bg-white/20 backdrop-blur-sm px-8 py-3 rounded-full hover:bg-white/30 transition-all duration-300">GitHub</a>"#
        ));
    }
    if let Some(url) = &data.linkedin_url {
        links.push_str(&format!(
            r#"<a href="{url}" target="_blank" class="bg-white/20 backdrop-blur-sm px-8 py-3 rounded-full hover:bg-white/30 transition-all duration-300">LinkedIn</a>"#
        ));
    }
    links
}

fn skills_grid(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                "                <div class=\"bg-white rounded-lg p-4 text-center shadow-sm card-hover\"><span class=\"text-gray-700 font-medium\">{skill}</span></div>\n"
            )
        })
        .collect()
}

fn projects_section(projects: &[Project]) -> String {
    let cards: String = projects.iter().map(project_card).collect();
    format!(
        r##"
    <section id="projects" class="py-20 bg-white">
        <div class="max-w-6xl mx-auto px-4">
            <div class="text-center mb-16">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">Featured Projects</h2>
                <div class="w-24 h-1 bg-purple-600 mx-auto"></div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
{cards}            </div>
        </div>
    </section>
"##
    )
}

fn project_card(project: &Project) -> String {
    let header = match &project.screenshot {
        Some(src) => format!(
            r#"<div class="h-48 bg-gray-200"><img src="{src}" alt="{title}" class="w-full h-full object-cover"></div>"#,
            title = project.title,
        ),
        None => format!(
            r#"<div class="h-48 bg-gradient-to-br from-purple-500 to-pink-500 flex items-center justify-center"><h3 class="text-white text-2xl font-bold">{}</h3></div>"#,
            project.title,
        ),
    };

    let chips: String = project
        .technologies
        .iter()
        .map(|tech| {
            format!(
                r#"<span class="px-3 py-1 bg-purple-100 text-purple-600 rounded-full text-sm">{tech}</span>"#
            )
        })
        .collect();

    let mut links = String::new();
    if let Some(url) = &project.github_url {
        links.push_str(&format!(
            r#"<a href="{url}" target="_blank" class="text-gray-600 hover:text-purple-600 transition-colors">{GITHUB_ICON}</a>"#
        ));
    }
    if let Some(url) = &project.live_url {
        links.push_str(&format!(
            r#"<a href="{url}" target="_blank" class="text-gray-600 hover:text-purple-600 transition-colors">{LINK_ICON}</a>"#
        ));
    }

    format!(
        r#"                <div class="bg-white rounded-xl shadow-lg overflow-hidden card-hover">
                    {header}
                    <div class="p-6">
                        <h3 class="text-xl font-bold text-gray-800 mb-3">{title}</h3>
                        <p class="text-gray-600 mb-4">{description}</p>
                        <div class="flex flex-wrap gap-2 mb-4">{chips}</div>
                        <div class="flex space-x-4">{links}</div>
                    </div>
                </div>
"#,
        title = project.title,
        description = project.description,
    )
}

fn experience_section(resume: &ResumeRecord) -> String {
    let experience_cards = entry_cards(&resume.experience, "Experience details will be added here.");
    let education_cards = entry_cards(&resume.education, "Education details will be added here.");
    format!(
        r##"
    <section id="experience" class="py-20 bg-gray-50">
        <div class="max-w-6xl mx-auto px-4">
            <div class="text-center mb-16">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">Experience &amp; Education</h2>
                <div class="w-24 h-1 bg-purple-600 mx-auto"></div>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div>
                    <h3 class="text-2xl font-bold text-gray-800 mb-6">Work Experience</h3>
                    <div class="space-y-6">
{experience_cards}                    </div>
                </div>
                <div>
                    <h3 class="text-2xl font-bold text-gray-800 mb-6">Education</h3>
                    <div class="space-y-6">
{education_cards}                    </div>
                </div>
            </div>
        </div>
    </section>
"##
    )
}

fn entry_cards(entries: &[String], placeholder: &str) -> String {
    let render = |text: &str| {
        format!(
            "                        <div class=\"bg-white rounded-lg p-6 shadow-sm\"><p class=\"text-gray-700\">{text}</p></div>\n"
        )
    };
    if entries.is_empty() {
        render(placeholder)
    } else {
        entries.iter().map(|entry| render(entry)).collect()
    }
}

fn contact_section(resume: &ResumeRecord) -> String {
    let phone = if resume.phone.is_empty() {
        String::new()
    } else {
        format!(
            "                    <div class=\"flex items-center justify-center space-x-3\"><span class=\"text-lg text-gray-700\">{}</span></div>\n",
            resume.phone
        )
    };
    format!(
        r##"
    <section id="contact" class="py-20 bg-white">
        <div class="max-w-6xl mx-auto px-4">
            <div class="text-center mb-16">
                <h2 class="text-4xl font-bold text-gray-800 mb-4">Get In Touch</h2>
                <div class="w-24 h-1 bg-purple-600 mx-auto"></div>
            </div>
            <div class="max-w-2xl mx-auto text-center">
                <p class="text-lg text-gray-600 mb-8">I'm always interested in new opportunities and collaborations. Let's connect!</p>
                <div class="space-y-4">
                    <div class="flex items-center justify-center space-x-3"><a href="mailto:{email}" class="text-lg text-gray-700 hover:text-purple-600 transition-colors">{email}</a></div>
{phone}                    <div class="flex items-center justify-center space-x-3"><span class="text-lg text-gray-700">{location}</span></div>
                </div>
            </div>
        </div>
    </section>
"##,
        email = resume.email,
        location = resume.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> PortfolioData {
        PortfolioData {
            resume: ResumeRecord {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "Austin, TX".to_string(),
                summary: "Backend engineer who ships reliable systems.".to_string(),
                skills: vec!["python".to_string(), "sql".to_string()],
                experience: vec!["Software Engineer at Acme Corp".to_string()],
                education: vec!["BSc Computer Science".to_string()],
                raw_text: String::new(),
            },
            target_role: "Software Engineer".to_string(),
            projects: vec![],
            github_url: None,
            linkedin_url: None,
        }
    }

    #[test]
    fn test_renders_name_role_and_skills() {
        let html = render_portfolio(&data());
        assert!(html.contains("<title>Jane Doe - Software Engineer</title>"));
        assert!(html.contains("python"));
        assert!(html.contains("sql"));
        assert!(html.contains("Software Engineer at Acme Corp"));
    }

    #[test]
    fn test_about_falls_back_when_summary_empty() {
        let mut d = data();
        d.resume.summary.clear();
        let html = render_portfolio(&d);
        assert!(html.contains("Passionate Software Engineer with expertise"));
    }

    #[test]
    fn test_projects_section_only_when_projects_exist() {
        let html = render_portfolio(&data());
        assert!(!html.contains("Featured Projects"));

        let mut d = data();
        d.projects.push(Project {
            id: uuid::Uuid::new_v4(),
            title: "Crate Tracker".to_string(),
            description: "Tracks crates".to_string(),
            technologies: vec!["Rust".to_string()],
            github_url: Some("https://github.com/x/y".to_string()),
            live_url: None,
            screenshot: None,
        });
        let html = render_portfolio(&d);
        assert!(html.contains("Featured Projects"));
        assert!(html.contains("Crate Tracker"));
        assert!(html.contains("https://github.com/x/y"));
    }

    #[test]
    fn test_hero_links_are_conditional() {
        let html = render_portfolio(&data());
        assert!(!html.contains(">GitHub</a>"));

        let mut d = data();
        d.github_url = Some("https://github.com/janedoe".to_string());
        d.linkedin_url = Some("https://linkedin.com/in/janedoe".to_string());
        let html = render_portfolio(&d);
        assert!(html.contains(">GitHub</a>"));
        assert!(html.contains(">LinkedIn</a>"));
    }

    #[test]
    fn test_placeholders_for_empty_experience_and_education() {
        let mut d = data();
        d.resume.experience.clear();
        d.resume.education.clear();
        let html = render_portfolio(&d);
        assert!(html.contains("Experience details will be added here."));
        assert!(html.contains("Education details will be added here."));
    }

    #[test]
    fn test_phone_row_omitted_when_absent() {
        let mut d = data();
        d.resume.phone.clear();
        let html = render_portfolio(&d);
        assert!(!html.contains("(555) 123-4567"));
    }

    #[test]
    fn test_footer_carries_current_year() {
        let html = render_portfolio(&data());
        let year = Utc::now().year().to_string();
        assert!(html.contains(&format!("&copy; {year} Jane Doe")));
    }
}
