// Content generation: role-aware skill ranking plus the four template
// artifacts (tailored resume, cover letter, LinkedIn bio, GitHub README).
// Pure template logic; consumes a ResumeRecord and never calls back into
// the parsing engine.

pub mod content;
pub mod handlers;
pub mod relevance;

pub use content::{generate_content, GeneratedContent};
