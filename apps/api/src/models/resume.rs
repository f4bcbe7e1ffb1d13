use serde::{Deserialize, Serialize};

/// Structured candidate profile extracted from a résumé.
///
/// A pure value: no identity beyond its contents, immutable once built.
/// Every field has a defined default so the record is always fully
/// populated; absence of a field is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name, or the literal `"Name Not Found"` sentinel.
    pub name: String,
    /// First email-shaped match in the document; empty if absent.
    pub email: String,
    /// First phone-shaped match in the document; empty if absent.
    pub phone: String,
    /// First "City, State" shaped match surviving the noise filter; empty if absent.
    pub location: String,
    /// Space-joined summary paragraph; empty if absent.
    pub summary: String,
    /// Deduplicated skills, dictionary matches first. At most 12.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Verbatim experience lines, each longer than 20 chars. At most 8.
    #[serde(default)]
    pub experience: Vec<String>,
    /// Verbatim education lines, each longer than 10 chars. At most 5.
    #[serde(default)]
    pub education: Vec<String>,
    /// Exact original input, retained for traceability.
    pub raw_text: String,
}
