//! Rule thresholds.

/// License identifiers accepted without an informational note.
pub const KNOWN_LICENSES: &[&str] = &["MIT", "Apache-2.0", "BSD-3-Clause", "GPL-3.0", "ISC"];

/// Tunables for the rule engine. `Default` gives the standard AgentSkills limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Longest recommended `description`, in characters.
    pub max_description_chars: usize,
    /// Shortest body, in characters, before it is flagged as very short.
    pub min_body_chars: usize,
    /// Exact, case-sensitive license identifiers that pass silently.
    pub known_licenses: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_description_chars: 200,
            min_body_chars: 100,
            known_licenses: KNOWN_LICENSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ValidatorConfig {
    pub fn is_known_license(&self, license: &str) -> bool {
        self.known_licenses.iter().any(|known| known == license)
    }
}
