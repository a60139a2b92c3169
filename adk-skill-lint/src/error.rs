use std::path::PathBuf;

/// Failures that stop a validation run before any rule can be evaluated.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("SKILL.md not found in {0}")]
    MissingFile(PathBuf),

    #[error("Cannot read SKILL.md: {0}")]
    UnreadableFile(String),

    #[error("SKILL.md must start with '---' (YAML frontmatter)")]
    MissingFrontmatter,

    #[error("SKILL.md must have closing '---' for frontmatter")]
    UnterminatedFrontmatter,

    #[error("Invalid YAML frontmatter: {0}")]
    InvalidYaml(String),

    #[error("Cannot list '{path}': {message}")]
    DirectoryListing { path: PathBuf, message: String },
}

impl From<serde_yaml::Error> for ValidationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidYaml(err.to_string())
    }
}

impl From<walkdir::Error> for ValidationError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        Self::DirectoryListing { path, message: err.to_string() }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
