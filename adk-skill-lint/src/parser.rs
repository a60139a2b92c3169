use crate::error::{ValidationError, ValidationResult};
use crate::model::{Frontmatter, SkillManifest};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the manifest file inside a skill root.
pub const MANIFEST_FILE: &str = "SKILL.md";

const DELIMITER: &str = "---";

/// Reads `<root>/SKILL.md` and extracts its frontmatter and body.
pub fn load_skill_manifest(root: &Path) -> ValidationResult<SkillManifest> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
        return Err(ValidationError::MissingFile(root.to_path_buf()));
    }

    let bytes = fs::read(&path).map_err(|e| ValidationError::UnreadableFile(e.to_string()))?;
    let content =
        String::from_utf8(bytes).map_err(|e| ValidationError::UnreadableFile(e.to_string()))?;
    debug!(path = %path.display(), bytes = content.len(), "read skill manifest");

    parse_skill_markdown(&content)
}

/// Splits manifest text into a YAML header and a Markdown body.
///
/// The header sits between the first two `---` delimiters. Everything after
/// the second delimiter is body, including any further `---` sequences.
pub fn parse_skill_markdown(content: &str) -> ValidationResult<SkillManifest> {
    let content = content.trim_start();
    if !content.starts_with(DELIMITER) {
        return Err(ValidationError::MissingFrontmatter);
    }

    let mut parts = content.splitn(3, DELIMITER);
    let (Some(_), Some(header), Some(body)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::UnterminatedFrontmatter);
    };

    let frontmatter = match serde_yaml::from_str::<Value>(header.trim())? {
        Value::Mapping(fields) => Frontmatter::new(fields),
        Value::Null => Frontmatter::default(),
        _ => {
            return Err(ValidationError::InvalidYaml(
                "frontmatter must be a YAML mapping".to_string(),
            ));
        }
    };

    Ok(SkillManifest { frontmatter, body: body.trim().to_string() })
}
