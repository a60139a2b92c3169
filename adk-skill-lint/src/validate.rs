use crate::config::ValidatorConfig;
use crate::error::ValidationResult;
use crate::layout::SkillLayout;
use crate::model::{Finding, Frontmatter};
use crate::parser::load_skill_manifest;
use crate::report::{ResourceCounts, SkillReport};
use crate::rules::run_rules;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Validates the skill package rooted at `root`.
///
/// Extraction failures and directory listing errors are terminal: the
/// returned report then holds exactly one error finding and no frontmatter.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn validate_skill(root: &Path, config: &ValidatorConfig) -> SkillReport {
    let skill = skill_name(root);

    match evaluate(root, config) {
        Ok((findings, frontmatter, layout)) => {
            info!(skill = %skill, findings = findings.len(), "skill validated");
            SkillReport {
                skill,
                findings,
                frontmatter: Some(frontmatter),
                resources: ResourceCounts::from(&layout),
            }
        }
        Err(err) => {
            debug!(skill = %skill, error = %err, "skill validation aborted");
            SkillReport {
                skill,
                findings: vec![Finding::error(err.to_string())],
                frontmatter: None,
                resources: ResourceCounts::default(),
            }
        }
    }
}

fn evaluate(
    root: &Path,
    config: &ValidatorConfig,
) -> ValidationResult<(Vec<Finding>, Frontmatter, SkillLayout)> {
    let manifest = load_skill_manifest(root)?;
    let layout = SkillLayout::scan(root)?;
    let findings = run_rules(&manifest, &layout, config);
    Ok((findings, manifest.frontmatter, layout))
}

/// Display name of a skill: the final component of its root directory.
pub fn skill_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|abs| abs.file_name().map(|name| name.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use std::fs;

    const BODY: &str = "Review every controller for missing guards, validate DTOs with class-validator, \
        and flag services that bypass the repository layer.";

    fn write_skill(root: &Path, header: &str, body: &str) {
        fs::write(root.join("SKILL.md"), format!("---\n{header}\n---\n{body}\n")).unwrap();
    }

    #[test]
    fn clean_skill_passes() {
        let temp = tempfile::tempdir().unwrap();
        write_skill(temp.path(), "name: code-review\ndescription: Reviews code", BODY);

        let report = validate_skill(temp.path(), &ValidatorConfig::default());
        assert!(report.is_clean(), "{:?}", report.findings);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.frontmatter.as_ref().and_then(Frontmatter::name), Some("code-review"));
    }

    #[test]
    fn missing_manifest_is_reported_alone() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("scripts")).unwrap();

        let report = validate_skill(temp.path(), &ValidatorConfig::default());
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, Severity::Error);
        assert!(report.findings[0].message.starts_with("SKILL.md not found in"));
        assert!(report.frontmatter.is_none());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn invalid_yaml_short_circuits_rules() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("SKILL.md"), "---\nname: [oops\n---\n").unwrap();

        let report = validate_skill(temp.path(), &ValidatorConfig::default());
        assert_eq!(report.findings.len(), 1);
        assert!(report.findings[0].message.starts_with("Invalid YAML frontmatter"));
    }

    #[test]
    fn empty_scripts_dir_is_info_and_counts_zero() {
        let temp = tempfile::tempdir().unwrap();
        write_skill(temp.path(), "name: code-review\ndescription: Reviews code", BODY);
        fs::create_dir(temp.path().join("scripts")).unwrap();

        let report = validate_skill(temp.path(), &ValidatorConfig::default());
        assert_eq!(report.findings, vec![Finding::info("'scripts/' directory exists but is empty")]);
        assert_eq!(report.resources.scripts, 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_convention_directory_is_terminal() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        write_skill(temp.path(), "name: code-review\ndescription: Reviews code", BODY);
        let scripts = temp.path().join("scripts");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join("run.sh"), "#!/bin/sh\n").unwrap();
        fs::set_permissions(&scripts, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through mode 000.
        if fs::read_dir(&scripts).is_ok() {
            fs::set_permissions(&scripts, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let report = validate_skill(temp.path(), &ValidatorConfig::default());
        fs::set_permissions(&scripts, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(report.findings.len(), 1, "{:?}", report.findings);
        assert_eq!(report.findings[0].severity, Severity::Error);
        assert!(report.findings[0].message.starts_with("Cannot list"));
        assert!(report.frontmatter.is_none());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn skill_name_uses_last_component() {
        assert_eq!(skill_name(Path::new("/tmp/skills/nestjs-code-reviewer")), "nestjs-code-reviewer");
    }
}
