//! Validation reports and their console/JSON rendering.

use crate::layout::SkillLayout;
use crate::model::{Finding, Frontmatter, Severity, render_value};
use serde::Serialize;
use std::fmt::Write;

const RULE: &str = "============================================================";

/// Resource counts shown in the pass summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceCounts {
    pub scripts: usize,
    pub references: usize,
    pub assets: usize,
}

impl From<&SkillLayout> for ResourceCounts {
    fn from(layout: &SkillLayout) -> Self {
        Self {
            scripts: layout.scripts.count(),
            references: layout.references.count(),
            assets: layout.assets.count(),
        }
    }
}

/// Finding totals by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

/// Outcome of validating one skill package.
#[derive(Debug, Clone)]
pub struct SkillReport {
    /// Directory name of the skill root.
    pub skill: String,
    /// Findings in the order the checks produced them.
    pub findings: Vec<Finding>,
    /// Parsed header, present only when extraction succeeded.
    pub frontmatter: Option<Frontmatter>,
    pub resources: ResourceCounts,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    skill: &'a str,
    passed: bool,
    findings: &'a [Finding],
    summary: ReportSummary,
    resources: ResourceCounts,
}

impl SkillReport {
    pub fn with_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.severity == severity).collect()
    }

    pub fn errors(&self) -> Vec<&Finding> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&Finding> {
        self.with_severity(Severity::Info)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            errors: self.errors().len(),
            warnings: self.warnings().len(),
            info: self.infos().len(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// `1` when any error was found, `0` otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_errors())
    }

    /// Human-readable report, as printed by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Validating skill: {}", self.skill);
        let _ = writeln!(out, "{RULE}");

        if self.is_clean() {
            self.render_pass(&mut out);
        } else {
            self.render_issues(&mut out);
        }
        out
    }

    fn render_pass(&self, out: &mut String) {
        let _ = writeln!(out, "[PASS] Skill passed all validation checks!");
        let _ = writeln!(out, "\nSkill Summary:");

        let field = |key: &str| {
            self.frontmatter
                .as_ref()
                .and_then(|fm| fm.get_raw(key))
                .map(render_value)
                .unwrap_or_else(|| "N/A".to_string())
        };
        let _ = writeln!(out, "   Name: {}", field("name"));
        let _ = writeln!(out, "   Description: {}", field("description"));

        if let Some(fm) = &self.frontmatter {
            if fm.contains("license") {
                let _ = writeln!(out, "   License: {}", field("license"));
            }
            for (key, value) in fm.metadata_entries().unwrap_or_default() {
                let _ = writeln!(out, "   {}: {}", capitalize(&key), value);
            }
        }

        let _ = writeln!(out, "\nResources:");
        let _ = writeln!(out, "   Scripts: {}", self.resources.scripts);
        let _ = writeln!(out, "   References: {}", self.resources.references);
    }

    fn render_issues(&self, out: &mut String) {
        let _ = writeln!(out, "Issues found:");

        let groups = [
            ("[CRITICAL ERRORS]:", self.errors()),
            ("[WARNINGS]:", self.warnings()),
            ("[INFO]:", self.infos()),
        ];
        for (header, findings) in groups {
            if findings.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{header}");
            for finding in findings {
                let _ = writeln!(out, "  {finding}");
            }
        }

        let summary = self.summary();
        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(
            out,
            "Total: {} errors, {} warnings, {} info.",
            summary.errors, summary.warnings, summary.info
        );
    }

    /// Machine-readable report.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonReport {
            skill: &self.skill,
            passed: !self.has_errors(),
            findings: &self.findings,
            summary: self.summary(),
            resources: self.resources,
        })
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(findings: Vec<Finding>) -> SkillReport {
        SkillReport {
            skill: "demo".to_string(),
            findings,
            frontmatter: None,
            resources: ResourceCounts::default(),
        }
    }

    #[test]
    fn partitions_preserve_order() {
        let report = report(vec![
            Finding::warning("w1"),
            Finding::error("e1"),
            Finding::info("i1"),
            Finding::warning("w2"),
        ]);
        let warnings: Vec<_> = report.warnings().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(warnings, vec!["w1", "w2"]);
        assert_eq!(report.summary(), ReportSummary { errors: 1, warnings: 2, info: 1 });
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn warnings_only_exit_zero() {
        let report = report(vec![Finding::warning("w"), Finding::info("i")]);
        assert!(!report.has_errors());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn omits_empty_groups() {
        let text = report(vec![Finding::warning("short body")]).render_text();
        assert!(text.starts_with("Validating skill: demo\n"));
        assert!(text.contains("[WARNINGS]:\n  WARNING: short body\n"));
        assert!(!text.contains("[CRITICAL ERRORS]"));
        assert!(!text.contains("[INFO]"));
        assert!(text.ends_with("Total: 0 errors, 1 warnings, 0 info.\n"));
    }

    #[test]
    fn groups_print_in_severity_order() {
        let text =
            report(vec![Finding::info("i"), Finding::warning("w"), Finding::error("e")]).render_text();
        let errors = text.find("[CRITICAL ERRORS]").unwrap();
        let warnings = text.find("[WARNINGS]").unwrap();
        let info = text.find("[INFO]").unwrap();
        assert!(errors < warnings && warnings < info);
    }

    #[test]
    fn pass_summary_lists_metadata() {
        let fields = serde_yaml::from_str(
            "name: demo\ndescription: Demo skill\nlicense: MIT\nmetadata:\n  author: jane\n  VERSION: '1.0'\n",
        )
        .unwrap();
        let mut report = report(Vec::new());
        report.frontmatter = Some(Frontmatter::new(fields));
        report.resources = ResourceCounts { scripts: 2, references: 1, assets: 0 };

        let text = report.render_text();
        assert!(text.contains("[PASS] Skill passed all validation checks!"));
        assert!(text.contains("   Name: demo\n   Description: Demo skill\n   License: MIT\n"));
        assert!(text.contains("   Author: jane\n   Version: 1.0\n"));
        assert!(text.contains("   Scripts: 2\n   References: 1\n"));
    }

    #[test]
    fn capitalizes_like_a_title() {
        assert_eq!(capitalize("author"), "Author");
        assert_eq!(capitalize("lastUpdated"), "Lastupdated");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn json_report_carries_totals() {
        let json = report(vec![Finding::error("boom")]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["findings"][0]["severity"], "ERROR");
    }
}
