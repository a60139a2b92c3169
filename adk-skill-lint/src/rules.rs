//! The rule engine.
//!
//! Every check runs on every invocation, in a fixed order, and appends at most
//! one finding. No rule short-circuits another.

use crate::config::ValidatorConfig;
use crate::layout::{DirState, ResourceDir, SkillLayout};
use crate::model::{FieldValue, Finding, Frontmatter, SkillManifest, render_value};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("name pattern is a valid regex"));

/// Runs all frontmatter, body, and directory rules.
pub fn run_rules(
    manifest: &SkillManifest,
    layout: &SkillLayout,
    config: &ValidatorConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let fm = &manifest.frontmatter;

    check_name(fm, &mut findings);
    check_description(fm, config, &mut findings);
    check_license(fm, config, &mut findings);
    check_metadata(fm, &mut findings);
    check_allowed_tools(fm, &mut findings);
    check_body(&manifest.body, config, &mut findings);
    check_directories(layout, &mut findings);

    debug!(count = findings.len(), "rules evaluated");
    findings
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

fn check_name(fm: &Frontmatter, findings: &mut Vec<Finding>) {
    let Some(value) = fm.get_raw("name") else {
        findings.push(Finding::error("'name' field is required in frontmatter"));
        return;
    };

    let valid = matches!(FieldValue::from(value), FieldValue::Text(name) if is_valid_name(name));
    if !valid {
        findings.push(Finding::warning(format!(
            "'name' should be lowercase with hyphens only: {}",
            render_value(value)
        )));
    }
}

fn check_description(fm: &Frontmatter, config: &ValidatorConfig, findings: &mut Vec<Finding>) {
    match fm.get("description") {
        None => findings.push(Finding::error("'description' field is required in frontmatter")),
        Some(FieldValue::Text(desc)) => {
            let len = desc.chars().count();
            if len > config.max_description_chars {
                findings.push(Finding::warning(format!(
                    "'description' is too long ({len} chars, max {} recommended)",
                    config.max_description_chars
                )));
            }
        }
        Some(_) => findings.push(Finding::warning("'description' should be a string")),
    }
}

fn check_license(fm: &Frontmatter, config: &ValidatorConfig, findings: &mut Vec<Finding>) {
    let Some(value) = fm.get_raw("license") else {
        return;
    };

    let known = matches!(FieldValue::from(value), FieldValue::Text(id) if config.is_known_license(id));
    if !known {
        findings.push(Finding::info(format!(
            "License '{}' is not a common SPDX identifier",
            render_value(value)
        )));
    }
}

fn check_metadata(fm: &Frontmatter, findings: &mut Vec<Finding>) {
    match fm.get("metadata") {
        None | Some(FieldValue::Mapping(_)) => {}
        Some(_) => findings.push(Finding::warning("'metadata' should be a dictionary")),
    }
}

fn check_allowed_tools(fm: &Frontmatter, findings: &mut Vec<Finding>) {
    let Some(value) = fm.get("allowed-tools") else {
        return;
    };

    if allowed_tools(value).is_none() {
        findings.push(Finding::warning(
            "'allowed-tools' should be a list or space-separated string",
        ));
    }
}

/// Normalizes `allowed-tools` into a tool list. A single string is split on
/// whitespace; any sequence is accepted as-is.
pub fn allowed_tools(value: FieldValue<'_>) -> Option<Vec<String>> {
    match value {
        FieldValue::Text(text) => Some(text.split_whitespace().map(str::to_string).collect()),
        FieldValue::Sequence(items) => Some(items.iter().map(render_value).collect()),
        FieldValue::Mapping(_) | FieldValue::Other(_) => None,
    }
}

// An empty body trips both checks; that double report is intentional.
fn check_body(body: &str, config: &ValidatorConfig, findings: &mut Vec<Finding>) {
    let len = body.trim().chars().count();
    if len == 0 {
        findings.push(Finding::warning("SKILL.md has no content after frontmatter"));
    }
    if len < config.min_body_chars {
        findings.push(Finding::warning(format!(
            "SKILL.md content is very short (< {} chars)",
            config.min_body_chars
        )));
    }
}

fn check_directories(layout: &SkillLayout, findings: &mut Vec<Finding>) {
    for dir in ResourceDir::ALL {
        if layout.state(dir) == DirState::Empty {
            findings.push(Finding::info(dir.empty_message()));
        }
    }
}
