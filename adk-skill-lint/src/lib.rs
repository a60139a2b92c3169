//! `adk-skill-lint` checks an AgentSkills package before it is shipped.
//!
//! A skill package is a directory holding a `SKILL.md` manifest (YAML
//! frontmatter followed by Markdown instructions) and optional `scripts/`,
//! `references/`, and `assets/` directories.
//!
//! # Key Features
//! - **Extraction**: Splits `SKILL.md` into frontmatter and body, failing fast on malformed headers.
//! - **Rules**: Required fields, name format, description length, license, metadata, allowed tools, body length.
//! - **Conventions**: Flags convention directories that exist but hold nothing useful.
//! - **Reporting**: Findings grouped by severity, as console text or JSON.
//!
//! # Example
//! ```no_run
//! use adk_skill_lint::{ValidatorConfig, validate_skill};
//! use std::path::Path;
//!
//! let report = validate_skill(Path::new("skills/code-review"), &ValidatorConfig::default());
//! print!("{}", report.render_text());
//! std::process::exit(i32::from(report.exit_code()));
//! ```

#![doc = include_str!("../README.md")]

mod config;
mod error;
mod layout;
mod model;
mod parser;
mod report;
mod rules;
mod telemetry;
mod validate;

pub use config::{KNOWN_LICENSES, ValidatorConfig};
pub use error::{ValidationError, ValidationResult};
pub use layout::{DirState, ResourceDir, SkillLayout};
pub use model::{FieldValue, Finding, Frontmatter, Severity, SkillManifest, render_value};
pub use parser::{MANIFEST_FILE, load_skill_manifest, parse_skill_markdown};
pub use report::{ReportSummary, ResourceCounts, SkillReport};
pub use rules::{allowed_tools, is_valid_name, run_rules};
pub use telemetry::{init_logging, level_for_verbosity};
pub use validate::{skill_name, validate_skill};
