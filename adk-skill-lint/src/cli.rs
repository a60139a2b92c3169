use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: adk-skill-lint <skill-directory>";

#[derive(Parser, Debug)]
#[command(name = "adk-skill-lint")]
#[command(about = "Validate an AgentSkills package (SKILL.md and convention directories)", long_about = None)]
pub struct Cli {
    /// Path to the skill directory containing SKILL.md
    pub path: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "ADK_SKILL_LINT_FORMAT")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
