mod cli;

use adk_skill_lint::{ValidatorConfig, init_logging, level_for_verbosity, validate_skill};
use anyhow::Result;
use clap::Parser;
use cli::{Cli, OutputFormat, USAGE};
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(level_for_verbosity(cli.verbose));

    let Some(path) = cli.path.as_deref() else {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    if let Some(message) = check_path(path) {
        println!("{message}");
        return Ok(ExitCode::FAILURE);
    }

    let report = validate_skill(path, &ValidatorConfig::default());
    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(ExitCode::from(report.exit_code()))
}

fn check_path(path: &Path) -> Option<String> {
    if !path.exists() {
        Some(format!("ERROR: Path does not exist: {}", path.display()))
    } else if !path.is_dir() {
        Some(format!("ERROR: Path is not a directory: {}", path.display()))
    } else {
        None
    }
}
