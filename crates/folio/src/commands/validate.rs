//! Front matter validation command.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::ValueEnum;
use folio_check::{CheckConfig, Validator};

use crate::config::load_config;

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Run the validate command.
pub fn run(config_path: &Path, dir: Option<PathBuf>, format: OutputFormat) -> Result<ExitCode> {
    let config = load_config(config_path)?.check_config(dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = execute(config, format, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(ExitCode::from(code))
}

/// Validate and write the report to `out`, returning the exit status.
pub fn execute(config: CheckConfig, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    tracing::debug!("Validating posts in {}", config.content_dir.display());

    let report = Validator::new(config)
        .run()
        .context("Failed to scan content directory")?;

    match format {
        OutputFormat::Human => report.write_human(out).context("Failed to write report")?,
        OutputFormat::Json => report.write_json(out)?,
    }

    Ok(report.exit_code())
}
