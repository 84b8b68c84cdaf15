//! Folio CLI - front matter validation for static blog and portfolio sites.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::validate::OutputFormat;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Front matter validation for static blog and portfolio sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the front matter of every post (default)
    Validate {
        /// Content directory (defaults to config or "_posts")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Check posts the way a site build does, stopping at the first failure
    Prerender {
        /// Content directory (defaults to config or "_posts")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Create folio.toml and a welcome post
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Validate {
        dir: None,
        format: OutputFormat::Human,
    });

    match command {
        Commands::Validate { dir, format } => commands::validate::run(&cli.config, dir, format),
        Commands::Prerender { dir } => commands::prerender::run(&cli.config, dir),
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
