//! Pre-render check command.
//!
//! Runs the same front matter rules as `validate`, but the way a site build
//! does: post by post, stopping at the first post that fails.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use folio_check::{discover, CheckConfig, CheckError};
use folio_hooks::{FrontMatterGuard, HookRegistry};

use crate::config::load_config;

/// Run the prerender command.
pub fn run(config_path: &Path, dir: Option<PathBuf>) -> Result<ExitCode> {
    let config = load_config(config_path)?.check_config(dir);
    let passed = execute(&config)?;

    tracing::info!("Pre-render checks passed for {} posts", passed);

    Ok(ExitCode::SUCCESS)
}

/// Check every post in order, returning how many passed.
pub fn execute(config: &CheckConfig) -> Result<usize> {
    let files = match discover(&config.content_dir, &config.extensions) {
        Ok(files) => files,
        Err(CheckError::DirectoryNotFound(dir)) => {
            bail!("{} directory not found", dir.display())
        }
        Err(e) => return Err(e.into()),
    };

    if files.is_empty() {
        tracing::warn!(
            "No posts found in {} directory",
            config.content_dir.display()
        );
        return Ok(0);
    }

    let mut registry = HookRegistry::new();
    registry.register(FrontMatterGuard::new(config.required.clone()));

    let passed = registry.pre_render_all(files.into_iter().map(|f| f.path), &config.types)?;
    Ok(passed)
}
