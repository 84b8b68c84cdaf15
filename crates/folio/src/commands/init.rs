//! Initialize a folio site in the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let today = Local::now().date_naive();
    let created = scaffold(Path::new("."), config_path, today, yes)?;

    for path in &created {
        tracing::info!("Created {}", path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio' to validate your posts.");

    Ok(())
}

/// Write the default config and a welcome post under `root`.
///
/// Existing files are left alone unless `overwrite` is set. Returns the
/// files that were written.
pub fn scaffold(
    root: &Path,
    config_path: &Path,
    today: NaiveDate,
    overwrite: bool,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    let config_path = root.join(config_path);
    if !config_path.exists() || overwrite {
        fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        created.push(config_path);
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let posts_dir = root.join("_posts");
    fs::create_dir_all(&posts_dir).context("Failed to create _posts directory")?;

    let date = today.format("%Y-%m-%d").to_string();
    let welcome_path = posts_dir.join(format!("{date}-welcome.md"));
    if !welcome_path.exists() || overwrite {
        fs::write(&welcome_path, DEFAULT_POST.replace("{date}", &date))
            .with_context(|| format!("Failed to write {}", welcome_path.display()))?;
        created.push(welcome_path);
    }

    Ok(created)
}

const DEFAULT_CONFIG: &str = r##"# Folio Configuration

[content]
# Directory holding your posts
dir = "_posts"

# File extensions treated as posts
extensions = ["md"]

[front_matter]
# Fields every post must define with a non-empty value
required = ["title", "layout", "date"]

# Value types allowed in front matter; add "timestamp" to allow date-times
permitted_types = ["null", "boolean", "number", "string", "date", "sequence", "mapping"]

# Warn when the first "# Heading" of a post repeats its title
duplicate_heading = true
"##;

const DEFAULT_POST: &str = r##"---
layout: post
title: "Welcome to Folio"
date: {date}
tags: [meta]
---

This post was created by `folio init`. Edit it, or add new posts to `_posts/`
named `YYYY-MM-DD-title.md`.

Keep the title out of the body: the post layout already shows it.

## Next steps

- Run `folio` to check the front matter of every post.
- Run `folio prerender` to check posts the way a site build does.
"##;
