//! Run outcomes and their rendering.
//!
//! The human output is grepped by CI jobs, so its wording and glyphs are
//! stable. Everything goes through a `Write` so the CLI decides where it
//! lands.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::validator::RunSummary;

const ERROR: &str = "\u{274c}";
const WARNING: &str = "\u{26a0}\u{fe0f} ";
const INFO: &str = "\u{1f50d}";
const SUCCESS: &str = "\u{2705}";
const TIP: &str = "\u{1f4a1}";

/// The terminal states of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The content directory does not exist; nothing was scanned.
    DirectoryMissing,
    /// The directory exists but holds no content files.
    NoContent,
    Passed,
    PassedWithWarnings,
    Failed,
}

impl Outcome {
    /// Classify a completed scan.
    pub fn from_summary(summary: &RunSummary) -> Self {
        if !summary.errors.is_empty() {
            Outcome::Failed
        } else if !summary.warnings.is_empty() {
            Outcome::PassedWithWarnings
        } else {
            Outcome::Passed
        }
    }

    pub fn is_success(self) -> bool {
        !matches!(self, Outcome::DirectoryMissing | Outcome::Failed)
    }

    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Errors while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// A finished run, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub outcome: Outcome,

    /// Content directory as configured
    pub directory: PathBuf,

    /// Required fields, for the tip shown on failure
    pub required: Vec<String>,

    pub summary: RunSummary,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: Outcome,
    exit_code: u8,
    directory: String,
    files: usize,
    errors: &'a [String],
    warnings: &'a [String],
}

impl Report {
    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }

    /// Write the line-oriented report.
    pub fn write_human(&self, w: &mut dyn Write) -> io::Result<()> {
        let dir = self.directory.display();

        match self.outcome {
            Outcome::DirectoryMissing => {
                return writeln!(w, "{ERROR} Error: {dir} directory not found");
            }
            Outcome::NoContent => {
                return writeln!(w, "{WARNING} Warning: No posts found in {dir} directory");
            }
            _ => {}
        }

        writeln!(w, "{INFO} Validating {} post(s)...", self.summary.files)?;

        match self.outcome {
            Outcome::Passed => {
                writeln!(w, "{SUCCESS} All posts have valid front matter!")?;
            }
            Outcome::PassedWithWarnings => {
                self.write_warnings(w)?;
                writeln!(w)?;
                writeln!(
                    w,
                    "{TIP} Tip: Remove the duplicated heading from the post body, the layout already displays the title."
                )?;
            }
            Outcome::Failed => {
                writeln!(w)?;
                writeln!(w, "{ERROR} Front matter validation failed:")?;
                writeln!(w)?;
                for error in &self.summary.errors {
                    writeln!(w, "  \u{2022} {error}")?;
                }
                self.write_warnings(w)?;
                self.write_failure_tip(w)?;
            }
            Outcome::DirectoryMissing | Outcome::NoContent => {}
        }

        Ok(())
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, w: &mut dyn Write) -> Result<(), ReportError> {
        let report = JsonReport {
            outcome: self.outcome,
            exit_code: self.exit_code(),
            directory: self.directory.display().to_string(),
            files: self.summary.files,
            errors: &self.summary.errors,
            warnings: &self.summary.warnings,
        };

        let json = serde_json::to_string_pretty(&report)?;
        writeln!(w, "{json}")?;
        Ok(())
    }

    fn write_warnings(&self, w: &mut dyn Write) -> io::Result<()> {
        if self.summary.warnings.is_empty() {
            return Ok(());
        }

        writeln!(w)?;
        writeln!(w, "{WARNING} Front matter warnings:")?;
        writeln!(w)?;
        for warning in &self.summary.warnings {
            writeln!(w, "  \u{2022} {warning}")?;
        }
        Ok(())
    }

    fn write_failure_tip(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w)?;

        if self.required.is_empty() {
            return writeln!(w, "{TIP} Tip: All posts must start with a front matter block.");
        }

        writeln!(
            w,
            "{TIP} Tip: All posts must have {} fields in their front matter.",
            quoted_list(&self.required)
        )?;
        writeln!(w, "   Example:")?;
        writeln!(w, "   ---")?;
        for line in example_lines(&self.required) {
            writeln!(w, "   {line}")?;
        }
        writeln!(w, "   ---")?;
        Ok(())
    }
}

/// `'a'`, `'a' and 'b'`, `'a', 'b', and 'c'`.
fn quoted_list(fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{f}'")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Example front matter covering `fields`, layout first as in a real post.
fn example_lines(fields: &[String]) -> Vec<String> {
    let mut ordered: Vec<&String> = fields.iter().collect();
    ordered.sort_by_key(|f| match f.as_str() {
        "layout" => 0,
        "title" => 1,
        "date" => 2,
        _ => 3,
    });

    ordered
        .into_iter()
        .map(|field| match field.as_str() {
            "layout" => "layout: post".to_string(),
            "title" => "title: \"Your Post Title\"".to_string(),
            "date" => "date: 2025-11-06".to_string(),
            other => format!("{other}: ..."),
        })
        .collect()
}
