//! Front matter validation over a content directory.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use folio_matter::{
    duplicates_title, parse_document, DocError, FrontMatterError, RequiredFields, TypePolicy,
};

use crate::report::{Outcome, Report};
use crate::scanner::{discover, CheckError, ContentFile};

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Directory holding the posts
    pub content_dir: PathBuf,

    /// File extensions treated as content documents
    pub extensions: Vec<String>,

    /// Fields every post must define
    pub required: RequiredFields,

    /// Value kinds allowed in front matter
    pub types: TypePolicy,

    /// Warn when the first `# Heading` repeats the title
    pub duplicate_heading: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("_posts"),
            extensions: vec!["md".to_string()],
            required: RequiredFields::default(),
            types: TypePolicy::default(),
            duplicate_heading: true,
        }
    }
}

/// Outcome of validating a single file.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    MissingFields(Vec<String>),
    ParseError(FrontMatterError),
    NoFrontMatter,
    Unreadable(String),
}

impl ValidationResult {
    pub fn is_error(&self) -> bool {
        !matches!(self, ValidationResult::Valid)
    }

    /// Human-readable cause, without the file name.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::MissingFields(fields) => {
                Some(format!("Missing required fields: {}", fields.join(", ")))
            }
            ValidationResult::ParseError(e) => Some(e.to_string()),
            ValidationResult::NoFrontMatter => Some("No front matter found".to_string()),
            ValidationResult::Unreadable(message) => {
                Some(format!("Could not read file - {message}"))
            }
        }
    }
}

/// A top-level heading that repeats the post title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateHeading {
    pub heading: String,
}

/// Everything learned about one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub file: String,
    pub result: ValidationResult,
    pub warning: Option<DuplicateHeading>,
}

impl FileReport {
    pub fn error_line(&self) -> Option<String> {
        self.result
            .message()
            .map(|message| format!("{}: {}", self.file, message))
    }

    pub fn warning_line(&self) -> Option<String> {
        self.warning.as_ref().map(|w| {
            format!(
                "{}: Top-level heading \"{}\" duplicates the title and should be removed, the layout already displays the title",
                self.file, w.heading
            )
        })
    }
}

/// Errors and warnings collected over a run, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of files validated
    pub files: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        self.files += 1;
        if let Some(line) = report.error_line() {
            self.errors.push(line);
        }
        if let Some(line) = report.warning_line() {
            self.warnings.push(line);
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> FromIterator<&'a FileReport> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a FileReport>>(iter: I) -> Self {
        let mut summary = RunSummary::default();
        for report in iter {
            summary.record(report);
        }
        summary
    }
}

/// Validate the text of one content file.
pub fn validate_source(file: &str, source: &str, config: &CheckConfig) -> FileReport {
    let doc = match parse_document(source, &config.types) {
        Ok(doc) => doc,
        Err(DocError::NoFrontMatter) => {
            return FileReport {
                file: file.to_string(),
                result: ValidationResult::NoFrontMatter,
                warning: None,
            };
        }
        Err(DocError::FrontMatter(e)) => {
            return FileReport {
                file: file.to_string(),
                result: ValidationResult::ParseError(e),
                warning: None,
            };
        }
    };

    let missing = config.required.missing(&doc.front_matter);
    let result = if missing.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::MissingFields(missing)
    };

    let warning = if config.duplicate_heading {
        match (doc.front_matter.title(), doc.heading) {
            (Some(title), Some(heading))
                if !title.is_blank() && duplicates_title(&heading, &title.to_string()) =>
            {
                Some(DuplicateHeading { heading })
            }
            _ => None,
        }
    } else {
        None
    };

    FileReport {
        file: file.to_string(),
        result,
        warning,
    }
}

/// Read and validate one content file.
pub fn validate_file(file: &ContentFile, config: &CheckConfig) -> FileReport {
    let name = file.name();

    let source = fs::read(&file.path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|_| "file is not valid UTF-8".to_string()));

    match source {
        Ok(source) => validate_source(&name, &source, config),
        Err(message) => FileReport {
            file: name,
            result: ValidationResult::Unreadable(message),
            warning: None,
        },
    }
}

/// Validates every post in a content directory.
pub struct Validator {
    config: CheckConfig,
}

impl Validator {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Validate the content directory.
    ///
    /// A missing directory and an empty one are outcomes, not errors. Only a
    /// directory that exists but cannot be listed returns `Err`.
    pub fn run(&self) -> Result<Report, CheckError> {
        let files = match discover(&self.config.content_dir, &self.config.extensions) {
            Ok(files) => files,
            Err(CheckError::DirectoryNotFound(dir)) => {
                tracing::debug!("Content directory {} does not exist", dir.display());
                return Ok(self.report(Outcome::DirectoryMissing, RunSummary::default()));
            }
            Err(e) => return Err(e),
        };

        if files.is_empty() {
            return Ok(self.report(Outcome::NoContent, RunSummary::default()));
        }

        let mut summary = RunSummary::default();
        for file in &files {
            let report = validate_file(file, &self.config);
            tracing::debug!(
                file = %report.file,
                error = report.result.is_error(),
                warning = report.warning.is_some(),
                "Validated"
            );
            summary.record(&report);
        }

        tracing::info!(
            "Validated {} files: {} errors, {} warnings",
            summary.files,
            summary.errors.len(),
            summary.warnings.len()
        );

        Ok(self.report(Outcome::from_summary(&summary), summary))
    }

    fn report(&self, outcome: Outcome, summary: RunSummary) -> Report {
        Report {
            outcome,
            directory: self.config.content_dir.clone(),
            required: self.config.required.fields().to_vec(),
            summary,
        }
    }
}
