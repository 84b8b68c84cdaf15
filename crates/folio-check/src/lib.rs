//! Front matter validator for folio content directories.
//!
//! Scans a directory of posts, checks each post's front matter independently
//! and collects every error and warning into one report.

pub mod report;
pub mod scanner;
pub mod validator;

pub use report::{Outcome, Report, ReportError};
pub use scanner::{discover, CheckError, ContentFile};
pub use validator::{
    validate_file, validate_source, CheckConfig, DuplicateHeading, FileReport, RunSummary,
    ValidationResult, Validator,
};
