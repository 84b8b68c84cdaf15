//! Trait definitions for pre-render hooks.

use std::fs;
use std::path::{Path, PathBuf};

use folio_matter::{parse_document, DocError, ParsedDoc, TypePolicy};

/// A content document about to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Source file path
    pub path: PathBuf,

    /// Parsed front matter and body
    pub doc: ParsedDoc,
}

impl Document {
    /// Read and parse a document from disk.
    pub fn load(path: &Path, types: &TypePolicy) -> Result<Self, HookError> {
        let source = fs::read_to_string(path).map_err(|e| HookError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(path, &source, types)
    }

    /// Parse a document from source text.
    pub fn parse(path: &Path, source: &str, types: &TypePolicy) -> Result<Self, HookError> {
        let doc = parse_document(source, types).map_err(|source| HookError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }
}

/// Errors that abort rendering.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Post {} is missing required front matter fields: {}", .path.display(), .fields.join(", "))]
    MissingFields { path: PathBuf, fields: Vec<String> },

    #[error("Post {} could not be parsed: {source}", .path.display())]
    Parse { path: PathBuf, source: DocError },

    #[error("Post {} could not be read: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// A check that runs on every document before it is rendered.
///
/// Returning an error stops the whole build at that document.
pub trait PreRenderHook: Send + Sync {
    /// Hook identifier used in logs
    fn name(&self) -> &'static str;

    /// Inspect `document` before rendering.
    fn pre_render(&self, document: &Document) -> Result<(), HookError>;
}
