//! Content document parser.

use crate::frontmatter::{parse_front_matter, split_front_matter, FrontMatter, FrontMatterError};
use crate::heading::first_heading;
use crate::value::TypePolicy;

/// A parsed content document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDoc {
    /// Parsed front matter
    pub front_matter: FrontMatter,

    /// Markdown body (without front matter)
    pub body: String,

    /// Text of the first `# Heading` in the body
    pub heading: Option<String>,
}

/// Errors that can occur when parsing a document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocError {
    #[error("No front matter found")]
    NoFrontMatter,

    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),
}

/// Parse a content document.
///
/// The document must open with a `---` delimited front matter block.
pub fn parse_document(source: &str, policy: &TypePolicy) -> Result<ParsedDoc, DocError> {
    let split = split_front_matter(source).ok_or(DocError::NoFrontMatter)?;
    let front_matter = parse_front_matter(split.block, policy)?;

    Ok(ParsedDoc {
        front_matter,
        body: split.body.to_string(),
        heading: first_heading(split.body).map(str::to_string),
    })
}
