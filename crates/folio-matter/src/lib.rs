//! Front matter parsing for folio content.
//!
//! This crate splits content files at their `---` delimiters, parses the YAML
//! block into a restricted set of value types, finds the first top-level
//! heading of the body, and holds the required-field rule shared by every
//! caller that validates posts.

pub mod frontmatter;
pub mod heading;
pub mod parser;
pub mod rules;
pub mod value;

pub use frontmatter::{parse_front_matter, split_front_matter, FrontMatter, FrontMatterError, Split};
pub use heading::{duplicates_title, first_heading, normalize_heading};
pub use parser::{parse_document, DocError, ParsedDoc};
pub use rules::{RequiredFields, DEFAULT_REQUIRED_FIELDS};
pub use value::{FrontMatterValue, TypePolicy, ValueKind};
