//! Required front matter fields.
//!
//! Both the directory validator and the pre-render hook evaluate posts with
//! [`RequiredFields::missing`]; they only differ in what they do with the answer.

use crate::frontmatter::FrontMatter;

/// Fields every post must define when nothing else is configured.
pub const DEFAULT_REQUIRED_FIELDS: [&str; 3] = ["title", "layout", "date"];

/// The set of front matter keys a post must define with a non-blank value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    /// Build from an ordered list; duplicates are dropped, first one wins.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self { fields: unique }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Required fields that are absent or blank, in configured order.
    pub fn missing(&self, front_matter: &FrontMatter) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| {
                front_matter
                    .get(field)
                    .map_or(true, |value| value.is_blank())
            })
            .cloned()
            .collect()
    }

    pub fn is_satisfied_by(&self, front_matter: &FrontMatter) -> bool {
        self.missing(front_matter).is_empty()
    }
}

impl Default for RequiredFields {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_FIELDS)
    }
}
