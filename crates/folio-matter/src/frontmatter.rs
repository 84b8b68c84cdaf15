//! Front matter extraction and parsing.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use crate::value::{scalar_key, FrontMatterValue, TypePolicy, ValueKind};

/// Parsed front matter from a content file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: BTreeMap<String, FrontMatterValue>,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.fields.get(key)
    }

    /// Page title, if present.
    pub fn title(&self) -> Option<&FrontMatterValue> {
        self.get("title")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FrontMatterValue)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (String, FrontMatterValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A content file split at its front matter delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Text between the two `---` lines.
    pub block: &'a str,

    /// Everything after the closing `---` line.
    pub body: &'a str,
}

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?\r?\n)??---[ \t]*(?:\r?\n|\z)")
        .expect("Invalid front matter delimiter regex")
});

/// Split `source` into its front matter block and body.
///
/// Returns `None` unless the file starts with a `---` line and has a closing
/// `---` line further down.
pub fn split_front_matter(source: &str) -> Option<Split<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let captures = DELIMITERS.captures(source)?;
    let whole = captures.get(0)?;

    Some(Split {
        block: captures.get(1).map_or("", |m| m.as_str()),
        body: &source[whole.end()..],
    })
}

/// Parse a front matter block into key/value pairs.
///
/// An empty block is an empty mapping. Anything other than a mapping at the
/// top level is rejected, as is any value outside `policy`. Anchors and
/// aliases are resolved, and the resolved value is checked like any other.
pub fn parse_front_matter(block: &str, policy: &TypePolicy) -> Result<FrontMatter, FrontMatterError> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: Value =
        serde_yaml::from_str(block).map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?;

    let mapping = match value {
        Value::Null => return Ok(FrontMatter::default()),
        Value::Mapping(mapping) => mapping,
        Value::Tagged(tagged) => {
            return Err(FrontMatterError::DisallowedTag {
                key: "<document>".to_string(),
                tag: tagged.tag.to_string(),
            });
        }
        Value::Bool(_) => return Err(FrontMatterError::NotAMapping(ValueKind::Boolean)),
        Value::Number(_) => return Err(FrontMatterError::NotAMapping(ValueKind::Number)),
        Value::String(_) => return Err(FrontMatterError::NotAMapping(ValueKind::String)),
        Value::Sequence(_) => return Err(FrontMatterError::NotAMapping(ValueKind::Sequence)),
    };

    let mut fields = BTreeMap::new();
    for (key, value) in mapping {
        let key = scalar_key(key)?;
        let value = FrontMatterValue::from_yaml(value, &key, policy)?;
        fields.insert(key, value);
    }

    Ok(FrontMatter { fields })
}

/// Errors that can occur when parsing front matter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrontMatterError {
    #[error("Invalid YAML syntax - {0}")]
    InvalidYaml(String),

    #[error("Failed to parse front matter - expected a mapping of keys to values, found a {0}")]
    NotAMapping(ValueKind),

    #[error("Failed to parse front matter - tag `{tag}` on `{key}` is not permitted")]
    DisallowedTag { key: String, tag: String },

    #[error("Failed to parse front matter - {kind} values are not permitted (`{key}`)")]
    DisallowedType { key: String, kind: ValueKind },

    #[error("Failed to parse front matter - mapping keys must be plain scalars")]
    NonScalarKey,
}
