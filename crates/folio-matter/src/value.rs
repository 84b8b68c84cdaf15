//! Safe front matter values and the type allow-list.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_yaml::Value;

use crate::frontmatter::FrontMatterError;

/// The kind of a front matter value, used by [`TypePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Date,
    Timestamp,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Null,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Date,
        ValueKind::Timestamp,
        ValueKind::Sequence,
        ValueKind::Mapping,
    ];

    /// Kinds permitted when nothing is configured. Timestamps must be
    /// enabled explicitly.
    pub const DEFAULT_PERMITTED: [ValueKind; 7] = [
        ValueKind::Null,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Date,
        ValueKind::Sequence,
        ValueKind::Mapping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Date => "date",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-list of value kinds the parser accepts.
///
/// YAML tags are never accepted, whatever the policy says: front matter is
/// data, and a tag is a request to construct something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePolicy {
    permitted: Vec<ValueKind>,
}

impl TypePolicy {
    /// Build a policy from an explicit list of permitted kinds.
    pub fn new(permitted: impl IntoIterator<Item = ValueKind>) -> Self {
        let mut permitted: Vec<ValueKind> = permitted.into_iter().collect();
        permitted.sort();
        permitted.dedup();
        Self { permitted }
    }

    /// Whether values of `kind` may appear in front matter.
    pub fn permits(&self, kind: ValueKind) -> bool {
        self.permitted.contains(&kind)
    }

    pub fn permitted(&self) -> &[ValueKind] {
        &self.permitted
    }
}

impl Default for TypePolicy {
    fn default() -> Self {
        Self::new(ValueKind::DEFAULT_PERMITTED)
    }
}

/// A single value from a front matter block.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatterValue {
    Null,
    Boolean(bool),
    Number(serde_yaml::Number),
    String(String),
    Date(NaiveDate),
    Timestamp(DateTime<FixedOffset>),
    Sequence(Vec<FrontMatterValue>),
    Mapping(BTreeMap<String, FrontMatterValue>),
}

impl FrontMatterValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FrontMatterValue::Null => ValueKind::Null,
            FrontMatterValue::Boolean(_) => ValueKind::Boolean,
            FrontMatterValue::Number(_) => ValueKind::Number,
            FrontMatterValue::String(_) => ValueKind::String,
            FrontMatterValue::Date(_) => ValueKind::Date,
            FrontMatterValue::Timestamp(_) => ValueKind::Timestamp,
            FrontMatterValue::Sequence(_) => ValueKind::Sequence,
            FrontMatterValue::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Null, or a string that is empty once whitespace is trimmed.
    pub fn is_blank(&self) -> bool {
        match self {
            FrontMatterValue::Null => true,
            FrontMatterValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontMatterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a parsed YAML value, enforcing `policy` at every level.
    ///
    /// `key` names the front matter entry being converted, for error messages.
    pub(crate) fn from_yaml(
        value: Value,
        key: &str,
        policy: &TypePolicy,
    ) -> Result<Self, FrontMatterError> {
        let converted = match value {
            Value::Null => FrontMatterValue::Null,
            Value::Bool(b) => FrontMatterValue::Boolean(b),
            Value::Number(n) => FrontMatterValue::Number(n),
            Value::String(s) => classify_string(s),
            Value::Sequence(items) => FrontMatterValue::Sequence(
                items
                    .into_iter()
                    .map(|item| Self::from_yaml(item, key, policy))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(mapping) => {
                let mut entries = BTreeMap::new();
                for (k, v) in mapping {
                    let name = scalar_key(k)?;
                    let nested = format!("{key}.{name}");
                    let v = Self::from_yaml(v, &nested, policy)?;
                    entries.insert(name, v);
                }
                FrontMatterValue::Mapping(entries)
            }
            Value::Tagged(tagged) => {
                return Err(FrontMatterError::DisallowedTag {
                    key: key.to_string(),
                    tag: tagged.tag.to_string(),
                });
            }
        };

        let kind = converted.kind();
        if !policy.permits(kind) {
            return Err(FrontMatterError::DisallowedType {
                key: key.to_string(),
                kind,
            });
        }

        Ok(converted)
    }
}

impl fmt::Display for FrontMatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterValue::Null => Ok(()),
            FrontMatterValue::Boolean(b) => write!(f, "{b}"),
            FrontMatterValue::Number(n) => write!(f, "{n}"),
            FrontMatterValue::String(s) => f.write_str(s),
            FrontMatterValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FrontMatterValue::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S %:z")),
            FrontMatterValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            FrontMatterValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Turn a mapping key into a string. Only scalar keys are allowed.
pub(crate) fn scalar_key(key: Value) -> Result<String, FrontMatterError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => Err(FrontMatterError::DisallowedTag {
            key: "<key>".to_string(),
            tag: tagged.tag.to_string(),
        }),
        Value::Sequence(_) | Value::Mapping(_) => Err(FrontMatterError::NonScalarKey),
    }
}

/// YAML 1.2 leaves dates as plain strings; recognise the shapes posts use.
fn classify_string(s: String) -> FrontMatterValue {
    let trimmed = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return FrontMatterValue::Date(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return FrontMatterValue::Timestamp(ts);
    }

    for format in ["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M %z"] {
        if let Ok(ts) = DateTime::parse_from_str(trimmed, format) {
            return FrontMatterValue::Timestamp(ts);
        }
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return FrontMatterValue::Timestamp(naive.and_utc().fixed_offset());
        }
    }

    FrontMatterValue::String(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(yaml: &str) -> Result<FrontMatterValue, FrontMatterError> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        FrontMatterValue::from_yaml(value, "field", &TypePolicy::new(ValueKind::ALL))
    }

    #[test]
    fn recognises_calendar_dates() {
        let value = convert("2025-11-06").unwrap();

        assert_eq!(value.kind(), ValueKind::Date);
        assert_eq!(value.to_string(), "2025-11-06");
    }

    #[test]
    fn recognises_timestamps_with_offset() {
        let value = convert("2025-11-06 10:30:00 +0200").unwrap();

        assert_eq!(value.kind(), ValueKind::Timestamp);
        assert_eq!(value.to_string(), "2025-11-06 10:30:00 +02:00");
    }

    #[test]
    fn default_policy_rejects_timestamps() {
        let value: Value = serde_yaml::from_str("2025-11-06 10:30:00 +0200").unwrap();

        let err = FrontMatterValue::from_yaml(value, "date", &TypePolicy::default()).unwrap_err();

        assert_eq!(
            err,
            FrontMatterError::DisallowedType {
                key: "date".to_string(),
                kind: ValueKind::Timestamp,
            }
        );
        assert!(TypePolicy::default().permits(ValueKind::Date));
    }

    #[test]
    fn plain_text_stays_a_string() {
        let value = convert("\"Hello, World!\"").unwrap();

        assert_eq!(value.as_str(), Some("Hello, World!"));
    }

    #[test]
    fn blankness() {
        assert!(FrontMatterValue::Null.is_blank());
        assert!(FrontMatterValue::String("   \t".to_string()).is_blank());
        assert!(!FrontMatterValue::String("x".to_string()).is_blank());
        assert!(!FrontMatterValue::Boolean(false).is_blank());
        assert!(!FrontMatterValue::Sequence(vec![]).is_blank());
    }

    #[test]
    fn rejects_tags() {
        let err = convert("!ruby/object:Gem::Installer payload").unwrap_err();

        assert!(matches!(err, FrontMatterError::DisallowedTag { .. }));
    }

    #[test]
    fn rejects_tags_inside_collections() {
        let err = convert("- ok\n- !custom value").unwrap_err();

        assert!(matches!(err, FrontMatterError::DisallowedTag { .. }));
    }

    #[test]
    fn policy_restricts_kinds() {
        let policy = TypePolicy::new([ValueKind::String, ValueKind::Date]);
        let value: Value = serde_yaml::from_str("3").unwrap();

        let err = FrontMatterValue::from_yaml(value, "order", &policy).unwrap_err();

        assert!(matches!(
            err,
            FrontMatterError::DisallowedType {
                kind: ValueKind::Number,
                ..
            }
        ));
    }

    #[test]
    fn policy_deduplicates() {
        let policy = TypePolicy::new([ValueKind::String, ValueKind::String, ValueKind::Null]);

        assert_eq!(policy.permitted(), &[ValueKind::Null, ValueKind::String]);
    }

    #[test]
    fn sequences_display_their_items() {
        let value = convert("[rust, yaml]").unwrap();

        assert_eq!(value.to_string(), "[rust, yaml]");
    }
}
