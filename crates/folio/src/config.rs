//! Configuration file (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_check::CheckConfig;
use folio_matter::{RequiredFields, TypePolicy, ValueKind, DEFAULT_REQUIRED_FIELDS};
use serde::Deserialize;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub front_matter: FrontMatterConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ContentConfig {
    #[serde(default = "default_content_dir")]
    pub dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct FrontMatterConfig {
    #[serde(default = "default_required")]
    pub required: Vec<String>,
    #[serde(default = "default_permitted_types")]
    pub permitted_types: Vec<ValueKind>,
    #[serde(default = "default_true")]
    pub duplicate_heading: bool,
}

impl Default for FrontMatterConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
            permitted_types: default_permitted_types(),
            duplicate_heading: true,
        }
    }
}

fn default_content_dir() -> String {
    "_posts".to_string()
}
fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}
fn default_required() -> Vec<String> {
    DEFAULT_REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect()
}
fn default_permitted_types() -> Vec<ValueKind> {
    ValueKind::DEFAULT_PERMITTED.to_vec()
}
fn default_true() -> bool {
    true
}

impl ConfigFile {
    /// Validator settings, with `dir` taking precedence over the file.
    pub fn check_config(&self, dir: Option<PathBuf>) -> CheckConfig {
        CheckConfig {
            content_dir: dir.unwrap_or_else(|| PathBuf::from(&self.content.dir)),
            extensions: self.content.extensions.clone(),
            required: RequiredFields::new(self.front_matter.required.iter().cloned()),
            types: TypePolicy::new(self.front_matter.permitted_types.iter().copied()),
            duplicate_heading: self.front_matter.duplicate_heading,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_means_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
        let check = config.check_config(None);
        assert_eq!(check.content_dir, PathBuf::from("_posts"));
        assert_eq!(check.extensions, vec!["md"]);
        assert_eq!(check.required, RequiredFields::default());
        assert_eq!(check.types, TypePolicy::default());
        assert!(check.duplicate_heading);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            "[front_matter]\nrequired = [\"title\", \"author\"]\npermitted_types = [\"string\", \"date\"]\n",
        )
        .unwrap();

        let check = load_config(&path).unwrap().check_config(None);

        assert_eq!(check.content_dir, PathBuf::from("_posts"));
        assert_eq!(check.required, RequiredFields::new(["title", "author"]));
        assert_eq!(check.types, TypePolicy::new([ValueKind::String, ValueKind::Date]));
        assert!(check.duplicate_heading);
    }

    #[test]
    fn dir_flag_overrides_file() {
        let config = ConfigFile {
            content: ContentConfig {
                dir: "content/posts".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            config.check_config(Some(PathBuf::from("other"))).content_dir,
            PathBuf::from("other")
        );
        assert_eq!(
            config.check_config(None).content_dir,
            PathBuf::from("content/posts")
        );
    }

    #[test]
    fn timestamps_can_be_enabled() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            "[front_matter]\npermitted_types = [\"string\", \"date\", \"timestamp\"]\n",
        )
        .unwrap();

        let check = load_config(&path).unwrap().check_config(None);

        assert!(check.types.permits(ValueKind::Timestamp));
        assert!(!ConfigFile::default().check_config(None).types.permits(ValueKind::Timestamp));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[content\ndir = ").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn unknown_type_names_are_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[front_matter]\npermitted_types = [\"object\"]\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
