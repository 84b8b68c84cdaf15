//! Content file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A content document found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// Path to the file
    pub path: PathBuf,
}

impl ContentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name used in messages (`2025-11-06-hello.md`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Errors that stop a run before any file is validated.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{} directory not found", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read content directory {}: {message}", .path.display())]
    ReadDir { path: PathBuf, message: String },
}

/// Find content files directly inside `dir` whose extension is one of
/// `extensions`, sorted by file name.
///
/// Subdirectories and hidden files are not scanned.
pub fn discover(dir: &Path, extensions: &[String]) -> Result<Vec<ContentFile>, CheckError> {
    if !dir.is_dir() {
        return Err(CheckError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(CheckError::ReadDir {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !extensions.iter().any(|allowed| allowed == ext) {
            continue;
        }

        files.push(ContentFile::new(path));
    }

    tracing::debug!("Discovered {} content files in {}", files.len(), dir.display());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn md() -> Vec<String> {
        vec!["md".to_string()]
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();

        let err = discover(&temp.path().join("_posts"), &md()).unwrap_err();

        assert!(matches!(err, CheckError::DirectoryNotFound(_)));
        assert!(err.to_string().ends_with("_posts directory not found"));
    }

    #[test]
    fn a_file_is_not_a_directory() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("_posts");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            discover(&file, &md()),
            Err(CheckError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn lists_matching_files_in_name_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("2025-02-01-b.md"), "").unwrap();
        fs::write(temp.path().join("2025-01-01-a.md"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        fs::write(temp.path().join(".draft.md"), "").unwrap();
        fs::create_dir(temp.path().join("drafts.md")).unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("2025-03-01-c.md"), "").unwrap();

        let files = discover(temp.path(), &md()).unwrap();
        let names: Vec<String> = files.iter().map(ContentFile::name).collect();

        assert_eq!(names, vec!["2025-01-01-a.md", "2025-02-01-b.md"]);
    }

    #[test]
    fn honours_configured_extensions() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.md"), "").unwrap();
        fs::write(temp.path().join("b.markdown"), "").unwrap();

        let files = discover(temp.path(), &["markdown".to_string()]).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "b.markdown");
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let temp = tempdir().unwrap();

        assert!(discover(temp.path(), &md()).unwrap().is_empty());
    }
}
