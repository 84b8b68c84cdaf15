//! Hook registry.
//!
//! Holds the pre-render hooks of a build and runs them, in registration
//! order, over each document.

use std::path::PathBuf;

use folio_matter::TypePolicy;

use crate::traits::{Document, HookError, PreRenderHook};

/// An ordered set of pre-render hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn PreRenderHook>>,
}

impl HookRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl PreRenderHook + 'static) -> &mut Self {
        tracing::debug!("Registered pre-render hook {}", hook.name());
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook on one document, stopping at the first failure.
    pub fn pre_render(&self, document: &Document) -> Result<(), HookError> {
        for hook in &self.hooks {
            hook.pre_render(document)?;
            tracing::trace!("{} passed {}", hook.name(), document.path.display());
        }
        Ok(())
    }

    /// Load and check each path in order. The first failure aborts the run.
    ///
    /// Returns the number of documents that passed.
    pub fn pre_render_all<I>(&self, paths: I, types: &TypePolicy) -> Result<usize, HookError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut count = 0;
        for path in paths {
            let document = Document::load(&path, types)?;
            self.pre_render(&document)?;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::FrontMatterGuard;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    struct Counter(Arc<AtomicUsize>);

    impl PreRenderHook for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn pre_render(&self, _document: &Document) -> Result<(), HookError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn stops_at_first_invalid_document() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("a.md");
        let bad = temp.path().join("b.md");
        let never = temp.path().join("c.md");
        fs::write(&good, "---\nlayout: post\ntitle: A\ndate: 2025-01-01\n---\n").unwrap();
        fs::write(&bad, "---\nlayout: post\ntitle: B\n---\n").unwrap();
        fs::write(&never, "---\nlayout: post\ntitle: C\ndate: 2025-01-03\n---\n").unwrap();

        let seen = Arc::new(AtomicUsize::new(0));
        let mut registry = HookRegistry::new();
        registry
            .register(FrontMatterGuard::default())
            .register(Counter(Arc::clone(&seen)));

        let err = registry
            .pre_render_all(vec![good, bad.clone(), never], &TypePolicy::default())
            .unwrap_err();

        assert!(matches!(err, HookError::MissingFields { ref path, .. } if path == &bad));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn counts_passing_documents() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.md");
        fs::write(&path, "---\nlayout: post\ntitle: A\ndate: 2025-01-01\n---\n").unwrap();
        let mut registry = HookRegistry::new();
        registry.register(FrontMatterGuard::default());

        let count = registry
            .pre_render_all(vec![path], &TypePolicy::default())
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn documents_without_front_matter_abort() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.md");
        fs::write(&path, "# Untitled\n").unwrap();
        let mut registry = HookRegistry::new();
        registry.register(FrontMatterGuard::default());

        let err = registry
            .pre_render_all(vec![path], &TypePolicy::default())
            .unwrap_err();

        assert!(matches!(err, HookError::Parse { .. }));
        assert!(err.to_string().ends_with("could not be parsed: No front matter found"));
    }

    #[test]
    fn empty_registry_accepts_everything() {
        let doc = Document::parse(
            std::path::Path::new("a.md"),
            "---\n---\n",
            &TypePolicy::default(),
        )
        .unwrap();

        assert!(HookRegistry::new().pre_render(&doc).is_ok());
    }
}
