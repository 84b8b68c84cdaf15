//! The built-in front matter guard.

use folio_matter::RequiredFields;

use crate::traits::{Document, HookError, PreRenderHook};

/// Refuses to render a post whose required front matter is missing.
#[derive(Debug, Clone, Default)]
pub struct FrontMatterGuard {
    required: RequiredFields,
}

impl FrontMatterGuard {
    pub fn new(required: RequiredFields) -> Self {
        Self { required }
    }
}

impl PreRenderHook for FrontMatterGuard {
    fn name(&self) -> &'static str {
        "front-matter-guard"
    }

    fn pre_render(&self, document: &Document) -> Result<(), HookError> {
        let missing = self.required.missing(&document.doc.front_matter);
        if missing.is_empty() {
            return Ok(());
        }

        let error = HookError::MissingFields {
            path: document.path.clone(),
            fields: missing,
        };
        tracing::error!("Front Matter Validation Error: {}", error);
        Err(error)
    }
}
