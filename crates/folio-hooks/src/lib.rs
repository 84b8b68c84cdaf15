//! Pre-render document hooks.
//!
//! Hooks run on every post before it is rendered and stop the build at the
//! first post they reject. The built-in [`FrontMatterGuard`] enforces the
//! same required fields as the directory validator.

pub mod guard;
pub mod registry;
pub mod traits;

pub use guard::FrontMatterGuard;
pub use registry::HookRegistry;
pub use traits::{Document, HookError, PreRenderHook};
