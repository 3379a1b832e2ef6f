//! Filter rules a local file must pass before it is served from the CDN.

mod extension;
mod uri;

pub use extension::ExtensionRule;
pub use uri::UriRule;

use crate::{LocalFile, Stage};

/// Rule trait defines the interface for all filter stages.
///
/// Rules are evaluated in [`Stage`] order; a file is rewritten only when
/// every rule admits it.
pub trait Rule: Send + Sync {
    /// Check a classified local file against this rule.
    ///
    /// # Returns
    /// `true` if the file may be served from the CDN as far as this rule
    /// is concerned, `false` otherwise.
    fn admits(&self, file: &LocalFile) -> bool;

    /// Get the stage this rule implements.
    fn stage(&self) -> Stage;
}
