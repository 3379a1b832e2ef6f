//! Extension-based rule implementation.

use super::Rule;
use crate::{ExtensionSet, LocalFile, Stage};

/// ExtensionRule admits or refuses files by extension.
///
/// A whitelist rule admits only listed extensions; a blacklist rule admits
/// everything except listed extensions.
///
/// # Examples
/// ```
/// use cdn_rewrite::rule::{ExtensionRule, Rule};
/// use cdn_rewrite::{classify_url, ExtensionSet};
///
/// let rule = ExtensionRule::whitelist(ExtensionSet::parse("jpg|css"));
/// let file = classify_url("/a.css", "example.com").unwrap();
/// assert!(rule.admits(&file));
/// ```
#[derive(Debug, Clone)]
pub struct ExtensionRule {
    stage: Stage,
    extensions: ExtensionSet,
}

impl ExtensionRule {
    /// Create a rule admitting only `extensions`.
    pub fn whitelist(extensions: ExtensionSet) -> Self {
        Self {
            stage: Stage::ExtensionWhitelist,
            extensions,
        }
    }

    /// Create a rule refusing `extensions`.
    pub fn blacklist(extensions: ExtensionSet) -> Self {
        Self {
            stage: Stage::ExtensionBlacklist,
            extensions,
        }
    }

    /// Get the extension set.
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }
}

impl Rule for ExtensionRule {
    fn admits(&self, file: &LocalFile) -> bool {
        let listed = self.extensions.contains(&file.extension);
        if self.stage.is_allow_list() {
            listed
        } else {
            !listed
        }
    }

    fn stage(&self) -> Stage {
        self.stage
    }
}
