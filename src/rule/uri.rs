//! URI pattern rule implementation.

use super::Rule;
use crate::{LocalFile, Stage, UriMatcher};

/// UriRule admits or refuses files by matching their URI against globs.
#[derive(Debug, Clone)]
pub struct UriRule {
    stage: Stage,
    matcher: UriMatcher,
}

impl UriRule {
    /// Create a rule admitting only URIs that match.
    pub fn whitelist(matcher: UriMatcher) -> Self {
        Self {
            stage: Stage::UriWhitelist,
            matcher,
        }
    }

    /// Create a rule refusing URIs that match.
    pub fn blacklist(matcher: UriMatcher) -> Self {
        Self {
            stage: Stage::UriBlacklist,
            matcher,
        }
    }

    /// Get the compiled matcher.
    pub fn matcher(&self) -> &UriMatcher {
        &self.matcher
    }
}

impl Rule for UriRule {
    fn admits(&self, file: &LocalFile) -> bool {
        let matched = self.matcher.is_match(&file.uri);
        if self.stage.is_allow_list() {
            matched
        } else {
            !matched
        }
    }

    fn stage(&self) -> Stage {
        self.stage
    }
}
