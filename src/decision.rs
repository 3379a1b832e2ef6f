//! Outcome of evaluating a single URL.

use std::fmt;

use crate::Stage;

/// Decision represents what the rewriter does with one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The rewriter is switched off; input passes through
    Inactive,
    /// Not a local file (foreign host, directory, no extension, ...)
    NotLocal,
    /// A local file that a filter stage refused
    Rejected(Stage),
    /// Served from the CDN
    Rewrite,
}

impl Decision {
    /// Whether the URL gets rewritten.
    pub fn is_rewrite(&self) -> bool {
        matches!(self, Decision::Rewrite)
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Inactive => "INACTIVE",
            Decision::NotLocal => "NOT-LOCAL",
            Decision::Rejected(_) => "REJECTED",
            Decision::Rewrite => "REWRITE",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Rejected(stage) => write!(f, "{} ({})", self.as_str(), stage),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
