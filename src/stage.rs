//! Filter stage definitions.

use std::fmt;

/// Stage represents one of the filters a local file passes through
/// before it is served from the CDN.
///
/// Stages run in declaration order; the first one that rejects a file
/// stops evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Extension must be listed in the whitelist
    ExtensionWhitelist,
    /// Extension must not be listed in the blacklist
    ExtensionBlacklist,
    /// URI must match the whitelist patterns (when configured)
    UriWhitelist,
    /// URI must not match the blacklist patterns
    UriBlacklist,
}

impl Stage {
    /// All stages in evaluation order.
    pub const ALL: [Stage; 4] = [
        Stage::ExtensionWhitelist,
        Stage::ExtensionBlacklist,
        Stage::UriWhitelist,
        Stage::UriBlacklist,
    ];

    /// Parse a stage from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "extension-whitelist" | "ext-whitelist" => Some(Stage::ExtensionWhitelist),
            "extension-blacklist" | "ext-blacklist" => Some(Stage::ExtensionBlacklist),
            "uri-whitelist" => Some(Stage::UriWhitelist),
            "uri-blacklist" => Some(Stage::UriBlacklist),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ExtensionWhitelist => "extension-whitelist",
            Stage::ExtensionBlacklist => "extension-blacklist",
            Stage::UriWhitelist => "uri-whitelist",
            Stage::UriBlacklist => "uri-blacklist",
        }
    }

    /// Whether this stage is an allow-list (a file must match to pass).
    pub fn is_allow_list(&self) -> bool {
        matches!(self, Stage::ExtensionWhitelist | Stage::UriWhitelist)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
