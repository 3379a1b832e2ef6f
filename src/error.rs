//! Error types for cdn-rewrite.

use thiserror::Error;

/// Error type for cdn-rewrite configuration.
///
/// Rewriting itself never fails; these errors only come out of loading and
/// resolving options.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URI pattern list did not compile
    #[error("invalid URI pattern: {0}")]
    InvalidUriPattern(#[from] regex::Error),

    /// Options file with an unknown extension
    #[error("unsupported options format: {0}")]
    UnsupportedFormat(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for cdn-rewrite operations.
pub type Result<T> = std::result::Result<T, Error>;
