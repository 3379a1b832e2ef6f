//! cdn-rewrite - A rule-based engine that moves static assets onto a CDN.
//!
//! This crate decides which URLs of a site refer to local static files and
//! rewrites those onto a CDN host, either one URL at a time or across the
//! `href`/`src` attributes of an HTML fragment.
//!
//! # Features
//!
//! - **Local file classification**: host, path, traversal and extension checks
//! - **Extension filters**: whitelist (with a built-in media/font default) and
//!   blacklist, `php` always excluded
//! - **URI filters**: glob whitelist and blacklist compiled into one regex each
//! - **Cache busting**: optional invalidation query parameter
//! - **HTML content rewriting**: attribute-level, markup left intact
//! - **Fail-open**: anything that cannot be rewritten comes back unchanged
//! - **Thread-safe**: a rewriter is immutable and can be shared
//!
//! # Quick Start
//!
//! ```
//! use cdn_rewrite::{CdnOptions, CdnRewriter, Environment};
//!
//! let options = CdnOptions {
//!     cdn_enable: true,
//!     cdn_host: "cdn.example.com".to_string(),
//!     ..Default::default()
//! };
//! let rewriter = CdnRewriter::from_options(&options, &Environment::new("example.com"));
//!
//! assert_eq!(
//!     rewriter.rewrite_url("http://example.com/img/a.jpg", None),
//!     "http://cdn.example.com/img/a.jpg"
//! );
//! assert_eq!(
//!     rewriter.rewrite_content(r#"<img src="/img/a.jpg">"#),
//!     r#"<img src="http://cdn.example.com/img/a.jpg">"#
//! );
//! ```
//!
//! # Global Rewriter
//!
//! Host integrations that register plain filter callbacks can install one
//! rewriter per process and call [`filter_url`] / [`filter_content`]:
//!
//! ```ignore
//! use cdn_rewrite::{filter_url, install_from_options};
//!
//! install_from_options(&options, &environment);
//! let url = filter_url("/wp-content/uploads/a.png", None);
//! ```
//!
//! # Filter Order
//!
//! A local file is rewritten only if it passes, in order:
//! 1. Extension whitelist
//! 2. Extension blacklist
//! 3. URI whitelist (when configured)
//! 4. URI blacklist (always includes the admin area)

mod decision;
mod error;
mod global;
mod local_file;
mod options;
mod query;
mod scheme;
mod stage;
mod url_parts;

pub mod extensions;
pub mod glob;
pub mod hooks;
pub mod rewriter;
pub mod rule;

// Re-export core types
pub use decision::Decision;
pub use error::{Error, Result};
pub use local_file::{classify_url, LocalFile};
pub use options::{CdnOptions, Environment};
pub use query::add_query_arg;
pub use scheme::Scheme;
pub use stage::Stage;
pub use url_parts::UrlParts;

pub use extensions::ExtensionSet;
pub use glob::{compile_glob_set, split_glob_lines, UriMatcher};
pub use hooks::{FilterHook, HookKind, HOOK_PRIORITY};
pub use rewriter::{CdnRewriter, RewriteConfig};

// Re-export global API functions
pub use global::{
    current, filter_content, filter_url, install, install_from_options, is_installed, uninstall,
};
