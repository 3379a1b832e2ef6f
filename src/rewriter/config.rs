//! Resolved rewrite configuration.

use crate::error::{Error, Result};
use crate::glob::{compile_glob_set, split_glob_lines, UriMatcher};
use crate::options::{CdnOptions, Environment};
use crate::ExtensionSet;

/// Administrative area; never served from the CDN.
pub const ADMIN_URI_PATTERN: &str = "/wp-admin/*";

/// Per-site uploads of a network install, served through a PHP handler.
pub const NETWORK_FILES_URI_PATTERN: &str = "/^/files/*";

/// Protected downloads of the membership plugin.
pub const MEMBERSHIP_FILES_URI_PATTERN: &str = "*/s2member-files/*";

/// Extension that is always blacklisted.
pub const ALWAYS_BLACKLISTED_EXTENSION: &str = "php";

/// Immutable configuration of a [`crate::CdnRewriter`].
///
/// Build it with [`RewriteConfig::resolve`] from an options snapshot and the
/// ambient [`Environment`]; it is never modified afterwards.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Primary switch
    pub enabled: bool,
    /// Lowercase local host name
    pub local_host: String,
    /// Lowercase CDN host name
    pub cdn_host: String,
    /// Keep rewriting on SSL requests
    pub allow_ssl: bool,
    /// Cache-busting parameter name; empty disables
    pub invalidation_param: String,
    /// Cache-busting counter; zero disables
    pub invalidation_value: u64,
    /// Extensions eligible for the CDN
    pub whitelisted_extensions: ExtensionSet,
    /// Extensions excluded from the CDN; always contains `php`
    pub blacklisted_extensions: ExtensionSet,
    /// URI globs a file must match, if any
    pub whitelisted_uri_matcher: Option<UriMatcher>,
    /// URI globs that exclude a file; always covers the admin area
    pub blacklisted_uri_matcher: UriMatcher,
    /// Filter the parts of an HTML compressor as well
    pub html_compressor: bool,
    /// The request, deployment and host facts this config was built for
    pub environment: Environment,
}

impl RewriteConfig {
    /// Resolve options and environment into a rewrite configuration.
    ///
    /// Fails only when a URI pattern list does not compile.
    ///
    /// # Examples
    /// ```
    /// use cdn_rewrite::{CdnOptions, Environment, RewriteConfig};
    ///
    /// let options = CdnOptions {
    ///     cdn_enable: true,
    ///     cdn_host: "CDN.example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let config = RewriteConfig::resolve(&options, &Environment::new("example.com")).unwrap();
    /// assert_eq!(config.cdn_host, "cdn.example.com");
    /// assert!(config.blacklisted_extensions.contains("php"));
    /// ```
    pub fn resolve(options: &CdnOptions, environment: &Environment) -> Result<Self> {
        let mut whitelisted_extensions = ExtensionSet::parse(&options.cdn_whitelisted_extensions);
        if whitelisted_extensions.is_empty() {
            whitelisted_extensions = ExtensionSet::default_whitelist();
        }

        let mut blacklisted_extensions = ExtensionSet::parse(&options.cdn_blacklisted_extensions);
        blacklisted_extensions.insert(ALWAYS_BLACKLISTED_EXTENSION);

        let whitelisted_uri_matcher =
            compile_glob_set(split_glob_lines(&options.cdn_whitelisted_uri_patterns))?;

        let mut blacklist = split_glob_lines(&options.cdn_blacklisted_uri_patterns);
        blacklist.extend(builtin_blacklist(environment).into_iter().map(str::to_string));
        let blacklisted_uri_matcher = compile_glob_set(blacklist)?
            .ok_or_else(|| Error::Config("empty URI blacklist".to_string()))?;

        Ok(Self {
            enabled: options.cdn_enable,
            local_host: environment.local_host.trim().to_lowercase(),
            cdn_host: options.cdn_host.trim().to_lowercase(),
            allow_ssl: options.cdn_over_ssl,
            invalidation_param: options.cdn_invalidation_var.trim().to_string(),
            invalidation_value: options.cdn_invalidation_counter,
            whitelisted_extensions,
            blacklisted_extensions,
            whitelisted_uri_matcher,
            blacklisted_uri_matcher,
            html_compressor: options.htmlc_enable,
            environment: environment.clone(),
        })
    }

    /// Whether a rewriter built from this config does anything.
    ///
    /// Requires the primary switch, a front-end request, both host names,
    /// SSL permission when the request is over SSL, and a deployment with a
    /// single local host.
    pub fn is_active(&self) -> bool {
        let env = &self.environment;
        if !self.enabled {
            log::debug!("CDN rewriting disabled by options");
            return false;
        }
        if env.is_admin {
            log::debug!("CDN rewriting skipped for administrative request");
            return false;
        }
        if self.local_host.is_empty() || self.cdn_host.is_empty() {
            log::debug!("CDN rewriting needs both a local and a CDN host");
            return false;
        }
        if !self.allow_ssl && env.is_ssl {
            log::debug!("CDN rewriting disabled over SSL");
            return false;
        }
        if env.is_subdomain_sub_site() {
            log::debug!("CDN rewriting unsupported on sub-domain network sites");
            return false;
        }
        true
    }

    /// Whether a cache-busting parameter is appended to rewritten URLs.
    pub fn has_invalidation(&self) -> bool {
        !self.invalidation_param.is_empty() && self.invalidation_value != 0
    }
}

/// URI globs blacklisted regardless of options.
fn builtin_blacklist(environment: &Environment) -> Vec<&'static str> {
    let mut patterns = vec![ADMIN_URI_PATTERN];
    if environment.multisite {
        patterns.push(NETWORK_FILES_URI_PATTERN);
    }
    if environment.membership_plugin {
        patterns.push(MEMBERSHIP_FILES_URI_PATTERN);
    }
    patterns
}
