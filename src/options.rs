//! Options-store snapshot and ambient environment.
//!
//! [`CdnOptions`] mirrors what an administrator configures; [`Environment`]
//! carries what the host application knows about the current request and
//! deployment. Both are plain data; [`crate::RewriteConfig::resolve`] turns
//! them into an immutable rewrite configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::url_parts::{trim_url, UrlParts};

/// CDN options as stored by the host application.
///
/// List options keep their stored text form: extension lists are separated
/// by `|`, `;`, `,` or whitespace, URI pattern lists by newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnOptions {
    /// Primary switch
    pub cdn_enable: bool,
    /// Whether an HTML compressor runs and should filter its JS/CSS parts
    pub htmlc_enable: bool,
    /// Host name files are served from
    pub cdn_host: String,
    /// Keep rewriting on SSL requests
    pub cdn_over_ssl: bool,
    /// Name of the cache-busting query parameter
    pub cdn_invalidation_var: String,
    /// Cache-busting counter, bumped on every purge
    pub cdn_invalidation_counter: u64,
    /// Extensions served from the CDN; empty selects the defaults
    pub cdn_whitelisted_extensions: String,
    /// Extensions never served from the CDN
    pub cdn_blacklisted_extensions: String,
    /// URI globs a file must match
    pub cdn_whitelisted_uri_patterns: String,
    /// URI globs that exclude a file
    pub cdn_blacklisted_uri_patterns: String,
}

impl CdnOptions {
    /// Parse options from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse options from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let options = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
        };

        log::debug!("Loaded CDN options from {:?}", path);
        Ok(options)
    }
}

/// Facts about the current request and deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Host name of the site itself
    pub local_host: String,
    /// Current request arrived over SSL
    pub is_ssl: bool,
    /// Current request is for the administration area
    pub is_admin: bool,
    /// Administrative URLs are forced onto SSL
    pub force_ssl_admin: bool,
    /// Network (multisite) install
    pub multisite: bool,
    /// Current site is the network's main site
    pub main_site: bool,
    /// Network sites live on sub-domains
    pub subdomain_install: bool,
    /// Membership plugin with protected file downloads is installed
    pub membership_plugin: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            local_host: String::new(),
            is_ssl: false,
            is_admin: false,
            force_ssl_admin: false,
            multisite: false,
            main_site: true,
            subdomain_install: false,
            membership_plugin: false,
        }
    }
}

impl Environment {
    /// Create an environment for a single-site deployment on `local_host`.
    pub fn new(local_host: impl Into<String>) -> Self {
        Self {
            local_host: local_host.into(),
            ..Default::default()
        }
    }

    /// Create an environment from the site's home URL.
    ///
    /// The local host is the host component of `home_url`, or empty when
    /// the URL has none.
    pub fn from_home_url(home_url: &str) -> Self {
        let host = UrlParts::parse(trim_url(home_url))
            .and_then(|parts| parts.host)
            .unwrap_or_default();
        Self::new(host)
    }

    /// Set whether the current request is over SSL.
    pub fn with_ssl(mut self, is_ssl: bool) -> Self {
        self.is_ssl = is_ssl;
        self
    }

    /// Whether this is a sub-site of a sub-domain network install.
    ///
    /// Only one local host is supported, so these sites cannot be rewritten.
    pub fn is_subdomain_sub_site(&self) -> bool {
        self.multisite && !self.main_site && self.subdomain_install
    }
}
