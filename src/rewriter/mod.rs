//! The CDN rewriter.

mod config;
mod content;

pub use config::{
    RewriteConfig, ADMIN_URI_PATTERN, ALWAYS_BLACKLISTED_EXTENSION, MEMBERSHIP_FILES_URI_PATTERN,
    NETWORK_FILES_URI_PATTERN,
};

use std::borrow::Cow;

use crate::options::{CdnOptions, Environment};
use crate::query::add_query_arg;
use crate::rule::{ExtensionRule, Rule, UriRule};
use crate::url_parts::trim_url;
use crate::{classify_url, Decision, LocalFile, Scheme};

/// CdnRewriter moves references to local static files onto a CDN host.
///
/// A file is rewritten when it is local and passes, in order:
/// 1. the extension whitelist
/// 2. the extension blacklist
/// 3. the URI whitelist (when configured)
/// 4. the URI blacklist
///
/// Anything else, including every input of an inactive rewriter, is
/// returned unchanged. The rewriter holds no mutable state and can be
/// shared between threads.
///
/// # Examples
/// ```
/// use cdn_rewrite::{CdnOptions, CdnRewriter, Environment};
///
/// let options = CdnOptions {
///     cdn_enable: true,
///     cdn_host: "cdn.example.com".to_string(),
///     cdn_whitelisted_extensions: "jpg|css".to_string(),
///     cdn_invalidation_var: "v".to_string(),
///     cdn_invalidation_counter: 7,
///     ..Default::default()
/// };
/// let rewriter = CdnRewriter::from_options(&options, &Environment::new("example.com"));
///
/// assert_eq!(
///     rewriter.rewrite_url("http://example.com/img/a.jpg", None),
///     "http://cdn.example.com/img/a.jpg?v=7"
/// );
/// assert_eq!(rewriter.rewrite_url("http://example.com/x.php", None), "http://example.com/x.php");
/// ```
pub struct CdnRewriter {
    /// `None` when the options failed to resolve
    config: Option<RewriteConfig>,
    active: bool,
    /// Filter stages in evaluation order
    rules: Vec<Box<dyn Rule>>,
}

impl CdnRewriter {
    /// Create a rewriter from a resolved configuration.
    pub fn new(config: RewriteConfig) -> Self {
        let active = config.is_active();

        let mut rules: Vec<Box<dyn Rule>> = vec![
            Box::new(ExtensionRule::whitelist(config.whitelisted_extensions.clone())),
            Box::new(ExtensionRule::blacklist(config.blacklisted_extensions.clone())),
        ];
        if let Some(matcher) = &config.whitelisted_uri_matcher {
            rules.push(Box::new(UriRule::whitelist(matcher.clone())));
        }
        rules.push(Box::new(UriRule::blacklist(
            config.blacklisted_uri_matcher.clone(),
        )));

        if active {
            log::debug!(
                "CDN rewriting active: {} -> {} ({} rules)",
                config.local_host,
                config.cdn_host,
                rules.len()
            );
        }

        Self {
            config: Some(config),
            active,
            rules,
        }
    }

    /// Create a rewriter straight from options and environment.
    ///
    /// Options that fail to resolve produce an inactive rewriter.
    pub fn from_options(options: &CdnOptions, environment: &Environment) -> Self {
        match RewriteConfig::resolve(options, environment) {
            Ok(config) => Self::new(config),
            Err(e) => {
                log::warn!("Invalid CDN configuration, rewriting disabled: {}", e);
                Self::disabled()
            }
        }
    }

    /// Create a rewriter that leaves everything unchanged.
    pub fn disabled() -> Self {
        Self {
            config: None,
            active: false,
            rules: Vec::new(),
        }
    }

    /// Whether this rewriter changes anything.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the configuration, if the options resolved.
    pub fn config(&self) -> Option<&RewriteConfig> {
        self.config.as_ref()
    }

    fn active_config(&self) -> Option<&RewriteConfig> {
        self.config.as_ref().filter(|_| self.active)
    }

    /// Classify `input` as a file on the local host.
    ///
    /// Always `None` for an inactive rewriter.
    pub fn classify_url(&self, input: &str) -> Option<LocalFile> {
        let config = self.active_config()?;
        classify_url(input, &config.local_host)
    }

    /// Decide what happens to `input` without building the rewritten URL.
    pub fn evaluate(&self, input: &str) -> Decision {
        self.inspect(input).0
    }

    /// Decide what happens to `input`, also returning the classified file.
    pub fn inspect(&self, input: &str) -> (Decision, Option<LocalFile>) {
        if !self.active {
            return (Decision::Inactive, None);
        }
        let Some(file) = self.classify_url(input) else {
            log::trace!("Not a local file: {}", input);
            return (Decision::NotLocal, None);
        };

        for rule in &self.rules {
            if !rule.admits(&file) {
                log::trace!("Rejected by {}: {}", rule.stage(), file.uri);
                return (Decision::Rejected(rule.stage()), Some(file));
            }
        }

        (Decision::Rewrite, Some(file))
    }

    /// Rewrite a URL onto the CDN host, or return it unchanged.
    ///
    /// `scheme` overrides the scheme of the input; see [`Scheme::resolve`].
    pub fn rewrite_url(&self, input: &str, scheme: Option<&str>) -> String {
        self.rewrite_url_with(input, scheme, false)
    }

    /// Rewrite a URL taken from an HTML attribute.
    ///
    /// With `escape_html`, entities in `input` are decoded before
    /// classification and the result is attribute-encoded. Rejected input is
    /// returned exactly as given.
    pub fn rewrite_url_with(&self, input: &str, scheme: Option<&str>, escape_html: bool) -> String {
        self.try_rewrite(input, scheme, escape_html)
            .unwrap_or_else(|| input.to_string())
    }

    fn try_rewrite(&self, input: &str, scheme: Option<&str>, escape_html: bool) -> Option<String> {
        let config = self.active_config()?;
        if trim_url(input).is_empty() {
            return None;
        }

        let decoded = if escape_html {
            html_escape::decode_html_entities(input)
        } else {
            Cow::Borrowed(input)
        };

        let (decision, file) = self.inspect(&decoded);
        let file = file.filter(|_| decision.is_rewrite())?;

        let env = &config.environment;
        let scheme = Scheme::resolve(
            scheme.or(file.scheme.as_deref()),
            env.is_ssl,
            env.force_ssl_admin,
        );

        let mut url = format!("{}{}{}", scheme.prefix(), config.cdn_host, file.uri);
        if config.has_invalidation() {
            url = add_query_arg(
                &url,
                &config.invalidation_param,
                &config.invalidation_value.to_string(),
            );
        }

        if escape_html {
            Some(html_escape::encode_quoted_attribute(&url).into_owned())
        } else {
            Some(url)
        }
    }

    /// Rewrite every eligible `href`/`src` attribute in an HTML fragment.
    ///
    /// Markup outside the rewritten attribute values is left byte for byte.
    pub fn rewrite_content(&self, html: &str) -> String {
        if !self.active || html.is_empty() || !html.contains('<') {
            return html.to_string();
        }

        content::replace_url_attributes(html, |url| self.rewrite_url_with(url, None, true))
            .unwrap_or_else(|| html.to_string())
    }
}
