//! Process-wide rewriter and public filter API.

use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::options::{CdnOptions, Environment};
use crate::CdnRewriter;

/// Installed rewriter
static GLOBAL_REWRITER: Lazy<ArcSwapOption<CdnRewriter>> = Lazy::new(ArcSwapOption::empty);

/// Install `rewriter` as the process-wide rewriter, replacing any previous one.
///
/// Calls already in flight finish with the rewriter they started with.
pub fn install(rewriter: CdnRewriter) {
    let active = rewriter.is_active();
    GLOBAL_REWRITER.store(Some(Arc::new(rewriter)));
    log::debug!("Installed CDN rewriter (active: {})", active);
}

/// Build a rewriter from options and install it.
///
/// Use this again after the options change, e.g. when a cache purge bumps
/// the invalidation counter.
pub fn install_from_options(options: &CdnOptions, environment: &Environment) {
    install(CdnRewriter::from_options(options, environment));
}

/// Remove the process-wide rewriter.
pub fn uninstall() {
    GLOBAL_REWRITER.store(None);
}

/// Check if a rewriter is installed.
pub fn is_installed() -> bool {
    GLOBAL_REWRITER.load().is_some()
}

/// Get the installed rewriter.
pub fn current() -> Option<Arc<CdnRewriter>> {
    GLOBAL_REWRITER.load_full()
}

/// Filter a URL through the installed rewriter.
///
/// Returns `url` unchanged when nothing is installed.
///
/// # Examples
/// ```ignore
/// use cdn_rewrite::filter_url;
///
/// let url = filter_url("http://example.com/img/a.jpg", None);
/// ```
pub fn filter_url(url: &str, scheme: Option<&str>) -> String {
    match &*GLOBAL_REWRITER.load() {
        Some(rewriter) => rewriter.rewrite_url(url, scheme),
        None => url.to_string(),
    }
}

/// Filter an HTML fragment through the installed rewriter.
///
/// Returns `html` unchanged when nothing is installed.
pub fn filter_content(html: &str) -> String {
    match &*GLOBAL_REWRITER.load() {
        Some(rewriter) => rewriter.rewrite_content(html),
        None => html.to_string(),
    }
}
