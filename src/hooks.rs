//! Host insertion points the rewriter attaches to.

use std::fmt;

use crate::CdnRewriter;

/// Priority the rewriter registers its filters at; late, so other filters
/// have already produced their final URLs.
pub const HOOK_PRIORITY: i64 = i64::MAX - 10;

/// What a hook passes through the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// A single URL
    Url,
    /// An HTML fragment
    Content,
}

/// FilterHook names a host filter the rewriter registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterHook {
    HomeUrl,
    SiteUrl,
    NetworkHomeUrl,
    NetworkSiteUrl,
    ContentUrl,
    PluginsUrl,
    AttachmentUrl,
    ScriptLoaderSrc,
    StyleLoaderSrc,
    TheContent,
    TheExcerpt,
    WidgetText,
    /// JS/CSS parts of the HTML compressor
    PartUrl,
}

impl FilterHook {
    /// All hooks, in registration order.
    pub const ALL: [FilterHook; 13] = [
        FilterHook::HomeUrl,
        FilterHook::SiteUrl,
        FilterHook::NetworkHomeUrl,
        FilterHook::NetworkSiteUrl,
        FilterHook::ContentUrl,
        FilterHook::PluginsUrl,
        FilterHook::AttachmentUrl,
        FilterHook::ScriptLoaderSrc,
        FilterHook::StyleLoaderSrc,
        FilterHook::TheContent,
        FilterHook::TheExcerpt,
        FilterHook::WidgetText,
        FilterHook::PartUrl,
    ];

    /// Parse a hook from its host name.
    pub fn parse(s: &str) -> Option<Self> {
        FilterHook::ALL
            .into_iter()
            .find(|hook| hook.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Get the host's name for this hook.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterHook::HomeUrl => "home_url",
            FilterHook::SiteUrl => "site_url",
            FilterHook::NetworkHomeUrl => "network_home_url",
            FilterHook::NetworkSiteUrl => "network_site_url",
            FilterHook::ContentUrl => "content_url",
            FilterHook::PluginsUrl => "plugins_url",
            FilterHook::AttachmentUrl => "wp_get_attachment_url",
            FilterHook::ScriptLoaderSrc => "script_loader_src",
            FilterHook::StyleLoaderSrc => "style_loader_src",
            FilterHook::TheContent => "the_content",
            FilterHook::TheExcerpt => "get_the_excerpt",
            FilterHook::WidgetText => "widget_text",
            FilterHook::PartUrl => "part_url",
        }
    }

    /// Get what this hook filters.
    pub fn kind(&self) -> HookKind {
        match self {
            FilterHook::TheContent | FilterHook::TheExcerpt | FilterHook::WidgetText => {
                HookKind::Content
            }
            _ => HookKind::Url,
        }
    }

    /// Whether the host passes a requested scheme along with the URL.
    pub fn accepts_scheme(&self) -> bool {
        matches!(
            self,
            FilterHook::HomeUrl
                | FilterHook::SiteUrl
                | FilterHook::NetworkHomeUrl
                | FilterHook::NetworkSiteUrl
        )
    }
}

impl fmt::Display for FilterHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CdnRewriter {
    /// Hooks to register this rewriter for.
    ///
    /// Empty when inactive; the HTML compressor hook is included only when
    /// the compressor is enabled.
    pub fn hooks(&self) -> Vec<FilterHook> {
        let html_compressor = match self.config() {
            Some(config) if self.is_active() => config.html_compressor,
            _ => return Vec::new(),
        };

        FilterHook::ALL
            .into_iter()
            .filter(|hook| *hook != FilterHook::PartUrl || html_compressor)
            .collect()
    }

    /// Run the filter registered for `hook` on `value`.
    ///
    /// `scheme` is ignored by hooks that do not carry one.
    pub fn apply_filter(&self, hook: FilterHook, value: &str, scheme: Option<&str>) -> String {
        match hook.kind() {
            HookKind::Url => {
                let scheme = if hook.accepts_scheme() { scheme } else { None };
                self.rewrite_url(value, scheme)
            }
            HookKind::Content => self.rewrite_content(value),
        }
    }
}
