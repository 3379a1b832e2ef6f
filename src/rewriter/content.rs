//! Scanning HTML for URL-bearing attributes.

use once_cell::sync::Lazy;
use regex::Regex;

/// An opening tag carrying an `href` or `src` attribute. The attribute value
/// is captured in group 1 when double-quoted and group 2 when single-quoted;
/// only the first such attribute of a tag is captured.
static URL_ATTRIBUTE_PATTERN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<[\w\-]+[^>]*?\s(?:href|src)\s*=\s*(?:"([^"'>]+?)"|'([^"'>]+?)')[^>]*?>"#,
    )
});

/// Replace every `href`/`src` attribute value in `html` with `rewrite(value)`.
///
/// Everything outside the attribute values is copied verbatim. Returns
/// `None` if the scanner is unavailable.
pub(crate) fn replace_url_attributes<F>(html: &str, mut rewrite: F) -> Option<String>
where
    F: FnMut(&str) -> String,
{
    let pattern = match URL_ATTRIBUTE_PATTERN.as_ref() {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("URL attribute scanner unavailable: {}", e);
            return None;
        }
    };

    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for caps in pattern.captures_iter(html) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        out.push_str(&html[last..value.start()]);
        out.push_str(&rewrite(value.as_str()));
        last = value.end();
    }
    out.push_str(&html[last..]);

    Some(out)
}
