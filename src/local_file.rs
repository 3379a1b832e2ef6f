//! Classification of URLs as references to local static files.

use serde::Serialize;

use crate::url_parts::{trim_url, UrlParts};

/// A URL that points at a single file on the local host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalFile {
    /// Lowercase scheme, if the input carried one
    pub scheme: Option<String>,
    /// Lowercase file extension, never empty
    pub extension: String,
    /// Path plus the original query and fragment
    pub uri: String,
}

/// Classify `input` as a local file reference.
///
/// Returns `None` when the input is blank or unparseable, names a different
/// host, has no absolute path, ends in `/`, contains `..` or `./`, or has no
/// file extension.
///
/// # Examples
/// ```
/// use cdn_rewrite::classify_url;
///
/// let file = classify_url("http://example.com/img/a.JPG?x=1", "example.com").unwrap();
/// assert_eq!(file.extension, "jpg");
/// assert_eq!(file.uri, "/img/a.JPG?x=1");
///
/// assert!(classify_url("http://other.com/a.jpg", "example.com").is_none());
/// assert!(classify_url("/dir/", "example.com").is_none());
/// ```
pub fn classify_url(input: &str, local_host: &str) -> Option<LocalFile> {
    let input = trim_url(input);
    if input.is_empty() {
        return None;
    }

    let parts = UrlParts::parse(input)?;

    if let Some(host) = parts.host {
        if !host.eq_ignore_ascii_case(local_host) {
            return None;
        }
    }

    let path = parts.path;
    if !path.starts_with('/') || path.ends_with('/') {
        return None;
    }
    // Literal substring checks; `file..txt` is refused as well
    if path.contains("..") || path.contains("./") {
        return None;
    }

    let extension = extension(path);
    if extension.is_empty() {
        return None;
    }

    let mut uri = path.to_string();
    if let Some(query) = parts.query.filter(|q| !q.is_empty()) {
        uri.push('?');
        uri.push_str(query);
    }
    if let Some(fragment) = parts.fragment.filter(|f| !f.is_empty()) {
        uri.push('#');
        uri.push_str(fragment);
    }

    Some(LocalFile {
        scheme: parts
            .scheme
            .filter(|s| !s.is_empty())
            .map(|s| s.to_ascii_lowercase()),
        extension,
        uri,
    })
}

/// Lowercase extension of the last path segment, or an empty string.
pub(crate) fn extension(path: &str) -> String {
    let basename = path.rsplit('/').next().unwrap_or(path);
    match basename.rfind('.') {
        Some(idx) => basename[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}
