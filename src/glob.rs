//! URI glob patterns compiled into a single matcher.
//!
//! Pattern syntax:
//! - `*` matches any run of characters, `/` included
//! - `^` matches any run of characters within one path segment
//! - everything else is literal
//!
//! Every pattern is anchored to a leading `/`, and a URI matches when the
//! pattern is found anywhere in it, ignoring case.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// A compiled, case-insensitive alternation of URI globs.
#[derive(Debug, Clone)]
pub struct UriMatcher {
    regex: Regex,
    patterns: Vec<String>,
}

impl UriMatcher {
    /// Check whether `uri` contains a match for any pattern.
    pub fn is_match(&self, uri: &str) -> bool {
        self.regex.is_match(uri)
    }

    /// The normalized glob patterns, in the order they were given.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The compiled regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Split a newline-separated pattern list into individual patterns.
///
/// The list is lowercased, lines are trimmed and blank lines dropped.
pub fn split_glob_lines(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compile glob patterns into one matcher.
///
/// Patterns are lowercased, trimmed and de-duplicated (first occurrence
/// wins). Returns `Ok(None)` when no pattern is left.
///
/// # Examples
/// ```
/// use cdn_rewrite::compile_glob_set;
///
/// let matcher = compile_glob_set(["*/wp-admin/*", "/^/files/*"]).unwrap().unwrap();
/// assert!(matcher.is_match("/blog/wp-admin/a.css"));
/// assert!(matcher.is_match("/site/files/2015/a.jpg"));
/// assert!(!matcher.is_match("/files.jpg"));
/// ```
pub fn compile_glob_set<I, S>(patterns: I) -> Result<Option<UriMatcher>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref().trim().to_lowercase();
        if pattern.is_empty() {
            continue;
        }
        let pattern = format!("/{}", pattern.trim_start_matches('/'));
        if !normalized.contains(&pattern) {
            normalized.push(pattern);
        }
    }

    if normalized.is_empty() {
        return Ok(None);
    }

    let alternation = normalized
        .iter()
        .map(|p| glob_to_regex(p))
        .collect::<Vec<_>>()
        .join("|");

    let regex = RegexBuilder::new(&format!("(?:{})", alternation))
        .case_insensitive(true)
        .build()?;

    log::debug!("Compiled {} URI pattern(s): {}", normalized.len(), regex.as_str());

    Ok(Some(UriMatcher {
        regex,
        patterns: normalized,
    }))
}

/// Translate one glob into regex source.
fn glob_to_regex(pattern: &str) -> String {
    regex::escape(pattern)
        .replace(r"\*", ".*?")
        .replace(r"\^", "[^/]*?")
}
