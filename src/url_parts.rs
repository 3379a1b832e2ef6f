//! Lenient splitting of URLs, URIs and bare query strings.
//!
//! The splitter accepts everything a page is likely to reference: absolute
//! URLs, scheme-relative URLs (`//host/path`), root-relative paths and plain
//! relative paths. It does not normalize anything; dot segments, case and
//! percent-encoding are left exactly as written.

/// Characters stripped from both ends of URL input.
pub(crate) const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trim whitespace and NUL bytes from both ends of a URL.
pub(crate) fn trim_url(input: &str) -> &str {
    input.trim_matches(TRIM_CHARS)
}

/// The components of a URL, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    /// Scheme without the trailing `:`
    pub scheme: Option<&'a str>,
    /// Host name (brackets kept for IPv6 literals)
    pub host: Option<&'a str>,
    /// Explicit port
    pub port: Option<u16>,
    /// Path, possibly empty
    pub path: &'a str,
    /// Query without the leading `?`
    pub query: Option<&'a str>,
    /// Fragment without the leading `#`
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// Split `input` into its components.
    ///
    /// Returns `None` for input that cannot be a URL: empty input, an empty
    /// authority (`http:///x`) or a non-numeric port.
    pub fn parse(input: &'a str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }

        let (rest, fragment) = split_off(input, '#');
        let (rest, query) = split_off(rest, '?');
        let mut parts = UrlParts {
            query,
            fragment,
            ..Default::default()
        };

        let rest = match split_scheme(rest) {
            Some((scheme, after)) => {
                parts.scheme = Some(scheme);
                after
            }
            None => rest,
        };

        match rest.strip_prefix("//") {
            Some(after_slashes) => {
                let (authority, path) = match after_slashes.find('/') {
                    Some(idx) => after_slashes.split_at(idx),
                    None => (after_slashes, ""),
                };
                let (host, port) = parse_authority(authority)?;
                parts.host = Some(host);
                parts.port = port;
                parts.path = path;
            }
            None => parts.path = rest,
        }

        Some(parts)
    }
}

fn split_off(s: &str, delim: char) -> (&str, Option<&str>) {
    match s.split_once(delim) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

/// Split a leading `scheme:` off. The scheme must start with a letter and
/// contain only letters, digits, `+`, `-` and `.`, so a colon inside a path
/// is never mistaken for one.
fn split_scheme(s: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = s.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some((scheme, rest))
}

fn parse_authority(authority: &str) -> Option<(&str, Option<u16>)> {
    // Drop user info
    let host_port = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };

    let (host, port) = if host_port.starts_with('[') {
        let end = host_port.find(']')?;
        let rest = &host_port[end + 1..];
        match rest.strip_prefix(':') {
            Some(port) => (&host_port[..=end], port),
            None if rest.is_empty() => (&host_port[..=end], ""),
            None => return None,
        }
    } else {
        host_port.rsplit_once(':').unwrap_or((host_port, ""))
    };

    if host.is_empty() {
        return None;
    }
    let port = if port.is_empty() {
        None
    } else {
        Some(port.parse::<u16>().ok()?)
    };

    Some((host, port))
}
