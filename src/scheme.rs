//! Scheme selection for rewritten URLs.

use std::fmt;

/// Scheme of a rewritten CDN URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `http://`
    Http,
    /// `https://`
    Https,
    /// `//`, inheriting the scheme of the referencing page
    Relative,
}

impl Scheme {
    /// Resolve a requested scheme name.
    ///
    /// - absent, empty or unknown names follow the current request
    /// - `admin`, `login`, `login_post` and `rpc` are HTTPS when the request is,
    ///   or when administrative SSL is forced
    /// - `http`, `https` and `relative` are taken as-is
    pub fn resolve(requested: Option<&str>, request_is_ssl: bool, force_ssl_admin: bool) -> Self {
        let ambient = if request_is_ssl {
            Scheme::Https
        } else {
            Scheme::Http
        };

        let requested = match requested {
            Some(s) if !s.is_empty() => s.to_ascii_lowercase(),
            _ => return ambient,
        };

        match requested.as_str() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            "relative" => Scheme::Relative,
            "admin" | "login" | "login_post" | "rpc" if force_ssl_admin => Scheme::Https,
            _ => ambient,
        }
    }

    /// Prefix placed in front of the host.
    pub fn prefix(&self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
            Scheme::Relative => "//",
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Relative => "relative",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_scheme() {
        assert_eq!(Scheme::resolve(None, false, false), Scheme::Http);
        assert_eq!(Scheme::resolve(None, true, false), Scheme::Https);
        assert_eq!(Scheme::resolve(Some(""), true, false), Scheme::Https);
        assert_eq!(Scheme::resolve(Some("ftp"), false, false), Scheme::Http);
    }

    #[test]
    fn test_explicit_scheme() {
        assert_eq!(Scheme::resolve(Some("https"), false, false), Scheme::Https);
        assert_eq!(Scheme::resolve(Some("HTTP"), true, false), Scheme::Http);
        assert_eq!(Scheme::resolve(Some("relative"), true, false), Scheme::Relative);
    }

    #[test]
    fn test_admin_schemes() {
        assert_eq!(Scheme::resolve(Some("admin"), false, false), Scheme::Http);
        assert_eq!(Scheme::resolve(Some("login"), false, true), Scheme::Https);
        assert_eq!(Scheme::resolve(Some("login_post"), true, false), Scheme::Https);
        assert_eq!(Scheme::resolve(Some("rpc"), false, true), Scheme::Https);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Scheme::Http.prefix(), "http://");
        assert_eq!(Scheme::Https.prefix(), "https://");
        assert_eq!(Scheme::Relative.prefix(), "//");
    }
}
