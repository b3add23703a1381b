//! Pure types for request-scoped context.

use std::fmt;

/// Origin (`scheme://host`) the client used to reach this server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl RequestOrigin {
    /// Builds an origin from a `Host` value and an optional forwarded scheme.
    ///
    /// The scheme defaults to `http`.
    pub fn from_parts(host: &str, forwarded_proto: Option<&str>) -> Self {
        let scheme = forwarded_proto
            .and_then(|p| p.split(',').next())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or("http");
        Self(format!("{scheme}://{host}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base URL prefixed to every `<loc>` in a sitemap, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBase(pub String);
