//! Query parameters accepted by `/sitemap.xml`.

use serde::{Deserialize, Serialize};

use super::{Result, SitemapError, SitemapSelector};

/// Raw `/sitemap.xml` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl SitemapQuery {
    /// Builds a query from decoded `key=value` pairs in request order.
    ///
    /// When a key repeats, its first value wins and later ones are ignored.
    /// Unknown keys are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use fencesite_core::sitemap::SitemapQuery;
    ///
    /// let query = SitemapQuery::from_pairs([("page", "2"), ("page", "3")]);
    /// assert_eq!(query.page.as_deref(), Some("2"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "index" => &mut query.index,
                "refresh" => &mut query.refresh,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        query
    }

    /// `index=true` was requested.
    pub fn wants_index(&self) -> bool {
        is_true(self.index.as_deref())
    }

    /// `refresh=true` was requested.
    pub fn force_refresh(&self) -> bool {
        is_true(self.refresh.as_deref())
    }

    /// Picks the document to serve.
    ///
    /// The index wins when asked for explicitly or when no page is given.
    /// Page 1 is the static routes page, anything above it a contractor page.
    ///
    /// # Example
    ///
    /// ```
    /// use fencesite_core::sitemap::{SitemapQuery, SitemapSelector};
    ///
    /// let query = SitemapQuery { page: Some("3".into()), ..Default::default() };
    /// assert_eq!(query.selector().unwrap(), SitemapSelector::Contractors(3));
    ///
    /// assert_eq!(SitemapQuery::default().selector().unwrap(), SitemapSelector::Index);
    /// ```
    pub fn selector(&self) -> Result<SitemapSelector> {
        let page = self.page.as_deref().filter(|raw| !raw.is_empty());

        let Some(raw) = page else {
            return Ok(SitemapSelector::Index);
        };

        if self.wants_index() {
            return Ok(SitemapSelector::Index);
        }

        match parse_page_param(raw) {
            Some(1) => Ok(SitemapSelector::Static),
            Some(page) if page > 1 => Ok(SitemapSelector::Contractors(page)),
            _ => Err(SitemapError::InvalidPage(raw.to_string())),
        }
    }
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Lenient integer parse: leading whitespace and an optional `+` are
/// skipped, then the leading ASCII digits are read and anything after them
/// is ignored (`"2abc"` is page 2).
///
/// Returns `None` when there are no leading digits or the number overflows.
pub fn parse_page_param(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_len].parse().ok()
}
