use super::{Result, SitemapError};

/// Contractor entries per sitemap page.
pub const ITEMS_PER_SITEMAP: usize = 1000;

/// First page that lists contractors; page 1 holds the static routes.
pub const FIRST_CONTRACTOR_PAGE: u32 = 2;

/// Zero-based `[start, end)` slice of the dataset rendered on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Computes the slice of a `total`-sized dataset shown on contractor `page`.
///
/// Pages whose first index falls past the end of the dataset are errors, so
/// a returned window is never empty.
///
/// # Example
///
/// ```
/// use fencesite_core::sitemap::page_window;
///
/// let window = page_window(3, 2500).unwrap();
/// assert_eq!((window.start, window.end), (1000, 2000));
///
/// let last = page_window(4, 2500).unwrap();
/// assert_eq!(last.len(), 500);
///
/// assert!(page_window(5, 2500).is_err());
/// ```
pub fn page_window(page: u32, total: usize) -> Result<PageWindow> {
    if page < FIRST_CONTRACTOR_PAGE {
        return Err(SitemapError::InvalidPage(page.to_string()));
    }

    let offset = (page - FIRST_CONTRACTOR_PAGE) as usize;
    let start = offset.saturating_mul(ITEMS_PER_SITEMAP);

    if start >= total {
        return Err(SitemapError::PageOutOfRange { page, start, total });
    }

    let end = start.saturating_add(ITEMS_PER_SITEMAP).min(total);

    Ok(PageWindow { page, start, end })
}
