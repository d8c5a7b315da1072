//! Filter types for querying sites.

use super::{Site, SiteStatus};

/// Filter options for listing sites.
#[derive(Debug, Clone, Default)]
pub struct SiteFilter {
    /// Case-insensitive substring matched against site ID or name
    pub query: Option<String>,

    /// Only sites with this status
    pub status: Option<SiteStatus>,
}

impl SiteFilter {
    /// Whether a site passes every configured condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swaptrack_core::models::{Site, SiteFilter};
    ///
    /// let mut site = Site::new("PH-G-0042");
    /// site.name = "Makati Tower".to_string();
    ///
    /// let filter = SiteFilter { query: Some("makati".to_string()), status: None };
    /// assert!(filter.matches(&site));
    ///
    /// let filter = SiteFilter { query: Some("cebu".to_string()), status: None };
    /// assert!(!filter.matches(&site));
    /// ```
    pub fn matches(&self, site: &Site) -> bool {
        let query_ok = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                site.id.to_lowercase().contains(&q) || site.name.to_lowercase().contains(&q)
            }
        };

        query_ok && self.status.map_or(true, |status| site.status == status)
    }
}
