//! Persistence interface for the site inventory.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Site, SiteFilter},
};

/// Durable storage of sites keyed by ID.
///
/// Implemented by [`Tracker`](crate::Tracker) over SQLite. Every method
/// fails with a storage error (see
/// [`ErrorKind::StorageUnavailable`](crate::ErrorKind::StorageUnavailable))
/// when the backing store cannot be read or written.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Every site, ordered by ID.
    async fn get_all(&self) -> Result<Vec<Site>>;

    /// One site with all nested records.
    async fn get(&self, id: &str) -> Result<Option<Site>>;

    /// Sites passing `filter`, ordered by ID.
    async fn list(&self, filter: SiteFilter) -> Result<Vec<Site>>;

    /// Inserts or replaces a site by ID, replacing its nested records.
    ///
    /// Sets `last_update` and returns the stored copy.
    async fn upsert(&self, site: Site) -> Result<Site>;

    /// Removes a site and its nested records. Returns whether it existed.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Removes every site. Returns how many were removed.
    async fn clear(&self) -> Result<usize>;
}
