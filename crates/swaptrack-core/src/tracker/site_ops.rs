//! Site storage operations for the Tracker.

use async_trait::async_trait;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Site, SiteFilter},
    repository::SiteRepository,
};

#[async_trait]
impl SiteRepository for Tracker {
    async fn get_all(&self) -> Result<Vec<Site>> {
        self.with_database(|db| db.list_sites(None)).await
    }

    async fn get(&self, id: &str) -> Result<Option<Site>> {
        let id = id.to_string();
        self.with_database(move |db| db.get_site(&id)).await
    }

    async fn list(&self, filter: SiteFilter) -> Result<Vec<Site>> {
        self.with_database(move |db| db.list_sites(Some(&filter)))
            .await
    }

    async fn upsert(&self, site: Site) -> Result<Site> {
        self.with_database(move |db| db.upsert_site(&site)).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.with_database(move |db| db.delete_site(&id)).await
    }

    async fn clear(&self) -> Result<usize> {
        self.with_database(|db| db.clear_sites()).await
    }
}

impl Tracker {
    /// Loads a site or fails with [`TrackerError::SiteNotFound`].
    pub(crate) async fn require_site(&self, id: &str) -> Result<Site> {
        self.get(id)
            .await?
            .ok_or_else(|| TrackerError::SiteNotFound { id: id.to_string() })
    }
}
