//! High-level tracker API.
//!
//! [`Tracker`] is the facade every front end talks to. It implements
//! [`SiteRepository`](crate::SiteRepository) over SQLite and layers the
//! action-boundary workflow on top: each operation is one sequential
//! read-modify-write (load, reconcile or edit, persist, return the stored
//! copy).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Workflow     │    │   Repository    │    │    Database     │
//! │ (workflow,      │───▶│  (site_ops)     │───▶│   (via db/)     │
//! │  auth_ops)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Session & Advisor      Async storage          Blocking SQLite
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Tracker`] instances
//! - [`site_ops`]: [`SiteRepository`](crate::SiteRepository) implementation
//! - [`auth_ops`]: Registration, login, logout and session restore
//! - [`workflow`]: Task toggling, site edits, scheduling and analysis
//!
//! # Usage
//!
//! ```rust,no_run
//! use swaptrack_core::{params::{Login, ToggleTask}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/swaptrack.db"))
//!     .build()
//!     .await?;
//!
//! let mut session = tracker.restore_session().await?;
//! tracker
//!     .login(&mut session, &Login {
//!         email: "admin@ericsson.com".to_string(),
//!         password: "admin123".to_string(),
//!     })
//!     .await?;
//!
//! let outcome = tracker
//!     .toggle_task(&session, &ToggleTask {
//!         site_id: "PH-G-0001".to_string(),
//!         task_id: "2".to_string(),
//!     })
//!     .await?;
//! println!("{}", outcome.site());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, ResultExt},
};

pub mod auth_ops;
pub mod builder;
pub mod site_ops;
pub mod workflow;


pub use builder::TrackerBuilder;
pub use workflow::{SaveOutcome, ToggleOutcome};

/// Main tracker interface for managing sites, users and advisor runs.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs a blocking database operation on tokio's blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .with_context("Task join error")?
    }
}
