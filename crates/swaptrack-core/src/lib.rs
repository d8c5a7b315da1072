//! Core library for the swaptrack hardware-swap tracker.
//!
//! This crate tracks a nationwide radio equipment swap: an inventory of
//! sites, each with a deployment checklist, equipment records and milestone
//! dates, plus aggregate dashboards and a strategy advisor.
//!
//! - [`reconcile`]: the pure function that recomputes a site's progress and
//!   status whenever a task is toggled
//! - [`SiteRepository`]: async storage interface, implemented by [`Tracker`]
//!   over SQLite
//! - [`advisor`]: local heuristics or the Gemini API for analysis,
//!   scheduling and swap procedures
//! - [`Session`]: explicit authentication state passed to every operation
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] and produce markdown;
//! wrappers in [`display`] format collections and operation results. The
//! CLI renders that markdown in the terminal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use swaptrack_core::{params::{Login, SaveSite}, Session, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("swaptrack.db"))
//!     .build()
//!     .await?;
//!
//! let mut session = Session::Anonymous;
//! tracker
//!     .login(&mut session, &Login {
//!         email: "admin@ericsson.com".to_string(),
//!         password: "admin123".to_string(),
//!     })
//!     .await?;
//!
//! let saved = tracker
//!     .save_site(&session, &SaveSite {
//!         id: "PH-G-0001".to_string(),
//!         name: Some("Makati Tower".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", saved.site);
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod reconcile;
pub mod repository;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use advisor::{
    Advisor, AdvisorConfig, AdvisorMode, GeminiAdvisor, LocalStrategyEngine, ProjectAnalysis,
    ScheduleEntry, SwapPlan,
};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, Schedule, Severity, Sites, Tasks,
    UpdateResult,
};
pub use error::{ErrorKind, Result, TrackerError};
pub use models::{Site, SiteFilter, SiteStatus, Task, User, UserRole, Vendor};
pub use params::{Id, ListSites, Login, Register, SaveSite, SetEquipment, SetMilestone, ToggleTask};
pub use reconcile::{derive_progress, derive_status, reconcile, rederive};
pub use repository::SiteRepository;
pub use session::Session;
pub use tracker::{SaveOutcome, ToggleOutcome, Tracker, TrackerBuilder};
