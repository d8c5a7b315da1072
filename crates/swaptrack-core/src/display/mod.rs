//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders in the terminal. Collections and
//! operation results get newtype wrappers so the same data can be shown in a
//! compact list, a detail view or a confirmation message.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │  (Site, Task)   │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Sites, Tasks)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Confirmation, warning and error banners (OperationStatus)
//! - [`advisor`]: Analysis, schedule and swap plan output
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use swaptrack_core::{
//!     display::{OperationStatus, UpdateResult},
//!     models::Site,
//! };
//!
//! let site = Site::new("PH-G-0001");
//! let changes = vec!["Set risk to High".to_string()];
//! let output = format!("{}", UpdateResult::with_changes(site, changes));
//! assert!(output.contains("Changes made:"));
//!
//! let warning = OperationStatus::warning("Advisor offline");
//! assert_eq!(format!("{warning}"), "Warning: Advisor offline\n");
//! ```

pub mod advisor;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use advisor::Schedule;
pub use collections::{Sites, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, Severity};
