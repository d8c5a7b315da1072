//! Data models for sites and their nested records.
//!
//! This module contains the core domain models of the swap tracker: a
//! [`Site`] owns its checklist [`Task`]s, [`Equipment`] records and
//! [`Milestone`] dates, and carries the derived `progress` and `status`
//! fields. Display implementations live in [`crate::display::models`] to
//! keep data structures separate from presentation.
//!
//! # Examples
//!
//! ```rust
//! use swaptrack_core::models::{default_tasks, Site, SiteStatus};
//!
//! let mut site = Site::new("PH-G-1024");
//! site.name = "Quezon City Hub".to_string();
//! site.tasks = default_tasks();
//!
//! assert_eq!(site.status, SiteStatus::Pending);
//! assert_eq!(site.completed_tasks(), 1);
//! println!("{site}"); // Markdown with metadata, checklist and milestones
//! ```

pub mod equipment;
pub mod filters;
pub mod instructions;
pub mod milestone;
pub mod site;
pub mod status;
pub mod summary;
pub mod task;
pub mod user;

#[cfg(test)]
mod tests;

pub use equipment::{Equipment, EquipmentRole};
pub use filters::SiteFilter;
pub use instructions::{SwapStep, TechnicalInstructions};
pub use milestone::{Milestone, MilestoneKind};
pub use site::{Coordinates, Site};
pub use status::{RiskLevel, SiteStatus, UserRole, Vendor};
pub use summary::{ProjectStats, RegionSummary};
pub use task::{default_tasks, Task};
pub use user::User;
