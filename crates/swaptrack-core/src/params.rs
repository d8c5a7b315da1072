//! Parameter structures for tracker operations.
//!
//! These are plain data carriers shared by every front end. Interface layers
//! define their own argument types (with clap derives, for example) and
//! convert into these via `From`, so the core stays free of UI framework
//! dependencies.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct ToggleTaskArgs {
//!     pub site_id: String,
//!     pub task_id: String,
//! }
//!
//! impl From<ToggleTaskArgs> for ToggleTask {
//!     fn from(args: ToggleTaskArgs) -> Self {
//!         ToggleTask { site_id: args.site_id, task_id: args.task_id }
//!     }
//! }
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{
    EquipmentRole, MilestoneKind, RiskLevel, SiteFilter, SiteStatus, Vendor,
};

/// Parameters for operations requiring just a site ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the site to operate on
    pub id: String,
}

/// Parameters for listing sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSites {
    /// Case-insensitive substring of the site ID or name
    pub query: Option<String>,
    /// Only sites with this status
    pub status: Option<SiteStatus>,
}

impl From<&ListSites> for SiteFilter {
    fn from(params: &ListSites) -> Self {
        SiteFilter {
            query: params.query.clone(),
            status: params.status,
        }
    }
}

/// Parameters for creating or editing a site.
///
/// Fields left as `None` keep the stored value when the site exists, or take
/// the documented default when it does not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveSite {
    /// Site ID, required
    pub id: String,
    /// Display name, `Unnamed Node` when blank
    pub name: Option<String>,
    /// Region, `NCR` by default
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Legacy vendor, Huawei or Nokia
    pub current_vendor: Option<Vendor>,
    /// Operator-set status
    pub status: Option<SiteStatus>,
    pub risk_level: Option<RiskLevel>,
    pub scheduled_date: Option<Date>,
    pub assigned_team: Option<String>,
}

/// Parameters for toggling one checklist task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTask {
    pub site_id: String,
    pub task_id: String,
}

/// Parameters for recording equipment details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEquipment {
    pub site_id: String,
    /// Legacy module being removed or target module being installed
    pub role: EquipmentRole,
    pub model: Option<String>,
    /// Stored upper-case
    pub serial_number: Option<String>,
}

/// Parameters for recording milestone dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMilestone {
    pub site_id: String,
    pub kind: MilestoneKind,
    pub planned: Option<Date>,
    pub actual: Option<Date>,
}

/// Parameters for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Register {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Parameters for signing in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}
