//! Site model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{
    Equipment, EquipmentRole, Milestone, MilestoneKind, RiskLevel, SiteStatus, Task,
    TechnicalInstructions, Vendor,
};

/// Geographic position of a site in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Whether both components are inside the valid WGS84 range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Default for Coordinates {
    /// Metro Manila, where new entries are placed until surveyed.
    fn default() -> Self {
        Self {
            lat: 14.59,
            lng: 120.98,
        }
    }
}

/// One physical installation undergoing equipment replacement.
///
/// `progress` is stored for display but must only be changed through
/// [`crate::reconcile`]. `status` follows it on every task change; the
/// pre-execution statuses are set by an operator or the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    /// Operator-assigned identifier, immutable after creation
    pub id: String,

    /// Display name of the site
    pub name: String,

    /// Administrative region, e.g. `NCR` or `Visayas`
    pub region: String,

    pub coordinates: Coordinates,

    /// Vendor of the equipment being replaced
    pub current_vendor: Vendor,

    /// Vendor of the equipment being installed
    pub target_vendor: Vendor,

    /// Lifecycle status
    #[serde(default)]
    pub status: SiteStatus,

    /// Percentage of completed tasks, 0 to 100
    #[serde(default)]
    pub progress: u8,

    #[serde(default)]
    pub risk_level: RiskLevel,

    /// Date the swap is scheduled for
    pub scheduled_date: Option<Date>,

    /// Field team responsible for the swap
    pub assigned_team: Option<String>,

    /// Timestamp of the last write to the repository (UTC)
    pub last_update: Timestamp,

    /// Checklist in execution order
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Planned and actual milestone dates
    #[serde(default = "Milestone::defaults")]
    pub milestones: Vec<Milestone>,

    #[serde(default)]
    pub equipment: Vec<Equipment>,

    /// Generated swap procedure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_instructions: Option<TechnicalInstructions>,
}

impl Site {
    /// Creates a pending site with placeholder attributes and no tasks.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            region: "NCR".to_string(),
            coordinates: Coordinates::default(),
            current_vendor: Vendor::Huawei,
            target_vendor: Vendor::Ericsson,
            status: SiteStatus::Pending,
            progress: 0,
            risk_level: RiskLevel::Low,
            scheduled_date: None,
            assigned_team: None,
            last_update: Timestamp::now(),
            tasks: Vec::new(),
            milestones: Milestone::defaults(),
            equipment: Vec::new(),
            technical_instructions: None,
        }
    }

    /// Number of tasks marked complete.
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }

    /// Looks up a task by identifier.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Looks up a milestone by kind.
    pub fn milestone(&self, kind: MilestoneKind) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.kind == kind)
    }

    /// Returns the equipment record for one side of the swap.
    pub fn equipment_for(&self, role: EquipmentRole) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.role == role)
    }

    /// Whether the swap at this site is finished.
    pub fn is_completed(&self) -> bool {
        self.status == SiteStatus::Completed
    }
}
