//! Status and classification enumerations for sites and their records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of site lifecycle statuses.
///
/// Only [`SiteStatus::InProgress`] and [`SiteStatus::Completed`] are ever
/// derived from task completion; every other status is set by an operator or
/// by the scheduling advisor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SiteStatus {
    /// Site has been registered but nothing has happened yet
    #[default]
    Pending,

    /// Site survey has been carried out
    Surveyed,

    /// Swap window has been scheduled
    Planned,

    /// Field work has started
    #[serde(rename = "In Progress")]
    InProgress,

    /// Every checklist task is done
    Completed,

    /// Work cannot proceed until an external issue is cleared
    Blocked,
}

impl SiteStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [SiteStatus; 6] = [
        SiteStatus::Pending,
        SiteStatus::Surveyed,
        SiteStatus::Planned,
        SiteStatus::InProgress,
        SiteStatus::Completed,
        SiteStatus::Blocked,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Pending => "Pending",
            SiteStatus::Surveyed => "Surveyed",
            SiteStatus::Planned => "Planned",
            SiteStatus::InProgress => "In Progress",
            SiteStatus::Completed => "Completed",
            SiteStatus::Blocked => "Blocked",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swaptrack_core::models::SiteStatus;
    ///
    /// assert_eq!(SiteStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(SiteStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(SiteStatus::Blocked.with_icon(), "✗ Blocked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            SiteStatus::Pending => "○ Pending",
            SiteStatus::Surveyed => "◔ Surveyed",
            SiteStatus::Planned => "◑ Planned",
            SiteStatus::InProgress => "➤ In Progress",
            SiteStatus::Completed => "✓ Completed",
            SiteStatus::Blocked => "✗ Blocked",
        }
    }
}

impl FromStr for SiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SiteStatus::Pending),
            "surveyed" => Ok(SiteStatus::Surveyed),
            "planned" => Ok(SiteStatus::Planned),
            "in progress" | "in_progress" | "inprogress" | "in-progress" => {
                Ok(SiteStatus::InProgress)
            }
            "completed" => Ok(SiteStatus::Completed),
            "blocked" => Ok(SiteStatus::Blocked),
            _ => Err(format!("Invalid site status: {s}")),
        }
    }
}

/// Operator-assessed risk of a site swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

/// Radio equipment vendors involved in the swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Vendor {
    #[default]
    Huawei,
    Nokia,
    Ericsson,
}

impl Vendor {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Huawei => "Huawei",
            Vendor::Nokia => "Nokia",
            Vendor::Ericsson => "Ericsson",
        }
    }

    /// Whether sites may currently run this vendor's equipment.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Vendor::Huawei | Vendor::Nokia)
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huawei" => Ok(Vendor::Huawei),
            "nokia" => Ok(Vendor::Nokia),
            "ericsson" => Ok(Vendor::Ericsson),
            _ => Err(format!("Invalid vendor: {s}")),
        }
    }
}

/// Access role of a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}
