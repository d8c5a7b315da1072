//! Planned-versus-actual milestone dates.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The fixed set of milestones tracked for every site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MilestoneKind {
    Survey,
    Installation,
    Integration,
    Acceptance,
}

impl MilestoneKind {
    /// All milestones in execution order.
    pub const ALL: [MilestoneKind; 4] = [
        MilestoneKind::Survey,
        MilestoneKind::Installation,
        MilestoneKind::Integration,
        MilestoneKind::Acceptance,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneKind::Survey => "survey",
            MilestoneKind::Installation => "installation",
            MilestoneKind::Integration => "integration",
            MilestoneKind::Acceptance => "acceptance",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneKind::Survey => "Survey",
            MilestoneKind::Installation => "Installation",
            MilestoneKind::Integration => "Integration",
            MilestoneKind::Acceptance => "Acceptance",
        }
    }
}

impl FromStr for MilestoneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "survey" => Ok(MilestoneKind::Survey),
            "installation" => Ok(MilestoneKind::Installation),
            "integration" => Ok(MilestoneKind::Integration),
            "acceptance" => Ok(MilestoneKind::Acceptance),
            _ => Err(format!("Invalid milestone: {s}")),
        }
    }
}

/// One named milestone with its planned and actual dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub planned: Option<Date>,
    pub actual: Option<Date>,
}

impl Milestone {
    /// Creates a milestone with no dates recorded.
    pub fn empty(kind: MilestoneKind) -> Self {
        Self {
            kind,
            planned: None,
            actual: None,
        }
    }

    /// The complete, undated milestone set in execution order.
    pub fn defaults() -> Vec<Milestone> {
        MilestoneKind::ALL.into_iter().map(Milestone::empty).collect()
    }

    /// Days the actual date trails the planned one; negative when early.
    pub fn slip_days(&self) -> Option<i64> {
        let (planned, actual) = (self.planned?, self.actual?);
        let span = planned.until(actual).ok()?;
        Some(i64::from(span.get_days()))
    }
}
