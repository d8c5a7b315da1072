//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style headers and emphasis;
//! with colour disabled it reads as plain text.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Equipment, EquipmentRole, Milestone, MilestoneKind, ProjectStats, RegionSummary, RiskLevel,
    Site, SiteStatus, Task, User, UserRole, Vendor,
};

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EquipmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} {}. {} *({})*",
            self.checkbox(),
            self.id,
            self.label,
            self.assigned_role
        )
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = |d: Option<jiff::civil::Date>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
        write!(
            f,
            "- {}: planned {}, actual {}",
            self.kind,
            date(self.planned),
            date(self.actual)
        )?;
        match self.slip_days() {
            Some(days) if days > 0 => writeln!(f, " (**{days}d late**)"),
            Some(days) if days < 0 => writeln!(f, " ({}d early)", -days),
            _ => writeln!(f),
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        writeln!(
            f,
            "- {} ({}): model {}, serial {}",
            self.equipment_type,
            self.vendor,
            or_dash(&self.model),
            or_dash(&self.serial_number)
        )
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() { "Unnamed Node" } else { &self.name };
        writeln!(f, "# {}. {}", self.id, name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Progress: {}%", self.progress)?;
        writeln!(f, "- Risk: {}", self.risk_level)?;
        writeln!(f, "- Region: {}", self.region)?;
        writeln!(
            f,
            "- Coordinates: {:.4}, {:.4}",
            self.coordinates.lat, self.coordinates.lng
        )?;
        writeln!(f, "- Swap: {} → {}", self.current_vendor, self.target_vendor)?;
        if let Some(date) = &self.scheduled_date {
            writeln!(f, "- Scheduled: {date}")?;
        }
        if let Some(team) = &self.assigned_team {
            writeln!(f, "- Team: {team}")?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.last_update))?;

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks for this site.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        writeln!(f, "\n## Milestones")?;
        writeln!(f)?;
        for milestone in &self.milestones {
            write!(f, "{milestone}")?;
        }

        if !self.equipment.is_empty() {
            writeln!(f, "\n## Equipment")?;
            writeln!(f)?;
            for item in &self.equipment {
                write!(f, "{item}")?;
            }
        }

        if let Some(instructions) = &self.technical_instructions {
            writeln!(f, "\n## Swap Procedure")?;
            writeln!(f)?;
            for (n, step) in instructions.steps.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} ({}), *{}*",
                    n + 1,
                    step.task,
                    step.duration,
                    step.precaution
                )?;
            }
            if !instructions.alerts.is_empty() {
                writeln!(f)?;
                for alert in &instructions.alerts {
                    writeln!(f, "- **Alert**: {alert}")?;
                }
            }
            writeln!(f)?;
            writeln!(
                f,
                "Generated: {}",
                LocalDateTime(&instructions.generated_at)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} <{}> ({})", self.name, self.email, self.role)
    }
}

impl fmt::Display for ProjectStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Project Health")?;
        writeln!(f)?;
        writeln!(f, "- Sites: {}", self.total)?;
        writeln!(f, "- Completed: {} ({:.1}%)", self.completed, self.progress_percent)?;
        writeln!(f, "- In Progress: {}", self.in_progress)?;
        writeln!(f, "- Blocked: {}", self.blocked)?;
        writeln!(f, "- High Risk: {}", self.high_risk)?;

        if !self.regions.is_empty() {
            writeln!(f, "\n## Regions")?;
            writeln!(f)?;
            for region in &self.regions {
                write!(f, "{region}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for RegionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {}/{} completed, {} high risk, centred at {:.4}, {:.4}",
            self.region,
            self.completed,
            self.total,
            self.high_risk,
            self.centroid.lat,
            self.centroid.lng
        )
    }
}
