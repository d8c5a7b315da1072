//! Display implementations for advisor output.

use std::fmt;

use crate::advisor::{ProjectAnalysis, ScheduleEntry, SwapPlan};

impl fmt::Display for ProjectAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Strategy Analysis")?;
        writeln!(f)?;
        writeln!(f, "**Project health: {}**", self.health_percent)?;

        let sections = [
            ("Insights", &self.insights),
            ("Risk Mitigation", &self.risks),
            ("Priority Sites", &self.priorities),
        ];
        for (title, items) in sections {
            writeln!(f, "\n## {title}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SwapPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Swap Procedure")?;
        writeln!(f)?;
        for (n, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {} ({})", n + 1, step.task, step.duration)?;
            writeln!(f, "   - Safety: {}", step.precaution)?;
        }
        if !self.alerts.is_empty() {
            writeln!(f, "\n## Critical Alerts")?;
            writeln!(f)?;
            for alert in &self.alerts {
                writeln!(f, "- {alert}")?;
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a proposed deployment schedule.
///
/// # Examples
///
/// ```rust
/// use swaptrack_core::{advisor::ScheduleEntry, display::Schedule};
///
/// let entry = ScheduleEntry {
///     site_id: "PH-G-0001".to_string(),
///     scheduled_date: jiff::civil::date(2025, 3, 14),
///     rationale: "Regional cluster optimization for NCR.".to_string(),
/// };
/// let output = format!("{}", Schedule(vec![entry]));
/// assert!(output.contains("2025-03-14 · PH-G-0001"));
/// ```
pub struct Schedule(pub Vec<ScheduleEntry>);

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No open sites to schedule.");
        }
        writeln!(f, "# Deployment Schedule")?;
        writeln!(f)?;
        for entry in &self.0 {
            writeln!(
                f,
                "- **{} · {}**: {}",
                entry.scheduled_date, entry.site_id, entry.rationale
            )?;
        }
        Ok(())
    }
}
