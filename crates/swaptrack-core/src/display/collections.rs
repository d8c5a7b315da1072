//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Site, Task};

/// Newtype wrapper for displaying the site inventory as a compact list.
///
/// Each site is shown with its ID, name, status, progress and risk, unlike the
/// full [`Site`] display which includes the checklist and milestones.
///
/// # Examples
///
/// ```rust
/// use swaptrack_core::{display::Sites, models::Site};
///
/// let mut site = Site::new("PH-G-0042");
/// site.name = "Makati Tower".to_string();
///
/// let output = format!("{}", Sites(vec![site]));
/// assert!(output.contains("Makati Tower (ID: PH-G-0042)"));
/// assert_eq!(format!("{}", Sites(vec![])), "No sites found.\n");
/// ```
pub struct Sites(pub Vec<Site>);

impl Sites {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sites in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the sites.
    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.0.iter()
    }
}

impl Index<usize> for Sites {
    type Output = Site;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Sites {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Sites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No sites found.");
        }
        for site in &self.0 {
            let name = if site.name.is_empty() { "Unnamed Node" } else { &site.name };
            writeln!(f, "## {name} (ID: {}) {}%", site.id, site.progress)?;
            writeln!(f)?;
            writeln!(f, "- **Status**: {}", site.status.with_icon())?;
            writeln!(f, "- **Region**: {}", site.region)?;
            writeln!(f, "- **Risk**: {}", site.risk_level)?;
            writeln!(
                f,
                "- **Tasks**: {}/{}",
                site.completed_tasks(),
                site.tasks.len()
            )?;
            if let Some(date) = &site.scheduled_date {
                writeln!(f, "- **Scheduled**: {date}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a site's checklist.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}
