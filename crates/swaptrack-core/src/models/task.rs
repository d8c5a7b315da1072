//! Checklist task model and the default deployment template.

use serde::{Deserialize, Serialize};

/// One checklist step of a site's execution plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Identifier, unique within the owning site
    pub id: String,

    /// Short description of the work
    pub label: String,

    /// Whether the step has been signed off
    #[serde(default)]
    pub is_completed: bool,

    /// Field role responsible for the step
    pub assigned_role: String,
}

impl Task {
    /// Creates an incomplete task.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        assigned_role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_completed: false,
            assigned_role: assigned_role.into(),
        }
    }

    /// Returns a copy with the completion flag set as given.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Checkbox marker used in list displays.
    pub fn checkbox(&self) -> &'static str {
        if self.is_completed { "[x]" } else { "[ ]" }
    }
}

const DEFAULT_TEMPLATE: [(&str, &str, bool); 6] = [
    ("Site Survey & Pre-checks", "Surveyor", true),
    ("Equipment De-staging", "Field Tech", false),
    ("Ericsson Module Installation", "Field Tech", false),
    ("Fiber Re-patching", "Rigger", false),
    ("Integration & Testing", "Core Engineer", false),
    ("Acceptance Sign-off", "Team Lead", false),
];

/// The fixed six-step checklist given to sites saved without tasks.
///
/// The survey step ships pre-completed, so a freshly created site starts at
/// 17% progress once reconciled.
///
/// ```rust
/// use swaptrack_core::models::default_tasks;
///
/// let tasks = default_tasks();
/// assert_eq!(tasks.len(), 6);
/// assert_eq!(tasks[0].id, "1");
/// assert!(tasks[0].is_completed);
/// assert_eq!(tasks[5].assigned_role, "Team Lead");
/// ```
pub fn default_tasks() -> Vec<Task> {
    DEFAULT_TEMPLATE
        .iter()
        .enumerate()
        .map(|(index, (label, role, done))| {
            Task::new((index + 1).to_string(), *label, *role).completed(*done)
        })
        .collect()
}
