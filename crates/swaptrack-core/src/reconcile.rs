//! Progress reconciliation.
//!
//! A site's `progress` and `status` are stored alongside its tasks but are
//! fully determined by them, with one exception: while no task is complete the
//! status is left alone, so operator-set states such as `Blocked` or
//! `Planned` survive. The functions here are the only code that writes those
//! two fields.

use crate::models::{Site, SiteStatus, Task};

/// Toggles one task's completion flag and recomputes derived fields.
///
/// Returns a new site; the input is never modified. If `task_id` matches no
/// task (including when the site has no tasks at all) the site is returned
/// unchanged, progress included.
///
/// # Examples
///
/// ```rust
/// use swaptrack_core::{models::{default_tasks, Site, SiteStatus}, reconcile};
///
/// let mut site = Site::new("PH-G-0001");
/// site.tasks = default_tasks();
///
/// let updated = reconcile(&site, "2");
/// assert_eq!(updated.progress, 33);
/// assert_eq!(updated.status, SiteStatus::InProgress);
/// ```
pub fn reconcile(site: &Site, task_id: &str) -> Site {
    if !site.tasks.iter().any(|task| task.id == task_id) {
        return site.clone();
    }

    let tasks: Vec<Task> = site
        .tasks
        .iter()
        .map(|task| {
            if task.id == task_id {
                task.clone().completed(!task.is_completed)
            } else {
                task.clone()
            }
        })
        .collect();

    let progress = derive_progress(&tasks);
    Site {
        status: derive_status(progress, site.status),
        progress,
        tasks,
        ..site.clone()
    }
}

/// Recomputes `progress` and `status` from the site's current tasks.
///
/// Used when a site is saved with an edited checklist so the stored fields
/// cannot drift from the tasks. Sites without tasks are returned unchanged.
pub fn rederive(site: Site) -> Site {
    if site.tasks.is_empty() {
        return site;
    }
    let progress = derive_progress(&site.tasks);
    Site {
        status: derive_status(progress, site.status),
        progress,
        ..site
    }
}

/// Percentage of completed tasks, rounded half away from zero.
///
/// An empty list counts as one task, giving 0.
pub fn derive_progress(tasks: &[Task]) -> u8 {
    let completed = tasks.iter().filter(|task| task.is_completed).count();
    let total = tasks.len().max(1);
    // Integer form of round(100 * completed / total).
    ((200 * completed + total) / (2 * total)) as u8
}

/// Lifecycle status implied by `progress`, falling back to `prior` at 0.
pub fn derive_status(progress: u8, prior: SiteStatus) -> SiteStatus {
    match progress {
        100 => SiteStatus::Completed,
        0 => prior,
        _ => SiteStatus::InProgress,
    }
}
