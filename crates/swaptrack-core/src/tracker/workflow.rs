//! Action-boundary operations for the Tracker.
//!
//! Every mutating operation checks the session first, then performs one
//! load, edit and upsert. Progress is only ever changed through the
//! derivations in [`crate::reconcile`].

use jiff::Timestamp;

use super::Tracker;
use crate::{
    advisor::{Advisor, ProjectAnalysis, ScheduleEntry},
    display::{Sites, Tasks},
    error::{Result, TrackerError},
    models::{
        default_tasks, Coordinates, Equipment, EquipmentRole, ProjectStats, Site, SiteFilter,
        SiteStatus, TechnicalInstructions, Vendor,
    },
    params::{Id, ListSites, SaveSite, SetEquipment, SetMilestone, ToggleTask},
    reconcile::{derive_progress, reconcile, rederive},
    repository::SiteRepository,
    session::Session,
};

const UNNAMED_SITE: &str = "Unnamed Node";

/// Result of toggling a task.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// The task existed; the reconciled site was stored.
    Updated(Site),
    /// No task with that ID; nothing was written.
    Unchanged(Site),
}

impl ToggleOutcome {
    pub fn site(&self) -> &Site {
        match self {
            ToggleOutcome::Updated(site) | ToggleOutcome::Unchanged(site) => site,
        }
    }

    pub fn into_site(self) -> Site {
        match self {
            ToggleOutcome::Updated(site) | ToggleOutcome::Unchanged(site) => site,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, ToggleOutcome::Updated(_))
    }
}

/// Result of saving a site.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// The stored site
    pub site: Site,
    /// Whether the site did not exist before
    pub created: bool,
    /// Human-readable list of edited fields, empty on creation
    pub changes: Vec<String>,
}

/// Records `field: old → new` when the value actually changes.
fn track<T: PartialEq + std::fmt::Display>(
    changes: &mut Vec<String>,
    label: &str,
    slot: &mut T,
    value: Option<T>,
) {
    if let Some(value) = value {
        if *slot != value {
            changes.push(format!("{label}: {slot} → {value}"));
            *slot = value;
        }
    }
}

fn or_dash<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl Tracker {
    /// Flips one task and stores the reconciled site.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::SiteNotFound` for an unknown site. An unknown
    /// task is not an error: the site comes back as
    /// [`ToggleOutcome::Unchanged`] and nothing is written.
    pub async fn toggle_task(&self, session: &Session, params: &ToggleTask) -> Result<ToggleOutcome> {
        session.require_user()?;
        let site = self.require_site(&params.site_id).await?;

        if site.task(&params.task_id).is_none() {
            log::debug!(
                "Task {} not found on site {}, nothing to toggle",
                params.task_id,
                site.id
            );
            return Ok(ToggleOutcome::Unchanged(site));
        }

        let updated = reconcile(&site, &params.task_id);
        let stored = self.upsert(updated).await?;
        log::info!(
            "Toggled task {} on site {}: {}% {}",
            params.task_id,
            stored.id,
            stored.progress,
            stored.status
        );
        Ok(ToggleOutcome::Updated(stored))
    }

    /// Creates or edits a site.
    ///
    /// Missing fields keep their stored value, or take the defaults for a new
    /// site (name `Unnamed Node`, region `NCR`, Huawei to Ericsson, Pending,
    /// Low risk, the default checklist). Progress is re-derived from the
    /// tasks before storing. A new site also derives its status; an existing
    /// site keeps its stored or explicitly requested status.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a blank ID, Ericsson as the
    /// legacy vendor, out-of-range coordinates, or an explicit status that the
    /// task progress contradicts (Completed without every task done, or any
    /// other status with every task done)
    pub async fn save_site(&self, session: &Session, params: &SaveSite) -> Result<SaveOutcome> {
        session.require_admin("save site")?;

        let id = params.id.trim();
        if id.is_empty() {
            return Err(TrackerError::invalid_input("id").with_reason("Site ID is required"));
        }
        if params.current_vendor == Some(Vendor::Ericsson) {
            return Err(TrackerError::invalid_input("current_vendor")
                .with_reason("Legacy vendor must be Huawei or Nokia"));
        }

        let existing = self.get(id).await?;
        let created = existing.is_none();
        let mut site = existing.unwrap_or_else(|| Site::new(id));
        let mut changes = Vec::new();

        if let Some(name) = params.name.as_deref().map(str::trim) {
            if name != site.name {
                changes.push(format!("Name: {} → {name}", site.name));
                site.name = name.to_string();
            }
        }
        if let Some(region) = params.region.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            if region != site.region {
                changes.push(format!("Region: {} → {region}", site.region));
                site.region = region.to_string();
            }
        }
        if params.lat.is_some() || params.lng.is_some() {
            let coordinates = Coordinates {
                lat: params.lat.unwrap_or(site.coordinates.lat),
                lng: params.lng.unwrap_or(site.coordinates.lng),
            };
            if !coordinates.is_valid() {
                return Err(TrackerError::invalid_input("coordinates").with_reason(format!(
                    "({}, {}) is outside the valid latitude/longitude range",
                    coordinates.lat, coordinates.lng
                )));
            }
            if coordinates != site.coordinates {
                changes.push(format!(
                    "Coordinates: {:.4}, {:.4} → {:.4}, {:.4}",
                    site.coordinates.lat, site.coordinates.lng, coordinates.lat, coordinates.lng
                ));
                site.coordinates = coordinates;
            }
        }
        track(&mut changes, "Legacy vendor", &mut site.current_vendor, params.current_vendor);
        track(&mut changes, "Status", &mut site.status, params.status);
        track(&mut changes, "Risk", &mut site.risk_level, params.risk_level);
        if let Some(date) = params.scheduled_date {
            if site.scheduled_date != Some(date) {
                changes.push(format!("Scheduled: {} → {date}", or_dash(&site.scheduled_date)));
                site.scheduled_date = Some(date);
            }
        }
        if let Some(team) = params.assigned_team.as_deref().map(str::trim) {
            let team = (!team.is_empty()).then(|| team.to_string());
            if site.assigned_team != team {
                changes.push(format!(
                    "Team: {} → {}",
                    or_dash(&site.assigned_team),
                    or_dash(&team)
                ));
                site.assigned_team = team;
            }
        }

        if site.name.is_empty() {
            site.name = UNNAMED_SITE.to_string();
        }
        site.target_vendor = Vendor::Ericsson;
        if site.tasks.is_empty() {
            site.tasks = default_tasks();
        }

        if created && params.status.is_none() {
            site = rederive(site);
        } else {
            site.progress = derive_progress(&site.tasks);
        }
        if let Some(requested) = params.status {
            if (requested == SiteStatus::Completed) != (site.progress == 100) {
                return Err(TrackerError::invalid_input("status").with_reason(format!(
                    "{requested} contradicts task progress of {}%",
                    site.progress
                )));
            }
        }

        let stored = self.upsert(site).await?;
        if created {
            log::info!("Created site {} ({})", stored.id, stored.name);
            changes.clear();
        } else {
            log::info!("Updated site {} ({} changes)", stored.id, changes.len());
        }

        Ok(SaveOutcome {
            site: stored,
            created,
            changes,
        })
    }

    /// Creates a site, failing if the ID is taken.
    pub async fn create_site(&self, session: &Session, params: &SaveSite) -> Result<Site> {
        session.require_admin("create site")?;
        if self.get(params.id.trim()).await?.is_some() {
            return Err(TrackerError::invalid_input("id")
                .with_reason(format!("Site {} already exists", params.id.trim())));
        }
        Ok(self.save_site(session, params).await?.site)
    }

    /// Edits an existing site, failing if it does not exist.
    pub async fn update_site(&self, session: &Session, params: &SaveSite) -> Result<SaveOutcome> {
        session.require_admin("update site")?;
        self.require_site(params.id.trim()).await?;
        self.save_site(session, params).await
    }

    /// Records model and serial number for one side of the swap.
    ///
    /// The legacy record carries the site's current vendor; the target
    /// record is always Ericsson. The record is created if missing.
    pub async fn set_equipment(&self, session: &Session, params: &SetEquipment) -> Result<Site> {
        session.require_admin("record equipment")?;
        let mut site = self.require_site(&params.site_id).await?;

        let vendor = match params.role {
            EquipmentRole::Legacy => site.current_vendor,
            EquipmentRole::Target => Vendor::Ericsson,
        };
        let index = match site.equipment.iter().position(|e| e.role == params.role) {
            Some(index) => index,
            None => {
                site.equipment.push(Equipment::new(params.role, vendor));
                site.equipment.len() - 1
            }
        };

        let item = &mut site.equipment[index];
        item.vendor = vendor;
        if let Some(model) = &params.model {
            item.model = model.trim().to_string();
        }
        if let Some(serial) = &params.serial_number {
            item.serial_number = serial.trim().to_uppercase();
        }

        let stored = self.upsert(site).await?;
        log::info!("Recorded {} equipment on site {}", params.role, stored.id);
        Ok(stored)
    }

    /// Records planned and/or actual dates for one milestone.
    pub async fn set_milestone(&self, session: &Session, params: &SetMilestone) -> Result<Site> {
        session.require_admin("record milestone")?;
        if params.planned.is_none() && params.actual.is_none() {
            return Err(TrackerError::invalid_input("milestone")
                .with_reason("Provide a planned date, an actual date, or both"));
        }
        let mut site = self.require_site(&params.site_id).await?;

        if let Some(milestone) = site.milestones.iter_mut().find(|m| m.kind == params.kind) {
            if params.planned.is_some() {
                milestone.planned = params.planned;
            }
            if params.actual.is_some() {
                milestone.actual = params.actual;
            }
        }

        let stored = self.upsert(site).await?;
        log::info!("Recorded {} milestone on site {}", params.kind, stored.id);
        Ok(stored)
    }

    /// Asks the advisor for a schedule and applies it.
    ///
    /// Each scheduled site gets the proposed date and status Planned. Tasks
    /// are untouched, so progress stays as stored. Returns the applied entries.
    pub async fn auto_schedule(
        &self,
        session: &Session,
        advisor: &dyn Advisor,
    ) -> Result<Vec<ScheduleEntry>> {
        session.require_admin("auto-schedule")?;
        let sites = self.get_all().await?;
        let entries = advisor.schedule(&sites).await.map_err(|e| {
            log::warn!("{} advisor failed to schedule: {e}", advisor.name());
            e
        })?;

        let mut applied = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(site) = sites.iter().find(|s| s.id == entry.site_id) else {
                log::warn!("Skipping schedule entry for unknown site {}", entry.site_id);
                continue;
            };
            let mut site = site.clone();
            site.scheduled_date = Some(entry.scheduled_date);
            site.status = SiteStatus::Planned;
            self.upsert(site).await?;
            applied.push(entry);
        }

        log::info!("Scheduled {} sites via {}", applied.len(), advisor.name());
        Ok(applied)
    }

    /// Generates a swap procedure for a site and stores it on the site.
    pub async fn generate_swap_plan(
        &self,
        session: &Session,
        advisor: &dyn Advisor,
        params: &Id,
    ) -> Result<Site> {
        session.require_admin("generate swap plan")?;
        let mut site = self.require_site(&params.id).await?;

        let plan = advisor.swap_plan(&site).await.map_err(|e| {
            log::warn!("{} advisor failed to plan {}: {e}", advisor.name(), site.id);
            e
        })?;
        site.technical_instructions = Some(TechnicalInstructions {
            steps: plan.steps,
            alerts: plan.alerts,
            generated_at: Timestamp::now(),
        });

        let stored = self.upsert(site).await?;
        log::info!("Stored swap procedure for site {}", stored.id);
        Ok(stored)
    }

    /// Runs the advisor's project analysis over the whole inventory.
    pub async fn run_analysis(
        &self,
        session: &Session,
        advisor: &dyn Advisor,
    ) -> Result<ProjectAnalysis> {
        session.require_admin("run analysis")?;
        let sites = self.get_all().await?;
        advisor.analyze(&sites).await.map_err(|e| {
            log::warn!("{} advisor failed to analyze: {e}", advisor.name());
            e
        })
    }

    /// Aggregate statistics, including the per-region breakdown.
    pub async fn dashboard(&self) -> Result<ProjectStats> {
        let sites = self.get_all().await?;
        Ok(ProjectStats::from_sites(&sites))
    }

    /// Lists sites matching the search parameters.
    pub async fn list_sites(&self, params: &ListSites) -> Result<Sites> {
        let sites = self.list(SiteFilter::from(params)).await?;
        Ok(Sites(sites))
    }

    /// Returns one site with all nested records.
    pub async fn show_site(&self, params: &Id) -> Result<Site> {
        self.require_site(&params.id).await
    }

    /// Returns a site's checklist.
    pub async fn list_tasks(&self, params: &Id) -> Result<Tasks> {
        let site = self.require_site(&params.id).await?;
        Ok(Tasks(site.tasks))
    }

    /// Deletes a site and returns what was removed.
    pub async fn delete_site(&self, session: &Session, params: &Id) -> Result<Site> {
        session.require_admin("delete site")?;
        let site = self.require_site(&params.id).await?;
        if !self.delete(&site.id).await? {
            return Err(TrackerError::SiteNotFound { id: site.id });
        }
        log::info!("Deleted site {}", site.id);
        Ok(site)
    }

    /// Deletes every site. Returns how many were removed.
    pub async fn clear_sites(&self, session: &Session) -> Result<usize> {
        session.require_admin("clear sites")?;
        let removed = self.clear().await?;
        log::info!("Cleared {removed} sites");
        Ok(removed)
    }
}
