//! Site CRUD operations and queries.
//!
//! A site row owns its child rows (tasks, equipment, milestones and
//! instructions). Upserts replace the children wholesale inside the same
//! transaction as the parent row.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, Transaction};

use super::utils::{json_column, parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{
        Coordinates, Equipment, Milestone, Site, SiteFilter, Task, TechnicalInstructions,
    },
};

const SITE_COLUMNS: &str = "id, name, region, lat, lng, current_vendor, target_vendor, status, progress, risk_level, scheduled_date, assigned_team, last_update";
const UPSERT_SITE_SQL: &str = "INSERT INTO sites (id, name, region, lat, lng, current_vendor, target_vendor, status, progress, risk_level, scheduled_date, assigned_team, last_update) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13) ON CONFLICT(id) DO UPDATE SET name = excluded.name, region = excluded.region, lat = excluded.lat, lng = excluded.lng, current_vendor = excluded.current_vendor, target_vendor = excluded.target_vendor, status = excluded.status, progress = excluded.progress, risk_level = excluded.risk_level, scheduled_date = excluded.scheduled_date, assigned_team = excluded.assigned_team, last_update = excluded.last_update";
const DELETE_SITE_SQL: &str = "DELETE FROM sites WHERE id = ?1";
const DELETE_ALL_SITES_SQL: &str = "DELETE FROM sites";

const SELECT_TASKS_SQL: &str = "SELECT id, label, assigned_role, is_completed FROM tasks WHERE site_id = ?1 ORDER BY position";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (site_id, id, label, assigned_role, is_completed, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DELETE_TASKS_SQL: &str = "DELETE FROM tasks WHERE site_id = ?1";

const SELECT_EQUIPMENT_SQL: &str = "SELECT id, role, equipment_type, vendor, model, serial_number FROM equipment WHERE site_id = ?1 ORDER BY role, id";
const INSERT_EQUIPMENT_SQL: &str = "INSERT INTO equipment (id, site_id, role, equipment_type, vendor, model, serial_number) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_EQUIPMENT_SQL: &str = "DELETE FROM equipment WHERE site_id = ?1";

const SELECT_MILESTONES_SQL: &str =
    "SELECT kind, planned, actual FROM milestones WHERE site_id = ?1";
const INSERT_MILESTONE_SQL: &str =
    "INSERT INTO milestones (site_id, kind, planned, actual) VALUES (?1, ?2, ?3, ?4)";
const DELETE_MILESTONES_SQL: &str = "DELETE FROM milestones WHERE site_id = ?1";

const SELECT_INSTRUCTIONS_SQL: &str =
    "SELECT steps, alerts, generated_at FROM technical_instructions WHERE site_id = ?1";
const INSERT_INSTRUCTIONS_SQL: &str = "INSERT INTO technical_instructions (site_id, steps, alerts, generated_at) VALUES (?1, ?2, ?3, ?4)";
const DELETE_INSTRUCTIONS_SQL: &str = "DELETE FROM technical_instructions WHERE site_id = ?1";

impl super::Database {
    /// Helper function to construct a Site (without children) from a row
    fn build_site_from_row(row: &Row) -> rusqlite::Result<Site> {
        Ok(Site {
            id: row.get(0)?,
            name: row.get(1)?,
            region: row.get(2)?,
            coordinates: Coordinates {
                lat: row.get(3)?,
                lng: row.get(4)?,
            },
            current_vendor: parse_column(row, 5)?,
            target_vendor: parse_column(row, 6)?,
            status: parse_column(row, 7)?,
            progress: row.get(8)?,
            risk_level: parse_column(row, 9)?,
            scheduled_date: parse_optional_column(row, 10)?,
            assigned_team: row.get(11)?,
            last_update: parse_column(row, 12)?,
            tasks: Vec::new(),
            milestones: Milestone::defaults(),
            equipment: Vec::new(),
            technical_instructions: None,
        })
    }

    /// Loads tasks, equipment, milestones and instructions into `site`.
    fn load_children(&self, site: &mut Site) -> Result<()> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_TASKS_SQL)
            .db_context("Failed to prepare task query")?;
        site.tasks = stmt
            .query_map(params![site.id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    label: row.get(1)?,
                    assigned_role: row.get(2)?,
                    is_completed: row.get(3)?,
                })
            })
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read tasks")?;

        let mut stmt = self
            .connection
            .prepare_cached(SELECT_EQUIPMENT_SQL)
            .db_context("Failed to prepare equipment query")?;
        site.equipment = stmt
            .query_map(params![site.id], |row| {
                Ok(Equipment {
                    id: row.get(0)?,
                    role: parse_column(row, 1)?,
                    equipment_type: row.get(2)?,
                    vendor: parse_column(row, 3)?,
                    model: row.get(4)?,
                    serial_number: row.get(5)?,
                })
            })
            .db_context("Failed to query equipment")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read equipment")?;

        let mut stmt = self
            .connection
            .prepare_cached(SELECT_MILESTONES_SQL)
            .db_context("Failed to prepare milestone query")?;
        let stored = stmt
            .query_map(params![site.id], |row| {
                Ok(Milestone {
                    kind: parse_column(row, 0)?,
                    planned: parse_optional_column(row, 1)?,
                    actual: parse_optional_column(row, 2)?,
                })
            })
            .db_context("Failed to query milestones")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read milestones")?;
        // Always expose the full set, filling in stored dates
        for milestone in stored {
            if let Some(slot) = site.milestones.iter_mut().find(|m| m.kind == milestone.kind) {
                *slot = milestone;
            }
        }

        site.technical_instructions = self
            .connection
            .query_row(SELECT_INSTRUCTIONS_SQL, params![site.id], |row| {
                Ok(TechnicalInstructions {
                    steps: json_column(row, 0)?,
                    alerts: json_column(row, 1)?,
                    generated_at: parse_column(row, 2)?,
                })
            })
            .optional()
            .db_context("Failed to query technical instructions")?;

        Ok(())
    }

    /// Retrieves a site with all of its children.
    pub fn get_site(&self, id: &str) -> Result<Option<Site>> {
        let mut site = self
            .connection
            .query_row(
                &format!("SELECT {SITE_COLUMNS} FROM sites WHERE id = ?1"),
                params![id],
                Self::build_site_from_row,
            )
            .optional()
            .db_context("Failed to query site")?;

        if let Some(ref mut site) = site {
            self.load_children(site)?;
        }
        Ok(site)
    }

    /// Lists sites ordered by ID, optionally filtered.
    pub fn list_sites(&self, filter: Option<&SiteFilter>) -> Result<Vec<Site>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {SITE_COLUMNS} FROM sites ORDER BY id"))
            .db_context("Failed to prepare site query")?;

        let rows = stmt
            .query_map([], Self::build_site_from_row)
            .db_context("Failed to query sites")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read sites")?;

        let mut sites = Vec::with_capacity(rows.len());
        for mut site in rows {
            if filter.map_or(true, |f| f.matches(&site)) {
                self.load_children(&mut site)?;
                sites.push(site);
            }
        }
        Ok(sites)
    }

    /// Inserts or replaces a site and all of its children.
    ///
    /// `last_update` is set to the current time; the stored copy is returned.
    pub fn upsert_site(&mut self, site: &Site) -> Result<Site> {
        let mut site = site.clone();
        site.last_update = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_SITE_SQL,
            params![
                site.id,
                site.name,
                site.region,
                site.coordinates.lat,
                site.coordinates.lng,
                site.current_vendor.as_str(),
                site.target_vendor.as_str(),
                site.status.as_str(),
                site.progress,
                site.risk_level.as_str(),
                site.scheduled_date.map(|d| d.to_string()),
                site.assigned_team,
                site.last_update.to_string(),
            ],
        )
        .db_context("Failed to upsert site")?;

        Self::replace_children(&tx, &site)?;

        tx.commit().db_context("Failed to commit transaction")?;
        log::debug!("Stored site {} ({}%)", site.id, site.progress);
        Ok(site)
    }

    fn replace_children(tx: &Transaction, site: &Site) -> Result<()> {
        for sql in [
            DELETE_TASKS_SQL,
            DELETE_EQUIPMENT_SQL,
            DELETE_MILESTONES_SQL,
            DELETE_INSTRUCTIONS_SQL,
        ] {
            tx.execute(sql, params![site.id])
                .db_context("Failed to clear site records")?;
        }

        for (position, task) in site.tasks.iter().enumerate() {
            tx.execute(
                INSERT_TASK_SQL,
                params![
                    site.id,
                    task.id,
                    task.label,
                    task.assigned_role,
                    task.is_completed,
                    position as i64
                ],
            )
            .db_context("Failed to insert task")?;
        }

        for item in &site.equipment {
            tx.execute(
                INSERT_EQUIPMENT_SQL,
                params![
                    item.id,
                    site.id,
                    item.role.as_str(),
                    item.equipment_type,
                    item.vendor.as_str(),
                    item.model,
                    item.serial_number
                ],
            )
            .db_context("Failed to insert equipment")?;
        }

        for milestone in &site.milestones {
            tx.execute(
                INSERT_MILESTONE_SQL,
                params![
                    site.id,
                    milestone.kind.as_str(),
                    milestone.planned.map(|d| d.to_string()),
                    milestone.actual.map(|d| d.to_string())
                ],
            )
            .db_context("Failed to insert milestone")?;
        }

        if let Some(instructions) = &site.technical_instructions {
            tx.execute(
                INSERT_INSTRUCTIONS_SQL,
                params![
                    site.id,
                    serde_json::to_string(&instructions.steps)?,
                    serde_json::to_string(&instructions.alerts)?,
                    instructions.generated_at.to_string()
                ],
            )
            .db_context("Failed to insert technical instructions")?;
        }

        Ok(())
    }

    /// Deletes a site; children are removed by cascade.
    ///
    /// Returns whether a site with this ID existed.
    pub fn delete_site(&mut self, id: &str) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let deleted = tx
            .execute(DELETE_SITE_SQL, params![id])
            .db_context("Failed to delete site")?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted > 0)
    }

    /// Deletes every site, returning how many were removed.
    pub fn clear_sites(&mut self) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let deleted = tx
            .execute(DELETE_ALL_SITES_SQL, [])
            .db_context("Failed to clear sites")?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted)
    }
}
