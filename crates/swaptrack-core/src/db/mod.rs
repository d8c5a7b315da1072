//! SQLite storage for sites, users and the active session.
//!
//! This module provides the low-level database operations behind the
//! tracker. It owns the connection, applies the embedded schema on open, and
//! exposes query methods grouped by record type:
//!
//! - [`site_queries`]: sites and their tasks, equipment, milestones and
//!   generated instructions
//! - [`user_queries`]: accounts, credential checks and the persisted session
//!
//! Every write happens inside a transaction, so a failed save leaves no
//! partial rows behind.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod site_queries;
pub mod user_queries;
mod utils;

/// Database connection and operations handler.
#[derive(Debug)]
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
