//! User accounts, credential checks and the persisted session.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::parse_column;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{User, UserRole},
    session::{hash_password, new_salt, verify_password},
};

/// Seeded administrator, created the first time the users table is used.
pub const DEFAULT_ADMIN_ID: &str = "admin-root-001";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@ericsson.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_NAME: &str = "Ericsson Admin";

/// Registrations whose email contains this marker become administrators.
const ADMIN_EMAIL_MARKER: &str = "admin@ericsson";

const CHECK_USER_ID_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)";
const CHECK_EMAIL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)";
const INSERT_USER_SQL: &str = "INSERT INTO users (id, email, name, role, password_salt, password_hash, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_CREDENTIALS_SQL: &str = "SELECT id, email, name, role, password_salt, password_hash FROM users WHERE email = ?1";
const SELECT_USER_SQL: &str = "SELECT id, email, name, role FROM users WHERE id = ?1";
const UPSERT_SESSION_SQL: &str = "INSERT INTO sessions (id, user_id, started_at) VALUES (1, ?1, ?2) ON CONFLICT(id) DO UPDATE SET user_id = excluded.user_id, started_at = excluded.started_at";
const SELECT_SESSION_USER_SQL: &str = "SELECT u.id, u.email, u.name, u.role FROM sessions s JOIN users u ON u.id = s.user_id WHERE s.id = 1";
const DELETE_SESSION_SQL: &str = "DELETE FROM sessions";

const INVALID_CREDENTIALS: &str = "Invalid credentials. Please check your email and password.";

impl super::Database {
    fn build_user_from_row(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            email: row.get(1)?,
            name: row.get(2)?,
            role: parse_column(row, 3)?,
        })
    }

    /// Creates the default administrator if it is missing.
    fn ensure_default_admin(&self) -> Result<()> {
        let exists: bool = self
            .connection
            .query_row(CHECK_USER_ID_EXISTS_SQL, params![DEFAULT_ADMIN_ID], |row| {
                row.get(0)
            })
            .db_context("Failed to check for default administrator")?;
        if exists {
            return Ok(());
        }

        let salt = new_salt();
        self.connection
            .execute(
                INSERT_USER_SQL,
                params![
                    DEFAULT_ADMIN_ID,
                    DEFAULT_ADMIN_EMAIL,
                    DEFAULT_ADMIN_NAME,
                    UserRole::Admin.as_str(),
                    salt,
                    hash_password(DEFAULT_ADMIN_PASSWORD, &salt),
                    Timestamp::now().to_string()
                ],
            )
            .db_context("Failed to seed default administrator")?;
        log::info!("Seeded default administrator {DEFAULT_ADMIN_EMAIL}");
        Ok(())
    }

    /// Registers a new account.
    ///
    /// Emails are unique regardless of case.
    pub fn create_user(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        self.ensure_default_admin()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_EMAIL_EXISTS_SQL, params![email], |row| row.get(0))
            .db_context("Failed to check email")?;
        if exists {
            return Err(TrackerError::invalid_input("email")
                .with_reason("User with this email already exists"));
        }

        let role = if email.to_lowercase().contains(ADMIN_EMAIL_MARKER) {
            UserRole::Admin
        } else {
            UserRole::User
        };
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        };
        let salt = new_salt();

        tx.execute(
            INSERT_USER_SQL,
            params![
                user.id,
                user.email,
                user.name,
                user.role.as_str(),
                salt,
                hash_password(password, &salt),
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to insert user")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(user)
    }

    /// Checks credentials and returns the matching account.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        self.ensure_default_admin()?;

        let record = self
            .connection
            .query_row(SELECT_CREDENTIALS_SQL, params![email], |row| {
                let user = Self::build_user_from_row(row)?;
                let salt: String = row.get(4)?;
                let digest: String = row.get(5)?;
                Ok((user, salt, digest))
            })
            .optional()
            .db_context("Failed to query user")?;

        match record {
            Some((user, salt, digest)) if verify_password(password, &salt, &digest) => Ok(user),
            _ => Err(TrackerError::Authentication {
                message: INVALID_CREDENTIALS.to_string(),
            }),
        }
    }

    /// Retrieves an account by ID.
    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.ensure_default_admin()?;
        self.connection
            .query_row(SELECT_USER_SQL, params![id], Self::build_user_from_row)
            .optional()
            .db_context("Failed to query user")
    }

    /// Records `user_id` as the signed-in user, replacing any prior session.
    pub fn save_session(&mut self, user_id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(
            UPSERT_SESSION_SQL,
            params![user_id, Timestamp::now().to_string()],
        )
        .db_context("Failed to save session")?;
        tx.commit().db_context("Failed to commit transaction")
    }

    /// Returns the signed-in user, if a session was saved.
    pub fn load_session(&self) -> Result<Option<User>> {
        self.connection
            .query_row(SELECT_SESSION_USER_SQL, [], Self::build_user_from_row)
            .optional()
            .db_context("Failed to load session")
    }

    /// Forgets the saved session.
    pub fn clear_session(&mut self) -> Result<()> {
        self.connection
            .execute(DELETE_SESSION_SQL, [])
            .db_context("Failed to clear session")?;
        Ok(())
    }
}
