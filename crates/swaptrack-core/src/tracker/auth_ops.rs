//! Account and session operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::User,
    params::{Login, Register},
    session::Session,
};

impl Tracker {
    /// Creates an account and signs it in.
    ///
    /// Emails containing `admin@ericsson` are given the Admin role.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a blank name, a malformed
    /// email, an empty password or an email that is already registered
    pub async fn register(&self, session: &mut Session, params: &Register) -> Result<User> {
        let name = params.name.trim().to_string();
        let email = params.email.trim().to_string();
        let password = params.password.clone();

        if name.is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("Name is required"));
        }
        if !email.contains('@') {
            return Err(
                TrackerError::invalid_input("email").with_reason("A valid email address is required")
            );
        }
        if password.is_empty() {
            return Err(TrackerError::invalid_input("password").with_reason("Password is required"));
        }

        let user = self
            .with_database(move |db| {
                let user = db.create_user(&name, &email, &password)?;
                db.save_session(&user.id)?;
                Ok(user)
            })
            .await?;
        log::info!("Registered {} as {}", user.email, user.role);

        session.login(user.clone());
        Ok(user)
    }

    /// Checks credentials, persists the session and signs the user in.
    pub async fn login(&self, session: &mut Session, params: &Login) -> Result<User> {
        let email = params.email.trim().to_string();
        let password = params.password.clone();

        let user = self
            .with_database(move |db| {
                let user = db.authenticate(&email, &password)?;
                db.save_session(&user.id)?;
                Ok(user)
            })
            .await?;

        session.login(user.clone());
        Ok(user)
    }

    /// Forgets the persisted session and signs out.
    pub async fn logout(&self, session: &mut Session) -> Result<()> {
        self.with_database(|db| db.clear_session()).await?;
        session.logout();
        Ok(())
    }

    /// Rebuilds the session saved by the last login, if any.
    pub async fn restore_session(&self) -> Result<Session> {
        let user = self.with_database(|db| db.load_session()).await?;
        Ok(user.map_or(Session::Anonymous, Session::Authenticated))
    }

    /// Looks up an account by ID.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let id = id.to_string();
        self.with_database(move |db| db.get_user(&id)).await
    }
}
