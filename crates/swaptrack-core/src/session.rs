//! Explicit authentication state.
//!
//! A [`Session`] is created at start-up (restored from storage when a login
//! was persisted) and passed to every workflow operation that needs to know
//! who is acting. Password digests are computed here so the storage layer
//! never handles plain-text comparison.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{
    error::{Result, TrackerError},
    models::User,
};

/// Who is currently acting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    /// Transition to the authenticated state.
    pub fn login(&mut self, user: User) {
        log::info!("Signed in as {}", user.email);
        *self = Session::Authenticated(user);
    }

    /// Transition back to anonymous.
    pub fn logout(&mut self) {
        if let Session::Authenticated(user) = self {
            log::info!("Signed out {}", user.email);
        }
        *self = Session::Anonymous;
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    /// Returns the signed-in user or an authentication error.
    pub fn require_user(&self) -> Result<&User> {
        self.user().ok_or_else(|| TrackerError::Authentication {
            message: "Not signed in. Run `swaptrack auth login` first.".to_string(),
        })
    }

    /// Returns the signed-in administrator.
    ///
    /// Anonymous sessions get an authentication error, signed-in
    /// non-administrators get [`TrackerError::PermissionDenied`].
    pub fn require_admin(&self, action: &str) -> Result<&User> {
        let user = self.require_user()?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(TrackerError::PermissionDenied {
                action: action.to_string(),
            })
        }
    }
}

/// Generates a fresh random salt.
pub(crate) fn new_salt() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Salted SHA-256 digest of a password, hex encoded.
pub(crate) fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Checks a password against a stored salt and digest.
pub(crate) fn verify_password(password: &str, salt: &str, digest: &str) -> bool {
    hash_password(password, salt) == digest
}
