//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for "is a user signed in".
//! It is provided via context and handed to entry guards and flows, which
//! never read storage themselves. Token validity is only learned when the
//! backend rejects a later request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{KeyValueStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const IDENTITY_KEY: &str = "user_email";

/// Bearer token plus the identity the user signed in with.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("identity", &self.identity)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the current session. The token entry alone decides presence;
    /// a missing identity reads back as empty.
    pub fn get(&self) -> Option<Session> {
        let token = self.storage.get_item(TOKEN_KEY)?;
        let identity = self.storage.get_item(IDENTITY_KEY).unwrap_or_default();
        Some(Session { token, identity })
    }

    /// Persist both entries. Identity goes first so a session never becomes
    /// visible before it is complete; a failed token write puts the previous
    /// identity back, so an existing session survives intact.
    ///
    /// # Errors
    ///
    /// Returns the storage error if either write fails.
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let previous = self.storage.get_item(IDENTITY_KEY);
        self.storage.set_item(IDENTITY_KEY, &session.identity)?;
        if let Err(e) = self.storage.set_item(TOKEN_KEY, &session.token) {
            self.restore_identity(previous.as_deref());
            return Err(e);
        }
        Ok(())
    }

    fn restore_identity(&self, previous: Option<&str>) {
        match previous {
            Some(identity) => {
                if let Err(e) = self.storage.set_item(IDENTITY_KEY, identity) {
                    log::warn!("failed to restore previous identity: {e}");
                }
            }
            None => self.storage.remove_item(IDENTITY_KEY),
        }
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(IDENTITY_KEY);
    }
}
