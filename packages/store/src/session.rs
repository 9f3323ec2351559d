//! # Session state machine and persistence
//!
//! [`Session`] is the in-memory authentication state shared by every view. Its
//! phase is derived from the fields rather than stored separately, so the fields
//! can never disagree with it:
//!
//! | Phase | `loading` | `user` / `token` | `error` |
//! |-------|-----------|------------------|---------|
//! | [`SessionPhase::Anonymous`] | false | none | none |
//! | [`SessionPhase::Authenticating`] | true | none | none |
//! | [`SessionPhase::Authenticated`] | false | both | none |
//! | [`SessionPhase::Error`] | false | none | message |
//!
//! [`SessionStore`] writes the user and token to a [`KeyValueStorage`] under the
//! keys [`TOKEN_KEY`] and [`USER_KEY`] and reads them back on start-up.

use crate::models::User;
use crate::storage::{KeyValueStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Session {
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
            error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Authenticating
        } else if self.user.is_some() && self.token.is_some() {
            SessionPhase::Authenticated
        } else if self.error.is_some() {
            SessionPhase::Error
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// A login or registration was submitted.
    pub fn begin(&mut self) {
        self.user = None;
        self.token = None;
        self.error = None;
        self.loading = true;
    }

    pub fn succeed(&mut self, user: User, token: String) {
        *self = Self::authenticated(user, token);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.user = None;
        self.token = None;
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Error text for the login/signup forms; empty when there is none.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

/// Persists the authenticated user and token across page loads.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Rebuild the session from storage. Both entries must be present and the user
    /// must parse, otherwise the session starts anonymous.
    pub fn restore(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY);
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        match (user, token) {
            (Some(user), Some(token)) if !token.is_empty() => Session::authenticated(user, token),
            _ => Session::default(),
        }
    }

    pub fn persist(&self, user: &User, token: &str) -> Result<(), StorageError> {
        let json = serde_json::to_string(user).map_err(|e| StorageError::Write {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &json)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::models::Role;

    fn admin() -> User {
        User {
            id: "u1".into(),
            name: "Ada".into(),
            email: "a@x.com".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::default();
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(!session.is_authenticated());
        assert_eq!(session.error_message(), "");
    }

    #[test]
    fn test_login_transitions() {
        let mut session = Session::default();

        session.begin();
        assert_eq!(session.phase(), SessionPhase::Authenticating);

        session.succeed(admin(), "tok123".into());
        assert_eq!(session.phase(), SessionPhase::Authenticated);
        assert_eq!(session.token.as_deref(), Some("tok123"));

        session.logout();
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[test]
    fn test_failed_attempt_leaves_no_session() {
        let mut session = Session::default();
        session.begin();
        session.fail("Invalid credentials");
        assert_eq!(session.phase(), SessionPhase::Error);
        assert_eq!(session.error_message(), "Invalid credentials");
        assert!(session.user.is_none());

        // retrying clears the previous error
        session.begin();
        assert!(session.error.is_none());
        assert_eq!(session.phase(), SessionPhase::Authenticating);
    }

    #[test]
    fn test_persist_and_restore() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone())
            .persist(&admin(), "tok123")
            .unwrap();

        // A fresh store over the same storage is a page reload.
        let restored = SessionStore::new(storage).restore();
        assert!(restored.is_authenticated());
        assert_eq!(restored.user, Some(admin()));
        assert_eq!(restored.token.as_deref(), Some("tok123"));
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.persist(&admin(), "tok123").unwrap();
        store.clear().unwrap();

        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert_eq!(store.restore().phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_restore_requires_both_entries() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok123").unwrap();
        assert!(!SessionStore::new(storage.clone()).restore().is_authenticated());

        storage.set(USER_KEY, "not json").unwrap();
        assert!(!SessionStore::new(storage).restore().is_authenticated());
    }
}
