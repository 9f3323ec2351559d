//! # Session orchestration: login, registration, logout
//!
//! [`SessionManager`] pairs the REST client with a [`SessionStore`]. It performs the
//! auth request and persists the result; it does not own the in-memory
//! [`Session`]. The caller drives the state machine around it:
//!
//! ```text
//! session.begin();
//! let result = manager.login(&credentials).await;
//! session.settle(result, messages::LOGIN_FAILED);
//! ```
//!
//! Keeping the `Session` outside lets the UI hold it in a signal without keeping a
//! borrow alive across the request.

use store::{KeyValueStorage, Session, SessionStore};

use crate::client::{ApiClient, AuthResponse, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::transport::Transport;

#[derive(Clone, Debug)]
pub struct SessionManager<T: Transport, S: KeyValueStorage> {
    api: ApiClient<T>,
    store: SessionStore<S>,
}

impl<T: Transport + Clone, S: KeyValueStorage> SessionManager<T, S> {
    /// Client authenticated as `session`, or unauthenticated when it has no token.
    pub fn client_for(&self, session: &Session) -> ApiClient<T> {
        self.api.with_token(session.token.clone())
    }
}

impl<T: Transport, S: KeyValueStorage> SessionManager<T, S> {
    pub fn new(api: ApiClient<T>, store: SessionStore<S>) -> Self {
        Self { api, store }
    }

    /// Session found in durable storage at start-up.
    pub fn restore(&self) -> Session {
        self.store.restore()
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let auth = self.api.login(credentials).await?;
        self.remember(&auth);
        tracing::info!("signed in as {}", auth.user.id);
        Ok(auth)
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let auth = self.api.register(form).await?;
        self.remember(&auth);
        tracing::info!("registered {}", auth.user.id);
        Ok(auth)
    }

    /// Drop the stored credentials and reset `session` to anonymous.
    pub fn logout(&self, session: &mut Session) {
        if let Err(e) = self.store.clear() {
            tracing::error!("failed to clear stored session: {e}");
        }
        session.logout();
        tracing::info!("signed out");
    }

    fn remember(&self, auth: &AuthResponse) {
        if let Err(e) = self.store.persist(&auth.user, &auth.token) {
            tracing::error!("failed to persist session: {e}");
        }
    }
}

/// Apply an auth result to the session state machine.
pub trait SettleAuth {
    fn settle(&mut self, result: Result<AuthResponse, ApiError>, fallback: &str);
}

impl SettleAuth for Session {
    fn settle(&mut self, result: Result<AuthResponse, ApiError>, fallback: &str) {
        match result {
            Ok(auth) => self.succeed(auth.user, auth.token),
            Err(e) => {
                tracing::warn!("authentication failed: {e}");
                self.fail(e.user_message(fallback));
            }
        }
    }
}
