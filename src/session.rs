//! Session tracking strategies.
//!
//! DESIGN
//! ======
//! Two ways of knowing whether the user is signed in share one interface,
//! [`SessionStore`], chosen once at construction:
//!
//! - [`ServerFlagSession`]: the server renders the flag; login and logout end
//!   in a page reload so the server re-renders the navbar.
//! - [`ClientTokenSession`]: the login response carries a token kept in
//!   client storage; login switches state in place, logout drops the token
//!   and reloads without calling the backend.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Deserialize;

use crate::config::{SessionStrategy, WidgetConfig};
use crate::error::WidgetError;

/// Whether the user is currently signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

impl SessionState {
    #[must_use]
    pub fn from_flag(logged_in: bool) -> Self {
        if logged_in { Self::Authenticated } else { Self::Anonymous }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// What the controller does after the backend accepted the credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Reload so the server renders the signed-in page.
    Reload,
    /// Switch the widget to [`SessionState::Authenticated`] in place.
    Authenticated,
}

/// What the controller does when the user asks to log out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutAction {
    /// Call the logout endpoint and reload on success.
    Remote,
    /// Local session already cleared; reload now.
    Reload,
}

pub trait SessionStore {
    /// Session indicator at page load.
    fn initial_state(&self) -> SessionState;

    /// Finish a login the backend accepted, given the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be used or the session cannot
    /// be persisted.
    fn complete_login(&self, body: &str) -> Result<LoginOutcome, WidgetError>;

    /// Clear whatever local session state exists and say how to finish.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Storage`] when local state cannot be cleared.
    fn begin_logout(&self) -> Result<LogoutAction, WidgetError>;
}

// =============================================================
// Server flag
// =============================================================

#[derive(Clone, Copy, Debug)]
pub struct ServerFlagSession {
    logged_in: bool,
}

impl ServerFlagSession {
    #[must_use]
    pub fn new(logged_in: bool) -> Self {
        Self { logged_in }
    }
}

impl SessionStore for ServerFlagSession {
    fn initial_state(&self) -> SessionState {
        SessionState::from_flag(self.logged_in)
    }

    fn complete_login(&self, _body: &str) -> Result<LoginOutcome, WidgetError> {
        Ok(LoginOutcome::Reload)
    }

    fn begin_logout(&self) -> Result<LogoutAction, WidgetError> {
        Ok(LogoutAction::Remote)
    }
}

// =============================================================
// Client token
// =============================================================

/// Key/value store holding the authentication token.
pub trait TokenStorage {
    /// # Errors
    ///
    /// Returns [`WidgetError::Storage`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError>;

    /// # Errors
    ///
    /// Returns [`WidgetError::Storage`] when the write is refused.
    fn set(&self, key: &str, value: &str) -> Result<(), WidgetError>;

    /// # Errors
    ///
    /// Returns [`WidgetError::Storage`] when the entry cannot be removed.
    fn remove(&self, key: &str) -> Result<(), WidgetError>;
}

/// In-memory [`TokenStorage`], used when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), WidgetError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct LoginReply {
    token: String,
}

pub struct ClientTokenSession {
    storage: Box<dyn TokenStorage>,
    key: String,
}

impl ClientTokenSession {
    #[must_use]
    pub fn new(storage: Box<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// The stored token, if any. Read failures count as no token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.storage.get(&self.key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("nav-auth: cannot read stored token: {e}");
                None
            }
        }
    }
}

impl SessionStore for ClientTokenSession {
    fn initial_state(&self) -> SessionState {
        SessionState::from_flag(self.token().is_some())
    }

    fn complete_login(&self, body: &str) -> Result<LoginOutcome, WidgetError> {
        let reply: LoginReply =
            serde_json::from_str(body).map_err(|e| WidgetError::MalformedResponse(e.to_string()))?;
        if reply.token.is_empty() {
            return Err(WidgetError::MalformedResponse("empty token".to_owned()));
        }
        self.storage.set(&self.key, &reply.token)?;
        Ok(LoginOutcome::Authenticated)
    }

    fn begin_logout(&self) -> Result<LogoutAction, WidgetError> {
        self.storage.remove(&self.key)?;
        Ok(LogoutAction::Reload)
    }
}

/// Pick the session strategy named by `config`.
///
/// `storage` is only consulted by [`SessionStrategy::ClientToken`].
#[must_use]
pub fn session_store_for(config: &WidgetConfig, storage: Box<dyn TokenStorage>) -> Box<dyn SessionStore> {
    match config.strategy {
        SessionStrategy::ServerFlag => Box::new(ServerFlagSession::new(config.initial_session_state)),
        SessionStrategy::ClientToken => Box::new(ClientTokenSession::new(storage, config.token_key.clone())),
    }
}
