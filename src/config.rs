//! Explicit widget configuration.
//!
//! Replaces the ambient `loginUrl` / `logoutUrl` / `isLoggedIn` page globals
//! with one value handed to the initializer. The browser shell loads it from
//! a JSON data island and falls back to the globals for older templates.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_ERROR_MESSAGE, DEFAULT_LOGIN_LABEL, DEFAULT_LOGOUT_LABEL, DEFAULT_SCROLL_SPY_OFFSET, DEFAULT_TOKEN_KEY,
};
use crate::error::WidgetError;

/// How the widget learns and tracks whether the user is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStrategy {
    /// The server renders the flag; login and logout reload the page.
    #[default]
    ServerFlag,
    /// A token issued at login is kept in `localStorage`.
    ClientToken,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub login_endpoint: String,
    pub logout_endpoint: String,
    /// Server-rendered login flag. Ignored by [`SessionStrategy::ClientToken`].
    #[serde(default, alias = "isLoggedIn", deserialize_with = "de_flag")]
    pub initial_session_state: bool,
    #[serde(default)]
    pub strategy: SessionStrategy,
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_scroll_spy_offset")]
    pub scroll_spy_offset: u32,
    #[serde(default = "default_error_message")]
    pub error_message: String,
    #[serde(default = "default_login_label")]
    pub login_label: String,
    #[serde(default = "default_logout_label")]
    pub logout_label: String,
}

impl WidgetConfig {
    /// Configuration with every optional field at its default.
    #[must_use]
    pub fn new(login_endpoint: impl Into<String>, logout_endpoint: impl Into<String>) -> Self {
        Self {
            login_endpoint: login_endpoint.into(),
            logout_endpoint: logout_endpoint.into(),
            initial_session_state: false,
            strategy: SessionStrategy::default(),
            token_key: default_token_key(),
            scroll_spy_offset: default_scroll_spy_offset(),
            error_message: default_error_message(),
            login_label: default_login_label(),
            logout_label: default_logout_label(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: SessionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_initial_session_state(mut self, logged_in: bool) -> Self {
        self.initial_session_state = logged_in;
        self
    }

    /// Parse the JSON data island rendered by the page template.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] when the JSON is invalid, an endpoint is
    /// missing, or an endpoint is blank.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| WidgetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build from the legacy page globals.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] when an endpoint is blank.
    pub fn from_globals(login_url: &str, logout_url: &str, is_logged_in: Option<&str>) -> Result<Self, WidgetError> {
        let config = Self::new(login_url, logout_url)
            .with_initial_session_state(is_logged_in.is_some_and(parse_session_flag));
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), WidgetError> {
        if self.login_endpoint.trim().is_empty() {
            return Err(WidgetError::Config("loginEndpoint is empty".to_owned()));
        }
        if self.logout_endpoint.trim().is_empty() {
            return Err(WidgetError::Config("logoutEndpoint is empty".to_owned()));
        }
        Ok(())
    }
}

/// Interpret a server-rendered login flag. Only `"true"` (any case, surrounding
/// whitespace ignored) means signed in.
#[must_use]
pub fn parse_session_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => parse_session_flag(&s),
    })
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_owned()
}

fn default_scroll_spy_offset() -> u32 {
    DEFAULT_SCROLL_SPY_OFFSET
}

fn default_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_owned()
}

fn default_login_label() -> String {
    DEFAULT_LOGIN_LABEL.to_owned()
}

fn default_logout_label() -> String {
    DEFAULT_LOGOUT_LABEL.to_owned()
}
