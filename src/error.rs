//! Error type shared by the widget core and the browser shell.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the page. Binding errors abort widget
//! initialization with a logged diagnostic; every login failure collapses
//! into one user-visible message; logout failures are only logged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("missing binding target: {selector}")]
    MissingElement { selector: String },
    #[error("request rejected with status {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("token storage error: {0}")]
    Storage(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WidgetError {
    pub(crate) fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }

    /// Whether this error can occur while talking to the login endpoint
    /// and should therefore be surfaced inline to the user.
    #[must_use]
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. }
                | Self::Network(_)
                | Self::Request(_)
                | Self::MalformedResponse(_)
                | Self::Storage(_)
        )
    }
}
