//! Page context reader.
//!
//! Collects what the auth widget needs from the rendered page before any
//! listener is attached: the CSRF token and the presence of every element
//! the initial state will touch. A missing element aborts initialization
//! with [`WidgetError::MissingElement`] instead of failing mid-binding.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use crate::error::WidgetError;
use crate::page::{Page, Target};
use crate::session::SessionState;

/// Elements the anonymous state binds to, beyond the login control.
const ANONYMOUS_TARGETS: [Target; 3] = [Target::LoginFormWrapper, Target::LoginForm, Target::LoginError];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub csrf_token: String,
    pub session: SessionState,
}

impl PageContext {
    /// Read the page for a widget starting in `session`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingElement`] naming the first absent
    /// element, or the CSRF meta element when it carries no token.
    pub fn read<P: Page + ?Sized>(page: &P, session: SessionState) -> Result<Self, WidgetError> {
        require(page, Target::LoginToggle)?;
        if session == SessionState::Anonymous {
            for target in ANONYMOUS_TARGETS {
                require(page, target)?;
            }
        }
        let csrf_token = page
            .csrf_token()
            .ok_or_else(|| WidgetError::missing(Target::CsrfMeta.selector()))?;
        Ok(Self { csrf_token, session })
    }
}

fn require<P: Page + ?Sized>(page: &P, target: Target) -> Result<(), WidgetError> {
    if page.exists(target) {
        Ok(())
    } else {
        Err(WidgetError::missing(target.selector()))
    }
}
