//! The page seam: every DOM effect the widget needs, behind one trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller and navigation binder only talk to [`Page`]. The browser
//! shell implements it over `web-sys`; tests implement it in memory.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::consts::{
    CSRF_META_SELECTOR, LOGIN_BUTTON_CLASS, LOGIN_ERROR_ID, LOGIN_FORM_ID, LOGIN_FORM_WRAPPER_ID, LOGIN_TOGGLE_ID,
    LOGOUT_BUTTON_CLASS, LOGOUT_ICON_CLASS, MAIN_NAV_ID, NAVBAR_TOGGLER_SELECTOR,
};
use crate::session::SessionState;

/// Elements of the page contract addressed by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    LoginToggle,
    LoginFormWrapper,
    LoginForm,
    LoginError,
    MainNav,
    NavbarToggler,
    CsrfMeta,
}

impl Target {
    /// CSS selector locating this element.
    #[must_use]
    pub fn selector(self) -> String {
        match self {
            Self::LoginToggle => format!("#{LOGIN_TOGGLE_ID}"),
            Self::LoginFormWrapper => format!("#{LOGIN_FORM_WRAPPER_ID}"),
            Self::LoginForm => format!("#{LOGIN_FORM_ID}"),
            Self::LoginError => format!("#{LOGIN_ERROR_ID}"),
            Self::MainNav => format!("#{MAIN_NAV_ID}"),
            Self::NavbarToggler => NAVBAR_TOGGLER_SELECTOR.to_owned(),
            Self::CsrfMeta => CSRF_META_SELECTOR.to_owned(),
        }
    }
}

/// How the login control looks for a given session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affordance {
    pub state: SessionState,
    pub label: String,
    pub icon: Option<&'static str>,
    /// Button class applied for this state.
    pub button_class: &'static str,
    /// Button class of the other state, removed when this one is applied.
    pub replaced_class: &'static str,
}

impl Affordance {
    #[must_use]
    pub fn for_state(state: SessionState, login_label: &str, logout_label: &str) -> Self {
        match state {
            SessionState::Anonymous => Self {
                state,
                label: login_label.to_owned(),
                icon: None,
                button_class: LOGIN_BUTTON_CLASS,
                replaced_class: LOGOUT_BUTTON_CLASS,
            },
            SessionState::Authenticated => Self {
                state,
                label: logout_label.to_owned(),
                icon: Some(LOGOUT_ICON_CLASS),
                button_class: LOGOUT_BUTTON_CLASS,
                replaced_class: LOGIN_BUTTON_CLASS,
            },
        }
    }
}

/// DOM operations used by the widget.
///
/// Methods take `&self`: the DOM is already shared mutable state and the
/// widget is held behind an `Rc` by every event closure.
pub trait Page {
    /// Whether `target` is present in the document.
    fn exists(&self, target: Target) -> bool;

    /// Whether `target` carries the hidden utility class.
    fn is_hidden(&self, target: Target) -> bool;

    fn set_hidden(&self, target: Target, hidden: bool);

    fn toggle_hidden(&self, target: Target) {
        let hidden = self.is_hidden(target);
        self.set_hidden(target, !hidden);
    }

    fn set_text(&self, target: Target, text: &str);

    /// Whether `target` is rendered, i.e. its computed `display` is not `none`.
    fn is_displayed(&self, target: Target) -> bool;

    /// Dispatch a synthetic click on `target`.
    fn click(&self, target: Target);

    /// CSRF token from the page metadata, if present.
    fn csrf_token(&self) -> Option<String>;

    /// Re-render the login control for `affordance`.
    fn render_affordance(&self, affordance: &Affordance);

    /// Start scroll-spy on the body, tracking [`Target::MainNav`].
    fn activate_scroll_spy(&self, offset: u32);

    fn reload(&self);
}
