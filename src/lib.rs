//! # nav-auth
//!
//! WebAssembly behavior for a site's navigation bar and its login/logout
//! widget. Enhances server-rendered markup: activates Bootstrap scroll-spy,
//! collapses the responsive menu after a link is followed on narrow
//! viewports, and drives the login form against the backend's login and
//! logout endpoints.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Two-state auth controller, written against the seams below |
//! | [`session`] | [`session::SessionStore`] strategies: server flag or client token |
//! | [`context`] | Page context reader (CSRF token, required elements) |
//! | [`nav`] | Scroll-spy activation and responsive menu collapse |
//! | [`page`] | [`page::Page`] DOM seam and the control's affordances |
//! | [`net`] | Wire types and the [`net::api::AuthTransport`] seam |
//! | [`config`] | Explicit [`config::WidgetConfig`] |
//! | [`error`] | [`error::WidgetError`] |
//! | `browser` | `web-sys` implementations and listener wiring (`hydrate` only) |
//!
//! Everything outside `browser` builds and tests on the host.

pub mod config;
pub mod consts;
pub mod context;
pub mod error;
pub mod nav;
pub mod net;
pub mod page;
pub mod session;
pub mod widget;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod test_support;

/// Module start hook: boots the widget when the page loads the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    browser::boot();
}
