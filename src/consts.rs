//! Shared constants for the page contract: element selectors, class names,
//! header names and defaults.

// ── DOM contract ────────────────────────────────────────────────

/// The login/logout control in the navbar.
pub const LOGIN_TOGGLE_ID: &str = "login-toggle";

/// Container whose visibility the login control toggles.
pub const LOGIN_FORM_WRAPPER_ID: &str = "login-form-wrapper";

/// The `<form>` carrying the `email` and `password` fields.
pub const LOGIN_FORM_ID: &str = "login-form";

/// Inline element that shows the login failure message.
pub const LOGIN_ERROR_ID: &str = "login-error";

/// Main navigation landmark tracked by scroll-spy.
pub const MAIN_NAV_ID: &str = "mainNav";

/// Burger button shown below the responsive breakpoint.
pub const NAVBAR_TOGGLER_SELECTOR: &str = ".navbar-toggler";

/// Links inside the collapsible menu.
pub const RESPONSIVE_NAV_LINK_SELECTOR: &str = "#navbarResponsive .nav-link";

/// Page metadata element holding the CSRF token.
pub const CSRF_META_SELECTOR: &str = "meta[name=\"csrf-token\"]";

/// JSON data island holding the widget configuration.
pub const CONFIG_SCRIPT_ID: &str = "nav-auth-config";

/// Bootstrap utility class that hides an element.
pub const HIDDEN_CLASS: &str = "d-none";

// ── Form fields ─────────────────────────────────────────────────

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

// ── Network ─────────────────────────────────────────────────────

/// Header carrying the anti-forgery token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// ── Defaults ────────────────────────────────────────────────────

/// Scroll-spy offset in pixels, matching the fixed navbar height.
pub const DEFAULT_SCROLL_SPY_OFFSET: u32 = 74;

/// `localStorage` key of the authentication token.
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid login credentials";
pub const DEFAULT_LOGIN_LABEL: &str = "Login";
pub const DEFAULT_LOGOUT_LABEL: &str = "Logout";

// ── Affordance styling ──────────────────────────────────────────

/// Button style of the anonymous (login) control.
pub const LOGIN_BUTTON_CLASS: &str = "btn-primary";

/// Button style of the authenticated (logout) control.
pub const LOGOUT_BUTTON_CLASS: &str = "btn-outline-light";

/// Bootstrap Icons glyph shown next to the logout label.
pub const LOGOUT_ICON_CLASS: &str = "bi bi-box-arrow-right";
