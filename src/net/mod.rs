//! Backend communication for the login/logout endpoints.
//!
//! DESIGN
//! ======
//! `types` holds the wire shapes, `api` the transport seam and its `gloo-net`
//! implementation for the browser.

pub mod api;
pub mod types;
