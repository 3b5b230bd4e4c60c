//! Transport for the login and logout endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Host builds: only the [`AuthTransport`] seam exists; tests script it.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become [`WidgetError::Network`]. A non-2xx status is
//! not an error at this layer; the controller decides what it means.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, HttpReply};
#[cfg(any(test, feature = "hydrate"))]
use crate::consts::CSRF_HEADER;
use crate::error::WidgetError;

/// Headers attached to the login request; `.json()` sets the content type.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_headers(csrf_token: &str) -> [(&'static str, String); 1] {
    [(CSRF_HEADER, csrf_token.to_owned())]
}

/// Headers attached to the logout request.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn logout_headers(csrf_token: &str) -> [(&'static str, String); 1] {
    [(CSRF_HEADER, csrf_token.to_owned())]
}

/// Sends the two state-changing auth requests.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// `POST` the credentials as JSON to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Network`] if the request does not complete.
    async fn post_login(&self, endpoint: &str, csrf_token: &str, credentials: &Credentials)
    -> Result<HttpReply, WidgetError>;

    /// `POST` to `endpoint` without a body.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Network`] if the request does not complete.
    async fn post_logout(&self, endpoint: &str, csrf_token: &str) -> Result<HttpReply, WidgetError>;
}

/// [`AuthTransport`] over the browser `fetch` API.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl GlooTransport {
    async fn read_reply(resp: gloo_net::http::Response) -> Result<HttpReply, WidgetError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| WidgetError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

#[cfg(feature = "hydrate")]
impl AuthTransport for GlooTransport {
    async fn post_login(
        &self,
        endpoint: &str,
        csrf_token: &str,
        credentials: &Credentials,
    ) -> Result<HttpReply, WidgetError> {
        let mut builder = gloo_net::http::Request::post(endpoint);
        for (name, value) in login_headers(csrf_token) {
            builder = builder.header(name, &value);
        }
        let resp = builder
            .json(credentials)
            .map_err(|e| WidgetError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        Self::read_reply(resp).await
    }

    async fn post_logout(&self, endpoint: &str, csrf_token: &str) -> Result<HttpReply, WidgetError> {
        let mut builder = gloo_net::http::Request::post(endpoint);
        for (name, value) in logout_headers(csrf_token) {
            builder = builder.header(name, &value);
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        Self::read_reply(resp).await
    }
}
