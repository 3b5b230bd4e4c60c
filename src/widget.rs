//! Auth widget controller.
//!
//! ARCHITECTURE
//! ============
//! [`AuthWidget`] owns the two-state login/logout flow. It is written once
//! against three seams: [`Page`] for DOM effects, [`SessionStore`] for how
//! the session is tracked, and [`AuthTransport`] for the backend. The browser
//! shell only forwards DOM events to [`AuthWidget::on_control_click`] and
//! [`AuthWidget::submit_login`].
//!
//! The control's click is routed by the current state rather than rebound,
//! so a state change and the click behavior can never disagree.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::Cell;

use crate::config::WidgetConfig;
use crate::context::PageContext;
use crate::error::WidgetError;
use crate::net::api::AuthTransport;
use crate::net::types::Credentials;
use crate::page::{Affordance, Page, Target};
use crate::session::{LoginOutcome, LogoutAction, SessionState, SessionStore};

pub struct AuthWidget<P, T> {
    page: P,
    transport: T,
    session: Box<dyn SessionStore>,
    config: WidgetConfig,
    csrf_token: String,
    state: Cell<SessionState>,
}

impl<P: Page, T: AuthTransport> AuthWidget<P, T> {
    /// Read the page context and render the initial affordance.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingElement`] when the page lacks an element
    /// the initial state binds to; nothing has been rendered in that case.
    pub fn mount(
        page: P,
        transport: T,
        session: Box<dyn SessionStore>,
        config: WidgetConfig,
    ) -> Result<Self, WidgetError> {
        let context = PageContext::read(&page, session.initial_state())?;
        let widget = Self {
            page,
            transport,
            session,
            config,
            csrf_token: context.csrf_token,
            state: Cell::new(context.session),
        };
        widget.render();
        log::debug!("nav-auth: mounted in {:?} state", context.session);
        Ok(widget)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Login control clicked: toggle the form when anonymous, log out when
    /// authenticated.
    pub async fn on_control_click(&self) {
        match self.state.get() {
            SessionState::Anonymous => self.toggle_login_form(),
            SessionState::Authenticated => self.logout().await,
        }
    }

    /// Show or hide the login form. No request is made.
    pub fn toggle_login_form(&self) {
        self.page.toggle_hidden(Target::LoginFormWrapper);
    }

    /// Login form submitted.
    pub async fn submit_login(&self, credentials: Credentials) {
        if self.state.get().is_authenticated() {
            log::debug!("nav-auth: login submitted while authenticated, ignored");
            return;
        }
        match self.login(&credentials).await {
            Ok(LoginOutcome::Reload) => self.page.reload(),
            Ok(LoginOutcome::Authenticated) => {
                self.page.set_hidden(Target::LoginError, true);
                self.page.set_hidden(Target::LoginFormWrapper, true);
                self.state.set(SessionState::Authenticated);
                self.render();
            }
            // A concurrent submit may have signed the user in meanwhile.
            Err(err) if self.state.get().is_authenticated() => {
                log::info!("nav-auth: login failed after session started, ignored: {err}");
            }
            Err(err) if err.is_login_failure() => {
                log::info!("nav-auth: login failed: {err}");
                self.page.set_text(Target::LoginError, &self.config.error_message);
                self.page.set_hidden(Target::LoginError, false);
            }
            Err(err) => log::warn!("nav-auth: login aborted: {err}"),
        }
    }

    /// Log out with the configured session strategy.
    pub async fn logout(&self) {
        let action = match self.session.begin_logout() {
            Ok(action) => action,
            Err(err) => {
                log::warn!("nav-auth: logout failed: {err}");
                return;
            }
        };
        match action {
            LogoutAction::Reload => self.page.reload(),
            LogoutAction::Remote => {
                match self
                    .transport
                    .post_logout(&self.config.logout_endpoint, &self.csrf_token)
                    .await
                {
                    Ok(reply) if reply.ok() => self.page.reload(),
                    Ok(reply) => log::warn!("nav-auth: logout rejected with status {}", reply.status),
                    Err(err) => log::warn!("nav-auth: logout failed: {err}"),
                }
            }
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, WidgetError> {
        let reply = self
            .transport
            .post_login(&self.config.login_endpoint, &self.csrf_token, credentials)
            .await?;
        if !reply.ok() {
            return Err(WidgetError::Rejected { status: reply.status });
        }
        self.session.complete_login(&reply.body)
    }

    fn render(&self) {
        let affordance = Affordance::for_state(self.state.get(), &self.config.login_label, &self.config.logout_label);
        self.page.render_affordance(&affordance);
    }
}
