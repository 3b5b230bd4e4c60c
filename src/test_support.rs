//! In-memory doubles for the browser seams.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::error::WidgetError;
use crate::net::api::AuthTransport;
use crate::net::types::{Credentials, HttpReply};
use crate::page::{Affordance, Page, Target};
use crate::session::{MemoryTokenStorage, TokenStorage};

// =============================================================
// FakePage
// =============================================================

#[derive(Debug)]
pub struct FakePage {
    present: HashSet<Target>,
    csrf: Option<String>,
    toggler_displayed: bool,
    hidden: RefCell<HashSet<Target>>,
    texts: RefCell<HashMap<Target, String>>,
    affordances: RefCell<Vec<Affordance>>,
    scroll_spy: RefCell<Vec<u32>>,
    toggler_clicks: Cell<u32>,
    reloads: Cell<u32>,
}

impl FakePage {
    /// Every element of the page contract, as the template renders it: form
    /// wrapper and error message hidden, wide viewport.
    pub fn full() -> Self {
        let present = [
            Target::LoginToggle,
            Target::LoginFormWrapper,
            Target::LoginForm,
            Target::LoginError,
            Target::MainNav,
            Target::NavbarToggler,
            Target::CsrfMeta,
        ]
        .into_iter()
        .collect();
        Self {
            present,
            csrf: Some("csrf-123".to_owned()),
            toggler_displayed: false,
            hidden: RefCell::new([Target::LoginFormWrapper, Target::LoginError].into_iter().collect()),
            texts: RefCell::new(HashMap::new()),
            affordances: RefCell::new(Vec::new()),
            scroll_spy: RefCell::new(Vec::new()),
            toggler_clicks: Cell::new(0),
            reloads: Cell::new(0),
        }
    }

    pub fn without(mut self, target: Target) -> Self {
        self.present.remove(&target);
        if target == Target::CsrfMeta {
            self.csrf = None;
        }
        self
    }

    pub fn without_csrf(self) -> Self {
        self.without(Target::CsrfMeta)
    }

    pub fn with_toggler_displayed(mut self, displayed: bool) -> Self {
        self.toggler_displayed = displayed;
        self
    }

    pub fn text(&self, target: Target) -> Option<String> {
        self.texts.borrow().get(&target).cloned()
    }

    pub fn affordances(&self) -> Vec<Affordance> {
        self.affordances.borrow().clone()
    }

    pub fn last_affordance(&self) -> Option<Affordance> {
        self.affordances.borrow().last().cloned()
    }

    pub fn scroll_spy_offsets(&self) -> Vec<u32> {
        self.scroll_spy.borrow().clone()
    }

    pub fn toggler_clicks(&self) -> u32 {
        self.toggler_clicks.get()
    }

    pub fn reloads(&self) -> u32 {
        self.reloads.get()
    }
}

impl Page for FakePage {
    fn exists(&self, target: Target) -> bool {
        self.present.contains(&target)
    }

    fn is_hidden(&self, target: Target) -> bool {
        self.hidden.borrow().contains(&target)
    }

    fn set_hidden(&self, target: Target, hidden: bool) {
        let mut set = self.hidden.borrow_mut();
        if hidden {
            set.insert(target);
        } else {
            set.remove(&target);
        }
    }

    fn set_text(&self, target: Target, text: &str) {
        self.texts.borrow_mut().insert(target, text.to_owned());
    }

    fn is_displayed(&self, target: Target) -> bool {
        match target {
            Target::NavbarToggler => self.toggler_displayed,
            _ => self.exists(target) && !self.is_hidden(target),
        }
    }

    fn click(&self, target: Target) {
        if target == Target::NavbarToggler {
            self.toggler_clicks.set(self.toggler_clicks.get() + 1);
        }
    }

    fn csrf_token(&self) -> Option<String> {
        self.csrf.clone()
    }

    fn render_affordance(&self, affordance: &Affordance) {
        self.affordances.borrow_mut().push(affordance.clone());
    }

    fn activate_scroll_spy(&self, offset: u32) {
        self.scroll_spy.borrow_mut().push(offset);
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

// =============================================================
// StubTransport
// =============================================================

/// Replays scripted replies in order; an exhausted script is a network error.
#[derive(Debug, Default)]
pub struct StubTransport {
    replies: RefCell<VecDeque<Result<HttpReply, WidgetError>>>,
    logins: RefCell<Vec<(String, String, Credentials)>>,
    logouts: RefCell<Vec<(String, String)>>,
    yielding: bool,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend each request once before replying, so concurrent requests
    /// are all in flight before the first reply is handed out.
    pub fn yielding(mut self) -> Self {
        self.yielding = true;
        self
    }

    pub fn fail_with(self, err: WidgetError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpReply::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(WidgetError::Network(message.to_owned())));
        self
    }

    /// `(endpoint, csrf token, credentials)` of every login request.
    pub fn logins(&self) -> Vec<(String, String, Credentials)> {
        self.logins.borrow().clone()
    }

    /// `(endpoint, csrf token)` of every logout request.
    pub fn logouts(&self) -> Vec<(String, String)> {
        self.logouts.borrow().clone()
    }

    fn next(&self) -> Result<HttpReply, WidgetError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(WidgetError::Network("no scripted reply".to_owned())))
    }
}

impl AuthTransport for StubTransport {
    async fn post_login(
        &self,
        endpoint: &str,
        csrf_token: &str,
        credentials: &Credentials,
    ) -> Result<HttpReply, WidgetError> {
        self.logins
            .borrow_mut()
            .push((endpoint.to_owned(), csrf_token.to_owned(), credentials.clone()));
        if self.yielding {
            YieldNow(false).await;
        }
        self.next()
    }

    async fn post_logout(&self, endpoint: &str, csrf_token: &str) -> Result<HttpReply, WidgetError> {
        self.logouts
            .borrow_mut()
            .push((endpoint.to_owned(), csrf_token.to_owned()));
        if self.yielding {
            YieldNow(false).await;
        }
        self.next()
    }
}

/// Returns `Pending` once, waking itself so the executor polls again.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

// =============================================================
// Storage doubles
// =============================================================

/// Storage that refuses every operation.
#[derive(Debug, Clone, Copy)]
pub struct FailingStorage;

impl TokenStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, WidgetError> {
        Err(WidgetError::Storage("unavailable".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), WidgetError> {
        Err(WidgetError::Storage("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), WidgetError> {
        Err(WidgetError::Storage("unavailable".to_owned()))
    }
}

/// Memory storage the test keeps a handle to after boxing it.
#[derive(Debug, Clone)]
pub struct SharedStorage(pub Rc<MemoryTokenStorage>);

impl TokenStorage for SharedStorage {
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.0.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), WidgetError> {
        self.0.remove(key)
    }
}
