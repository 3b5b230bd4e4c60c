//! Browser shell: implements the core seams over `web-sys` and attaches the
//! DOM listeners. Only compiled with the `hydrate` feature.
//!
//! Listeners live for the lifetime of the page, so their closures are
//! leaked with `Closure::forget`.

mod page;
mod scroll_spy;
mod storage;

pub use page::BrowserPage;
pub use storage::LocalTokenStorage;

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::config::WidgetConfig;
use crate::consts::{
    CONFIG_SCRIPT_ID, DEFAULT_SCROLL_SPY_OFFSET, EMAIL_FIELD, PASSWORD_FIELD, RESPONSIVE_NAV_LINK_SELECTOR,
};
use crate::error::WidgetError;
use crate::nav;
use crate::net::api::GlooTransport;
use crate::net::types::Credentials;
use crate::page::Target;
use crate::session::{MemoryTokenStorage, TokenStorage, session_store_for};
use crate::widget::AuthWidget;

/// Entry point run when the module loads: installs logging, reads the
/// configuration from the page and initializes once the DOM is parsed.
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let Some(page) = BrowserPage::current() else {
        return;
    };
    if page.document().ready_state() == "loading" {
        let document = page.document().clone();
        let listener = Closure::once(move |_: Event| start(page));
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref());
        listener.forget();
    } else {
        start(page);
    }
}

fn start(page: BrowserPage) {
    let config = read_config(&page);
    let offset = config.as_ref().map_or(DEFAULT_SCROLL_SPY_OFFSET, |c| c.scroll_spy_offset);
    bind_navigation(&page, offset);
    match config {
        Ok(config) => {
            if let Err(err) = bind_auth(page, config) {
                log::warn!("nav-auth: auth widget not initialized: {err}");
            }
        }
        Err(err) => log::warn!("nav-auth: auth widget not initialized: {err}"),
    }
}

/// Initialize on an already-parsed page with an explicit configuration.
///
/// # Errors
///
/// Returns an error when the browser page is unavailable or the auth widget
/// cannot bind; navigation behavior is still attached in the latter case.
pub fn init(config: WidgetConfig) -> Result<(), WidgetError> {
    let page = BrowserPage::current().ok_or_else(|| WidgetError::missing("document"))?;
    bind_navigation(&page, config.scroll_spy_offset);
    bind_auth(page, config)
}

/// Configuration from the JSON data island, falling back to the legacy
/// `loginUrl` / `logoutUrl` / `isLoggedIn` globals.
fn read_config(page: &BrowserPage) -> Result<WidgetConfig, WidgetError> {
    if let Some(island) = page.document().get_element_by_id(CONFIG_SCRIPT_ID) {
        return WidgetConfig::from_json(&island.text_content().unwrap_or_default());
    }
    let window = page.window();
    let login = global_string(window, "loginUrl").unwrap_or_default();
    let logout = global_string(window, "logoutUrl").unwrap_or_default();
    let flag = global_string(window, "isLoggedIn");
    WidgetConfig::from_globals(&login, &logout, flag.as_deref())
}

fn global_string(window: &web_sys::Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    value.as_string().or_else(|| value.as_bool().map(|b| b.to_string()))
}

fn bind_navigation(page: &BrowserPage, offset: u32) {
    nav::activate_scroll_spy(page, offset);

    let Ok(links) = page.document().query_selector_all(RESPONSIVE_NAV_LINK_SELECTOR) else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.item(i) else {
            continue;
        };
        let page = page.clone();
        let cb = Closure::wrap(Box::new(move |_: Event| {
            nav::collapse_responsive_menu(&page);
        }) as Box<dyn FnMut(Event)>);
        let _ = link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn bind_auth(page: BrowserPage, config: WidgetConfig) -> Result<(), WidgetError> {
    let storage: Box<dyn TokenStorage> = match LocalTokenStorage::open(page.window()) {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("nav-auth: localStorage unavailable, token kept in memory");
            Box::new(MemoryTokenStorage::new())
        }
    };
    let session = session_store_for(&config, storage);
    let widget = Rc::new(AuthWidget::mount(page, GlooTransport, session, config)?);

    let control = widget
        .page()
        .element(Target::LoginToggle)
        .ok_or_else(|| WidgetError::missing(Target::LoginToggle.selector()))?;
    let on_click_widget = Rc::clone(&widget);
    let on_click = Closure::wrap(Box::new(move |_: Event| {
        let widget = Rc::clone(&on_click_widget);
        spawn_local(async move { widget.on_control_click().await });
    }) as Box<dyn FnMut(Event)>);
    let _ = control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    if widget.state().is_authenticated() {
        return Ok(());
    }
    let Some(form) = widget
        .page()
        .element(Target::LoginForm)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let on_submit_form = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let credentials = read_credentials(&on_submit_form);
        let widget = Rc::clone(&widget);
        spawn_local(async move { widget.submit_login(credentials).await });
    }) as Box<dyn FnMut(Event)>);
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
    Ok(())
}

fn read_credentials(form: &HtmlFormElement) -> Credentials {
    let field = |data: &FormData, name: &str| data.get(name).as_string().unwrap_or_default();
    match FormData::new_with_form(form) {
        Ok(data) => Credentials::new(field(&data, EMAIL_FIELD), field(&data, PASSWORD_FIELD)),
        Err(err) => {
            log::warn!("nav-auth: cannot read login form: {err:?}");
            Credentials::new("", "")
        }
    }
}
