//! [`Page`] over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::scroll_spy;
use crate::consts::HIDDEN_CLASS;
use crate::page::{Affordance, Page, Target};

#[derive(Clone, Debug)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// The current window's page, or `None` outside a browser document.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// First element matching `target`, if any.
    #[must_use]
    pub fn element(&self, target: Target) -> Option<Element> {
        self.document.query_selector(&target.selector()).ok().flatten()
    }
}

impl Page for BrowserPage {
    fn exists(&self, target: Target) -> bool {
        self.element(target).is_some()
    }

    fn is_hidden(&self, target: Target) -> bool {
        self.element(target)
            .is_some_and(|el| el.class_list().contains(HIDDEN_CLASS))
    }

    fn set_hidden(&self, target: Target, hidden: bool) {
        let Some(el) = self.element(target) else {
            return;
        };
        let classes = el.class_list();
        let _ = if hidden { classes.add_1(HIDDEN_CLASS) } else { classes.remove_1(HIDDEN_CLASS) };
    }

    fn toggle_hidden(&self, target: Target) {
        if let Some(el) = self.element(target) {
            let _ = el.class_list().toggle(HIDDEN_CLASS);
        }
    }

    fn set_text(&self, target: Target, text: &str) {
        if let Some(el) = self.element(target) {
            el.set_text_content(Some(text));
        }
    }

    fn is_displayed(&self, target: Target) -> bool {
        let Some(el) = self.element(target) else {
            return false;
        };
        self.window
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("display").ok())
            .map_or(false, |display| display != "none")
    }

    fn click(&self, target: Target) {
        if let Some(el) = self.element(target).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            el.click();
        }
    }

    fn csrf_token(&self) -> Option<String> {
        let meta = self.element(Target::CsrfMeta)?;
        meta.get_attribute("value")
            .or_else(|| meta.get_attribute("content"))
            .filter(|token| !token.is_empty())
    }

    fn render_affordance(&self, affordance: &Affordance) {
        let Some(control) = self.element(Target::LoginToggle) else {
            return;
        };
        control.set_inner_html("");
        let label = match affordance.icon {
            Some(icon_class) => {
                if let Ok(icon) = self.document.create_element("i") {
                    icon.set_class_name(icon_class);
                    let _ = control.append_child(&icon);
                }
                format!(" {}", affordance.label)
            }
            None => affordance.label.clone(),
        };
        let _ = control.append_child(&self.document.create_text_node(&label));

        let classes = control.class_list();
        let _ = classes.remove_1(affordance.replaced_class);
        let _ = classes.add_1(affordance.button_class);
    }

    fn activate_scroll_spy(&self, offset: u32) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Err(err) = scroll_spy::activate(&body, &Target::MainNav.selector(), offset) {
            log::warn!("nav-auth: scroll-spy unavailable: {err:?}");
        }
    }

    fn reload(&self) {
        if let Err(err) = self.window.location().reload() {
            log::warn!("nav-auth: reload failed: {err:?}");
        }
    }
}
