//! [`Page`] over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::nav::Page;

pub struct DomPage {
    window: Window,
    document: Document,
    nav_links: Option<HtmlElement>,
}

impl DomPage {
    pub fn new(window: Window, document: Document, nav_links: Option<HtmlElement>) -> Self {
        Self { window, document, nav_links }
    }
}

impl Page for DomPage {
    fn menu_display(&self) -> String {
        self.nav_links
            .as_ref()
            .and_then(|el| el.style().get_property_value("display").ok())
            .unwrap_or_default()
    }

    fn set_menu_display(&self, value: &str) {
        if let Some(el) = &self.nav_links {
            let _ = el.style().set_property("display", value);
        }
    }

    fn element_offset_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
