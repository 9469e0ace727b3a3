//! Browser bindings and the page-load entry point.
//!
//! Requires a browser environment; compiled only with the `browser` feature.
//! Each part (menu, anchors, chat) attaches independently, so a page that
//! lacks one of them still gets the others.

mod page;
mod surface;

use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Window};

use crate::config::{CONFIG_ELEMENT_ID, WidgetConfig};
use crate::controller::{ChatController, Clock};
use crate::nav::NavController;
use crate::net::api::BrowserTransport;

pub use page::DomPage;
pub use surface::DomSurface;

/// [`Clock`] backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClock;

#[async_trait::async_trait(?Send)]
impl Clock for GlooClock {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// WASM start hook: boot now if the document is parsed, otherwise on `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::<dyn FnMut()>::once(move || boot(&window, &document));
        if let Err(err) = target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            log::warn!("failed to wait for DOMContentLoaded: {err:?}");
        }
        on_ready.forget();
    } else {
        boot(&window, &document);
    }
}

/// Attach navigation and chat handlers to the current page.
pub fn boot(window: &Window, document: &Document) {
    let config = read_config(document);
    attach_navigation(window, document, &config);
    attach_chat(document, config);
}

fn read_config(document: &Document) -> WidgetConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return WidgetConfig::default();
    };
    match WidgetConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            WidgetConfig::default()
        }
    }
}

fn attach_navigation(window: &Window, document: &Document, config: &WidgetConfig) {
    let selectors = &config.selectors;
    let nav_links = document
        .query_selector(&selectors.nav_links)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let page = DomPage::new(window.clone(), document.clone(), nav_links);
    let nav = Rc::new(NavController::new(page, config.header_offset));

    match document.query_selector(&selectors.menu_button) {
        Ok(Some(button)) => {
            let nav = Rc::clone(&nav);
            listen(&button, "click", move |_| {
                nav.toggle_menu();
            });
        }
        _ => log::debug!("no menu button matching {}", selectors.menu_button),
    }

    let Ok(anchors) = document.query_selector_all(&selectors.anchors) else {
        return;
    };
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let nav = Rc::clone(&nav);
        let link = anchor.clone();
        listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                nav.follow_anchor(&href);
            }
        });
    }
}

fn attach_chat(document: &Document, config: WidgetConfig) {
    let Some(surface) = DomSurface::attach(document, &config.selectors) else {
        log::debug!("no chat widget on this page");
        return;
    };
    let reset_button = config
        .selectors
        .reset_button_id
        .as_deref()
        .and_then(|id| document.get_element_by_id(id));
    let transport = BrowserTransport::new(config.clone());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = js_sys::Date::now() as u64;
    let chat = Rc::new(ChatController::new(config, surface, transport, GlooClock, seed));

    let send = {
        let chat = Rc::clone(&chat);
        move || {
            let chat = Rc::clone(&chat);
            let text = chat.surface().input_value();
            wasm_bindgen_futures::spawn_local(async move {
                chat.submit(&text).await;
            });
        }
    };

    if let Some(button) = chat.surface().send_button() {
        let send = send.clone();
        listen(button, "click", move |_| send());
    }

    listen(chat.surface().input(), "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() == "Enter" && !key.shift_key() && !key.is_composing() {
            ev.prevent_default();
            send();
        }
    });

    if let Some(button) = reset_button {
        let chat = Rc::clone(&chat);
        listen(&button, "click", move |_| {
            let chat = Rc::clone(&chat);
            wasm_bindgen_futures::spawn_local(async move {
                chat.reset().await;
            });
        });
    }
}

/// Attach a listener for the lifetime of the page.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {err:?}");
    }
    closure.forget();
}
