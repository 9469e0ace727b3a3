//! Chat rendering into the host page's message list.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::Selectors;
use crate::controller::ChatSurface;
use crate::reveal::{LineStyle, RevealLine};

const TYPING_INDICATOR_ID: &str = "typing-indicator";
const TYPING_DOTS: usize = 3;

/// [`ChatSurface`] over the hero chat markup.
pub struct DomSurface {
    document: Document,
    messages: Element,
    input: HtmlInputElement,
    send_button: Option<Element>,
    bot_container: RefCell<Option<Element>>,
    indicator: RefCell<Option<Element>>,
}

impl DomSurface {
    /// Look up the chat elements; `None` if the page has no chat widget.
    pub fn attach(document: &Document, selectors: &Selectors) -> Option<Self> {
        let messages = document.get_element_by_id(&selectors.messages_id)?;
        let input = document
            .get_element_by_id(&selectors.input_id)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let send_button = document.get_element_by_id(&selectors.send_button_id);
        Some(Self {
            document: document.clone(),
            messages,
            input,
            send_button,
            bot_container: RefCell::new(None),
            indicator: RefCell::new(None),
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    pub fn send_button(&self) -> Option<&Element> {
        self.send_button.as_ref()
    }

    fn div(&self, classes: &[&str]) -> Option<Element> {
        let el = self.document.create_element("div").ok()?;
        let class_list = el.class_list();
        for class in classes {
            let _ = class_list.add_1(class);
        }
        Some(el)
    }

    fn append_to(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
        self.messages.set_scroll_top(self.messages.scroll_height());
    }
}

impl ChatSurface for DomSurface {
    fn append_user_message(&self, text: &str) {
        if let Some(el) = self.div(&["message", "user-message"]) {
            el.set_text_content(Some(text));
            self.append_to(&self.messages, &el);
        }
    }

    fn begin_bot_message(&self) {
        let Some(container) = self.div(&["bot-message-container"]) else {
            return;
        };
        self.append_to(&self.messages, &container);
        *self.bot_container.borrow_mut() = Some(container);
    }

    fn append_bot_line(&self, line: &RevealLine) {
        let Some(el) = self.div(&["message", "bot-message"]) else {
            return;
        };
        el.set_text_content(Some(&line.text));
        if line.style == LineStyle::Emphasized {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("font-weight", "bold");
            }
        }
        let parent = self.bot_container.borrow().clone().unwrap_or_else(|| self.messages.clone());
        self.append_to(&parent, &el);
    }

    fn show_typing_indicator(&self) {
        let Some(indicator) = self.div(&["typing-indicator"]) else {
            return;
        };
        indicator.set_id(TYPING_INDICATOR_ID);
        for _ in 0..TYPING_DOTS {
            if let Some(dot) = self.div(&["typing-dot"]) {
                let _ = indicator.append_child(&dot);
            }
        }
        self.append_to(&self.messages, &indicator);
        if let Some(previous) = self.indicator.borrow_mut().replace(indicator) {
            previous.remove();
        }
    }

    fn hide_typing_indicator(&self) {
        if let Some(indicator) = self.indicator.borrow_mut().take() {
            indicator.remove();
        }
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.input.set_disabled(!enabled);
        if let Some(button) = &self.send_button {
            let _ = if enabled { button.remove_attribute("disabled") } else { button.set_attribute("disabled", "") };
        }
    }

    fn clear_messages(&self) {
        self.messages.set_inner_html("");
        self.bot_container.borrow_mut().take();
        self.indicator.borrow_mut().take();
    }
}
