//! Mobile menu toggle and smooth anchor scrolling.
//!
//! The logic only needs a handful of page queries, so it is written against
//! the [`Page`] trait; `dom::DomPage` implements it over web-sys.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Page capabilities used by [`NavController`].
pub trait Page {
    /// Current inline `display` value of the navigation panel (may be empty).
    fn menu_display(&self) -> String;

    fn set_menu_display(&self, value: &str);

    /// Document offset of the element with this id, if it exists.
    fn element_offset_top(&self, id: &str) -> Option<f64>;

    /// Smooth-scroll the viewport so its top sits at `top`.
    fn scroll_to(&self, top: f64);
}

pub struct NavController<P> {
    page: P,
    header_offset: f64,
}

impl<P: Page> NavController<P> {
    pub fn new(page: P, header_offset: f64) -> Self {
        Self { page, header_offset }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Show the navigation panel if hidden, hide it if shown. Returns the new value.
    pub fn toggle_menu(&self) -> &'static str {
        let next = toggled_display(&self.page.menu_display());
        self.page.set_menu_display(next);
        next
    }

    /// Scroll to the element an in-page link points at.
    ///
    /// Returns the scroll destination, or `None` when the link is the page
    /// root (`#`), not a fragment, or names an element that does not exist.
    pub fn follow_anchor(&self, href: &str) -> Option<f64> {
        let id = anchor_target(href)?;
        let Some(top) = self.page.element_offset_top(id) else {
            log::debug!("anchor target #{id} not found");
            return None;
        };
        let destination = (top - self.header_offset).max(0.0);
        self.page.scroll_to(destination);
        Some(destination)
    }
}

/// `flex` toggles to `none`; anything else (including unset) toggles to `flex`.
pub fn toggled_display(current: &str) -> &'static str {
    if current.trim() == "flex" { "none" } else { "flex" }
}

/// Element id named by an in-page link, or `None` for `#` and non-fragment links.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
