use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakePage {
    display: RefCell<String>,
    offsets: HashMap<String, f64>,
    scrolls: RefCell<Vec<f64>>,
}

impl FakePage {
    fn with_sections(sections: &[(&str, f64)]) -> Self {
        Self {
            offsets: sections.iter().map(|(id, top)| ((*id).to_owned(), *top)).collect(),
            ..Self::default()
        }
    }
}

impl Page for FakePage {
    fn menu_display(&self) -> String {
        self.display.borrow().clone()
    }

    fn set_menu_display(&self, value: &str) {
        *self.display.borrow_mut() = value.to_owned();
    }

    fn element_offset_top(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).copied()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}

// =============================================================
// Menu toggle
// =============================================================

#[test]
fn unset_display_opens_menu() {
    let nav = NavController::new(FakePage::default(), 80.0);
    assert_eq!(nav.toggle_menu(), "flex");
    assert_eq!(nav.page().menu_display(), "flex");
}

#[test]
fn toggle_twice_closes_menu() {
    let nav = NavController::new(FakePage::default(), 80.0);
    nav.toggle_menu();
    assert_eq!(nav.toggle_menu(), "none");
    assert_eq!(nav.page().menu_display(), "none");
}

#[test]
fn other_display_values_open_menu() {
    assert_eq!(toggled_display("block"), "flex");
    assert_eq!(toggled_display("none"), "flex");
    assert_eq!(toggled_display(" flex "), "none");
}

// =============================================================
// Anchor scrolling
// =============================================================

#[test]
fn anchor_scrolls_below_fixed_header() {
    let nav = NavController::new(FakePage::with_sections(&[("services", 1200.0)]), 80.0);
    assert_eq!(nav.follow_anchor("#services"), Some(1120.0));
    assert_eq!(*nav.page().scrolls.borrow(), vec![1120.0]);
}

#[test]
fn root_anchor_does_not_scroll() {
    let nav = NavController::new(FakePage::with_sections(&[("services", 1200.0)]), 80.0);
    assert_eq!(nav.follow_anchor("#"), None);
    assert!(nav.page().scrolls.borrow().is_empty());
}

#[test]
fn missing_target_does_not_scroll() {
    let nav = NavController::new(FakePage::with_sections(&[("services", 1200.0)]), 80.0);
    assert_eq!(nav.follow_anchor("#pricing"), None);
    assert!(nav.page().scrolls.borrow().is_empty());
}

#[test]
fn element_near_top_clamps_to_zero() {
    let nav = NavController::new(FakePage::with_sections(&[("hero", 30.0)]), 80.0);
    assert_eq!(nav.follow_anchor("#hero"), Some(0.0));
}

#[test]
fn non_fragment_href_is_ignored() {
    assert_eq!(anchor_target("/about"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("#contact"), Some("contact"));
}
