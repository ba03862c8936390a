//! Scroll behavior for the page: smooth in-page navigation, the floating
//! scroll-to-top control, and the one-shot reveal of sections entering the
//! viewport.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::config;
use crate::shop::SECTION_ANCHORS;

/// Header is transparent below the offset and solid at or above it.
pub fn header_is_solid(scroll_y: f64) -> bool {
    scroll_y >= config::HEADER_SOLID_OFFSET
}

/// The floating scroll-to-top button is hidden below the offset and shown
/// at or above it.
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y >= config::SCROLL_TOP_OFFSET
}

/// Navigation sequence for an in-page link: the mobile menu closes first,
/// then the viewport moves to the target anchor.
pub fn navigate_to_section(close_menu: impl FnOnce(), scroll: impl FnOnce(&str), id: &str) {
    close_menu();
    scroll(id);
}

/// Smooth-scrolls the viewport to the section carrying `id`. Unknown ids are
/// ignored; every id reachable from the UI is listed in [`SECTION_ANCHORS`].
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scrolls the viewport back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Adds the `visible` class to any section whose top edge has crossed the
/// reveal line. Classes are never removed, so each entrance animation runs
/// exactly once.
pub fn reveal_sections(window: &Window, document: &Document) {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let reveal_line = viewport * config::REVEAL_VIEWPORT_FRACTION;

    for id in SECTION_ANCHORS {
        if let Some(section) = document.get_element_by_id(id) {
            let classes = section.class_name();
            if classes.contains("visible") {
                continue;
            }
            if section.get_bounding_client_rect().top() < reveal_line {
                section.set_class_name(&format!("{} visible", classes));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_solid_at_and_above_offset() {
        assert!(!header_is_solid(0.0));
        assert!(!header_is_solid(49.9));
        assert!(header_is_solid(50.0));
        assert!(header_is_solid(50.1));
        assert!(header_is_solid(10_000.0));
    }

    #[test]
    fn scroll_top_button_at_and_above_offset() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(499.9));
        assert!(scroll_top_visible(500.0));
        assert!(scroll_top_visible(500.1));
    }

    #[test]
    fn section_navigation_closes_menu_before_scrolling() {
        use std::cell::RefCell;

        let order = RefCell::new(Vec::new());
        navigate_to_section(
            || order.borrow_mut().push("close-menu".to_string()),
            |id| order.borrow_mut().push(format!("scroll:{id}")),
            "services",
        );
        assert_eq!(order.into_inner(), vec!["close-menu", "scroll:services"]);
    }
}
