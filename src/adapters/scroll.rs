use leptos::prelude::{document, window};
use tracing::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls the element with `anchor_id` into view.
///
/// Returns `false` when no such element is rendered.
pub fn scroll_to_anchor(anchor_id: &str) -> bool {
    let Some(element) = document().get_element_by_id(anchor_id) else {
        warn!(anchor = %anchor_id, "scroll target not rendered");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}
