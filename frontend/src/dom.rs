//! Small helpers over the rendering surface.

use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the section with the given anchor id into view. Unknown
/// ids are ignored; a missed navigation is cosmetic.
pub fn scroll_to_region(region_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(region_id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::warn!("scroll target #{} not found", region_id);
    }
}

/// Whether the event's target lies inside the referenced element. Used for
/// outside-click detection on the menu overlay and the chat panel.
pub fn event_target_within(event: &web_sys::Event, container: Option<web_sys::Element>) -> bool {
    let Some(container) = container else {
        return false;
    };
    let target = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    container.contains(target.as_ref())
}
