//! Direct browser calls that have no virtual-DOM equivalent.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

/// Blocking modal alert.
pub fn alert(message: &str) {
    log::debug!("Alerting user: {}", message);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

/// Smoothly scrolls the referenced element into view, moving as little as
/// possible.
pub fn scroll_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        scroll_element(&element, ScrollLogicalPosition::Nearest);
    }
}

/// Smoothly scrolls to the element with the given id, aligned to its top.
pub fn scroll_to_id(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => scroll_element(&element, ScrollLogicalPosition::Start),
        None => log::warn!("No element with id '{}' to scroll to", id),
    }
}

fn scroll_element(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current value of a named field of the referenced form
pub fn form_value(form: &NodeRef, name: &str) -> Option<String> {
    let form = form.cast::<web_sys::HtmlFormElement>()?;
    let form_data = web_sys::FormData::new_with_form(&form)
        .map_err(|e| log::error!("Failed to read form data: {:?}", e))
        .ok()?;
    form_data.get(name).as_string()
}
