//! Small typed helpers over `web-sys` lookups and class toggles.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::DomError;

/// Visibility class used throughout the page stylesheet.
pub const HIDDEN: &str = "hidden";
/// Active nav link marker.
pub const ACTIVE: &str = "active";
/// Centers an open modal.
pub const FLEX: &str = "flex";

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Look up `#id` and cast it to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType {
            id: id.to_string(),
            expected: short_type_name::<T>(),
        })
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| DomError::js("querySelectorAll", e))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    // toggle only throws for malformed class tokens
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_hidden(element: &Element, hidden: bool) {
    set_class(element, HIDDEN, hidden);
}

pub fn is_hidden(element: &Element) -> bool {
    element.class_list().contains(HIDDEN)
}

pub fn smooth_scroll(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
