//! Building blocks shared by both flow pages.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{self, el};
use crate::router::Route;

/// "← Back to Home" link.
pub fn back_link(document: &Document) -> Result<Element, JsValue> {
    let link = el(document, "a", "back-link", Some("← Back to Home"))?;
    link.set_attribute("href", Route::Home.hash())?;
    Ok(link)
}

/// Yellow medical disclaimer box.
pub fn disclaimer(document: &Document, text: &str) -> Result<Element, JsValue> {
    let boxed = el(document, "div", "disclaimer", None)?;
    let strong = el(document, "strong", "", Some("Medical Disclaimer: "))?;
    boxed.append_child(&strong)?;
    boxed.append_child(&document.create_text_node(text))?;
    Ok(boxed)
}

/// "Remember: ..." note under a result.
pub fn reminder(document: &Document, text: &str) -> Result<Element, JsValue> {
    let boxed = el(document, "div", "reminder", None)?;
    let strong = el(document, "strong", "", Some("Remember: "))?;
    boxed.append_child(&strong)?;
    boxed.append_child(&document.create_text_node(text))?;
    Ok(boxed)
}

/// Hidden red error banner; text is filled in by the page renderer.
pub fn error_banner(document: &Document, id: &str) -> Result<Element, JsValue> {
    let banner = el(document, "div", "banner-error", None)?;
    banner.set_id(id);
    banner.set_attribute("role", "alert")?;
    dom_utils::hide(&banner);
    Ok(banner)
}

/// `<label> ... <value id>` row of a result panel.
pub fn result_row(document: &Document, label: &str, value_id: &str) -> Result<Element, JsValue> {
    let row = el(document, "div", "result-row", None)?;
    row.append_child(&el(document, "span", "", Some(label))?.into())?;
    let value = el(document, "span", "value", None)?;
    value.set_id(value_id);
    row.append_child(&value)?;
    Ok(row)
}

/// Button with id, class and label.
pub fn button(document: &Document, id: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let btn = el(document, "button", class, Some(text))?;
    btn.set_id(id);
    btn.set_attribute("type", "button")?;
    Ok(btn)
}

/// Styled link to another route.
pub fn route_link(document: &Document, route: Route, class: &str, text: &str) -> Result<Element, JsValue> {
    let link = el(document, "a", class, Some(text))?;
    link.set_attribute("href", route.hash())?;
    Ok(link)
}
