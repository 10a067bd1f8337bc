use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::constants::{CSS_NAV_LINK, ID_APP_ROOT, ID_NAV_CBC, ID_NAV_HOME, ID_NAV_VISUAL, ID_PAGE_CONTAINER};
use crate::router::Route;

/// Build the persistent shell: stylesheet, header with navigation links and
/// the container pages are mounted into. Idempotent.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    super::styles::inject(document)?;

    if document.get_element_by_id(ID_APP_ROOT).is_some() {
        return Ok(());
    }

    let root = document.create_element("div")?;
    root.set_id(ID_APP_ROOT);

    // Create header
    let header = document.create_element("header")?;
    header.set_class_name("header");

    let title = document.create_element("h1")?;
    title.set_text_content(Some("Anemia Screening"));
    header.append_child(&title)?;

    let nav = document.create_element("nav")?;
    nav.set_class_name("nav");
    for (id, route, text) in [
        (ID_NAV_HOME, Route::Home, "Home"),
        (ID_NAV_CBC, Route::Cbc, "CBC Analyzer"),
        (ID_NAV_VISUAL, Route::Visual, "Visual Screening"),
    ] {
        let link = document.create_element("a")?;
        link.set_id(id);
        link.set_class_name(CSS_NAV_LINK);
        link.set_attribute("href", route.hash())?;
        link.set_text_content(Some(text));
        nav.append_child(&link)?;
    }
    header.append_child(&nav)?;

    let container = document.create_element("main")?;
    container.set_id(ID_PAGE_CONTAINER);
    container.set_class_name("page-container");

    root.append_child(&header)?;
    root.append_child(&container)?;

    let body = document.body().ok_or(JsValue::from_str("No body found"))?;
    body.append_child(&root)?;

    Ok(())
}
