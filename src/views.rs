// src/views.rs
//
// Render the page for the current route from the application state.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::*;
use crate::pages;
use crate::router::Route;
use crate::state::AppState;

fn page_id(route: Route) -> &'static str {
    match route {
        Route::Home => ID_HOME_PAGE,
        Route::Cbc => ID_CBC_PAGE,
        Route::Visual => ID_VISUAL_PAGE,
    }
}

// Render the appropriate page based on the active route in the state
pub fn render_active_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    render_nav(state.route, document);
    document.set_title(&format!("{} | Anemia Screening", state.route.title()));

    // Mount on route change; a page that is already in the DOM keeps its
    // inputs and the attached camera stream
    if document.get_element_by_id(page_id(state.route)).is_none() {
        let container = document
            .get_element_by_id(ID_PAGE_CONTAINER)
            .ok_or_else(|| JsValue::from_str("Could not find page-container"))?;
        container.set_inner_html("");
        match state.route {
            Route::Home => pages::home::mount(document, &container)?,
            Route::Cbc => pages::cbc::mount(document, &container)?,
            Route::Visual => pages::visual::mount(document, &container)?,
        }
    }

    match state.route {
        Route::Home => Ok(()),
        Route::Cbc => pages::cbc::render(&state.cbc, document),
        Route::Visual => pages::visual::render(&state.visual, document),
    }
}

fn render_nav(route: Route, document: &Document) {
    for (id, link_route) in [
        (ID_NAV_HOME, Route::Home),
        (ID_NAV_CBC, Route::Cbc),
        (ID_NAV_VISUAL, Route::Visual),
    ] {
        if let Some(link) = document.get_element_by_id(id) {
            let class = if link_route == route { CSS_NAV_LINK_ACTIVE } else { CSS_NAV_LINK };
            link.set_class_name(class);
        }
    }
}
