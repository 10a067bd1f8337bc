// src/pages/home.rs
//
// Landing page linking to the two screening flows.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::panels;
use crate::constants::ID_HOME_PAGE;
use crate::dom_utils::el;
use crate::router::Route;

pub fn mount(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = el(document, "section", "card", None)?;
    page.set_id(ID_HOME_PAGE);

    page.append_child(&el(document, "h2", "", Some("Anemia Screening"))?.into())?;
    page.append_child(&el(
        document,
        "p",
        "subtitle",
        Some("Choose a screening method to get a preliminary anemia risk assessment."),
    )?.into())?;

    let links = el(document, "div", "home-links", None)?;
    for (route, title, blurb) in [
        (Route::Cbc, "CBC Analyzer", "Enter Hemoglobin, MCV, MCH and MCHC values from a blood test."),
        (Route::Visual, "Visual Screening", "Photograph the inner eyelid with your camera."),
    ] {
        let link = panels::route_link(document, route, "", "")?;
        link.append_child(&el(document, "h3", "", Some(title))?.into())?;
        link.append_child(&el(document, "p", "hint", Some(blurb))?.into())?;
        links.append_child(&link)?;
    }
    page.append_child(&links)?;

    container.append_child(&page)?;
    Ok(())
}
