// src/pages/cbc.rs
//
// CBC Analyzer page: five-field form, submit, result panel.
//
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::components::panels;
use crate::constants::*;
use crate::dom_utils::{self, el, listen};
use crate::messages::Message;
use crate::models::{CbcField, Gender};
use crate::require_element;
use crate::router::Route;
use crate::state::{dispatch_global_message, CbcPageState};
use crate::utils::{format_percent, format_received_at};

/// Build the page skeleton and wire its listeners. Dynamic parts are filled
/// in by `render`.
pub fn mount(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = el(document, "section", "", None)?;
    page.set_id(ID_CBC_PAGE);

    page.append_child(&panels::back_link(document)?.into())?;
    page.append_child(&panels::disclaimer(document, MSG_DISCLAIMER_CBC)?.into())?;

    let card = el(document, "div", "card", None)?;
    card.append_child(&el(document, "h2", "", Some("CBC Analyzer"))?.into())?;
    card.append_child(&el(document, "p", "subtitle", Some("Complete Blood Count Analysis Tool"))?.into())?;

    card.append_child(&build_form(document)?.into())?;
    card.append_child(&panels::error_banner(document, ID_CBC_ERROR)?.into())?;
    card.append_child(&build_result(document)?.into())?;

    page.append_child(&card)?;
    container.append_child(&page)?;
    Ok(())
}

fn build_form(document: &Document) -> Result<Element, JsValue> {
    let form = document.create_element("form")?;
    form.set_id(ID_CBC_FORM);
    form.set_attribute("novalidate", "")?;

    // Gender -------------------------------------------------------------
    let gender_field = el(document, "div", "field", None)?;
    gender_field.append_child(&el(document, "label", "", Some("Gender"))?.into())?;
    let group = el(document, "div", "radio-group", None)?;
    for (id, gender) in [(ID_CBC_GENDER_MALE, Gender::Male), (ID_CBC_GENDER_FEMALE, Gender::Female)] {
        let wrap = el(document, "div", "", None)?;
        let radio = document.create_element("input")?;
        radio.set_id(id);
        radio.set_attribute("type", "radio")?;
        radio.set_attribute("name", "Gender")?;
        radio.set_attribute("value", gender.as_str())?;
        listen(&radio, "change", move |_| {
            dispatch_global_message(Message::CbcGenderSelected(gender));
        })?;
        let label = el(document, "label", "", Some(gender.as_str()))?;
        label.set_attribute("for", id)?;
        wrap.append_child(&radio)?;
        wrap.append_child(&label)?;
        group.append_child(&wrap)?;
    }
    gender_field.append_child(&group)?;
    form.append_child(&gender_field)?;

    // Measurements -------------------------------------------------------
    for field in CbcField::ALL {
        form.append_child(&build_measurement(document, field)?.into())?;
    }

    // Submit -------------------------------------------------------------
    let submit = el(document, "button", "btn btn-primary", Some("Analyze CBC Results"))?;
    submit.set_id(ID_CBC_SUBMIT);
    submit.set_attribute("type", "submit")?;
    form.append_child(&submit)?;

    listen(&form, "submit", |event| {
        event.prevent_default();
        dispatch_global_message(Message::CbcSubmit);
    })?;

    Ok(form)
}

fn build_measurement(document: &Document, field: CbcField) -> Result<Element, JsValue> {
    let wrap = el(document, "div", "field", None)?;

    let label = el(document, "label", "", Some(field.label()))?;
    label.set_attribute("for", field.key())?;
    wrap.append_child(&label)?;

    let range = field.range();
    let input = document.create_element("input")?;
    input.set_id(field.key());
    input.set_attribute("type", "number")?;
    input.set_attribute("name", field.key())?;
    input.set_attribute("min", &range.min.to_string())?;
    input.set_attribute("max", &range.max.to_string())?;
    input.set_attribute("step", &range.step.to_string())?;
    input.set_attribute("placeholder", field.placeholder())?;
    input.set_attribute("required", "")?;
    listen(&input, "input", move |event| {
        let value = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|i| i.value())
            .unwrap_or_default();
        dispatch_global_message(Message::CbcFieldChanged { field, value });
    })?;
    wrap.append_child(&input)?;

    wrap.append_child(&el(document, "p", "hint", Some(&field.range_hint()))?.into())?;
    Ok(wrap)
}

fn build_result(document: &Document) -> Result<Element, JsValue> {
    let result = el(document, "div", "result", None)?;
    result.set_id(ID_CBC_RESULT);
    dom_utils::hide(&result);

    result.append_child(&el(document, "h3", "", Some("Analysis Results"))?.into())?;
    result.append_child(&panels::result_row(document, "Prediction:", ID_CBC_RESULT_LABEL)?.into())?;
    result.append_child(&panels::result_row(document, "Anemic Probability:", ID_CBC_RESULT_ANEMIC)?.into())?;
    result.append_child(&panels::result_row(document, "Non-Anemic Probability:", ID_CBC_RESULT_NON_ANEMIC)?.into())?;
    result.append_child(&panels::result_row(document, "Analyzed at:", ID_CBC_RESULT_TIME)?.into())?;
    result.append_child(&panels::reminder(document, MSG_REMINDER_CBC)?.into())?;

    let actions = el(document, "div", "actions", None)?;
    let reset = panels::button(document, ID_CBC_RESET, "btn btn-secondary", "Test Again")?;
    listen(&reset, "click", |_| dispatch_global_message(Message::CbcReset))?;
    actions.append_child(&reset)?;
    actions.append_child(&panels::route_link(
        document,
        Route::Visual,
        "btn-link btn-success",
        "Try Visual Screening →",
    )?.into())?;
    result.append_child(&actions)?;

    Ok(result)
}

/// Reflect `page` into the mounted DOM.
pub fn render(page: &CbcPageState, document: &Document) -> Result<(), JsValue> {
    // Inputs: only write when the DOM disagrees so the caret is not reset
    for (id, gender) in [(ID_CBC_GENDER_MALE, Gender::Male), (ID_CBC_GENDER_FEMALE, Gender::Female)] {
        if let Some(radio) = dom_utils::input_by_id(document, id) {
            radio.set_checked(page.form.gender == Some(gender));
        }
    }
    let out_of_range = page.form.out_of_range();
    for field in CbcField::ALL {
        if let Some(input) = dom_utils::input_by_id(document, field.key()) {
            let raw = page.form.raw(field);
            if input.value() != raw {
                input.set_value(raw);
            }
            dom_utils::toggle_class(&input, CSS_OUT_OF_RANGE, out_of_range.contains(&field));
        }
    }

    // Submit button
    if let Some(submit) = dom_utils::button_by_id(document, ID_CBC_SUBMIT) {
        submit.set_disabled(!page.can_submit());
        if page.loading {
            submit.set_inner_html("<span class=\"spinner\"></span>Analyzing...");
        } else {
            submit.set_text_content(Some("Analyze CBC Results"));
        }
    }

    // Error banner
    let banner = require_element!(document, ID_CBC_ERROR);
    match &page.error {
        Some(error) => {
            banner.set_text_content(Some(error));
            dom_utils::show(&banner);
        }
        None => dom_utils::hide(&banner),
    }

    // Result panel - never alongside an error or an in-flight request
    let panel = require_element!(document, ID_CBC_RESULT);
    match (&page.result, page.loading || page.error.is_some()) {
        (Some(outcome), false) => {
            let prediction = &outcome.prediction;
            let label = require_element!(document, ID_CBC_RESULT_LABEL);
            label.set_text_content(Some(&prediction.label));
            label.set_class_name(&format!("value {}", prediction.tone().css_class()));

            let scores = &prediction.confidence_scores;
            dom_utils::set_text_by_id(document, ID_CBC_RESULT_ANEMIC, &format_percent(scores.anemic_probability));
            dom_utils::set_text_by_id(
                document,
                ID_CBC_RESULT_NON_ANEMIC,
                &format_percent(scores.non_anemic_probability),
            );
            dom_utils::set_text_by_id(document, ID_CBC_RESULT_TIME, &format_received_at(&outcome.received_at));
            dom_utils::show(&panel);
        }
        _ => dom_utils::hide(&panel),
    }

    Ok(())
}
