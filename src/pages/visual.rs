// src/pages/visual.rs
//
// Visual Anemia Screening page: live camera preview, capture, preview of the
// captured frame, loading state and result panel.
//
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::components::panels;
use crate::constants::*;
use crate::dom_utils::{self, el, listen};
use crate::messages::Message;
use crate::require_element;
use crate::router::Route;
use crate::state::{dispatch_global_message, CameraStatus, VisualPageState};
use crate::utils::{format_percent, format_received_at};

const INSTRUCTIONS: [&str; 4] = [
    "Pull down your lower eyelid gently to expose the inner conjunctiva",
    "Look up while keeping the eyelid pulled down",
    "Ensure good lighting and center your eye in the frame",
    "Hold steady and click \"Capture Image\" when ready",
];

pub fn mount(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = el(document, "section", "", None)?;
    page.set_id(ID_VISUAL_PAGE);

    page.append_child(&panels::back_link(document)?.into())?;
    page.append_child(&panels::disclaimer(document, MSG_DISCLAIMER_VISUAL)?.into())?;

    let card = el(document, "div", "card", None)?;
    card.append_child(&el(document, "h2", "", Some("Visual Anemia Screening"))?.into())?;
    card.append_child(&el(document, "p", "subtitle", Some("Camera-based conjunctiva analysis"))?.into())?;

    let instructions = el(document, "div", "instructions", None)?;
    instructions.append_child(&el(document, "h3", "", Some("Instructions:"))?.into())?;
    let list = document.create_element("ul")?;
    for step in INSTRUCTIONS {
        list.append_child(&el(document, "li", "", Some(step))?.into())?;
    }
    instructions.append_child(&list)?;
    card.append_child(&instructions)?;

    card.append_child(&build_camera_section(document)?.into())?;
    card.append_child(&build_preview(document)?.into())?;

    let loading = el(document, "div", "loading", None)?;
    loading.set_id(ID_VISUAL_LOADING);
    loading.set_inner_html("<span class=\"spinner\"></span>Analyzing image...");
    dom_utils::hide(&loading);
    card.append_child(&loading)?;

    card.append_child(&panels::error_banner(document, ID_VISUAL_ERROR)?.into())?;
    card.append_child(&build_result(document)?.into())?;

    page.append_child(&card)?;
    container.append_child(&page)?;
    Ok(())
}

fn build_camera_section(document: &Document) -> Result<Element, JsValue> {
    let section = el(document, "div", "", None)?;
    section.set_id(ID_VISUAL_CAMERA_SECTION);

    // Live preview with the alignment guide on top
    let frame = el(document, "div", "camera-frame", None)?;
    frame.set_id(ID_VISUAL_CAMERA_FRAME);
    let video = document.create_element("video")?;
    video.set_id(ID_VISUAL_VIDEO);
    video.set_attribute("autoplay", "")?;
    video.set_attribute("playsinline", "")?;
    video.set_attribute("muted", "")?;
    frame.append_child(&video)?;
    let overlay = el(document, "div", "overlay-guide", None)?;
    overlay.append_child(&el(document, "span", "", Some("Center eye here"))?.into())?;
    frame.append_child(&overlay)?;

    let actions = el(document, "div", "actions", None)?;
    let capture = panels::button(document, ID_VISUAL_CAPTURE, "btn btn-success", "Capture Image")?;
    listen(&capture, "click", |_| dispatch_global_message(Message::CaptureClicked))?;
    actions.append_child(&capture)?;
    frame.append_child(&actions)?;
    section.append_child(&frame)?;

    // Permission / device failure, with retry
    let failure = el(document, "div", "camera-error", None)?;
    failure.set_id(ID_VISUAL_CAMERA_ERROR);
    let text = el(document, "p", "", None)?;
    text.set_id(ID_VISUAL_CAMERA_ERROR_TEXT);
    failure.append_child(&text)?;
    let retry = panels::button(document, ID_VISUAL_CAMERA_RETRY, "btn btn-danger", "Try Again")?;
    listen(&retry, "click", |_| dispatch_global_message(Message::RetryCamera))?;
    failure.append_child(&retry)?;
    dom_utils::hide(&failure);
    section.append_child(&failure)?;

    Ok(section)
}

fn build_preview(document: &Document) -> Result<Element, JsValue> {
    let preview = el(document, "div", "preview", None)?;
    preview.set_id(ID_VISUAL_PREVIEW);
    dom_utils::hide(&preview);

    preview.append_child(&el(document, "h3", "", Some("Captured Image:"))?.into())?;
    let img = document.create_element("img")?;
    img.set_id(ID_VISUAL_PREVIEW_IMG);
    img.set_attribute("alt", "Captured conjunctiva")?;
    preview.append_child(&img)?;

    let actions = el(document, "div", "actions", None)?;
    let retake = panels::button(document, ID_VISUAL_RETAKE, "btn btn-secondary", "Retake Photo")?;
    listen(&retake, "click", |_| dispatch_global_message(Message::Retake))?;
    actions.append_child(&retake)?;
    preview.append_child(&actions)?;

    Ok(preview)
}

fn build_result(document: &Document) -> Result<Element, JsValue> {
    let result = el(document, "div", "result", None)?;
    result.set_id(ID_VISUAL_RESULT);
    dom_utils::hide(&result);

    result.append_child(&el(document, "h3", "", Some("Screening Results"))?.into())?;
    let thumb = document.create_element("img")?;
    thumb.set_id(ID_VISUAL_RESULT_IMG);
    thumb.set_class_name("thumb");
    thumb.set_attribute("alt", "Analyzed conjunctiva")?;
    result.append_child(&thumb)?;

    result.append_child(&panels::result_row(document, "Risk Level:", ID_VISUAL_RESULT_LABEL)?.into())?;
    result.append_child(&panels::result_row(document, "Confidence Score:", ID_VISUAL_RESULT_SCORE)?.into())?;
    result.append_child(&panels::result_row(document, "Analyzed at:", ID_VISUAL_RESULT_TIME)?.into())?;
    result.append_child(&panels::reminder(document, MSG_REMINDER_VISUAL)?.into())?;

    let actions = el(document, "div", "actions", None)?;
    let again = panels::button(
        document,
        ID_VISUAL_RETAKE_AFTER_RESULT,
        "btn btn-secondary",
        "Take Another Photo",
    )?;
    listen(&again, "click", |_| dispatch_global_message(Message::Retake))?;
    actions.append_child(&again)?;
    actions.append_child(&panels::route_link(document, Route::Cbc, "btn-link btn-primary", "Try CBC Analysis")?.into())?;
    result.append_child(&actions)?;

    Ok(result)
}

fn set_image_src(document: &Document, id: &str, src: &str) {
    if let Some(img) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
    {
        if img.src() != src {
            img.set_src(src);
        }
    }
}

/// Reflect `page` into the mounted DOM.
pub fn render(page: &VisualPageState, document: &Document) -> Result<(), JsValue> {
    // Camera section exists only until a frame is captured
    let camera_section = require_element!(document, ID_VISUAL_CAMERA_SECTION);
    dom_utils::set_visible(&camera_section, page.captured.is_none());

    let camera_error = page.camera_error();
    dom_utils::set_visible_by_id(document, ID_VISUAL_CAMERA_FRAME, camera_error.is_none());
    dom_utils::set_visible_by_id(document, ID_VISUAL_CAMERA_ERROR, camera_error.is_some());
    if let Some(msg) = camera_error {
        dom_utils::set_text_by_id(document, ID_VISUAL_CAMERA_ERROR_TEXT, msg);
    }
    if let Some(capture) = dom_utils::button_by_id(document, ID_VISUAL_CAPTURE) {
        capture.set_disabled(!page.can_capture());
        let label = if page.camera == CameraStatus::Starting {
            "Starting camera..."
        } else {
            "Capture Image"
        };
        capture.set_text_content(Some(label));
    }

    // Captured still, before a result arrives
    let show_preview = page.captured.is_some() && page.result.is_none() && !page.loading;
    dom_utils::set_visible_by_id(document, ID_VISUAL_PREVIEW, show_preview);
    if let Some(image) = &page.captured {
        set_image_src(document, ID_VISUAL_PREVIEW_IMG, &image.data_url);
        set_image_src(document, ID_VISUAL_RESULT_IMG, &image.data_url);
    }

    dom_utils::set_visible_by_id(document, ID_VISUAL_LOADING, page.loading);

    let banner = require_element!(document, ID_VISUAL_ERROR);
    match &page.error {
        Some(error) => {
            banner.set_text_content(Some(&format!("Error: {}", error)));
            dom_utils::show(&banner);
        }
        None => dom_utils::hide(&banner),
    }

    let panel = require_element!(document, ID_VISUAL_RESULT);
    match (&page.result, page.loading || page.error.is_some()) {
        (Some(outcome), false) => {
            let prediction = &outcome.prediction;
            let label = require_element!(document, ID_VISUAL_RESULT_LABEL);
            label.set_text_content(Some(&prediction.risk_label));
            label.set_class_name(&format!("value {}", prediction.tone().css_class()));
            dom_utils::set_text_by_id(document, ID_VISUAL_RESULT_SCORE, &format_percent(prediction.confidence_score));
            dom_utils::set_text_by_id(document, ID_VISUAL_RESULT_TIME, &format_received_at(&outcome.received_at));
            dom_utils::set_visible_by_id(document, ID_VISUAL_RESULT_IMG, page.captured.is_some());
            dom_utils::show(&panel);
        }
        _ => dom_utils::hide(&panel),
    }

    Ok(())
}
