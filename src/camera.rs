//! Camera access for the visual screening page.
//!
//! A single `MediaStream` slot lives in a thread-local, tagged with the visit
//! that acquired it. `stop(visit)` only releases a stream acquired for that
//! visit, so a late `getUserMedia` answer for an old visit cannot kill the
//! current preview.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::constants::{CAMERA_FACING_MODE, CAMERA_HEIGHT, CAMERA_WIDTH, CAPTURE_MIME_TYPE, ID_VISUAL_VIDEO};
use crate::debug_log;
use crate::error::{AppError, AppResult};

/// `video` member of the `getUserMedia` constraints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoConstraints {
    width: u32,
    height: u32,
    facing_mode: &'static str,
}

/// Outcome of handing a freshly acquired stream to the slot.
#[derive(Debug, PartialEq)]
pub(crate) enum Claim<S> {
    /// Slot was empty; the stream is now active.
    Taken,
    /// The stream is now active; the one it displaced must be stopped.
    Replaced(S),
    /// A newer visit already owns the camera; the incoming stream is handed
    /// back to be stopped.
    Superseded(S),
}

/// Single visit-tagged stream holder. Kept free of browser types so the
/// ordering rules can be tested natively.
#[derive(Debug)]
pub(crate) struct StreamSlot<S> {
    active: Option<(u32, S)>,
}

impl<S> Default for StreamSlot<S> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<S> StreamSlot<S> {
    pub(crate) fn claim(&mut self, visit: u32, stream: S) -> Claim<S> {
        match self.active.take() {
            Some((owner, current)) if owner > visit => {
                self.active = Some((owner, current));
                Claim::Superseded(stream)
            }
            Some((_, previous)) => {
                self.active = Some((visit, stream));
                Claim::Replaced(previous)
            }
            None => {
                self.active = Some((visit, stream));
                Claim::Taken
            }
        }
    }

    /// Take the stream out only if `visit` acquired it.
    pub(crate) fn release(&mut self, visit: u32) -> Option<S> {
        match self.active.take() {
            Some((owner, stream)) if owner == visit => Some(stream),
            other => {
                self.active = other;
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn owner(&self) -> Option<u32> {
        self.active.as_ref().map(|(owner, _)| *owner)
    }
}

thread_local! {
    static ACTIVE_STREAM: RefCell<StreamSlot<MediaStream>> = RefCell::new(StreamSlot::default());
}

/// Ask for the camera and attach the stream to the preview `<video>`.
pub async fn start(visit: u32) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Dom("no global window exists".into()))?;
    let devices = window.navigator().media_devices().map_err(AppError::camera)?;

    let video = VideoConstraints {
        width: CAMERA_WIDTH,
        height: CAMERA_HEIGHT,
        facing_mode: CAMERA_FACING_MODE,
    };
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    constraints.set_video(
        &serde_wasm_bindgen::to_value(&video).map_err(|e| AppError::Dom(e.to_string()))?,
    );

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(AppError::camera)?;
    let stream: MediaStream = JsFuture::from(promise)
        .await
        .map_err(AppError::camera)?
        .dyn_into()
        .map_err(AppError::camera)?;

    match ACTIVE_STREAM.with(|slot| slot.borrow_mut().claim(visit, stream.clone())) {
        Claim::Superseded(late) => {
            stop_tracks(&late);
            debug_log!("Discarding camera stream for superseded visit {}", visit);
            return Ok(());
        }
        Claim::Replaced(previous) => stop_tracks(&previous),
        Claim::Taken => {}
    }

    if let Some(video_el) = preview_element() {
        video_el.set_src_object(Some(&stream));
        // Autoplay is set on the element; play() only nudges browsers that
        // ignore it. Rejection is harmless.
        if let Ok(p) = video_el.play() {
            let _ = JsFuture::from(p).await;
        }
    }

    debug_log!("Camera stream acquired for visit {}", visit);
    Ok(())
}

/// Release the stream acquired for `visit`, if it is still the active one.
pub fn stop(visit: u32) {
    let taken = ACTIVE_STREAM.with(|slot| slot.borrow_mut().release(visit));

    if let Some(stream) = taken {
        stop_tracks(&stream);
        if let Some(video_el) = preview_element() {
            video_el.set_src_object(None);
        }
        debug_log!("Camera stream released for visit {}", visit);
    }
}

/// Draw the current video frame onto an off-screen canvas and return it as a
/// JPEG data URL. `Ok(None)` when the video has no frame yet.
pub fn capture_frame() -> AppResult<Option<String>> {
    let video_el = match preview_element() {
        Some(v) => v,
        None => return Ok(None),
    };

    let (width, height) = (video_el.video_width(), video_el.video_height());
    if width == 0 || height == 0 {
        return Ok(None);
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("no document".into()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(AppError::dom)?
        .dyn_into()
        .map_err(|e: web_sys::Element| AppError::dom(e.into()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(AppError::dom)?
        .ok_or_else(|| AppError::Dom("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|e: js_sys::Object| AppError::dom(e.into()))?;
    ctx.draw_image_with_html_video_element(&video_el, 0.0, 0.0)
        .map_err(AppError::dom)?;

    let data_url = canvas
        .to_data_url_with_type(CAPTURE_MIME_TYPE)
        .map_err(AppError::dom)?;
    Ok(Some(data_url))
}

fn preview_element() -> Option<HtmlVideoElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ID_VISUAL_VIDEO))
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
