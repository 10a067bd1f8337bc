use wasm_bindgen_futures::spawn_local;

use crate::camera;
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::models::CapturedImage;
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;
use crate::utils;

/// Run a side effect requested by the reducers. Async work is spawned and
/// reports back through `dispatch_global_message`.
pub fn execute(cmd: Command) {
    match cmd {
        Command::SubmitCbc { visit, request } => {
            spawn_local(async move {
                let msg = match ApiClient::predict_cbc(&request).await {
                    Ok(prediction) => Message::CbcPredictionLoaded {
                        visit,
                        prediction,
                        received_at: utils::now(),
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("CBC prediction failed: {}", e).into());
                        Message::CbcPredictionFailed { visit, error: e.to_string() }
                    }
                };
                dispatch_global_message(msg);
            });
        }
        Command::SubmitVisual { visit, image } => {
            spawn_local(async move {
                let msg = match ApiClient::predict_visual(&image).await {
                    Ok(prediction) => Message::VisualPredictionLoaded {
                        visit,
                        prediction,
                        received_at: utils::now(),
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Visual prediction failed: {}", e).into());
                        Message::VisualPredictionFailed { visit, error: e.to_string() }
                    }
                };
                dispatch_global_message(msg);
            });
        }
        Command::StartCamera { visit } => {
            spawn_local(async move {
                let msg = match camera::start(visit).await {
                    Ok(()) => Message::CameraReady { visit },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Camera error: {}", e).into());
                        Message::CameraFailed { visit, reason: e.to_string() }
                    }
                };
                dispatch_global_message(msg);
            });
        }
        Command::StopCamera { visit } => camera::stop(visit),
        Command::CaptureFrame { visit } => match camera::capture_frame() {
            Ok(Some(data_url)) => dispatch_global_message(Message::ImageCaptured {
                visit,
                image: CapturedImage { data_url },
            }),
            Ok(None) => {
                debug_log!("Capture skipped: no video frame yet");
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Frame capture failed: {}", e).into());
                crate::toast::error("Could not capture the image. Please try again.");
            }
        },
    }
}
