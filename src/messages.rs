// src/messages.rs
//
// Events the UI reacts to, and the side effects the reducers ask for.
//
use chrono::{DateTime, Utc};

use crate::models::{CapturedImage, CbcField, CbcPrediction, CbcRequest, Gender, VisualPrediction};
use crate::router::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Routing
    Navigate(Route),

    // CBC flow
    CbcFieldChanged {
        field: CbcField,
        value: String,
    },
    CbcGenderSelected(Gender),
    CbcSubmit,
    CbcPredictionLoaded {
        visit: u32,
        prediction: CbcPrediction,
        received_at: DateTime<Utc>,
    },
    CbcPredictionFailed {
        visit: u32,
        error: String,
    },
    CbcReset, // "Test Again"

    // Visual flow - camera lifecycle
    CameraReady {
        visit: u32,
    },
    CameraFailed {
        visit: u32,
        reason: String,
    },
    RetryCamera,

    // Visual flow - capture and submission
    CaptureClicked,
    ImageCaptured {
        visit: u32,
        image: CapturedImage,
    },
    VisualPredictionLoaded {
        visit: u32,
        prediction: VisualPrediction,
        received_at: DateTime<Utc>,
    },
    VisualPredictionFailed {
        visit: u32,
        error: String,
    },
    Retake,
}

/// Side effects returned by `update()` and run once the state borrow has been
/// released.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// POST the CBC form as JSON
    SubmitCbc { visit: u32, request: CbcRequest },

    /// POST the captured frame as multipart form data
    SubmitVisual { visit: u32, image: CapturedImage },

    /// Acquire the camera and attach it to the preview `<video>`
    StartCamera { visit: u32 },

    /// Stop every track of the camera stream acquired for `visit`
    StopCamera { visit: u32 },

    /// Grab the current video frame
    CaptureFrame { visit: u32 },
}
