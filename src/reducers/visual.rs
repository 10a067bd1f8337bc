//! Visual screening reducer: camera lifecycle, capture, submission, retake.

use crate::constants::MSG_CAMERA_UNAVAILABLE;
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::{AppState, CameraStatus, VisualOutcome};

/// Handles visual-screening messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let page = &mut state.visual;
    match msg {
        Message::CameraReady { visit } => {
            if *visit != page.visit || page.camera != CameraStatus::Starting {
                // Stream arrived after the view moved on; give it back.
                commands.push(Command::StopCamera { visit: *visit });
                return true;
            }
            page.camera = CameraStatus::Live;
            true
        }
        Message::CameraFailed { visit, reason } => {
            if *visit != page.visit {
                return true;
            }
            debug_log!("Camera error: {}", reason);
            page.camera = CameraStatus::Failed(MSG_CAMERA_UNAVAILABLE.to_string());
            true
        }
        Message::RetryCamera => {
            if page.camera_error().is_some() {
                page.camera = CameraStatus::Starting;
                commands.push(Command::StartCamera { visit: page.visit });
            }
            true
        }
        Message::CaptureClicked => {
            if page.can_capture() {
                commands.push(Command::CaptureFrame { visit: page.visit });
            }
            true
        }
        Message::ImageCaptured { visit, image } => {
            if *visit != page.visit || page.loading || page.captured.is_some() {
                return true;
            }
            page.captured = Some(image.clone());
            // The live preview is replaced by the still image.
            page.camera = CameraStatus::Off;
            commands.push(Command::StopCamera { visit: page.visit });

            page.loading = true;
            page.error = None;
            page.result = None;
            commands.push(Command::SubmitVisual { visit: page.visit, image: image.clone() });
            true
        }
        Message::VisualPredictionLoaded { visit, prediction, received_at } => {
            if *visit != page.visit {
                debug_log!("Dropping visual response for stale visit {}", visit);
                return true;
            }
            page.loading = false;
            page.error = None;
            page.result = Some(VisualOutcome {
                prediction: prediction.clone(),
                received_at: *received_at,
            });
            true
        }
        Message::VisualPredictionFailed { visit, error } => {
            if *visit != page.visit {
                return true;
            }
            page.loading = false;
            page.result = None;
            page.error = Some(error.clone());
            true
        }
        Message::Retake => {
            if page.loading {
                return true;
            }
            page.captured = None;
            page.result = None;
            page.error = None;
            // Live stays live, Starting already has a request in flight.
            if page.camera == CameraStatus::Off {
                page.camera = CameraStatus::Starting;
                commands.push(Command::StartCamera { visit: page.visit });
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CapturedImage, VisualPrediction};
    use crate::router::Route;
    use crate::state::FlowPhase;

    fn live_visual_page() -> AppState {
        let mut state = AppState::new();
        crate::update::update(&mut state, Message::Navigate(Route::Visual));
        let visit = state.visual.visit;
        let mut commands = Vec::new();
        update(&mut state, &Message::CameraReady { visit }, &mut commands);
        assert!(commands.is_empty());
        state
    }

    fn image() -> CapturedImage {
        CapturedImage { data_url: "data:image/jpeg;base64,AAAA".into() }
    }

    #[test]
    fn capture_submits_and_releases_camera() {
        let mut state = live_visual_page();
        let visit = state.visual.visit;
        let mut commands = Vec::new();

        update(&mut state, &Message::CaptureClicked, &mut commands);
        assert_eq!(commands, vec![Command::CaptureFrame { visit }]);
        commands.clear();

        update(&mut state, &Message::ImageCaptured { visit, image: image() }, &mut commands);
        assert_eq!(
            commands,
            vec![
                Command::StopCamera { visit },
                Command::SubmitVisual { visit, image: image() },
            ]
        );
        assert_eq!(state.visual.phase(), FlowPhase::Loading);
        assert_eq!(state.visual.camera, CameraStatus::Off);
    }

    #[test]
    fn capture_is_ignored_without_live_camera() {
        let mut state = AppState::new();
        crate::update::update(&mut state, Message::Navigate(Route::Visual));
        let mut commands = Vec::new();
        update(&mut state, &Message::CaptureClicked, &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn camera_failure_is_recoverable() {
        let mut state = AppState::new();
        crate::update::update(&mut state, Message::Navigate(Route::Visual));
        let visit = state.visual.visit;
        let mut commands = Vec::new();

        update(
            &mut state,
            &Message::CameraFailed { visit, reason: "NotAllowedError".into() },
            &mut commands,
        );
        assert_eq!(state.visual.camera_error(), Some(MSG_CAMERA_UNAVAILABLE));
        // Camera trouble is not a network error.
        assert!(state.visual.error.is_none());

        update(&mut state, &Message::RetryCamera, &mut commands);
        assert_eq!(state.visual.camera, CameraStatus::Starting);
        assert_eq!(commands, vec![Command::StartCamera { visit }]);
    }

    #[test]
    fn retake_clears_result_and_error() {
        let mut state = live_visual_page();
        let visit = state.visual.visit;
        let mut commands = Vec::new();
        update(&mut state, &Message::ImageCaptured { visit, image: image() }, &mut commands);
        update(
            &mut state,
            &Message::VisualPredictionFailed { visit, error: "HTTP error! status: 502".into() },
            &mut commands,
        );
        assert_eq!(state.visual.phase(), FlowPhase::Error);
        assert!(state.visual.result.is_none());
        commands.clear();

        update(&mut state, &Message::Retake, &mut commands);
        assert!(state.visual.captured.is_none());
        assert!(state.visual.error.is_none());
        assert!(state.visual.result.is_none());
        assert_eq!(commands, vec![Command::StartCamera { visit }]);
    }

    #[test]
    fn result_is_rendered_once_loaded() {
        let mut state = live_visual_page();
        let visit = state.visual.visit;
        let mut commands = Vec::new();
        update(&mut state, &Message::ImageCaptured { visit, image: image() }, &mut commands);
        update(
            &mut state,
            &Message::VisualPredictionLoaded {
                visit,
                prediction: VisualPrediction { risk_label: "Low Risk".into(), confidence_score: 0.72 },
                received_at: crate::utils::now(),
            },
            &mut commands,
        );
        assert_eq!(state.visual.phase(), FlowPhase::Result);
        assert!(state.visual.captured.is_some());
    }

    #[test]
    fn late_stream_is_handed_back() {
        let mut state = AppState::new();
        crate::update::update(&mut state, Message::Navigate(Route::Visual));
        let old_visit = state.visual.visit;
        crate::update::update(&mut state, Message::Navigate(Route::Home));

        let mut commands = Vec::new();
        update(&mut state, &Message::CameraReady { visit: old_visit }, &mut commands);
        assert_eq!(commands, vec![Command::StopCamera { visit: old_visit }]);
        assert_eq!(state.visual.camera, CameraStatus::Off);
    }

    #[test]
    fn retake_while_starting_does_not_request_camera_twice() {
        let mut state = AppState::new();
        crate::update::update(&mut state, Message::Navigate(Route::Visual));
        assert_eq!(state.visual.camera, CameraStatus::Starting);

        let mut commands = Vec::new();
        update(&mut state, &Message::Retake, &mut commands);
        assert!(commands.is_empty());
        assert_eq!(state.visual.camera, CameraStatus::Starting);
    }

    #[test]
    fn stale_visual_response_is_dropped() {
        let mut state = live_visual_page();
        let visit = state.visual.visit;
        let mut commands = Vec::new();
        update(&mut state, &Message::ImageCaptured { visit, image: image() }, &mut commands);
        let stale = visit - 1;

        update(
            &mut state,
            &Message::VisualPredictionLoaded {
                visit: stale,
                prediction: VisualPrediction { risk_label: "High Risk".into(), confidence_score: 0.9 },
                received_at: crate::utils::now(),
            },
            &mut commands,
        );
        update(
            &mut state,
            &Message::VisualPredictionFailed { visit: stale, error: "HTTP error! status: 500".into() },
            &mut commands,
        );

        assert_eq!(state.visual.phase(), FlowPhase::Loading);
        assert!(state.visual.result.is_none());
        assert!(state.visual.error.is_none());
    }
}
