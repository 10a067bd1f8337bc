//! CBC form reducer: field edits, submission, response handling and reset.

use crate::constants::MSG_FILL_ALL_FIELDS;
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::models::CbcForm;
use crate::state::{AppState, CbcOutcome};

/// Handles CBC-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let page = &mut state.cbc;
    match msg {
        Message::CbcFieldChanged { field, value } => {
            page.form.set_raw(*field, value.clone());
            true
        }
        Message::CbcGenderSelected(gender) => {
            page.form.gender = Some(*gender);
            true
        }
        Message::CbcSubmit => {
            if page.loading {
                // Submit control is disabled while in flight; Enter in a field
                // can still fire the form's submit event.
                return true;
            }
            match page.form.to_request() {
                None => {
                    page.error = Some(MSG_FILL_ALL_FIELDS.to_string());
                }
                Some(request) => {
                    page.loading = true;
                    page.error = None;
                    page.result = None;
                    commands.push(Command::SubmitCbc { visit: page.visit, request });
                }
            }
            true
        }
        Message::CbcPredictionLoaded { visit, prediction, received_at } => {
            if *visit != page.visit {
                debug_log!("Dropping CBC response for stale visit {}", visit);
                return true;
            }
            page.loading = false;
            page.error = None;
            page.result = Some(CbcOutcome {
                prediction: prediction.clone(),
                received_at: *received_at,
            });
            true
        }
        Message::CbcPredictionFailed { visit, error } => {
            if *visit != page.visit {
                debug_log!("Dropping CBC failure for stale visit {}", visit);
                return true;
            }
            page.loading = false;
            page.result = None;
            page.error = Some(error.clone());
            true
        }
        Message::CbcReset => {
            page.form = CbcForm::default();
            page.result = None;
            page.error = None;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CbcField, CbcPrediction, ConfidenceScores, Gender};
    use crate::router::Route;
    use crate::state::FlowPhase;
    use proptest::prelude::*;

    fn on_cbc_page() -> AppState {
        let mut state = AppState::new();
        crate::update::update(&mut state, Message::Navigate(Route::Cbc));
        state
    }

    fn fill(state: &mut AppState) {
        let mut commands = Vec::new();
        update(state, &Message::CbcGenderSelected(Gender::Male), &mut commands);
        for (field, value) in [
            (CbcField::Hemoglobin, "10.2"),
            (CbcField::Mcv, "72"),
            (CbcField::Mch, "24.1"),
            (CbcField::Mchc, "31"),
        ] {
            update(
                state,
                &Message::CbcFieldChanged { field, value: value.to_string() },
                &mut commands,
            );
        }
        assert!(commands.is_empty());
    }

    fn prediction(label: &str) -> CbcPrediction {
        CbcPrediction {
            label: label.to_string(),
            prediction_class: 1,
            confidence_scores: ConfidenceScores {
                anemic_probability: 0.8,
                non_anemic_probability: 0.2,
            },
        }
    }

    #[test]
    fn incomplete_form_is_blocked() {
        let mut state = on_cbc_page();
        let mut commands = Vec::new();
        update(&mut state, &Message::CbcSubmit, &mut commands);

        assert!(commands.is_empty());
        assert!(!state.cbc.loading);
        assert_eq!(state.cbc.error.as_deref(), Some(MSG_FILL_ALL_FIELDS));
    }

    #[test]
    fn complete_form_submits_once() {
        let mut state = on_cbc_page();
        fill(&mut state);
        let mut commands = Vec::new();
        update(&mut state, &Message::CbcSubmit, &mut commands);
        update(&mut state, &Message::CbcSubmit, &mut commands);

        assert_eq!(commands.len(), 1);
        match &commands[0] {
            Command::SubmitCbc { visit, request } => {
                assert_eq!(*visit, state.cbc.visit);
                assert_eq!(request.gender, Gender::Male);
                assert_eq!(request.mcv, 72.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(state.cbc.phase(), FlowPhase::Loading);
        assert!(!state.cbc.can_submit());
    }

    #[test]
    fn failure_never_leaves_a_result() {
        let mut state = on_cbc_page();
        fill(&mut state);
        state.cbc.result = Some(CbcOutcome {
            prediction: prediction("Anemic"),
            received_at: crate::utils::now(),
        });
        let visit = state.cbc.visit;
        let mut commands = Vec::new();
        update(&mut state, &Message::CbcSubmit, &mut commands);
        assert!(state.cbc.result.is_none());

        update(
            &mut state,
            &Message::CbcPredictionFailed { visit, error: "HTTP error! status: 500".into() },
            &mut commands,
        );
        assert_eq!(state.cbc.phase(), FlowPhase::Error);
        assert!(state.cbc.result.is_none());
        assert_eq!(state.cbc.error.as_deref(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = on_cbc_page();
        fill(&mut state);
        let mut commands = Vec::new();
        update(&mut state, &Message::CbcSubmit, &mut commands);
        let stale = state.cbc.visit - 1;

        update(
            &mut state,
            &Message::CbcPredictionLoaded {
                visit: stale,
                prediction: prediction("Anemic"),
                received_at: crate::utils::now(),
            },
            &mut commands,
        );
        assert!(state.cbc.loading);
        assert!(state.cbc.result.is_none());
    }

    #[test]
    fn reset_clears_fields_and_result() {
        let mut state = on_cbc_page();
        fill(&mut state);
        let visit = state.cbc.visit;
        let mut commands = Vec::new();
        update(&mut state, &Message::CbcSubmit, &mut commands);
        update(
            &mut state,
            &Message::CbcPredictionLoaded {
                visit,
                prediction: prediction("Not Anemic"),
                received_at: crate::utils::now(),
            },
            &mut commands,
        );
        assert_eq!(state.cbc.phase(), FlowPhase::Result);

        update(&mut state, &Message::CbcReset, &mut commands);
        assert_eq!(state.cbc.form, CbcForm::default());
        assert!(state.cbc.result.is_none());
        assert_eq!(state.cbc.phase(), FlowPhase::Idle);
        assert_eq!(state.cbc.visit, visit);
    }

    proptest! {
        // Any subset of missing fields (at least one) blocks the request.
        #[test]
        fn any_missing_field_blocks_submission(
            mask in 0u8..31,
            hb in 5.0f64..20.0,
            mcv in 60.0f64..120.0,
            mch in 20.0f64..40.0,
            mchc in 30.0f64..40.0,
        ) {
            let mut state = on_cbc_page();
            let form = &mut state.cbc.form;
            if mask & 1 != 0 { form.gender = Some(Gender::Female); }
            if mask & 2 != 0 { form.hemoglobin = hb.to_string(); }
            if mask & 4 != 0 { form.mcv = mcv.to_string(); }
            if mask & 8 != 0 { form.mch = mch.to_string(); }
            if mask & 16 != 0 { form.mchc = mchc.to_string(); }

            let mut commands = Vec::new();
            update(&mut state, &Message::CbcSubmit, &mut commands);
            prop_assert!(commands.is_empty());
            prop_assert!(!state.cbc.loading);
            prop_assert_eq!(state.cbc.error.as_deref(), Some(MSG_FILL_ALL_FIELDS));
        }
    }
}
