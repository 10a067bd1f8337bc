use std::cell::RefCell;

use chrono::{DateTime, Utc};
use wasm_bindgen::JsValue;

use crate::messages::{Command, Message};
use crate::models::{CapturedImage, CbcForm, CbcPrediction, VisualPrediction};
use crate::router::Route;
use crate::update;

/// The three mutually exclusive render states of a flow page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    Loading,
    Error,
    Result,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CbcOutcome {
    pub prediction: CbcPrediction,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualOutcome {
    pub prediction: VisualPrediction,
    pub received_at: DateTime<Utc>,
}

/// CBC page state; rebuilt on every visit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CbcPageState {
    pub visit: u32,
    pub form: CbcForm,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<CbcOutcome>,
}

impl CbcPageState {
    pub fn new(visit: u32) -> Self {
        Self { visit, ..Self::default() }
    }

    pub fn phase(&self) -> FlowPhase {
        if self.loading {
            FlowPhase::Loading
        } else if self.error.is_some() {
            FlowPhase::Error
        } else if self.result.is_some() {
            FlowPhase::Result
        } else {
            FlowPhase::Idle
        }
    }

    /// Submit control is enabled only for a complete form with nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.form.is_complete()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CameraStatus {
    #[default]
    Off,
    Starting,
    Live,
    Failed(String),
}

/// Visual screening page state; rebuilt on every visit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualPageState {
    pub visit: u32,
    pub camera: CameraStatus,
    pub captured: Option<CapturedImage>,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<VisualOutcome>,
}

impl VisualPageState {
    pub fn new(visit: u32) -> Self {
        Self { visit, ..Self::default() }
    }

    pub fn phase(&self) -> FlowPhase {
        if self.loading {
            FlowPhase::Loading
        } else if self.error.is_some() {
            FlowPhase::Error
        } else if self.result.is_some() {
            FlowPhase::Result
        } else {
            FlowPhase::Idle
        }
    }

    pub fn camera_error(&self) -> Option<&str> {
        match &self.camera {
            CameraStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn can_capture(&self) -> bool {
        self.camera == CameraStatus::Live && self.captured.is_none() && !self.loading
    }
}

// Store global application state
pub struct AppState {
    pub route: Route,
    // Incremented on every entry into a flow page; tags async results
    pub visit_counter: u32,
    pub cbc: CbcPageState,
    pub visual: VisualPageState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            visit_counter: 0,
            cbc: CbcPageState::default(),
            visual: VisualPageState::default(),
        }
    }

    pub fn next_visit(&mut self) -> u32 {
        self.visit_counter = self.visit_counter.wrapping_add(1);
        self.visit_counter
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update::update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Re-render the mounted page from the current state.
pub fn refresh_ui_after_state_change() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(JsValue::from_str("No window"))?;
    let document = window.document().ok_or(JsValue::from_str("No document"))?;

    APP_STATE.with(|state| {
        let state = state.borrow();
        crate::views::render_active_view(&state, &document)
    })
}

// Global helper function for dispatching messages with proper UI refresh handling
pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    // 2. Refresh before side effects so a disabled submit button is visible
    //    while the request is built
    if let Err(e) = refresh_ui_after_state_change() {
        web_sys::console::warn_1(&format!("Failed to refresh UI after action: {:?}", e).into());
    }

    // 3. Execute commands after state borrow is dropped
    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
