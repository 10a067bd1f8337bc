// src/update.rs
//
// Top-level reducer. Pure: mutates `AppState` and returns the side effects
// to run; nothing in here touches the DOM or the network.
//
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::{AppState, CameraStatus, CbcPageState, VisualPageState};

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // Delegate to flow-specific reducers first. When one of them consumes the
    // message we can bail out early.
    if crate::reducers::cbc::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::visual::update(state, &msg, &mut commands) {
        return commands;
    }

    match msg {
        Message::Navigate(route) => navigate(state, route, &mut commands),
        other => {
            debug_log!("Unhandled message: {:?}", other);
        }
    }

    commands
}

fn navigate(state: &mut AppState, route: Route, commands: &mut Vec<Command>) {
    if state.route == route {
        return;
    }
    debug_log!("Navigate {:?} -> {:?}", state.route, route);

    // Leaving a flow discards its visit; late responses for it are dropped
    // because visit 0 is never handed out.
    match state.route {
        Route::Visual => {
            if state.visual.visit != 0 {
                commands.push(Command::StopCamera { visit: state.visual.visit });
            }
            state.visual = VisualPageState::default();
        }
        Route::Cbc => state.cbc = CbcPageState::default(),
        Route::Home => {}
    }

    state.route = route;

    match route {
        Route::Cbc => {
            let visit = state.next_visit();
            state.cbc = CbcPageState::new(visit);
        }
        Route::Visual => {
            let visit = state.next_visit();
            state.visual = VisualPageState::new(visit);
            state.visual.camera = CameraStatus::Starting;
            commands.push(Command::StartCamera { visit });
        }
        Route::Home => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_visual_starts_camera() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::Navigate(Route::Visual));
        let visit = state.visual.visit;
        assert_ne!(visit, 0);
        assert_eq!(state.visual.camera, CameraStatus::Starting);
        assert_eq!(cmds, vec![Command::StartCamera { visit }]);
    }

    #[test]
    fn leaving_visual_releases_camera() {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(Route::Visual));
        let visit = state.visual.visit;

        let cmds = update(&mut state, Message::Navigate(Route::Home));
        assert_eq!(cmds, vec![Command::StopCamera { visit }]);
        assert_eq!(state.visual.visit, 0);
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn same_route_is_a_no_op() {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(Route::Cbc));
        let visit = state.cbc.visit;
        state.cbc.form.hemoglobin = "13".into();

        let cmds = update(&mut state, Message::Navigate(Route::Cbc));
        assert!(cmds.is_empty());
        assert_eq!(state.cbc.visit, visit);
        assert_eq!(state.cbc.form.hemoglobin, "13");
    }

    #[test]
    fn each_visit_starts_fresh() {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(Route::Cbc));
        state.cbc.form.mcv = "90".into();
        let first = state.cbc.visit;

        update(&mut state, Message::Navigate(Route::Home));
        update(&mut state, Message::Navigate(Route::Cbc));
        assert!(state.cbc.visit > first);
        assert!(state.cbc.form.mcv.is_empty());
    }
}
