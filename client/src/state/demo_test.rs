#![allow(clippy::float_cmp)]

use super::*;

fn demo(route: RouteId) -> DemoState {
    DemoState::new(route, Orientation::Horizontal, DemoConfig::default()).unwrap()
}

fn tick_until_alert(state: &mut DemoState) {
    for _ in 0..400 {
        if !state.tick().raised.is_empty() {
            return;
        }
    }
    panic!("no alert raised");
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_demo_is_paused_with_nothing_selected() {
    let state = demo(RouteId::Optimal);
    assert!(!state.tracker().is_running());
    assert_eq!(state.selection().selected_id(), None);
    assert!(state.selected_hazard().is_none());
    assert!(state.alert_hazard().is_none());
}

#[test]
fn new_demo_rejects_bad_config() {
    let config = DemoConfig { proximity_threshold: -1.0, ..DemoConfig::default() };
    assert!(DemoState::new(RouteId::Optimal, Orientation::Vertical, config).is_err());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_hazard_selects_the_literal_record() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(1).unwrap();
    let hazard = state.selected_hazard().unwrap();
    assert_eq!(hazard.title, "Pothole #1");
    assert_eq!(hazard.dimensions.to_string(), "45cm × 30cm, 8cm deep");
}

#[test]
fn toggle_hazard_twice_clears() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(2).unwrap();
    state.toggle_hazard(2).unwrap();
    assert!(state.selected_hazard().is_none());
}

#[test]
fn toggle_unknown_hazard_keeps_selection() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(3).unwrap();
    assert!(state.toggle_hazard(99).is_err());
    assert_eq!(state.selection().selected_id(), Some(3));
}

#[test]
fn reset_clears_selection_and_stops() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(1).unwrap();
    state.start();
    state.tick();
    state.reset();
    assert!(state.selected_hazard().is_none());
    assert!(!state.tracker().is_running());
    assert_eq!(state.tracker().progress(), 0.0);
}

// =============================================================
// Route switching
// =============================================================

#[test]
fn switching_route_drops_foreign_selection() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(1).unwrap();
    state.select_route(RouteId::Fastest).unwrap();
    assert_eq!(state.tracker().route(), RouteId::Fastest);
    assert!(state.selected_hazard().is_none());
}

#[test]
fn switching_route_keeps_selection_on_new_route() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(6).unwrap();
    state.select_route(RouteId::Scenic).unwrap();
    assert_eq!(state.selection().selected_id(), Some(6));
}

#[test]
fn reselecting_current_route_does_not_restart() {
    let mut state = demo(RouteId::Optimal);
    state.start();
    state.tick();
    let progress = state.tracker().progress();
    state.select_route(RouteId::Optimal).unwrap();
    assert_eq!(state.tracker().progress(), progress);
}

#[test]
fn rotate_layout_keeps_progress_and_selection() {
    let mut state = demo(RouteId::Optimal);
    state.toggle_hazard(1).unwrap();
    state.start();
    state.tick();
    state.tick();
    let progress = state.tracker().progress();
    state.rotate_layout().unwrap();
    assert_eq!(state.tracker().orientation(), Orientation::Vertical);
    assert_eq!(state.tracker().progress(), progress);
    assert_eq!(state.tracker().route(), RouteId::Optimal);
    assert_eq!(state.selection().selected_id(), Some(1));
    state.rotate_layout().unwrap();
    assert_eq!(state.tracker().orientation(), Orientation::Horizontal);
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn alert_hazard_resolves_current_alert() {
    let mut state = demo(RouteId::Fastest);
    state.start();
    tick_until_alert(&mut state);
    let hazard = state.alert_hazard().unwrap();
    assert_eq!(hazard.id, 4);
    assert_eq!(hazard.route, RouteId::Fastest);
}

#[test]
fn toggle_running_flips_tracker() {
    let mut state = demo(RouteId::Scenic);
    state.toggle_running();
    assert!(state.tracker().is_running());
    state.toggle_running();
    assert!(!state.tracker().is_running());
}
