use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!UiState::default().menu_open);
}

#[test]
fn toggle_menu_flips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState { menu_open: true };
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}
