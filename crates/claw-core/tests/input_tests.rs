// Host-side tests for the keyboard map and held-action tracking.

use claw_core::{action_for_code, action_for_event, action_for_key, Action, HeldActions};

#[test]
fn movement_keys_map_to_directions() {
    for (keys, action) in [
        (["ArrowUp", "w", "W"], Action::Forward),
        (["ArrowDown", "s", "S"], Action::Backward),
        (["ArrowLeft", "a", "A"], Action::Left),
        (["ArrowRight", "d", "D"], Action::Right),
    ] {
        for k in keys {
            assert_eq!(action_for_key(k), Some(action), "key {k}");
        }
    }
}

#[test]
fn space_is_grab() {
    assert_eq!(action_for_key(" "), Some(Action::Grab));
    assert_eq!(action_for_key("Spacebar"), Some(Action::Grab));
}

#[test]
fn other_keys_are_ignored() {
    for k in ["q", "Enter", "Escape", "Shift", "1", ""] {
        assert_eq!(action_for_key(k), None, "key {k}");
    }
}

#[test]
fn physical_codes_map_to_actions() {
    assert_eq!(action_for_code("KeyW"), Some(Action::Forward));
    assert_eq!(action_for_code("KeyS"), Some(Action::Backward));
    assert_eq!(action_for_code("KeyA"), Some(Action::Left));
    assert_eq!(action_for_code("KeyD"), Some(Action::Right));
    assert_eq!(action_for_code("Space"), Some(Action::Grab));
    assert_eq!(action_for_code("KeyQ"), None);
}

#[test]
fn non_latin_layouts_fall_back_to_the_physical_key() {
    // Cyrillic layout: the W key produces "ц".
    assert_eq!(action_for_event("ц", "KeyW"), Some(Action::Forward));
    assert_eq!(action_for_event("ф", "KeyA"), Some(Action::Left));
    assert_eq!(action_for_event("w", "KeyW"), Some(Action::Forward));
    assert_eq!(action_for_event("Escape", "Escape"), None);
}

#[test]
fn held_actions_track_press_and_release() {
    let mut held = HeldActions::default();
    assert!(!held.any());
    assert!(held.press(Action::Forward));
    assert!(held.press(Action::Left));
    assert!(held.forward && held.left);
    assert!(held.release(Action::Forward));
    assert!(!held.forward && held.left);
    held.clear();
    assert!(!held.any());
}

#[test]
fn grab_is_not_a_held_action() {
    let mut held = HeldActions::default();
    assert!(!held.press(Action::Grab));
    assert_eq!(held, HeldActions::default());
}
