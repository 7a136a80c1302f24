//! Logical actions and the keyboard map that produces them.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Grab,
}

/// Map a `KeyboardEvent.key` value to a logical action.
#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Action::Forward),
        "ArrowDown" | "s" | "S" => Some(Action::Backward),
        "ArrowLeft" | "a" | "A" => Some(Action::Left),
        "ArrowRight" | "d" | "D" => Some(Action::Right),
        " " | "Spacebar" => Some(Action::Grab),
        _ => None,
    }
}

/// Map a `KeyboardEvent.code` value (physical key, layout independent) to a
/// logical action.
#[inline]
pub fn action_for_code(code: &str) -> Option<Action> {
    match code {
        "ArrowUp" | "KeyW" => Some(Action::Forward),
        "ArrowDown" | "KeyS" => Some(Action::Backward),
        "ArrowLeft" | "KeyA" => Some(Action::Left),
        "ArrowRight" | "KeyD" => Some(Action::Right),
        "Space" => Some(Action::Grab),
        _ => None,
    }
}

/// Resolve a key event by its `key`, falling back to its physical `code` so
/// W/A/S/D still work on non-Latin layouts.
pub fn action_for_event(key: &str, code: &str) -> Option<Action> {
    action_for_key(key).or_else(|| action_for_code(code))
}

/// Directional actions currently held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldActions {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldActions {
    /// Update the held set; returns false for actions that are not held
    /// (grab is edge-triggered).
    pub fn set(&mut self, action: Action, down: bool) -> bool {
        let slot = match action {
            Action::Forward => &mut self.forward,
            Action::Backward => &mut self.backward,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Grab => return false,
        };
        *slot = down;
        true
    }

    pub fn press(&mut self, action: Action) -> bool {
        self.set(action, true)
    }

    pub fn release(&mut self, action: Action) -> bool {
        self.set(action, false)
    }

    /// Drop everything, e.g. when the window loses focus and keyups are lost.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
