//! Input state management
//!
//! Polls macroquad keyboard state and resolves it into the per-frame
//! `ControlState` consumed by the movement system. Arrow keys and WASD
//! are both accepted; resolution is a pure read with no side effects.

use macroquad::prelude::*;

use super::Action;

/// Resolved control signals for one frame.
///
/// Recomputed from raw key state every frame, never persisted. Holding
/// both directions at once is allowed here; the movement system applies
/// the tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_requested: bool,
}

/// Keyboard input frontend. Stateless; exists so the key bindings live in
/// one place instead of being scattered through the update loop.
#[derive(Default)]
pub struct InputState;

/// Keys bound to an action; the first entry is the primary binding
fn keys(action: Action) -> &'static [KeyCode] {
    match action {
        Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
        Action::MoveRight => &[KeyCode::Right, KeyCode::D],
        Action::Jump => &[KeyCode::Space, KeyCode::Up, KeyCode::W],
        Action::Pause => &[KeyCode::P],
    }
}

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if an action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        keys(action).iter().any(|&key| is_key_down(key))
    }

    /// Check if an action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        keys(action).iter().any(|&key| is_key_pressed(key))
    }

    /// Resolve the full control state for this frame
    pub fn resolve(&self) -> ControlState {
        ControlState {
            move_left: self.action_down(Action::MoveLeft),
            move_right: self.action_down(Action::MoveRight),
            jump_requested: self.action_down(Action::Jump),
        }
    }
}
