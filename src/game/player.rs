//! Player movement and animation resolution
//!
//! One pure function: control state plus current kinematics in, velocity
//! and animation commands out. The physics step owns the kinematics; this
//! only decides what the player wants to do with them. Nothing here keeps
//! state between frames, so every frame is resolved from scratch.

use crate::input::ControlState;

use super::constants::{FALL_ANIM_THRESHOLD, JUMP_IMPULSE, MOVE_SPEED};

/// Kinematic state of the player body. Written by the physics step,
/// read (and partially commanded) by movement resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerKinematics {
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub facing_left: bool,
}

/// The animation pose selected for a frame. Exactly one is active at a
/// time; the choice is re-derived every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
}

/// Commands produced by one movement resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementCommand {
    pub velocity_x: f32,
    pub facing_left: bool,
    /// Vertical velocity to apply, present only when a jump fires this
    /// frame (negative = upward)
    pub jump_velocity_y: Option<f32>,
    pub animation: AnimationState,
}

/// Resolve one frame of player movement.
///
/// Evaluation order is fixed:
/// 1. Horizontal direction. Left wins when both directions are held.
/// 2. Jump trigger, gated on ground contact. An airborne jump press does
///    nothing; there is no double jump.
/// 3. Airborne pose override: a body rising or falling faster than the
///    threshold shows the jump pose even while a walk is commanded.
pub fn resolve_movement(controls: &ControlState, kin: &PlayerKinematics) -> MovementCommand {
    let mut velocity_x = 0.0;
    let mut facing_left = kin.facing_left;
    let mut animation = AnimationState::Idle;

    if controls.move_left {
        velocity_x = -MOVE_SPEED;
        facing_left = true;
        animation = AnimationState::Walk;
    } else if controls.move_right {
        velocity_x = MOVE_SPEED;
        facing_left = false;
        animation = AnimationState::Walk;
    }

    let mut jump_velocity_y = None;
    let mut velocity_y = kin.velocity_y;
    if controls.jump_requested && kin.on_ground {
        velocity_y = -JUMP_IMPULSE;
        jump_velocity_y = Some(velocity_y);
        animation = AnimationState::Jump;
    }

    if !kin.on_ground && velocity_y.abs() > FALL_ANIM_THRESHOLD {
        animation = AnimationState::Jump;
    }

    MovementCommand {
        velocity_x,
        facing_left,
        jump_velocity_y,
        animation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded() -> PlayerKinematics {
        PlayerKinematics {
            on_ground: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_left_sets_speed_facing_and_walk() {
        let controls = ControlState {
            move_left: true,
            ..Default::default()
        };
        let cmd = resolve_movement(&controls, &grounded());
        assert_eq!(cmd.velocity_x, -MOVE_SPEED);
        assert!(cmd.facing_left);
        assert_eq!(cmd.animation, AnimationState::Walk);
        assert!(cmd.jump_velocity_y.is_none());
    }

    #[test]
    fn test_right_sets_speed_facing_and_walk() {
        let controls = ControlState {
            move_right: true,
            ..Default::default()
        };
        let cmd = resolve_movement(&controls, &grounded());
        assert_eq!(cmd.velocity_x, MOVE_SPEED);
        assert!(!cmd.facing_left);
        assert_eq!(cmd.animation, AnimationState::Walk);
    }

    #[test]
    fn test_no_input_is_idle_and_stationary() {
        let cmd = resolve_movement(&ControlState::default(), &grounded());
        assert_eq!(cmd.velocity_x, 0.0);
        assert_eq!(cmd.animation, AnimationState::Idle);
    }

    #[test]
    fn test_both_directions_resolve_left() {
        let controls = ControlState {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        let cmd = resolve_movement(&controls, &grounded());
        assert_eq!(cmd.velocity_x, -MOVE_SPEED);
        assert!(cmd.facing_left);
    }

    #[test]
    fn test_facing_persists_when_stationary() {
        let kin = PlayerKinematics {
            on_ground: true,
            facing_left: true,
            ..Default::default()
        };
        let cmd = resolve_movement(&ControlState::default(), &kin);
        assert!(cmd.facing_left);
    }

    #[test]
    fn test_grounded_jump_applies_impulse() {
        let controls = ControlState {
            jump_requested: true,
            ..Default::default()
        };
        let cmd = resolve_movement(&controls, &grounded());
        assert_eq!(cmd.jump_velocity_y, Some(-JUMP_IMPULSE));
        assert_eq!(cmd.animation, AnimationState::Jump);
    }

    #[test]
    fn test_airborne_jump_press_is_ignored() {
        let controls = ControlState {
            jump_requested: true,
            ..Default::default()
        };
        let kin = PlayerKinematics {
            on_ground: false,
            velocity_y: -50.0,
            ..Default::default()
        };
        let cmd = resolve_movement(&controls, &kin);
        assert!(cmd.jump_velocity_y.is_none());
        // Slow airborne drift stays below the pose threshold
        assert_eq!(cmd.animation, AnimationState::Idle);
    }

    #[test]
    fn test_fast_fall_overrides_walk_pose() {
        let controls = ControlState {
            move_right: true,
            ..Default::default()
        };
        let kin = PlayerKinematics {
            on_ground: false,
            velocity_y: FALL_ANIM_THRESHOLD + 1.0,
            ..Default::default()
        };
        let cmd = resolve_movement(&controls, &kin);
        assert_eq!(cmd.velocity_x, MOVE_SPEED);
        assert_eq!(cmd.animation, AnimationState::Jump);
    }

    #[test]
    fn test_fast_rise_overrides_idle_pose() {
        let kin = PlayerKinematics {
            on_ground: false,
            velocity_y: -(FALL_ANIM_THRESHOLD + 1.0),
            ..Default::default()
        };
        let cmd = resolve_movement(&ControlState::default(), &kin);
        assert_eq!(cmd.animation, AnimationState::Jump);
    }

    #[test]
    fn test_grounded_fast_velocity_does_not_override() {
        // On the ground the pose follows input even if velocity_y is stale
        let kin = PlayerKinematics {
            on_ground: true,
            velocity_y: FALL_ANIM_THRESHOLD + 100.0,
            ..Default::default()
        };
        let cmd = resolve_movement(&ControlState::default(), &kin);
        assert_eq!(cmd.animation, AnimationState::Idle);
    }
}
