//! Movement tuning constants
//!
//! Values are in world pixels and seconds, matched to the 16px tile grid.

/// Horizontal run speed (px/s)
pub const MOVE_SPEED: f32 = 160.0;

/// Upward velocity applied when a jump fires (px/s, applied negative)
pub const JUMP_IMPULSE: f32 = 330.0;

/// Downward acceleration (px/s^2)
pub const GRAVITY: f32 = 500.0;

/// Vertical speed beyond which an airborne body shows the jump pose (px/s)
pub const FALL_ANIM_THRESHOLD: f32 = 150.0;

/// Falling speed cap (px/s)
pub const TERMINAL_VELOCITY: f32 = 900.0;
