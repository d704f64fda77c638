//! Game core module
//!
//! The per-frame logic of the platformer, kept free of engine types so it
//! can run headless in tests:
//! - player: movement/animation state machine (pure function)
//! - physics: arcade gravity + tile collision step
//! - coins: at-most-once coin collection and the score counter
//! - event: decoupled communication between systems
//! - animation: maps the chosen pose to atlas frames over time
//!
//! Rendering lives in renderer and is the only part that talks to
//! macroquad's draw calls.

// Allow unused code - parts of the step/event API surface are exercised
// only by tests
#![allow(dead_code)]

pub mod animation;
pub mod coins;
pub mod constants;
pub mod event;
pub mod physics;
pub mod player;
pub mod renderer;

pub use animation::AnimationPlayer;
pub use coins::CoinLedger;
pub use event::Events;
pub use player::{resolve_movement, AnimationState, MovementCommand, PlayerKinematics};
