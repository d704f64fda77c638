//! Input handling
//!
//! Provides an action-based input layer over macroquad's raw keyboard
//! state. Each frame the raw key state is resolved into a `ControlState`
//! value that the movement system consumes; nothing in here is stateful.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
