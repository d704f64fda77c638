//! World module - tile-based level representation
//!
//! A level is a fixed-size grid with two layers:
//! - ground: solid terrain the player collides with
//! - coins: collectible cells, cleared one by one as they are picked up
//!
//! Levels are stored as RON files under assets/levels/ and validated on
//! load before anything touches them.

// Note: the save path and a few queries are only used by tests and the
// (out-of-tree) level editing workflow, but are part of the level API.
#![allow(dead_code)]

mod level;
mod map;

pub use level::*;
pub use map::*;
