//! Arcade physics step
//!
//! Axis-separated AABB movement against the solid tile layer. Horizontal
//! motion resolves first (walls, world edges), then vertical (floor,
//! ceiling, gravity). On-ground status falls out of the vertical pass: a
//! grounded body re-contacts the floor every frame because gravity keeps
//! pulling it down into the snap.
//!
//! The step also reports which coin cells the body overlaps after moving,
//! so the scene can feed the coin ledger exactly once per cell per frame.

use macroquad::math::Vec2;

use crate::world::{TileMap, TILE_SIZE};

use super::constants::{GRAVITY, TERMINAL_VELOCITY};
use super::player::PlayerKinematics;

/// Player collision box in world pixels, slightly narrower than a tile so
/// the body fits through single-tile gaps.
pub const BODY_WIDTH: f32 = 12.0;
pub const BODY_HEIGHT: f32 = 15.0;

const EPS: f32 = 1e-4;

/// Result of one physics step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Corrected top-left position of the body after the step
    pub position: Vec2,
    /// Updated kinematics (velocity after gravity and collision response)
    pub kinematics: PlayerKinematics,
    /// Coin cells the body overlaps at its final position
    pub coin_overlaps: Vec<(u32, u32)>,
    /// Did horizontal motion get blocked by a wall or the world edge?
    pub hit_wall: bool,
    /// Did upward motion get blocked?
    pub hit_ceiling: bool,
}

/// Cell range covered by an AABB. Right/bottom edges are exclusive, so a
/// body resting exactly on a cell boundary does not count as inside the
/// next cell.
fn covered_cells(x: f32, y: f32, w: f32, h: f32) -> impl Iterator<Item = (i32, i32)> {
    let x0 = (x / TILE_SIZE).floor() as i32;
    let x1 = ((x + w - EPS) / TILE_SIZE).floor() as i32;
    let y0 = (y / TILE_SIZE).floor() as i32;
    let y1 = ((y + h - EPS) / TILE_SIZE).floor() as i32;
    (y0..=y1).flat_map(move |cy| (x0..=x1).map(move |cx| (cx, cy)))
}

fn hits_solid(map: &TileMap, x: f32, y: f32) -> bool {
    covered_cells(x, y, BODY_WIDTH, BODY_HEIGHT).any(|(cx, cy)| map.is_solid(cx, cy))
}

/// Advance the player body by one frame.
///
/// `position` is the top-left corner of the collision box; y grows
/// downward. Velocities come in via `kin` (the movement system has already
/// written its commands) and come out corrected for collisions.
///
/// A large frame delta (window drag, load stall) is split into substeps
/// so no single move covers more than a tile; a fast body would otherwise
/// skip a tile row and fall straight through the floor.
pub fn step(map: &TileMap, position: Vec2, kin: PlayerKinematics, dt: f32) -> StepResult {
    let peak_fall = (kin.velocity_y + GRAVITY * dt).min(TERMINAL_VELOCITY).abs();
    let peak_speed = kin.velocity_x.abs().max(kin.velocity_y.abs()).max(peak_fall);
    let substeps = ((peak_speed * dt / (TILE_SIZE - 1.0)).ceil() as usize).max(1);
    let sub_dt = dt / substeps as f32;

    let mut result = step_once(map, position, kin, sub_dt);
    for _ in 1..substeps {
        let next = step_once(map, result.position, result.kinematics, sub_dt);
        for cell in next.coin_overlaps {
            if !result.coin_overlaps.contains(&cell) {
                result.coin_overlaps.push(cell);
            }
        }
        result.hit_wall |= next.hit_wall;
        result.hit_ceiling |= next.hit_ceiling;
        result.position = next.position;
        result.kinematics = next.kinematics;
    }
    result
}

fn step_once(map: &TileMap, position: Vec2, kin: PlayerKinematics, dt: f32) -> StepResult {
    let velocity_x = kin.velocity_x;
    let mut velocity_y = (kin.velocity_y + GRAVITY * dt).min(TERMINAL_VELOCITY);

    let mut hit_wall = false;
    let mut hit_ceiling = false;

    // Horizontal pass: move, clamp to world edges, push out of walls
    let mut x = position.x + velocity_x * dt;
    let max_x = map.width_px() - BODY_WIDTH;
    if x < 0.0 {
        x = 0.0;
        hit_wall = true;
    } else if x > max_x {
        x = max_x;
        hit_wall = true;
    }
    if velocity_x != 0.0 && hits_solid(map, x, position.y) {
        if velocity_x > 0.0 {
            let cell = ((x + BODY_WIDTH) / TILE_SIZE).floor();
            x = cell * TILE_SIZE - BODY_WIDTH;
        } else {
            let cell = (x / TILE_SIZE).floor();
            x = (cell + 1.0) * TILE_SIZE;
        }
        hit_wall = true;
    }

    // Vertical pass: gravity already applied, snap to floor or ceiling
    let mut y = position.y + velocity_y * dt;
    let mut on_ground = false;
    if hits_solid(map, x, y) {
        if velocity_y > 0.0 {
            let row = ((y + BODY_HEIGHT - EPS) / TILE_SIZE).floor();
            y = row * TILE_SIZE - BODY_HEIGHT;
            velocity_y = 0.0;
            on_ground = true;
        } else if velocity_y < 0.0 {
            let row = (y / TILE_SIZE).floor();
            y = (row + 1.0) * TILE_SIZE;
            velocity_y = 0.0;
            hit_ceiling = true;
        }
    }

    let coin_overlaps = covered_cells(x, y, BODY_WIDTH, BODY_HEIGHT)
        .filter(|&(cx, cy)| map.coin_at(cx, cy) != 0)
        .map(|(cx, cy)| (cx as u32, cy as u32))
        .collect();

    StepResult {
        position: Vec2::new(x, y),
        kinematics: PlayerKinematics {
            velocity_x,
            velocity_y,
            on_ground,
            facing_left: kin.facing_left,
        },
        coin_overlaps,
        hit_wall,
        hit_ceiling,
    }
}
