//! Scene rendering
//!
//! Draws the world through a clamped follow camera, then the HUD in screen
//! space. Every texture is optional: a missing asset degrades to a flat
//! placeholder so the game stays playable without the art pack.

use macroquad::prelude::*;

use crate::input::Action;
use crate::world::{TileMap, TILE_SIZE};

use super::animation::AnimationPlayer;
use super::physics::{BODY_HEIGHT, BODY_WIDTH};

/// Visible world area in pixels (the camera window)
pub const VIEW_WIDTH: f32 = 480.0;
pub const VIEW_HEIGHT: f32 = 300.0;

/// Atlas frame size for the player strip
const FRAME_SIZE: f32 = 16.0;

/// Sky color used when no background texture is available
pub const SKY: Color = Color::new(0.42, 0.65, 0.88, 1.0);

/// Loaded textures. Any entry may be None after a failed load.
pub struct Textures {
    pub tiles: Option<Texture2D>,
    pub player: Option<Texture2D>,
    pub coin: Option<Texture2D>,
    pub background: Option<Texture2D>,
}

impl Textures {
    pub fn none() -> Self {
        Self {
            tiles: None,
            player: None,
            coin: None,
            background: None,
        }
    }
}

/// Camera following the player, clamped so the view never leaves the map.
/// The negative-height display rect keeps world y pointing down.
pub fn follow_camera(map: &TileMap, player_pos: Vec2) -> Camera2D {
    let half_w = VIEW_WIDTH / 2.0;
    let half_h = VIEW_HEIGHT / 2.0;
    let cx = (player_pos.x + BODY_WIDTH / 2.0).clamp(half_w, (map.width_px() - half_w).max(half_w));
    let cy = (player_pos.y + BODY_HEIGHT / 2.0)
        .clamp(half_h, (map.height_px() - half_h).max(half_h));
    Camera2D::from_display_rect(Rect::new(cx - half_w, cy + half_h, VIEW_WIDTH, -VIEW_HEIGHT))
}

/// World-space rectangle a camera shows
pub fn view_rect(camera: &Camera2D) -> Rect {
    Rect::new(
        camera.target.x - VIEW_WIDTH / 2.0,
        camera.target.y - VIEW_HEIGHT / 2.0,
        VIEW_WIDTH,
        VIEW_HEIGHT,
    )
}

/// Background image stretched over the visible area
pub fn draw_background(textures: &Textures, view: Rect) {
    if let Some(bg) = &textures.background {
        draw_texture_ex(
            bg,
            view.x,
            view.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(view.w, view.h)),
                ..Default::default()
            },
        );
    }
}

fn draw_ground_tile(textures: &Textures, id: u16, px: f32, py: f32) {
    if let Some(tiles) = &textures.tiles {
        draw_texture_ex(
            tiles,
            px,
            py,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(TILE_SIZE, TILE_SIZE)),
                source: Some(Rect::new(
                    (id - 1) as f32 * FRAME_SIZE,
                    0.0,
                    FRAME_SIZE,
                    FRAME_SIZE,
                )),
                ..Default::default()
            },
        );
    } else {
        let color = if id == 1 { BROWN } else { DARKGREEN };
        draw_rectangle(px, py, TILE_SIZE, TILE_SIZE, color);
    }
}

fn draw_coin(textures: &Textures, px: f32, py: f32) {
    if let Some(coin) = &textures.coin {
        draw_texture_ex(
            coin,
            px,
            py,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(TILE_SIZE, TILE_SIZE)),
                ..Default::default()
            },
        );
    } else {
        draw_circle(px + TILE_SIZE / 2.0, py + TILE_SIZE / 2.0, 5.0, GOLD);
    }
}

/// Draw the visible slice of both tile layers
pub fn draw_map(textures: &Textures, map: &TileMap, view: Rect) {
    let x0 = (view.x / TILE_SIZE).floor().max(0.0) as i32;
    let y0 = (view.y / TILE_SIZE).floor().max(0.0) as i32;
    let x1 = (((view.x + view.w) / TILE_SIZE).ceil() as i32).min(map.width as i32 - 1);
    let y1 = (((view.y + view.h) / TILE_SIZE).ceil() as i32).min(map.height as i32 - 1);

    for cy in y0..=y1 {
        for cx in x0..=x1 {
            let px = cx as f32 * TILE_SIZE;
            let py = cy as f32 * TILE_SIZE;
            let id = map.ground_at(cx, cy);
            if id != 0 {
                draw_ground_tile(textures, id, px, py);
            }
            if map.coin_at(cx, cy) != 0 {
                draw_coin(textures, px, py);
            }
        }
    }
}

/// Draw the player sprite at its current animation frame
pub fn draw_player(
    textures: &Textures,
    position: Vec2,
    animation: &AnimationPlayer,
    facing_left: bool,
) {
    if let Some(player) = &textures.player {
        // The 16x16 frame is centered on the narrower collision box
        let px = position.x - (FRAME_SIZE - BODY_WIDTH) / 2.0;
        let py = position.y - (FRAME_SIZE - BODY_HEIGHT);
        draw_texture_ex(
            player,
            px,
            py,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(FRAME_SIZE, FRAME_SIZE)),
                source: Some(Rect::new(
                    animation.atlas_column() as f32 * FRAME_SIZE,
                    0.0,
                    FRAME_SIZE,
                    FRAME_SIZE,
                )),
                flip_x: facing_left,
                ..Default::default()
            },
        );
    } else {
        draw_rectangle(position.x, position.y, BODY_WIDTH, BODY_HEIGHT, MAROON);
    }
}

/// Score readout, drawn in screen space (call after set_default_camera)
pub fn draw_hud(score: u32) {
    draw_text(&format!("Score: {}", score), 16.0, 32.0, 30.0, WHITE);
}

/// Dim the screen and list the controls while paused
pub fn draw_pause_overlay() {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.5),
    );
    draw_text("Paused - press P to resume", 16.0, 64.0, 30.0, WHITE);
    let bindings = ["left arrow / A", "right arrow / D", "space / up / W", "P"];
    for (i, action) in Action::ALL.iter().enumerate() {
        draw_text(
            &format!("{}: {}", action.label(), bindings[i]),
            16.0,
            96.0 + i as f32 * 24.0,
            22.0,
            LIGHTGRAY,
        );
    }
}
