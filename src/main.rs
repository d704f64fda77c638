//! Coinvale: a 2D side-scrolling coin-collecting platformer
//!
//! Run left and right, jump between platforms, grab every coin. All the
//! engine services (window, rendering, input polling, audio mixing) come
//! from macroquad; the game itself is the scene lifecycle in scene.rs and
//! the per-frame core under game/.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod audio;
mod game;
mod input;
mod scene;
mod world;

use macroquad::prelude::*;
use scene::GameScene;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Coinvale v{}", VERSION),
        window_width: 960,
        window_height: 600,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut scene = GameScene::preload().await;
    scene.create();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        scene.update(get_frame_time());
        scene.draw();
        next_frame().await;
    }

    scene.dispose();
}
