//! Scene lifecycle
//!
//! The phase contract with the frame loop, in order:
//! - preload: fetch every asset (textures, sounds, level document)
//! - create: build the live play state from loaded assets, start music
//! - update/draw: once per frame
//! - dispose: release engine-owned resources; safe to call when nothing
//!   was ever created, and idempotent
//!
//! All per-frame logic runs through `advance`, which takes an explicit
//! ControlState and touches no engine globals, so the whole play loop can
//! be driven headless in tests.

use macroquad::prelude::*;

use crate::audio::AudioBank;
use crate::game::event::JumpEvent;
use crate::game::renderer::{self, Textures, SKY};
use crate::game::{
    physics, resolve_movement, AnimationPlayer, CoinLedger, Events, PlayerKinematics,
};
use crate::input::{Action, ControlState, InputState};
use crate::world::{TileMap, TILE_SIZE};

const LEVEL_PATH: &str = "assets/levels/meadow.ron";

/// Everything gathered during preload
pub struct Assets {
    pub textures: Textures,
    pub audio: AudioBank,
    pub map: TileMap,
}

/// Live play state, built in create
struct PlayState {
    map: TileMap,
    ledger: CoinLedger,
    events: Events,
    position: Vec2,
    kinematics: PlayerKinematics,
    animation: AnimationPlayer,
    /// Last score published by the ledger, shown on the HUD
    score: u32,
    paused: bool,
}

pub struct GameScene {
    assets: Assets,
    input: InputState,
    play: Option<PlayState>,
    disposed: bool,
}

async fn load_optional_texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(e) => {
            println!("Failed to load {}: {}, using placeholder", path, e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_level() -> TileMap {
    match crate::world::load_map_file(std::path::Path::new(LEVEL_PATH)) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Failed to load {}: {}, falling back to sample map", LEVEL_PATH, e);
            TileMap::sample()
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_level() -> TileMap {
    let text = match load_string(LEVEL_PATH).await {
        Ok(text) => text,
        Err(e) => {
            println!("Failed to fetch {}: {}, falling back to sample map", LEVEL_PATH, e);
            return TileMap::sample();
        }
    };
    match crate::world::parse_map(&text) {
        Ok(map) => map,
        Err(e) => {
            println!("Bad level {}: {}, falling back to sample map", LEVEL_PATH, e);
            TileMap::sample()
        }
    }
}

impl GameScene {
    /// Preload phase: fetch all assets. Failures degrade, never abort.
    pub async fn preload() -> Self {
        let textures = Textures {
            tiles: load_optional_texture("assets/textures/tiles.png").await,
            player: load_optional_texture("assets/textures/player.png").await,
            coin: load_optional_texture("assets/textures/coin.png").await,
            background: load_optional_texture("assets/textures/bg.png").await,
        };
        let audio = AudioBank::load().await;
        let map = load_level().await;
        Self::from_parts(Assets {
            textures,
            audio,
            map,
        })
    }

    /// Build a scene from already-loaded parts
    pub fn from_parts(assets: Assets) -> Self {
        Self {
            assets,
            input: InputState::new(),
            play: None,
            disposed: false,
        }
    }

    /// Create phase: seed the ledger, spawn the player, start the music
    pub fn create(&mut self) {
        let map = self.assets.map.clone();
        let ledger = CoinLedger::new(map.coin_cells());

        if map.ground.cells.iter().all(|&c| c == 0) {
            // Degraded state per the load-failure policy: keep running,
            // the player will fall through undefined terrain
            eprintln!("Ground layer is empty, nothing to stand on");
        }
        println!(
            "Level ready: {}x{} cells, {} coins",
            map.width,
            map.height,
            ledger.remaining()
        );

        let (sx, sy) = map.spawn_px();
        let position = Vec2::new(
            sx + (TILE_SIZE - physics::BODY_WIDTH) / 2.0,
            sy + TILE_SIZE - physics::BODY_HEIGHT,
        );

        self.play = Some(PlayState {
            map,
            ledger,
            events: Events::new(),
            position,
            kinematics: PlayerKinematics::default(),
            animation: AnimationPlayer::new(),
            score: 0,
            paused: false,
        });
        self.assets.audio.start_music();
    }

    /// Update phase: poll input, then advance the play state
    pub fn update(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        if self.input.action_pressed(Action::Pause) {
            self.toggle_pause();
        }
        let controls = self.input.resolve();
        self.advance(controls, dt);
    }

    /// Toggle the pause flag (no-op before create)
    pub fn toggle_pause(&mut self) {
        if let Some(play) = &mut self.play {
            play.paused = !play.paused;
        }
    }

    /// One frame of play: movement resolution, physics, coin collection,
    /// event fan-out. Engine-free apart from optional sound effects.
    /// Frozen while paused.
    pub fn advance(&mut self, controls: ControlState, dt: f32) {
        let Some(play) = &mut self.play else {
            return;
        };
        if play.paused {
            return;
        }

        let cmd = resolve_movement(&controls, &play.kinematics);
        play.kinematics.velocity_x = cmd.velocity_x;
        play.kinematics.facing_left = cmd.facing_left;
        if let Some(velocity_y) = cmd.jump_velocity_y {
            play.kinematics.velocity_y = velocity_y;
            play.events.jumped.send(JumpEvent { velocity_y });
        }
        play.animation.set(cmd.animation);
        play.animation.tick(dt);

        let result = physics::step(&play.map, play.position, play.kinematics, dt);
        play.position = result.position;
        play.kinematics = result.kinematics;

        let map = &mut play.map;
        for tile in result.coin_overlaps {
            play.ledger
                .on_overlap(tile, |(x, y)| map.clear_coin(x, y), &mut play.events);
        }

        for event in play.events.coin_collected.drain() {
            play.score = event.score;
            self.assets.audio.play_coin();
        }
        for _ in play.events.jumped.drain() {
            self.assets.audio.play_jump();
        }
    }

    /// Draw phase: world through the follow camera, HUD in screen space
    pub fn draw(&self) {
        clear_background(SKY);
        let Some(play) = &self.play else {
            return;
        };

        let camera = renderer::follow_camera(&play.map, play.position);
        set_camera(&camera);
        let view = renderer::view_rect(&camera);
        renderer::draw_background(&self.assets.textures, view);
        renderer::draw_map(&self.assets.textures, &play.map, view);
        renderer::draw_player(
            &self.assets.textures,
            play.position,
            &play.animation,
            play.kinematics.facing_left,
        );

        set_default_camera();
        renderer::draw_hud(play.score);
        if play.paused {
            renderer::draw_pause_overlay();
        }
    }

    /// Teardown: stop engine-owned resources and drop the play state.
    /// Calling this with nothing created, or calling it twice, is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.assets.audio.stop_music();
        self.play = None;
        self.disposed = true;
        println!("Scene disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::JUMP_IMPULSE;

    const DT: f32 = 1.0 / 60.0;

    fn headless_scene() -> GameScene {
        GameScene::from_parts(Assets {
            textures: Textures::none(),
            audio: AudioBank::default(),
            map: TileMap::sample(),
        })
    }

    fn settle(scene: &mut GameScene) {
        for _ in 0..600 {
            scene.advance(ControlState::default(), DT);
            if scene.play.as_ref().unwrap().kinematics.on_ground {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn test_dispose_without_create_is_noop() {
        let mut scene = headless_scene();
        scene.dispose();
        scene.dispose();
        assert!(scene.play.is_none());
    }

    #[test]
    fn test_advance_before_create_is_noop() {
        let mut scene = headless_scene();
        scene.advance(ControlState::default(), DT);
        assert!(scene.play.is_none());
    }

    #[test]
    fn test_player_spawns_and_lands() {
        let mut scene = headless_scene();
        scene.create();
        settle(&mut scene);
        let play = scene.play.as_ref().unwrap();
        assert!(play.kinematics.on_ground);
        assert_eq!(play.score, 0);
    }

    #[test]
    fn test_jump_only_fires_from_ground() {
        let mut scene = headless_scene();
        scene.create();
        settle(&mut scene);

        let jump = ControlState {
            jump_requested: true,
            ..Default::default()
        };
        scene.advance(jump, DT);
        let vy_after_jump = scene.play.as_ref().unwrap().kinematics.velocity_y;
        assert!(vy_after_jump < -(JUMP_IMPULSE * 0.9));
        assert!(!scene.play.as_ref().unwrap().kinematics.on_ground);

        // Holding jump while airborne never re-applies the impulse
        scene.advance(jump, DT);
        let vy_next = scene.play.as_ref().unwrap().kinematics.velocity_y;
        assert!(vy_next > vy_after_jump);
    }

    #[test]
    fn test_pause_freezes_play() {
        let mut scene = headless_scene();
        scene.create();
        settle(&mut scene);
        let pos = scene.play.as_ref().unwrap().position;

        let run = ControlState {
            move_right: true,
            ..Default::default()
        };
        scene.toggle_pause();
        scene.advance(run, DT);
        assert_eq!(scene.play.as_ref().unwrap().position, pos);

        scene.toggle_pause();
        scene.advance(run, DT);
        assert!(scene.play.as_ref().unwrap().position.x > pos.x);
    }

    #[test]
    fn test_toggle_pause_before_create_is_noop() {
        let mut scene = headless_scene();
        scene.toggle_pause();
        assert!(scene.play.is_none());
    }

    #[test]
    fn test_walking_over_coin_scores_once() {
        let mut scene = headless_scene();
        scene.create();

        // Warp on top of a floor coin from the sample map (cell 25, 13)
        {
            let play = scene.play.as_mut().unwrap();
            play.position = Vec2::new(
                25.0 * TILE_SIZE + 2.0,
                13.0 * TILE_SIZE + TILE_SIZE - physics::BODY_HEIGHT,
            );
            play.kinematics = PlayerKinematics {
                on_ground: true,
                ..Default::default()
            };
        }

        scene.advance(ControlState::default(), DT);
        assert_eq!(scene.play.as_ref().unwrap().score, 1);
        assert_eq!(scene.play.as_ref().unwrap().map.coin_at(25, 13), 0);

        // Still standing there next frame; no double count
        scene.advance(ControlState::default(), DT);
        assert_eq!(scene.play.as_ref().unwrap().score, 1);
    }

    #[test]
    fn test_collecting_all_coins_matches_seed_count() {
        let mut scene = headless_scene();
        scene.create();
        let total = scene.play.as_ref().unwrap().ledger.remaining() as u32;

        let cells: Vec<_> = scene.play.as_ref().unwrap().map.coin_cells().collect();
        for (x, y) in cells {
            let play = scene.play.as_mut().unwrap();
            play.position = Vec2::new(x as f32 * TILE_SIZE + 2.0, y as f32 * TILE_SIZE);
            scene.advance(ControlState::default(), DT);
        }
        let play = scene.play.as_ref().unwrap();
        assert_eq!(play.score, total);
        assert_eq!(play.ledger.remaining(), 0);
    }
}
