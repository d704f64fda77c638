//! Audio playback
//!
//! Background track plus one-shot effects via macroquad's audio mixer.
//! Every sound is optional; a failed load is logged once and that slot
//! stays silent for the session.

use macroquad::audio::{load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};

/// All sounds the game uses
#[derive(Default)]
pub struct AudioBank {
    music: Option<Sound>,
    coin: Option<Sound>,
    jump: Option<Sound>,
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            println!("Failed to load {}: {}, continuing without it", path, e);
            None
        }
    }
}

impl AudioBank {
    /// Load every sound slot; missing files leave slots empty
    pub async fn load() -> Self {
        Self {
            music: load_optional("assets/audio/theme.ogg").await,
            coin: load_optional("assets/audio/coin.ogg").await,
            jump: load_optional("assets/audio/jump.ogg").await,
        }
    }

    /// Start the looping background track
    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: 0.4,
                },
            );
        }
    }

    /// Stop the background track (teardown path)
    pub fn stop_music(&self) {
        if let Some(music) = &self.music {
            stop_sound(music);
        }
    }

    pub fn play_coin(&self) {
        if let Some(coin) = &self.coin {
            play_sound_once(coin);
        }
    }

    pub fn play_jump(&self) {
        if let Some(jump) = &self.jump {
            play_sound_once(jump);
        }
    }
}
