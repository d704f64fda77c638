//! Animation playback
//!
//! Maps the pose chosen by the movement system to a frame in the player
//! atlas strip. The movement system re-derives its pose every frame, so
//! the player here suppresses restarts: setting the pose that is already
//! playing keeps the current frame and timer.

use super::player::AnimationState;

/// Seconds per animation frame
const FRAME_TIME: f32 = 0.1;

/// Frame range in the atlas strip for a pose: (first column, frame count)
fn frames_for(state: AnimationState) -> (usize, usize) {
    match state {
        AnimationState::Idle => (0, 1),
        AnimationState::Walk => (1, 4),
        AnimationState::Jump => (5, 1),
    }
}

/// Plays one pose at a time from the player atlas strip
pub struct AnimationPlayer {
    state: AnimationState,
    frame: usize,
    timer: f32,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            state: AnimationState::Idle,
            frame: 0,
            timer: 0.0,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Switch pose. Re-setting the playing pose is a no-op so walk cycles
    /// don't restart every frame.
    pub fn set(&mut self, state: AnimationState) {
        if state != self.state {
            self.state = state;
            self.frame = 0;
            self.timer = 0.0;
        }
    }

    /// Advance the frame timer
    pub fn tick(&mut self, dt: f32) {
        let (_, count) = frames_for(self.state);
        if count <= 1 {
            return;
        }
        self.timer += dt;
        while self.timer >= FRAME_TIME {
            self.timer -= FRAME_TIME;
            self.frame = (self.frame + 1) % count;
        }
    }

    /// Absolute column in the atlas strip for the current frame
    pub fn atlas_column(&self) -> usize {
        let (first, _) = frames_for(self.state);
        first + self.frame
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_cycles_through_frames() {
        let mut player = AnimationPlayer::new();
        player.set(AnimationState::Walk);
        assert_eq!(player.atlas_column(), 1);

        player.tick(FRAME_TIME);
        assert_eq!(player.atlas_column(), 2);
        player.tick(FRAME_TIME * 3.0);
        assert_eq!(player.atlas_column(), 1); // wrapped around 4 frames
    }

    #[test]
    fn test_resetting_same_pose_does_not_restart() {
        let mut player = AnimationPlayer::new();
        player.set(AnimationState::Walk);
        player.tick(FRAME_TIME);
        let before = player.atlas_column();

        player.set(AnimationState::Walk);
        assert_eq!(player.atlas_column(), before);
    }

    #[test]
    fn test_pose_change_restarts() {
        let mut player = AnimationPlayer::new();
        player.set(AnimationState::Walk);
        player.tick(FRAME_TIME * 2.0);
        player.set(AnimationState::Jump);
        assert_eq!(player.state(), AnimationState::Jump);
        assert_eq!(player.atlas_column(), 5);

        player.set(AnimationState::Walk);
        assert_eq!(player.atlas_column(), 1);
    }

    #[test]
    fn test_single_frame_poses_do_not_advance() {
        let mut player = AnimationPlayer::new();
        player.tick(10.0);
        assert_eq!(player.atlas_column(), 0);

        player.set(AnimationState::Jump);
        player.tick(10.0);
        assert_eq!(player.atlas_column(), 5);
    }
}
