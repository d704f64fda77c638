//! Game action definitions
//!
//! The platformer has a fixed control scheme:
//! - Left  = left arrow / A
//! - Right = right arrow / D
//! - Jump  = space / up arrow / W
//! - Pause = P

/// All player actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Pause,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Pause,
    ];

    /// Display label (used by the pause overlay's control hints)
    pub fn label(&self) -> &'static str {
        match self {
            Action::MoveLeft => "Left",
            Action::MoveRight => "Right",
            Action::Jump => "Jump",
            Action::Pause => "Pause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_actions_have_distinct_labels() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert!(!a.label().is_empty());
            for b in &Action::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
