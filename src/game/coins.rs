//! Coin ledger
//!
//! Tracks which coin cells are still collectible and scores each at most
//! once. Membership is keyed by integer cell coordinate, never by identity
//! of anything the engine owns, so a cell stays accounted for even if the
//! rendered layer is touched through another path.

use std::collections::HashSet;

use super::event::{CoinCollectedEvent, Events};

/// The set of uncollected coins plus the score counter.
///
/// Seeded once at level load; the set never gains members afterwards.
/// Score is monotonic: +1 per successfully cleared coin, nothing else.
pub struct CoinLedger {
    uncollected: HashSet<(u32, u32)>,
    score: u32,
}

impl CoinLedger {
    /// Seed from the non-empty cells of the coin layer
    pub fn new(coins: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            uncollected: coins.into_iter().collect(),
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Coins still on the map
    pub fn remaining(&self) -> usize {
        self.uncollected.len()
    }

    /// Overlap callback for one coin cell.
    ///
    /// `clear_tile` removes the cell from the rendered layer and reports
    /// whether anything was actually removed. The score advances only when
    /// the cell is still in the uncollected set AND the layer removal
    /// succeeds, so a repeated overlap on the same cell scores once.
    ///
    /// Always returns false: coins are non-solid, the physics caller must
    /// not run a collision response against them.
    pub fn on_overlap<F>(&mut self, tile: (u32, u32), clear_tile: F, events: &mut Events) -> bool
    where
        F: FnOnce((u32, u32)) -> bool,
    {
        if !self.uncollected.contains(&tile) {
            return false;
        }
        if !clear_tile(tile) {
            return false;
        }
        self.uncollected.remove(&tile);
        self.score += 1;
        events.coin_collected.send(CoinCollectedEvent {
            tile,
            score: self.score,
        });
        false
    }
}
