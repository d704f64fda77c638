//! Event system
//!
//! Events decouple the game systems from each other. The coin ledger does
//! not know about the HUD or the audio bank; it sends a CoinCollectedEvent
//! and each interested system drains the queue on its own terms during the
//! same frame.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A coin was collected and the score advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCollectedEvent {
    /// Cell coordinate of the collected coin
    pub tile: (u32, u32),
    /// Score after this collection
    pub score: u32,
}

/// The player left the ground under a jump impulse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpEvent {
    /// Applied vertical velocity (negative = upward)
    pub velocity_y: f32,
}

/// Container for all game events
#[derive(Default)]
pub struct Events {
    pub coin_collected: EventQueue<CoinCollectedEvent>,
    pub jumped: EventQueue<JumpEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_and_drain() {
        let mut queue = EventQueue::new();
        queue.send(CoinCollectedEvent {
            tile: (1, 2),
            score: 1,
        });
        queue.send(CoinCollectedEvent {
            tile: (3, 4),
            score: 2,
        });
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].score, 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_iter_does_not_clear() {
        let mut queue = EventQueue::new();
        queue.send(JumpEvent { velocity_y: -330.0 });
        assert_eq!(queue.iter().count(), 1);
        assert_eq!(queue.iter().count(), 1);
    }
}
