//! Per-frame input
//!
//! The simulation only ever sees an [`InputSnapshot`]. Edge detection happens
//! here, on the shell side, in [`InputTracker`].

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Up held
    pub up: bool,
    /// Up went down this frame
    pub jump_pressed: bool,
    /// Fire went down this frame
    pub fire_pressed: bool,
    /// Fire is held
    pub fire_held: bool,
    /// Pause went down this frame
    pub pause_pressed: bool,
}

/// Raw key levels as reported by the platform layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub fire: bool,
    pub pause: bool,
}

/// Turns raw key levels into snapshots with edge-detected presses
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: RawKeys,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture this frame's snapshot and remember the key levels
    pub fn capture(&mut self, keys: RawKeys) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: keys.left,
            right: keys.right,
            up: keys.up,
            jump_pressed: keys.up && !self.previous.up,
            fire_pressed: keys.fire && !self.previous.fire,
            fire_held: keys.fire,
            pause_pressed: keys.pause && !self.previous.pause,
        };
        self.previous = keys;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_edge_only_on_first_frame() {
        let mut tracker = InputTracker::new();
        let held = RawKeys {
            fire: true,
            ..Default::default()
        };

        let first = tracker.capture(held);
        assert!(first.fire_pressed);
        assert!(first.fire_held);

        let second = tracker.capture(held);
        assert!(!second.fire_pressed);
        assert!(second.fire_held);

        tracker.capture(RawKeys::default());
        assert!(tracker.capture(held).fire_pressed);
    }

    #[test]
    fn test_jump_and_pause_edges() {
        let mut tracker = InputTracker::new();
        let keys = RawKeys {
            up: true,
            pause: true,
            left: true,
            ..Default::default()
        };
        let snap = tracker.capture(keys);
        assert!(snap.jump_pressed && snap.pause_pressed && snap.up && snap.left);

        let snap = tracker.capture(keys);
        assert!(!snap.jump_pressed && !snap.pause_pressed);
        assert!(snap.up && snap.left);
    }
}
