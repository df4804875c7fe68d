//=========================================================================
// Frame Time
//=========================================================================
//
// Fixed-step clock advanced once per logic tick.
//
// The logic thread runs at a fixed TPS, so every tick advances simulated
// time by exactly `1 / tps` regardless of how long the tick took.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== FrameTime ===========================================================

/// Simulated time as seen by scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    delta: Duration,
    elapsed: Duration,
    tick: u64,
}

impl FrameTime {
    /// Creates a clock with the given fixed step.
    pub fn fixed(delta: Duration) -> Self {
        Self { delta, elapsed: Duration::ZERO, tick: 0 }
    }

    /// Creates a clock stepping at `tps` ticks per second.
    pub fn from_tps(tps: f64) -> Self {
        Self::fixed(Duration::from_secs_f64(1.0 / tps))
    }

    pub(crate) fn advance(&mut self) {
        self.elapsed += self.delta;
        self.tick += 1;
    }

    /// Step length in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Simulated time since the first tick.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::from_tps(60.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
