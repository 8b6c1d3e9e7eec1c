//! Frame timing and the fixed-timestep accumulator
//!
//! Two clocks run side by side: `FrameTimer` measures real elapsed time
//! between host frames, and `SimulationClock` accumulates that time scaled by
//! bullet time to decide when a discrete tick is owed.

use serde::{Deserialize, Serialize};

/// Derives real frame deltas from host timestamps
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_time: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Real milliseconds since the previous frame.
    ///
    /// The first frame after construction or `resync` reports zero, so time
    /// spent paused never reaches the simulation. Timestamps going backwards
    /// also report zero.
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_time {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(timestamp_ms);
        delta
    }

    /// Forget the reference point (used on resume)
    pub fn resync(&mut self) {
        self.last_time = None;
    }
}

/// Scaled-time accumulator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationClock {
    accumulator_ms: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    pub fn accumulate(&mut self, real_delta_ms: f64, time_scale: f64) {
        self.accumulator_ms += real_delta_ms * time_scale;
    }

    /// Consume one tick if more than one interval is banked.
    ///
    /// At most one tick per frame: a long stall leaves the surplus in the
    /// accumulator instead of replaying a burst of moves.
    pub fn consume_tick(&mut self, tick_interval_ms: f64) -> bool {
        if self.accumulator_ms > tick_interval_ms {
            self.accumulator_ms -= tick_interval_ms;
            true
        } else {
            false
        }
    }
}
