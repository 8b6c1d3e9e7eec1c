//! Combo streak and score multiplier

use serde::{Deserialize, Serialize};

use crate::consts::{COMBO_STEP, COMBO_WINDOW_MS, MAX_COMBO_MULTIPLIER};

/// Consecutive-eat streak with a wall-clock decay window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComboEngine {
    streak: u32,
    decay_remaining_ms: f64,
}

impl ComboEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn decay_remaining_ms(&self) -> f64 {
        self.decay_remaining_ms
    }

    /// Record an eat and refresh the window. Returns the multiplier for this eat.
    pub fn register_eat(&mut self) -> u32 {
        self.streak += 1;
        self.decay_remaining_ms = COMBO_WINDOW_MS;
        self.multiplier()
    }

    /// Run down the window by real elapsed time (never time-scaled)
    pub fn decay(&mut self, real_delta_ms: f64) {
        if self.streak == 0 {
            return;
        }
        self.decay_remaining_ms -= real_delta_ms;
        if self.decay_remaining_ms <= 0.0 {
            self.streak = 0;
            self.decay_remaining_ms = 0.0;
        }
    }

    /// +1 every five consecutive eats, capped at 5x
    pub fn multiplier(&self) -> u32 {
        multiplier_for(self.streak)
    }
}

pub fn multiplier_for(streak: u32) -> u32 {
    (1 + streak / COMBO_STEP).min(MAX_COMBO_MULTIPLIER)
}
