//! Speed ramp

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_TICK_MS, MIN_TICK_MS, TICK_STEP_MS};

/// Tick interval that shrinks with every eat, down to a floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyController {
    tick_interval_ms: f64,
}

impl Default for DifficultyController {
    fn default() -> Self {
        Self {
            tick_interval_ms: BASE_TICK_MS,
        }
    }
}

impl DifficultyController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    pub fn on_food_eaten(&mut self) {
        self.tick_interval_ms = (self.tick_interval_ms - TICK_STEP_MS).max(MIN_TICK_MS);
    }
}
