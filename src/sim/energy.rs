//! Bullet-time energy economy

use serde::{Deserialize, Serialize};

use crate::consts::{
    BULLET_TIME_SCALE, ENERGY_DRAIN, ENERGY_REGEN, MAX_ENERGY, NORMAL_TIME_SCALE,
};

/// Bounded resource in `[0, MAX_ENERGY]` that gates bullet time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyEngine {
    energy: f64,
    active: bool,
}

impl Default for EnergyEngine {
    fn default() -> Self {
        Self {
            energy: MAX_ENERGY,
            active: false,
        }
    }
}

impl EnergyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Whether the last update granted bullet time
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Per-frame update. Returns the time scale for this frame.
    ///
    /// Holding with an empty tank gives normal speed and regenerates.
    pub fn update(&mut self, hold: bool) -> f64 {
        self.active = hold && self.energy > 0.0;
        if self.active {
            self.energy = (self.energy - ENERGY_DRAIN).max(0.0);
            BULLET_TIME_SCALE
        } else {
            self.energy = (self.energy + ENERGY_REGEN).min(MAX_ENERGY);
            NORMAL_TIME_SCALE
        }
    }

    pub fn restore(&mut self, amount: f64) {
        self.energy = (self.energy + amount).clamp(0.0, MAX_ENERGY);
    }
}
