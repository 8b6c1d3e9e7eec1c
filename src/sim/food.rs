//! Food spawning and typing

use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::GridPosition;

/// Rejection-sampling attempts before falling back to enumerating free cells
const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Roll below this is a bonus pellet
const BONUS_THRESHOLD: f64 = 0.10;
/// Roll below this (and not bonus) is an energy pellet
const ENERGY_THRESHOLD: f64 = 0.30;

/// Food types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodKind {
    #[default]
    Normal,
    /// Refills bullet-time energy
    Energy,
    Bonus,
}

impl FoodKind {
    /// Map a uniform roll in `[0, 1)` to a kind (10% bonus, 20% energy, 70% normal)
    pub fn from_roll(roll: f64) -> Self {
        if roll < BONUS_THRESHOLD {
            FoodKind::Bonus
        } else if roll < ENERGY_THRESHOLD {
            FoodKind::Energy
        } else {
            FoodKind::Normal
        }
    }

    /// Base points before the combo multiplier
    pub fn points(self) -> u64 {
        match self {
            FoodKind::Normal => 10,
            FoodKind::Energy => 20,
            FoodKind::Bonus => 50,
        }
    }

    /// Colour tag for the renderer
    pub fn color(self) -> &'static str {
        match self {
            FoodKind::Normal => "#0ff",
            FoodKind::Energy => "#f0f",
            FoodKind::Bonus => "#ff0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("no free cell left on a {cols}x{rows} board")]
    BoardFull { cols: i32, rows: i32 },
}

/// A food pellet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: GridPosition,
    pub kind: FoodKind,
}

impl Food {
    pub fn new(position: GridPosition, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Place a pellet on a random unoccupied cell and roll its kind.
    ///
    /// Position is drawn before the kind so seeded runs replay identically.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        cols: i32,
        rows: i32,
        occupied: &HashSet<GridPosition>,
    ) -> Result<Self, SpawnError> {
        let position = pick_free_cell(rng, cols, rows, occupied)
            .ok_or(SpawnError::BoardFull { cols, rows })?;
        let kind = FoodKind::from_roll(rng.random::<f64>());
        Ok(Self { position, kind })
    }
}

fn pick_free_cell<R: Rng>(
    rng: &mut R,
    cols: i32,
    rows: i32,
    occupied: &HashSet<GridPosition>,
) -> Option<GridPosition> {
    if cols <= 0 || rows <= 0 {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = IVec2::new(rng.random_range(0..cols), rng.random_range(0..rows));
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    // Dense board: pick uniformly among what is left
    let free: Vec<GridPosition> = (0..rows)
        .flat_map(|y| (0..cols).map(move |x| IVec2::new(x, y)))
        .filter(|pos| !occupied.contains(pos))
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}
