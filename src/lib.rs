//! Neon Tactical Snake - a snake variant with bullet time, energy and combos
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, economies, session)
//! - `platform`: Browser bindings (wasm32 only)
//! - `highscores`: Persisted best score
//! - `settings`: Board configuration

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::{HighScore, HighScoreStore, MemoryStore, StoreError};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Size of one grid cell in pixels (rendering and viewport alignment)
    pub const CELL_SIZE_PX: u32 = 20;
    /// Margin subtracted from the viewport before aligning to the grid
    pub const VIEWPORT_MARGIN_PX: u32 = 40;

    /// Starting tick interval (8 moves per second)
    pub const BASE_TICK_MS: f64 = 1000.0 / 8.0;
    /// Fastest tick interval (30 moves per second)
    pub const MIN_TICK_MS: f64 = 1000.0 / 30.0;
    /// Tick interval reduction per food eaten
    pub const TICK_STEP_MS: f64 = 2.0;

    /// Initial snake length
    pub const START_LENGTH: usize = 3;
    /// Preferred head position at spawn
    pub const START_HEAD: (i32, i32) = (10, 10);

    /// Time allowed between eats before the combo resets (wall clock)
    pub const COMBO_WINDOW_MS: f64 = 3000.0;
    /// Eats needed per multiplier step
    pub const COMBO_STEP: u32 = 5;
    /// Multiplier cap
    pub const MAX_COMBO_MULTIPLIER: u32 = 5;

    /// Energy capacity
    pub const MAX_ENERGY: f64 = 100.0;
    /// Energy drained per frame while bullet time is active
    pub const ENERGY_DRAIN: f64 = 0.5;
    /// Energy regenerated per frame otherwise
    pub const ENERGY_REGEN: f64 = 0.1;
    /// Energy restored by an energy pellet
    pub const ENERGY_FOOD_REFILL: f64 = 30.0;

    /// Time scale while bullet time is active
    pub const BULLET_TIME_SCALE: f64 = 0.3;
    /// Normal time scale
    pub const NORMAL_TIME_SCALE: f64 = 1.0;

    /// Minimum swipe travel (pixels) before a swipe registers
    pub const SWIPE_THRESHOLD_PX: f32 = 30.0;
}
