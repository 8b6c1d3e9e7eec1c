//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Real time and scaled time kept on separate clocks
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod combo;
pub mod difficulty;
pub mod energy;
pub mod food;
pub mod grid;
pub mod input;
pub mod snake;
pub mod state;
pub mod tick;

pub use clock::{FrameTimer, SimulationClock};
pub use combo::ComboEngine;
pub use difficulty::DifficultyController;
pub use energy::EnergyEngine;
pub use food::{Food, FoodKind, SpawnError};
pub use grid::{Direction, GridPosition};
pub use input::{InputController, KeyAction, SwipeTracker};
pub use snake::Snake;
pub use state::{EndReason, GameEvent, GameSession, Run, SessionPhase, Snapshot};
