//! Session state and core simulation types
//!
//! `GameSession` owns every mutable field of the game. Collaborators drive it
//! through `start`, `toggle_pause`, `frame` and the input forwarding methods,
//! and read it back through `snapshot` and `drain_events`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{FrameTimer, SimulationClock};
use super::combo::ComboEngine;
use super::difficulty::DifficultyController;
use super::energy::EnergyEngine;
use super::food::{Food, FoodKind};
use super::grid::{Direction, GridPosition};
use super::input::InputController;
use super::snake::Snake;
use crate::consts::*;
use crate::highscores::{HighScore, HighScoreStore};
use crate::settings::{Settings, SettingsError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title screen, no run yet
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run frozen by the player
    Paused,
    /// Run ended
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// Food had nowhere left to spawn
    BoardFull,
}

/// Notable things that happened since the last drain (particles, sounds, UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    FoodEaten {
        kind: FoodKind,
        position: GridPosition,
        points: u64,
        multiplier: u32,
    },
    GameOver {
        score: u64,
        reason: EndReason,
        new_record: bool,
    },
}

/// Everything that exists only for the duration of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub snake: Snake,
    pub food: Option<Food>,
    pub combo: ComboEngine,
    pub energy: EnergyEngine,
    pub difficulty: DifficultyController,
    pub clock: SimulationClock,
    /// Time scale applied on the last frame
    pub time_scale: f64,
    /// Discrete ticks simulated this run
    pub ticks: u64,
    /// Set once the run is over; the snake stays where it died
    pub end_reason: Option<EndReason>,
}

impl Run {
    fn new(snake: Snake) -> Self {
        Self {
            snake,
            food: None,
            combo: ComboEngine::new(),
            energy: EnergyEngine::new(),
            difficulty: DifficultyController::new(),
            clock: SimulationClock::new(),
            time_scale: NORMAL_TIME_SCALE,
            ticks: 0,
            end_reason: None,
        }
    }
}

/// Read-only view handed to the renderer/UI after each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub cols: i32,
    pub rows: i32,
    /// Head first
    pub segments: Vec<GridPosition>,
    pub food: Option<Food>,
    pub score: u64,
    pub high_score: u64,
    /// Energy as a percentage of the tank
    pub energy: f64,
    pub bullet_time: bool,
    pub time_scale: f64,
    pub combo_streak: u32,
    pub combo_multiplier: u32,
    /// The combo badge is only shown from the second eat on
    pub combo_visible: bool,
    pub tick_interval_ms: f64,
    pub end_reason: Option<EndReason>,
}

/// The game: phase machine, score, input and the current run
#[derive(Debug)]
pub struct GameSession {
    pub(super) settings: Settings,
    pub(super) phase: SessionPhase,
    pub(super) score: u64,
    pub(super) high_score: HighScore,
    pub(super) input: InputController,
    pub(super) timer: FrameTimer,
    pub(super) rng: Pcg32,
    pub(super) run: Option<Run>,
    pub(super) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create an idle session. The high score is read from `store` once, here.
    pub fn new(settings: Settings, store: Box<dyn HighScoreStore>) -> Result<Self, SettingsError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Session created: {}x{} board, seed {}",
            settings.cols,
            settings.rows,
            seed
        );

        Ok(Self {
            settings,
            phase: SessionPhase::Idle,
            score: 0,
            high_score: HighScore::load(store),
            input: InputController::new(),
            timer: FrameTimer::new(),
            rng: Pcg32::seed_from_u64(seed),
            run: None,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current (or last finished) run
    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Input is the only thing collaborators may mutate directly
    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    pub fn enqueue_direction(&mut self, direction: Direction) {
        self.input.enqueue_direction(direction);
    }

    pub fn set_hold(&mut self, active: bool) {
        self.input.set_hold(active);
    }

    /// Start a fresh run from Idle or GameOver. Ignored while a run is live.
    pub fn start(&mut self) {
        if matches!(self.phase, SessionPhase::Playing | SessionPhase::Paused) {
            return;
        }

        let (cols, rows) = (self.settings.cols, self.settings.rows);
        let head = IVec2::new(START_HEAD.0.min(cols / 2), START_HEAD.1.min(rows / 2));
        let snake = Snake::new(head, Direction::Right, START_LENGTH);
        let occupied = snake.occupied_cells();

        self.score = 0;
        self.input.clear_queue();
        self.run = Some(Run::new(snake));
        self.phase = SessionPhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Run started");

        match Food::spawn(&mut self.rng, cols, rows, &occupied) {
            Ok(food) => {
                if let Some(run) = self.run.as_mut() {
                    run.food = Some(food);
                }
            }
            Err(e) => {
                log::warn!("{}", e);
                self.end_run(EndReason::BoardFull);
            }
        }
    }

    /// Playing <-> Paused. Ignored in any other phase.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            SessionPhase::Playing => {
                self.phase = SessionPhase::Paused;
                log::info!("Paused");
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Playing;
                // Wall-clock time spent paused must not reach the simulation
                self.timer.resync();
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    /// Replace the current food (debug/testing)
    pub fn set_food(&mut self, food: Food) {
        if let Some(run) = self.run.as_mut() {
            run.food = Some(food);
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        let run = self.run.as_ref();
        let streak = run.map_or(0, |r| r.combo.streak());
        Snapshot {
            phase: self.phase,
            cols: self.settings.cols,
            rows: self.settings.rows,
            segments: run.map_or_else(Vec::new, |r| r.snake.segments().copied().collect()),
            food: run.and_then(|r| r.food),
            score: self.score,
            high_score: self.high_score.best(),
            energy: run.map_or(MAX_ENERGY, |r| r.energy.energy()) / MAX_ENERGY * 100.0,
            bullet_time: run.is_some_and(|r| r.energy.is_active()),
            time_scale: run.map_or(NORMAL_TIME_SCALE, |r| r.time_scale),
            combo_streak: streak,
            combo_multiplier: run.map_or(1, |r| r.combo.multiplier()),
            combo_visible: streak > 1,
            tick_interval_ms: run.map_or(BASE_TICK_MS, |r| r.difficulty.tick_interval_ms()),
            end_reason: run.and_then(|r| r.end_reason),
        }
    }

    /// Playing -> GameOver. Commits the score against the high score.
    pub(super) fn end_run(&mut self, reason: EndReason) {
        self.phase = SessionPhase::GameOver;
        if let Some(run) = self.run.as_mut() {
            run.end_reason = Some(reason);
        }

        let new_record = self.high_score.commit(self.score);
        log::info!(
            "Game over ({:?}): score {}, best {}",
            reason,
            self.score,
            self.high_score.best()
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            reason,
            new_record,
        });
    }
}
