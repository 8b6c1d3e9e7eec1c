//! Neon Snake entry point
//!
//! Native builds run a headless autopilot session; the web build only
//! installs logging and leaves the loop to the host page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Neon Snake starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use neon_snake::highscores::FileStore;
    use neon_snake::sim::{GameEvent, GameSession, SessionPhase};
    use neon_snake::{HighScoreStore, MemoryStore, Settings};

    /// Run a headless autopilot game and report the result
    #[derive(Debug, Parser)]
    #[command(name = "neon-snake", version, about)]
    pub struct Args {
        /// Settings file (JSON); overridden by the flags below
        #[arg(long)]
        config: Option<PathBuf>,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Board width in cells
        #[arg(long)]
        cols: Option<i32>,
        /// Board height in cells
        #[arg(long)]
        rows: Option<i32>,
        /// Number of frames to simulate
        #[arg(long, default_value_t = 3600)]
        frames: u32,
        /// Simulated frame duration
        #[arg(long, default_value_t = 1000.0 / 60.0)]
        frame_ms: f64,
        /// Persist the high score to this file
        #[arg(long)]
        high_score_file: Option<PathBuf>,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let mut settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = args.seed {
            settings.seed = Some(seed);
        }
        if let Some(cols) = args.cols {
            settings.cols = cols;
        }
        if let Some(rows) = args.rows {
            settings.rows = rows;
        }

        let store: Box<dyn HighScoreStore> = match &args.high_score_file {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::default()),
        };

        let mut session = GameSession::new(settings, store)?;
        session.start();

        let mut now = 0.0;
        for _ in 0..args.frames {
            if session.phase() != SessionPhase::Playing {
                break;
            }
            if session.input().pending() == 0 {
                let current = session.run().map(|r| r.snake.direction());
                if let Some(dir) = session.autopilot_direction()
                    && Some(dir) != current
                {
                    session.enqueue_direction(dir);
                }
            }

            session.frame(now);
            now += args.frame_ms;

            for event in session.drain_events() {
                match event {
                    GameEvent::FoodEaten {
                        kind,
                        points,
                        multiplier,
                        ..
                    } => log::info!("Ate {:?}: +{} (x{})", kind, points, multiplier),
                    GameEvent::GameOver {
                        reason, new_record, ..
                    } => log::info!("Run ended: {:?} (new record: {})", reason, new_record),
                    GameEvent::Started => {}
                }
            }
        }

        let snap = session.snapshot();
        println!(
            "phase={:?} score={} best={} length={} ticks={}",
            snap.phase,
            snap.score,
            snap.high_score,
            snap.segments.len(),
            session.run().map_or(0, |r| r.ticks)
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();
    log::info!("Neon Snake (headless) starting...");
    headless::run(headless::Args::parse())
}
