//! Per-frame update and the discrete simulation tick
//!
//! Frame order is fixed: resolve time scale, accumulate scaled time, run at
//! most one tick (movement, collision, food), then wall-clock updates.

use super::food::{Food, FoodKind};
use super::state::{EndReason, GameEvent, GameSession, SessionPhase};
use crate::consts::ENERGY_FOOD_REFILL;

impl GameSession {
    /// Advance by one host frame. `timestamp_ms` must increase monotonically.
    pub fn frame(&mut self, timestamp_ms: f64) {
        // A paused frame mutates nothing; resume resyncs the timer instead
        if self.phase == SessionPhase::Paused {
            return;
        }

        let real_delta_ms = self.timer.delta(timestamp_ms);
        if self.phase != SessionPhase::Playing {
            return;
        }
        let Some(run) = self.run.as_mut() else {
            return;
        };

        run.time_scale = run.energy.update(self.input.hold());
        run.clock.accumulate(real_delta_ms, run.time_scale);
        if run.clock.consume_tick(run.difficulty.tick_interval_ms()) {
            self.tick();
        }

        // Combo decay runs on real time regardless of bullet time
        if let Some(run) = self.run.as_mut() {
            run.combo.decay(real_delta_ms);
        }
    }

    /// One grid step: turn, move, collide, eat
    fn tick(&mut self) {
        let (cols, rows) = (self.settings.cols, self.settings.rows);
        let Some(run) = self.run.as_mut() else {
            return;
        };

        let direction = self.input.resolve_direction(run.snake.direction());
        run.snake.advance(direction);
        run.ticks += 1;

        if run.snake.check_wall_collision(cols, rows) {
            self.end_run(EndReason::WallCollision);
            return;
        }
        if run.snake.check_self_collision() {
            self.end_run(EndReason::SelfCollision);
            return;
        }

        let ate = run
            .food
            .is_some_and(|food| run.snake.check_food_collision(food.position));
        if ate {
            self.eat_food();
        }
    }

    fn eat_food(&mut self) {
        let (cols, rows) = (self.settings.cols, self.settings.rows);
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let Some(food) = run.food.take() else {
            return;
        };

        run.snake.grow(1);
        if food.kind == FoodKind::Energy {
            run.energy.restore(ENERGY_FOOD_REFILL);
        }

        let multiplier = run.combo.register_eat();
        let points = food.kind.points() * u64::from(multiplier);
        self.score += points;
        run.difficulty.on_food_eaten();

        log::debug!(
            "Ate {:?} at ({}, {}): +{} (x{}), streak {}, interval {:.1}ms",
            food.kind,
            food.position.x,
            food.position.y,
            points,
            multiplier,
            run.combo.streak(),
            run.difficulty.tick_interval_ms()
        );
        self.events.push(GameEvent::FoodEaten {
            kind: food.kind,
            position: food.position,
            points,
            multiplier,
        });

        match Food::spawn(&mut self.rng, cols, rows, &run.snake.occupied_cells()) {
            Ok(next) => run.food = Some(next),
            Err(e) => {
                log::info!("{}", e);
                self.end_run(EndReason::BoardFull);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::consts::{BASE_TICK_MS, BULLET_TIME_SCALE};
    use crate::highscores::MemoryStore;
    use crate::settings::Settings;
    use crate::sim::{Direction, Snake};

    fn playing_session(seed: u64) -> GameSession {
        let mut session =
            GameSession::new(Settings::default().with_seed(seed), Box::new(MemoryStore::default()))
                .unwrap();
        session.start();
        session.frame(0.0);
        session
    }

    #[test]
    fn test_no_tick_until_interval_passes() {
        let mut session = playing_session(1);
        session.frame(BASE_TICK_MS);
        assert_eq!(session.run().unwrap().ticks, 0);
        session.frame(BASE_TICK_MS + 1.0);
        assert_eq!(session.run().unwrap().ticks, 1);
        assert_eq!(session.run().unwrap().snake.head(), IVec2::new(11, 10));
    }

    #[test]
    fn test_one_tick_per_frame_after_stall() {
        let mut session = playing_session(1);
        session.frame(1000.0);
        assert_eq!(session.run().unwrap().ticks, 1);
        // 875ms still banked: the next frame ticks once more, not seven times
        session.frame(1001.0);
        assert_eq!(session.run().unwrap().ticks, 2);
    }

    #[test]
    fn test_bullet_time_slows_ticks() {
        let mut session = playing_session(1);
        session.set_hold(true);
        session.frame(200.0);
        let run = session.run().unwrap();
        assert_eq!(run.time_scale, BULLET_TIME_SCALE);
        // 200ms * 0.3 = 60ms banked, below one interval
        assert_eq!(run.ticks, 0);
        assert!(session.snapshot().bullet_time);
    }

    #[test]
    fn test_paused_frame_mutates_nothing() {
        let mut session = playing_session(1);
        session.toggle_pause();
        let before = session.snapshot();
        session.frame(10_000.0);
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.run().unwrap().clock.accumulator_ms(), 0.0);

        // Resume: the paused gap is not replayed
        session.toggle_pause();
        session.frame(20_000.0);
        assert_eq!(session.run().unwrap().ticks, 0);
        session.frame(20_100.0);
        assert_eq!(session.run().unwrap().ticks, 0);
    }

    #[test]
    fn test_eating_energy_food() {
        let mut session = playing_session(1);
        session.set_hold(true);
        session.frame(16.0);
        session.set_hold(false);
        session.set_food(Food::new(IVec2::new(11, 10), FoodKind::Energy));

        session.frame(16.0 + 200.0);
        let run = session.run().unwrap();
        assert_eq!(session.score(), 20);
        assert_eq!(run.snake.grow_pending(), 1);
        assert_eq!(run.combo.streak(), 1);
        assert_eq!(run.energy.energy(), 100.0);
        assert_eq!(run.difficulty.tick_interval_ms(), BASE_TICK_MS - 2.0);
        let next = run.food.unwrap();
        assert!(!run.snake.segments().any(|s| *s == next.position));

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::FoodEaten {
            kind: FoodKind::Energy,
            position: IVec2::new(11, 10),
            points: 20,
            multiplier: 1,
        }));
    }

    #[test]
    fn test_queued_reversal_is_ignored() {
        let mut session = playing_session(1);
        session.enqueue_direction(Direction::Left);
        session.frame(200.0);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.run().unwrap().snake.head(), IVec2::new(11, 10));
    }

    #[test]
    fn test_board_full_ends_run() {
        let settings = Settings {
            cols: 5,
            rows: 1,
            seed: Some(1),
        };
        let mut session = GameSession::new(settings, Box::new(MemoryStore::default())).unwrap();
        session.start();
        session.frame(0.0);

        // Four cells long and still growing: eating at (4, 0) fills the strip
        let run = session.run.as_mut().unwrap();
        run.snake = Snake::new(IVec2::new(3, 0), Direction::Right, 4);
        run.snake.grow(1);
        session.set_food(Food::new(IVec2::new(4, 0), FoodKind::Normal));

        session.frame(200.0);
        let snap = session.snapshot();
        assert_eq!(snap.phase, SessionPhase::GameOver);
        assert_eq!(snap.end_reason, Some(EndReason::BoardFull));
        assert_eq!(snap.score, 10);
        assert_eq!(snap.food, None);
        assert_eq!(snap.segments.len(), 5);
    }

    #[test]
    fn test_frames_after_game_over_are_inert() {
        let mut session = playing_session(1);
        session.enqueue_direction(Direction::Up);
        let mut t = 0.0;
        while session.phase() == SessionPhase::Playing {
            t += 200.0;
            session.frame(t);
        }
        assert_eq!(session.snapshot().end_reason, Some(EndReason::WallCollision));
        let dead = session.snapshot();
        session.frame(t + 1000.0);
        assert_eq!(session.snapshot(), dead);
        // Head retained where it died
        assert_eq!(dead.segments[0], IVec2::new(10, -1));
    }
}
