//! Property tests for the simulation invariants

use std::collections::HashSet;

use glam::IVec2;
use neon_snake::consts::{MAX_ENERGY, MIN_TICK_MS};
use neon_snake::sim::{DifficultyController, Direction, EnergyEngine, InputController, Snake};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn opposite_turn_is_rejected_and_dropped(current in direction()) {
        let mut input = InputController::new();
        input.enqueue_direction(current.opposite());
        prop_assert_eq!(input.resolve_direction(current), current);
        prop_assert_eq!(input.pending(), 0);
    }

    #[test]
    fn resolve_never_reverses(current in direction(), queued in prop::collection::vec(direction(), 0..16)) {
        let mut input = InputController::new();
        for d in &queued {
            input.enqueue_direction(*d);
        }
        let mut dir = current;
        for _ in 0..queued.len() + 1 {
            let next = input.resolve_direction(dir);
            prop_assert!(!next.is_opposite(dir));
            dir = next;
        }
    }

    #[test]
    fn energy_stays_in_bounds(holds in prop::collection::vec(any::<bool>(), 0..2000)) {
        let mut energy = EnergyEngine::new();
        for hold in holds {
            energy.update(hold);
            prop_assert!((0.0..=MAX_ENERGY).contains(&energy.energy()));
        }
    }

    #[test]
    fn difficulty_is_monotone_and_floored(eats in 0usize..200) {
        let mut difficulty = DifficultyController::new();
        let mut previous = difficulty.tick_interval_ms();
        for _ in 0..eats {
            difficulty.on_food_eaten();
            let current = difficulty.tick_interval_ms();
            prop_assert!(current <= previous);
            prop_assert!(current >= MIN_TICK_MS);
            previous = current;
        }
    }

    #[test]
    fn growth_adds_exactly_n(n in 0u32..30) {
        let mut grown = Snake::new(IVec2::new(0, 0), Direction::Right, 3);
        let mut baseline = grown.clone();
        grown.grow(n);
        for _ in 0..n {
            grown.advance(Direction::Right);
            baseline.advance(Direction::Right);
        }
        prop_assert_eq!(grown.len(), baseline.len() + n as usize);
    }

    #[test]
    fn no_overlap_after_safe_tick(moves in prop::collection::vec((direction(), 0u32..2), 1..60)) {
        let mut snake = Snake::new(IVec2::new(0, 0), Direction::Right, 3);
        for (dir, grow) in moves {
            snake.grow(grow);
            snake.advance(dir);
            if snake.check_self_collision() {
                break;
            }
            let cells: HashSet<_> = snake.segments().collect();
            prop_assert_eq!(cells.len(), snake.len());
        }
    }
}
