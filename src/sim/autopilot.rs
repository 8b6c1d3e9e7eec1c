//! Demo-mode autopilot
//!
//! A greedy bot for attract mode and headless runs: never reverses, avoids
//! moves that die on the next tick, and otherwise heads for the food.

use super::food::Food;
use super::grid::{Direction, GridPosition, in_bounds};
use super::snake::Snake;
use super::state::GameSession;

/// Whether moving into `next` would end the run on this tick
fn is_lethal(snake: &Snake, next: GridPosition, cols: i32, rows: i32) -> bool {
    if !in_bounds(next, cols, rows) {
        return true;
    }
    // The tail vacates this tick unless the snake is growing
    let skip_tail = usize::from(snake.grow_pending() == 0);
    let body_len = snake.len() - skip_tail;
    snake.segments().take(body_len).any(|&seg| seg == next)
}

/// Pick a direction for the next tick
pub fn choose_direction(snake: &Snake, food: Option<&Food>, cols: i32, rows: i32) -> Direction {
    let current = snake.direction();
    let head = snake.head();

    // Current heading first so ties keep going straight
    let candidates = std::iter::once(current).chain(
        Direction::ALL
            .into_iter()
            .filter(|&d| d != current && !d.is_opposite(current)),
    );

    candidates
        .filter(|&d| !is_lethal(snake, head + d.delta(), cols, rows))
        .min_by_key(|&d| {
            let next = head + d.delta();
            food.map_or(0, |f| (f.position - next).abs().element_sum())
        })
        .unwrap_or(current)
}

impl GameSession {
    /// Autopilot suggestion for the live run
    pub fn autopilot_direction(&self) -> Option<Direction> {
        let run = self.run()?;
        Some(choose_direction(
            &run.snake,
            run.food.as_ref(),
            self.settings.cols,
            self.settings.rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FoodKind;
    use glam::IVec2;

    #[test]
    fn test_heads_for_food() {
        let snake = Snake::new(IVec2::new(5, 5), Direction::Right, 3);
        let food = Food::new(IVec2::new(5, 1), FoodKind::Normal);
        assert_eq!(choose_direction(&snake, Some(&food), 20, 20), Direction::Up);
    }

    #[test]
    fn test_keeps_straight_without_food() {
        let snake = Snake::new(IVec2::new(5, 5), Direction::Right, 3);
        assert_eq!(choose_direction(&snake, None, 20, 20), Direction::Right);
    }

    #[test]
    fn test_never_reverses_toward_food() {
        let snake = Snake::new(IVec2::new(5, 5), Direction::Right, 3);
        let food = Food::new(IVec2::new(0, 5), FoodKind::Normal);
        let dir = choose_direction(&snake, Some(&food), 20, 20);
        assert_ne!(dir, Direction::Left);
    }

    #[test]
    fn test_avoids_wall() {
        let snake = Snake::new(IVec2::new(9, 0), Direction::Right, 3);
        let food = Food::new(IVec2::new(9, 9), FoodKind::Normal);
        assert_eq!(choose_direction(&snake, Some(&food), 10, 10), Direction::Down);

        // Food beyond the wall still cannot pull the snake out
        let snake = Snake::new(IVec2::new(9, 5), Direction::Right, 3);
        let dir = choose_direction(&snake, None, 10, 10);
        assert_ne!(dir, Direction::Right);
    }
}
