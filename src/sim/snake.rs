//! The player's snake

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::grid::{Direction, GridPosition, in_bounds};

/// Ordered body segments, head first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<GridPosition>,
    /// Ticks for which tail removal is suppressed
    grow_pending: u32,
    /// Direction applied on the last advance (or the spawn heading)
    direction: Direction,
}

impl Snake {
    /// Spawn a straight snake of `length` cells with its tail trailing behind `head`
    pub fn new(head: GridPosition, direction: Direction, length: usize) -> Self {
        let back = direction.opposite().delta();
        let body = (0..length.max(1) as i32).map(|i| head + back * i).collect();
        Self {
            body,
            grow_pending: 0,
            direction,
        }
    }

    pub fn head(&self) -> GridPosition {
        // Length never drops below 1
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_pending(&self) -> u32 {
        self.grow_pending
    }

    pub fn segments(&self) -> impl Iterator<Item = &GridPosition> {
        self.body.iter()
    }

    pub fn occupied_cells(&self) -> HashSet<GridPosition> {
        self.body.iter().copied().collect()
    }

    /// Move one cell. The move is committed before any collision check.
    pub fn advance(&mut self, direction: Direction) {
        self.direction = direction;
        let new_head = self.head() + direction.delta();
        self.body.push_front(new_head);

        if self.grow_pending > 0 {
            self.grow_pending -= 1;
        } else {
            self.body.pop_back();
        }
    }

    pub fn grow(&mut self, amount: u32) {
        self.grow_pending += amount;
    }

    pub fn check_wall_collision(&self, cols: i32, rows: i32) -> bool {
        !in_bounds(self.head(), cols, rows)
    }

    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    pub fn check_food_collision(&self, pos: GridPosition) -> bool {
        self.head() == pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_spawn_layout() {
        let snake = Snake::new(IVec2::new(10, 10), Direction::Right, 3);
        let cells: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![IVec2::new(10, 10), IVec2::new(9, 10), IVec2::new(8, 10)]
        );
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(IVec2::new(10, 10), Direction::Right, 3);
        snake.advance(Direction::Down);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), IVec2::new(10, 11));
        assert_eq!(snake.direction(), Direction::Down);
        assert!(!snake.segments().any(|&s| s == IVec2::new(8, 10)));
    }

    #[test]
    fn test_grow_extends_over_ticks() {
        let mut snake = Snake::new(IVec2::new(5, 5), Direction::Right, 3);
        snake.grow(2);
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.grow_pending(), 1);
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 5);
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.grow_pending(), 0);
    }

    #[test]
    fn test_wall_collision() {
        let mut snake = Snake::new(IVec2::new(0, 3), Direction::Up, 1);
        assert!(!snake.check_wall_collision(5, 5));
        snake.advance(Direction::Left);
        assert!(snake.check_wall_collision(5, 5));
    }

    #[test]
    fn test_self_collision() {
        // Five long: turning in a tight square bites the body
        let mut snake = Snake::new(IVec2::new(5, 5), Direction::Right, 5);
        snake.advance(Direction::Down);
        snake.advance(Direction::Left);
        assert!(!snake.check_self_collision());
        snake.advance(Direction::Up);
        assert!(snake.check_self_collision());
    }

    #[test]
    fn test_chasing_own_tail_is_safe() {
        // Length 4 loop: the head enters the cell the tail just vacated
        let mut snake = Snake::new(IVec2::new(1, 0), Direction::Right, 2);
        snake.grow(2);
        snake.advance(Direction::Down); // (1,1),(1,0),(0,0)
        snake.advance(Direction::Left); // (0,1),(1,1),(1,0),(0,0)
        assert_eq!(snake.len(), 4);
        snake.advance(Direction::Up); // head to (0,0), tail (0,0) popped
        assert!(!snake.check_self_collision());
    }

    #[test]
    fn test_food_collision() {
        let snake = Snake::new(IVec2::new(2, 2), Direction::Right, 3);
        assert!(snake.check_food_collision(IVec2::new(2, 2)));
        assert!(!snake.check_food_collision(IVec2::new(1, 2)));
    }
}
