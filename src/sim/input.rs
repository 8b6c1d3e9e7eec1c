//! Player intent collection
//!
//! Raw events (keys, swipes, virtual buttons) only record intents here. The
//! simulation consumes at most one queued turn per tick, so several quick
//! presses inside one tick can never fold the snake back onto itself.

use std::collections::VecDeque;

use glam::Vec2;

use super::grid::Direction;
use crate::consts::SWIPE_THRESHOLD_PX;

/// What a keyboard key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    BulletTime,
}

impl KeyAction {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(KeyAction::Turn(Direction::Up)),
            "ArrowDown" | "s" | "S" => Some(KeyAction::Turn(Direction::Down)),
            "ArrowLeft" | "a" | "A" => Some(KeyAction::Turn(Direction::Left)),
            "ArrowRight" | "d" | "D" => Some(KeyAction::Turn(Direction::Right)),
            " " => Some(KeyAction::BulletTime),
            _ => None,
        }
    }
}

/// Queued turn intents plus the bullet-time hold flag
#[derive(Debug, Clone, Default)]
pub struct InputController {
    queue: VecDeque<Direction>,
    hold: bool,
    swipe: SwipeTracker,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_direction(&mut self, direction: Direction) {
        self.queue.push_back(direction);
    }

    pub fn set_hold(&mut self, active: bool) {
        self.hold = active;
    }

    pub fn hold(&self) -> bool {
        self.hold
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop queued turns (new run). The hold flag mirrors a physical key and is kept.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Pop at most one queued turn and decide the direction for this tick.
    ///
    /// A reversal is discarded, not requeued.
    pub fn resolve_direction(&mut self, current: Direction) -> Direction {
        match self.queue.pop_front() {
            Some(next) if next.is_opposite(current) => current,
            Some(next) => next,
            None => current,
        }
    }

    /// Returns true if the key was consumed by the game
    pub fn key_down(&mut self, key: &str) -> bool {
        match KeyAction::from_key(key) {
            Some(KeyAction::Turn(dir)) => {
                self.enqueue_direction(dir);
                true
            }
            Some(KeyAction::BulletTime) => {
                self.hold = true;
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        if KeyAction::from_key(key) == Some(KeyAction::BulletTime) {
            self.hold = false;
            true
        } else {
            false
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.swipe.begin(x, y);
    }

    /// Queue a turn if the drag completed a swipe
    pub fn touch_move(&mut self, x: f32, y: f32) -> Option<Direction> {
        let dir = self.swipe.track(x, y)?;
        self.enqueue_direction(dir);
        Some(dir)
    }

    pub fn touch_end(&mut self) {
        self.swipe.end();
    }
}

/// Turns touch drags into discrete swipes.
///
/// After each recognised swipe the origin re-arms at the current point, so a
/// continuous drag can chain several turns.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    origin: Option<Vec2>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some(Vec2::new(x, y));
    }

    pub fn end(&mut self) {
        self.origin = None;
    }

    /// Feed a touch-move sample; yields a direction once travel passes the threshold
    pub fn track(&mut self, x: f32, y: f32) -> Option<Direction> {
        let origin = self.origin?;
        let current = Vec2::new(x, y);
        let d = current - origin;

        if d.x.abs() <= SWIPE_THRESHOLD_PX && d.y.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }

        let dir = if d.x.abs() > d.y.abs() {
            if d.x > 0.0 { Direction::Right } else { Direction::Left }
        } else if d.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };

        self.origin = Some(current);
        Some(dir)
    }
}
