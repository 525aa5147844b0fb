use serde::{Deserialize, Serialize};

use super::{action::Direction, grid::Grid};

/// A cell on the game grid, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move point in a direction (no wrapping)
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub head: Point,
    /// Body segments from the neck to the tip of the tail
    pub tail: Vec<Point>,
    /// Direction used by the last move
    pub direction: Direction,
    /// Direction queued for the next move
    pub next_direction: Direction,
    /// Moves left during which the tail extends instead of shifting
    pub growth: u32,
}

impl Snake {
    pub fn new(head: Point, tail: Vec<Point>, direction: Direction) -> Self {
        Self {
            head,
            tail,
            direction,
            next_direction: direction,
            growth: 0,
        }
    }

    /// Queue a direction change for the next move.
    ///
    /// Only a reversal of the direction last moved in is rejected; the queued
    /// direction is not consulted, so several presses within one tick simply
    /// overwrite each other. Returns whether the request was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Advance exactly one cell.
    pub fn advance(&mut self, grid: Grid) {
        self.tail.insert(0, self.head);
        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.tail.pop();
        }

        self.direction = self.next_direction;
        self.head = grid.step(self.head, self.direction);
    }

    /// If the head sits on a tail segment, cut the tail just before it.
    /// Returns how many segments were lost.
    pub fn bite(&mut self) -> usize {
        match self.tail.iter().position(|&p| p == self.head) {
            Some(index) => {
                let lost = self.tail.len() - index;
                self.tail.truncate(index);
                lost
            }
            None => 0,
        }
    }

    /// Check if the point is covered by the head or any tail segment
    pub fn occupies(&self, point: Point) -> bool {
        self.head == point || self.tail.contains(&point)
    }

    /// Number of cells covered, head included
    pub fn cell_count(&self) -> usize {
        self.tail.len() + 1
    }
}

/// Complete game state, owned by whoever drives the ticks
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub grid: Grid,
    pub ticks: u64,
}

impl GameState {
    pub fn new(snake: Snake, food: Point, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            ticks: 0,
        }
    }
}
