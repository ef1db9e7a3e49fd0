//! Snake session state.
//!
//! One `SnakeGame` is the whole authoritative state of a run: body, current
//! and buffered direction, apple, score, phase, and the session RNG. Nothing
//! lives in module globals, so independent sessions coexist and a fixed seed
//! replays identically.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{Direction, Grid};
use crate::consts::GRID_SIZE;

/// Progression phases of a snake run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Board laid out, waiting for start
    Idle,
    /// Timer running, one step per firing
    Running,
    /// Hit a wall or itself
    Lost,
    /// Body fills the board
    Won,
}

/// Complete snake game state.
#[derive(Debug)]
pub struct SnakeGame {
    pub grid: Grid,
    /// Body cells, head first. Never contains a duplicate after a
    /// successful step; a step that would violate that loses instead.
    pub body: VecDeque<usize>,
    /// Direction committed at the last step.
    pub direction: Direction,
    /// Latest buffered intent, applied at the next step. Overwritten by
    /// later valid key presses within the same tick window.
    pub buffered: Direction,
    /// Apple cell, `None` once the board is full.
    pub apple: Option<usize>,
    pub score: u32,
    pub phase: Phase,
    rng: Pcg32,
}

impl SnakeGame {
    /// Standard 10x10 cabinet.
    pub fn new(seed: u64) -> Self {
        Self::with_grid(Grid::new(GRID_SIZE), seed)
    }

    /// Arbitrary board size; the tests use small boards to reach the
    /// full-board win quickly.
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        let mut game = Self {
            grid,
            body: VecDeque::new(),
            direction: Direction::Right,
            buffered: Direction::Right,
            apple: None,
            score: 0,
            phase: Phase::Idle,
            rng: Pcg32::seed_from_u64(seed),
        };
        game.reset();
        game
    }

    /// Back to Idle with the initial body, direction and a fresh apple.
    pub fn reset(&mut self) {
        let start = (self.grid.side() / 2).saturating_sub(1);
        self.body.clear();
        self.body.push_front(self.grid.index(start, start));
        self.direction = Direction::Right;
        self.buffered = Direction::Right;
        self.score = 0;
        self.phase = Phase::Idle;
        self.roll_apple();
    }

    /// Begin running. No-op unless Idle: a finished run must be reset
    /// before it can start again.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    pub fn head(&self) -> usize {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn occupies(&self, index: usize) -> bool {
        self.body.contains(&index)
    }

    /// Buffer a steering intent. A candidate exactly opposite the current
    /// (not the buffered) direction is dropped; the latest surviving
    /// candidate before the next step wins.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.buffered = direction;
        }
    }

    /// Steering from a raw key value; unknown keys are ignored.
    pub fn steer_key(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key(key) {
            self.steer(direction);
        }
    }

    /// Move the apple to a uniformly random unoccupied cell, or clear it
    /// when the snake covers the whole board.
    pub fn roll_apple(&mut self) {
        let free: Vec<usize> = (0..self.grid.cell_count())
            .filter(|index| !self.occupies(*index))
            .collect();
        self.apple = if free.is_empty() {
            None
        } else {
            Some(free[self.rng.random_range(0..free.len())])
        };
    }
}
