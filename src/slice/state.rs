//! Zoo Ninja session state.
//!
//! One `SliceGame` is the whole authoritative state of a run: falling
//! animals, counters, round target, trail dots, the slicing flag, and the
//! session RNG. Sessions are independent and replay identically under a
//! fixed seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bank::{ANIMAL_BANK, AnimalSpec, CATEGORIES, Category};
use crate::consts::*;

/// Progression phases of a Zoo Ninja run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen up, nothing moving
    Idle,
    /// Frame loop live, animals falling
    Running,
    /// Round threshold reached, waiting for the next-round input
    RoundComplete,
    /// Mistake limit reached; terminal until an explicit restart
    GameOver,
}

/// Correct slices required to clear a round.
pub fn required_for_round(round: u32) -> u32 {
    3 + round.saturating_sub(1) * 2
}

/// A falling animal.
#[derive(Debug)]
pub struct Animal {
    pub id: u32,
    pub spec: &'static AnimalSpec,
    /// Top-center anchor, area coordinates, y grows downward (px).
    pub pos: Vec2,
    /// Fall speed (px/s).
    pub speed: f32,
    /// `Some(age)` once sliced; the age drives the short slice visual.
    pub sliced_for: Option<f32>,
}

impl Animal {
    /// Still falling and sliceable.
    pub fn is_active(&self) -> bool {
        self.sliced_for.is_none()
    }

    /// Whether the hitbox contains an area-space point.
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.pos.x).abs() <= ANIMAL_WIDTH / 2.0
            && point.y >= self.pos.y
            && point.y <= self.pos.y + ANIMAL_HEIGHT
    }
}

/// A slice trail dot; purely visual.
#[derive(Debug, Clone, Copy)]
pub struct TrailDot {
    pub id: u32,
    pub pos: Vec2,
    pub age: f32,
}

/// Complete Zoo Ninja game state.
pub struct SliceGame {
    pub phase: Phase,
    /// 1-based round number.
    pub round: u32,
    pub score: u32,
    pub correct: u32,
    pub mistakes: u32,
    pub target: Category,
    pub animals: Vec<Animal>,
    pub trail: Vec<TrailDot>,
    /// Play area size in px; the platform refreshes it every frame.
    pub area: Vec2,
    /// Pointer held down; pointer moves slice only while set.
    pub slicing: bool,
    pub(super) spawn_accum: f32,
    next_id: u32,
    rng: Pcg32,
}

impl SliceGame {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: Phase::Idle,
            round: 1,
            score: 0,
            correct: 0,
            mistakes: 0,
            target: CATEGORIES[0],
            animals: Vec::new(),
            trail: Vec::new(),
            area: Vec2::new(DEFAULT_AREA.0, DEFAULT_AREA.1),
            slicing: false,
            spawn_accum: 0.0,
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        };
        game.pick_target();
        game
    }

    /// Update the play area size (px). Spawn range and the despawn floor
    /// follow it.
    pub fn set_area(&mut self, width: f32, height: f32) {
        self.area = Vec2::new(width, height);
    }

    pub fn required(&self) -> u32 {
        required_for_round(self.round)
    }

    /// Full reset and into the first round. No-op while already running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.round = 1;
        self.score = 0;
        self.begin_round();
        log::info!("zoo ninja started, target {}", self.target.as_str());
    }

    /// Leave the round-complete screen for the next round.
    pub fn advance_round(&mut self) {
        if self.phase != Phase::RoundComplete {
            return;
        }
        self.round += 1;
        self.begin_round();
        log::info!(
            "round {} begins, target {}, {} required",
            self.round,
            self.target.as_str(),
            self.required()
        );
    }

    fn begin_round(&mut self) {
        self.correct = 0;
        self.mistakes = 0;
        self.animals.clear();
        self.trail.clear();
        self.spawn_accum = 0.0;
        self.slicing = false;
        self.pick_target();
        self.phase = Phase::Running;
    }

    pub(super) fn pick_target(&mut self) {
        self.target = CATEGORIES[self.rng.random_range(0..CATEGORIES.len())];
    }

    /// Drop one random animal in at the top of the area.
    pub fn spawn_animal(&mut self) {
        let spec = &ANIMAL_BANK[self.rng.random_range(0..ANIMAL_BANK.len())];
        let span = (self.area.x - 2.0 * SPAWN_X_MARGIN).max(0.0);
        let x = SPAWN_X_MARGIN + self.rng.random::<f32>() * span;
        let speed = FALL_SPEED_BASE
            + self.rng.random_range(0.0..FALL_SPEED_JITTER)
            + self.round as f32 * FALL_SPEED_PER_ROUND;
        let id = self.next_entity_id();
        self.animals.push(Animal {
            id,
            spec,
            pos: Vec2::new(x, SPAWN_Y),
            speed,
            sliced_for: None,
        });
    }

    pub(super) fn push_trail(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.trail.push(TrailDot { id, pos, age: 0.0 });
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_for_round_formula() {
        assert_eq!(required_for_round(1), 3);
        assert_eq!(required_for_round(2), 5);
        assert_eq!(required_for_round(3), 7);
        assert_eq!(required_for_round(0), 3, "degenerate round clamps");
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = SliceGame::new(9);
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.round, 1);
        assert!(game.animals.is_empty());
    }

    #[test]
    fn test_start_resets_everything() {
        let mut game = SliceGame::new(9);
        game.start();
        game.score = 70;
        game.round = 4;
        game.mistakes = 2;
        game.spawn_animal();
        game.phase = Phase::GameOver;

        game.start();
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.round, 1);
        assert_eq!(game.score, 0);
        assert_eq!(game.mistakes, 0);
        assert!(game.animals.is_empty());
    }

    #[test]
    fn test_start_noop_while_running() {
        let mut game = SliceGame::new(9);
        game.start();
        game.score = 30;
        game.start();
        assert_eq!(game.score, 30);
    }

    #[test]
    fn test_advance_round_increments_and_resets() {
        let mut game = SliceGame::new(9);
        game.start();
        game.correct = 3;
        game.mistakes = 1;
        game.spawn_animal();
        game.phase = Phase::RoundComplete;

        game.advance_round();
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.round, 2);
        assert_eq!(game.required(), 5);
        assert_eq!(game.correct, 0);
        assert_eq!(game.mistakes, 0);
        assert!(game.animals.is_empty());
    }

    #[test]
    fn test_advance_round_only_from_round_complete() {
        let mut game = SliceGame::new(9);
        game.start();
        game.advance_round();
        assert_eq!(game.round, 1);
    }

    #[test]
    fn test_spawn_within_margins() {
        let mut game = SliceGame::new(9);
        game.set_area(500.0, 400.0);
        game.start();
        for _ in 0..40 {
            game.spawn_animal();
        }
        for animal in &game.animals {
            assert!(animal.pos.x >= SPAWN_X_MARGIN);
            assert!(animal.pos.x <= 500.0 - SPAWN_X_MARGIN);
            assert_eq!(animal.pos.y, SPAWN_Y);
            assert!(animal.speed >= FALL_SPEED_BASE + FALL_SPEED_PER_ROUND);
        }
    }

    #[test]
    fn test_speed_scales_with_round() {
        let mut game = SliceGame::new(9);
        game.start();
        game.round = 10;
        game.spawn_animal();
        let fast_floor = FALL_SPEED_BASE + 10.0 * FALL_SPEED_PER_ROUND;
        assert!(game.animals[0].speed >= fast_floor);
    }

    #[test]
    fn test_hitbox_contains() {
        let animal = Animal {
            id: 1,
            spec: &ANIMAL_BANK[0],
            pos: Vec2::new(200.0, 100.0),
            speed: 60.0,
            sliced_for: None,
        };
        assert!(animal.contains(Vec2::new(200.0, 150.0)));
        assert!(animal.contains(Vec2::new(200.0 - ANIMAL_WIDTH / 2.0, 100.0)));
        assert!(!animal.contains(Vec2::new(200.0 + ANIMAL_WIDTH, 150.0)));
        assert!(!animal.contains(Vec2::new(200.0, 99.0)));
        assert!(!animal.contains(Vec2::new(200.0, 100.0 + ANIMAL_HEIGHT + 1.0)));
    }
}
