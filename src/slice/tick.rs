//! Frame update and pointer slicing.
//!
//! `tick` advances time: spawning, falling, despawning, and the short
//! lifetimes of slice visuals. Slicing itself is not tick-driven; it runs
//! synchronously on the pointer events, between frames, against whatever
//! the last tick left in flight.

use glam::Vec2;

use super::state::{Phase, SliceGame};
use crate::consts::*;

/// Advance the game by `dt` seconds. Does nothing unless running.
pub fn tick(game: &mut SliceGame, dt: f32) {
    if game.phase != Phase::Running {
        return;
    }

    game.spawn_accum += dt;
    while game.spawn_accum >= SPAWN_INTERVAL {
        game.spawn_accum -= SPAWN_INTERVAL;
        game.spawn_animal();
    }

    for animal in &mut game.animals {
        match animal.sliced_for.as_mut() {
            None => animal.pos.y += animal.speed * dt,
            Some(age) => *age += dt,
        }
    }

    // Fallen past the floor: gone, no scoring effect. Sliced: gone once the
    // slice visual has played out.
    let floor = game.area.y + DESPAWN_MARGIN;
    game.animals.retain(|animal| match animal.sliced_for {
        None => animal.pos.y <= floor,
        Some(age) => age < SLICED_LINGER,
    });

    for dot in &mut game.trail {
        dot.age += dt;
    }
    game.trail.retain(|dot| dot.age < TRAIL_LIFETIME);
}

impl SliceGame {
    /// Pointer pressed: arm slicing and test the point immediately.
    pub fn pointer_down(&mut self, point: Vec2) {
        self.slicing = true;
        self.slice_at(point);
    }

    /// Pointer moved: test the point while slicing is armed.
    pub fn pointer_move(&mut self, point: Vec2) {
        if self.slicing && self.phase == Phase::Running {
            self.slice_at(point);
        }
    }

    /// Pointer released or left the area.
    pub fn pointer_up(&mut self) {
        self.slicing = false;
    }

    /// Test one area-space point against every active animal. All animals
    /// whose hitbox contains the point resolve, until a resolution ends the
    /// round.
    fn slice_at(&mut self, point: Vec2) {
        self.push_trail(point);
        if self.phase != Phase::Running {
            return;
        }

        let hits: Vec<u32> = self
            .animals
            .iter()
            .filter(|animal| animal.is_active() && animal.contains(point))
            .map(|animal| animal.id)
            .collect();

        for id in hits {
            if self.phase != Phase::Running {
                break;
            }
            self.resolve(id);
        }
    }

    /// Score one sliced animal and run the termination checks.
    fn resolve(&mut self, id: u32) {
        let Some(animal) = self
            .animals
            .iter_mut()
            .find(|animal| animal.id == id && animal.is_active())
        else {
            return;
        };

        animal.sliced_for = Some(0.0);
        let name = animal.spec.name;
        if animal.spec.category == self.target {
            self.score += SCORE_PER_SLICE;
            self.correct += 1;
        } else {
            self.mistakes += 1;
        }

        // Mistake limit is checked first: when one resolution lands on both
        // thresholds, the run fails.
        if self.mistakes >= MISTAKE_LIMIT {
            self.phase = Phase::GameOver;
            log::info!(
                "game over after slicing {}: {} points in {} rounds",
                name,
                self.score,
                self.round
            );
        } else if self.correct >= self.required() {
            self.phase = Phase::RoundComplete;
            log::info!("round {} complete with {} correct", self.round, self.correct);
        }
    }
}
