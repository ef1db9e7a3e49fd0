//! Zoo Ninja simulation
//!
//! All gameplay logic for the slicing cabinet lives here and must stay pure
//! and deterministic:
//! - Advanced only by explicit `tick(dt)` calls and pointer inputs
//! - Seeded RNG only (spawn position/speed, bank pick, round target)
//! - No rendering or platform dependencies

pub mod bank;
pub mod state;
pub mod tick;

pub use bank::{ANIMAL_BANK, AnimalSpec, CATEGORIES, Category};
pub use state::{Animal, Phase, SliceGame, TrailDot, required_for_round};
pub use tick::tick;
