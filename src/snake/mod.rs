//! Grid snake simulation
//!
//! All gameplay logic for the snake cabinet lives here and must stay pure
//! and deterministic:
//! - One discrete step per fixed-interval firing, no wall-clock reads
//! - Seeded RNG only (apple placement)
//! - No rendering or platform dependencies

pub mod grid;
pub mod state;
pub mod tick;

pub use grid::{Direction, Grid};
pub use state::{Phase, SnakeGame};
pub use tick::step;
