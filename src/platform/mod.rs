//! Platform layer.
//!
//! Everything browser-shaped lives here: the score store and the DOM
//! appliers. Game logic never reaches past this module, so the whole crate
//! below it runs headless.

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use storage::{MemoryStore, ScoreStore};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
