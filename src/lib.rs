//! Zoo Arcade - two small DOM arcade games sharing one loop pattern
//!
//! Core modules:
//! - `slice`: Zoo Ninja simulation (falling animals, category slicing, rounds)
//! - `snake`: grid snake simulation (10x10 board, fixed tick)
//! - `clock`: frame delta clock and the stoppable tick gate
//! - `render`: pure projections from game state to frame descriptions
//! - `ui`: screen ids and HUD/status text
//! - `leaderboard`: bounded top-score list behind a key-value store
//! - `platform`: storage backends and (wasm) DOM appliers
//!
//! The simulations are headless and deterministic: every session owns a
//! seeded RNG and is advanced only by explicit tick/step calls, so the whole
//! gameplay layer runs natively under `cargo test`.

pub mod clock;
pub mod leaderboard;
pub mod platform;
pub mod render;
pub mod slice;
pub mod snake;
pub mod ui;

pub use clock::{FrameClock, TickGate};
pub use leaderboard::Leaderboard;

/// Game configuration constants
pub mod consts {
    /// Snake board side length (cells)
    pub const GRID_SIZE: usize = 10;
    /// Snake tick period in milliseconds
    pub const SNAKE_TICK_MS: i32 = 220;

    /// Zoo Ninja spawn period in seconds
    pub const SPAWN_INTERVAL: f32 = 0.9;
    /// Horizontal margin kept free on both sides of the spawn range (px)
    pub const SPAWN_X_MARGIN: f32 = 60.0;
    /// Spawn height above the play area top (px)
    pub const SPAWN_Y: f32 = -50.0;
    /// How far below the play area an animal may fall before despawning (px)
    pub const DESPAWN_MARGIN: f32 = 120.0;

    /// Fall speed floor (px/s)
    pub const FALL_SPEED_BASE: f32 = 60.0;
    /// Uniform random extra fall speed (px/s)
    pub const FALL_SPEED_JITTER: f32 = 60.0;
    /// Additional fall speed per round number (px/s)
    pub const FALL_SPEED_PER_ROUND: f32 = 8.0;

    /// Animal hitbox, anchored top-center at the sprite position (px)
    pub const ANIMAL_WIDTH: f32 = 120.0;
    pub const ANIMAL_HEIGHT: f32 = 120.0;

    /// Points per correctly sliced animal
    pub const SCORE_PER_SLICE: u32 = 10;
    /// Mistakes that end a Zoo Ninja run
    pub const MISTAKE_LIMIT: u32 = 3;

    /// How long a sliced animal lingers for its slice visual (s)
    pub const SLICED_LINGER: f32 = 0.2;
    /// Slice trail dot lifetime (s)
    pub const TRAIL_LIFETIME: f32 = 0.6;

    /// Frame delta clamp so a background tab cannot dump one giant step (s)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Default play area before the platform reports a real size (px)
    pub const DEFAULT_AREA: (f32, f32) = (800.0, 600.0);
}
