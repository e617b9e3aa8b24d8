//! Space Flyer - A side-scrolling hazard avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game phases)
//! - `input`: Raw key polling to validated per-tick input
//! - `audio`: Fire-and-forget sound effect boundary
//! - `draw`: Draw command generation for an external renderer
//! - `app`: Tick loop driver wiring clock, input, core, audio and renderer
//! - `settings`: Data-driven tuning and preferences

pub mod app;
pub mod audio;
pub mod draw;
pub mod input;
pub mod settings;
pub mod sim;

pub use app::{Clock, FixedClock, Game, InputSource, NullRenderer, Renderer, RunSummary, Step};
pub use input::{InputError, KeyBindings, RawInput, Signal};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 576.0;
    pub const FIELD_HEIGHT: f32 = 324.0;

    /// Craft sprite size and fixed horizontal position
    pub const CRAFT_WIDTH: f32 = 40.0;
    pub const CRAFT_HEIGHT: f32 = 40.0;
    pub const CRAFT_X: f32 = 10.0;

    /// Hazard sprite size
    pub const HAZARD_WIDTH: f32 = 40.0;
    pub const HAZARD_HEIGHT: f32 = 40.0;

    /// Downward displacement per tick
    pub const GRAVITY: f32 = 1.2;
    /// Upward displacement per tick while thrust is held
    pub const THRUST: f32 = 3.0;
    /// Leftward hazard displacement per tick
    pub const HAZARD_SPEED: f32 = 2.0;

    /// Spawn deadline interval (ms, inclusive)
    pub const SPAWN_INTERVAL_MS: (i32, i32) = (3000, 7000);
    /// Hazards per spawn batch (inclusive)
    pub const SPAWN_BATCH: (i32, i32) = (2, 3);
    /// Random offset past the right edge for the first hazard of a batch
    pub const SPAWN_BASE_OFFSET: (i32, i32) = (0, 100);
    /// Horizontal gap between successive hazards of a batch
    pub const SPAWN_GAP: (i32, i32) = (150, 250);

    /// One score point per interval of playing time
    pub const SCORE_INTERVAL_MS: u64 = 100;

    /// Explosion animation length
    pub const EXPLOSION_DURATION_MS: u64 = 1000;
    /// Frames in the fallback explosion animation
    pub const EXPLOSION_FRAMES: usize = 5;

    /// Nominal tick length for the native driver (~60 Hz)
    pub const TICK_MS: u64 = 16;
}
