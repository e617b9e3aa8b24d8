//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the caller-supplied timestamp
//! - Randomness only from an injected [`RandomSource`]
//! - Stable iteration order (hazards in spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod explosion;
pub mod motion;
pub mod rng;
pub mod score;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, detect};
pub use explosion::{Explosion, frame_index};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use score::ScoreClock;
pub use snapshot::{ExplosionView, HazardView, Snapshot};
pub use spawner::HazardSpawner;
pub use state::{Craft, GameEvent, GamePhase, GameState, Hazard, Tuning};
pub use tick::{TickInput, tick};
