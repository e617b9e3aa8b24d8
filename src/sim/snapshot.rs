//! Render-facing copy of the session
//!
//! Built once per tick and handed to the renderer by value, so drawing never
//! reads state the core may be mutating.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::GamePhase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardView {
    pub id: u32,
    pub bbox: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub frame: usize,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub field_size: Vec2,
    pub craft: Rect,
    /// Live hazards in spawn order
    pub hazards: Vec<HazardView>,
    /// Only while exploding
    pub explosion: Option<ExplosionView>,
}
