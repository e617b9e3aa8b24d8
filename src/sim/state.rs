//! Game state and core simulation types
//!
//! One explicit session value owns everything that changes between ticks:
//! craft, live hazards, spawn schedule, score clock, explosion and phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::explosion::Explosion;
use super::rng::RandomSource;
use super::score::ScoreClock;
use super::snapshot::{ExplosionView, HazardView, Snapshot};
use super::spawner::HazardSpawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing played yet
    Welcome,
    /// Active gameplay
    Playing,
    /// Post-collision explosion animation
    Exploding,
    /// Animation finished, waiting for restart
    GameOver,
}

/// Things that happened during a tick, for the driver to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began (from Welcome or GameOver)
    Started,
    /// A spawn batch materialized
    HazardsSpawned { ids: Vec<u32> },
    /// The craft struck a hazard; play the collision sound once
    Collision { hazard_id: u32, pos: Vec2 },
    /// The explosion finished
    GameOver { score: u64 },
}

/// Gameplay tuning (derived from settings, constant for a session)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub field_size: Vec2,
    pub craft_size: Vec2,
    pub craft_x: f32,
    pub hazard_size: Vec2,
    pub gravity: f32,
    pub thrust: f32,
    pub hazard_speed: f32,
    pub spawn_interval_ms: (i32, i32),
    pub spawn_batch: (i32, i32),
    pub spawn_base_offset: (i32, i32),
    pub spawn_gap: (i32, i32),
    pub score_interval_ms: u64,
    pub explosion_duration_ms: u64,
    pub explosion_frames: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            craft_size: Vec2::new(CRAFT_WIDTH, CRAFT_HEIGHT),
            craft_x: CRAFT_X,
            hazard_size: Vec2::new(HAZARD_WIDTH, HAZARD_HEIGHT),
            gravity: GRAVITY,
            thrust: THRUST,
            hazard_speed: HAZARD_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_batch: SPAWN_BATCH,
            spawn_base_offset: SPAWN_BASE_OFFSET,
            spawn_gap: SPAWN_GAP,
            score_interval_ms: SCORE_INTERVAL_MS,
            explosion_duration_ms: EXPLOSION_DURATION_MS,
            explosion_frames: EXPLOSION_FRAMES,
        }
    }
}

impl Tuning {
    /// Lowest allowed craft y (top of the field)
    pub fn craft_min_y(&self) -> f32 {
        0.0
    }

    /// Highest allowed craft y (craft resting on the bottom edge)
    pub fn craft_max_y(&self) -> f32 {
        (self.field_size.y - self.craft_size.y).max(0.0)
    }

    /// Highest y a hazard may spawn at
    pub fn hazard_max_y(&self) -> i32 {
        (self.field_size.y - self.hazard_size.y).max(0.0) as i32
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Craft {
    /// Craft at its start position: fixed x, vertically centered
    pub fn spawn(tuning: &Tuning) -> Self {
        // Whole-pixel halving keeps the start row on the sprite grid
        let y = (tuning.field_size.y / 2.0).floor() - (tuning.craft_size.y / 2.0).floor();
        Self {
            pos: Vec2::new(tuning.craft_x, y),
            size: tuning.craft_size,
        }
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// An obstacle drifting leftward across the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Unique, monotonically assigned at spawn
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Hazard {
    pub fn new(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self { id, pos, size }
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Fully past the left boundary
    pub fn is_gone(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub craft: Craft,
    /// Live hazards in spawn order
    pub hazards: Vec<Hazard>,
    pub spawner: HazardSpawner,
    pub score: ScoreClock,
    /// Present while exploding (and kept through game over)
    pub explosion: Option<Explosion>,
    /// Next hazard ID
    next_id: u32,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            craft: Craft::spawn(&tuning),
            tuning,
            phase: GamePhase::Welcome,
            hazards: Vec::new(),
            spawner: HazardSpawner::default(),
            score: ScoreClock::default(),
            explosion: None,
            next_id: 1,
        }
    }

    /// Allocate a new hazard ID
    pub fn next_hazard_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Peek at the ID the next spawned hazard will receive
    pub fn peek_hazard_id(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn set_next_hazard_id(&mut self, id: u32) {
        self.next_id = id;
    }

    /// Reset for a new run: centered craft, empty field, zero score
    pub fn begin_run(&mut self, now_ms: u64, rng: &mut dyn RandomSource) {
        self.craft = Craft::spawn(&self.tuning);
        self.hazards.clear();
        self.score.reset(now_ms);
        self.explosion = None;
        self.spawner.arm(now_ms, rng, &self.tuning);
        self.phase = GamePhase::Playing;
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self, now_ms: u64) -> Snapshot {
        let explosion = match (self.phase, &self.explosion) {
            (GamePhase::Exploding, Some(explosion)) => explosion
                .frame_at(
                    now_ms,
                    self.tuning.explosion_duration_ms,
                    self.tuning.explosion_frames,
                )
                .map(|frame| ExplosionView {
                    frame,
                    pos: explosion.pos,
                }),
            _ => None,
        };

        Snapshot {
            phase: self.phase,
            score: self.score.value(),
            field_size: self.tuning.field_size,
            craft: self.craft.bbox(),
            hazards: self
                .hazards
                .iter()
                .map(|h| HazardView {
                    id: h.id,
                    bbox: h.bbox(),
                })
                .collect(),
            explosion,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
