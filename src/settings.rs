//! Game settings and tuning
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::KeyBindings;
use crate::sim::Tuning;

/// Failure to load or validate settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field & sprites ===
    pub field_width: f32,
    pub field_height: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    pub craft_x: f32,
    pub hazard_width: f32,
    pub hazard_height: f32,

    // === Motion (per tick) ===
    pub gravity: f32,
    pub thrust: f32,
    pub hazard_speed: f32,

    // === Spawning (inclusive ranges) ===
    pub spawn_interval_ms: (i32, i32),
    pub spawn_batch: (i32, i32),
    pub spawn_base_offset: (i32, i32),
    pub spawn_gap: (i32, i32),

    // === Timing ===
    pub score_interval_ms: u64,
    pub explosion_duration_ms: u64,
    /// Driver tick length
    pub tick_ms: u64,

    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Collision sound volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            craft_x: CRAFT_X,
            hazard_width: HAZARD_WIDTH,
            hazard_height: HAZARD_HEIGHT,

            gravity: GRAVITY,
            thrust: THRUST,
            hazard_speed: HAZARD_SPEED,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_batch: SPAWN_BATCH,
            spawn_base_offset: SPAWN_BASE_OFFSET,
            spawn_gap: SPAWN_GAP,

            score_interval_ms: SCORE_INTERVAL_MS,
            explosion_duration_ms: EXPLOSION_DURATION_MS,
            tick_ms: TICK_MS,

            seed: None,

            master_volume: 1.0,
            sfx_volume: 0.5,
            muted: false,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("craft_width", self.craft_width),
            ("craft_height", self.craft_height),
            ("hazard_width", self.hazard_width),
            ("hazard_height", self.hazard_height),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!("{} must be positive", name)));
            }
        }
        let motion = [
            ("gravity", self.gravity),
            ("thrust", self.thrust),
            ("hazard_speed", self.hazard_speed),
        ];
        for (name, value) in motion {
            if !value.is_finite() {
                return Err(SettingsError::Invalid(format!("{} must be finite", name)));
            }
        }
        if self.craft_height > self.field_height || self.hazard_height > self.field_height {
            return Err(SettingsError::Invalid(
                "sprites must fit inside the field height".into(),
            ));
        }

        let ranges = [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("spawn_batch", self.spawn_batch),
            ("spawn_base_offset", self.spawn_base_offset),
            ("spawn_gap", self.spawn_gap),
        ];
        for (name, (min, max)) in ranges {
            if min > max {
                return Err(SettingsError::Invalid(format!(
                    "{} range is inverted ({} > {})",
                    name, min, max
                )));
            }
            if min < 0 {
                return Err(SettingsError::Invalid(format!("{} must not be negative", name)));
            }
        }
        if self.spawn_batch.0 < 1 {
            return Err(SettingsError::Invalid("spawn_batch must spawn at least one".into()));
        }

        if self.score_interval_ms == 0 || self.explosion_duration_ms == 0 || self.tick_ms == 0 {
            return Err(SettingsError::Invalid("durations must be positive".into()));
        }
        Ok(())
    }

    /// Gameplay tuning for the simulation core
    ///
    /// The explosion frame count is the fallback art's; the driver replaces
    /// it with the number of frames actually loaded.
    pub fn tuning(&self) -> Tuning {
        Tuning {
            field_size: Vec2::new(self.field_width, self.field_height),
            craft_size: Vec2::new(self.craft_width, self.craft_height),
            craft_x: self.craft_x,
            hazard_size: Vec2::new(self.hazard_width, self.hazard_height),
            gravity: self.gravity,
            thrust: self.thrust,
            hazard_speed: self.hazard_speed,
            spawn_interval_ms: self.spawn_interval_ms,
            spawn_batch: self.spawn_batch,
            spawn_base_offset: self.spawn_base_offset,
            spawn_gap: self.spawn_gap,
            score_interval_ms: self.score_interval_ms,
            explosion_duration_ms: self.explosion_duration_ms,
            explosion_frames: EXPLOSION_FRAMES,
        }
    }
}
