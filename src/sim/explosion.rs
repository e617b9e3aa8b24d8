//! Timed explosion animation
//!
//! Purely a function of `now - started_ms`: no internal ticking, so queries
//! are side-effect free and restarting only needs a new start timestamp.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An explosion in progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    /// Midpoint between craft and struck hazard centers
    pub pos: Vec2,
    pub started_ms: u64,
}

impl Explosion {
    pub fn new(pos: Vec2, started_ms: u64) -> Self {
        Self { pos, started_ms }
    }

    pub fn elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    /// Animation has run its full duration
    pub fn is_finished(&self, now_ms: u64, duration_ms: u64) -> bool {
        self.elapsed(now_ms) >= duration_ms
    }

    /// Active frame index, `None` once the animation is over
    ///
    /// The duration is split evenly (whole milliseconds) across `frames`.
    pub fn frame_at(&self, now_ms: u64, duration_ms: u64, frames: usize) -> Option<usize> {
        if self.is_finished(now_ms, duration_ms) {
            return None;
        }
        Some(frame_index(self.elapsed(now_ms), duration_ms, frames))
    }
}

/// `floor(elapsed / (duration / frames))`, clamped to the last frame
pub fn frame_index(elapsed_ms: u64, duration_ms: u64, frames: usize) -> usize {
    let frames = frames.max(1);
    let frame_ms = (duration_ms / frames as u64).max(1);
    ((elapsed_ms / frame_ms) as usize).min(frames - 1)
}
