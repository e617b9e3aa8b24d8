//! Survival-time score counter

use serde::{Deserialize, Serialize};

/// Score plus the baseline of the last awarded interval
///
/// The baseline only advances in whole intervals, so rounding never
/// accumulates beyond a single tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreClock {
    value: u64,
    baseline_ms: u64,
}

impl ScoreClock {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn baseline_ms(&self) -> u64 {
        self.baseline_ms
    }

    /// Zero the score and restart interval timing from `now`
    pub fn reset(&mut self, now_ms: u64) {
        self.value = 0;
        self.baseline_ms = now_ms;
    }

    /// Award one point per full interval elapsed since the baseline
    pub fn advance(&mut self, now_ms: u64, interval_ms: u64) {
        let interval_ms = interval_ms.max(1);
        let elapsed = now_ms.saturating_sub(self.baseline_ms);
        let intervals = elapsed / interval_ms;
        if intervals > 0 {
            self.value += intervals;
            self.baseline_ms += intervals * interval_ms;
        }
    }
}
