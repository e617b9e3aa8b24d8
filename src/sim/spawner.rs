//! Randomized hazard batch spawning
//!
//! Holds a single deadline. When it elapses, a cluster of 2-3 hazards is
//! placed just past the right edge, each one at least a minimum gap to the
//! right of the previous so a traversable lane always exists between them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::{RandomSource, draw};
use super::state::{Hazard, Tuning};

/// Next-spawn schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardSpawner {
    deadline_ms: u64,
}

impl HazardSpawner {
    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    /// Schedule the next batch at `now + random interval`
    pub fn arm(&mut self, now_ms: u64, rng: &mut dyn RandomSource, tuning: &Tuning) {
        let interval = draw(rng, tuning.spawn_interval_ms).max(0) as u64;
        self.deadline_ms = now_ms.saturating_add(interval);
        log::debug!("Next hazard batch at {}ms (+{}ms)", self.deadline_ms, interval);
    }

    /// Spawn a batch if the deadline has elapsed, re-arming the schedule
    ///
    /// Draw order: batch size, base offset, then per hazard (gap for all but
    /// the first, then y), then the next interval.
    pub fn maybe_spawn(
        &mut self,
        now_ms: u64,
        rng: &mut dyn RandomSource,
        tuning: &Tuning,
        next_id: &mut u32,
    ) -> Vec<Hazard> {
        if now_ms < self.deadline_ms {
            return Vec::new();
        }

        let count = draw(rng, tuning.spawn_batch).max(0) as usize;
        let mut x = tuning.field_size.x + draw(rng, tuning.spawn_base_offset) as f32;
        let max_y = tuning.hazard_max_y();

        let mut batch = Vec::with_capacity(count);
        for i in 0..count {
            if i > 0 {
                x += draw(rng, tuning.spawn_gap) as f32;
            }
            let y = rng.range_inclusive(0, max_y) as f32;
            batch.push(Hazard::new(*next_id, Vec2::new(x, y), tuning.hazard_size));
            *next_id += 1;
        }

        log::debug!(
            "Spawned {} hazards at t={}ms: {:?}",
            batch.len(),
            now_ms,
            batch.iter().map(|h| (h.pos.x, h.pos.y)).collect::<Vec<_>>()
        );

        self.arm(now_ms, rng, tuning);
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, SeededRng};

    #[test]
    fn test_no_spawn_before_deadline() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::default();
        let mut rng = ScriptedRng::new(vec![5000]);
        spawner.arm(0, &mut rng, &tuning);

        let mut next_id = 1;
        let batch = spawner.maybe_spawn(4999, &mut rng, &tuning, &mut next_id);
        assert!(batch.is_empty());
        assert_eq!(next_id, 1);
        assert_eq!(spawner.deadline_ms(), 5000);
    }

    #[test]
    fn test_scripted_batch_positions() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::default();
        let mut rng = ScriptedRng::new(vec![5000]);
        spawner.arm(0, &mut rng, &tuning);

        // count=2, base offset 40, y0=17, gap 200, y1=250, next interval 4500
        let mut rng = ScriptedRng::new(vec![2, 40, 17, 200, 250, 4500]);
        let mut next_id = 10;
        let batch = spawner.maybe_spawn(5000, &mut rng, &tuning, &mut next_id);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].pos, Vec2::new(576.0 + 40.0, 17.0));
        assert_eq!(batch[1].pos, Vec2::new(576.0 + 40.0 + 200.0, 250.0));
        assert_eq!((batch[0].id, batch[1].id), (10, 11));
        assert_eq!(next_id, 12);
        assert_eq!(spawner.deadline_ms(), 9500);
    }

    #[test]
    fn test_hazard_y_within_field() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::default();
        let mut rng = SeededRng::new(3);
        let mut next_id = 1;
        let mut now = 0;
        for _ in 0..200 {
            now = spawner.deadline_ms().max(now);
            for hazard in spawner.maybe_spawn(now, &mut rng, &tuning, &mut next_id) {
                assert!(hazard.pos.y >= 0.0);
                assert!(hazard.pos.y <= tuning.field_size.y - tuning.hazard_size.y);
            }
        }
    }

    #[test]
    fn test_deadline_rearmed_within_interval() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::default();
        let mut rng = SeededRng::new(99);
        let mut next_id = 1;
        for _ in 0..100 {
            let now = spawner.deadline_ms();
            let batch = spawner.maybe_spawn(now, &mut rng, &tuning, &mut next_id);
            assert!(!batch.is_empty());
            let wait = spawner.deadline_ms() - now;
            assert!((3000..=7000).contains(&wait));
        }
    }
}
