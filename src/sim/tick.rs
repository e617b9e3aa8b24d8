//! Fixed-order simulation tick
//!
//! Core game loop step. While playing, systems run in a fixed order:
//! motion, spawner, collision, score. Hazards spawned this tick are already
//! live when collision runs.

use serde::{Deserialize, Serialize};

use super::collision;
use super::explosion::Explosion;
use super::motion;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input signals for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Thrust key held (move up)
    pub thrust: bool,
    /// Start / restart key pressed
    pub restart: bool,
    /// Leave the game loop (handled by the driver, ignored by the core)
    pub quit: bool,
}

/// Advance the session by one tick at timestamp `now_ms`
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    now_ms: u64,
    rng: &mut dyn RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Welcome | GamePhase::GameOver => {
            if input.restart {
                state.begin_run(now_ms, rng);
                log::info!("Run started at t={}ms", now_ms);
                events.push(GameEvent::Started);
            }
        }

        GamePhase::Playing => play(state, input, now_ms, rng, &mut events),

        GamePhase::Exploding => {
            // Restart is ignored until the animation completes
            let finished = state
                .explosion
                .is_none_or(|e| e.is_finished(now_ms, state.tuning.explosion_duration_ms));
            if finished {
                state.phase = GamePhase::GameOver;
                let score = state.score.value();
                log::info!("Game over with score {}", score);
                events.push(GameEvent::GameOver { score });
            }
        }
    }

    events
}

fn play(
    state: &mut GameState,
    input: &TickInput,
    now_ms: u64,
    rng: &mut dyn RandomSource,
    events: &mut Vec<GameEvent>,
) {
    let tuning = state.tuning;

    // Motion
    motion::move_craft(&mut state.craft, input.thrust, &tuning);
    let hazards = std::mem::take(&mut state.hazards);
    state.hazards = motion::advance_hazards(hazards, &tuning);

    // Spawner
    let mut next_id = state.peek_hazard_id();
    let batch = state.spawner.maybe_spawn(now_ms, rng, &tuning, &mut next_id);
    state.set_next_hazard_id(next_id);
    if !batch.is_empty() {
        events.push(GameEvent::HazardsSpawned {
            ids: batch.iter().map(|h| h.id).collect(),
        });
        state.hazards.extend(batch);
    }

    // Collision
    let craft_box = state.craft.bbox();
    if let Some(hazard_id) = collision::detect(&craft_box, &state.hazards) {
        let hazard_center = state
            .hazards
            .iter()
            .find(|h| h.id == hazard_id)
            .map(|h| h.bbox().center())
            .unwrap_or_else(|| craft_box.center());
        let pos = (craft_box.center() + hazard_center) * 0.5;

        state.explosion = Some(Explosion::new(pos, now_ms));
        state.phase = GamePhase::Exploding;
        log::info!(
            "Collision with hazard {} at ({:.1}, {:.1}), score {}",
            hazard_id,
            pos.x,
            pos.y,
            state.score.value()
        );
        events.push(GameEvent::Collision { hazard_id, pos });
        return;
    }

    // Score
    state.score.advance(now_ms, tuning.score_interval_ms);
}
