//! Tick loop driver
//!
//! One iteration = one frame: read the clock, poll input, check quit, tick
//! the core, forward the collision sound, then hand an owned snapshot and
//! its draw list to the renderer. Nothing here sleeps; pacing belongs to
//! whoever implements [`Clock`].

use crate::audio::{AudioManager, SoundEffect};
use crate::draw::{self, DrawCommand, ExplosionArt};
use crate::input::{InputError, RawInput};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, RandomSource, SeededRng, Snapshot, TickInput, Tuning, tick,
};

/// Monotonic millisecond timestamps, one read per tick
pub trait Clock {
    fn now_ms(&mut self) -> u64;
}

/// Deterministic clock advancing a fixed step per read
#[derive(Debug, Clone)]
pub struct FixedClock {
    now_ms: u64,
    step_ms: u64,
}

impl FixedClock {
    pub fn new(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms,
        }
    }
}

impl Clock for FixedClock {
    fn now_ms(&mut self) -> u64 {
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        now
    }
}

/// Per-tick input poll
///
/// `view` is the last presented snapshot; hardware pollers ignore it, demo
/// and replay sources may steer from it.
pub trait InputSource {
    fn poll(&mut self, now_ms: u64, view: &Snapshot) -> RawInput;
}

/// Receives one frame's state and draw list
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot, commands: &[DrawCommand]);
}

/// Renderer that draws nothing (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn present(&mut self, _snapshot: &Snapshot, _commands: &[DrawCommand]) {
        self.frames += 1;
    }
}

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Quit was requested; the core was not ticked
    Quit,
    Ticked(Vec<GameEvent>),
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub runs: u32,
    pub collisions: u32,
    pub best_score: u64,
}

/// A running game: session state plus its collaborators
pub struct Game<R: RandomSource = SeededRng> {
    pub state: GameState,
    rng: R,
    audio: AudioManager,
    art: ExplosionArt,
    last_snapshot: Snapshot,
    summary: RunSummary,
}

impl Game<SeededRng> {
    /// Game from settings, seeded from `settings.seed` or `fallback_seed`
    pub fn from_settings(
        settings: &Settings,
        fallback_seed: u64,
        audio: AudioManager,
        art: ExplosionArt,
    ) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        log::info!("Game initialized with seed: {}", seed);
        Self::new(settings.tuning(), SeededRng::new(seed), audio, art)
    }
}

impl<R: RandomSource> Game<R> {
    pub fn new(mut tuning: Tuning, rng: R, audio: AudioManager, art: ExplosionArt) -> Self {
        tuning.explosion_frames = art.frame_count();
        let state = GameState::new(tuning);
        let last_snapshot = state.snapshot(0);
        Self {
            state,
            rng,
            audio,
            art,
            last_snapshot,
            summary: RunSummary::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.last_snapshot
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Draw list for the last snapshot
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        draw::build(&self.last_snapshot, &self.art)
    }

    /// Validate input, honor quit, otherwise advance the core one tick
    pub fn step(&mut self, now_ms: u64, raw: RawInput) -> Result<Step, InputError> {
        let input = TickInput::try_from(raw)?;
        if input.quit {
            log::info!("Quit requested at t={}ms", now_ms);
            return Ok(Step::Quit);
        }

        let events = tick(&mut self.state, &input, now_ms, &mut self.rng);
        self.summary.ticks += 1;

        for event in &events {
            match event {
                GameEvent::Started => self.summary.runs += 1,
                GameEvent::Collision { .. } => {
                    self.summary.collisions += 1;
                    self.audio.play(SoundEffect::Explosion);
                }
                GameEvent::GameOver { score } => {
                    self.summary.best_score = self.summary.best_score.max(*score);
                }
                GameEvent::HazardsSpawned { .. } => {}
            }
        }

        self.last_snapshot = self.state.snapshot(now_ms);
        Ok(Step::Ticked(events))
    }

    /// Run until quit; input contract violations end the loop with an error
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> Result<RunSummary, InputError> {
        loop {
            let now = clock.now_ms();
            let raw = input.poll(now, &self.last_snapshot);
            if let Step::Quit = self.step(now, raw)? {
                break;
            }
            let commands = self.draw_list();
            renderer.present(&self.last_snapshot, &commands);
        }
        Ok(self.summary.clone())
    }
}
