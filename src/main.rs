//! Space Flyer native entry point
//!
//! Runs the game headless with an autopilot at a fixed 60 Hz clock and logs
//! each run. Usage: `space-flyer [settings.json] [runs]`

use std::time::{SystemTime, UNIX_EPOCH};

use space_flyer::audio::{AudioManager, LogBackend};
use space_flyer::draw::ExplosionArt;
use space_flyer::input::Key;
use space_flyer::sim::{GamePhase, Snapshot};
use space_flyer::{FixedClock, Game, InputSource, KeyBindings, NullRenderer, RawInput, Settings};

/// Simulated time after which the demo quits even mid-run
const DEMO_LIMIT_MS: u64 = 10 * 60 * 1000;

/// Keeps clear of the nearest oncoming hazard and restarts after game over
struct Autopilot {
    bindings: KeyBindings,
    runs_left: u32,
    last_phase: GamePhase,
    limit_ms: u64,
}

impl Autopilot {
    fn new(bindings: KeyBindings, runs: u32, limit_ms: u64) -> Self {
        Self {
            bindings,
            runs_left: runs,
            last_phase: GamePhase::Welcome,
            limit_ms,
        }
    }

    /// Row the craft should aim for given the hazards ahead of it
    fn target_y(view: &Snapshot) -> f32 {
        let craft = view.craft;
        let bottom = view.field_size.y - craft.size.y;
        let threat = view
            .hazards
            .iter()
            .filter(|h| h.bbox.right() >= craft.left() && h.bbox.left() <= craft.right() + 160.0)
            .filter(|h| h.bbox.top() < craft.bottom() + 30.0 && h.bbox.bottom() > craft.top() - 30.0)
            .min_by(|a, b| a.bbox.left().total_cmp(&b.bbox.left()));

        match threat {
            Some(h) if h.bbox.center().y > view.field_size.y / 2.0 => 10.0,
            Some(_) => bottom - 10.0,
            None => bottom / 2.0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, now_ms: u64, view: &Snapshot) -> RawInput {
        let mut pressed: Vec<Key> = Vec::new();
        let mut press = |keys: &[Key]| pressed.extend(keys.first().copied());

        if view.phase == GamePhase::GameOver && self.last_phase != GamePhase::GameOver {
            self.runs_left = self.runs_left.saturating_sub(1);
        }
        self.last_phase = view.phase;

        if now_ms >= self.limit_ms {
            log::warn!("Demo time limit reached");
            press(&self.bindings.quit);
        }

        match view.phase {
            GamePhase::Welcome | GamePhase::GameOver => {
                if self.runs_left == 0 {
                    press(&self.bindings.quit);
                } else {
                    press(&self.bindings.restart);
                }
            }
            GamePhase::Playing => {
                if view.craft.top() > Self::target_y(view) {
                    press(&self.bindings.thrust);
                }
            }
            GamePhase::Exploding => {}
        }

        self.bindings.poll(&pressed)
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Flyer (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let runs = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let fallback_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let audio = AudioManager::from_settings(&settings, Some(Box::new(LogBackend)));
    let mut game = Game::from_settings(&settings, fallback_seed, audio, ExplosionArt::default());

    let mut clock = FixedClock::new(0, settings.tick_ms);
    let mut pilot = Autopilot::new(settings.bindings.clone(), runs, DEMO_LIMIT_MS);
    let mut renderer = NullRenderer::default();

    match game.run(&mut clock, &mut pilot, &mut renderer) {
        Ok(summary) => {
            log::info!(
                "Finished {} runs in {} ticks ({} frames), best score {}",
                summary.runs,
                summary.ticks,
                renderer.frames,
                summary.best_score
            );
            println!("Best score: {}", summary.best_score);
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
