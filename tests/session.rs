//! Full sessions driven through the game loop with scripted collaborators

use std::cell::RefCell;
use std::rc::Rc;

use space_flyer::audio::{AudioBackend, AudioManager, SoundEffect};
use space_flyer::draw::{DrawCommand, ExplosionArt};
use space_flyer::sim::{GamePhase, ScriptedRng, Snapshot, Tuning};
use space_flyer::{FixedClock, Game, InputError, InputSource, RawInput, Renderer, Signal};

struct Recorder(Rc<RefCell<Vec<SoundEffect>>>);

impl AudioBackend for Recorder {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.0.borrow_mut().push(effect);
    }
}

/// Starts immediately, never thrusts, quits once game over is shown
#[derive(Default)]
struct StartThenWait {
    polls: u64,
    game_overs_seen: u32,
    restart_after_game_over: bool,
}

impl InputSource for StartThenWait {
    fn poll(&mut self, _now_ms: u64, view: &Snapshot) -> RawInput {
        self.polls += 1;
        match view.phase {
            GamePhase::Welcome => RawInput::new(false, true, false),
            GamePhase::GameOver => {
                self.game_overs_seen += 1;
                if self.restart_after_game_over && self.game_overs_seen == 1 {
                    RawInput::new(false, true, false)
                } else {
                    RawInput::new(false, false, true)
                }
            }
            // Mash restart while exploding; it must be ignored
            GamePhase::Exploding => RawInput::new(false, true, false),
            GamePhase::Playing => RawInput::idle(),
        }
    }
}

#[derive(Default)]
struct FrameLog {
    phases: Vec<GamePhase>,
    scores: Vec<u64>,
    explosion_frames: Vec<usize>,
    last_commands: Vec<DrawCommand>,
}

impl Renderer for FrameLog {
    fn present(&mut self, snapshot: &Snapshot, commands: &[DrawCommand]) {
        self.phases.push(snapshot.phase);
        self.scores.push(snapshot.score);
        if let Some(explosion) = snapshot.explosion {
            self.explosion_frames.push(explosion.frame);
        }
        self.last_commands = commands.to_vec();
    }
}

/// Interval 3000ms, then a batch of two hazards on the bottom row
fn scripted_rng() -> ScriptedRng {
    ScriptedRng::new(vec![3000, 2, 0, 284, 150, 284, 7000])
}

fn game(sounds: &Rc<RefCell<Vec<SoundEffect>>>) -> Game<ScriptedRng> {
    let audio = AudioManager::new(Some(Box::new(Recorder(sounds.clone()))));
    Game::new(Tuning::default(), scripted_rng(), audio, ExplosionArt::default())
}

#[test]
fn falling_craft_hits_bottom_row_hazard() {
    let sounds = Rc::new(RefCell::new(Vec::new()));
    let mut game = game(&sounds);
    let mut clock = FixedClock::new(0, 16);
    let mut input = StartThenWait::default();
    let mut renderer = FrameLog::default();

    let summary = game.run(&mut clock, &mut input, &mut renderer).unwrap();

    assert_eq!(summary.runs, 1);
    assert_eq!(summary.collisions, 1);
    assert_eq!(sounds.borrow().as_slice(), &[SoundEffect::Explosion]);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(summary.best_score > 0);

    // Phases only move forward: Playing -> Exploding -> GameOver
    let mut phases = renderer.phases.clone();
    phases.dedup();
    assert_eq!(
        phases,
        vec![GamePhase::Playing, GamePhase::Exploding, GamePhase::GameOver]
    );

    // Score never decreases and freezes after the collision
    assert!(renderer.scores.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*renderer.scores.last().unwrap(), summary.best_score);

    // Explosion walks every fallback frame in order
    let mut frames = renderer.explosion_frames.clone();
    frames.dedup();
    assert_eq!(frames, vec![0, 1, 2, 3, 4]);

    assert!(renderer.last_commands.iter().any(|c| matches!(
        c,
        DrawCommand::Text { content, .. } if content == "GAME OVER"
    )));
}

#[test]
fn restart_after_game_over_resets_score() {
    let sounds = Rc::new(RefCell::new(Vec::new()));
    let mut game = game(&sounds);
    let mut clock = FixedClock::new(0, 16);
    let mut input = StartThenWait {
        restart_after_game_over: true,
        ..Default::default()
    };
    let mut renderer = FrameLog::default();

    let summary = game.run(&mut clock, &mut input, &mut renderer).unwrap();

    assert_eq!(summary.runs, 2);
    assert_eq!(summary.collisions, 2);
    assert_eq!(sounds.borrow().len(), 2);

    // The first Playing frame after the restart shows a fresh score
    let restart_frame = renderer
        .phases
        .windows(2)
        .position(|w| w[0] == GamePhase::GameOver && w[1] == GamePhase::Playing)
        .expect("restart frame")
        + 1;
    assert_eq!(renderer.scores[restart_frame], 0);
}

struct Broken;

impl InputSource for Broken {
    fn poll(&mut self, _now_ms: u64, _view: &Snapshot) -> RawInput {
        RawInput {
            restart: None,
            ..RawInput::idle()
        }
    }
}

#[test]
fn malformed_poll_stops_the_loop() {
    let sounds = Rc::new(RefCell::new(Vec::new()));
    let mut game = game(&sounds);
    let mut clock = FixedClock::new(0, 16);
    let mut renderer = FrameLog::default();

    let err = game.run(&mut clock, &mut Broken, &mut renderer).unwrap_err();
    assert_eq!(err, InputError::MissingSignal(Signal::Restart));
    assert!(renderer.phases.is_empty());
}
