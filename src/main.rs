//! Silverball entry point
//!
//! Headless demo: steps the simulation with a scripted input pattern and
//! logs score and lifecycle events. A rendering host drives [`sim::tick`]
//! the same way from its frame callback and reads state back for display.

use silverball::Tuning;
use silverball::sim::{GamePhase, GameState, TickInput, tick};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    log::info!("silverball demo starting (seed {seed})");
    let mut state = GameState::with_tuning(tuning, seed);

    // Script: launch whenever the ball is racked, flap the flippers in
    // alternation while it is live.
    let mut frame: u64 = 0;
    while state.phase() != GamePhase::GameOver && frame < MAX_FRAMES {
        let input = TickInput {
            launch: state.phase() == GamePhase::Ready && frame % 90 == 0,
            left_pressed: (frame / 20) % 3 == 0,
            right_pressed: (frame / 20) % 3 == 1,
        };
        tick(&mut state, &input, FRAME_DT);
        frame += 1;
    }

    let outcome = match state.phase() {
        GamePhase::GameOver => "game over",
        _ => "stopped",
    };
    println!(
        "{outcome} after {frame} frames: score {}, balls remaining {}",
        state.score, state.balls_remaining
    );
}

/// Read a tuning override file, falling back to defaults on any failure
fn load_tuning(path: &str) -> Tuning {
    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("bad tuning file {path}: {err}, using defaults");
                Tuning::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {path}: {err}, using defaults");
            Tuning::default()
        }
    }
}
