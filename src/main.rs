//! Duel Pong entry point
//!
//! No windowing stack is wired in yet; the binary drives the same frame
//! loop a real frontend would, using the headless collaborators and a
//! fixed 16 ms step.

use duel_pong::GameLoop;
use duel_pong::frontend::headless::{LogAudio, LogScoreDisplay, NullRenderer, ScriptedInput};
use duel_pong::platform::FixedClock;
use duel_pong::sim::{InputFlags, PaddleKeys};

fn main() {
    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    // Player one leans on the up key for the whole session, player two
    // holds still; roughly ten seconds of simulated play.
    let held = InputFlags {
        paddle_one: PaddleKeys {
            up: true,
            down: false,
        },
        paddle_two: PaddleKeys::default(),
    };

    let mut game = GameLoop::new(
        NullRenderer,
        LogScoreDisplay,
        LogAudio,
        ScriptedInput::hold(held, 600),
        FixedClock::new(16.0),
    );
    game.run();

    let state = game.state();
    log::info!(
        "final score: player one {} - player two {}",
        state.score_one,
        state.score_two
    );
}
