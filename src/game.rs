//! The frame loop
//!
//! Owns the session state plus the collaborators and repeats the fixed
//! per-frame sequence until quit: drain input, advance the simulation by
//! the previous frame's measured duration, fan events out to audio/score,
//! draw, present, measure.

use log::debug;

use crate::consts::*;
use crate::frontend::{AudioSink, InputSource, Renderer, ScoreDisplay, SoundCue};
use crate::platform::FrameClock;
use crate::sim::{FrameEvent, GamePhase, GameState, Player, tick};

/// The game loop and everything it owns for one session
pub struct GameLoop<R, S, A, I, C> {
    state: GameState,
    renderer: R,
    scoreboard: S,
    audio: A,
    input: I,
    clock: C,
    /// Previous frame's measured duration; the first frame integrates
    /// with 0
    dt_ms: f32,
}

impl<R, S, A, I, C> GameLoop<R, S, A, I, C>
where
    R: Renderer,
    S: ScoreDisplay,
    A: AudioSink,
    I: InputSource,
    C: FrameClock,
{
    pub fn new(renderer: R, scoreboard: S, audio: A, input: I, clock: C) -> Self {
        Self {
            state: GameState::new(),
            renderer,
            scoreboard,
            audio,
            input,
            clock,
            dt_ms: 0.0,
        }
    }

    /// Session state, for inspection between or after frames
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run frames until quit is requested.
    pub fn run(&mut self) {
        while self.state.phase == GamePhase::Running {
            self.frame();
        }
        debug!(
            "session over: {} - {}",
            self.state.score_one, self.state.score_two
        );
    }

    /// One full frame
    ///
    /// A quit event still finishes the in-flight frame; the loop exits at
    /// the top of the next iteration.
    pub fn frame(&mut self) {
        self.clock.start();

        if self.input.poll(&mut self.state.input) {
            self.state.phase = GamePhase::Terminated;
        }

        match tick(&mut self.state, self.dt_ms) {
            Some(FrameEvent::PaddleHit) => self.audio.play_cue(SoundCue::PaddleHit),
            Some(FrameEvent::WallHit) => self.audio.play_cue(SoundCue::WallHit),
            // A miss updates the score display; no cue fires on a score
            Some(FrameEvent::PointScored(player)) => {
                self.scoreboard.set_score(player, self.state.score(player));
            }
            None => {}
        }

        self.draw();
        self.renderer.present();

        self.dt_ms = self.clock.elapsed_ms();
    }

    fn draw(&mut self) {
        let ball = &self.state.ball;
        self.renderer.draw_filled_circle(
            ball.position.x + BALL_WIDTH / 2.0,
            ball.position.y + BALL_HEIGHT / 2.0,
            BALL_WIDTH / 2.0,
            DRAW_COLOR,
        );

        for paddle in [&self.state.paddle_one, &self.state.paddle_two] {
            self.renderer.draw_filled_rect(
                paddle.position.x,
                paddle.position.y,
                paddle.position.x + PADDLE_WIDTH,
                paddle.position.y + PADDLE_HEIGHT,
                DRAW_COLOR,
            );
        }

        self.scoreboard.draw(Player::One);
        self.scoreboard.draw(Player::Two);
    }
}
