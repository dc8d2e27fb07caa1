//! Headless collaborator implementations
//!
//! Enough to run a full session without a window: draw calls are
//! discarded, cues and score changes go to the log, and input replays a
//! fixed schedule before requesting quit. The demo binary and the loop
//! tests both run on these.

use log::{debug, info};

use super::{AudioSink, InputSource, Renderer, ScoreDisplay, SoundCue};
use crate::sim::{InputFlags, Player};

/// Renderer that discards every draw call
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_filled_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: u32) {}

    fn draw_filled_rect(&mut self, _l: f32, _t: f32, _r: f32, _b: f32, _color: u32) {}

    fn present(&mut self) {}
}

/// Score sink that logs every change
#[derive(Debug, Default)]
pub struct LogScoreDisplay;

impl ScoreDisplay for LogScoreDisplay {
    fn set_score(&mut self, player: Player, value: u32) {
        info!("score: player {player:?} -> {value}");
    }

    fn draw(&mut self, _player: Player) {}
}

/// Audio sink that traces cues at debug level
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_cue(&mut self, cue: SoundCue) {
        debug!("cue: {cue:?}");
    }
}

/// Input source replaying a fixed schedule of held-key states, one entry
/// per frame, then requesting quit once the schedule runs out
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: Vec<InputFlags>,
    frame: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<InputFlags>) -> Self {
        Self { script, frame: 0 }
    }

    /// Hold the given flags for `frames` frames, then quit.
    pub fn hold(flags: InputFlags, frames: usize) -> Self {
        Self::new(vec![flags; frames])
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, flags: &mut InputFlags) -> bool {
        match self.script.get(self.frame) {
            Some(next) => {
                *flags = *next;
                self.frame += 1;
                false
            }
            None => true,
        }
    }
}
