//! Per-frame simulation step
//!
//! Advances the whole simulation by one frame's worth of time and reports
//! what happened, so the loop can drive the audio and score collaborators
//! without the simulation knowing they exist.

use super::collision::{WallContact, check_paddle_collision, check_wall_collision};
use super::state::{GameState, Player};

/// Noteworthy outcome of a frame
///
/// At most one per frame, because at most one contact is resolved per
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Ball bounced off either paddle
    PaddleHit,
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball left the court past a goal wall; the named player scored
    PointScored(Player),
}

/// Advance the simulation by `dt` milliseconds.
///
/// Fixed order: paddle velocities from held keys, paddle integration, ball
/// integration, then contact resolution with paddle-one -> paddle-two ->
/// wall priority. A miss increments the opposing player's score and
/// restarts play with a serve.
pub fn tick(state: &mut GameState, dt: f32) -> Option<FrameEvent> {
    state.paddle_one.velocity.y = state.input.paddle_one.velocity();
    state.paddle_two.velocity.y = state.input.paddle_two.velocity();

    state.paddle_one.update(dt);
    state.paddle_two.update(dt);
    state.ball.update(dt);

    if let Some(contact) = check_paddle_collision(&state.ball, &state.paddle_one)
        .or_else(|| check_paddle_collision(&state.ball, &state.paddle_two))
    {
        state.ball.collide_with_paddle(&contact);
        return Some(FrameEvent::PaddleHit);
    }

    let contact = check_wall_collision(&state.ball)?;
    state.ball.collide_with_wall(&contact);

    match contact {
        WallContact::Left => {
            state.score_two += 1;
            Some(FrameEvent::PointScored(Player::Two))
        }
        WallContact::Right => {
            state.score_one += 1;
            Some(FrameEvent::PointScored(Player::One))
        }
        WallContact::Top { .. } | WallContact::Bottom { .. } => Some(FrameEvent::WallHit),
    }
}
