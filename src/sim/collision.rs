//! Collision detection for the rectangular court
//!
//! Two pure queries: ball against a paddle, ball against the playfield
//! boundary. Both are side-effect-free and return `None` when nothing
//! overlaps - a frequent, normal outcome, not an error.

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Vertical third of the paddle struck by the ball
///
/// Thirds are measured up from the paddle's *bottom* edge, which makes the
/// zoning slightly asymmetric. The struck zone decides the outgoing angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleZone {
    Top,
    Middle,
    Bottom,
}

/// Contact between the ball and a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    pub zone: PaddleZone,
    /// Signed horizontal overlap; added to the ball's x to push it back out
    /// of the paddle. Zero when the ball has no horizontal velocity.
    pub penetration: f32,
}

/// Contact between the ball and a playfield wall
///
/// `Left`/`Right` carry no penetration: a goal-wall contact always forces a
/// full reposition, so there is nothing to correct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallContact {
    Top { penetration: f32 },
    Bottom { penetration: f32 },
    Left,
    Right,
}

/// AABB overlap test between ball and paddle
///
/// The same query serves both paddles: which face was struck follows from
/// the ball's travel direction, not from paddle identity.
pub fn check_paddle_collision(ball: &Ball, paddle: &Paddle) -> Option<PaddleContact> {
    let ball_left = ball.position.x;
    let ball_right = ball.position.x + BALL_WIDTH;
    let ball_top = ball.position.y;
    let ball_bottom = ball.position.y + BALL_HEIGHT;

    let paddle_left = paddle.position.x;
    let paddle_right = paddle.position.x + PADDLE_WIDTH;
    let paddle_top = paddle.position.y;
    let paddle_bottom = paddle.position.y + PADDLE_HEIGHT;

    // Separating-axis rejects, checked in this order
    if ball_left >= paddle_right {
        return None;
    }
    if ball_right <= paddle_left {
        return None;
    }
    if ball_top >= paddle_bottom {
        return None;
    }
    if ball_bottom <= paddle_top {
        return None;
    }

    let penetration = if ball.velocity.x < 0.0 {
        // Struck a paddle on the ball's left
        paddle_right - ball_left
    } else if ball.velocity.x > 0.0 {
        // Struck a paddle on the ball's right
        paddle_left - ball_right
    } else {
        0.0
    };

    // Zone boundaries, measured up from the bottom edge
    let range_upper = paddle_bottom - 2.0 * PADDLE_HEIGHT / 3.0;
    let range_middle = paddle_bottom - PADDLE_HEIGHT / 3.0;

    let zone = if ball_bottom > paddle_top && ball_bottom < range_upper {
        PaddleZone::Top
    } else if ball_bottom > range_upper && ball_bottom < range_middle {
        PaddleZone::Middle
    } else {
        PaddleZone::Bottom
    };

    Some(PaddleContact { zone, penetration })
}

/// Boundary test in fixed priority order: Left, Right, Top, Bottom
///
/// Only the first matching wall is reported, even when the ball overlaps on
/// both axes in the same frame.
pub fn check_wall_collision(ball: &Ball) -> Option<WallContact> {
    let ball_left = ball.position.x;
    let ball_right = ball.position.x + BALL_WIDTH;
    let ball_top = ball.position.y;
    let ball_bottom = ball.position.y + BALL_HEIGHT;

    if ball_left < 0.0 {
        Some(WallContact::Left)
    } else if ball_right > WINDOW_WIDTH {
        Some(WallContact::Right)
    } else if ball_top < 0.0 {
        Some(WallContact::Top {
            penetration: -ball_top,
        })
    } else if ball_bottom > WINDOW_HEIGHT {
        Some(WallContact::Bottom {
            penetration: WINDOW_HEIGHT - ball_bottom,
        })
    } else {
        None
    }
}
