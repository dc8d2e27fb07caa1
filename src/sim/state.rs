//! Game state and core simulation types
//!
//! Everything the loop owns for one session lives in [`GameState`]: the
//! ball, both paddles, both score counters, and the held-key input flags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{PaddleContact, PaddleZone, WallContact};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being produced
    Running,
    /// Quit was requested; the loop exits before the next iteration
    Terminated,
}

/// Player identity. Player one defends the left goal wall, player two the
/// right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// Held state of one paddle's movement keys
///
/// Held-state model: the input collaborator sets these on key-down and
/// clears them on key-up; no edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleKeys {
    pub up: bool,
    pub down: bool,
}

impl PaddleKeys {
    /// Vertical velocity for this frame. Up wins when both keys are held
    /// (intentional precedence).
    pub fn velocity(&self) -> f32 {
        if self.up {
            -PADDLE_SPEED
        } else if self.down {
            PADDLE_SPEED
        } else {
            0.0
        }
    }
}

/// Held-key state for both paddles, written by the input collaborator and
/// read once per frame by the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub paddle_one: PaddleKeys,
    pub paddle_two: PaddleKeys,
}

/// The ball
///
/// Size is a shared constant (`BALL_WIDTH` x `BALL_HEIGHT`), not
/// per-instance state. `position` is the top-left corner of its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Ball {
    /// Serve spot: playfield center, adjusted for the ball's own size so
    /// the box is centered. Used at creation and after every miss.
    pub fn spawn_position() -> Vec2 {
        Vec2::new(
            WINDOW_WIDTH / 2.0 - BALL_WIDTH / 2.0,
            WINDOW_HEIGHT / 2.0 - BALL_HEIGHT / 2.0,
        )
    }

    pub fn new() -> Self {
        Self {
            position: Self::spawn_position(),
            velocity: Vec2::new(BALL_SPEED, 0.0),
        }
    }

    /// Integrate one frame. No boundary handling here; the ball may travel
    /// outside the playfield, and correction happens only through explicit
    /// collision resolution.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Bounce off a paddle: push out along x, reflect horizontally, and
    /// overwrite the vertical velocity according to the struck zone.
    pub fn collide_with_paddle(&mut self, contact: &PaddleContact) {
        self.position.x += contact.penetration;
        self.velocity.x = -self.velocity.x;

        match contact.zone {
            PaddleZone::Top => self.velocity.y = -0.75 * BALL_SPEED,
            PaddleZone::Middle => {}
            PaddleZone::Bottom => self.velocity.y = 0.75 * BALL_SPEED,
        }
    }

    /// Resolve a boundary contact. Top/bottom reflect; left/right are a
    /// miss and restart play with a serve toward the scoring player's
    /// opponent.
    pub fn collide_with_wall(&mut self, contact: &WallContact) {
        match *contact {
            WallContact::Top { penetration } | WallContact::Bottom { penetration } => {
                self.position.y += penetration;
                self.velocity.y = -self.velocity.y;
            }
            WallContact::Left => self.serve(BALL_SPEED),
            WallContact::Right => self.serve(-BALL_SPEED),
        }
    }

    /// Re-center and serve with the given horizontal speed. The vertical
    /// component is always downward, so velocity is never zero after a
    /// serve.
    fn serve(&mut self, vx: f32) {
        self.position = Self::spawn_position();
        self.velocity = Vec2::new(vx, 0.75 * BALL_SPEED);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A player's paddle
///
/// Velocity has no memory: the frame step overwrites it from the held keys
/// before every integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Paddle {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Integrate one frame, then clamp to the court. The clamp runs after
    /// integration, unconditionally, so a single large `dt` cannot drive
    /// the paddle out of `[0, WINDOW_HEIGHT - PADDLE_HEIGHT]`.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.position.y = self.position.y.clamp(0.0, WINDOW_HEIGHT - PADDLE_HEIGHT);
    }
}

/// Complete session state, exclusively owned by the loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle_one: Paddle,
    pub paddle_two: Paddle,
    pub score_one: u32,
    pub score_two: u32,
    /// Held-key state, refreshed from the input collaborator each frame
    pub input: InputFlags,
}

impl GameState {
    /// Initial layout: ball centered and served rightward, paddles inset
    /// from their goal walls and vertically centered, scores at zero.
    pub fn new() -> Self {
        let paddle_y = (WINDOW_HEIGHT - PADDLE_HEIGHT) / 2.0;
        Self {
            phase: GamePhase::Running,
            ball: Ball::new(),
            paddle_one: Paddle::new(Vec2::new(PADDLE_INSET, paddle_y)),
            paddle_two: Paddle::new(Vec2::new(WINDOW_WIDTH - PADDLE_INSET, paddle_y)),
            score_one: 0,
            score_two: 0,
            input: InputFlags::default(),
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.score_one,
            Player::Two => self.score_two,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ball_update_zero_dt_is_noop() {
        let mut ball = Ball::new();
        let before = ball.position;
        ball.update(0.0);
        assert_eq!(ball.position, before);
    }

    #[test]
    fn test_ball_update_is_linear() {
        let mut split = Ball {
            position: Vec2::new(100.0, 200.0),
            velocity: Vec2::new(0.65, -0.3),
        };
        let mut whole = split.clone();

        split.update(12.5);
        split.update(7.5);
        whole.update(20.0);

        assert!((split.position.x - whole.position.x).abs() < 1e-3);
        assert!((split.position.y - whole.position.y).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_clamps_at_top() {
        let mut paddle = Paddle::new(Vec2::new(50.0, 10.0));
        paddle.velocity.y = -PADDLE_SPEED;
        paddle.update(100.0);
        assert_eq!(paddle.position.y, 0.0);
    }

    #[test]
    fn test_paddle_clamps_at_bottom() {
        let mut paddle = Paddle::new(Vec2::new(50.0, 600.0));
        paddle.velocity.y = PADDLE_SPEED;
        paddle.update(100_000.0);
        assert_eq!(paddle.position.y, WINDOW_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_paddle_bottom_zone_bounce() {
        // Leftward ball into the bottom third: horizontal reflection plus a
        // downward return angle.
        let mut ball = Ball {
            position: Vec2::new(55.0, 390.0),
            velocity: Vec2::new(-BALL_SPEED, 0.0),
        };
        let contact = PaddleContact {
            zone: PaddleZone::Bottom,
            penetration: 5.0,
        };
        ball.collide_with_paddle(&contact);

        assert_eq!(ball.position.x, 60.0);
        assert_eq!(ball.velocity.x, BALL_SPEED);
        assert_eq!(ball.velocity.y, 0.75 * BALL_SPEED);
    }

    #[test]
    fn test_paddle_middle_zone_keeps_vertical_velocity() {
        let mut ball = Ball {
            position: Vec2::new(55.0, 350.0),
            velocity: Vec2::new(-BALL_SPEED, -0.2),
        };
        let contact = PaddleContact {
            zone: PaddleZone::Middle,
            penetration: 5.0,
        };
        ball.collide_with_paddle(&contact);

        assert_eq!(ball.velocity.x, BALL_SPEED);
        assert_eq!(ball.velocity.y, -0.2);
    }

    #[test]
    fn test_wall_top_reflects() {
        let mut ball = Ball {
            position: Vec2::new(600.0, -3.0),
            velocity: Vec2::new(0.1, -0.65),
        };
        ball.collide_with_wall(&WallContact::Top { penetration: 3.0 });

        assert_eq!(ball.position.y, 0.0);
        assert_eq!(ball.velocity.y, 0.65);
        assert_eq!(ball.velocity.x, 0.1);
    }

    #[test]
    fn test_wall_left_serves_toward_the_right() {
        let mut ball = Ball {
            position: Vec2::new(-20.0, 100.0),
            velocity: Vec2::new(-BALL_SPEED, 0.0),
        };
        ball.collide_with_wall(&WallContact::Left);

        assert_eq!(ball.position, Ball::spawn_position());
        assert_eq!(ball.velocity, Vec2::new(BALL_SPEED, 0.75 * BALL_SPEED));
    }

    #[test]
    fn test_wall_right_serves_toward_the_left() {
        let mut ball = Ball {
            position: Vec2::new(1300.0, 100.0),
            velocity: Vec2::new(BALL_SPEED, 0.1),
        };
        ball.collide_with_wall(&WallContact::Right);

        assert_eq!(ball.position, Ball::spawn_position());
        assert_eq!(ball.velocity, Vec2::new(-BALL_SPEED, 0.75 * BALL_SPEED));
    }

    #[test]
    fn test_both_keys_up_wins() {
        let keys = PaddleKeys {
            up: true,
            down: true,
        };
        assert_eq!(keys.velocity(), -PADDLE_SPEED);
    }

    proptest! {
        #[test]
        fn prop_paddle_never_leaves_court(
            start_y in -2000.0f32..2000.0,
            vel_y in -1000.0f32..1000.0,
            dt in 0.0f32..100_000.0,
        ) {
            let mut paddle = Paddle::new(Vec2::new(PADDLE_INSET, start_y));
            paddle.velocity.y = vel_y;
            paddle.update(dt);
            prop_assert!(paddle.position.y >= 0.0);
            prop_assert!(paddle.position.y <= WINDOW_HEIGHT - PADDLE_HEIGHT);
        }
    }
}
