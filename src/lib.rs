//! Duel Pong - a two-player paddle-and-ball game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: The frame loop driving the simulation against the frontends
//! - `frontend`: Narrow collaborator contracts (rendering, score, audio, input)
//! - `platform`: Frame clock abstraction (the `dt` seam)

pub mod frontend;
pub mod game;
pub mod platform;
pub mod sim;

pub use game::GameLoop;
pub use sim::{GamePhase, GameState, Player, tick};

/// Game configuration constants
///
/// Speeds are in pixels per millisecond, matching the frame clock's `dt`
/// unit. Changing any of these changes gameplay feel.
pub mod consts {
    /// Playfield width in logical pixels
    pub const WINDOW_WIDTH: f32 = 1280.0;
    /// Playfield height in logical pixels
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Ball bounding-box size (the ball is square)
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;

    /// Paddle bounding-box size
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Paddle travel speed while a key is held
    pub const PADDLE_SPEED: f32 = 1.0;
    /// Horizontal serve speed; vertical bounce components derive from this
    pub const BALL_SPEED: f32 = 0.65;

    /// Horizontal offset of each paddle from its own goal wall
    pub const PADDLE_INSET: f32 = 50.0;

    /// Draw color for every body (packed 0xRRGGBBAA)
    pub const DRAW_COLOR: u32 = 0xFFFF_FFFF;
}
