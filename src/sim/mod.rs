//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering, audio, or platform dependencies
//! - No wall-clock access; `dt` comes in as an argument
//! - State is mutated only through `tick`, once per frame

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    PaddleContact, PaddleZone, WallContact, check_paddle_collision, check_wall_collision,
};
pub use state::{Ball, GamePhase, GameState, InputFlags, Paddle, PaddleKeys, Player};
pub use tick::{FrameEvent, tick};
