//! Skyhop - Terminal Flappy-Bird-Style Arcade Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod constants;
pub mod frame;
pub mod game;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use frame::FrameClock;
pub use game::{handle_input, step, GameInput, Obstacle, RunStatus, Session};
