//! Core game logic: session state, input handling, and the per-frame
//! update step. Pure data and functions; no terminal coupling.

pub mod logic;
pub mod types;

pub use logic::{handle_input, step, GameInput};
pub use types::{Obstacle, RunStatus, Session};
