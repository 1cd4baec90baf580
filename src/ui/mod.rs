//! Terminal presentation. Observes the session read-only; all game
//! mutation happens in `crate::game`.

pub mod common;
pub mod scene;

pub use scene::draw;
