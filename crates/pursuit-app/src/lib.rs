//! Headless host for the pursuit game.
//!
//! A game-loop thread owns the `MatchEngine`; the functions in `session`
//! bridge callers to it through a channel and shared snapshot state.

pub mod error;
pub mod game_loop;
pub mod session;
pub mod state;

pub use error::AppError;
pub use pursuit_core as core;
