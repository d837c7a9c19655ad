//! Match state machine and session engine for the orbital pursuit game.
//!
//! `reducer` is the pure transition function over `MatchState`.
//! `MatchEngine` owns one state, seeds the RNG, guards turn ownership in AI
//! mode and schedules the AI's delayed move.

pub mod engine;
pub mod reducer;
pub mod snapshot;
pub mod weather;

pub use engine::{EngineConfig, MatchEngine};
pub use pursuit_core as core;
