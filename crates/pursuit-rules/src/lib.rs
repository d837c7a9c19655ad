//! Rules for the orbital pursuit game.
//!
//! Pure functions over the core vocabulary: physical geometry, move
//! legality, the day cycle, observation gating, range predicates, win
//! evaluation and fog-of-war visibility. No state, no randomness.

pub mod geometry;
pub mod rules;
pub mod visibility;

pub use pursuit_core as core;

#[cfg(test)]
mod tests;
