//! Heuristic opponent for the orbital pursuit game.
//!
//! A one-ply greedy evaluator: every legal row is scored with a side-specific
//! heuristic and the best one is picked, ties broken at random. Stateless
//! across calls.

pub mod evaluator;
pub mod heuristics;

pub use pursuit_core as core;
