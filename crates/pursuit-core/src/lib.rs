//! Core types and definitions for the orbital pursuit game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, sides, scenarios, commands, match state, snapshots, events,
//! and tuning constants. It contains no rules logic.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod scenario;
pub mod state;
pub mod types;
