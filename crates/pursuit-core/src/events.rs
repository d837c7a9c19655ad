//! Events emitted by the engine for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::ScanResult;
use crate::types::Position;

/// Things that happened while applying commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A fresh match began (start, scenario swap or reset).
    MatchStarted { scenario_id: String, mode: Mode },
    /// The Evader committed its hidden move.
    MoveCommitted { side: Side, turn: u32 },
    /// The Pursuer's move resolved the round.
    RoundResolved {
        turn: u32,
        evader: Position,
        pursuer: Position,
        distance_km: f64,
        captured: bool,
        capture_count: u32,
    },
    /// A scan succeeded.
    ScanPerformed { side: Side, result: ScanResult },
    /// The match reached its terminal phase.
    GameOver { winner: Side, turn: u32 },
    /// A command was refused; the state is unchanged.
    CommandRejected { reason: String },
}
