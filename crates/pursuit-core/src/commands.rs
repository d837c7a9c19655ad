//! Commands sent from the presentation layer to the match.
//!
//! Every command is applied atomically. Commands that are illegal in the
//! current state are rejected and leave the state unchanged.

use serde::{Deserialize, Serialize};

use crate::enums::{Mode, Side};
use crate::scenario::Scenario;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    // --- Match lifecycle ---
    /// Start a fresh match on `scenario` in the given mode.
    Start { scenario: Scenario, mode: Mode },
    /// Swap the scenario, restarting the match in the current mode.
    SelectScenario { scenario: Scenario },
    /// Restart the current scenario, keeping the mode.
    Reset,

    // --- Turn actions (side currently to act) ---
    /// Commit a move to `row`; the lateral drift follows from the row.
    Move { row: i32 },
    /// Reveal the opponent's column.
    ScanShort,
    /// Probe a circle around `center` for the opponent's exact cell.
    ScanLong { center: Position },
}

impl MatchCommand {
    pub fn start_hotseat(scenario: Scenario) -> Self {
        MatchCommand::Start {
            scenario,
            mode: Mode::Hotseat,
        }
    }

    pub fn start_ai(scenario: Scenario, human: Side) -> Self {
        MatchCommand::Start {
            scenario,
            mode: Mode::Ai { human },
        }
    }

    /// Whether this command acts on behalf of the side to move
    /// (as opposed to restarting the match).
    pub fn is_turn_action(&self) -> bool {
        matches!(
            self,
            MatchCommand::Move { .. } | MatchCommand::ScanShort | MatchCommand::ScanLong { .. }
        )
    }
}
