//! The match state and the views derived from it.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::scenario::Scenario;
use crate::types::{Position, SideMap};

/// Per-side resource ledger. Both counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Cumulative maneuver cost; charged for vertical displacement only.
    pub fuel_spent: u32,
    /// Cumulative observation cost of successful scans.
    pub observation_spent: u32,
}

/// Circle probed by a long scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanArea {
    pub center: Position,
    pub radius_km: f64,
}

/// Outcome of one reconnaissance action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Turn during which the scan was taken.
    pub turn: u32,
    pub scan_type: ScanType,
    /// Short scans: the opponent's column.
    pub detected_column: Option<i32>,
    /// Long scans: the opponent's cell, `None` on a miss.
    pub detected_pos: Option<Position>,
    /// Long scans: the queried circle, kept even on a miss.
    pub scanned_area: Option<ScanArea>,
}

/// Complete match state. Owned by whoever drives the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub scenario: Scenario,
    pub mode: Mode,
    pub phase: MatchPhase,
    /// Starts at 1; advances once both sides have acted.
    pub turn: u32,
    pub side_to_act: Side,
    /// Public positions. The Evader's entry lags behind its committed move
    /// until the round resolves.
    pub positions: SideMap<Position>,
    /// The Evader's committed but unresolved move.
    pub pending_evader_move: Option<Position>,
    /// Consecutive rounds that ended inside capture range.
    pub capture_count: u32,
    pub winner: Option<Side>,
    pub resources: SideMap<Resources>,
    pub last_scan: SideMap<Option<ScanResult>>,
    pub previous_scan: SideMap<Option<ScanResult>>,
    /// Whether the side to act has already scanned this turn.
    pub has_performed_scan: bool,
    pub weather: Weather,
}

impl MatchState {
    /// Fresh match on `scenario`: turn 1, Evader to act, empty ledgers.
    pub fn new(scenario: Scenario, mode: Mode) -> Self {
        let positions = SideMap::new(scenario.initial_a_pos, scenario.initial_b_pos);
        Self {
            scenario,
            mode,
            phase: MatchPhase::Playing,
            turn: 1,
            side_to_act: Side::Evader,
            positions,
            pending_evader_move: None,
            capture_count: 0,
            winner: None,
            resources: SideMap::default(),
            last_scan: SideMap::default(),
            previous_scan: SideMap::default(),
            has_performed_scan: false,
            weather: Weather::Clear,
        }
    }

    pub fn position(&self, side: Side) -> Position {
        self.positions[side]
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    /// Whether the side to act is driven by a human.
    pub fn is_human_turn(&self) -> bool {
        self.is_playing() && self.mode.is_human(self.side_to_act)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(Scenario::default(), Mode::default())
    }
}

/// Public match snapshot handed to the presentation layer.
///
/// Never carries the Evader's pending move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub scenario_id: String,
    pub mode: Mode,
    pub human_side: Option<Side>,
    pub phase: MatchPhase,
    pub side_to_act: Side,
    pub positions: SideMap<Position>,
    pub turn: u32,
    pub capture_count: u32,
    pub winner: Option<Side>,
    pub resources: SideMap<Resources>,
    pub last_scan: SideMap<Option<ScanResult>>,
    pub previous_scan: SideMap<Option<ScanResult>>,
    pub has_performed_scan: bool,
    pub weather: Weather,
    pub time_of_day: TimeOfDay,
    pub is_human_turn: bool,
    /// An AI move is scheduled and has not fired yet.
    pub ai_thinking: bool,
}

/// What one side is allowed to see under fog of war.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideView {
    pub viewer: Side,
    pub own_position: Position,
    /// `None` while the opponent is hidden.
    pub opponent_position: Option<Position>,
    pub last_scan: Option<ScanResult>,
    pub previous_scan: Option<ScanResult>,
}
