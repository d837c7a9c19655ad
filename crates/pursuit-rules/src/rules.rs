//! Move legality, day cycle, observation gating and win evaluation.

use pursuit_core::constants::{CAPTURE_TOLERANCE_KM, FUEL_PER_ROW, SCAN_TOLERANCE_KM};
use pursuit_core::enums::{MatchPhase, ScanType, Side, TimeOfDay, Weather};
use pursuit_core::scenario::Scenario;
use pursuit_core::types::Position;

use crate::geometry::within_range;

/// Lateral drift implied by selecting `row`: negative above the centre
/// row, positive below, magnitude equal to the distance from it.
pub fn drift_for_row(row: i32, scenario: &Scenario) -> i32 {
    row - scenario.center_row()
}

/// Whether `side`, standing in column `from_x`, may move to `row`.
pub fn legal_move(side: Side, from_x: i32, row: i32, scenario: &Scenario) -> bool {
    if row < 0 || row >= scenario.grid_h as i32 {
        return false;
    }

    let next_x = from_x + drift_for_row(row, scenario);
    match side {
        Side::Evader => next_x >= scenario.a_min_x && next_x <= scenario.a_max_x,
        Side::Pursuer => next_x >= 0 && next_x < scenario.grid_w as i32,
    }
}

/// All legal rows for `side` from column `from_x`, ascending.
pub fn legal_moves(side: Side, from_x: i32, scenario: &Scenario) -> Vec<i32> {
    (0..scenario.grid_h as i32)
        .filter(|&row| legal_move(side, from_x, row, scenario))
        .collect()
}

/// Cell reached by selecting `row` from `from`.
pub fn next_position(from: Position, row: i32, scenario: &Scenario) -> Position {
    Position::new(from.x + drift_for_row(row, scenario), row)
}

/// Fuel charged for moving from `from` to `row`. Drift is free.
pub fn maneuver_cost(from: Position, row: i32) -> u32 {
    (row - from.y).unsigned_abs() * FUEL_PER_ROW
}

/// Four-turn day cycle keyed by `(turn - 1) mod 4`.
pub fn time_of_day(turn: u32) -> TimeOfDay {
    match (i64::from(turn) - 1).rem_euclid(4) {
        0 => TimeOfDay::Night,
        1 => TimeOfDay::Dawn,
        2 => TimeOfDay::Day,
        _ => TimeOfDay::Dusk,
    }
}

/// Whether a scan may be taken right now, with an explanation when not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub allowed: bool,
    pub reason: Option<&'static str>,
}

impl Observation {
    fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn blocked(reason: &'static str) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Observation gating by weather and time of day. Always allowed when the
/// scenario has weather disabled.
pub fn observation_allowed(
    turn: u32,
    weather: Weather,
    scan_type: ScanType,
    scenario: &Scenario,
) -> Observation {
    if !scenario.weather_enabled {
        return Observation::allowed();
    }
    if weather == Weather::Cloudy {
        return Observation::blocked("Cloud cover blocks all observation.");
    }

    match (time_of_day(turn), scan_type) {
        (TimeOfDay::Day, _) => Observation::blocked("Daylight glare blocks all observation."),
        (TimeOfDay::Dawn | TimeOfDay::Dusk, ScanType::Long) => {
            Observation::blocked("Twilight only permits short scans.")
        }
        _ => Observation::allowed(),
    }
}

pub fn within_capture_range(p1: &Position, p2: &Position, scenario: &Scenario) -> bool {
    within_range(
        p1,
        p2,
        scenario.ranges.identification,
        scenario,
        CAPTURE_TOLERANCE_KM,
    )
}

pub fn within_visual_range(p1: &Position, p2: &Position, scenario: &Scenario) -> bool {
    within_range(p1, p2, scenario.ranges.visual, scenario, CAPTURE_TOLERANCE_KM)
}

/// Whether a long scan centred on `center` covers `target`. Boundary
/// inclusive, with a 1 km tolerance.
pub fn scan_covers(center: &Position, target: &Position, scenario: &Scenario) -> bool {
    within_range(
        center,
        target,
        scenario.ranges.long_scan,
        scenario,
        SCAN_TOLERANCE_KM,
    )
}

/// Outcome of the end-of-round win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinCheck {
    pub phase: MatchPhase,
    pub winner: Option<Side>,
}

/// Pursuer wins once the capture streak reaches `win_time`; otherwise the
/// Evader wins when the turn about to start exceeds `max_turns`.
pub fn evaluate_win_condition(
    capture_count: u32,
    turn_after_round: u32,
    scenario: &Scenario,
) -> WinCheck {
    if capture_count >= scenario.win_time {
        WinCheck {
            phase: MatchPhase::GameOver,
            winner: Some(Side::Pursuer),
        }
    } else if turn_after_round > scenario.max_turns {
        WinCheck {
            phase: MatchPhase::GameOver,
            winner: Some(Side::Evader),
        }
    } else {
        WinCheck {
            phase: MatchPhase::Playing,
            winner: None,
        }
    }
}
