//! Match state machine.
//!
//! `step` maps one state and one command to the next state plus a summary of
//! what happened. Illegal commands are rejected: the returned state equals the
//! input. The only randomness is the weather roll at the end of a round, drawn
//! from the caller's RNG.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use pursuit_core::commands::MatchCommand;
use pursuit_core::enums::{Mode, ScanType, Side};
use pursuit_core::scenario::Scenario;
use pursuit_core::state::{MatchState, ScanArea, ScanResult};
use pursuit_core::types::{Position, SideMap};
use pursuit_rules::geometry::physical_distance;
use pursuit_rules::rules::{
    evaluate_win_condition, legal_move, maneuver_cost, next_position, observation_allowed,
    scan_covers, within_capture_range,
};

use crate::weather::next_weather;

/// Why a command left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the match is over")]
    NotPlaying,
    #[error("row {row} is not a legal move for side {}", side.label())]
    IllegalRow { side: Side, row: i32 },
    #[error("side {} has already scanned this turn", side.label())]
    AlreadyScanned { side: Side },
    #[error("{0}")]
    ObservationBlocked(&'static str),
    #[error("scan centre {0:?} is off the grid")]
    CenterOffGrid(Position),
    #[error("side {} is not human-controlled", side.label())]
    NotHumanTurn { side: Side },
}

/// Summary of an applied command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A fresh match was set up.
    Started,
    /// The Evader's move is stashed until the Pursuer commits.
    EvaderCommitted,
    /// Both moves resolved. `turn` is the turn that just ended.
    RoundResolved {
        turn: u32,
        distance_km: f64,
        captured: bool,
        winner: Option<Side>,
    },
    /// A scan was recorded for `side`.
    Scanned { side: Side, result: ScanResult },
    Rejected(Rejection),
}

/// Result of applying one command.
#[derive(Debug, Clone)]
pub struct Step {
    pub state: MatchState,
    pub outcome: Outcome,
}

impl Step {
    pub fn accepted(&self) -> bool {
        !matches!(self.outcome, Outcome::Rejected(_))
    }
}

/// Apply `command` to `state`, returning only the next state.
pub fn apply<R: Rng + ?Sized>(state: &MatchState, command: &MatchCommand, rng: &mut R) -> MatchState {
    step(state, command, rng).state
}

/// Apply `command` to `state`.
pub fn step<R: Rng + ?Sized>(state: &MatchState, command: &MatchCommand, rng: &mut R) -> Step {
    match command {
        MatchCommand::Start { scenario, mode } => start(scenario, *mode),
        MatchCommand::SelectScenario { scenario } => start(scenario, state.mode),
        MatchCommand::Reset => start(&state.scenario, state.mode),
        MatchCommand::Move { row } => commit_move(state, *row, rng),
        MatchCommand::ScanShort => scan(state, ScanType::Short, None),
        MatchCommand::ScanLong { center } => scan(state, ScanType::Long, Some(*center)),
    }
}

/// A rejected command: the state is returned unchanged.
pub fn rejected(state: &MatchState, reason: Rejection) -> Step {
    debug!(turn = state.turn, side = state.side_to_act.label(), %reason, "command rejected");
    Step {
        state: state.clone(),
        outcome: Outcome::Rejected(reason),
    }
}

fn start(scenario: &Scenario, mode: Mode) -> Step {
    info!(scenario = %scenario.id, ?mode, "match started");
    Step {
        state: MatchState::new(scenario.clone(), mode),
        outcome: Outcome::Started,
    }
}

fn commit_move<R: Rng + ?Sized>(state: &MatchState, row: i32, rng: &mut R) -> Step {
    if !state.is_playing() {
        return rejected(state, Rejection::NotPlaying);
    }

    let side = state.side_to_act;
    let from = state.position(side);
    if !legal_move(side, from.x, row, &state.scenario) {
        return rejected(state, Rejection::IllegalRow { side, row });
    }

    let mut next = state.clone();
    let target = next_position(from, row, &state.scenario);
    next.resources[side].fuel_spent += maneuver_cost(from, row);
    next.has_performed_scan = false;

    match side {
        Side::Evader => {
            // Public position stays put until the round resolves.
            next.pending_evader_move = Some(target);
            next.side_to_act = Side::Pursuer;
            Step {
                state: next,
                outcome: Outcome::EvaderCommitted,
            }
        }
        Side::Pursuer => resolve_round(next, target, rng),
    }
}

fn resolve_round<R: Rng + ?Sized>(mut next: MatchState, pursuer: Position, rng: &mut R) -> Step {
    let scenario = &next.scenario;
    let evader = next
        .pending_evader_move
        .take()
        .unwrap_or(next.positions.evader);

    let distance_km = physical_distance(&evader, &pursuer, scenario);
    let captured = within_capture_range(&evader, &pursuer, scenario);
    let capture_count = if captured { next.capture_count + 1 } else { 0 };
    let check = evaluate_win_condition(capture_count, next.turn + 1, scenario);
    let weather_enabled = scenario.weather_enabled;

    let turn = next.turn;
    next.positions = SideMap::new(evader, pursuer);
    next.capture_count = capture_count;
    next.phase = check.phase;
    next.winner = check.winner;
    next.turn += 1;
    next.side_to_act = Side::Evader;
    if weather_enabled {
        next.weather = next_weather(next.weather, rng);
    }

    info!(turn, distance_km, captured, capture_count, "round resolved");
    if let Some(winner) = check.winner {
        info!(winner = winner.label(), turn, "game over");
    }

    Step {
        state: next,
        outcome: Outcome::RoundResolved {
            turn,
            distance_km,
            captured,
            winner: check.winner,
        },
    }
}

fn scan(state: &MatchState, scan_type: ScanType, center: Option<Position>) -> Step {
    if !state.is_playing() {
        return rejected(state, Rejection::NotPlaying);
    }

    let side = state.side_to_act;
    if state.has_performed_scan {
        return rejected(state, Rejection::AlreadyScanned { side });
    }

    let scenario = &state.scenario;
    let observation = observation_allowed(state.turn, state.weather, scan_type, scenario);
    if !observation.allowed {
        let reason = observation.reason.unwrap_or("observation is not possible now");
        return rejected(state, Rejection::ObservationBlocked(reason));
    }

    // The opponent's public cell; a pending Evader move is never revealed.
    let opponent = state.position(side.opponent());
    let result = match (scan_type, center) {
        (ScanType::Long, Some(center)) => {
            if !center.on_grid(scenario.grid_w, scenario.grid_h) {
                return rejected(state, Rejection::CenterOffGrid(center));
            }
            ScanResult {
                turn: state.turn,
                scan_type,
                detected_column: None,
                detected_pos: scan_covers(&center, &opponent, scenario).then_some(opponent),
                scanned_area: Some(ScanArea {
                    center,
                    radius_km: scenario.ranges.long_scan,
                }),
            }
        }
        _ => ScanResult {
            turn: state.turn,
            scan_type: ScanType::Short,
            detected_column: Some(opponent.x),
            detected_pos: None,
            scanned_area: None,
        },
    };

    let cost = match result.scan_type {
        ScanType::Short => scenario.observation_cost.short,
        ScanType::Long => scenario.observation_cost.long,
    };

    let mut next = state.clone();
    next.previous_scan[side] = next.last_scan[side].take();
    next.last_scan[side] = Some(result);
    next.has_performed_scan = true;
    next.resources[side].observation_spent += cost;

    debug!(side = side.label(), ?scan_type, hit = result.detected_pos.is_some(), "scan recorded");
    Step {
        state: next,
        outcome: Outcome::Scanned { side, result },
    }
}
