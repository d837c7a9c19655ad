//! Side-specific scoring terms.

use pursuit_core::constants::*;
use pursuit_core::scenario::Scenario;
use pursuit_core::state::MatchState;
use pursuit_core::types::Position;
use pursuit_rules::geometry::{chebyshev_distance, physical_distance};

/// Evader: separation first, then stay away from the lateral walls.
pub fn evader_score(next: &Position, pursuer: &Position, scenario: &Scenario) -> f64 {
    let map_center = f64::from(scenario.grid_w as i32 - 1) / 2.0;
    let center_bias = -(f64::from(next.x) - map_center).abs();
    AI_DISTANCE_WEIGHT * physical_distance(next, pursuer, scenario) + center_bias
}

/// Pursuer: close the distance, bonus for locking on and for a lock that
/// would end the match this round, small pull toward the target's column.
pub fn pursuer_score(
    next: &Position,
    target: &Position,
    capture_count: u32,
    scenario: &Scenario,
) -> f64 {
    let mut score = -AI_DISTANCE_WEIGHT * physical_distance(next, target, scenario);

    if chebyshev_distance(next, target) <= AI_LOCK_RADIUS_CELLS {
        score += AI_LOCK_BONUS;
        if capture_count + 1 >= scenario.win_time {
            score += AI_WIN_BONUS;
        }
    }

    score - f64::from((next.x - target.x).abs())
}

/// Where the Pursuer aims: the Evader's committed move when one is pending,
/// otherwise its last public position.
pub fn pursuer_target(state: &MatchState) -> Position {
    state
        .pending_evader_move
        .unwrap_or(state.positions.evader)
}
