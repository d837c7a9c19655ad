//! Move selection.
//!
//! Pure functions over a match state. Randomness only enters through the
//! caller-supplied RNG used to break ties.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use pursuit_core::constants::AI_SCORE_EPSILON;
use pursuit_core::enums::Side;
use pursuit_core::state::MatchState;
use pursuit_core::types::Position;
use pursuit_rules::rules::{legal_moves, next_position};

use crate::heuristics::{evader_score, pursuer_score, pursuer_target};

/// A legal row with its resulting cell and heuristic score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub row: i32,
    pub position: Position,
    pub score: f64,
}

/// Score every legal row for `side`, in ascending row order.
pub fn score_moves(state: &MatchState, side: Side) -> Vec<ScoredMove> {
    let scenario = &state.scenario;
    let from = state.position(side);

    legal_moves(side, from.x, scenario)
        .into_iter()
        .map(|row| {
            let position = next_position(from, row, scenario);
            let score = match side {
                Side::Evader => evader_score(&position, &state.positions.pursuer, scenario),
                Side::Pursuer => pursuer_score(
                    &position,
                    &pursuer_target(state),
                    state.capture_count,
                    scenario,
                ),
            };
            ScoredMove {
                row,
                position,
                score,
            }
        })
        .collect()
}

/// Rows sharing the best score. Empty only if no legal move exists.
pub fn best_moves(state: &MatchState, side: Side) -> Vec<i32> {
    let scored = score_moves(state, side);
    let Some(best) = scored.iter().map(|m| m.score).reduce(f64::max) else {
        return Vec::new();
    };

    scored
        .iter()
        .filter(|m| (m.score - best).abs() < AI_SCORE_EPSILON)
        .map(|m| m.row)
        .collect()
}

/// Pick a row for `side`. Falls back to the centre row when nothing is legal.
pub fn choose_move<R: Rng + ?Sized>(state: &MatchState, side: Side, rng: &mut R) -> i32 {
    let pool = best_moves(state, side);
    trace!(side = side.label(), turn = state.turn, ?pool, "ai candidate rows");

    match pool.choose(rng) {
        Some(&row) => row,
        None => state.scenario.center_row(),
    }
}
