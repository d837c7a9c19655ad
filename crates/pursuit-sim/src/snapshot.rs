//! Projects the match state into the public snapshot.

use pursuit_core::state::{MatchSnapshot, MatchState};
use pursuit_rules::rules::time_of_day;

/// Build the snapshot for the presentation layer. The Evader's pending move
/// is deliberately left out.
pub fn build_snapshot(state: &MatchState, ai_thinking: bool) -> MatchSnapshot {
    MatchSnapshot {
        scenario_id: state.scenario.id.clone(),
        mode: state.mode,
        human_side: state.mode.human_side(),
        phase: state.phase,
        side_to_act: state.side_to_act,
        positions: state.positions,
        turn: state.turn,
        capture_count: state.capture_count,
        winner: state.winner,
        resources: state.resources,
        last_scan: state.last_scan,
        previous_scan: state.previous_scan,
        has_performed_scan: state.has_performed_scan,
        weather: state.weather,
        time_of_day: time_of_day(state.turn),
        is_human_turn: state.is_human_turn(),
        ai_thinking,
    }
}
