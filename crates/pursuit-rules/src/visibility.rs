//! Fog of war: what each side may see of its opponent.

use pursuit_core::enums::Side;
use pursuit_core::state::{MatchState, SideView};

use crate::rules::within_visual_range;

/// Whether `viewer` can currently see the opponent's public position.
///
/// Visible when fog is off, the match is over, both sides are within
/// visual range, or the viewer's last scan pinned the opponent's cell.
pub fn opponent_visible(state: &MatchState, viewer: Side) -> bool {
    if !state.scenario.fog_of_war || !state.is_playing() {
        return true;
    }

    let own = state.position(viewer);
    let opponent = state.position(viewer.opponent());
    if within_visual_range(&own, &opponent, &state.scenario) {
        return true;
    }

    state.last_scan[viewer]
        .and_then(|scan| scan.detected_pos)
        .is_some_and(|pos| pos == opponent)
}

/// The match as seen by `viewer`.
pub fn side_view(state: &MatchState, viewer: Side) -> SideView {
    SideView {
        viewer,
        own_position: state.position(viewer),
        opponent_position: opponent_visible(state, viewer)
            .then(|| state.position(viewer.opponent())),
        last_scan: state.last_scan[viewer],
        previous_scan: state.previous_scan[viewer],
    }
}
