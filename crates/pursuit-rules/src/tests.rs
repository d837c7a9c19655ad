//! Tests for geometry, move legality, observation gating, win evaluation
//! and fog-of-war visibility.

use proptest::prelude::*;

use pursuit_core::enums::*;
use pursuit_core::scenario::Scenario;
use pursuit_core::state::{MatchState, ScanResult};
use pursuit_core::types::Position;

use crate::geometry::*;
use crate::rules::*;
use crate::visibility::{opponent_visible, side_view};

/// Scenario with 1 km cells so distances equal cell counts.
fn unit_scenario() -> Scenario {
    let mut scenario = Scenario::realistic();
    scenario.km_per_cell_x = 1.0;
    scenario.km_per_cell_y = 1.0;
    scenario.ranges.long_scan = 10.0;
    scenario
}

// ---- Geometry ----

#[test]
fn test_physical_distance_uses_per_axis_scale() {
    let s = Scenario::realistic();
    let origin = Position::new(0, 0);
    assert_eq!(physical_distance(&origin, &Position::new(1, 0), &s), 35.0);
    assert_eq!(physical_distance(&origin, &Position::new(0, 1), &s), 15.0);
    let diagonal = physical_distance(&origin, &Position::new(1, 1), &s);
    assert!((diagonal - (35.0f64 * 35.0 + 15.0 * 15.0).sqrt()).abs() < 1e-9);
    // Not plain Euclidean on cells.
    assert!((diagonal - 2f64.sqrt()).abs() > 1.0);
}

#[test]
fn test_physical_distance_is_symmetric() {
    let s = Scenario::realistic();
    let a = Position::new(3, 9);
    let b = Position::new(12, 1);
    assert_eq!(physical_distance(&a, &b, &s), physical_distance(&b, &a, &s));
}

#[test]
fn test_within_range_epsilon() {
    let s = unit_scenario();
    let a = Position::new(0, 0);
    let b = Position::new(5, 0);
    assert!(within_range(&a, &b, 5.0, &s, 0.0));
    assert!(!within_range(&a, &b, 4.5, &s, 0.0));
    assert!(within_range(&a, &b, 4.5, &s, 1.0));
}

// ---- Legality ----

#[test]
fn test_drift_is_symmetric_about_center() {
    let s = Scenario::realistic();
    assert_eq!(drift_for_row(5, &s), 0);
    assert_eq!(drift_for_row(3, &s), -2);
    assert_eq!(drift_for_row(7, &s), 2);
    assert_eq!(drift_for_row(0, &s), -5);
    assert_eq!(drift_for_row(10, &s), 5);
}

#[test]
fn test_legal_moves_evader_band() {
    let s = Scenario::classic();
    assert_eq!(legal_moves(Side::Evader, 5, &s), vec![0, 1, 2, 3, 4, 5, 6]);
    // At the left edge of the band only non-negative drift is allowed.
    assert_eq!(legal_moves(Side::Evader, 2, &s), vec![3, 4, 5, 6]);
    assert_eq!(legal_moves(Side::Evader, 8, &s), vec![0, 1, 2, 3]);
}

#[test]
fn test_legal_moves_pursuer_map_bounds() {
    let s = Scenario::classic();
    assert_eq!(legal_moves(Side::Pursuer, 1, &s), vec![2, 3, 4, 5, 6]);
    assert_eq!(legal_moves(Side::Pursuer, 10, &s), vec![0, 1, 2, 3]);
    // Pursuer may leave the Evader band but not the map.
    assert!(!legal_move(Side::Pursuer, 2, 0, &Scenario::realistic()));
    assert!(legal_move(Side::Pursuer, 5, 0, &Scenario::realistic()));
}

#[test]
fn test_legal_move_rejects_out_of_range_rows() {
    let s = Scenario::classic();
    assert!(!legal_move(Side::Pursuer, 5, -1, &s));
    assert!(!legal_move(Side::Pursuer, 5, 7, &s));
}

#[test]
fn test_next_position_and_cost() {
    let s = Scenario::realistic();
    let from = Position::new(10, 5);
    assert_eq!(next_position(from, 3, &s), Position::new(8, 3));
    assert_eq!(next_position(from, 5, &s), Position::new(10, 5));
    assert_eq!(maneuver_cost(from, 3), 2);
    assert_eq!(maneuver_cost(from, 5), 0);
    // Same row from off-centre: pure drift, no cost.
    assert_eq!(maneuver_cost(Position::new(10, 8), 8), 0);
}

// ---- Day cycle and observation ----

#[test]
fn test_time_of_day_cycle() {
    assert_eq!(time_of_day(1), TimeOfDay::Night);
    assert_eq!(time_of_day(2), TimeOfDay::Dawn);
    assert_eq!(time_of_day(3), TimeOfDay::Day);
    assert_eq!(time_of_day(4), TimeOfDay::Dusk);
    assert_eq!(time_of_day(5), TimeOfDay::Night);
    assert_eq!(time_of_day(11), TimeOfDay::Day);
}

#[test]
fn test_observation_always_allowed_without_weather() {
    let s = Scenario::realistic();
    for turn in 1..=8 {
        for scan in [ScanType::Short, ScanType::Long] {
            let obs = observation_allowed(turn, Weather::Cloudy, scan, &s);
            assert!(obs.allowed);
            assert!(obs.reason.is_none());
        }
    }
}

#[test]
fn test_observation_blocked_by_clouds() {
    let s = Scenario::hardcore();
    for turn in 1..=8 {
        for scan in [ScanType::Short, ScanType::Long] {
            let obs = observation_allowed(turn, Weather::Cloudy, scan, &s);
            assert!(!obs.allowed);
            assert!(obs.reason.is_some());
        }
    }
}

#[test]
fn test_observation_by_time_of_day() {
    let s = Scenario::hardcore();
    for turn in 1..=12 {
        let short = observation_allowed(turn, Weather::Clear, ScanType::Short, &s).allowed;
        let long = observation_allowed(turn, Weather::Clear, ScanType::Long, &s).allowed;
        match time_of_day(turn) {
            TimeOfDay::Night => assert!(short && long, "turn {turn}"),
            TimeOfDay::Dawn | TimeOfDay::Dusk => assert!(short && !long, "turn {turn}"),
            TimeOfDay::Day => assert!(!short && !long, "turn {turn}"),
        }
    }
}

// ---- Range predicates ----

#[test]
fn test_capture_range() {
    let s = Scenario::classic();
    let a = Position::new(5, 3);
    assert!(within_capture_range(&a, &Position::new(6, 3), &s)); // 35 km
    assert!(within_capture_range(&a, &Position::new(6, 5), &s)); // ~46 km
    assert!(within_capture_range(&a, &Position::new(5, 0), &s)); // 45 km
    assert!(!within_capture_range(&a, &Position::new(7, 3), &s)); // 70 km
    assert!(!within_capture_range(&a, &Position::new(5, 7), &s)); // 60 km
}

#[test]
fn test_visual_range() {
    let s = Scenario::realistic();
    let a = Position::new(10, 5);
    assert!(within_visual_range(&a, &Position::new(8, 5), &s)); // 70 km
    assert!(!within_visual_range(&a, &Position::new(7, 5), &s)); // 105 km
}

#[test]
fn test_scan_covers_boundary_inclusive() {
    let s = Scenario::realistic();
    // 5 columns * 35 km = exactly the 175 km radius.
    assert!(scan_covers(&Position::new(10, 5), &Position::new(15, 5), &s));

    let s = unit_scenario();
    let center = Position::new(0, 5);
    assert!(scan_covers(&center, &Position::new(10, 5), &s));
    assert!(scan_covers(&center, &Position::new(11, 5), &s));
    assert!(!scan_covers(&center, &Position::new(12, 5), &s));
}

// ---- Win condition ----

#[test]
fn test_win_condition() {
    let s = Scenario::classic();
    let pursuer = evaluate_win_condition(2, 5, &s);
    assert_eq!(pursuer.phase, MatchPhase::GameOver);
    assert_eq!(pursuer.winner, Some(Side::Pursuer));

    let playing = evaluate_win_condition(1, 15, &s);
    assert_eq!(playing.phase, MatchPhase::Playing);
    assert_eq!(playing.winner, None);

    let evader = evaluate_win_condition(1, 16, &s);
    assert_eq!(evader.winner, Some(Side::Evader));

    // Capture takes precedence over the turn limit.
    assert_eq!(evaluate_win_condition(2, 16, &s).winner, Some(Side::Pursuer));
}

// ---- Visibility ----

#[test]
fn test_visibility_without_fog() {
    let state = MatchState::new(Scenario::classic(), Mode::Hotseat);
    assert!(opponent_visible(&state, Side::Evader));
    assert!(opponent_visible(&state, Side::Pursuer));
}

#[test]
fn test_fog_hides_distant_opponent() {
    let mut state = MatchState::new(Scenario::realistic(), Mode::Hotseat);
    assert!(!opponent_visible(&state, Side::Pursuer));
    assert_eq!(side_view(&state, Side::Pursuer).opponent_position, None);

    state.positions.pursuer = Position::new(8, 5);
    assert!(opponent_visible(&state, Side::Pursuer));
    assert!(opponent_visible(&state, Side::Evader));
}

#[test]
fn test_fog_lifted_by_exact_detection() {
    let mut state = MatchState::new(Scenario::realistic(), Mode::Hotseat);
    state.last_scan.pursuer = Some(ScanResult {
        turn: 1,
        scan_type: ScanType::Long,
        detected_column: None,
        detected_pos: Some(state.positions.evader),
        scanned_area: None,
    });
    let view = side_view(&state, Side::Pursuer);
    assert_eq!(view.opponent_position, Some(Position::new(10, 5)));
    // The Evader learned nothing.
    assert!(!opponent_visible(&state, Side::Evader));

    // A stale detection does not reveal the moved opponent.
    state.positions.evader = Position::new(11, 6);
    assert!(!opponent_visible(&state, Side::Pursuer));
}

#[test]
fn test_fog_lifted_after_game_over() {
    let mut state = MatchState::new(Scenario::realistic(), Mode::Hotseat);
    state.phase = MatchPhase::GameOver;
    assert!(opponent_visible(&state, Side::Evader));
}

// ---- Properties ----

fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (3u32..40, 1u32..11).prop_flat_map(|(grid_w, half_h)| {
        let grid_h = half_h * 2 + 1;
        (0..grid_w as i32).prop_flat_map(move |min| {
            (min..grid_w as i32).prop_map(move |max| Scenario {
                grid_w,
                grid_h,
                a_min_x: min,
                a_max_x: max,
                ..Scenario::classic()
            })
        })
    })
}

proptest! {
    #[test]
    fn prop_legal_moves_respect_bounds(scenario in arb_scenario(), offset in 0i32..40) {
        let evader_x = scenario.a_min_x + offset % (scenario.a_max_x - scenario.a_min_x + 1);
        for row in legal_moves(Side::Evader, evader_x, &scenario) {
            let x = next_position(Position::new(evader_x, 0), row, &scenario).x;
            prop_assert!(x >= scenario.a_min_x && x <= scenario.a_max_x);
        }

        let pursuer_x = offset % scenario.grid_w as i32;
        let rows = legal_moves(Side::Pursuer, pursuer_x, &scenario);
        prop_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        for row in rows {
            let x = next_position(Position::new(pursuer_x, 0), row, &scenario).x;
            prop_assert!(x >= 0 && x < scenario.grid_w as i32);
            prop_assert!(row >= 0 && row < scenario.grid_h as i32);
        }
    }

    #[test]
    fn prop_center_row_always_legal_inside_bounds(scenario in arb_scenario(), offset in 0i32..40) {
        let evader_x = scenario.a_min_x + offset % (scenario.a_max_x - scenario.a_min_x + 1);
        prop_assert!(legal_move(Side::Evader, evader_x, scenario.center_row(), &scenario));
    }
}
