//! Physical distances over the grid.
//!
//! Grid cells are not square: a horizontal step and a vertical step cover
//! different distances, so capture and scan math runs in kilometres.

use glam::DVec2;

use pursuit_core::scenario::Scenario;
use pursuit_core::types::Position;

/// Physical displacement from `p1` to `p2` in km, per axis.
pub fn physical_offset(p1: &Position, p2: &Position, scenario: &Scenario) -> DVec2 {
    DVec2::new(
        f64::from(p2.x - p1.x) * scenario.km_per_cell_x,
        f64::from(p2.y - p1.y) * scenario.km_per_cell_y,
    )
}

/// Euclidean distance in km with independent horizontal and vertical scale.
pub fn physical_distance(p1: &Position, p2: &Position, scenario: &Scenario) -> f64 {
    physical_offset(p1, p2, scenario).length()
}

/// True iff the physical distance is at most `range_km + epsilon`.
pub fn within_range(
    p1: &Position,
    p2: &Position,
    range_km: f64,
    scenario: &Scenario,
    epsilon: f64,
) -> bool {
    physical_distance(p1, p2, scenario) <= range_km + epsilon
}

/// Chebyshev distance in cells. Heuristics only, never for win checks.
pub fn chebyshev_distance(p1: &Position, p2: &Position) -> i32 {
    p1.chebyshev_to(p2)
}
