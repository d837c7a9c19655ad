//! Game constants and tuning parameters.

// --- Maneuvering ---

/// Fuel spent per row of vertical displacement. Lateral drift is free.
pub const FUEL_PER_ROW: u32 = 1;

// --- Geometry ---

/// Tolerance (km) applied to long-scan coverage so targets on the drawn
/// boundary are included.
pub const SCAN_TOLERANCE_KM: f64 = 1.0;

/// Tolerance (km) applied to capture and visual range checks.
pub const CAPTURE_TOLERANCE_KM: f64 = 0.0;

/// Horizontal scale used by scenarios that do not care about physical units.
pub const DEFAULT_KM_PER_CELL_X: f64 = 35.0;

/// Vertical scale used by scenarios that do not care about physical units.
pub const DEFAULT_KM_PER_CELL_Y: f64 = 15.0;

// --- Weather ---

/// Probability that a clear sky turns cloudy at the end of a round.
pub const WEATHER_CLEAR_TO_CLOUDY: f64 = 0.15;

/// Probability that a cloudy sky clears at the end of a round.
pub const WEATHER_CLOUDY_TO_CLEAR: f64 = 0.6;

// --- AI scoring ---

/// Weight applied to physical distance (km) in both heuristics.
pub const AI_DISTANCE_WEIGHT: f64 = 10.0;

/// Pursuer bonus for ending adjacent (Chebyshev <= 1) to the target.
pub const AI_LOCK_BONUS: f64 = 120.0;

/// Extra Pursuer bonus when that lock would also win the match this round.
pub const AI_WIN_BONUS: f64 = 100.0;

/// Chebyshev radius the Pursuer heuristic treats as "locked on".
pub const AI_LOCK_RADIUS_CELLS: i32 = 1;

/// Scores closer than this are treated as ties.
pub const AI_SCORE_EPSILON: f64 = 1e-9;

// --- Orchestration ---

/// Presentational "thinking" delay before the AI commits (milliseconds).
pub const AI_THINK_DELAY_MS: u64 = 600;

/// Game-loop poll interval (milliseconds).
pub const LOOP_POLL_INTERVAL_MS: u64 = 16;
