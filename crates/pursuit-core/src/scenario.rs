//! Scenario definitions: the immutable configuration of a match.
//!
//! A scenario bundles the map size, the Evader's lateral band, win and turn
//! thresholds, starting cells, physical scale, range thresholds and feature
//! flags. Presets are plain constructors; a custom scenario can be parsed
//! from JSON and is validated before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_KM_PER_CELL_X, DEFAULT_KM_PER_CELL_Y};
use crate::types::Position;

/// Smallest playable grid edge.
const MIN_GRID_EDGE: u32 = 3;

/// Physical range thresholds (km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeThresholds {
    /// Capture ("identification") distance.
    pub identification: f64,
    /// Mutual visibility distance.
    pub visual: f64,
    /// Long-scan circle radius.
    pub long_scan: f64,
}

/// Observation cost charged to the resource ledger per scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationCost {
    pub short: u32,
    pub long: u32,
}

/// Immutable configuration for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub grid_w: u32,
    pub grid_h: u32,
    /// Evader's permitted column band, inclusive.
    pub a_min_x: i32,
    pub a_max_x: i32,
    /// Consecutive in-range rounds the Pursuer needs to win.
    pub win_time: u32,
    /// Last turn the Evader must survive.
    pub max_turns: u32,
    pub initial_a_pos: Position,
    pub initial_b_pos: Position,
    pub km_per_cell_x: f64,
    pub km_per_cell_y: f64,
    pub ranges: RangeThresholds,
    pub fog_of_war: bool,
    pub weather_enabled: bool,
    /// Informational drift rate per orbit layer.
    #[serde(default)]
    pub drift_per_layer: f64,
    #[serde(default)]
    pub observation_cost: ObservationCost,
}

/// Reasons a scenario cannot be played.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("grid {width}x{height} is smaller than {min}x{min}")]
    GridTooSmall { width: u32, height: u32, min: u32 },
    #[error("grid height {0} is even; a single centre row is required")]
    EvenGridHeight(u32),
    #[error("evader band [{min}, {max}] does not fit a grid of width {width}")]
    InvalidEvaderBand { min: i32, max: i32, width: u32 },
    #[error("initial position {pos:?} for side {side} is not playable")]
    InvalidInitialPosition { side: &'static str, pos: Position },
    #[error("{0} must be at least 1")]
    ZeroThreshold(&'static str),
    #[error("{0} must be a positive distance")]
    NonPositiveDistance(&'static str),
    #[error("malformed scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Scenario {
    /// Small fog-free preset.
    pub fn classic() -> Self {
        Self {
            id: "classic".into(),
            name: "Classic".into(),
            description: "Small map, no fog of war.".into(),
            grid_w: 11,
            grid_h: 7,
            a_min_x: 2,
            a_max_x: 8,
            win_time: 2,
            max_turns: 15,
            initial_a_pos: Position::new(5, 3),
            initial_b_pos: Position::new(1, 3),
            km_per_cell_x: DEFAULT_KM_PER_CELL_X,
            km_per_cell_y: DEFAULT_KM_PER_CELL_Y,
            ranges: RangeThresholds {
                identification: 50.0,
                visual: 100.0,
                long_scan: 175.0,
            },
            fog_of_war: false,
            weather_enabled: false,
            drift_per_layer: 0.0,
            observation_cost: ObservationCost::default(),
        }
    }

    /// Larger map with fog of war and reconnaissance.
    pub fn realistic() -> Self {
        Self {
            id: "realistic".into(),
            name: "Realistic".into(),
            description: "Large 21x11 map with fog of war and reconnaissance.".into(),
            grid_w: 21,
            grid_h: 11,
            a_min_x: 5,
            a_max_x: 14,
            win_time: 2,
            max_turns: 20,
            initial_a_pos: Position::new(10, 5),
            initial_b_pos: Position::new(2, 5),
            km_per_cell_x: DEFAULT_KM_PER_CELL_X,
            km_per_cell_y: DEFAULT_KM_PER_CELL_Y,
            ranges: RangeThresholds {
                identification: 50.0,
                visual: 100.0,
                long_scan: 175.0,
            },
            fog_of_war: true,
            weather_enabled: false,
            drift_per_layer: 0.05,
            observation_cost: ObservationCost { short: 1, long: 2 },
        }
    }

    /// Realistic map plus day/night and weather gating, longer match.
    pub fn hardcore() -> Self {
        Self {
            id: "hardcore".into(),
            name: "Hardcore".into(),
            description: "Fog of war, day/night cycle and weather. Longer match.".into(),
            max_turns: 30,
            weather_enabled: true,
            ..Self::realistic()
        }
    }

    /// Editable sandbox, seeded from the realistic preset.
    pub fn custom() -> Self {
        Self {
            id: "custom".into(),
            name: "Custom".into(),
            description: "User customized rules configuration.".into(),
            ..Self::realistic()
        }
    }

    /// Named presets in menu order.
    pub fn presets() -> Vec<Scenario> {
        vec![Self::classic(), Self::realistic(), Self::hardcore()]
    }

    /// Look up a preset (or the custom template) by id.
    pub fn by_id(id: &str) -> Option<Scenario> {
        match id {
            "classic" => Some(Self::classic()),
            "realistic" => Some(Self::realistic()),
            "hardcore" => Some(Self::hardcore()),
            "custom" => Some(Self::custom()),
            _ => None,
        }
    }

    /// Parse a scenario from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Scenario, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Row whose selection implies zero lateral drift.
    pub fn center_row(&self) -> i32 {
        (self.grid_h as i32 - 1) / 2
    }

    /// Check that the scenario describes a playable match.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.grid_w < MIN_GRID_EDGE || self.grid_h < MIN_GRID_EDGE {
            return Err(ScenarioError::GridTooSmall {
                width: self.grid_w,
                height: self.grid_h,
                min: MIN_GRID_EDGE,
            });
        }
        if self.grid_h % 2 == 0 {
            return Err(ScenarioError::EvenGridHeight(self.grid_h));
        }
        if self.a_min_x < 0 || self.a_min_x > self.a_max_x || self.a_max_x >= self.grid_w as i32 {
            return Err(ScenarioError::InvalidEvaderBand {
                min: self.a_min_x,
                max: self.a_max_x,
                width: self.grid_w,
            });
        }

        let a = self.initial_a_pos;
        if !a.on_grid(self.grid_w, self.grid_h) || a.x < self.a_min_x || a.x > self.a_max_x {
            return Err(ScenarioError::InvalidInitialPosition { side: "A", pos: a });
        }
        let b = self.initial_b_pos;
        if !b.on_grid(self.grid_w, self.grid_h) {
            return Err(ScenarioError::InvalidInitialPosition { side: "B", pos: b });
        }

        if self.win_time == 0 {
            return Err(ScenarioError::ZeroThreshold("win_time"));
        }
        if self.max_turns == 0 {
            return Err(ScenarioError::ZeroThreshold("max_turns"));
        }

        let distances = [
            ("km_per_cell_x", self.km_per_cell_x),
            ("km_per_cell_y", self.km_per_cell_y),
            ("ranges.identification", self.ranges.identification),
            ("ranges.visual", self.ranges.visual),
            ("ranges.long_scan", self.ranges.long_scan),
        ];
        for (field, value) in distances {
            if value.is_nan() || value <= 0.0 {
                return Err(ScenarioError::NonPositiveDistance(field));
            }
        }
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::classic()
    }
}
