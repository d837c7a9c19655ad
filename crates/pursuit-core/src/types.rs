//! Fundamental grid types.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// A cell on the match grid.
/// x = column (lateral), y = row (orbit layer, 0 at the top).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance in cells (max of the absolute axis deltas).
    pub fn chebyshev_to(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Whether this cell lies on a `width` x `height` grid.
    pub fn on_grid(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

/// A fixed pair of values, one per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub evader: T,
    pub pursuer: T,
}

impl<T> SideMap<T> {
    pub fn new(evader: T, pursuer: T) -> Self {
        Self { evader, pursuer }
    }

    /// Iterate `(side, value)` pairs, Evader first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Evader, &self.evader), (Side::Pursuer, &self.pursuer)].into_iter()
    }
}

impl<T: Clone> SideMap<T> {
    /// Both sides start from the same value.
    pub fn splat(value: T) -> Self {
        Self {
            evader: value.clone(),
            pursuer: value,
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Evader => &self.evader,
            Side::Pursuer => &self.pursuer,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Evader => &mut self.evader,
            Side::Pursuer => &mut self.pursuer,
        }
    }
}
