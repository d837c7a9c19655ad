//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Side A: confined to its lateral band, wins by surviving.
    #[default]
    Evader,
    /// Side B: free to roam, wins by sustained proximity.
    Pursuer,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Evader => Side::Pursuer,
            Side::Pursuer => Side::Evader,
        }
    }

    /// Short display label ("A" / "B").
    pub fn label(self) -> &'static str {
        match self {
            Side::Evader => "A",
            Side::Pursuer => "B",
        }
    }
}

/// Who controls the sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Mode {
    /// Both sides are human, sharing the device.
    #[default]
    Hotseat,
    /// One side is human, the other is driven by the heuristic AI.
    Ai { human: Side },
}

impl Mode {
    /// The human-controlled side in AI mode, `None` in hotseat.
    pub fn human_side(self) -> Option<Side> {
        match self {
            Mode::Hotseat => None,
            Mode::Ai { human } => Some(human),
        }
    }

    /// The AI-controlled side in AI mode, `None` in hotseat.
    pub fn ai_side(self) -> Option<Side> {
        self.human_side().map(Side::opponent)
    }

    /// Whether `side` is driven by a human in this mode.
    pub fn is_human(self, side: Side) -> bool {
        match self {
            Mode::Hotseat => true,
            Mode::Ai { human } => human == side,
        }
    }
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Playing,
    /// Terminal. Only start/reset commands are accepted.
    GameOver,
}

/// Sky condition, relevant only when the scenario enables weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Cloudy,
}

/// Position in the four-turn day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Night,
    Dawn,
    Day,
    Dusk,
}

/// Reconnaissance action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanType {
    /// Reveals the opponent's column only.
    Short,
    /// Reveals the opponent's exact cell if it lies inside the queried circle.
    Long,
}
