//! Engine configuration.
//!
//! The board geometry is fixed; what a table may choose is who starts,
//! how the die is seeded, which loop cells are safe from capture, and
//! whether consecutive sixes are capped.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Which shared-loop cells protect their occupants from capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafeCellPolicy {
    /// Only the four entry cells.
    EntryCells,
    /// Entry cells plus the star cell eight steps past each entry.
    #[default]
    EntryAndStarCells,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoConfig {
    /// Color that takes the first turn of every new game.
    #[serde(default = "default_start_color")]
    pub start_color: Color,

    /// Die seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Safe-cell set used by capture resolution.
    #[serde(default)]
    pub safe_cells: SafeCellPolicy,

    /// Maximum consecutive sixes that keep the turn (`None` = unbounded).
    /// When the cap-th six is consumed the turn passes anyway.
    #[serde(default)]
    pub six_streak_cap: Option<u8>,
}

fn default_start_color() -> Color {
    Color::Green
}

impl Default for LudoConfig {
    fn default() -> Self {
        Self {
            start_color: default_start_color(),
            seed: None,
            safe_cells: SafeCellPolicy::default(),
            six_streak_cap: None,
        }
    }
}

impl LudoConfig {
    /// Set the starting color.
    pub fn with_start_color(mut self, color: Color) -> Self {
        self.start_color = color;
        self
    }

    /// Set a fixed die seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the safe-cell policy.
    pub fn with_safe_cells(mut self, policy: SafeCellPolicy) -> Self {
        self.safe_cells = policy;
        self
    }

    /// Cap consecutive bonus rolls. A cap of 0 is treated as unbounded.
    pub fn with_six_streak_cap(mut self, cap: u8) -> Self {
        self.six_streak_cap = (cap > 0).then_some(cap);
        self
    }
}
