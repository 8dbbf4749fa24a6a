//! The closed set of moves available to the agent

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit move on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

/// `(d_row, d_col)` for each action, indexed by [`Action::index`]
const DELTAS: [(isize, isize); Action::COUNT] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Action {
    /// Number of actions
    pub const COUNT: usize = 4;

    /// All actions in table order
    pub const ALL: [Action; Action::COUNT] =
        [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Slot of this action in per-state value arrays
    pub const fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Signed `(d_row, d_col)` displacement
    pub const fn delta(self) -> (isize, isize) {
        DELTAS[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
