//! Value types shared by the environment and the learner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gridworld::Action;

/// A cell of the maze, addressed by 0-indexed `(row, col)`.
///
/// Ordering is row-major, which gives Q-table excerpts and state listings a
/// stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed `(d_row, d_col)` delta.
    ///
    /// Returns `None` when either coordinate would become negative. The upper
    /// bound depends on the maze and is checked there.
    pub fn offset(self, delta: (isize, isize)) -> Option<Position> {
        let row = self.row.checked_add_signed(delta.0)?;
        let col = self.col.checked_add_signed(delta.1)?;
        Some(Position { row, col })
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One `(s, a, r, s')` experience, plus whether `s'` ended the episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: Position,
    pub action: Action,
    pub reward: f64,
    pub next_state: Position,
    pub done: bool,
}
