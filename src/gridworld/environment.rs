//! Maze environment: position state, transitions and rewards

use serde::{Deserialize, Serialize};

use super::{Action, Maze};
use crate::types::Position;

/// Reward for the transition that enters the goal
pub const GOAL_REWARD: f64 = 100.0;

/// Reward for an ordinary move into a free cell
pub const STEP_PENALTY: f64 = -0.1;

/// Reward for bumping into the outer wall or an obstacle
pub const COLLISION_PENALTY: f64 = -1.0;

/// Outcome of a single [`MazeEnv::step`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Position after the move (unchanged when the move was blocked)
    pub position: Position,
    pub reward: f64,
    /// The goal was reached
    pub terminated: bool,
}

/// Deterministic grid-world environment
#[derive(Debug, Clone)]
pub struct MazeEnv {
    maze: Maze,
    position: Position,
}

impl MazeEnv {
    /// Create an environment positioned on the maze's start cell
    pub fn new(maze: Maze) -> Self {
        let position = maze.start();
        Self { maze, position }
    }

    /// Move the agent back to the start cell and return it.
    pub fn reset(&mut self) -> Position {
        self.position = self.maze.start();
        self.position
    }

    /// Apply `action` from the current position.
    ///
    /// Blocked moves (off the grid or into an obstacle) leave the position
    /// untouched and never terminate the episode.
    pub fn step(&mut self, action: Action) -> StepResult {
        let candidate = self
            .position
            .offset(action.delta())
            .filter(|pos| self.maze.in_bounds(*pos));

        let next = match candidate {
            Some(pos) if !self.maze.is_obstacle(pos) => pos,
            _ => {
                return StepResult {
                    position: self.position,
                    reward: COLLISION_PENALTY,
                    terminated: false,
                };
            }
        };

        self.position = next;

        if next == self.maze.goal() {
            StepResult {
                position: next,
                reward: GOAL_REWARD,
                terminated: true,
            }
        } else {
            StepResult {
                position: next,
                reward: STEP_PENALTY,
                terminated: false,
            }
        }
    }

    /// All states the agent can occupy, in row-major order
    pub fn all_states(&self) -> Vec<Position> {
        self.maze.open_cells()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }
}

impl Default for MazeEnv {
    fn default() -> Self {
        Self::new(Maze::classic())
    }
}
