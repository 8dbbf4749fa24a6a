//! Deterministic grid-world maze
//!
//! The environment owns the agent's position and assigns rewards:
//! - stepping off the grid or into an obstacle keeps the agent in place (−1)
//! - reaching the goal ends the episode (+100)
//! - every other move costs a small step penalty (−0.1)

pub mod action;
pub mod environment;
pub mod maze;
pub mod render;

pub use action::Action;
pub use environment::{COLLISION_PENALTY, GOAL_REWARD, MazeEnv, STEP_PENALTY, StepResult};
pub use maze::Maze;
pub use render::{MazeView, PathView};
