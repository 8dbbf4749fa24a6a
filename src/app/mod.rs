//! Application-level configuration and wiring.
//!
//! Builds validated agents and environments from configuration values so the
//! CLI and the tests construct them the same way.

pub mod config;

pub use config::AgentConfig;

use crate::{
    Result,
    gridworld::{Maze, MazeEnv},
    q_learning::QLearningAgent,
};

/// Create a Q-learning agent from a validated configuration.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] if any hyperparameter is
/// out of range.
pub fn build_agent(config: &AgentConfig) -> Result<QLearningAgent> {
    QLearningAgent::from_config(config)
}

/// Create an environment for `maze`, or for the classic layout when `None`.
pub fn build_env(maze: Option<Maze>) -> MazeEnv {
    MazeEnv::new(maze.unwrap_or_default())
}
