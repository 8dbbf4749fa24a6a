//! Tabular Q-learning in a deterministic grid maze
//!
//! This crate provides:
//! - A grid-world environment with obstacles, a start and a goal cell
//! - A Q-learning agent with an ε-greedy behavior policy and a lazily
//!   populated Q-table
//! - A training pipeline with composable observers and greedy rollouts
//! - Training-curve statistics and CSV export
//! - A command-line front-end (`qmaze`)

pub mod analysis;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod gridworld;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use gridworld::{Action, Maze, MazeEnv, StepResult};
pub use q_learning::{QLearningAgent, QTable};
pub use types::{Position, Transition};
