//! Tabular Q-learning
//!
//! Temporal difference control for the maze: the agent acts with an ε-greedy
//! behavior policy but bootstraps its targets from the greedy policy, which
//! makes the update off-policy.
//!
//! | Aspect | Behavior policy | Target policy |
//! |--------|-----------------|---------------|
//! | Used for | Choosing training actions | Update target, evaluation |
//! | Rule | ε-greedy | argmax_a Q(s,a) |
//! | Randomness | Exploration + tie-breaks | Tie-breaks only |
//!
//! ## Usage Example
//!
//! ```no_run
//! use qmaze::{gridworld::MazeEnv, q_learning::QLearningAgent};
//!
//! let mut env = MazeEnv::default();
//! let mut agent = QLearningAgent::new(
//!     0.1, // learning_rate
//!     0.9, // discount_factor
//!     0.1, // epsilon
//! )
//! .with_seed(7);
//!
//! let state = env.reset();
//! let action = agent.choose_action(state, true);
//! let step = env.step(action);
//! agent.update(state, action, step.reward, step.position);
//! ```

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::QLearningAgent;
pub use q_table::{ActionValues, QTable};
