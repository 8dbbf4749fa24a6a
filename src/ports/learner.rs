//! Learner port - abstraction over agents that act in the maze
//!
//! This port defines what the training pipeline needs from an agent:
//! - a behavior policy used while training
//! - a greedy (target) policy used for evaluation rollouts
//! - a hook that feeds each transition back for learning

use crate::{
    Result,
    gridworld::Action,
    types::{Position, Transition},
};

/// Learner trait - Unified interface for maze agents
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - a boundary
/// between the training loop and concrete agents. Tabular Q-learning and
/// the random baseline are **adapters** that implement this port.
///
/// # Examples
///
/// ```no_run
/// use qmaze::{gridworld::MazeEnv, ports::Learner};
///
/// fn walk<L: Learner>(agent: &mut L, env: &mut MazeEnv) {
///     let state = env.reset();
///     let action = agent.select_action(state);
///     let _ = env.step(action);
/// }
/// ```
pub trait Learner: Send {
    /// Choose an action with the behavior policy (may explore).
    fn select_action(&mut self, state: Position) -> Action;

    /// Choose an action with the greedy policy (no exploration).
    fn greedy_action(&mut self, state: Position) -> Action;

    /// Learn from a single transition.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive baselines.
    fn learn(&mut self, _transition: &Transition) -> Result<()> {
        Ok(())
    }

    /// Called by the pipeline after every episode (e.g. to decay ε).
    fn end_episode(&mut self) {}

    /// Get the learner's name.
    ///
    /// Used for identification in summaries and logging.
    fn name(&self) -> &str;

    /// Reset learner state to initial conditions.
    ///
    /// Adaptive learners should clear what they have learned; stateless
    /// learners can use the default no-op implementation.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Action values for a state, if the learner keeps any.
    ///
    /// # Returns
    ///
    /// * `Some(values)` - indexed by [`Action::index`]
    /// * `None` - for learners without explicit values
    fn action_values(&self, _state: Position) -> Option<[f64; Action::COUNT]> {
        None
    }

    /// Current exploration rate, if the learner has one.
    fn exploration_rate(&self) -> Option<f64> {
        None
    }

    /// Seed the learner's internal random number generator.
    ///
    /// Training pipelines call this method when supplied with a deterministic
    /// seed to ensure reproducible results.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
