//! Greedy evaluation rollouts

use serde::{Deserialize, Serialize};

use crate::{
    gridworld::{Action, MazeEnv},
    ports::Learner,
    types::Position,
};

/// Default step cap for an evaluation rollout
pub const DEFAULT_ROLLOUT_STEPS: usize = 20;

/// One greedy episode from the start cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollout {
    /// Visited positions, starting with the start cell
    pub path: Vec<Position>,
    /// Actions taken, one per step
    pub actions: Vec<Action>,
    /// Reward of each step
    pub rewards: Vec<f64>,
    pub total_reward: f64,
    pub steps: usize,
    pub reached_goal: bool,
}

/// Follow the learner's greedy policy from the start cell for at most
/// `max_steps` steps. The learner is not updated.
pub fn greedy_rollout(env: &mut MazeEnv, learner: &mut dyn Learner, max_steps: usize) -> Rollout {
    let mut state = env.reset();
    let mut rollout = Rollout {
        path: vec![state],
        actions: Vec::new(),
        rewards: Vec::new(),
        total_reward: 0.0,
        steps: 0,
        reached_goal: false,
    };

    while rollout.steps < max_steps {
        let action = learner.greedy_action(state);
        let outcome = env.step(action);

        rollout.path.push(outcome.position);
        rollout.actions.push(action);
        rollout.rewards.push(outcome.reward);
        rollout.total_reward += outcome.reward;
        rollout.steps += 1;
        state = outcome.position;

        if outcome.terminated {
            rollout.reached_goal = true;
            break;
        }
    }

    rollout
}
