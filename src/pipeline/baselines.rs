//! Non-learning baseline agents

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{Result, gridworld::Action, ports::Learner, types::Position};

/// Random policy learner (uniform over the four actions, never learns)
pub struct RandomLearner {
    name: String,
    rng: StdRng,
}

impl RandomLearner {
    /// Create a new random learner
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random learner with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_action(&mut self) -> Action {
        Action::ALL[self.rng.random_range(0..Action::COUNT)]
    }
}

impl Learner for RandomLearner {
    fn select_action(&mut self, _state: Position) -> Action {
        self.random_action()
    }

    fn greedy_action(&mut self, _state: Position) -> Action {
        self.random_action()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
