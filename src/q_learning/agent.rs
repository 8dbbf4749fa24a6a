//! Q-learning agent
//!
//! ε-greedy behavior policy over a lazily populated Q-table, updated with the
//! off-policy Q-learning rule.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    app::AgentConfig,
    gridworld::Action,
    ports::Learner,
    q_learning::q_table::{ActionValues, QTable},
    types::{Position, Transition},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control)
///
/// Learns the optimal Q* function by always updating toward the maximum
/// next-state value, regardless of the action the behavior policy takes next.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    initial_epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a new Q-learning agent with constant exploration
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α parameter (0.0 to 1.0)
    /// * `discount_factor` - γ parameter (0.0 to 1.0)
    /// * `epsilon` - Exploration probability ε
    pub fn new(learning_rate: f64, discount_factor: f64, epsilon: f64) -> Self {
        Self {
            q_table: QTable::new(learning_rate, discount_factor),
            epsilon,
            initial_epsilon: epsilon,
            epsilon_decay: 1.0,
            min_epsilon: 0.0,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Create an agent from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if a hyperparameter is
    /// out of range.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        config.validate()?;
        let agent = Self::new(config.learning_rate, config.discount_factor, config.epsilon)
            .with_epsilon_decay(config.epsilon_decay, config.min_epsilon);
        Ok(match config.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Multiplicative ε decay per episode, floored at `min_epsilon`
    pub fn with_epsilon_decay(mut self, decay: f64, min_epsilon: f64) -> Self {
        self.epsilon_decay = decay;
        self.min_epsilon = min_epsilon;
        self
    }

    /// ε-greedy action selection
    ///
    /// With `explore` set, a uniform draw below ε picks a uniformly random
    /// action. Otherwise the highest-valued action is returned, with exact
    /// ties split uniformly at random.
    pub fn choose_action(&mut self, state: Position, explore: bool) -> Action {
        if explore && self.rng.random::<f64>() < self.epsilon {
            // Explore: random action
            *Action::ALL.choose(&mut self.rng).unwrap_or(&Action::ALL[0])
        } else {
            // Exploit: greedy action based on Q-values
            self.q_table.greedy_action(state, &mut self.rng)
        }
    }

    /// Greedy policy: `choose_action(state, false)`
    pub fn policy(&mut self, state: Position) -> Action {
        self.choose_action(state, false)
    }

    /// max_a Q(state, a), 0.0 for a state that has never been updated
    pub fn max_value(&self, state: Position) -> f64 {
        self.q_table.max_q(state)
    }

    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') − Q(s,a)]
    pub fn update(&mut self, state: Position, action: Action, reward: f64, next_state: Position) {
        self.q_table
            .q_learning_update(state, action, reward, next_state);
    }

    pub fn q_value(&self, state: Position, action: Action) -> f64 {
        self.q_table.get(state, action)
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn q_table_size(&self) -> usize {
        self.q_table.size()
    }

    /// Decay epsilon after episode
    fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    fn reset_rng(&mut self) {
        self.rng = build_rng(self.rng_seed);
    }
}

impl Learner for QLearningAgent {
    fn select_action(&mut self, state: Position) -> Action {
        self.choose_action(state, true)
    }

    fn greedy_action(&mut self, state: Position) -> Action {
        self.policy(state)
    }

    fn learn(&mut self, transition: &Transition) -> Result<()> {
        self.update(
            transition.state,
            transition.action,
            transition.reward,
            transition.next_state,
        );
        Ok(())
    }

    fn end_episode(&mut self) {
        self.decay_epsilon();
    }

    fn name(&self) -> &str {
        "Q-Learning"
    }

    fn reset(&mut self) -> Result<()> {
        self.q_table.reset();
        self.epsilon = self.initial_epsilon;
        self.reset_rng();
        Ok(())
    }

    fn action_values(&self, state: Position) -> Option<ActionValues> {
        Some(self.q_table.values(state))
    }

    fn exploration_rate(&self) -> Option<f64> {
        Some(self.epsilon)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        Ok(())
    }
}
