//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use rand::{Rng, seq::IndexedRandom};

use crate::{gridworld::Action, types::Position};

/// Action values for one state, indexed by [`Action::index`]
pub type ActionValues = [f64; Action::COUNT];

/// Q-table mapping (state, action) pairs to Q-values
///
/// Rows are materialized lazily: a state that has never been updated reads as
/// all zeros and reading it does not insert anything.
#[derive(Debug, Clone)]
pub struct QTable {
    /// Q-values: position -> value per action
    q_values: HashMap<Position, ActionValues>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new, empty Q-table
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get Q-value for a state-action pair (0.0 when unseen)
    pub fn get(&self, state: Position, action: Action) -> f64 {
        self.values(state)[action.index()]
    }

    /// All action values for a state (zeros when unseen)
    pub fn values(&self, state: Position) -> ActionValues {
        self.q_values
            .get(&state)
            .copied()
            .unwrap_or([0.0; Action::COUNT])
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: Position, action: Action, value: f64) {
        self.q_values.entry(state).or_insert([0.0; Action::COUNT])[action.index()] = value;
    }

    /// Maximum Q-value over all actions in a state
    pub fn max_q(&self, state: Position) -> f64 {
        self.values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Select a greedy action, breaking exact ties uniformly at random
    pub fn greedy_action<R: Rng + ?Sized>(&self, state: Position, rng: &mut R) -> Action {
        let values = self.values(state);
        let best = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|action| values[action.index()] == best)
            .collect();
        candidates.choose(rng).copied().unwrap_or(Action::ALL[0])
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    pub fn q_learning_update(
        &mut self,
        state: Position,
        action: Action,
        reward: f64,
        next_state: Position,
    ) {
        let current_q = self.get(state, action);
        let max_next_q = self.max_q(next_state);
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// States with at least one stored value, in row-major order
    pub fn states(&self) -> Vec<Position> {
        let mut states: Vec<Position> = self.q_values.keys().copied().collect();
        states.sort();
        states
    }

    /// Reset all Q-values
    pub fn reset(&mut self) {
        self.q_values.clear();
    }

    /// Number of states with stored values
    pub fn size(&self) -> usize {
        self.q_values.len()
    }
}
