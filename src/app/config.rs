//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hyperparameters for a Q-learning agent.
///
/// Builder-style configuration, validated before an agent is created.
///
/// # Examples
///
/// ```
/// use qmaze::app::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_learning_rate(0.2)
///     .with_epsilon(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate α, in (0, 1]
    pub learning_rate: f64,
    /// Discount factor γ, in [0, 1]
    pub discount_factor: f64,
    /// Exploration probability ε, in [0, 1]
    pub epsilon: f64,
    /// Multiplicative ε decay applied after each episode, in (0, 1]
    pub epsilon_decay: f64,
    /// Lower bound for the decayed ε
    pub min_epsilon: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor γ.
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the exploration probability ε.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the per-episode ε decay and its floor.
    pub fn with_epsilon_decay(mut self, decay: f64, min_epsilon: f64) -> Self {
        self.epsilon_decay = decay;
        self.min_epsilon = min_epsilon;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every hyperparameter against its admissible range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        check(
            self.learning_rate > 0.0 && self.learning_rate <= 1.0,
            || format!("learning rate {} must be in (0, 1]", self.learning_rate),
        )?;
        check((0.0..=1.0).contains(&self.discount_factor), || {
            format!("discount factor {} must be in [0, 1]", self.discount_factor)
        })?;
        check((0.0..=1.0).contains(&self.epsilon), || {
            format!("epsilon {} must be in [0, 1]", self.epsilon)
        })?;
        check(
            self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0,
            || format!("epsilon decay {} must be in (0, 1]", self.epsilon_decay),
        )?;
        check((0.0..=self.epsilon).contains(&self.min_epsilon), || {
            format!(
                "minimum epsilon {} must be in [0, epsilon = {}]",
                self.min_epsilon, self.epsilon
            )
        })
    }
}

fn check(ok: bool, message: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration { message: message() })
    }
}

impl Default for AgentConfig {
    /// α = 0.1, γ = 0.9, ε = 0.1, no decay, unseeded.
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 0.1,
            epsilon_decay: 1.0,
            min_epsilon: 0.0,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn boundary_values_are_accepted() {
        let config = AgentConfig::default()
            .with_learning_rate(1.0)
            .with_discount_factor(0.0)
            .with_epsilon(1.0)
            .with_epsilon_decay(1.0, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cases = [
            AgentConfig::default().with_learning_rate(0.0),
            AgentConfig::default().with_learning_rate(1.5),
            AgentConfig::default().with_discount_factor(-0.1),
            AgentConfig::default().with_discount_factor(1.01),
            AgentConfig::default().with_epsilon(2.0),
            AgentConfig::default().with_epsilon_decay(0.0, 0.0),
            AgentConfig::default().with_epsilon_decay(0.99, 0.5),
            AgentConfig::default().with_learning_rate(f64::NAN),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfiguration { .. })),
                "{config:?} should be rejected"
            );
        }
    }
}
