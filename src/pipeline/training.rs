//! Training pipeline for maze learners

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    analysis::stats::mean,
    gridworld::MazeEnv,
    ports::{Learner, Observer},
    types::Transition,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub num_episodes: usize,

    /// Step budget per episode
    pub max_steps: usize,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_episodes: 500,
            max_steps: 100,
            seed: None,
        }
    }
}

/// What happened in one episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Episode index (0-based)
    pub episode: usize,
    /// Sum of rewards collected
    pub total_reward: f64,
    /// Number of steps taken
    pub steps: usize,
    /// Whether the goal was reached within the step budget
    pub reached_goal: bool,
    /// Exploration rate in effect during the episode, if the learner has one
    pub epsilon: Option<f64>,
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Episodes that reached the goal
    pub successes: usize,

    /// Fraction of episodes that reached the goal
    pub success_rate: f64,

    /// Mean total reward per episode
    pub mean_reward: f64,

    /// Mean steps per episode
    pub mean_steps: f64,

    /// Total reward per episode
    pub episode_rewards: Vec<f64>,

    /// Steps per episode
    pub episode_steps: Vec<usize>,

    /// Per-episode goal flags
    pub episode_success: Vec<bool>,
}

impl TrainingResult {
    /// Build a result from per-episode summaries
    pub fn from_episodes(episodes: &[EpisodeSummary]) -> Self {
        let total_episodes = episodes.len();
        let successes = episodes.iter().filter(|e| e.reached_goal).count();
        let episode_rewards: Vec<f64> = episodes.iter().map(|e| e.total_reward).collect();
        let episode_steps: Vec<usize> = episodes.iter().map(|e| e.steps).collect();
        let steps_f64: Vec<f64> = episode_steps.iter().map(|&s| s as f64).collect();

        Self {
            total_episodes,
            successes,
            success_rate: if total_episodes > 0 {
                successes as f64 / total_episodes as f64
            } else {
                0.0
            },
            mean_reward: mean(&episode_rewards),
            mean_steps: mean(&steps_f64),
            episode_rewards,
            episode_steps,
            episode_success: episodes.iter().map(|e| e.reached_goal).collect(),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create training result {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open training result {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Episode loop driving one learner in one environment
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Train `agent` in `env` for the configured number of episodes
    pub fn run(&mut self, env: &mut MazeEnv, agent: &mut dyn Learner) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
        }

        info!(
            learner = agent.name(),
            episodes = self.config.num_episodes,
            max_steps = self.config.max_steps,
            seed = ?self.config.seed,
            "starting training"
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_episodes)?;
        }

        let mut episodes = Vec::with_capacity(self.config.num_episodes);
        for episode in 0..self.config.num_episodes {
            let summary = self.run_episode(episode, env, agent)?;
            debug!(
                episode,
                reward = summary.total_reward,
                steps = summary.steps,
                reached_goal = summary.reached_goal,
                "episode finished"
            );

            for observer in &mut self.observers {
                observer.on_episode_end(&summary)?;
            }
            episodes.push(summary);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::from_episodes(&episodes);
        info!(
            successes = result.successes,
            success_rate = result.success_rate,
            mean_reward = result.mean_reward,
            mean_steps = result.mean_steps,
            "training complete"
        );
        Ok(result)
    }

    fn run_episode(
        &mut self,
        episode: usize,
        env: &mut MazeEnv,
        agent: &mut dyn Learner,
    ) -> Result<EpisodeSummary> {
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let epsilon = agent.exploration_rate();
        let mut state = env.reset();
        let mut total_reward = 0.0;
        let mut steps = 0;
        let mut reached_goal = false;

        while steps < self.config.max_steps {
            // Behavior policy picks the action; the update bootstraps greedily
            let action = agent.select_action(state);
            let outcome = env.step(action);
            let transition = Transition {
                state,
                action,
                reward: outcome.reward,
                next_state: outcome.position,
                done: outcome.terminated,
            };
            agent.learn(&transition)?;

            for observer in &mut self.observers {
                observer.on_step(episode, steps, &transition)?;
            }

            total_reward += outcome.reward;
            state = outcome.position;
            steps += 1;

            if outcome.terminated {
                reached_goal = true;
                break;
            }
        }

        agent.end_episode();

        Ok(EpisodeSummary {
            episode,
            total_reward,
            steps,
            reached_goal,
            epsilon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::baselines::RandomLearner;

    #[test]
    fn test_training_pipeline() {
        let config = TrainingConfig {
            num_episodes: 10,
            max_steps: 50,
            seed: Some(42),
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut env = MazeEnv::default();
        let mut agent = RandomLearner::new("Agent".to_string());

        let result = pipeline.run(&mut env, &mut agent).unwrap();

        assert_eq!(result.total_episodes, 10);
        assert_eq!(result.episode_rewards.len(), 10);
        assert!(result.episode_steps.iter().all(|&s| s >= 1 && s <= 50));
        assert!(result.successes <= 10);
    }

    #[test]
    fn test_result_from_empty_episodes() {
        let result = TrainingResult::from_episodes(&[]);
        assert_eq!(result.total_episodes, 0);
        assert_eq!(result.success_rate, 0.0);
        assert_eq!(result.mean_reward, 0.0);
    }

    #[test]
    fn test_load_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match TrainingResult::load(&path) {
            Err(Error::Io { operation, source }) => {
                assert!(operation.contains("absent.json"), "{operation}");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_zero_step_budget_ends_immediately() {
        let config = TrainingConfig {
            num_episodes: 3,
            max_steps: 0,
            seed: Some(1),
        };
        let mut env = MazeEnv::default();
        let mut agent = RandomLearner::new("Agent".to_string());
        let result = TrainingPipeline::new(config)
            .run(&mut env, &mut agent)
            .unwrap();
        assert_eq!(result.episode_steps, vec![0, 0, 0]);
        assert_eq!(result.successes, 0);
    }
}
