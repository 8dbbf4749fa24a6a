//! Training and evaluation pipeline
//!
//! This module provides the episode driver around the core agent and
//! environment:
//! - Training a learner for a number of episodes with a step budget
//! - Greedy evaluation rollouts
//! - Recording observations during training
//! - Baseline learners for comparison

pub mod baselines;
pub mod evaluation;
pub mod observers;
pub mod training;

pub use baselines::RandomLearner;
pub use evaluation::{DEFAULT_ROLLOUT_STEPS, Rollout, greedy_rollout};
// Re-export observer implementations (adapters)
pub use observers::{
    EpisodeObservation, IntervalReportObserver, JsonlObserver, MetricsObserver, MetricsSummary,
    ProgressObserver,
};
pub use training::{EpisodeSummary, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Learner, Observer};
