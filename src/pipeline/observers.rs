//! Observer pattern for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! training logic to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::training::EpisodeSummary;
use crate::{Result, analysis::stats::tail_mean, ports::Observer, types::Transition};

/// Complete observation of a training episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeObservation {
    /// Episode number
    pub episode: usize,
    /// Total reward collected
    pub total_reward: f64,
    /// Whether the goal was reached
    pub reached_goal: bool,
    /// Exploration rate during the episode
    pub epsilon: Option<f64>,
    /// Transitions in order
    pub transitions: Vec<Transition>,
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    successes: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            successes: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        if summary.reached_goal {
            self.successes += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(summary.episode as u64 + 1);
            pb.set_message(format!("goal reached: {}", self.successes));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("goal reached: {}", self.successes));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks training metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    rewards: Vec<f64>,
    steps: Vec<usize>,
    successes: usize,
    collisions: usize,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episodes(&self) -> usize {
        self.rewards.len()
    }

    /// Fraction of episodes that reached the goal
    pub fn success_rate(&self) -> f64 {
        if self.rewards.is_empty() {
            0.0
        } else {
            self.successes as f64 / self.rewards.len() as f64
        }
    }

    /// Mean reward over the last `window` episodes
    pub fn recent_reward(&self, window: usize) -> f64 {
        tail_mean(&self.rewards, window)
    }

    /// Mean episode length over the last `window` episodes
    pub fn recent_steps(&self, window: usize) -> f64 {
        let steps: Vec<f64> = self.steps.iter().map(|&s| s as f64).collect();
        tail_mean(&steps, window)
    }

    /// Transitions that were blocked by a wall or obstacle
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episodes(),
            successes: self.successes,
            success_rate: self.success_rate(),
            mean_reward: self.recent_reward(self.rewards.len()),
            mean_steps: self.recent_steps(self.steps.len()),
            collisions: self.collisions,
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub successes: usize,
    pub success_rate: f64,
    pub mean_reward: f64,
    pub mean_steps: f64,
    pub collisions: usize,
}

impl Observer for MetricsObserver {
    fn on_step(&mut self, _episode: usize, _step: usize, transition: &Transition) -> Result<()> {
        if transition.state == transition.next_state {
            self.collisions += 1;
        }
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.rewards.push(summary.total_reward);
        self.steps.push(summary.steps);
        if summary.reached_goal {
            self.successes += 1;
        }
        Ok(())
    }
}

/// Interval report observer - Logs windowed averages every N episodes
///
/// Every `interval` episodes this logs the average reward and step count over
/// the last `interval` episodes and the cumulative success rate.
pub struct IntervalReportObserver {
    interval: usize,
    total_episodes: usize,
    metrics: MetricsObserver,
}

impl IntervalReportObserver {
    /// Report every `interval` episodes (an interval of 0 disables reports)
    pub fn new(interval: usize) -> Self {
        Self {
            interval,
            total_episodes: 0,
            metrics: MetricsObserver::new(),
        }
    }
}

impl Default for IntervalReportObserver {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Observer for IntervalReportObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.total_episodes = total_episodes;
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.metrics.on_episode_end(summary)?;

        let completed = summary.episode + 1;
        if self.interval > 0 && completed.is_multiple_of(self.interval) {
            info!(
                "episode {}/{} - avg reward: {:.2}, avg steps: {:.2}, success rate: {:.1}%",
                completed,
                self.total_episodes,
                self.metrics.recent_reward(self.interval),
                self.metrics.recent_steps(self.interval),
                self.metrics.success_rate() * 100.0
            );
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        info!(
            "training finished - overall success rate: {:.1}%",
            self.metrics.success_rate() * 100.0
        );
        Ok(())
    }
}

/// JSONL observer - Exports one JSON object per episode
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_transitions: Vec<Transition>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create observations file {}", path.display()),
            source,
        })?;
        let writer = BufWriter::new(file);
        Ok(Self {
            writer,
            current_transitions: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        self.current_transitions.clear();
        Ok(())
    }

    fn on_step(&mut self, _episode: usize, _step: usize, transition: &Transition) -> Result<()> {
        self.current_transitions.push(*transition);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        let observation = EpisodeObservation {
            episode: summary.episode,
            total_reward: summary.total_reward,
            reached_goal: summary.reached_goal,
            epsilon: summary.epsilon,
            transitions: std::mem::take(&mut self.current_transitions),
        };

        // Write as JSONL (one JSON object per line)
        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;

        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gridworld::Action, types::Position};

    fn summary(episode: usize, reward: f64, steps: usize, reached_goal: bool) -> EpisodeSummary {
        EpisodeSummary {
            episode,
            total_reward: reward,
            steps,
            reached_goal,
            epsilon: Some(0.1),
        }
    }

    #[test]
    fn metrics_track_successes_and_windows() {
        let mut metrics = MetricsObserver::new();
        metrics.on_episode_end(&summary(0, -10.0, 100, false)).unwrap();
        metrics.on_episode_end(&summary(1, 99.0, 8, true)).unwrap();
        metrics.on_episode_end(&summary(2, 99.5, 6, true)).unwrap();

        assert_eq!(metrics.episodes(), 3);
        assert!((metrics.success_rate() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(metrics.recent_steps(2), 7.0);
        assert_eq!(metrics.summary().successes, 2);
    }

    #[test]
    fn jsonl_create_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("episodes.jsonl");

        let err = JsonlObserver::new(&path).err().unwrap();
        match err {
            crate::Error::Io { operation, .. } => {
                assert!(operation.contains("episodes.jsonl"), "{operation}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn metrics_count_blocked_transitions() {
        let mut metrics = MetricsObserver::new();
        let blocked = Transition {
            state: Position::new(0, 1),
            action: Action::Down,
            reward: -1.0,
            next_state: Position::new(0, 1),
            done: false,
        };
        let moved = Transition {
            next_state: Position::new(0, 2),
            action: Action::Right,
            reward: -0.1,
            ..blocked
        };
        metrics.on_step(0, 0, &blocked).unwrap();
        metrics.on_step(0, 1, &moved).unwrap();
        assert_eq!(metrics.collisions(), 1);
    }
}
