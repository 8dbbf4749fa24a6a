//! CSV export of training curves
//!
//! One row per episode with its reward, length and goal flag, plus moving
//! averages once the smoothing window has filled. Plotting tools can read the
//! file directly.

use std::path::Path;

use serde::Serialize;

use crate::{Result, analysis::stats::moving_average, pipeline::TrainingResult};

/// Default smoothing window for the moving-average columns
pub const DEFAULT_WINDOW: usize = 50;

/// A single row in the curves CSV export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveRecord {
    pub episode: usize,
    pub total_reward: f64,
    pub steps: usize,
    pub reached_goal: bool,
    /// Mean reward over the window ending at this episode
    pub reward_moving_avg: Option<f64>,
    /// Mean steps over the window ending at this episode
    pub steps_moving_avg: Option<f64>,
}

/// Exporter for training-curve CSV files
pub struct CurveCsvExporter;

impl CurveCsvExporter {
    /// Build the rows for `result` (episodes are numbered from 1)
    pub fn records(result: &TrainingResult, window: usize) -> Vec<CurveRecord> {
        let steps_f64: Vec<f64> = result.episode_steps.iter().map(|&s| s as f64).collect();
        let reward_avg = moving_average(&result.episode_rewards, window);
        let steps_avg = moving_average(&steps_f64, window);

        // Moving-average element i covers episodes i..i + window, so it belongs
        // on the row of the window's last episode.
        let lagged = |series: &[f64], idx: usize| -> Option<f64> {
            (window > 0 && idx + 1 >= window)
                .then(|| series.get(idx + 1 - window).copied())
                .flatten()
        };

        result
            .episode_rewards
            .iter()
            .zip(&result.episode_steps)
            .enumerate()
            .map(|(idx, (&total_reward, &steps))| CurveRecord {
                episode: idx + 1,
                total_reward,
                steps,
                reached_goal: result.episode_success.get(idx).copied().unwrap_or(false),
                reward_moving_avg: lagged(&reward_avg, idx),
                steps_moving_avg: lagged(&steps_avg, idx),
            })
            .collect()
    }

    /// Write the curves for `result` to `path`
    pub fn write<P: AsRef<Path>>(path: P, result: &TrainingResult, window: usize) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in Self::records(result, window) {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::EpisodeSummary;

    fn result_with(rewards: &[f64], steps: &[usize]) -> TrainingResult {
        let episodes: Vec<EpisodeSummary> = rewards
            .iter()
            .zip(steps)
            .enumerate()
            .map(|(episode, (&total_reward, &steps))| EpisodeSummary {
                episode,
                total_reward,
                steps,
                reached_goal: total_reward > 0.0,
                epsilon: None,
            })
            .collect();
        TrainingResult::from_episodes(&episodes)
    }

    #[test]
    fn moving_average_starts_when_window_fills() {
        let result = result_with(&[-5.0, 1.0, 3.0, 5.0], &[10, 8, 6, 4]);
        let records = CurveCsvExporter::records(&result, 2);

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].episode, 1);
        assert_eq!(records[0].reward_moving_avg, None);
        assert_eq!(records[1].reward_moving_avg, Some(-2.0));
        assert_eq!(records[3].reward_moving_avg, Some(4.0));
        assert_eq!(records[3].steps_moving_avg, Some(5.0));
        assert!(!records[0].reached_goal);
        assert!(records[3].reached_goal);
    }

    #[test]
    fn zero_window_leaves_averages_empty() {
        let result = result_with(&[1.0, 2.0], &[3, 4]);
        let records = CurveCsvExporter::records(&result, 0);
        assert!(records.iter().all(|r| r.reward_moving_avg.is_none()));
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curves.csv");
        let result = result_with(&[-1.0, 99.0, 99.5], &[100, 7, 6]);

        CurveCsvExporter::write(&path, &result, 2).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("episode,total_reward,steps,reached_goal,reward_moving_avg,steps_moving_avg")
        );
        assert_eq!(lines.next(), Some("1,-1.0,100,false,,"));
        assert_eq!(lines.count(), 2);
    }
}
