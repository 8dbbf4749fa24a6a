//! Summary statistics over training curves

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Arithmetic mean, 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().mean()
    }
}

/// Mean of the last `n` values (all of them if fewer than `n`)
pub fn tail_mean(values: &[f64], n: usize) -> f64 {
    let start = values.len().saturating_sub(n);
    mean(&values[start..])
}

/// Sliding-window mean ("valid" convolution with a box kernel)
///
/// The output has `values.len() - window + 1` entries; element `i` averages
/// `values[i..i + window]`. Empty when `window` is zero or longer than the
/// input.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values.windows(window).map(|w| w.iter().mean()).collect()
}

/// Aggregate view of a block of episodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveStats {
    pub episodes: usize,
    pub mean_reward: f64,
    pub reward_std_dev: f64,
    pub mean_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
}

impl CurveStats {
    /// Summarize paired reward/step series; `None` when empty
    pub fn from_series(rewards: &[f64], steps: &[usize]) -> Option<Self> {
        if rewards.is_empty() || steps.is_empty() {
            return None;
        }
        let steps_f64: Vec<f64> = steps.iter().map(|&s| s as f64).collect();
        let reward_std_dev = if rewards.len() > 1 {
            rewards.iter().std_dev()
        } else {
            0.0
        };
        Some(Self {
            episodes: rewards.len(),
            mean_reward: mean(rewards),
            reward_std_dev,
            mean_steps: mean(&steps_f64),
            min_steps: steps.iter().copied().min().unwrap_or(0),
            max_steps: steps.iter().copied().max().unwrap_or(0),
        })
    }
}
