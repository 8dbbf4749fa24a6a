//! Analysis tools for training runs
//!
//! Moving averages and summary statistics over the per-episode reward and
//! step series produced by the training pipeline.

pub mod stats;

pub use stats::{CurveStats, mean, moving_average, tail_mean};
