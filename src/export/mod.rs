//! Export functionality for training data
//!
//! This module provides exporters that write training data in formats
//! suitable for external analysis and plotting.

pub mod curves_csv;

pub use curves_csv::{CurveCsvExporter, CurveRecord, DEFAULT_WINDOW};
