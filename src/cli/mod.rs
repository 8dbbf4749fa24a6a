//! CLI infrastructure for the qmaze toolkit
//!
//! This module provides the command-line interface for training agents and
//! inspecting maze layouts.

pub mod commands;
pub mod output;
