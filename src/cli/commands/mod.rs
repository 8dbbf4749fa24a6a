//! CLI subcommands

pub mod maze;
pub mod train;
