//! qmaze CLI - Tabular Q-learning in a grid maze
//!
//! This CLI provides:
//! - Training a Q-learning agent and evaluating its greedy policy
//! - Rendering maze layouts

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qmaze")]
#[command(version, about = "Q-learning agent for grid mazes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Q-learning agent and run a greedy rollout
    Train(Box<qmaze::cli::commands::train::TrainArgs>),

    /// Render a maze layout and list its valid states
    Maze(qmaze::cli::commands::maze::MazeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => qmaze::cli::commands::train::execute(*args),
        Commands::Maze(args) => qmaze::cli::commands::maze::execute(args),
    }
}
