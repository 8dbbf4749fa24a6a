//! Maze command - Render a maze layout and list its states

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, print_subsection},
    gridworld::{Maze, MazeEnv, MazeView},
};

#[derive(Parser, Debug)]
#[command(about = "Render a maze layout")]
pub struct MazeArgs {
    /// Maze layout file (S start, G goal, # obstacle, . free); defaults to the 4x4 demo maze
    #[arg(long)]
    pub layout: Option<PathBuf>,
}

pub fn execute(args: MazeArgs) -> Result<()> {
    let maze = match &args.layout {
        Some(path) => Maze::load(path)
            .with_context(|| format!("Failed to load maze layout {}", path.display()))?,
        None => Maze::classic(),
    };
    let env = MazeEnv::new(maze);
    let maze = env.maze();

    print_section("Maze");
    println!("{}", MazeView::new(maze));
    print_kv("Size", &format!("{0}x{0}", maze.size()));
    print_kv("Start", &maze.start().to_string());
    print_kv("Goal", &maze.goal().to_string());
    let obstacles: Vec<String> = maze.obstacles().map(|o| o.to_string()).collect();
    print_kv("Obstacles", &obstacles.join(" "));
    print_kv(
        "Shortest possible",
        &format!("{} steps", maze.start().manhattan(maze.goal())),
    );

    let states = env.all_states();
    print_subsection(&format!("Valid states ({})", states.len()));
    let listed: Vec<String> = states.iter().map(|s| s.to_string()).collect();
    println!("{}", listed.join(" "));

    Ok(())
}
