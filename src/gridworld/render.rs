//! Text rendering of the maze and of agent paths

use std::{collections::HashSet, fmt};

use super::Maze;
use crate::types::Position;

/// Maze with an optional agent marker
///
/// ```text
/// A . . .
/// . # . #
/// . . . .
/// # . . G
/// ```
pub struct MazeView<'a> {
    maze: &'a Maze,
    agent: Option<Position>,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze, agent: None }
    }

    pub fn with_agent(mut self, agent: Position) -> Self {
        self.agent = Some(agent);
        self
    }
}

impl fmt::Display for MazeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.maze.size(), |pos| {
            if Some(pos) == self.agent {
                'A'
            } else {
                self.maze.symbol(pos)
            }
        })
    }
}

/// Maze with the cells of a path marked `*`
pub struct PathView<'a> {
    maze: &'a Maze,
    path: HashSet<Position>,
}

impl<'a> PathView<'a> {
    pub fn new(maze: &'a Maze, path: &[Position]) -> Self {
        Self {
            maze,
            path: path.iter().copied().collect(),
        }
    }
}

impl fmt::Display for PathView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.maze.size(), |pos| {
            let symbol = self.maze.symbol(pos);
            if self.path.contains(&pos) && symbol == '.' {
                '*'
            } else if !self.path.contains(&pos) && matches!(symbol, 'S' | 'G') {
                '.'
            } else {
                symbol
            }
        })
    }
}

fn write_grid(
    f: &mut fmt::Formatter<'_>,
    size: usize,
    cell: impl Fn(Position) -> char,
) -> fmt::Result {
    for row in 0..size {
        let line: Vec<String> = (0..size)
            .map(|col| cell(Position::new(row, col)).to_string())
            .collect();
        writeln!(f, "{}", line.join(" "))?;
    }
    Ok(())
}
