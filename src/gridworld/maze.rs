//! Maze layout: size, start, goal and obstacles

use std::{collections::BTreeSet, fmt, path::Path, str::FromStr};

use serde::Serialize;

use crate::{Error, Result, types::Position};

/// Immutable square maze topology
///
/// Construction validates that every special cell is in bounds and that the
/// obstacles are disjoint from start and goal; after that the layout never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    size: usize,
    start: Position,
    goal: Position,
    obstacles: BTreeSet<Position>,
}

impl Maze {
    /// Build and validate a maze.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the size is zero, start equals goal,
    /// or an obstacle sits on the start or goal, and
    /// [`Error::PositionOutOfBounds`] for any cell outside the grid.
    pub fn new(
        size: usize,
        start: Position,
        goal: Position,
        obstacles: impl IntoIterator<Item = Position>,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidLayout {
                message: "maze size must be at least 1".to_string(),
            });
        }

        let obstacles: BTreeSet<Position> = obstacles.into_iter().collect();
        for &pos in [start, goal].iter().chain(obstacles.iter()) {
            if pos.row >= size || pos.col >= size {
                return Err(Error::PositionOutOfBounds {
                    row: pos.row,
                    col: pos.col,
                    size,
                });
            }
        }

        if start == goal {
            return Err(Error::InvalidLayout {
                message: format!("start and goal coincide at {start}"),
            });
        }
        if obstacles.contains(&start) {
            return Err(Error::InvalidLayout {
                message: format!("obstacle placed on start {start}"),
            });
        }
        if obstacles.contains(&goal) {
            return Err(Error::InvalidLayout {
                message: format!("obstacle placed on goal {goal}"),
            });
        }

        Ok(Self {
            size,
            start,
            goal,
            obstacles,
        })
    }

    /// The 4x4 demonstration maze
    ///
    /// ```text
    /// S . . .
    /// . # . #
    /// . . . .
    /// # . . G
    /// ```
    pub fn classic() -> Self {
        Self {
            size: 4,
            start: Position::new(0, 0),
            goal: Position::new(3, 3),
            obstacles: [(1, 1), (1, 3), (3, 0)]
                .into_iter()
                .map(Position::from)
                .collect(),
        }
    }

    /// Load a text layout from disk (see [`FromStr`] for the format).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read maze layout {}", path.display()),
            source,
        })?;
        text.parse()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Obstacles in row-major order
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Every in-bounds, non-obstacle cell in row-major order (start and goal
    /// included).
    pub fn open_cells(&self) -> Vec<Position> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Position::new(row, col)))
            .filter(|pos| !self.is_obstacle(*pos))
            .collect()
    }

    /// Character for a cell in the layout format
    pub fn symbol(&self, pos: Position) -> char {
        if pos == self.start {
            'S'
        } else if pos == self.goal {
            'G'
        } else if self.is_obstacle(pos) {
            '#'
        } else {
            '.'
        }
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::classic()
    }
}

/// Layout format: one row per line, `S` start, `G` goal, `#` obstacle, `.`
/// free. Spaces between cells and blank lines are ignored.
impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(Error::InvalidLayout {
                message: format!(
                    "maze must be square: row {idx} has {} cells, expected {size}",
                    row.len()
                ),
            });
        }

        let mut start = None;
        let mut goal = None;
        let mut obstacles = Vec::new();

        for (row, cells) in rows.iter().enumerate() {
            for (col, &character) in cells.iter().enumerate() {
                let pos = Position::new(row, col);
                match character {
                    'S' | 's' => {
                        if start.replace(pos).is_some() {
                            return Err(Error::InvalidLayout {
                                message: "more than one start cell".to_string(),
                            });
                        }
                    }
                    'G' | 'g' => {
                        if goal.replace(pos).is_some() {
                            return Err(Error::InvalidLayout {
                                message: "more than one goal cell".to_string(),
                            });
                        }
                    }
                    '#' => obstacles.push(pos),
                    '.' => {}
                    _ => {
                        return Err(Error::InvalidLayoutCharacter {
                            character,
                            row,
                            col,
                        });
                    }
                }
            }
        }

        let start = start.ok_or_else(|| Error::InvalidLayout {
            message: "missing start cell 'S'".to_string(),
        })?;
        let goal = goal.ok_or_else(|| Error::InvalidLayout {
            message: "missing goal cell 'G'".to_string(),
        })?;

        Maze::new(size, start, goal, obstacles)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.symbol(Position::new(row, col)))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_layout_matches_text_form() {
        let parsed: Maze = "S...\n.#.#\n....\n#..G\n".parse().unwrap();
        assert_eq!(parsed, Maze::classic());
        assert_eq!(Maze::classic().to_string(), "S...\n.#.#\n....\n#..G\n");
    }

    #[test]
    fn open_cells_exclude_obstacles() {
        let maze = Maze::classic();
        let cells = maze.open_cells();
        assert_eq!(cells.len(), 13);
        assert!(cells.contains(&maze.start()));
        assert!(cells.contains(&maze.goal()));
        assert!(maze.obstacles().all(|o| !cells.contains(&o)));
        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn rejects_out_of_bounds_cells() {
        let err = Maze::new(3, Position::new(0, 0), Position::new(3, 0), []).unwrap_err();
        assert!(matches!(
            err,
            Error::PositionOutOfBounds {
                row: 3,
                col: 0,
                size: 3
            }
        ));
    }

    #[test]
    fn rejects_obstacle_on_goal() {
        let goal = Position::new(2, 2);
        let err = Maze::new(3, Position::new(0, 0), goal, [goal]).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout { .. }));
    }

    #[test]
    fn rejects_start_equal_to_goal() {
        let cell = Position::new(1, 1);
        assert!(Maze::new(3, cell, cell, []).is_err());
    }

    #[test]
    fn parse_reports_bad_characters_and_shapes() {
        assert!(matches!(
            "S.\n.X".parse::<Maze>(),
            Err(Error::InvalidLayoutCharacter {
                character: 'X',
                row: 1,
                col: 1
            })
        ));
        assert!(matches!(
            "S..\n.G".parse::<Maze>(),
            Err(Error::InvalidLayout { .. })
        ));
        assert!(matches!(
            "S.\n..".parse::<Maze>(),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn parse_ignores_cell_spacing() {
        let maze: Maze = "S . .\n. # .\n. . G\n".parse().unwrap();
        assert_eq!(maze.size(), 3);
        assert!(maze.is_obstacle(Position::new(1, 1)));
        assert_eq!(maze.goal(), Position::new(2, 2));
    }
}
