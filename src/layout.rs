//! Static maze layout
//!
//! Walls, hazards and particle start positions are described on a cell grid.
//! The simulation turns them into pixel geometry once per session using the
//! cell pitch from [`Tuning`](crate::Tuning).

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_COLUMNS, GRID_ROWS};
use crate::error::ConfigError;

/// A wall run on grid lines, starting at a grid intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallPlacement {
    pub column: u32,
    pub row: u32,
    pub horizontal: bool,
    /// Run length in cells
    pub length: u32,
}

impl WallPlacement {
    pub const fn horizontal(column: u32, row: u32, length: u32) -> Self {
        Self {
            column,
            row,
            horizontal: true,
            length,
        }
    }

    pub const fn vertical(column: u32, row: u32, length: u32) -> Self {
        Self {
            column,
            row,
            horizontal: false,
            length,
        }
    }

    /// (grid line, first cell, one past last cell) along the run
    ///
    /// `None` when the run end does not fit in a `u32`.
    fn run(&self) -> Option<(u32, u32, u32)> {
        if self.horizontal {
            Some((self.row, self.column, self.column.checked_add(self.length)?))
        } else {
            Some((self.column, self.row, self.row.checked_add(self.length)?))
        }
    }
}

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Where a particle starts, plus its display tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartCell {
    pub cell: Cell,
    pub name: String,
    pub color: String,
}

/// Complete static description of one maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeLayout {
    pub columns: u32,
    pub rows: u32,
    pub walls: Vec<WallPlacement>,
    /// Hazard cells, only populated into a session in hard mode
    pub hazards: Vec<Cell>,
    pub starts: Vec<StartCell>,
}

const STOCK_WALLS: [WallPlacement; 46] = [
    // Border
    WallPlacement::horizontal(0, 0, 10),
    WallPlacement::vertical(0, 0, 9),
    WallPlacement::horizontal(0, 9, 10),
    WallPlacement::vertical(10, 0, 9),
    // Horizontal
    WallPlacement::horizontal(0, 6, 1),
    WallPlacement::horizontal(0, 8, 1),
    WallPlacement::horizontal(1, 1, 2),
    WallPlacement::horizontal(1, 7, 1),
    WallPlacement::horizontal(2, 2, 2),
    WallPlacement::horizontal(2, 4, 1),
    WallPlacement::horizontal(2, 5, 1),
    WallPlacement::horizontal(2, 6, 1),
    WallPlacement::horizontal(3, 3, 1),
    WallPlacement::horizontal(3, 8, 3),
    WallPlacement::horizontal(4, 6, 1),
    WallPlacement::horizontal(5, 2, 2),
    WallPlacement::horizontal(5, 7, 1),
    WallPlacement::horizontal(6, 1, 1),
    WallPlacement::horizontal(6, 6, 2),
    WallPlacement::horizontal(7, 3, 2),
    WallPlacement::horizontal(7, 7, 2),
    WallPlacement::horizontal(8, 1, 1),
    WallPlacement::horizontal(8, 2, 1),
    WallPlacement::horizontal(8, 4, 2),
    WallPlacement::horizontal(8, 8, 2),
    // Vertical
    WallPlacement::vertical(1, 1, 2),
    WallPlacement::vertical(1, 4, 2),
    WallPlacement::vertical(2, 2, 2),
    WallPlacement::vertical(2, 5, 1),
    WallPlacement::vertical(2, 7, 2),
    WallPlacement::vertical(3, 0, 1),
    WallPlacement::vertical(3, 4, 1),
    WallPlacement::vertical(3, 6, 2),
    WallPlacement::vertical(4, 1, 2),
    WallPlacement::vertical(4, 6, 1),
    WallPlacement::vertical(5, 0, 2),
    WallPlacement::vertical(5, 6, 1),
    WallPlacement::vertical(5, 8, 1),
    WallPlacement::vertical(6, 4, 1),
    WallPlacement::vertical(6, 6, 1),
    WallPlacement::vertical(7, 1, 4),
    WallPlacement::vertical(7, 7, 2),
    WallPlacement::vertical(8, 2, 1),
    WallPlacement::vertical(8, 4, 2),
    WallPlacement::vertical(9, 1, 1),
    WallPlacement::vertical(9, 5, 2),
];

const STOCK_HAZARDS: [Cell; 8] = [
    Cell::new(0, 5),
    Cell::new(2, 0),
    Cell::new(2, 4),
    Cell::new(4, 6),
    Cell::new(6, 2),
    Cell::new(6, 8),
    Cell::new(8, 1),
    Cell::new(8, 2),
];

const STOCK_STARTS: [(u32, u32, &str, &str); 4] = [
    (0, 0, "Alpha", "particle-1"),
    (9, 0, "Beta", "particle-2"),
    (0, 8, "Gamma", "particle-3"),
    (9, 8, "Delta", "particle-4"),
];

impl Default for MazeLayout {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            walls: STOCK_WALLS.to_vec(),
            hazards: STOCK_HAZARDS.to_vec(),
            starts: STOCK_STARTS
                .iter()
                .map(|&(column, row, name, color)| StartCell {
                    cell: Cell::new(column, row),
                    name: name.to_string(),
                    color: color.to_string(),
                })
                .collect(),
        }
    }
}

impl MazeLayout {
    /// Parse and validate a layout from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: MazeLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check the layout is a well-formed maze on its grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut runs = Vec::with_capacity(self.walls.len());
        for (index, wall) in self.walls.iter().enumerate() {
            if wall.length == 0 {
                return Err(ConfigError::ZeroLengthWall { index });
            }
            let (line, start, end) = wall
                .run()
                .ok_or(ConfigError::WallOutOfBounds { index })?;
            let (line_max, run_max) = if wall.horizontal {
                (self.rows, self.columns)
            } else {
                (self.columns, self.rows)
            };
            if line > line_max || end > run_max {
                return Err(ConfigError::WallOutOfBounds { index });
            }
            runs.push((wall.horizontal, line, start, end));
        }

        for (first, a) in runs.iter().enumerate() {
            for (offset, b) in runs[first + 1..].iter().enumerate() {
                let (horizontal_a, line_a, start_a, end_a) = *a;
                let (horizontal_b, line_b, start_b, end_b) = *b;
                if horizontal_a == horizontal_b
                    && line_a == line_b
                    && start_a < end_b
                    && start_b < end_a
                {
                    return Err(ConfigError::OverlappingWalls {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        if self.starts.is_empty() {
            return Err(ConfigError::NoParticles);
        }
        let cells = self
            .hazards
            .iter()
            .map(|cell| ("hazard", cell))
            .chain(self.starts.iter().map(|start| ("start", &start.cell)));
        for (kind, cell) in cells {
            if cell.column >= self.columns || cell.row >= self.rows {
                return Err(ConfigError::CellOutOfBounds {
                    kind,
                    column: cell.column,
                    row: cell.row,
                });
            }
        }

        Ok(())
    }
}
