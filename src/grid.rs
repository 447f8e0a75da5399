use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest accepted grid dimension.
pub const MIN_DIM: usize = 2;
/// Largest accepted grid dimension.
pub const MAX_DIM: usize = 20;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Walkable,
    Obstacle,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cell::Walkable => ".",
                Cell::Obstacle => "X",
            }
        )
    }
}

/// A grid position, row and column counted from the top-left corner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// Validation failure raised while constructing a [`Grid`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidGrid {
    BadHeight(usize),
    BadWidth(usize),
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    BadValue {
        row: usize,
        col: usize,
        value: u8,
    },
}

impl Display for InvalidGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGrid::BadHeight(rows) => {
                write!(f, "grid must have {} to {} rows, got {}", MIN_DIM, MAX_DIM, rows)
            }
            InvalidGrid::BadWidth(columns) => write!(
                f,
                "grid must have {} to {} columns, got {}",
                MIN_DIM, MAX_DIM, columns
            ),
            InvalidGrid::RaggedRow { row, expected, found } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            InvalidGrid::BadValue { row, col, value } => write!(
                f,
                "cell ({}, {}) has value {}, expected 0 or 1",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for InvalidGrid {}

/// An immutable rectangular grid of walkable and obstacle cells, validated on
/// construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from rows of 0 (walkable) and 1 (obstacle) values.
    ///
    /// Fails with [`InvalidGrid`] when the rows are ragged, a dimension falls
    /// outside `[MIN_DIM, MAX_DIM]` or any value is not binary.
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, InvalidGrid> {
        let rows = matrix.len();
        if !(MIN_DIM..=MAX_DIM).contains(&rows) {
            return Err(InvalidGrid::BadHeight(rows));
        }
        let columns = matrix[0].len();
        if !(MIN_DIM..=MAX_DIM).contains(&columns) {
            return Err(InvalidGrid::BadWidth(columns));
        }

        let mut cells = vec![vec![Cell::Walkable; columns]; rows];
        for (row, values) in matrix.iter().enumerate() {
            if values.len() != columns {
                return Err(InvalidGrid::RaggedRow {
                    row,
                    expected: columns,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = match value {
                    0 => Cell::Walkable,
                    1 => Cell::Obstacle,
                    _ => return Err(InvalidGrid::BadValue { row, col, value }),
                };
            }
        }

        Ok(Self { rows, columns, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, which is also the graph node count.
    pub fn node_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Cell at the given point, or `None` when the point is out of bounds.
    pub fn get(&self, point: Point) -> Option<Cell> {
        if point.row < self.rows && point.col < self.columns {
            Some(self.cells[point.row][point.col])
        } else {
            None
        }
    }

    /// Iterator over the positions of all obstacle cells, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Obstacle)
                .map(move |(col, _)| Point { row, col })
        })
    }

    /// A copy of this grid with the cell at `point` set walkable. The original
    /// grid is left untouched.
    ///
    /// Panics if `point` is out of bounds.
    pub fn with_walkable(&self, point: Point) -> Self {
        let mut variant = self.clone();
        variant.cells[point.row][point.col] = Cell::Walkable;
        variant
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut matrix = Vec::new();
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = line
                .chars()
                .map(|c| match c {
                    '0' => Ok(0),
                    '1' => Ok(1),
                    _ => Err(anyhow::anyhow!("Invalid cell character: {}", c)),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            matrix.push(row);
        }

        Ok(Self::from_matrix(&matrix)?)
    }
}
