//! Grid module - the cells that are no longer falling
//!
//! The grid is a `width x height` matrix where each cell is empty or holds the shape
//! that was locked there. Storage is a flat row-major vector so whole rows can be moved
//! with `copy_within` during compaction.
//! Coordinates: (x, y) where x grows to the right and y grows downwards (row 0 is the top).

use std::fmt;

use crate::types::{Cell, GridError, Shape};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![None; width * height],
            width,
            height,
        }
    }

    /// Build a grid from text rows, top row first
    ///
    /// `.` and space are empty cells; shape letters (`t l j i s z o`, any case) are
    /// occupied cells; any other character reads as empty. Every row must have the same
    /// length, otherwise [`GridError::RaggedRows`] names the first one that differs.
    ///
    /// ```
    /// use tick_tetris_core::Grid;
    /// use tick_tetris_types::Shape;
    ///
    /// let grid = Grid::from_rows(&["....", "iii."]).unwrap();
    /// assert_eq!(grid.get(0, 1), Ok(Some(Shape::I)));
    /// assert_eq!(grid.get(3, 1), Ok(None));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Shape::from_str(other.encode_utf8(&mut [0u8; 4])),
                };
                grid.cells[y * width + x] = cell;
            }
        }

        Ok(grid)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    fn violation(&self, x: i32, y: i32) -> GridError {
        GridError::ContractViolation {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether (x, y) addresses a cell of this grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.violation(x, y))
    }

    /// Set cell at position (x, y)
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or_else(|| self.violation(x, y))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Ok(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Ok(Some(_)))
    }

    /// Cells of row `y`, if it exists
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Indices of all full rows, ascending
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and let everything above them drop
    ///
    /// `rows` must be sorted ascending. A single bottom-up pass moves each retained row
    /// down by the number of removed rows beneath it, then the vacated rows at the top
    /// are emptied. Indices outside the grid are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] <= w[1]), "rows must be sorted");

        let width = self.width;
        let mut removed_below = 0;
        let mut pending = rows.iter().rev().peekable();

        for y in (0..self.height).rev() {
            // Skip indices past the grid and duplicates already handled.
            while pending.next_if(|&&row| row > y).is_some() {}

            if pending.next_if(|&&row| row == y).is_some() {
                removed_below += 1;
                continue;
            }

            if removed_below > 0 {
                let src = y * width;
                self.cells
                    .copy_within(src..src + width, src + removed_below * width);
            }
        }

        self.cells[..removed_below * width].fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            f.write_str("[ ")?;
            for cell in row {
                match cell {
                    Some(shape) => write!(f, "{} ", shape.id())?,
                    None => f.write_str("  ")?,
                }
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
