//! 2D cell container with bounds-checked access and 4-connected neighbors
//!
//! The grid allocates every cell once at construction and never resizes or
//! re-homes a cell. All external access is bounds-checked; the engine uses
//! crate-private indexed access for coordinates it derived itself.

use crate::cell::{Cell, CellStatus};
use crate::error::OutOfBounds;

/// Orthogonal neighbor offsets in scan order: up, right, down, left
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Fixed-shape 2D grid of cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given shape with every cell alive.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col));
            }
        }
        Grid { rows, cols, cells }
    }

    /// Row count, fixed at construction
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count, fixed at construction
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinate lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), OutOfBounds> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell at the given coordinate.
    ///
    /// # Errors
    /// Returns [`OutOfBounds`] if either index is outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, OutOfBounds> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[self.index(row, col)])
    }

    /// Mutable cell at the given coordinate.
    ///
    /// # Errors
    /// Returns [`OutOfBounds`] if either index is outside the grid.
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, OutOfBounds> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        Ok(&mut self.cells[idx])
    }

    /// Indexed access for coordinates already known to be in range.
    /// Panics on a stale coordinate, which would be an engine bug.
    pub(crate) fn cell_ref(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// Coordinates of the existing 4-connected neighbors of (row, col),
    /// in up, right, down, left order, omitting offsets outside the grid.
    pub fn neighbor_coords(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr >= 0 && nc >= 0 && (nr as usize) < self.rows && (nc as usize) < self.cols {
                    Some((nr as usize, nc as usize))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Existing 4-connected neighbor cells of (row, col), in up, right,
    /// down, left order. The fixed order only matters for deterministic
    /// tests; each neighbor is processed independently during a step.
    ///
    /// # Errors
    /// Returns [`OutOfBounds`] if the center coordinate is outside the grid.
    pub fn neighbors_of(&self, row: usize, col: usize) -> Result<Vec<&Cell>, OutOfBounds> {
        self.check_bounds(row, col)?;
        Ok(self
            .neighbor_coords(row, col)
            .into_iter()
            .map(|(nr, nc)| self.cell_ref(nr, nc))
            .collect())
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells currently holding the given status
    pub fn count_with_status(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|c| c.status() == status).count()
    }
}
