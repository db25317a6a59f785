//! A single grid cell with one-way fire status progression
//!
//! Status only ever moves alive -> burning -> dead. The two guarded
//! transition methods are the only mutation paths, which rules out
//! double-ignition and resurrection bugs by construction.

use serde::{Deserialize, Serialize};

use crate::error::InvalidTransition;

/// Fire status of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellStatus {
    /// Unburnt vegetation, can ignite
    Alive,
    /// On fire, will spread and then die
    Burning,
    /// Burnt out, inert for the rest of the run
    Dead,
}

impl std::fmt::Display for CellStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellStatus::Alive => "alive",
            CellStatus::Burning => "burning",
            CellStatus::Dead => "dead",
        };
        f.write_str(name)
    }
}

/// One grid unit at a fixed (row, col) position.
///
/// Created once at grid construction and owned by the grid for the whole
/// run; only the status ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    status: CellStatus,
}

impl Cell {
    /// Create a new alive cell at the given position
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            status: CellStatus::Alive,
        }
    }

    /// Row position, fixed for the cell's lifetime
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column position, fixed for the cell's lifetime
    pub fn col(&self) -> usize {
        self.col
    }

    /// Current fire status
    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Whether the cell is unburnt and ignitable
    pub fn is_alive(&self) -> bool {
        self.status == CellStatus::Alive
    }

    /// Whether the cell is currently on fire
    pub fn is_burning(&self) -> bool {
        self.status == CellStatus::Burning
    }

    /// Whether the cell has burnt out
    pub fn is_dead(&self) -> bool {
        self.status == CellStatus::Dead
    }

    /// Transition alive -> burning.
    ///
    /// # Errors
    /// Returns [`InvalidTransition`] if the cell is not currently alive.
    pub fn ignite(&mut self) -> Result<(), InvalidTransition> {
        match self.status {
            CellStatus::Alive => {
                self.status = CellStatus::Burning;
                Ok(())
            }
            from => Err(InvalidTransition {
                row: self.row,
                col: self.col,
                from,
                to: CellStatus::Burning,
            }),
        }
    }

    /// Transition burning -> dead.
    ///
    /// # Errors
    /// Returns [`InvalidTransition`] if the cell is not currently burning.
    pub fn extinguish(&mut self) -> Result<(), InvalidTransition> {
        match self.status {
            CellStatus::Burning => {
                self.status = CellStatus::Dead;
                Ok(())
            }
            from => Err(InvalidTransition {
                row: self.row,
                col: self.col,
                from,
                to: CellStatus::Dead,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_alive() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
        assert!(cell.is_alive());
        assert!(!cell.is_burning());
        assert!(!cell.is_dead());
    }

    #[test]
    fn full_progression_is_permitted() {
        let mut cell = Cell::new(0, 0);
        cell.ignite().unwrap();
        assert!(cell.is_burning());
        cell.extinguish().unwrap();
        assert!(cell.is_dead());
    }

    #[test]
    fn double_ignition_is_rejected() {
        let mut cell = Cell::new(1, 1);
        cell.ignite().unwrap();
        let err = cell.ignite().unwrap_err();
        assert_eq!(err.from, CellStatus::Burning);
        assert_eq!(err.to, CellStatus::Burning);
        assert!(cell.is_burning());
    }

    #[test]
    fn dead_cell_cannot_reignite() {
        let mut cell = Cell::new(0, 0);
        cell.ignite().unwrap();
        cell.extinguish().unwrap();
        assert!(cell.ignite().is_err());
        assert!(cell.is_dead());
    }

    #[test]
    fn alive_cell_cannot_skip_to_dead() {
        let mut cell = Cell::new(4, 4);
        let err = cell.extinguish().unwrap_err();
        assert_eq!(err.from, CellStatus::Alive);
        assert_eq!(err.to, CellStatus::Dead);
        assert!(cell.is_alive());
    }
}
