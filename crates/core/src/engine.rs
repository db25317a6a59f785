//! Fire spread engine: advances the grid by exactly one discrete step
//!
//! The engine is a pure function of the grid contents, the ignition
//! probability, and the caller-supplied RNG stream. It owns no state
//! between steps; the per-step just-ignited marker set prevents a cell
//! from acting as a spread source in the same tick it caught fire.

use rand::{Rng, RngCore};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cell::CellStatus;
use crate::grid::Grid;

/// One cell mutation performed during a step, in mutation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    /// Row of the mutated cell
    pub row: usize,
    /// Column of the mutated cell
    pub col: usize,
    /// Status the cell now holds
    pub status: CellStatus,
}

/// Record of everything a single step changed, in mutation order.
///
/// Handed back to the controller so a renderer can be notified of each
/// change without re-scanning the grid.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    changes: Vec<CellChange>,
}

impl StepReport {
    /// All mutations of the step, in the order they were applied
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Coordinates ignited during the step
    pub fn ignited(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.changes
            .iter()
            .filter(|c| c.status == CellStatus::Burning)
            .map(|c| (c.row, c.col))
    }

    /// Coordinates extinguished during the step
    pub fn extinguished(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.changes
            .iter()
            .filter(|c| c.status == CellStatus::Dead)
            .map(|c| (c.row, c.col))
    }

    /// Whether the step changed nothing (the fire has gone out)
    pub fn is_quiescent(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Drives one simulation step over the whole grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireSpreadEngine;

impl FireSpreadEngine {
    /// Create a new engine
    pub fn new() -> Self {
        FireSpreadEngine
    }

    /// Advance the grid by exactly one discrete time step.
    ///
    /// Scans all cells in row-major order. For each burning cell that was
    /// not ignited earlier in this same step, every alive 4-connected
    /// neighbor gets one uniform draw in [0, 1); draws strictly below
    /// `probability` ignite the neighbor. The burning cell is then
    /// extinguished whether or not anything ignited, so a cell burns for
    /// exactly one scan before dying.
    ///
    /// A grid with no burning cells is left untouched and consumes no RNG
    /// draws.
    pub fn step(&self, grid: &mut Grid, probability: f32, rng: &mut dyn RngCore) -> StepReport {
        let mut just_ignited: FxHashSet<(usize, usize)> = FxHashSet::default();
        let mut changes = Vec::new();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if !grid.cell_ref(row, col).is_burning() || just_ignited.contains(&(row, col)) {
                    continue;
                }

                for (nr, nc) in grid.neighbor_coords(row, col) {
                    if !grid.cell_ref(nr, nc).is_alive() {
                        continue;
                    }
                    if rng.random::<f32>() < probability {
                        // Checked alive above; a failure here is an engine bug.
                        grid.cell_mut(nr, nc)
                            .ignite()
                            .expect("spread target was checked alive before ignition");
                        just_ignited.insert((nr, nc));
                        changes.push(CellChange {
                            row: nr,
                            col: nc,
                            status: CellStatus::Burning,
                        });
                    }
                }

                // Burns out after one scan regardless of whether it spread.
                grid.cell_mut(row, col)
                    .extinguish()
                    .expect("spread source was checked burning before extinction");
                changes.push(CellChange {
                    row,
                    col,
                    status: CellStatus::Dead,
                });
            }
        }

        let report = StepReport { changes };
        if !report.is_quiescent() {
            debug!(
                "step ignited {} and extinguished {} cells",
                report.ignited().count(),
                report.extinguished().count()
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ignite_at(grid: &mut Grid, row: usize, col: usize) {
        grid.cell_at_mut(row, col).unwrap().ignite().unwrap();
    }

    #[test]
    fn quiescent_grid_is_a_no_op() {
        let mut grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let report = FireSpreadEngine::new().step(&mut grid, 1.0, &mut rng);
        assert!(report.is_quiescent());
        assert_eq!(grid.count_with_status(CellStatus::Alive), 16);
    }

    #[test]
    fn probability_zero_never_spreads() {
        let mut grid = Grid::new(3, 3);
        ignite_at(&mut grid, 1, 1);
        let mut rng = StdRng::seed_from_u64(42);

        let report = FireSpreadEngine::new().step(&mut grid, 0.0, &mut rng);

        assert_eq!(report.ignited().count(), 0);
        assert_eq!(report.extinguished().collect::<Vec<_>>(), vec![(1, 1)]);
        assert_eq!(grid.count_with_status(CellStatus::Dead), 1);
        assert_eq!(grid.count_with_status(CellStatus::Alive), 8);
    }

    #[test]
    fn probability_one_ignites_every_alive_neighbor() {
        let mut grid = Grid::new(3, 3);
        ignite_at(&mut grid, 1, 1);
        let mut rng = StdRng::seed_from_u64(0);

        let report = FireSpreadEngine::new().step(&mut grid, 1.0, &mut rng);

        let ignited: Vec<_> = report.ignited().collect();
        assert_eq!(ignited, vec![(0, 1), (1, 2), (2, 1), (1, 0)]);
        assert!(grid.cell_at(1, 1).unwrap().is_dead());
    }

    #[test]
    fn just_ignited_cells_do_not_spread_in_the_same_step() {
        // Row of three, fire at the left end. With certain spread, the
        // middle cell ignites during step one but must not pass fire to
        // the right cell until step two.
        let mut grid = Grid::new(1, 3);
        ignite_at(&mut grid, 0, 0);
        let mut rng = StdRng::seed_from_u64(99);
        let engine = FireSpreadEngine::new();

        engine.step(&mut grid, 1.0, &mut rng);
        assert!(grid.cell_at(0, 0).unwrap().is_dead());
        assert!(grid.cell_at(0, 1).unwrap().is_burning());
        assert!(grid.cell_at(0, 2).unwrap().is_alive());

        engine.step(&mut grid, 1.0, &mut rng);
        assert!(grid.cell_at(0, 1).unwrap().is_dead());
        assert!(grid.cell_at(0, 2).unwrap().is_burning());

        let report = engine.step(&mut grid, 1.0, &mut rng);
        assert!(grid.cell_at(0, 2).unwrap().is_dead());
        assert_eq!(report.ignited().count(), 0);
        assert_eq!(grid.count_with_status(CellStatus::Dead), 3);
    }

    #[test]
    fn changes_preserve_mutation_order() {
        let mut grid = Grid::new(1, 2);
        ignite_at(&mut grid, 0, 0);
        let mut rng = StdRng::seed_from_u64(3);

        let report = FireSpreadEngine::new().step(&mut grid, 1.0, &mut rng);

        assert_eq!(
            report.changes(),
            &[
                CellChange { row: 0, col: 1, status: CellStatus::Burning },
                CellChange { row: 0, col: 0, status: CellStatus::Dead },
            ]
        );
    }
}
