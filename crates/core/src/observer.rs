//! Read-only render notification contract
//!
//! A renderer is an external observer: it is told about every cell
//! mutation after the fact and only ever receives copies, so it cannot
//! influence simulation state. Notifications are synchronous and arrive
//! in mutation order.

use crate::cell::CellStatus;

/// Observer notified after each cell mutation.
pub trait RenderObserver {
    /// Called once per mutated cell with its coordinates and new status
    fn cell_changed(&mut self, row: usize, col: usize, status: CellStatus);
}

/// Observer that records every notification, for tests and debugging.
#[derive(Debug, Default)]
pub struct ChangeLog {
    changes: Vec<(usize, usize, CellStatus)>,
}

impl ChangeLog {
    /// Create an empty log
    pub fn new() -> Self {
        ChangeLog::default()
    }

    /// All recorded notifications, oldest first
    pub fn changes(&self) -> &[(usize, usize, CellStatus)] {
        &self.changes
    }

    /// Number of recorded notifications
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Discard all recorded notifications
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl RenderObserver for ChangeLog {
    fn cell_changed(&mut self, row: usize, col: usize, status: CellStatus) {
        self.changes.push((row, col, status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_log_records_in_order() {
        let mut log = ChangeLog::new();
        assert!(log.is_empty());

        log.cell_changed(0, 1, CellStatus::Burning);
        log.cell_changed(0, 0, CellStatus::Dead);

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.changes(),
            &[(0, 1, CellStatus::Burning), (0, 0, CellStatus::Dead)]
        );

        log.clear();
        assert!(log.is_empty());
    }
}
