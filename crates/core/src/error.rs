//! Error taxonomy for the simulation core
//!
//! Configuration and initial-tile problems are recoverable and reported to
//! the operator; bounds and transition violations indicate an engine bug
//! and are expected to fail loudly at the call site.

use crate::cell::CellStatus;

/// Problem with the externally supplied configuration record.
///
/// Reported before any simulation run exists; the controller stays
/// uninitialized when one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required field was absent from the record
    MissingField(&'static str),
    /// A grid dimension was zero
    InvalidDimension {
        /// Field name (`"rows"` or `"cols"`)
        field: &'static str,
        /// Supplied value
        value: u32,
    },
    /// Ignition probability outside the closed interval [0, 1]
    InvalidProbability(f32),
    /// The record could not be parsed at all
    Malformed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingField(name) => {
                write!(f, "required configuration field '{name}' is missing")
            }
            ConfigError::InvalidDimension { field, value } => {
                write!(f, "configuration field '{field}' must be positive, got {value}")
            }
            ConfigError::InvalidProbability(p) => {
                write!(f, "probability must be within [0, 1], got {p}")
            }
            ConfigError::Malformed(msg) => write!(f, "malformed configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A grid coordinate fell outside `[0, rows) x [0, cols)`.
///
/// Never silently clamped; always propagated to the immediate caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Requested row
    pub row: usize,
    /// Requested column
    pub col: usize,
    /// Grid row count
    pub rows: usize,
    /// Grid column count
    pub cols: usize,
}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coordinate ({}, {}) outside {}x{} grid",
            self.row, self.col, self.rows, self.cols
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// A disallowed cell status change was requested.
///
/// Status only moves alive -> burning -> dead. The engine guarantees it
/// never requests anything else, so seeing this outside forced-ignition
/// setup is a programming-contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    /// Cell row
    pub row: usize,
    /// Cell column
    pub col: usize,
    /// Status the cell currently has
    pub from: CellStatus,
    /// Status that was requested
    pub to: CellStatus,
}

impl std::fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cell ({}, {}) cannot move from {} to {}",
            self.row, self.col, self.from, self.to
        )
    }
}

impl std::error::Error for InvalidTransition {}

/// Errors surfaced by the simulation controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Configuration record was missing or invalid
    Config(ConfigError),
    /// An initial ignition coordinate was outside the grid
    InvalidInitialTile {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
    },
    /// A forced ignition hit a disallowed status change
    Transition(InvalidTransition),
    /// An operation was requested in the wrong lifecycle state
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// State the controller was in
        state: &'static str,
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Config(err) => write!(f, "configuration error: {err}"),
            SimulationError::InvalidInitialTile { row, col } => {
                write!(f, "initial tile ({row}, {col}) is outside the grid")
            }
            SimulationError::Transition(err) => write!(f, "invalid transition: {err}"),
            SimulationError::InvalidState { operation, state } => {
                write!(f, "cannot {operation} while {state}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        SimulationError::Config(err)
    }
}

impl From<InvalidTransition> for SimulationError {
    fn from(err: InvalidTransition) -> Self {
        SimulationError::Transition(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_values() {
        let err = OutOfBounds { row: 5, col: 7, rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "coordinate (5, 7) outside 2x3 grid");

        let err = ConfigError::MissingField("probability");
        assert!(err.to_string().contains("probability"));

        let err = InvalidTransition {
            row: 0,
            col: 0,
            from: CellStatus::Dead,
            to: CellStatus::Burning,
        };
        assert!(err.to_string().contains("dead"));
        assert!(err.to_string().contains("burning"));
    }

    #[test]
    fn config_error_converts_into_simulation_error() {
        let err: SimulationError = ConfigError::MissingField("rows").into();
        assert!(matches!(err, SimulationError::Config(ConfigError::MissingField("rows"))));
    }
}
