//! Errors reported by board edits, automaton selection, and simulation.

use std::fmt;

use crate::State;

/// Result type returned by fallible routines in this crate.
pub type CaResult<T> = Result<T, CaError>;

/// Error encountered while editing, stepping, or constructing an automaton.
#[allow(missing_docs)]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CaError {
    /// A row or column was outside the grid.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A cell state was not valid for the automaton.
    InvalidState { state: State, state_count: usize },
    /// An automaton must have between 1 and 256 states.
    InvalidStateCount(usize),
    /// A board must have at least one row and one column.
    InvalidSize { rows: usize, cols: usize },
    /// No automaton is registered under the name.
    UnknownAutomaton(String),
    /// Source and destination boards have different shapes.
    SizeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// A transition key is malformed for the automaton it belongs to.
    InvalidTransition { state: State, reason: String },
    /// A rule string could not be parsed.
    InvalidRuleString(String),
    /// A plaintext pattern could not be parsed.
    InvalidPattern { line: usize, ch: char },
}
impl fmt::Display for CaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Cell ({}, {}) is outside the {}x{} grid",
                row, col, rows, cols
            ),
            CaError::InvalidState { state, state_count } => write!(
                f,
                "State #{} is out of range for an automaton with {} states",
                state, state_count
            ),
            CaError::InvalidStateCount(n) => {
                write!(f, "An automaton can't have {} states", n)
            }
            CaError::InvalidSize { rows, cols } => {
                write!(f, "Invalid board size {}x{}", rows, cols)
            }
            CaError::UnknownAutomaton(name) => write!(f, "Unknown automaton {:?}", name),
            CaError::SizeMismatch { expected, got } => write!(
                f,
                "Expected a {}x{} board; got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            CaError::InvalidTransition { state, reason } => {
                write!(f, "Bad transition for state #{}: {}", state, reason)
            }
            CaError::InvalidRuleString(s) => write!(f, "Invalid rule string {:?}", s),
            CaError::InvalidPattern { line, ch } => {
                write!(f, "Unknown cell symbol {:?} on line {}", ch, line)
            }
        }
    }
}
impl std::error::Error for CaError {}
