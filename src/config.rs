//! Simulation settings.

use crate::rule::registry::BRIANS_BRAIN_NAME;

/// Number of rows and columns in the default board.
pub const DEFAULT_BOARD_SIZE: usize = 64;

/// Settings for constructing and running a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of rows on the board.
    pub rows: usize,
    /// Number of columns on the board.
    pub cols: usize,
    /// Registry name or rule string of the automaton.
    pub automaton: String,
    /// Number of generations to run.
    pub generations: u64,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            automaton: BRIANS_BRAIN_NAME.to_owned(),
            generations: 1,
        }
    }
}
