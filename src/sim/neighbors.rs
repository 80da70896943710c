//! Moore-neighborhood state counting on a toroidal board.

use crate::board::Board;

/// Offsets of the eight neighbors of a cell, as `(drow, dcol)`.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reusable buffer holding the number of neighbors of a cell in each state.
///
/// Counting reuses the same buffer for every cell so that stepping a board
/// does not allocate per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounter {
    counts: Vec<u8>,
}

impl NeighborCounter {
    /// Constructs a counter for an automaton with `state_count` states.
    pub fn new(state_count: usize) -> Self {
        Self {
            counts: vec![0; state_count],
        }
    }

    /// Returns the number of states this counter distinguishes.
    pub fn state_count(&self) -> usize {
        self.counts.len()
    }

    /// Counts the states of the eight neighbors of `(row, col)`, wrapping
    /// around the edges of the board, and returns the counts indexed by
    /// state.
    ///
    /// # Panics
    ///
    /// This method panics if a neighbor's state is not less than
    /// `state_count()`. Callers are expected to have checked the board
    /// against the automaton beforehand.
    #[inline]
    pub fn count(&mut self, board: &Board, row: usize, col: usize) -> &[u8] {
        for n in self.counts.iter_mut() {
            *n = 0;
        }
        for &(dr, dc) in &MOORE_OFFSETS {
            self.counts[board.get_wrapped(row, col, dr, dc) as usize] += 1;
        }
        &self.counts
    }
}
