//! Fixed-size toroidal grids of cell states.

use itertools::iproduct;
use std::fmt;
use std::ops::Index;

use crate::error::{CaError, CaResult};
use crate::rule::Automaton;
use crate::State;

/// Fixed-size 2D grid of cell states whose edges wrap around.
///
/// Cells are stored row-major. Every cell starts in state 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Box<[State]>,
}

impl Board {
    /// Creates a board with every cell in state 0.
    ///
    /// # Panics
    ///
    /// This function panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols].into_boxed_slice(),
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the state of a cell.
    pub fn get_cell(&self, row: usize, col: usize) -> CaResult<State> {
        self.check_bounds(row, col)?;
        Ok(self[(row, col)])
    }

    /// Sets the state of a cell, checking that `state` is valid for
    /// `automaton`.
    ///
    /// This is the edit path for callers outside the simulation; it must not
    /// be interleaved with a step that reads this board.
    pub fn set_cell(
        &mut self,
        automaton: &Automaton,
        row: usize,
        col: usize,
        state: State,
    ) -> CaResult<()> {
        self.check_bounds(row, col)?;
        automaton.check_state(state)?;
        self.write(row, col, state);
        Ok(())
    }

    /// Sets every cell to state 0.
    pub fn clear(&mut self) {
        self.fill(0);
    }
    /// Sets every cell to the same state.
    pub fn fill(&mut self, state: State) {
        for cell in self.cells.iter_mut() {
            *cell = state;
        }
    }

    /// Copies every cell of `pattern` onto this board with the pattern's
    /// top-left corner at `(row, col)`, wrapping around the edges.
    ///
    /// Nothing is written unless `(row, col)` is on the board and every cell
    /// of `pattern` is a valid state of `automaton`.
    pub fn paste(
        &mut self,
        automaton: &Automaton,
        pattern: &Board,
        row: usize,
        col: usize,
    ) -> CaResult<()> {
        self.check_bounds(row, col)?;
        automaton.check_board(pattern)?;
        for (r, c, state) in pattern.iter_cells() {
            self.write((row + r) % self.rows, (col + c) % self.cols, state);
        }
        Ok(())
    }

    /// Returns the state of the cell at `(row + dr, col + dc)`, wrapping
    /// around the edges.
    #[inline]
    pub fn get_wrapped(&self, row: usize, col: usize, dr: isize, dc: isize) -> State {
        let r = (row as isize + dr).rem_euclid(self.rows as isize) as usize;
        let c = (col as isize + dc).rem_euclid(self.cols as isize) as usize;
        self[(r, c)]
    }

    /// Returns an iterator over every cell as `(row, col, state)`, row by row.
    pub fn iter_cells<'a>(&'a self) -> impl 'a + Iterator<Item = (usize, usize, State)> {
        iproduct!(0..self.rows, 0..self.cols).map(move |(r, c)| (r, c, self[(r, c)]))
    }

    /// Returns the number of cells in each state, indexed by state. The
    /// returned vector has at least `state_count` entries.
    pub fn population(&self, state_count: usize) -> Vec<usize> {
        let mut ret = vec![0; state_count];
        for &cell in self.cells.iter() {
            let cell = cell as usize;
            if cell >= ret.len() {
                ret.resize(cell + 1, 0);
            }
            ret[cell] += 1;
        }
        ret
    }

    /// Returns the highest state present on the board.
    pub fn max_state(&self) -> State {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Writes a cell without any validation beyond the slice bounds check.
    #[inline]
    pub(crate) fn write(&mut self, row: usize, col: usize, state: State) {
        let idx = self.flatten_idx(row, col);
        self.cells[idx] = state;
    }

    fn check_bounds(&self, row: usize, col: usize) -> CaResult<()> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(CaError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    fn flatten_idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

impl Index<(usize, usize)> for Board {
    type Output = State;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &State {
        &self.cells[self.flatten_idx(row, col)]
    }
}

impl fmt::Display for Board {
    /// Formats the board in the plaintext pattern format (see
    /// [`crate::io`]).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", crate::io::state_to_char(self[(r, c)]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::registry::GAME_OF_LIFE;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 7);
        assert_eq!((4, 7), board.shape());
        assert!(board.iter_cells().all(|(_, _, state)| state == 0));
        assert_eq!(28, board.iter_cells().count());
    }

    #[test]
    fn test_set_and_get_cell() {
        let mut board = Board::new(5, 5);
        board.set_cell(&GAME_OF_LIFE, 2, 3, 1).unwrap();
        assert_eq!(Ok(1), board.get_cell(2, 3));
        assert_eq!(Ok(0), board.get_cell(3, 2));
        assert_eq!(vec![24, 1], board.population(2));
    }

    #[test]
    fn test_set_cell_rejects_bad_input() {
        let mut board = Board::new(5, 6);
        assert_eq!(
            Err(CaError::OutOfBounds {
                row: 5,
                col: 0,
                rows: 5,
                cols: 6
            }),
            board.set_cell(&GAME_OF_LIFE, 5, 0, 1),
        );
        assert_eq!(
            Err(CaError::InvalidState {
                state: 2,
                state_count: 2
            }),
            board.set_cell(&GAME_OF_LIFE, 0, 0, 2),
        );
        assert!(board.get_cell(0, 6).is_err());
        // Nothing was written.
        assert_eq!(0, board.max_state());
    }

    #[test]
    fn test_wrapped_access() {
        let mut board = Board::new(3, 4);
        board.write(2, 3, 1);
        assert_eq!(1, board.get_wrapped(0, 0, -1, -1));
        assert_eq!(1, board.get_wrapped(2, 0, 0, -1));
        assert_eq!(1, board.get_wrapped(0, 3, -1, 0));
        assert_eq!(0, board.get_wrapped(0, 0, 1, 1));
    }

    #[test]
    fn test_iter_cells_is_restartable() {
        let mut board = Board::new(2, 2);
        board.write(1, 0, 1);
        let first: Vec<_> = board.iter_cells().collect();
        let second: Vec<_> = board.iter_cells().collect();
        assert_eq!(first, second);
        assert_eq!(vec![(0, 0, 0), (0, 1, 0), (1, 0, 1), (1, 1, 0)], first);
    }
}
