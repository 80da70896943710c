//! Single-generation transition of a whole board.

use log::{trace, warn};

use super::NeighborCounter;
use crate::board::Board;
use crate::error::{CaError, CaResult};
use crate::rule::Automaton;

/// Writes the next generation of `source` into `destination`.
///
/// `source` is never mutated and `destination` is never read, so the two
/// boards can be swapped afterwards to advance a double-buffered simulation.
/// Every cell of `destination` is written exactly once.
///
/// Returns `InvalidState` without writing anything if `source` contains a
/// state that `automaton` does not have, and `SizeMismatch` if the boards
/// have different shapes.
pub fn step(automaton: &Automaton, source: &Board, destination: &mut Board) -> CaResult<()> {
    if source.shape() != destination.shape() {
        return Err(CaError::SizeMismatch {
            expected: source.shape(),
            got: destination.shape(),
        });
    }
    if let Err(e) = automaton.check_board(source) {
        warn!("Refusing to step board under {}: {}", automaton.name(), e);
        return Err(e);
    }

    let rules = automaton.states();
    let mut counter = NeighborCounter::new(automaton.state_count());
    for (row, col, state) in source.iter_cells() {
        let counts = counter.count(source, row, col);
        destination.write(row, col, rules[state as usize].next_state(counts));
    }
    trace!(
        "Stepped {}x{} board under {}",
        source.rows(),
        source.cols(),
        automaton.name()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::registry::{BRIANS_BRAIN, GAME_OF_LIFE, SEEDS};

    #[test]
    fn test_step_rejects_mismatched_boards() {
        let source = Board::new(4, 4);
        let mut destination = Board::new(4, 5);
        assert_eq!(
            Err(CaError::SizeMismatch {
                expected: (4, 4),
                got: (4, 5)
            }),
            step(&GAME_OF_LIFE, &source, &mut destination),
        );
    }

    #[test]
    fn test_step_rejects_invalid_state() {
        let mut source = Board::new(4, 4);
        source.set_cell(&BRIANS_BRAIN, 1, 1, 2).unwrap();
        let mut destination = Board::new(4, 4);
        destination.fill(1);
        assert_eq!(
            Err(CaError::InvalidState {
                state: 2,
                state_count: 2
            }),
            step(&GAME_OF_LIFE, &source, &mut destination),
        );
        // The destination is untouched.
        assert!(destination.iter_cells().all(|(_, _, s)| s == 1));
    }

    #[test]
    fn test_step_does_not_read_destination() {
        let mut source = Board::new(6, 6);
        for &(r, c) in &[(2, 2), (2, 3)] {
            source.set_cell(&SEEDS, r, c, 1).unwrap();
        }
        let mut clean = Board::new(6, 6);
        let mut dirty = Board::new(6, 6);
        dirty.fill(1);
        step(&SEEDS, &source, &mut clean).unwrap();
        step(&SEEDS, &source, &mut dirty).unwrap();
        assert_eq!(clean, dirty);
        // Seeds: the two live cells die and four cells are born.
        assert_eq!(vec![32, 4], clean.population(2));
    }
}
