//! Whole-board scenario and property tests.

use std::collections::HashSet;
use std::sync::Arc;

use crate::prelude::*;


/// Returns the positions of all cells that are not in state 0.
fn non_default_set(board: &Board) -> HashSet<(usize, usize)> {
    board
        .iter_cells()
        .filter(|&(_, _, state)| state != 0)
        .map(|(r, c, _)| (r, c))
        .collect()
}

/// Returns the positions of all cells in the given state.
fn cells_in_state(board: &Board, state: State) -> HashSet<(usize, usize)> {
    board
        .iter_cells()
        .filter(|&(_, _, s)| s == state)
        .map(|(r, c, _)| (r, c))
        .collect()
}

/// Constructs a simulation with the given cells set.
fn make_sim(
    automaton: &Arc<Automaton>,
    rows: usize,
    cols: usize,
    cells: &[(usize, usize, State)],
) -> Simulation {
    let mut sim = Simulation::new(Arc::clone(automaton), rows, cols);
    for &(r, c, state) in cells {
        sim.set_cell(r, c, state).unwrap();
    }
    sim
}
