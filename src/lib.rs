//! Table-driven cellular automata on fixed-size toroidal grids.
//!
//! An [`Automaton`](rule::Automaton) is pure data: one transition table per
//! cell state, keyed by how many of a cell's eight neighbors are in each
//! state. [`step()`](sim::step) applies it to every cell of a board, and
//! [`Simulation`](sim::Simulation) owns a pair of boards and swaps them after
//! each generation.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
extern crate lazy_static;

pub mod board;
pub mod config;
pub mod error;
pub mod io;
pub mod rule;
pub mod sim;

/// Cell state, which is also an index into an automaton's list of states.
pub type State = u8;

pub mod prelude {
    //! Common types and functions.

    pub use crate::board::Board;
    pub use crate::config::SimConfig;
    pub use crate::error::{CaError, CaResult};
    pub use crate::rule::registry::{
        automaton_names, resolve_automaton, select_automaton, BRIANS_BRAIN, GAME_OF_LIFE,
        SEEDS,
    };
    pub use crate::rule::{Automaton, StateRule};
    pub use crate::sim::{step, NeighborCounter, SharedSimulation, Simulate, Simulation};
    pub use crate::State;
}

#[cfg(test)]
mod tests;
