//! Double-buffered simulation driver.

use log::debug;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use super::step;
use crate::board::Board;
use crate::config::SimConfig;
use crate::error::{CaError, CaResult};
use crate::rule::registry::resolve_automaton;
use crate::rule::Automaton;
use crate::State;

/// Automaton simulation methods shared by owned and shared simulations.
pub trait Simulate {
    /// Steps forward by one generation.
    fn step(&mut self) -> CaResult<()>;
    /// Returns the number of generations that have elapsed.
    fn generation(&self) -> u64;
    /// Returns the number of cells in each state, indexed by state.
    fn population(&self) -> Vec<usize>;
    /// Returns the state of a cell.
    fn get_cell(&self, row: usize, col: usize) -> CaResult<State>;
    /// Sets the state of a cell, checking it against the active automaton.
    fn set_cell(&mut self, row: usize, col: usize, state: State) -> CaResult<()>;

    /// Steps forward by the given number of generations, stopping at the
    /// first failure.
    fn step_n(&mut self, generations: u64) -> CaResult<()> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }
}

/// A simulation that owns two boards and swaps them after each step.
///
/// The current board is only ever replaced by a completely computed next
/// generation, so observers never see a partially stepped board.
#[derive(Debug, Clone)]
pub struct Simulation {
    automaton: Arc<Automaton>,
    current: Board,
    next: Board,
    generation: u64,
}

impl Simulation {
    /// Constructs a simulation with an empty board.
    ///
    /// # Panics
    ///
    /// This function panics if `rows` or `cols` is zero. Use `from_config()`
    /// to get an error instead.
    pub fn new(automaton: Arc<Automaton>, rows: usize, cols: usize) -> Self {
        debug!(
            "Creating {}x{} simulation of {}",
            rows,
            cols,
            automaton.name()
        );
        Self {
            automaton,
            current: Board::new(rows, cols),
            next: Board::new(rows, cols),
            generation: 0,
        }
    }
    /// Constructs a simulation from a configuration, resolving the automaton
    /// by name.
    pub fn from_config(config: &SimConfig) -> CaResult<Self> {
        if config.rows == 0 || config.cols == 0 {
            return Err(CaError::InvalidSize {
                rows: config.rows,
                cols: config.cols,
            });
        }
        let automaton = resolve_automaton(&config.automaton)?;
        Ok(Self::new(automaton, config.rows, config.cols))
    }

    /// Returns the active automaton.
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }
    /// Replaces the active automaton without touching the board.
    ///
    /// If the board contains states that the new automaton doesn't have,
    /// stepping fails until those cells are edited.
    pub fn set_automaton(&mut self, automaton: Arc<Automaton>) {
        debug!(
            "Switching from {} to {}",
            self.automaton.name(),
            automaton.name()
        );
        self.automaton = automaton;
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Copies a pattern onto the current board with its top-left corner at
    /// `(row, col)`, wrapping around the edges.
    pub fn paste(&mut self, pattern: &Board, row: usize, col: usize) -> CaResult<()> {
        self.current.paste(&self.automaton, pattern, row, col)
    }

    /// Sets every cell to state 0 and resets the generation count.
    pub fn clear(&mut self) {
        self.current.clear();
        self.generation = 0;
    }
}

impl Simulate for Simulation {
    fn step(&mut self) -> CaResult<()> {
        step(&self.automaton, &self.current, &mut self.next)?;
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        Ok(())
    }
    fn generation(&self) -> u64 {
        self.generation
    }
    fn population(&self) -> Vec<usize> {
        self.current.population(self.automaton.state_count())
    }
    fn get_cell(&self, row: usize, col: usize) -> CaResult<State> {
        self.current.get_cell(row, col)
    }
    fn set_cell(&mut self, row: usize, col: usize, state: State) -> CaResult<()> {
        self.current.set_cell(&self.automaton, row, col, state)
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} @ generation {}", self.automaton.name(), self.generation)?;
        write!(f, "{}", self.current)
    }
}

/// A simulation that can be stepped and edited from multiple threads.
///
/// Every operation holds the lock for its whole duration, so an edit can
/// never land in the middle of a step.
#[derive(Debug, Clone)]
pub struct SharedSimulation(Arc<Mutex<Simulation>>);

impl From<Simulation> for SharedSimulation {
    fn from(sim: Simulation) -> Self {
        Self(Arc::new(Mutex::new(sim)))
    }
}

impl SharedSimulation {
    /// Runs a closure with exclusive access to the simulation.
    pub fn with<R>(&self, f: impl FnOnce(&mut Simulation) -> R) -> R {
        f(&mut self.0.lock())
    }
    /// Returns a copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.0.lock().board().clone()
    }
}

impl Simulate for SharedSimulation {
    fn step(&mut self) -> CaResult<()> {
        self.0.lock().step()
    }
    fn step_n(&mut self, generations: u64) -> CaResult<()> {
        self.0.lock().step_n(generations)
    }
    fn generation(&self) -> u64 {
        self.0.lock().generation()
    }
    fn population(&self) -> Vec<usize> {
        self.0.lock().population()
    }
    fn get_cell(&self, row: usize, col: usize) -> CaResult<State> {
        self.0.lock().get_cell(row, col)
    }
    fn set_cell(&mut self, row: usize, col: usize, state: State) -> CaResult<()> {
        self.0.lock().set_cell(row, col, state)
    }
}
