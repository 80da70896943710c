//! Everything related to the description of an automaton, primarily its
//! per-state transition tables.

use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;

pub mod notation;
pub mod registry;

use crate::board::Board;
use crate::error::{CaError, CaResult};
use crate::State;

/// Number of cells in the Moore neighborhood, excluding the center.
pub const NEIGHBOR_COUNT: u8 = 8;

/// Maximum number of states an automaton can have.
pub const MAX_STATES: usize = State::MAX as usize + 1;

/// Transition rule for a single cell state.
///
/// Each key in the transition table is the number of neighbors in each state,
/// indexed by state. A cell whose neighborhood does not match any key becomes
/// the default state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRule {
    name: String,
    color: String,
    default: State,
    transitions: HashMap<Box<[u8]>, State>,
}
impl StateRule {
    /// Constructs a rule with an empty transition table.
    pub fn new(name: impl ToString, color: impl ToString, default: State) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            default,
            transitions: HashMap::new(),
        }
    }
    /// Adds a transition from a neighbor count pattern to a next state.
    ///
    /// Keys are checked when the rule is added to an [`Automaton`].
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_transition(mut self, counts: impl Into<Box<[u8]>>, next: State) -> Self {
        self.transitions.insert(counts.into(), next);
        self
    }

    /// Returns the human-readable name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the display color of the state, as `#rrggbb`.
    pub fn color(&self) -> &str {
        &self.color
    }
    /// Returns the state that a cell becomes if no transition matches.
    pub fn default(&self) -> State {
        self.default
    }
    /// Returns the transition table.
    pub fn transitions(&self) -> &HashMap<Box<[u8]>, State> {
        &self.transitions
    }

    /// Returns the next state for a cell in this state given the number of
    /// neighbors in each state.
    #[inline]
    pub fn next_state(&self, counts: &[u8]) -> State {
        self.transitions
            .get(counts)
            .copied()
            .unwrap_or(self.default)
    }

    fn validate(&self, state: State, state_count: usize) -> CaResult<()> {
        check_state(self.default, state_count)?;
        for (key, &next) in &self.transitions {
            if key.len() != state_count {
                return Err(CaError::InvalidTransition {
                    state,
                    reason: format!(
                        "key {:?} has {} counts but there are {} states",
                        key,
                        key.len(),
                        state_count
                    ),
                });
            }
            let total: u32 = key.iter().map(|&n| n as u32).sum();
            if total != NEIGHBOR_COUNT as u32 {
                return Err(CaError::InvalidTransition {
                    state,
                    reason: format!(
                        "key {:?} counts {} neighbors instead of {}",
                        key, total, NEIGHBOR_COUNT
                    ),
                });
            }
            check_state(next, state_count)?;
        }
        Ok(())
    }
}

/// Cellular automaton rule set: one `StateRule` per state, indexed by state.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    name: String,
    states: Vec<StateRule>,
}
impl Automaton {
    /// Constructs an automaton, checking that every default state, transition
    /// key, and transition target is consistent with the number of states.
    pub fn new(name: impl ToString, states: Vec<StateRule>) -> CaResult<Self> {
        let state_count = states.len();
        if state_count == 0 || state_count > MAX_STATES {
            return Err(CaError::InvalidStateCount(state_count));
        }
        for (i, rule) in states.iter().enumerate() {
            rule.validate(i as State, state_count)?;
        }
        Ok(Self {
            name: name.to_string(),
            states,
        })
    }

    /// Returns the name of the automaton.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
    /// Returns the rules for all states, indexed by state.
    pub fn states(&self) -> &[StateRule] {
        &self.states
    }
    /// Returns the rule for a state.
    pub fn state(&self, state: State) -> CaResult<&StateRule> {
        self.states
            .get(state as usize)
            .ok_or_else(|| CaError::InvalidState {
                state,
                state_count: self.state_count(),
            })
    }

    /// Returns an error if `state` is not a valid state of this automaton.
    pub fn check_state(&self, state: State) -> CaResult<()> {
        check_state(state, self.state_count())
    }
    /// Returns an error if any cell on the board is not a valid state of this
    /// automaton.
    pub fn check_board(&self, board: &Board) -> CaResult<()> {
        self.check_state(board.max_state())
    }

    /// Returns whether two automata have identical transition behavior,
    /// ignoring names and colors.
    pub fn same_rules(&self, other: &Self) -> bool {
        self.states.len() == other.states.len()
            && self
                .states
                .iter()
                .zip(&other.states)
                .all(|(a, b)| a.default == b.default && a.transitions == b.transitions)
    }
}
impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name,
            self.states.iter().map(StateRule::name).join(", ")
        )
    }
}

fn check_state(state: State, state_count: usize) -> CaResult<()> {
    if (state as usize) < state_count {
        Ok(())
    } else {
        Err(CaError::InvalidState { state, state_count })
    }
}
