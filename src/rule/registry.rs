//! Built-in automata, selectable by name.

use log::debug;
use std::sync::Arc;

use super::{notation, Automaton, StateRule};
use crate::error::{CaError, CaResult};

/// Name of Conway's Game of Life in the registry.
pub const GAME_OF_LIFE_NAME: &str = "Game of Life";
/// Name of Seeds in the registry.
pub const SEEDS_NAME: &str = "Seeds";
/// Name of Brian's Brain in the registry.
pub const BRIANS_BRAIN_NAME: &str = "Brian's Brain";

lazy_static! {
    /// Conway's Game of Life (B3/S23).
    pub static ref GAME_OF_LIFE: Arc<Automaton> = Arc::new(
        Automaton::new(
            GAME_OF_LIFE_NAME,
            vec![
                StateRule::new("Dead", "#181818", 0).with_transition(vec![5, 3], 1),
                StateRule::new("Live", "#ff6060", 0)
                    .with_transition(vec![6, 2], 1)
                    .with_transition(vec![5, 3], 1),
            ],
        )
        .expect("Invalid built-in automaton")
    );

    /// Seeds (B2/S): every live cell dies, and dead cells with exactly two
    /// live neighbors are born.
    pub static ref SEEDS: Arc<Automaton> = Arc::new(
        Automaton::new(
            SEEDS_NAME,
            vec![
                StateRule::new("Dead", "#181818", 0).with_transition(vec![6, 2], 1),
                StateRule::new("Live", "#ff6060", 0),
            ],
        )
        .expect("Invalid built-in automaton")
    );

    /// Brian's Brain: off cells with exactly two firing neighbors fire, firing
    /// cells start dying, and dying cells turn off.
    pub static ref BRIANS_BRAIN: Arc<Automaton> = {
        let mut off = StateRule::new("Off", "#181818", 0);
        // Any number of dying neighbors, as long as exactly two are firing.
        for dying in 0..=6_u8 {
            off = off.with_transition(vec![6 - dying, 2, dying], 1);
        }
        Arc::new(
            Automaton::new(
                BRIANS_BRAIN_NAME,
                vec![
                    off,
                    StateRule::new("Firing", "#ff6060", 2),
                    StateRule::new("Dying", "#aaffaa", 0),
                ],
            )
            .expect("Invalid built-in automaton"),
        )
    };

    static ref REGISTRY: Vec<Arc<Automaton>> = vec![
        Arc::clone(&*GAME_OF_LIFE),
        Arc::clone(&*SEEDS),
        Arc::clone(&*BRIANS_BRAIN),
    ];
}

/// Returns the names of all built-in automata, in registry order.
pub fn automaton_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|a| a.name())
}

/// Returns all built-in automata, in registry order.
pub fn automata() -> &'static [Arc<Automaton>] {
    &REGISTRY
}

/// Returns the built-in automaton with the given name.
pub fn select_automaton(name: &str) -> CaResult<Arc<Automaton>> {
    let ret = REGISTRY
        .iter()
        .find(|a| a.name() == name)
        .map(Arc::clone)
        .ok_or_else(|| CaError::UnknownAutomaton(name.to_owned()))?;
    debug!("Selected automaton {}", ret);
    Ok(ret)
}

/// Returns the built-in automaton with the given name, or else compiles the
/// name as a rule string (see [`notation`]).
pub fn resolve_automaton(name: &str) -> CaResult<Arc<Automaton>> {
    select_automaton(name).or_else(|_| {
        notation::parse_rule(name)
            .map(Arc::new)
            .map_err(|_| CaError::UnknownAutomaton(name.to_owned()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_name() {
        assert_eq!(
            vec!["Game of Life", "Seeds", "Brian's Brain"],
            automaton_names().collect::<Vec<_>>(),
        );
        for name in automaton_names() {
            assert_eq!(name, select_automaton(name).unwrap().name());
        }
        assert_eq!(
            Err(CaError::UnknownAutomaton("Game of life".to_owned())),
            select_automaton("Game of life"),
        );
    }

    #[test]
    fn test_registry_matches_notation() {
        let cases = [
            (&*GAME_OF_LIFE, "B3/S23"),
            (&*SEEDS, "B2/S"),
            (&*BRIANS_BRAIN, "/2/3"),
        ];
        for (automaton, rule_string) in &cases {
            let compiled = notation::parse_rule(rule_string).unwrap();
            assert!(
                automaton.same_rules(&compiled),
                "{} does not match {}",
                automaton,
                rule_string
            );
        }
    }

    #[test]
    fn test_resolve_falls_back_to_notation() {
        assert!(Arc::ptr_eq(&*SEEDS, &resolve_automaton("Seeds").unwrap()));
        assert_eq!(3, resolve_automaton("B2/S/C3").unwrap().state_count());
        assert_eq!(
            Err(CaError::UnknownAutomaton("Highlife".to_owned())),
            resolve_automaton("Highlife"),
        );
    }

    #[test]
    fn test_brians_brain_colors() {
        let colors: Vec<_> = BRIANS_BRAIN.states().iter().map(StateRule::color).collect();
        assert_eq!(vec!["#181818", "#ff6060", "#aaffaa"], colors);
    }
}
