//! Compiles outer-totalistic rule strings into transition tables.
//!
//! Two notations are accepted:
//!
//! - Life-like `B3/S23` (the slash is optional) or the older `survival/birth`
//!   form `23/3`, producing a 2-state automaton.
//! - Generations `B2/S/C3` (or Golly's `survival/birth/states` form, `/2/3`),
//!   producing an automaton where live cells that don't survive decay through
//!   a chain of dying states before becoming dead.
//!
//! Only neighbors in state 1 count as live.

use itertools::Itertools;
use regex::{Captures, Regex};

use super::{Automaton, StateRule, NEIGHBOR_COUNT};
use crate::error::{CaError, CaResult};
use crate::State;

/// Maximum number of states for a Generations rule.
///
/// Every neighbor count pattern must be listed explicitly, and the number of
/// patterns grows quickly with the number of states.
pub const MAX_GENERATIONS_STATES: usize = 10;

const DEAD_COLOR: &str = "#181818";
const LIVE_COLOR: &str = "#ff6060";
const DYING_COLOR: &str = "#aaffaa";

lazy_static! {
    static ref LIFE_LIKE_REGEX: Regex = Regex::new(r"^[Bb](\d*)/?[Ss](\d*)$").unwrap();
    static ref GENERATIONS_BSC_REGEX: Regex =
        Regex::new(r"^[Bb](\d*)/[Ss](\d*)/[CcGg]?(\d+)$").unwrap();
    static ref SURVIVAL_BIRTH_REGEX: Regex = Regex::new(r"^(\d*)/(\d*)(?:/(\d+))?$").unwrap();
}

/// Parses a rule string in either notation.
pub fn parse_rule(s: &str) -> CaResult<Automaton> {
    let s = s.trim();
    let invalid = || CaError::InvalidRuleString(s.to_owned());

    let (birth, survival, state_count) = if let Some(caps) = LIFE_LIKE_REGEX.captures(s) {
        (group(&caps, 1), group(&caps, 2), "2")
    } else if let Some(caps) = GENERATIONS_BSC_REGEX.captures(s) {
        (group(&caps, 1), group(&caps, 2), group(&caps, 3))
    } else if let Some(caps) = SURVIVAL_BIRTH_REGEX.captures(s) {
        let state_count = caps.get(3).map_or("2", |m| m.as_str());
        (group(&caps, 2), group(&caps, 1), state_count)
    } else {
        return Err(invalid());
    };
    let birth = parse_counts(birth).ok_or_else(invalid)?;
    let survival = parse_counts(survival).ok_or_else(invalid)?;
    let state_count: usize = state_count.parse().map_err(|_| invalid())?;
    if !(2..=MAX_GENERATIONS_STATES).contains(&state_count) {
        return Err(invalid());
    }
    generations(s, &birth, &survival, state_count)
}

/// Constructs a Generations automaton from birth and survival neighbor
/// counts. With `state_count == 2` this is an ordinary Life-like rule.
pub fn generations(
    name: &str,
    birth: &[u8],
    survival: &[u8],
    state_count: usize,
) -> CaResult<Automaton> {
    if !(2..=MAX_GENERATIONS_STATES).contains(&state_count)
        || birth.iter().chain(survival).any(|&n| n > NEIGHBOR_COUNT)
    {
        return Err(CaError::InvalidRuleString(name.to_owned()));
    }
    let patterns = neighbor_patterns(state_count);

    let mut dead = StateRule::new("Dead", DEAD_COLOR, 0);
    for counts in patterns.iter().filter(|counts| birth.contains(&counts[1])) {
        dead = dead.with_transition(counts.clone(), 1);
    }

    // A live cell that doesn't survive starts dying, or dies immediately if
    // there are no dying states.
    let decay = if state_count > 2 { 2 } else { 0 };
    let mut live = StateRule::new("Live", LIVE_COLOR, decay);
    for counts in patterns.iter().filter(|counts| survival.contains(&counts[1])) {
        live = live.with_transition(counts.clone(), 1);
    }

    let mut states = vec![dead, live];
    for i in 2..state_count {
        let next = if i + 1 == state_count { 0 } else { i + 1 };
        states.push(StateRule::new(
            format!("Dying {}", i - 1),
            DYING_COLOR,
            next as State,
        ));
    }
    Automaton::new(name, states)
}

/// Returns every way to distribute the 8 neighbors among `state_count`
/// states, as per-state counts.
pub fn neighbor_patterns(state_count: usize) -> Vec<Vec<u8>> {
    fn recurse(prefix: &mut Vec<u8>, remaining: u8, slots: usize, out: &mut Vec<Vec<u8>>) {
        if slots == 1 {
            prefix.push(remaining);
            out.push(prefix.clone());
            prefix.pop();
            return;
        }
        for n in 0..=remaining {
            prefix.push(n);
            recurse(prefix, remaining - n, slots - 1, out);
            prefix.pop();
        }
    }

    let mut out = vec![];
    if state_count > 0 {
        recurse(&mut vec![], NEIGHBOR_COUNT, state_count, &mut out);
    }
    out
}

fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Parses a string of neighbor counts such as `"23"`, ignoring duplicates.
fn parse_counts(s: &str) -> Option<Vec<u8>> {
    s.chars()
        .map(|ch| ch.to_digit(10).filter(|&n| n <= NEIGHBOR_COUNT as u32))
        .map(|n| n.map(|n| n as u8))
        .collect::<Option<Vec<u8>>>()
        .map(|counts| counts.into_iter().unique().collect_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_patterns() {
        assert_eq!(vec![vec![8]], neighbor_patterns(1));
        assert_eq!(9, neighbor_patterns(2).len());
        // C(10, 2)
        assert_eq!(45, neighbor_patterns(3).len());
        for counts in neighbor_patterns(4) {
            assert_eq!(8, counts.iter().sum::<u8>());
        }
    }

    #[test]
    fn test_parse_life_like() {
        let life = parse_rule("B3/S23").unwrap();
        assert_eq!(2, life.state_count());
        assert_eq!("B3/S23", life.name());
        let dead = &life.states()[0];
        assert_eq!(1, dead.transitions().len());
        assert_eq!(1, dead.next_state(&[5, 3]));
        let live = &life.states()[1];
        assert_eq!(2, live.transitions().len());
        assert_eq!(1, live.next_state(&[6, 2]));
        assert_eq!(0, live.next_state(&[4, 4]));

        assert!(parse_rule("b36/s23").is_ok());
        assert!(parse_rule("B2/S").is_ok());

        // Without the slash, and in survival/birth order.
        assert!(life.same_rules(&parse_rule("B3S23").unwrap()));
        assert!(life.same_rules(&parse_rule("b3s23").unwrap()));
        let sb = parse_rule("23/3").unwrap();
        assert_eq!(2, sb.state_count());
        assert!(life.same_rules(&sb));
        assert!(!life.same_rules(&parse_rule("3/23").unwrap()));
    }

    #[test]
    fn test_parse_generations() {
        let bsc = parse_rule("B2/S/C3").unwrap();
        let sbc = parse_rule("/2/3").unwrap();
        assert!(bsc.same_rules(&sbc));
        assert_eq!(3, bsc.state_count());
        assert_eq!(7, bsc.states()[0].transitions().len());
        assert_eq!(2, bsc.states()[1].default());
        assert_eq!(0, bsc.states()[2].default());

        let star_wars = parse_rule("345/2/4").unwrap();
        assert_eq!(4, star_wars.state_count());
        assert_eq!(3, star_wars.states()[2].default());
        assert_eq!(0, star_wars.states()[3].default());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let garbage = [
            "", "Life", "B9/S23", "B3/S23/1", "B3/S23/C11", "B3//S23", "3/23/x", "3/23/",
        ];
        for s in &garbage {
            assert_eq!(
                Err(CaError::InvalidRuleString(s.to_string())),
                parse_rule(s),
                "{:?} should not parse",
                s
            );
        }
    }
}
