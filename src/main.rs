//! Command-line driver that runs an automaton and prints the board.
//!
//! Usage: `torus_ca [automaton] [generations] [pattern-file]`
//!
//! The automaton may be a registry name such as "Brian's Brain" or a rule
//! string such as `B36/S23`. The pattern is pasted in the middle of the board;
//! without one, a small seed pattern suited to the automaton is used.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;

use torus_ca::io::{parse_pattern, write_pattern};
use torus_ca::prelude::*;

fn main() -> Result<()> {
    simple_logger::init().context("Error initializing logger")?;
    info!("Starting torus_ca v{} ...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let mut config = SimConfig::default();
    if let Some(automaton) = args.next() {
        config.automaton = automaton;
    }
    if let Some(generations) = args.next() {
        config.generations = generations
            .parse()
            .with_context(|| format!("Invalid generation count {:?}", generations))?;
    }
    let pattern = match args.next() {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Error reading pattern file {:?}", path))?;
            parse_pattern(&text).with_context(|| format!("Error parsing {:?}", path))?
        }
        None => parse_pattern(default_seed(&config.automaton))?,
    };
    debug!("Configuration: {:?}", config);

    let mut sim = Simulation::from_config(&config)?;
    let row = config.rows.saturating_sub(pattern.rows()) / 2;
    let col = config.cols.saturating_sub(pattern.cols()) / 2;
    sim.paste(&pattern, row, col)?;

    sim.step_n(config.generations)?;
    info!(
        "Ran {} for {} generations; population {:?}",
        sim.automaton().name(),
        sim.generation(),
        sim.population()
    );
    print!(
        "{}",
        write_pattern(
            sim.board(),
            Some(format!("{} @ generation {}", sim.automaton().name(), sim.generation()).as_str()),
        )
    );
    Ok(())
}

/// Returns a seed pattern that does something interesting under the
/// automaton.
fn default_seed(automaton: &str) -> &'static str {
    match automaton {
        // Firing pair trailed by dying cells.
        "Brian's Brain" => "OO\n22\n",
        "Seeds" => "O.O\n",
        // R-pentomino.
        _ => ".OO\nOO.\n.O.\n",
    }
}
