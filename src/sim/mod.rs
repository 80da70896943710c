//! Neighbor counting, stepping, and the simulation driver.

mod neighbors;
mod simulation;
mod step;

pub use neighbors::{NeighborCounter, MOORE_OFFSETS};
pub use simulation::{SharedSimulation, Simulate, Simulation};
pub use step::step;
