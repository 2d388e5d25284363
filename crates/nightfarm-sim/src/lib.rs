//! Simulation engine for NIGHTFARM.
//!
//! Owns the day/night progression state machine, the farm, the herd and the
//! night table, runs systems each tick, and produces `GameStateSnapshot`s
//! for the host.

pub mod clock;
pub mod engine;
pub mod herd;
pub mod scenario;
pub mod systems;

pub use engine::SimulationEngine;
pub use nightfarm_core as core;

#[cfg(test)]
mod tests;
