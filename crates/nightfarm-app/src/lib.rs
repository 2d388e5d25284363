//! NIGHTFARM headless host.
//!
//! This crate wires the simulation onto a game-loop thread, loads config
//! and save files, and drives a scripted session from the command line.

pub mod error;
pub mod game_loop;
pub mod persistence;
pub mod script;
pub mod state;

pub use nightfarm_core as core;
