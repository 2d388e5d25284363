//! Core types and definitions for the NIGHTFARM simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, events, state snapshots, configuration, errors and constants.
//! It has no dependency on any runtime framework or ECS.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
