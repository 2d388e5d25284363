//! Systems run by the engine each tick.
//!
//! Systems are plain functions over the state they are handed. They do not
//! own state and report what happened by pushing `GameEvent`s.

pub mod battle;
pub mod drops;
pub mod growth;
pub mod snapshot;
