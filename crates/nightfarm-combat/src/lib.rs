//! Turn-based battle resolution for NIGHTFARM.
//!
//! Two rosters trade alternating passes of attacks with seeded random
//! targeting until one side is eliminated. Battles are produced as a lazy
//! sequence of attack events so the host controls pacing.

pub mod resolver;
pub mod unit;

pub use nightfarm_core as core;
pub use resolver::{resolve, Battle, BattleReport};
pub use unit::{build_roster, CombatUnit, UnitSpec};
