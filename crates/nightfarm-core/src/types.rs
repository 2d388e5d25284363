//! Fundamental identifier and time types.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Stable identifier of a planted crop, valid until it is harvested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CropId(pub u64);

/// Identifier of a unit within one battle: its side and roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId {
    pub side: crate::enums::Side,
    pub slot: u32,
}

impl UnitId {
    pub fn new(side: crate::enums::Side, slot: u32) -> Self {
        Self { side, slot }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each engine tick).
    pub tick: u64,
    /// Elapsed simulated seconds across all ticks.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}
