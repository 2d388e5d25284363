//! ECS components for crop entities.
//!
//! Components are plain data structs with no methods.
//! Growth logic lives in `growth`, not here.

use glam::Vec2;

use nightfarm_core::enums::GrowthState;

/// World position the crop was planted at.
#[derive(Debug, Clone, Copy)]
pub struct CropPosition(pub Vec2);

/// Growth progress of a crop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CropGrowth {
    pub state: GrowthState,
    /// Current stage index, 0-based.
    pub stage: u32,
    /// Seconds accumulated in the current stage.
    pub elapsed_secs: f32,
    /// Frozen by the progression controller (battle time).
    pub paused: bool,
}

/// Planting sequence number, used to keep iteration order stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlantOrder(pub u64);
