//! Farming for NIGHTFARM.
//!
//! Plot spacing, the per-crop growth state machine, and the hecs-backed
//! crop table that owns every planted crop.

pub mod components;
pub mod crops;
pub mod farm;
pub mod growth;
pub mod plots;

pub use crops::{CropHandle, CropSimulation, CropTick};
pub use farm::Farm;
pub use nightfarm_core as core;
pub use plots::FarmingState;
