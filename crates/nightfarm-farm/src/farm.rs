//! The farm: plot spacing plus the crop table, kept in step.

use glam::Vec2;
use tracing::{debug, warn};

use nightfarm_core::config::CropConfig;
use nightfarm_core::enums::{Rejection, WaterOutcome};
use nightfarm_core::error::SimError;
use nightfarm_core::state::CropSnapshot;

use crate::crops::{CropHandle, CropSimulation, CropTick};
use crate::plots::FarmingState;

/// Farmable ground and everything growing on it.
pub struct Farm {
    plots: FarmingState,
    crops: CropSimulation,
}

impl Farm {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] if either the spacing or the
    /// crop tuning is invalid.
    pub fn new(min_plant_distance: f32, crop: CropConfig) -> Result<Self, SimError> {
        Ok(Self {
            plots: FarmingState::new(min_plant_distance)?,
            crops: CropSimulation::new(crop)?,
        })
    }

    /// Plant a crop if the spot respects the minimum spacing.
    pub fn plant(&mut self, position: Vec2) -> Result<CropHandle, Rejection> {
        if !self.plots.try_plant(position.x, position.y) {
            debug!(x = position.x, y = position.y, "Too close to another crop");
            return Err(Rejection::TooCloseToCrop);
        }
        Ok(self.crops.plant(position))
    }

    pub fn water(&mut self, handle: CropHandle) -> WaterOutcome {
        self.crops.water(handle)
    }

    pub fn water_nearby(&mut self, position: Vec2, radius: f32) -> Vec<(CropHandle, WaterOutcome)> {
        self.crops.water_nearby(position, radius)
    }

    /// Grow every crop; harvested crops give their plot back.
    pub fn tick(&mut self, dt: f32) -> Vec<(CropHandle, CropTick)> {
        let ticks = self.crops.tick_all(dt);
        for (_handle, tick) in &ticks {
            if let CropTick::Harvested { position } = tick {
                self.plots.remove(position.x, position.y);
            }
        }
        ticks
    }

    pub fn pause_all(&mut self) {
        self.crops.pause_all();
    }

    pub fn resume_all(&mut self) {
        self.crops.resume_all();
    }

    pub fn snapshot(&self) -> Vec<CropSnapshot> {
        self.crops.snapshot()
    }

    /// Replace every crop and plot with the saved ones. A crop saved on a
    /// spot that is already taken is dropped.
    pub fn load_snapshot(&mut self, crops: &[CropSnapshot]) -> Vec<CropHandle> {
        self.plots.clear();
        let mut kept = Vec::with_capacity(crops.len());
        for crop in crops {
            if self.plots.restore(crop.position.x, crop.position.y) {
                kept.push(*crop);
            } else {
                warn!(x = crop.position.x, y = crop.position.y, "Duplicate saved crop dropped");
            }
        }
        self.crops.load_snapshot(&kept)
    }

    pub fn plots(&self) -> &FarmingState {
        &self.plots
    }

    pub fn crops(&self) -> &CropSimulation {
        &self.crops
    }
}
