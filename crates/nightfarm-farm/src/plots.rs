//! Planted-plot bookkeeping and minimum-spacing checks.

use glam::Vec2;

use nightfarm_core::constants::PLOT_REMOVE_TOLERANCE;
use nightfarm_core::error::{require_positive, SimError};

/// Positions of every occupied plot. Unordered set semantics.
#[derive(Debug, Clone)]
pub struct FarmingState {
    plots: Vec<Vec2>,
    min_plant_distance: f32,
}

impl FarmingState {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] unless `min_plant_distance`
    /// is finite and positive.
    pub fn new(min_plant_distance: f32) -> Result<Self, SimError> {
        require_positive("min_plant_distance", min_plant_distance)?;
        Ok(Self {
            plots: Vec::new(),
            min_plant_distance,
        })
    }

    /// Record a plot at `(x, y)` unless another plot is strictly closer than
    /// the minimum plant distance.
    pub fn try_plant(&mut self, x: f32, y: f32) -> bool {
        let candidate = Vec2::new(x, y);
        if self
            .plots
            .iter()
            .any(|existing| existing.distance(candidate) < self.min_plant_distance)
        {
            return false;
        }
        self.plots.push(candidate);
        true
    }

    /// Remove every plot within [`PLOT_REMOVE_TOLERANCE`] of `(x, y)`.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, x: f32, y: f32) -> bool {
        let target = Vec2::new(x, y);
        let before = self.plots.len();
        self.plots
            .retain(|plot| plot.distance(target) >= PLOT_REMOVE_TOLERANCE);
        self.plots.len() != before
    }

    /// Record a plot without the spacing check (restoring saved crops).
    /// Returns false if a plot is already recorded within
    /// [`PLOT_REMOVE_TOLERANCE`] of the point.
    pub fn restore(&mut self, x: f32, y: f32) -> bool {
        let candidate = Vec2::new(x, y);
        if self
            .plots
            .iter()
            .any(|existing| existing.distance(candidate) < PLOT_REMOVE_TOLERANCE)
        {
            return false;
        }
        self.plots.push(candidate);
        true
    }

    pub fn clear(&mut self) {
        self.plots.clear();
    }

    pub fn plots(&self) -> &[Vec2] {
        &self.plots
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    pub fn min_plant_distance(&self) -> f32 {
        self.min_plant_distance
    }
}
