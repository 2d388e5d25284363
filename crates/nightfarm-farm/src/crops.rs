//! Crop table: owns every planted crop as a hecs entity and drives its
//! growth state machine.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use nightfarm_core::config::CropConfig;
use nightfarm_core::enums::{GrowthState, WaterOutcome};
use nightfarm_core::error::SimError;
use nightfarm_core::state::{CropSnapshot, CropView};
use nightfarm_core::types::CropId;

use crate::components::{CropGrowth, CropPosition, PlantOrder};
use crate::growth::{self, GrowthChange};

/// Handle to a planted crop. Stale once the crop is harvested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropHandle(Entity);

impl CropHandle {
    /// Serializable identifier for events and views.
    pub fn id(self) -> CropId {
        CropId(self.0.to_bits().get())
    }

    /// Recover a handle from an identifier handed out by [`CropHandle::id`].
    pub fn from_id(id: CropId) -> Option<Self> {
        Entity::from_bits(id.0).map(CropHandle)
    }
}

/// Result of ticking one crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropTick {
    /// Nothing happened (unwatered, paused, or unknown handle).
    Idle,
    /// Time accumulated within the current stage.
    Progressed,
    StageAdvanced { stage: u32 },
    /// The crop finished; it has been removed from the table.
    Harvested { position: Vec2 },
}

/// The crop table.
pub struct CropSimulation {
    world: World,
    config: CropConfig,
    next_order: u64,
}

impl CropSimulation {
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] for a zero stage count or a
    /// non-positive stage duration.
    pub fn new(config: CropConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            config,
            next_order: 0,
        })
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Create an unwatered crop at stage 0. Spacing is the caller's concern.
    pub fn plant(&mut self, position: Vec2) -> CropHandle {
        let handle = self.spawn(position, CropGrowth::default());
        debug!(crop = handle.id().0, x = position.x, y = position.y, "Crop planted");
        handle
    }

    /// Recreate a crop from a snapshot. It comes back unwatered.
    pub fn restore(&mut self, snapshot: &CropSnapshot) -> CropHandle {
        let growth = CropGrowth {
            state: GrowthState::Unwatered,
            stage: snapshot.stage.min(self.config.final_stage()),
            elapsed_secs: snapshot.elapsed_secs.max(0.0),
            paused: false,
        };
        self.spawn(snapshot.position, growth)
    }

    fn spawn(&mut self, position: Vec2, growth: CropGrowth) -> CropHandle {
        let order = PlantOrder(self.next_order);
        self.next_order += 1;
        CropHandle(self.world.spawn((CropPosition(position), growth, order)))
    }

    /// Start growth. Only the first call on a crop has any effect.
    pub fn water(&mut self, handle: CropHandle) -> WaterOutcome {
        let Ok(mut growth) = self.world.get::<&mut CropGrowth>(handle.0) else {
            return WaterOutcome::AlreadyWatered;
        };
        match growth::water(&growth) {
            Some(next) => {
                *growth = next;
                info!(crop = handle.id().0, "Crop watered, growth starting");
                WaterOutcome::Started
            }
            None => {
                debug!(crop = handle.id().0, "Crop already watered");
                WaterOutcome::AlreadyWatered
            }
        }
    }

    /// Water every crop within `radius` of `position`, in planting order.
    pub fn water_nearby(&mut self, position: Vec2, radius: f32) -> Vec<(CropHandle, WaterOutcome)> {
        let in_range: Vec<CropHandle> = self
            .ordered()
            .into_iter()
            .filter(|&handle| {
                self.position(handle)
                    .is_some_and(|p| p.distance(position) <= radius)
            })
            .collect();

        in_range
            .into_iter()
            .map(|handle| (handle, self.water(handle)))
            .collect()
    }

    /// Advance one crop by `dt` seconds.
    pub fn tick(&mut self, handle: CropHandle, dt: f32) -> CropTick {
        let update = match self.world.get::<&CropGrowth>(handle.0) {
            Ok(current) => growth::evaluate(&current, dt, &self.config),
            Err(_) => return CropTick::Idle,
        };

        if let Ok(mut current) = self.world.get::<&mut CropGrowth>(handle.0) {
            *current = update.growth;
        }

        match update.change {
            GrowthChange::None => CropTick::Idle,
            GrowthChange::Progressed => CropTick::Progressed,
            GrowthChange::StageAdvanced(stage) => {
                debug!(crop = handle.id().0, stage, "Crop advanced stage");
                CropTick::StageAdvanced { stage }
            }
            GrowthChange::Finished => {
                let position = self.position(handle).unwrap_or_default();
                let _ = self.world.despawn(handle.0);
                info!(crop = handle.id().0, x = position.x, y = position.y, "Crop finished growing");
                CropTick::Harvested { position }
            }
        }
    }

    /// Advance every crop by `dt` seconds, in planting order.
    pub fn tick_all(&mut self, dt: f32) -> Vec<(CropHandle, CropTick)> {
        self.ordered()
            .into_iter()
            .map(|handle| (handle, self.tick(handle, dt)))
            .collect()
    }

    /// Freeze a crop. Elapsed stage time is left untouched.
    pub fn pause(&mut self, handle: CropHandle) -> bool {
        self.set_paused(handle, true)
    }

    pub fn resume(&mut self, handle: CropHandle) -> bool {
        self.set_paused(handle, false)
    }

    pub fn pause_all(&mut self) {
        for (_entity, growth) in self.world.query_mut::<&mut CropGrowth>() {
            growth.paused = true;
        }
    }

    pub fn resume_all(&mut self) {
        for (_entity, growth) in self.world.query_mut::<&mut CropGrowth>() {
            growth.paused = false;
        }
    }

    fn set_paused(&mut self, handle: CropHandle, paused: bool) -> bool {
        match self.world.get::<&mut CropGrowth>(handle.0) {
            Ok(mut growth) => {
                growth.paused = paused;
                true
            }
            Err(_) => false,
        }
    }

    /// Growth state; a handle that is no longer in the table was harvested.
    pub fn state(&self, handle: CropHandle) -> GrowthState {
        self.growth(handle)
            .map_or(GrowthState::Harvested, |growth| growth.state)
    }

    pub fn stage(&self, handle: CropHandle) -> Option<u32> {
        self.growth(handle).map(|growth| growth.stage)
    }

    pub fn elapsed(&self, handle: CropHandle) -> Option<f32> {
        self.growth(handle).map(|growth| growth.elapsed_secs)
    }

    pub fn is_paused(&self, handle: CropHandle) -> Option<bool> {
        self.growth(handle).map(|growth| growth.paused)
    }

    pub fn position(&self, handle: CropHandle) -> Option<Vec2> {
        self.world
            .get::<&CropPosition>(handle.0)
            .ok()
            .map(|position| position.0)
    }

    fn growth(&self, handle: CropHandle) -> Option<CropGrowth> {
        self.world.get::<&CropGrowth>(handle.0).ok().map(|g| *g)
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Live crop handles in planting order.
    pub fn ordered(&self) -> Vec<CropHandle> {
        let mut entries: Vec<(PlantOrder, Entity)> = self
            .world
            .query::<&PlantOrder>()
            .iter()
            .map(|(entity, order)| (*order, entity))
            .collect();
        entries.sort_unstable_by_key(|(order, _)| *order);
        entries
            .into_iter()
            .map(|(_, entity)| CropHandle(entity))
            .collect()
    }

    /// Persistable state of every crop, in planting order.
    pub fn snapshot(&self) -> Vec<CropSnapshot> {
        self.ordered()
            .into_iter()
            .filter_map(|handle| {
                let growth = self.growth(handle)?;
                Some(CropSnapshot {
                    position: self.position(handle)?,
                    stage: growth.stage,
                    elapsed_secs: growth.elapsed_secs,
                })
            })
            .collect()
    }

    /// Replace the table with the given crops.
    pub fn load_snapshot(&mut self, crops: &[CropSnapshot]) -> Vec<CropHandle> {
        self.world.clear();
        crops.iter().map(|snapshot| self.restore(snapshot)).collect()
    }

    /// Display rows for every crop, in planting order.
    pub fn views(&self) -> Vec<CropView> {
        self.ordered()
            .into_iter()
            .filter_map(|handle| {
                let growth = self.growth(handle)?;
                Some(CropView {
                    crop: handle.id(),
                    position: self.position(handle)?,
                    stage: growth.stage,
                    state: growth.state,
                    paused: growth.paused,
                })
            })
            .collect()
    }
}
