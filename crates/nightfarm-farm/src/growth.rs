//! Crop growth finite state machine.
//!
//! Pure functions that advance one crop's growth by a time step.
//! No ECS dependency, operates on plain data.

use nightfarm_core::config::CropConfig;
use nightfarm_core::enums::GrowthState;

use crate::components::CropGrowth;

/// What a single growth step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthChange {
    /// Not growing, paused, or zero time: nothing moved.
    None,
    /// Time accumulated within the current stage.
    Progressed,
    /// The stage index increased to the contained value.
    StageAdvanced(u32),
    /// The hold on the final stage elapsed; the crop is done.
    Finished,
}

/// Output of the growth FSM.
pub struct GrowthUpdate {
    pub growth: CropGrowth,
    pub change: GrowthChange,
}

/// Evaluate the FSM for one crop over `dt` seconds.
///
/// At most one stage transition happens per call. Time in excess of the
/// stage duration is dropped: elapsed resets to zero on every transition.
pub fn evaluate(growth: &CropGrowth, dt: f32, config: &CropConfig) -> GrowthUpdate {
    let unchanged = GrowthUpdate {
        growth: *growth,
        change: GrowthChange::None,
    };

    if growth.state != GrowthState::Growing || growth.paused || !(dt > 0.0) {
        return unchanged;
    }

    let mut next = *growth;
    next.elapsed_secs += dt;

    if next.elapsed_secs < config.time_per_stage_secs {
        return GrowthUpdate {
            growth: next,
            change: GrowthChange::Progressed,
        };
    }

    next.elapsed_secs = 0.0;

    // The final stage is held for one extra interval so it can be seen.
    if next.stage >= config.final_stage() {
        next.state = GrowthState::Harvested;
        return GrowthUpdate {
            growth: next,
            change: GrowthChange::Finished,
        };
    }

    next.stage += 1;
    GrowthUpdate {
        growth: next,
        change: GrowthChange::StageAdvanced(next.stage),
    }
}

/// Apply water. Returns the new growth, or `None` if it was already watered.
pub fn water(growth: &CropGrowth) -> Option<CropGrowth> {
    match growth.state {
        GrowthState::Unwatered => Some(CropGrowth {
            state: GrowthState::Growing,
            ..*growth
        }),
        GrowthState::Growing | GrowthState::Harvested => None,
    }
}
