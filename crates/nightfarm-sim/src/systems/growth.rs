//! Growth system: advances every crop and turns harvests into drops.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use nightfarm_core::config::DropConfig;
use nightfarm_core::events::GameEvent;
use nightfarm_farm::{CropTick, Farm};

use super::drops;

/// Grow the farm by `dt` seconds.
pub fn run(
    farm: &mut Farm,
    dt: f32,
    drop_table: &[DropConfig],
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    for (handle, tick) in farm.tick(dt) {
        match tick {
            CropTick::Idle | CropTick::Progressed => {}
            CropTick::StageAdvanced { stage } => {
                events.push(GameEvent::StageAdvanced {
                    crop: handle.id(),
                    stage,
                });
            }
            CropTick::Harvested { position } => {
                debug!(crop = handle.id().0, "Harvest produced drops");
                events.push(GameEvent::CropHarvested {
                    crop: handle.id(),
                    position,
                });
                drops::scatter(position, drop_table, rng, events);
            }
        }
    }
}
