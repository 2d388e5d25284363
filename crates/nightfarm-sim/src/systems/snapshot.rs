//! Snapshot system: gathers the visible state into a `GameStateSnapshot`.
//!
//! This system is read-only.

use nightfarm_core::enums::GamePhase;
use nightfarm_core::events::GameEvent;
use nightfarm_core::state::GameStateSnapshot;
use nightfarm_core::types::SimTime;
use nightfarm_farm::Farm;

use super::battle::ActiveBattle;
use crate::clock::WorldClock;
use crate::herd::Herd;

pub fn build_snapshot(
    time: &SimTime,
    phase: GamePhase,
    clock: &WorldClock,
    farm: &Farm,
    herd: &Herd,
    battle: Option<&ActiveBattle>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        clock: clock.view(),
        crops: farm.crops().views(),
        herd: herd.animals().to_vec(),
        battle: battle.map(ActiveBattle::view),
        events,
    }
}
