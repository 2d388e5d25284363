//! Events emitted by the simulation for the rendering, audio and economy layers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{CropId, UnitId};

/// Discrete state changes produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    CropPlanted { crop: CropId, position: Vec2 },
    CropWatered { crop: CropId },
    /// Water reached a crop that was already growing.
    AlreadyWatered { crop: CropId },
    StageAdvanced { crop: CropId, stage: u32 },
    CropHarvested { crop: CropId, position: Vec2 },
    /// An item the collectible system should spawn.
    DropProduced { kind: DropKind, position: Vec2 },
    CommandRejected { reason: Rejection },
    AnimalAdopted { kind: AnimalKind },
    PhaseChanged { phase: GamePhase },
    BattleStarted {
        night: u32,
        /// Night used for the enemy table lookup.
        enemy_night: u32,
        player_units: u32,
        enemy_units: u32,
    },
    BattleEnded { night: u32, outcome: BattleOutcome },
}

/// One attack in a battle. Applying it is a single HP mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// 1-based round number.
    pub round: u32,
    pub attacker: UnitId,
    pub target: UnitId,
    pub damage: u32,
    /// Target HP after the hit.
    pub target_hp: u32,
    pub target_defeated: bool,
}
