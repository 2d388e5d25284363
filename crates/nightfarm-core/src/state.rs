//! Game state snapshot: the visible state handed to the host each tick,
//! plus the persistence structures exchanged with the storage layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AttackEvent, GameEvent};
use crate::types::{CropId, SimTime, UnitId};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub clock: ClockView,
    pub crops: Vec<CropView>,
    pub herd: Vec<AnimalKind>,
    /// Present while a battle is being played out.
    pub battle: Option<BattleView>,
    pub events: Vec<GameEvent>,
}

/// Day/night clock for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClockView {
    pub is_day: bool,
    pub time_left_secs: f32,
    pub duration_secs: f32,
}

/// A crop on the farm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropView {
    pub crop: CropId,
    pub position: Vec2,
    pub stage: u32,
    pub state: GrowthState,
    pub paused: bool,
}

/// Live battle state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleView {
    pub night: u32,
    pub round: u32,
    pub units: Vec<UnitView>,
    /// Attacks already played out, in order.
    pub attacks: Vec<AttackEvent>,
}

/// A unit on the battlefield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub name: String,
    pub facing: Facing,
    pub max_hp: u32,
    pub current_hp: u32,
}

/// Persisted state of a single crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropSnapshot {
    pub position: Vec2,
    pub stage: u32,
    pub elapsed_secs: f32,
}

/// Everything the storage layer needs to restore a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub night: u32,
    pub crops: Vec<CropSnapshot>,
    #[serde(default)]
    pub herd: Vec<AnimalKind>,
}
