//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Growth state of a single crop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthState {
    /// Planted but not yet watered; the stage timer does not run.
    #[default]
    Unwatered,
    /// Watered; the stage timer runs unless the crop is paused.
    Growing,
    /// Final stage completed; drops produced and the crop removed.
    Harvested,
}

/// Result of watering one crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterOutcome {
    /// The crop was unwatered and has started growing.
    Started,
    /// The crop was already watered or has been harvested; nothing changed.
    AlreadyWatered,
}

/// Side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player's animals.
    Player,
    /// The night's enemies.
    Enemy,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Facing of units fighting on this side.
    pub fn facing(self) -> Facing {
        match self {
            Side::Player => Facing::Left,
            Side::Enemy => Facing::Right,
        }
    }
}

/// Horizontal facing of a battle unit's sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Result of one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    PlayerWins,
    PlayerLoses,
    /// The player had no units to field; counts as a loss.
    NoContest,
}

impl BattleOutcome {
    /// Whether the outcome advances the campaign.
    pub fn is_victory(self) -> bool {
        matches!(self, BattleOutcome::PlayerWins)
    }
}

/// Progression phase of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GamePhase {
    /// Farming time; the day clock counts down.
    Day { night: u32 },
    /// The night's battle is in progress.
    Battle { night: u32 },
    /// The final night was won. Terminal.
    Completed,
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Day {
            night: crate::constants::FIRST_NIGHT,
        }
    }
}

impl GamePhase {
    /// Night index carried by the phase, if any.
    pub fn night(self) -> Option<u32> {
        match self {
            GamePhase::Day { night } | GamePhase::Battle { night } => Some(night),
            GamePhase::Completed => None,
        }
    }
}

/// Animals the player can own and field in battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Chicken,
    Cow,
    Pig,
    Duck,
}

impl AnimalKind {
    /// Every purchasable animal, in shop order.
    pub const ALL: [AnimalKind; 4] = [
        AnimalKind::Chicken,
        AnimalKind::Cow,
        AnimalKind::Pig,
        AnimalKind::Duck,
    ];
}

/// Item dropped into the world by a harvested crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropKind {
    Gold,
    Crop,
    Seed,
}

/// Why a player command was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Another crop is closer than the minimum plant distance.
    TooCloseToCrop,
    /// Farming commands are only accepted during the day.
    NotDaytime,
    /// The animal is already in the herd.
    AlreadyOwned,
    /// No crop lies within the watering radius.
    NothingToWater,
}
