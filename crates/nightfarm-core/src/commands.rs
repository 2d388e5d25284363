//! Player commands delivered by the input layer.
//!
//! Commands are queued and applied at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::AnimalKind;

/// All possible player intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Plant a crop at the given world position.
    Plant { position: Vec2 },
    /// Water crops around the player using the configured radius.
    Water { position: Vec2 },
    /// Water crops within an explicit radius.
    WaterArea { position: Vec2, radius: f32 },
    /// Add an animal to the herd (gold is settled by the economy layer).
    AdoptAnimal { kind: AnimalKind },
    /// Generic interact key: plants at the position.
    Interact { position: Vec2 },
}
