//! Battle participants.

use serde::{Deserialize, Serialize};

use nightfarm_core::enums::{Facing, Side};
use nightfarm_core::state::UnitView;
use nightfarm_core::types::UnitId;

/// Stats a unit enters battle with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    pub hp: u32,
    pub damage: u32,
}

impl UnitSpec {
    pub fn new(name: &str, hp: u32, damage: u32) -> Self {
        Self {
            name: name.to_owned(),
            hp,
            damage,
        }
    }
}

/// A unit fighting in one battle. `current_hp` stays within `[0, max_hp]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatUnit {
    pub id: UnitId,
    pub name: String,
    pub max_hp: u32,
    current_hp: u32,
    pub damage: u32,
}

impl CombatUnit {
    pub fn new(id: UnitId, spec: &UnitSpec) -> Self {
        Self {
            id,
            name: spec.name.clone(),
            max_hp: spec.hp,
            current_hp: spec.hp,
            damage: spec.damage,
        }
    }

    pub fn side(&self) -> Side {
        self.id.side
    }

    pub fn facing(&self) -> Facing {
        self.id.side.facing()
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Apply a hit and return the remaining HP. Dead units ignore hits.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if self.is_alive() {
            self.current_hp = self.current_hp.saturating_sub(amount);
        }
        self.current_hp
    }

    pub fn view(&self) -> UnitView {
        UnitView {
            id: self.id,
            name: self.name.clone(),
            facing: self.facing(),
            max_hp: self.max_hp,
            current_hp: self.current_hp,
        }
    }
}

/// Build a roster for `side`, assigning slots in order.
pub fn build_roster<'a>(side: Side, specs: impl IntoIterator<Item = &'a UnitSpec>) -> Vec<CombatUnit> {
    specs
        .into_iter()
        .enumerate()
        .map(|(slot, spec)| CombatUnit::new(UnitId::new(side, slot as u32), spec))
        .collect()
}
