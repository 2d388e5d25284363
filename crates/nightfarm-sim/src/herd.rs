//! Owned animals and their battle profiles.

use nightfarm_combat::UnitSpec;
use nightfarm_core::enums::AnimalKind;

/// Shop and battle stats for an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalProfile {
    pub name: &'static str,
    pub hp: u32,
    pub damage: u32,
    /// Gold price, settled by the economy layer.
    pub cost: u32,
}

/// Get the profile for a given animal.
pub fn get_profile(kind: AnimalKind) -> AnimalProfile {
    match kind {
        AnimalKind::Chicken => AnimalProfile {
            name: "Chicken",
            hp: 3,
            damage: 3,
            cost: 10,
        },
        AnimalKind::Cow => AnimalProfile {
            name: "Cow",
            hp: 8,
            damage: 2,
            cost: 20,
        },
        AnimalKind::Pig => AnimalProfile {
            name: "Pig",
            hp: 5,
            damage: 3,
            cost: 15,
        },
        AnimalKind::Duck => AnimalProfile {
            name: "Duck",
            hp: 10,
            damage: 10,
            cost: 50,
        },
    }
}

/// The animals the player owns, in adoption order. Each kind at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Herd {
    owned: Vec<AnimalKind>,
}

impl Herd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animal. Returns false if it is already owned.
    pub fn adopt(&mut self, kind: AnimalKind) -> bool {
        if self.owns(kind) {
            return false;
        }
        self.owned.push(kind);
        true
    }

    pub fn owns(&self, kind: AnimalKind) -> bool {
        self.owned.contains(&kind)
    }

    pub fn animals(&self) -> &[AnimalKind] {
        &self.owned
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// Replace the herd, dropping duplicates.
    pub fn replace(&mut self, animals: &[AnimalKind]) {
        self.owned.clear();
        for &kind in animals {
            self.adopt(kind);
        }
    }

    /// Battle stats for every owned animal, in adoption order.
    pub fn unit_specs(&self) -> Vec<UnitSpec> {
        self.owned
            .iter()
            .map(|&kind| {
                let profile = get_profile(kind);
                UnitSpec::new(profile.name, profile.hp, profile.damage)
            })
            .collect()
    }
}
