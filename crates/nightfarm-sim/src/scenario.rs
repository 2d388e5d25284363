//! Night table: which enemies attack on which night.

use nightfarm_combat::UnitSpec;
use nightfarm_core::config::NightConfig;

/// Enemy squads indexed by night, night 1 first.
#[derive(Debug, Clone, Default)]
pub struct NightTable {
    nights: Vec<Vec<UnitSpec>>,
}

impl NightTable {
    /// Build the table, keeping at most `final_night` entries.
    pub fn from_config(nights: &[NightConfig], final_night: u32) -> Self {
        Self {
            nights: nights
                .iter()
                .take(final_night as usize)
                .map(|night| {
                    night
                        .enemies
                        .iter()
                        .map(|enemy| UnitSpec::new(&enemy.name, enemy.hp, enemy.damage))
                        .collect()
                })
                .collect(),
        }
    }

    /// Highest configured night.
    pub fn max_night(&self) -> u32 {
        self.nights.len() as u32
    }

    /// Night actually used for the lookup: `night` clamped to the table.
    pub fn lookup_night(&self, night: u32) -> Option<u32> {
        if self.nights.is_empty() {
            return None;
        }
        Some(night.clamp(1, self.max_night()))
    }

    /// Enemies for `night`, with nights past the table reusing the last entry.
    pub fn enemies_for_night(&self, night: u32) -> &[UnitSpec] {
        match self.lookup_night(night) {
            Some(lookup) => &self.nights[(lookup - 1) as usize],
            None => &[],
        }
    }
}
