//! Typed simulation configuration.
//!
//! Every field has a default matching the shipped game tuning, so a host may
//! deserialize a partial JSON document and fill in the rest.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DropKind;
use crate::error::{require_positive, SimError};

/// Top-level configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Length of each day phase in seconds.
    pub day_duration_secs: f32,
    /// Winning this night completes the campaign.
    pub final_night: u32,
    /// Minimum distance between two planted crops.
    pub min_plant_distance: f32,
    /// Radius of the `Water` command.
    pub water_radius: f32,
    pub crop: CropConfig,
    /// Items produced by every harvested crop.
    pub drops: Vec<DropConfig>,
    /// Battle spawn points for the herd; extra animals sit the battle out.
    pub animal_spawn_slots: usize,
    /// Battle spawn points for enemies.
    pub enemy_spawn_slots: usize,
    /// Enemy table; entry 0 is night 1.
    pub nights: Vec<NightConfig>,
}

/// Crop growth tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Number of growth stages, including the final one.
    pub stage_count: u32,
    /// Seconds spent in each stage while growing.
    pub time_per_stage_secs: f32,
}

/// One drop produced on harvest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropConfig {
    pub kind: DropKind,
    /// Drops land uniformly inside a disc of this radius around the crop.
    pub spread: f32,
}

/// Enemies fielded on one night.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NightConfig {
    pub enemies: Vec<EnemyConfig>,
}

/// A single enemy definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub name: String,
    pub hp: u32,
    pub damage: u32,
}

impl EnemyConfig {
    pub fn new(name: &str, hp: u32, damage: u32) -> Self {
        Self {
            name: name.to_owned(),
            hp,
            damage,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            day_duration_secs: DEFAULT_DAY_DURATION_SECS,
            final_night: DEFAULT_FINAL_NIGHT,
            min_plant_distance: DEFAULT_MIN_PLANT_DISTANCE,
            water_radius: DEFAULT_WATER_RADIUS,
            crop: CropConfig::default(),
            drops: vec![
                DropConfig {
                    kind: DropKind::Gold,
                    spread: GOLD_DROP_SPREAD,
                },
                DropConfig {
                    kind: DropKind::Crop,
                    spread: CROP_DROP_SPREAD,
                },
                DropConfig {
                    kind: DropKind::Seed,
                    spread: SEED_DROP_SPREAD,
                },
            ],
            animal_spawn_slots: DEFAULT_ANIMAL_SPAWN_SLOTS,
            enemy_spawn_slots: DEFAULT_ENEMY_SPAWN_SLOTS,
            nights: default_nights(),
        }
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            stage_count: DEFAULT_STAGE_COUNT,
            time_per_stage_secs: DEFAULT_TIME_PER_STAGE_SECS,
        }
    }
}

/// Three escalating skeleton nights.
fn default_nights() -> Vec<NightConfig> {
    vec![
        // Night 1: two weak skeletons
        NightConfig {
            enemies: vec![
                EnemyConfig::new("Skeleton", 6, 2),
                EnemyConfig::new("Skeleton", 6, 2),
            ],
        },
        // Night 2: three skeletons
        NightConfig {
            enemies: vec![
                EnemyConfig::new("Skeleton", 8, 3),
                EnemyConfig::new("Skeleton", 8, 3),
                EnemyConfig::new("Skeleton Archer", 5, 4),
            ],
        },
        // Night 3: full squad led by a brute
        NightConfig {
            enemies: vec![
                EnemyConfig::new("Skeleton Brute", 20, 5),
                EnemyConfig::new("Skeleton", 10, 3),
                EnemyConfig::new("Skeleton", 10, 3),
                EnemyConfig::new("Skeleton Archer", 6, 4),
            ],
        },
    ]
}

impl CropConfig {
    /// Index of the last growth stage.
    pub fn final_stage(&self) -> u32 {
        self.stage_count.saturating_sub(1)
    }

    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] for a zero stage count or a
    /// non-positive stage duration.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.stage_count == 0 {
            return Err(SimError::invalid("crop.stage_count must be at least 1"));
        }
        require_positive("crop.time_per_stage_secs", self.time_per_stage_secs)
    }
}

impl SimConfig {
    /// Check every tuning value before the engine is built.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("day_duration_secs", self.day_duration_secs)?;
        require_positive("min_plant_distance", self.min_plant_distance)?;
        require_positive("water_radius", self.water_radius)?;
        if self.final_night < FIRST_NIGHT {
            return Err(SimError::invalid("final_night must be at least 1"));
        }
        self.crop.validate()?;
        for drop in &self.drops {
            if !drop.spread.is_finite() || drop.spread < 0.0 {
                return Err(SimError::invalid(format!(
                    "drop spread for {:?} must be non-negative",
                    drop.kind
                )));
            }
        }
        Ok(())
    }

    /// Highest night that has an enemy table entry.
    pub fn max_configured_night(&self) -> u32 {
        self.nights.len() as u32
    }
}
