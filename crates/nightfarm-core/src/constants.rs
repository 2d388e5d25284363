//! Simulation constants and tuning parameters.

/// Host tick rate (Hz) used by the headless game loop.
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at the default tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Farming ---

/// Minimum spacing between two planted crops (world units).
pub const DEFAULT_MIN_PLANT_DISTANCE: f32 = 0.5;

/// Radius within which `remove` matches an existing plot.
pub const PLOT_REMOVE_TOLERANCE: f32 = 0.01;

/// Number of growth stages (sprites) per crop.
pub const DEFAULT_STAGE_COUNT: u32 = 4;

/// Seconds a crop spends in each stage once watered.
pub const DEFAULT_TIME_PER_STAGE_SECS: f32 = 1.0;

/// Radius of the player's watering can.
pub const DEFAULT_WATER_RADIUS: f32 = 1.0;

// --- Drops ---

/// Scatter radius for gold dropped by a harvested crop.
pub const GOLD_DROP_SPREAD: f32 = 0.2;

/// Scatter radius for the crop item dropped on harvest.
pub const CROP_DROP_SPREAD: f32 = 0.3;

/// Scatter radius for the seed dropped on harvest.
pub const SEED_DROP_SPREAD: f32 = 0.25;

// --- Day / night ---

/// Length of a day phase in seconds.
pub const DEFAULT_DAY_DURATION_SECS: f32 = 180.0;

/// Night whose victory completes the campaign.
pub const DEFAULT_FINAL_NIGHT: u32 = 3;

/// First night of a fresh campaign.
pub const FIRST_NIGHT: u32 = 1;

// --- Battle ---

/// Battle spawn points available to owned animals.
pub const DEFAULT_ANIMAL_SPAWN_SLOTS: usize = 4;

/// Battle spawn points available to enemies.
pub const DEFAULT_ENEMY_SPAWN_SLOTS: usize = 4;

/// Host ticks between two replayed attack events (0.25s at 30Hz).
pub const ATTACK_INTERVAL_TICKS: u32 = 8;
