//! Headless NIGHTFARM session runner.
//!
//! Loads a config (and optionally a save), adopts the herd, plants a field,
//! and lets the game loop play days and battles until the campaign is won
//! or the tick limit is reached. The final state is written back to the
//! save file.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nightfarm_app::error::AppError;
use nightfarm_app::game_loop::{self, LoopOptions};
use nightfarm_app::persistence;
use nightfarm_app::script::{self, FieldLayout};
use nightfarm_app::state::AppState;
use nightfarm_core::config::SimConfig;
use nightfarm_core::enums::AnimalKind;
use nightfarm_sim::SimulationEngine;

/// NIGHTFARM - farm by day, defend by night
#[derive(Parser, Debug)]
#[command(name = "nightfarm")]
#[command(about = "Run a headless NIGHTFARM session")]
struct Args {
    /// JSON simulation config; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Save file to resume from and write back to
    #[arg(long)]
    save: Option<PathBuf>,

    /// Run at wall-clock speed instead of as fast as possible
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Rows of crops to plant
    #[arg(long, default_value_t = 3)]
    rows: u32,

    /// Columns of crops to plant
    #[arg(long, default_value_t = 3)]
    cols: u32,
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => persistence::load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    info!(
        seed = config.seed,
        day_duration_secs = config.day_duration_secs,
        final_night = config.final_night,
        "configuration loaded"
    );

    let field = FieldLayout {
        origin: Vec2::ZERO,
        rows: args.rows,
        cols: args.cols,
        spacing: config.min_plant_distance,
    };
    let mut engine = SimulationEngine::new(config)?;

    if let Some(path) = args.save.as_ref().filter(|path| path.exists()) {
        let save = persistence::load_from_file(path)?;
        info!(night = save.night, crops = save.crops.len(), "save loaded");
        engine.load_save_state(&save);
    }

    let mut state = AppState::new();
    let (command_tx, handle) = game_loop::spawn_game_loop(
        engine,
        state.latest_snapshot.clone(),
        LoopOptions {
            realtime: args.realtime,
            max_ticks: Some(args.max_ticks),
        },
    )?;
    state.command_tx = Some(command_tx);

    for command in script::opening_moves(&AnimalKind::ALL, &field) {
        state.send(command);
    }

    let save = handle.join().map_err(|_| AppError::GameLoopPanicked)?;
    state.shutdown();

    if let Some(snapshot) = state.snapshot() {
        info!(
            phase = ?snapshot.phase,
            ticks = snapshot.time.tick,
            crops = snapshot.crops.len(),
            herd = snapshot.herd.len(),
            "session finished"
        );
    }

    if let Some(path) = &args.save {
        persistence::save_to_file(path, &save)?;
        info!(path = %path.display(), night = save.night, "save written");
    }

    Ok(())
}
