//! Game loop thread: runs the simulation engine at 30Hz and publishes snapshots.
//!
//! The engine is moved into this thread. Commands arrive via `mpsc` channel,
//! snapshots are stored in shared state for polling. Battles are replayed one
//! attack every `ATTACK_INTERVAL_TICKS` ticks.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use nightfarm_core::constants::{ATTACK_INTERVAL_TICKS, DT, TICK_RATE};
use nightfarm_core::enums::GamePhase;
use nightfarm_core::state::{GameStateSnapshot, SaveState};
use nightfarm_sim::SimulationEngine;

use crate::error::AppError;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop is paced and when it stops on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Sleep between ticks to run at wall-clock speed.
    pub realtime: bool,
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the final save state
/// once the loop stops.
///
/// # Errors
///
/// Returns [`AppError::Spawn`] if the thread cannot be created.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: SharedSnapshot,
    options: LoopOptions,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SaveState>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("nightfarm-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot, options))
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, campaign
/// completion or the tick limit.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    options: LoopOptions,
) -> SaveState {
    let mut next_tick_time = Instant::now();
    let mut battle_timer = 0u32;
    let mut ticks = 0u64;

    'game: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::SkipBattle) => {
                    if let Some(outcome) = engine.finish_battle() {
                        debug!(?outcome, "Battle skipped");
                    }
                }
                Ok(GameLoopCommand::Shutdown) => break 'game,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'game,
            }
        }

        // 2. Replay the battle at a watchable pace. Stepping before the
        // tick puts a concluded battle's events in this tick's snapshot.
        if matches!(engine.phase(), GamePhase::Battle { .. }) {
            battle_timer += 1;
            if battle_timer >= ATTACK_INTERVAL_TICKS {
                battle_timer = 0;
                if let Some(attack) = engine.step_battle() {
                    debug!(
                        round = attack.round,
                        target_hp = attack.target_hp,
                        "Attack replayed"
                    );
                }
            }
        } else {
            battle_timer = 0;
        }

        // 3. Advance one tick
        let snapshot = engine.tick(DT);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        ticks += 1;
        if engine.phase() == GamePhase::Completed {
            info!(ticks, "Campaign completed");
            break;
        }
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            info!(ticks, night = engine.night_index(), "Tick limit reached");
            break;
        }

        // 5. Sleep until next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    engine.save_state()
}
