//! Battle system: builds rosters for the night and plays the battle out.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use nightfarm_combat::{build_roster, Battle};
use nightfarm_core::config::SimConfig;
use nightfarm_core::enums::{BattleOutcome, Side};
use nightfarm_core::events::{AttackEvent, GameEvent};
use nightfarm_core::state::BattleView;

use crate::herd::Herd;
use crate::scenario::NightTable;

/// The battle of the current night along with what has been played so far.
pub struct ActiveBattle {
    pub night: u32,
    battle: Battle,
    /// Set when the night could not be fought at all.
    forfeit: Option<BattleOutcome>,
    attacks: Vec<AttackEvent>,
}

impl ActiveBattle {
    /// Play the next attack. `None` once the battle is decided.
    pub fn next_attack(&mut self) -> Option<AttackEvent> {
        if self.forfeit.is_some() {
            return None;
        }
        let attack = self.battle.next()?;
        self.attacks.push(attack);
        Some(attack)
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.forfeit.or_else(|| self.battle.outcome())
    }

    pub fn view(&self) -> BattleView {
        BattleView {
            night: self.night,
            round: self.battle.round(),
            units: self
                .battle
                .units(Side::Player)
                .iter()
                .chain(self.battle.units(Side::Enemy))
                .map(|unit| unit.view())
                .collect(),
            attacks: self.attacks.clone(),
        }
    }
}

/// Set up the battle for `night`.
///
/// The player roster comes from the herd as it is right now, the enemy
/// roster from the night table. Both are capped by their spawn slots.
pub fn prepare(
    night: u32,
    herd: &Herd,
    nights: &NightTable,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) -> ActiveBattle {
    let player_specs = herd.unit_specs();
    let player = build_roster(
        Side::Player,
        player_specs.iter().take(config.animal_spawn_slots),
    );

    let enemy_night = nights.lookup_night(night).unwrap_or(night);
    let enemy = build_roster(
        Side::Enemy,
        nights
            .enemies_for_night(night)
            .iter()
            .take(config.enemy_spawn_slots),
    );

    if player.len() < player_specs.len() {
        info!(
            owned = player_specs.len(),
            fielded = player.len(),
            "Not enough spawn points, some animals sit out"
        );
    }

    let forfeit = if enemy.is_empty() {
        warn!(night, enemy_night, "No enemies configured for this night");
        Some(BattleOutcome::NoContest)
    } else {
        None
    };

    events.push(GameEvent::BattleStarted {
        night,
        enemy_night,
        player_units: player.len() as u32,
        enemy_units: enemy.len() as u32,
    });
    info!(
        night,
        enemy_night,
        player_units = player.len(),
        enemy_units = enemy.len(),
        "Battle started"
    );

    let seed = rng.gen::<u64>();
    ActiveBattle {
        night,
        battle: Battle::new(player, enemy, seed),
        forfeit,
        attacks: Vec::new(),
    }
}
