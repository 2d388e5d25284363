//! Battle resolver: the round loop as a lazy event sequence.
//!
//! Each call to `next` applies exactly one hit, so a battle dropped midway
//! leaves every unit consistent. Given the same rosters and seed, the event
//! sequence and outcome are identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use nightfarm_core::enums::{BattleOutcome, Side};
use nightfarm_core::events::AttackEvent;
use nightfarm_core::types::UnitId;

use crate::unit::CombatUnit;

/// A fully resolved battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub events: Vec<AttackEvent>,
    /// Number of rounds started.
    pub rounds: u32,
}

/// A battle in progress.
pub struct Battle {
    player: Vec<CombatUnit>,
    enemy: Vec<CombatUnit>,
    rng: ChaCha8Rng,
    /// Side taking its pass.
    acting: Side,
    /// Next roster index of the acting side.
    cursor: usize,
    round: u32,
    outcome: Option<BattleOutcome>,
    living_scratch: Vec<usize>,
}

impl Battle {
    /// Start a battle. An empty player roster is decided on the spot.
    pub fn new(player: Vec<CombatUnit>, enemy: Vec<CombatUnit>, seed: u64) -> Self {
        let outcome = if player.is_empty() {
            warn!("No player units available, automatic loss");
            Some(BattleOutcome::NoContest)
        } else {
            None
        };

        let mut battle = Self {
            player,
            enemy,
            rng: ChaCha8Rng::seed_from_u64(seed),
            acting: Side::Player,
            cursor: 0,
            round: 1,
            outcome,
            living_scratch: Vec::new(),
        };
        battle.check_stalemate();
        battle
    }

    /// Outcome, once the event sequence is exhausted.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Current 1-based round.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn units(&self, side: Side) -> &[CombatUnit] {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn unit(&self, id: UnitId) -> Option<&CombatUnit> {
        self.units(id.side).get(id.slot as usize)
    }

    /// Play out every remaining attack and return the outcome.
    pub fn finish(&mut self) -> BattleOutcome {
        self.by_ref().for_each(drop);
        self.outcome.unwrap_or(BattleOutcome::PlayerLoses)
    }

    fn units_mut(&mut self, side: Side) -> &mut Vec<CombatUnit> {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    fn all_dead(&self, side: Side) -> bool {
        self.units(side).iter().all(|unit| !unit.is_alive())
    }

    fn conclude(&mut self, winner: Side) {
        let outcome = match winner {
            Side::Player => BattleOutcome::PlayerWins,
            Side::Enemy => BattleOutcome::PlayerLoses,
        };
        info!(?outcome, round = self.round, "Battle decided");
        self.outcome = Some(outcome);
    }

    /// Hand the turn to the other side; a new round starts with the player.
    fn end_pass(&mut self) {
        self.cursor = 0;
        self.acting = self.acting.opponent();
        if self.acting == Side::Player {
            self.round += 1;
            self.check_stalemate();
        }
    }

    /// A round in which no living unit can deal damage would repeat forever.
    fn check_stalemate(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let can_hurt = self
            .player
            .iter()
            .chain(&self.enemy)
            .any(|unit| unit.is_alive() && unit.damage > 0);
        if !can_hurt {
            warn!(round = self.round, "No unit can deal damage, calling it a loss");
            self.outcome = Some(BattleOutcome::PlayerLoses);
        }
    }
}

impl Iterator for Battle {
    type Item = AttackEvent;

    fn next(&mut self) -> Option<AttackEvent> {
        loop {
            if self.outcome.is_some() {
                return None;
            }

            let defending = self.acting.opponent();

            // End of the acting side's pass: the defenders get no retaliation
            // if they were wiped out.
            if self.cursor >= self.units(self.acting).len() {
                if self.all_dead(defending) {
                    self.conclude(self.acting);
                    return None;
                }
                self.end_pass();
                continue;
            }

            let index = self.cursor;
            self.cursor += 1;
            let attacker = &self.units(self.acting)[index];
            if !attacker.is_alive() {
                continue;
            }
            let (attacker_id, damage) = (attacker.id, attacker.damage);

            // Liveness is checked at selection time, not cached per round.
            let mut living = std::mem::take(&mut self.living_scratch);
            living.clear();
            living.extend(
                self.units(defending)
                    .iter()
                    .enumerate()
                    .filter(|(_, unit)| unit.is_alive())
                    .map(|(index, _)| index),
            );

            if living.is_empty() {
                self.living_scratch = living;
                self.conclude(self.acting);
                return None;
            }

            let pick = living[self.rng.gen_range(0..living.len())];
            self.living_scratch = living;

            let round = self.round;
            let target = &mut self.units_mut(defending)[pick];
            let target_hp = target.take_damage(damage);
            let event = AttackEvent {
                round,
                attacker: attacker_id,
                target: target.id,
                damage,
                target_hp,
                target_defeated: target_hp == 0,
            };
            debug!(
                round,
                attacker = ?event.attacker,
                target = ?event.target,
                damage,
                target_hp,
                "Attack"
            );
            return Some(event);
        }
    }
}

/// Resolve a battle to completion.
pub fn resolve(player: Vec<CombatUnit>, enemy: Vec<CombatUnit>, seed: u64) -> BattleReport {
    let mut battle = Battle::new(player, enemy, seed);
    let events: Vec<AttackEvent> = battle.by_ref().collect();
    BattleReport {
        outcome: battle.outcome.unwrap_or(BattleOutcome::PlayerLoses),
        rounds: if events.is_empty() { 0 } else { battle.round },
        events,
    }
}
