//! Tests for the world clock, herd, night table, drops, and the engine's
//! day/battle progression.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightfarm_core::commands::PlayerCommand;
use nightfarm_core::config::{DropConfig, EnemyConfig, NightConfig, SimConfig};
use nightfarm_core::enums::*;
use nightfarm_core::events::GameEvent;
use nightfarm_core::state::GameStateSnapshot;

use crate::clock::WorldClock;
use crate::engine::SimulationEngine;
use crate::herd::{get_profile, Herd};
use crate::scenario::NightTable;
use crate::systems::drops;

fn night(enemies: &[(&str, u32, u32)]) -> NightConfig {
    NightConfig {
        enemies: enemies
            .iter()
            .map(|&(name, hp, damage)| EnemyConfig::new(name, hp, damage))
            .collect(),
    }
}

/// One-second days and pushover enemies.
fn short_config() -> SimConfig {
    SimConfig {
        day_duration_secs: 1.0,
        nights: vec![
            night(&[("Rat", 1, 0)]),
            night(&[("Rat", 1, 0)]),
            night(&[("Rat", 1, 0)]),
        ],
        ..Default::default()
    }
}

fn engine(config: SimConfig) -> SimulationEngine {
    SimulationEngine::new(config).unwrap()
}

/// Tick in half-second steps until the battle starts, collecting events.
fn run_until_battle(engine: &mut SimulationEngine) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..10_000 {
        let snap = engine.tick(0.5);
        events.extend(snap.events);
        if matches!(engine.phase(), GamePhase::Battle { .. }) {
            return events;
        }
    }
    panic!("Battle never started");
}

fn rejections(snap: &GameStateSnapshot) -> Vec<Rejection> {
    snap.events
        .iter()
        .filter_map(|e| match e {
            GameEvent::CommandRejected { reason } => Some(*reason),
            _ => None,
        })
        .collect()
}

// ---- World clock ----

#[test]
fn test_clock_expires_once() {
    let mut clock = WorldClock::new();
    clock.start_day(1.0);
    assert_eq!(clock.duration(), 1.0);
    assert!(!clock.tick(0.75));
    assert!(clock.tick(0.75));
    assert_eq!(clock.time_left(), 0.0);
    assert!(!clock.tick(0.75), "Expiry reported twice");
    assert_eq!(clock.time_left(), 0.0);
}

#[test]
fn test_clock_ignores_negative_dt() {
    let mut clock = WorldClock::new();
    clock.start_day(2.0);
    assert!(!clock.tick(-5.0));
    assert_eq!(clock.time_left(), 2.0);
}

#[test]
fn test_clock_night_does_not_count() {
    let mut clock = WorldClock::new();
    clock.start_night();
    assert!(!clock.is_day());
    assert!(!clock.tick(10.0));
    let view = clock.view();
    assert!(!view.is_day);
    assert_eq!(view.time_left_secs, 0.0);
}

// ---- Herd ----

#[test]
fn test_herd_rejects_duplicates() {
    let mut herd = Herd::new();
    assert!(herd.adopt(AnimalKind::Cow));
    assert!(herd.adopt(AnimalKind::Chicken));
    assert!(!herd.adopt(AnimalKind::Cow));
    assert_eq!(herd.animals(), &[AnimalKind::Cow, AnimalKind::Chicken]);
}

#[test]
fn test_herd_replace_drops_duplicates() {
    let mut herd = Herd::new();
    herd.replace(&[AnimalKind::Pig, AnimalKind::Pig, AnimalKind::Duck]);
    assert_eq!(herd.animals(), &[AnimalKind::Pig, AnimalKind::Duck]);
}

#[test]
fn test_herd_unit_specs_follow_profiles() {
    let mut herd = Herd::new();
    herd.adopt(AnimalKind::Duck);
    herd.adopt(AnimalKind::Cow);
    let specs = herd.unit_specs();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].name, "Duck");
    assert_eq!((specs[0].hp, specs[0].damage), (10, 10));
    assert_eq!((specs[1].hp, specs[1].damage), (8, 2));
}

#[test]
fn test_profiles_cover_every_animal() {
    for kind in AnimalKind::ALL {
        let profile = get_profile(kind);
        assert!(profile.hp > 0, "{kind:?} has no hp");
        assert!(profile.cost > 0, "{kind:?} is free");
    }
}

// ---- Night table ----

#[test]
fn test_night_lookup_is_clamped() {
    let table = NightTable::from_config(&SimConfig::default().nights, 3);
    assert_eq!(table.lookup_night(0), Some(1));
    assert_eq!(table.lookup_night(2), Some(2));
    assert_eq!(table.lookup_night(7), Some(3));
    assert_eq!(table.enemies_for_night(7), table.enemies_for_night(3));
    assert_eq!(table.enemies_for_night(3)[0].name, "Skeleton Brute");
}

#[test]
fn test_night_table_respects_final_night() {
    let table = NightTable::from_config(&SimConfig::default().nights, 2);
    assert_eq!(table.max_night(), 2);
    assert_eq!(table.lookup_night(3), Some(2));
}

#[test]
fn test_empty_night_table() {
    let table = NightTable::from_config(&[], 3);
    assert_eq!(table.lookup_night(1), None);
    assert!(table.enemies_for_night(1).is_empty());
}

// ---- Drops ----

#[test]
fn test_drops_land_inside_spread() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let table = SimConfig::default().drops;
    let origin = Vec2::new(3.0, -1.0);
    for _ in 0..200 {
        let mut events = Vec::new();
        drops::scatter(origin, &table, &mut rng, &mut events);
        assert_eq!(events.len(), table.len());
        for (event, drop) in events.iter().zip(&table) {
            let GameEvent::DropProduced { kind, position } = event else {
                panic!("Unexpected event {event:?}");
            };
            assert_eq!(*kind, drop.kind);
            assert!(position.distance(origin) <= drop.spread + 1e-5);
        }
    }
}

#[test]
fn test_zero_spread_drops_on_the_crop() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let table = [DropConfig {
        kind: DropKind::Gold,
        spread: 0.0,
    }];
    let mut events = Vec::new();
    drops::scatter(Vec2::new(1.0, 2.0), &table, &mut rng, &mut events);
    assert_eq!(
        events,
        vec![GameEvent::DropProduced {
            kind: DropKind::Gold,
            position: Vec2::new(1.0, 2.0),
        }]
    );
}

// ---- Engine construction ----

#[test]
fn test_engine_rejects_invalid_config() {
    let config = SimConfig {
        min_plant_distance: 0.0,
        ..Default::default()
    };
    assert!(SimulationEngine::new(config).is_err());

    let config = SimConfig {
        day_duration_secs: -1.0,
        ..Default::default()
    };
    assert!(SimulationEngine::new(config).is_err());
}

#[test]
fn test_engine_starts_on_first_day() {
    let mut engine = engine(SimConfig::default());
    assert_eq!(engine.phase(), GamePhase::Day { night: 1 });
    assert_eq!(engine.night_index(), 1);

    let snap = engine.tick(0.0);
    assert!(snap.clock.is_day);
    assert_eq!(snap.clock.time_left_secs, 180.0);
    assert!(snap
        .events
        .contains(&GameEvent::PhaseChanged { phase: GamePhase::Day { night: 1 } }));
}

// ---- Commands ----

#[test]
fn test_plant_command_respects_spacing() {
    let mut engine = engine(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::Plant { position: Vec2::new(0.0, 0.0) },
        PlayerCommand::Plant { position: Vec2::new(0.3, 0.0) },
        PlayerCommand::Interact { position: Vec2::new(0.6, 0.0) },
    ]);
    let snap = engine.tick(0.0);

    assert_eq!(snap.crops.len(), 2);
    assert_eq!(rejections(&snap), vec![Rejection::TooCloseToCrop]);
}

#[test]
fn test_water_command_without_crops_is_rejected() {
    let mut engine = engine(SimConfig::default());
    engine.queue_command(PlayerCommand::Water { position: Vec2::ZERO });
    let snap = engine.tick(0.0);
    assert_eq!(rejections(&snap), vec![Rejection::NothingToWater]);
}

#[test]
fn test_water_command_reports_each_crop() {
    let mut engine = engine(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::Plant { position: Vec2::new(0.0, 0.0) },
        PlayerCommand::Plant { position: Vec2::new(0.5, 0.0) },
        PlayerCommand::Plant { position: Vec2::new(5.0, 0.0) },
    ]);
    engine.tick(0.0);

    engine.queue_command(PlayerCommand::Water { position: Vec2::ZERO });
    let snap = engine.tick(0.0);
    let watered = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::CropWatered { .. }))
        .count();
    assert_eq!(watered, 2);

    engine.queue_command(PlayerCommand::WaterArea {
        position: Vec2::ZERO,
        radius: 10.0,
    });
    let snap = engine.tick(0.0);
    let again = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::AlreadyWatered { .. }))
        .count();
    let fresh = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::CropWatered { .. }))
        .count();
    assert_eq!((again, fresh), (2, 1));
}

#[test]
fn test_adopt_duplicate_is_rejected() {
    let mut engine = engine(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Pig },
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Pig },
    ]);
    let snap = engine.tick(0.0);
    assert_eq!(snap.herd, vec![AnimalKind::Pig]);
    assert_eq!(rejections(&snap), vec![Rejection::AlreadyOwned]);
}

#[test]
fn test_planting_at_night_is_rejected() {
    let mut engine = engine(short_config());
    run_until_battle(&mut engine);

    engine.queue_commands([
        PlayerCommand::Plant { position: Vec2::ZERO },
        PlayerCommand::Water { position: Vec2::ZERO },
    ]);
    let snap = engine.tick(0.5);
    assert_eq!(
        rejections(&snap),
        vec![Rejection::NotDaytime, Rejection::NotDaytime]
    );
    assert!(snap.crops.is_empty());
}

// ---- Day / battle progression ----

#[test]
fn test_day_expiry_starts_battle_and_pauses_crops() {
    let mut engine = engine(short_config());
    engine.queue_commands([
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck },
        PlayerCommand::Plant { position: Vec2::ZERO },
        PlayerCommand::Water { position: Vec2::ZERO },
    ]);
    let events = run_until_battle(&mut engine);

    assert_eq!(engine.phase(), GamePhase::Battle { night: 1 });
    assert!(events.contains(&GameEvent::BattleStarted {
        night: 1,
        enemy_night: 1,
        player_units: 1,
        enemy_units: 1,
    }));

    let snap = engine.tick(0.5);
    assert!(!snap.clock.is_day);
    assert!(snap.crops.iter().all(|c| c.paused));
    assert!(snap.battle.is_some());
}

#[test]
fn test_crops_hold_still_during_battle() {
    let mut engine = engine(short_config());
    engine.queue_commands([
        PlayerCommand::Plant { position: Vec2::ZERO },
        PlayerCommand::Water { position: Vec2::ZERO },
    ]);
    run_until_battle(&mut engine);
    let before = engine.crop_snapshot();
    for _ in 0..20 {
        engine.tick(0.5);
    }
    assert_eq!(engine.crop_snapshot(), before);
}

#[test]
fn test_empty_herd_is_no_contest() {
    let mut engine = engine(short_config());
    run_until_battle(&mut engine);

    assert_eq!(engine.step_battle(), None);
    assert_eq!(engine.phase(), GamePhase::Day { night: 1 });
    let snap = engine.tick(0.0);
    assert!(snap.events.contains(&GameEvent::BattleEnded {
        night: 1,
        outcome: BattleOutcome::NoContest,
    }));
    assert!(snap.battle.is_none());
}

#[test]
fn test_victory_advances_night_and_resumes_crops() {
    let mut engine = engine(short_config());
    engine.queue_commands([
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck },
        PlayerCommand::Plant { position: Vec2::ZERO },
        PlayerCommand::Water { position: Vec2::ZERO },
    ]);
    run_until_battle(&mut engine);

    let attack = engine.step_battle().unwrap();
    assert!(attack.target_defeated);
    assert_eq!(engine.step_battle(), None);

    assert_eq!(engine.phase(), GamePhase::Day { night: 2 });
    assert_eq!(engine.clock().time_left(), 1.0);
    let snap = engine.tick(0.0);
    assert!(snap.crops.iter().all(|c| !c.paused));
}

#[test]
fn test_defeat_repeats_night() {
    let config = SimConfig {
        nights: vec![night(&[("Ogre", 100, 100)])],
        ..short_config()
    };
    let mut engine = engine(config);
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Chicken });
    run_until_battle(&mut engine);

    assert_eq!(engine.finish_battle(), Some(BattleOutcome::PlayerLoses));
    assert_eq!(engine.phase(), GamePhase::Day { night: 1 });
    assert_eq!(engine.night_index(), 1);
}

#[test]
fn test_winning_final_night_completes() {
    let mut engine = engine(short_config());
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck });
    for expected in 1..=3 {
        run_until_battle(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Battle { night: expected });
        assert_eq!(engine.finish_battle(), Some(BattleOutcome::PlayerWins));
    }
    assert_eq!(engine.phase(), GamePhase::Completed);
    assert_eq!(engine.night_index(), 3);

    let snap = engine.tick(5.0);
    assert_eq!(snap.phase, GamePhase::Completed);
    assert!(!snap.clock.is_day);
}

#[test]
fn test_night_beyond_table_reuses_last_enemies() {
    let config = SimConfig {
        final_night: 5,
        nights: vec![night(&[("Rat", 1, 0)])],
        ..short_config()
    };
    let mut engine = engine(config);
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck });
    engine.load_night_index(4);

    let events = run_until_battle(&mut engine);
    assert!(events.contains(&GameEvent::BattleStarted {
        night: 4,
        enemy_night: 1,
        player_units: 1,
        enemy_units: 1,
    }));
    assert_eq!(engine.finish_battle(), Some(BattleOutcome::PlayerWins));
    assert_eq!(engine.night_index(), 5);
}

#[test]
fn test_loaded_night_past_final_completes_on_win() {
    let mut engine = engine(short_config());
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck });
    engine.load_night_index(7);
    assert_eq!(engine.night_index(), 7);

    let events = run_until_battle(&mut engine);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::BattleStarted {
            night: 7,
            enemy_night: 3,
            ..
        }
    )));
    engine.finish_battle();
    assert_eq!(engine.phase(), GamePhase::Completed);
}

#[test]
fn test_spawn_slots_cap_rosters() {
    let config = SimConfig {
        animal_spawn_slots: 2,
        enemy_spawn_slots: 1,
        nights: vec![night(&[("Rat", 1, 0), ("Rat", 1, 0), ("Rat", 1, 0)])],
        ..short_config()
    };
    let mut engine = engine(config);
    engine.queue_commands(AnimalKind::ALL.map(|kind| PlayerCommand::AdoptAnimal { kind }));
    let events = run_until_battle(&mut engine);
    assert!(events.contains(&GameEvent::BattleStarted {
        night: 1,
        enemy_night: 1,
        player_units: 2,
        enemy_units: 1,
    }));
}

#[test]
fn test_missing_enemies_is_no_contest() {
    let config = SimConfig {
        nights: Vec::new(),
        ..short_config()
    };
    let mut engine = engine(config);
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck });
    run_until_battle(&mut engine);
    assert_eq!(engine.finish_battle(), Some(BattleOutcome::NoContest));
    assert_eq!(engine.phase(), GamePhase::Day { night: 1 });
}

#[test]
fn test_abandon_battle_keeps_night() {
    let config = SimConfig {
        nights: vec![night(&[("Ogre", 100, 1)])],
        ..short_config()
    };
    let mut engine = engine(config);
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Cow });
    run_until_battle(&mut engine);
    assert!(engine.step_battle().is_some());

    engine.abandon_battle();
    assert_eq!(engine.phase(), GamePhase::Day { night: 1 });
    assert!(engine.battle_view().is_none());
    assert_eq!(engine.step_battle(), None);
    assert_eq!(engine.finish_battle(), None);
}

#[test]
fn test_battle_view_tracks_attacks() {
    let config = SimConfig {
        nights: vec![night(&[("Ogre", 100, 1)])],
        ..short_config()
    };
    let mut engine = engine(config);
    engine.queue_command(PlayerCommand::AdoptAnimal { kind: AnimalKind::Cow });
    run_until_battle(&mut engine);

    let first = engine.step_battle().unwrap();
    let second = engine.step_battle().unwrap();
    let view = engine.battle_view().unwrap();
    assert_eq!(view.attacks, vec![first, second]);
    assert_eq!(view.units.len(), 2);
    assert_eq!(view.units[0].facing, Facing::Left);
    assert_eq!(view.units[1].facing, Facing::Right);
    assert_eq!(view.units[1].current_hp, 98);
}

// ---- Harvest ----

#[test]
fn test_harvest_emits_drops_and_frees_plot() {
    let config = SimConfig {
        day_duration_secs: 60.0,
        ..Default::default()
    };
    let mut engine = engine(config);
    engine.queue_commands([
        PlayerCommand::Plant { position: Vec2::new(2.0, 2.0) },
        PlayerCommand::Water { position: Vec2::new(2.0, 2.0) },
    ]);
    engine.tick(0.0);

    let mut events = Vec::new();
    for _ in 0..4 {
        events.extend(engine.tick(1.0).events);
    }
    let stages: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::StageAdvanced { stage, .. } => Some(*stage),
            _ => None,
        })
        .collect();
    assert_eq!(stages, vec![1, 2, 3]);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::CropHarvested { .. })));
    let drops = events
        .iter()
        .filter(|e| matches!(e, GameEvent::DropProduced { .. }))
        .count();
    assert_eq!(drops, 3);

    engine.queue_command(PlayerCommand::Plant { position: Vec2::new(2.0, 2.0) });
    let snap = engine.tick(0.0);
    assert_eq!(snap.crops.len(), 1);
    assert!(rejections(&snap).is_empty());
}

// ---- Persistence ----

#[test]
fn test_save_state_round_trip() {
    let mut engine_a = engine(short_config());
    engine_a.queue_commands([
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Duck },
        PlayerCommand::Plant { position: Vec2::new(1.0, 1.0) },
        PlayerCommand::Water { position: Vec2::new(1.0, 1.0) },
    ]);
    engine_a.tick(0.25);
    run_until_battle(&mut engine_a);
    engine_a.finish_battle();
    let save = engine_a.save_state();
    assert_eq!(save.night, 2);

    let json = serde_json::to_string(&save).unwrap();
    let mut engine_b = engine(short_config());
    engine_b.load_save_state(&serde_json::from_str(&json).unwrap());

    assert_eq!(engine_b.night_index(), 2);
    assert_eq!(engine_b.phase(), GamePhase::Day { night: 2 });
    assert_eq!(engine_b.herd().animals(), &[AnimalKind::Duck]);
    assert_eq!(engine_b.crop_snapshot(), save.crops);

    let snap = engine_b.tick(0.0);
    assert!(snap.crops.iter().all(|c| c.state == GrowthState::Unwatered));
}

// ---- Determinism ----

fn scripted_run(seed: u64) -> Vec<String> {
    let mut engine = engine(SimConfig {
        seed,
        day_duration_secs: 5.0,
        ..Default::default()
    });
    engine.queue_commands([
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Cow },
        PlayerCommand::AdoptAnimal { kind: AnimalKind::Pig },
        PlayerCommand::Plant { position: Vec2::new(0.0, 0.0) },
        PlayerCommand::Plant { position: Vec2::new(1.0, 0.0) },
        PlayerCommand::WaterArea {
            position: Vec2::ZERO,
            radius: 2.0,
        },
    ]);

    let mut frames = Vec::new();
    for _ in 0..200 {
        let snap = engine.tick(0.5);
        frames.push(serde_json::to_string(&snap).unwrap());
        if engine.step_battle().is_some() {
            frames.push(serde_json::to_string(&engine.battle_view()).unwrap());
        }
    }
    frames
}

#[test]
fn test_determinism_same_seed() {
    assert_eq!(scripted_run(12345), scripted_run(12345));
}

#[test]
fn test_determinism_different_seeds() {
    assert_ne!(scripted_run(111), scripted_run(222));
}
