//! Drop system: scatters harvest drops around the crop.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightfarm_core::config::DropConfig;
use nightfarm_core::events::GameEvent;

/// Emit one `DropProduced` per table entry, each landing uniformly inside a
/// disc of the entry's spread around `origin`.
pub fn scatter(
    origin: Vec2,
    table: &[DropConfig],
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    for drop in table {
        events.push(GameEvent::DropProduced {
            kind: drop.kind,
            position: origin + offset_in_disc(drop.spread, rng),
        });
    }
}

fn offset_in_disc(radius: f32, rng: &mut ChaCha8Rng) -> Vec2 {
    if radius <= 0.0 {
        return Vec2::ZERO;
    }
    let angle = rng.gen_range(0.0..TAU);
    // sqrt keeps the density uniform over the area
    let distance = radius * rng.gen::<f32>().sqrt();
    Vec2::from_angle(angle) * distance
}
