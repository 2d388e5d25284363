//! Scripted player input for headless sessions.

use glam::Vec2;

use nightfarm_core::commands::PlayerCommand;
use nightfarm_core::enums::AnimalKind;

/// Field planted by the scripted player.
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub origin: Vec2,
    pub rows: u32,
    pub cols: u32,
    pub spacing: f32,
}

impl FieldLayout {
    /// Plot positions, row by row.
    pub fn positions(&self) -> Vec<Vec2> {
        (0..self.rows)
            .flat_map(|row| {
                (0..self.cols).map(move |col| {
                    self.origin + Vec2::new(col as f32, row as f32) * self.spacing
                })
            })
            .collect()
    }
}

/// Adopt the given animals, then plant and water every plot of the field.
pub fn opening_moves(animals: &[AnimalKind], field: &FieldLayout) -> Vec<PlayerCommand> {
    let positions = field.positions();
    let adopt = animals
        .iter()
        .map(|&kind| PlayerCommand::AdoptAnimal { kind });
    let plant = positions
        .iter()
        .map(|&position| PlayerCommand::Plant { position });
    let water = positions
        .iter()
        .map(|&position| PlayerCommand::WaterArea {
            position,
            radius: 0.0,
        });
    adopt.chain(plant).chain(water).collect()
}
