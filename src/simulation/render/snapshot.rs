//! Read-only extraction for the presentation layer.
//!
//! Views carry everything a renderer needs per cell, color included, so the
//! brush never leaks into the physics pass. Nothing here mutates the world.

use serde::Serialize;

use crate::domain::brush;
use crate::domain::materials::{MaterialId, State};
use crate::domain::particle::Particle;

use super::WorldCore;

/// Flat per-particle view handed to the renderer and debug tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleView {
    pub x: u32,
    pub y: u32,
    pub material: MaterialId,
    pub state: State,
    pub moving: bool,
    /// Packed 0xRRGGBB from the material's noise brush.
    pub color: u32,
}

impl ParticleView {
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }
}

pub(super) fn snapshot(world: &WorldCore) -> Vec<ParticleView> {
    world
        .particles
        .iter()
        .map(|p| view_of(world, p))
        .collect()
}

pub(super) fn active_cells(world: &WorldCore) -> Vec<(u32, u32)> {
    world.wake.iter().collect()
}

pub(super) fn particle_at(world: &WorldCore, x: i32, y: i32) -> Option<ParticleView> {
    if !world.occupancy.in_bounds(x, y) {
        return None;
    }
    world
        .particles
        .get(x as u32, y as u32)
        .map(|p| view_of(world, p))
}

fn view_of(world: &WorldCore, particle: &Particle) -> ParticleView {
    let color = world
        .materials
        .get(particle.material)
        .map(|m| brush::color_for(m, particle.seed))
        .unwrap_or(0);
    ParticleView {
        x: particle.x,
        y: particle.y,
        material: particle.material,
        state: particle.state,
        moving: particle.moving,
        color,
    }
}
