use crate::domain::materials::MaterialId;
use crate::domain::particle::Particle;
use crate::error::EngineError;

use super::{xorshift32, WorldCore};

pub(super) fn spawn(
    world: &mut WorldCore,
    material: MaterialId,
    x: i32,
    y: i32,
) -> Result<(), EngineError> {
    if !world.occupancy.in_bounds(x, y) {
        return Err(EngineError::OutOfBounds {
            x,
            y,
            width: world.occupancy.width(),
            height: world.occupancy.height(),
        });
    }

    let props = world
        .materials
        .get(material)
        .ok_or(EngineError::UnknownMaterialId(material))?;

    if world.occupancy.is_occupied(x, y) {
        return Err(EngineError::AlreadyOccupied {
            x: x as u32,
            y: y as u32,
        });
    }

    let temperature = world.ambient_temperature;
    let state = props.state_at(temperature);
    let seed = xorshift32(&mut world.rng_state);

    let (x, y) = (x as u32, y as u32);
    world
        .particles
        .insert(Particle::new(material, x, y, state, temperature, seed));
    world.occupancy.set_occupied(x, y, true);
    world.wake.wake(&world.occupancy, x as i32, y as i32);
    Ok(())
}

pub(super) fn remove(world: &mut WorldCore, x: i32, y: i32) -> Result<(), EngineError> {
    if !world.occupancy.in_bounds(x, y) {
        return Err(EngineError::OutOfBounds {
            x,
            y,
            width: world.occupancy.width(),
            height: world.occupancy.height(),
        });
    }

    let (ux, uy) = (x as u32, y as u32);
    if world.particles.take(ux, uy).is_none() {
        return Err(EngineError::NotFound { x: ux, y: uy });
    }
    world.occupancy.set_occupied(ux, uy, false);
    world.wake.remove(ux, uy);
    // Neighbors lost their support; the vacated center is skipped by wake
    // since it is no longer occupied.
    world.wake.wake(&world.occupancy, x, y);
    Ok(())
}

pub(super) fn spawn_in_radius(
    world: &mut WorldCore,
    material: MaterialId,
    cx: i32,
    cy: i32,
    radius: i32,
) -> u32 {
    let r2 = radius * radius;
    let mut spawned = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 && spawn(world, material, cx + dx, cy + dy).is_ok() {
                spawned += 1;
            }
        }
    }
    spawned
}

pub(super) fn remove_in_radius(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) -> u32 {
    let r2 = radius * radius;
    let mut removed = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 && remove(world, cx + dx, cy + dy).is_ok() {
                removed += 1;
            }
        }
    }
    removed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.occupancy.clear();
    world.particles.clear();
    world.wake.clear();
    world.frame = 0;
    world.sim_time = 0.0;
}
