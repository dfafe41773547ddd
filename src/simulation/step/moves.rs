use crate::domain::materials::{MaterialId, State};
use crate::spatial::grid::NEIGHBOR_OFFSETS;

use super::WorldCore;

/// Evaluate one queued cell for this tick.
///
/// Exactly one of: retire a stale/converged/stable entry, hold under grip,
/// move toward the first open settle candidate, or density-swap with the
/// occupant below. Every mutation keeps the occupancy index and the particle
/// store in lockstep and wakes the disturbed neighborhoods.
pub(super) fn update_cell(world: &mut WorldCore, x: u32, y: u32, dt: f64) {
    let xi = x as i32;
    let yi = y as i32;

    let sim_time = world.sim_time;
    let (material, state, grip) = match world.particles.get_mut(x, y) {
        None => {
            // Stale entry: the occupant moved away or was removed.
            world.wake.remove(x, y);
            if world.perf_enabled {
                world.perf_stats.stale_entries += 1;
            }
            return;
        }
        Some(p) => {
            // A particle evaluated earlier this tick may have moved into a
            // coordinate that was already in the batch; one evaluation per
            // particle per tick, so leave the entry for the next pass.
            if p.last_awake == sim_time {
                return;
            }
            p.last_awake = sim_time;
            (p.material, p.state, p.grip)
        }
    };

    if world.perf_enabled {
        world.perf_stats.cells_processed += 1;
    }

    if let Some(hook) = world.materials.get(material).and_then(|m| m.tick) {
        if let Some(p) = world.particles.get_mut(x, y) {
            hook(p);
        }
    }

    if converged(world, xi, yi, material) {
        if let Some(p) = world.particles.get_mut(x, y) {
            p.moving = false;
        }
        world.wake.remove(x, y);
        if world.perf_enabled {
            world.perf_stats.cells_retired += 1;
        }
        return;
    }

    if state != State::Solid {
        // Liquid/gas movement is an extension point; nothing schedules them.
        if let Some(p) = world.particles.get_mut(x, y) {
            p.moving = false;
        }
        world.wake.remove(x, y);
        if world.perf_enabled {
            world.perf_stats.cells_retired += 1;
        }
        return;
    }

    // Falling iff any settle candidate below is open; walls read occupied.
    let falling = !world.occupancy.is_occupied(xi, yi + 1)
        || !world.occupancy.is_occupied(xi - 1, yi + 1)
        || !world.occupancy.is_occupied(xi + 1, yi + 1);

    if falling && grip > 0.0 && !world.occupancy.occupied_neighbors(xi, yi).is_empty() {
        // Static friction: hold in place, bleed grip, stay scheduled.
        if let Some(p) = world.particles.get_mut(x, y) {
            p.grip = (p.grip - dt).max(0.0);
            p.moving = false;
        }
        if world.perf_enabled {
            world.perf_stats.grip_holds += 1;
        }
        return;
    }

    let mut landed = None;
    if falling {
        for (nx, ny) in [(xi, yi + 1), (xi - 1, yi + 1), (xi + 1, yi + 1)] {
            if !world.occupancy.is_occupied(nx, ny) {
                apply_move(world, (x, y), (nx as u32, ny as u32));
                landed = Some((nx as u32, ny as u32));
                break;
            }
            // A neighbor mid-motion is passable: trade cells with it instead
            // of leaving a one-tick gap in the vacated column.
            if world.occupancy.in_bounds(nx, ny)
                && world
                    .particles
                    .get(nx as u32, ny as u32)
                    .is_some_and(|n| n.moving)
            {
                apply_swap(world, (x, y), (nx as u32, ny as u32));
                landed = Some((nx as u32, ny as u32));
                break;
            }
        }
    }

    // Heavier sinks through a lighter occupant directly below.
    if landed.is_none() && world.occupancy.in_bounds(xi, yi + 1) {
        let below = (x, y + 1);
        let mine = world.materials.get(material).map(|m| m.density);
        let theirs = world
            .particles
            .get(below.0, below.1)
            .and_then(|p| world.materials.get(p.material))
            .map(|m| m.density);
        if let (Some(mine), Some(theirs)) = (mine, theirs) {
            if theirs < mine {
                apply_swap(world, (x, y), below);
                landed = Some(below);
            }
        }
    }

    if landed.is_none() {
        let stickiness = world
            .materials
            .get(material)
            .map(|m| m.stickiness as f64)
            .unwrap_or(0.0);
        if let Some(p) = world.particles.get_mut(x, y) {
            p.moving = false;
            if !falling {
                p.grip = p.grip.max(stickiness);
            }
        }
        if !falling {
            // Fully supported with nothing to displace: stable until a
            // neighbor changes and re-wakes this cell.
            world.wake.remove(x, y);
            if world.perf_enabled {
                world.perf_stats.cells_retired += 1;
            }
        }
    }
}

/// All 8 surrounding positions are walls or non-moving particles of the same
/// material. Out-of-bounds counts as settled so edge and corner cells can
/// retire like interior ones.
fn converged(world: &WorldCore, x: i32, y: i32, material: MaterialId) -> bool {
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = x + dx;
        let ny = y + dy;
        if !world.occupancy.in_bounds(nx, ny) {
            continue;
        }
        match world.particles.get(nx as u32, ny as u32) {
            None => return false,
            Some(n) => {
                if n.material != material || n.moving {
                    return false;
                }
            }
        }
    }
    true
}

fn apply_move(world: &mut WorldCore, from: (u32, u32), to: (u32, u32)) {
    world.particles.move_particle(from, to);
    world.occupancy.set_occupied(from.0, from.1, false);
    world.occupancy.set_occupied(to.0, to.1, true);
    if let Some(p) = world.particles.get_mut(to.0, to.1) {
        p.moving = true;
    }
    // The vacated cell's neighbors lost support; the landing site may
    // unsettle its own.
    world.wake.wake(&world.occupancy, from.0 as i32, from.1 as i32);
    world.wake.wake(&world.occupancy, to.0 as i32, to.1 as i32);
    if world.perf_enabled {
        world.perf_stats.particles_moved += 1;
    }
}

fn apply_swap(world: &mut WorldCore, a: (u32, u32), b: (u32, u32)) {
    world.particles.swap(a, b);
    if let Some(p) = world.particles.get_mut(a.0, a.1) {
        p.moving = true;
    }
    if let Some(p) = world.particles.get_mut(b.0, b.1) {
        p.moving = true;
    }
    world.wake.wake(&world.occupancy, a.0 as i32, a.1 as i32);
    world.wake.wake(&world.occupancy, b.0 as i32, b.1 as i32);
    if world.perf_enabled {
        world.perf_stats.particles_moved += 2;
        world.perf_stats.swaps += 1;
    }
}
