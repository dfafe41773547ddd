use super::{moves, PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, dt: f64) {
    if world.paused {
        return;
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.occupancy.width() * world.occupancy.height();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    world.sim_time += dt;

    // Snapshot the queue once: cells woken while processing land after the
    // snapshot and run next tick, so a cascade never loops within one pass.
    let batch = world.wake.begin_tick();
    if perf_on {
        world.perf_stats.cells_scheduled = batch.len() as u32;
    }

    for (x, y) in batch {
        moves::update_cell(world, x, y, dt);
    }

    if perf_on {
        world.perf_stats.active_cells = world.wake.len() as u32;
        world.perf_stats.particle_count = world.particles.len() as u32;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}
