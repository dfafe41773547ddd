use std::sync::Arc;

use crate::domain::materials::MaterialRegistry;
use crate::spatial::{OccupancyGrid, ParticleStore, WakeQueue};

use super::perf_stats::SimStats;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, materials: MaterialRegistry) -> WorldCore {
    WorldCore {
        materials: Arc::new(materials),
        occupancy: OccupancyGrid::new(width, height),
        particles: ParticleStore::new(width, height),
        wake: WakeQueue::new(width, height),
        paused: false,
        ambient_temperature: 20.0,
        frame: 0,
        sim_time: 0.0,
        rng_state: 12345,
        perf_enabled: false,
        perf_stats: SimStats::default(),
    }
}
