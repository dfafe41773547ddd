//! World - the owned simulation state and its tick orchestration
//!
//! `WorldCore` consolidates the occupancy grid, particle store, and wake
//! queue behind one object so the core is unit-testable without any
//! rendering or input harness. It only orchestrates; the actual work lives
//! in the command/step submodules.

use std::sync::Arc;

use crate::domain::materials::{MaterialId, MaterialRegistry};
use crate::error::EngineError;
use crate::spatial::{OccupancyGrid, ParticleStore, WakeQueue};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/moves.rs"]
mod moves;
#[path = "step/step.rs"]
mod step;
#[path = "render/snapshot.rs"]
mod snapshot;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::SimStats;
pub use snapshot::ParticleView;

use perf_timer::PerfTimer;

/// The simulation world.
pub struct WorldCore {
    materials: Arc<MaterialRegistry>,
    occupancy: OccupancyGrid,
    particles: ParticleStore,
    wake: WakeQueue,

    // Settings
    paused: bool,
    ambient_temperature: f64,

    // State
    frame: u64,
    sim_time: f64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: SimStats,
}

impl WorldCore {
    /// Create a new world with given dimensions and the default materials.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, MaterialRegistry::with_defaults())
    }

    /// Create a new world with a caller-supplied material registry.
    pub fn with_materials(width: u32, height: u32, materials: MaterialRegistry) -> Self {
        init::create_world_core(width, height, materials)
    }

    /// Replace the material set from a JSON bundle; clears the grid, since
    /// existing particles reference ids from the old registry.
    pub fn load_material_bundle_json(&mut self, json: &str) -> Result<(), EngineError> {
        let registry = MaterialRegistry::from_bundle_json(json)?;
        self.materials = Arc::new(registry);
        self.clear();
        Ok(())
    }

    pub fn material_manifest_json(&self) -> String {
        self.materials.manifest_json()
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn width(&self) -> u32 {
        self.occupancy.width()
    }

    pub fn height(&self) -> u32 {
        self.occupancy.height()
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Accumulated simulation seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn is_paused(&self) -> bool {
        settings::is_paused(self)
    }

    pub fn set_ambient_temperature(&mut self, temp: f64) {
        settings::set_ambient_temperature(self, temp);
    }

    pub fn ambient_temperature(&self) -> f64 {
        settings::ambient_temperature(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> SimStats {
        settings::get_perf_stats(self)
    }

    /// Spawn a particle; rejects occupied cells, bad ids, and coordinates
    /// outside the grid.
    pub fn spawn(&mut self, material: MaterialId, x: i32, y: i32) -> Result<(), EngineError> {
        commands::spawn(self, material, x, y)
    }

    /// Remove the particle at (x, y) if one exists.
    pub fn remove(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        commands::remove(self, x, y)
    }

    /// Spawn particles in a circular brush; returns how many cells took one.
    pub fn spawn_in_radius(&mut self, material: MaterialId, cx: i32, cy: i32, radius: i32) -> u32 {
        commands::spawn_in_radius(self, material, cx, cy, radius)
    }

    /// Remove particles in a circular brush; returns how many were removed.
    pub fn remove_in_radius(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        commands::remove_in_radius(self, cx, cy, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by one tick of `dt` elapsed seconds.
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    /// Row-major read-only view of every particle, for rendering.
    pub fn snapshot(&self) -> Vec<ParticleView> {
        snapshot::snapshot(self)
    }

    /// Currently queued coordinates, in insertion order.
    pub fn active_cells(&self) -> Vec<(u32, u32)> {
        snapshot::active_cells(self)
    }

    /// View of the particle at (x, y), if any.
    pub fn particle_at(&self, x: i32, y: i32) -> Option<ParticleView> {
        snapshot::particle_at(self, x, y)
    }
}

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
