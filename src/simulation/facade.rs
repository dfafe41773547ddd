use wasm_bindgen::prelude::*;

use crate::domain::materials::MaterialId;

use super::perf_stats::SimStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and the default materials
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn sim_time(&self) -> f64 { self.core.sim_time() }

    /// Spawn a particle; rejects occupied or out-of-bounds cells
    pub fn spawn(&mut self, material: MaterialId, x: i32, y: i32) -> Result<(), JsValue> {
        self.core
            .spawn(material, x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove the particle at position
    pub fn remove(&mut self, x: i32, y: i32) -> Result<(), JsValue> {
        self.core
            .remove(x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Spawn particles in radius (brush); returns how many cells took one
    pub fn spawn_in_radius(&mut self, material: MaterialId, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.spawn_in_radius(material, cx, cy, radius)
    }

    /// Remove particles in radius; returns how many were removed
    pub fn remove_in_radius(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.remove_in_radius(cx, cy, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance the simulation by one tick of `dt` elapsed seconds
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    /// Paused worlds skip stepping but still accept spawn/remove
    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.core.is_paused()
    }

    pub fn set_ambient_temperature(&mut self, temp: f64) {
        self.core.set_ambient_temperature(temp);
    }

    pub fn load_material_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_material_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn get_material_manifest_json(&self) -> String {
        self.core.material_manifest_json()
    }

    /// Row-major particle views as JSON, for rendering
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.core.snapshot()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Currently queued coordinates as JSON (debug/tooling)
    pub fn active_cells_json(&self) -> String {
        serde_json::to_string(&self.core.active_cells()).unwrap_or_else(|_| "[]".to_string())
    }

    /// View of the particle at (x, y) as JSON, or null
    pub fn particle_at_json(&self, x: i32, y: i32) -> String {
        serde_json::to_string(&self.core.particle_at(x, y)).unwrap_or_else(|_| "null".to_string())
    }

    /// Number of queued cells (debug/stats)
    pub fn active_cell_count(&self) -> usize {
        self.core.active_cells().len()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> SimStats {
        self.core.get_perf_stats()
    }
}
