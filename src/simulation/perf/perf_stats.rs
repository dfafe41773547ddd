use wasm_bindgen::prelude::*;

/// Per-step counters, captured only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct SimStats {
    pub(super) step_ms: f64,
    pub(super) cells_scheduled: u32,
    pub(super) cells_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) swaps: u32,
    pub(super) cells_retired: u32,
    pub(super) stale_entries: u32,
    pub(super) grip_holds: u32,
    pub(super) active_cells: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
}

impl SimStats {
    pub(crate) fn reset(&mut self) {
        *self = SimStats::default();
    }
}

#[wasm_bindgen]
impl SimStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_scheduled(&self) -> u32 { self.cells_scheduled }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn cells_retired(&self) -> u32 { self.cells_retired }
    #[wasm_bindgen(getter)]
    pub fn stale_entries(&self) -> u32 { self.stale_entries }
    #[wasm_bindgen(getter)]
    pub fn grip_holds(&self) -> u32 { self.grip_holds }
    #[wasm_bindgen(getter)]
    pub fn active_cells(&self) -> u32 { self.active_cells }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
