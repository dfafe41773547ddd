//! Pauder Engine - falling-powder simulation core
//!
//! Architecture:
//! - domain/     - Materials, particles, color brush
//! - spatial/    - Occupancy index, particle store, wake queue
//! - simulation/ - World orchestration and the tick step
//!
//! The core is pure Rust; `World` is the WASM facade the web front end
//! drives. Rendering and input live entirely outside this crate.

pub mod domain;
pub mod error;
pub mod simulation;
pub mod spatial;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps external paths short)
pub use domain::brush;
pub use domain::materials;
pub use domain::particle;
pub use spatial::grid;
pub use spatial::store;
pub use spatial::wake;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Pauder WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::materials::{Material, MaterialId, MaterialRegistry, Reaction, State};
pub use domain::particle::Particle;
pub use error::EngineError;
pub use simulation::{ParticleView, SimStats, World, WorldCore};

// Export default material ids for JS
#[wasm_bindgen]
pub fn mat_sand() -> u16 { materials::MAT_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u16 { materials::MAT_WATER }
#[wasm_bindgen]
pub fn mat_stone() -> u16 { materials::MAT_STONE }
