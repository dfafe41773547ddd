//! Spatial storage: occupancy index, particle arena, wake queue.

pub mod grid;
pub mod store;
pub mod wake;

pub use grid::{Neighbors, OccupancyGrid, NEIGHBOR_OFFSETS};
pub use store::ParticleStore;
pub use wake::WakeQueue;
