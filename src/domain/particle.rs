//! Per-cell particle state
//!
//! A particle references its material by id and owns everything that varies
//! per cell: position, physical state, grip, thermal accumulators, and the
//! motion flag the settle pass uses for passability.

use std::hash::{Hash, Hasher};

use crate::domain::materials::{MaterialId, State};

#[derive(Debug, Clone)]
pub struct Particle {
    pub material: MaterialId,
    pub x: u32,
    pub y: u32,
    pub state: State,
    /// Accumulated static friction; never negative.
    pub grip: f64,
    /// Joules.
    pub energy: f64,
    pub incoming_energy: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Simulation time of the last evaluation; negative before the first one.
    pub last_awake: f64,
    /// Stable per-particle seed for the color brush.
    pub seed: u32,
    /// True iff the particle changed cell this tick.
    pub moving: bool,
}

impl Particle {
    pub fn new(material: MaterialId, x: u32, y: u32, state: State, temperature: f64, seed: u32) -> Self {
        Self {
            material,
            x,
            y,
            state,
            grip: 0.0,
            energy: 0.0,
            incoming_energy: 0.0,
            temperature,
            last_awake: -1.0,
            seed,
            moving: false,
        }
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }
}

// Identity is (material, x, y); the coordinate-indexed store already
// guarantees at most one particle per cell, so equality is never used for
// lookup.
impl PartialEq for Particle {
    fn eq(&self, other: &Self) -> bool {
        self.material == other.material && self.x == other.x && self.y == other.y
    }
}

impl Eq for Particle {}

impl Hash for Particle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.material.hash(state);
        self.x.hash(state);
        self.y.hash(state);
    }
}
