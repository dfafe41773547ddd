//! Engine error types
//!
//! Every fallible public operation returns one of these. The simulation step
//! itself never errors: an occupancy/store mismatch is a corrupted internal
//! state and is caught by debug assertions, not reported here.

use thiserror::Error;

use crate::domain::materials::MaterialId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("cell ({x}, {y}) is already occupied")]
    AlreadyOccupied { x: u32, y: u32 },

    #[error("no particle at ({x}, {y})")]
    NotFound { x: u32, y: u32 },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("material \"{0}\" is already registered")]
    DuplicateMaterial(String),

    #[error("unknown material \"{0}\"")]
    UnknownMaterial(String),

    #[error("unknown material id {0}")]
    UnknownMaterialId(MaterialId),

    #[error("invalid material bundle: {0}")]
    InvalidBundle(String),
}
