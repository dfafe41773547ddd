//! Material catalog - immutable reference data shared by every particle
//!
//! Materials are registered once at startup (or loaded from a JSON bundle)
//! and never mutated while the simulation runs. Particles reference them by
//! dense `MaterialId` index instead of owning copies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::particle::Particle;
use crate::error::EngineError;

/// Dense index into the registry.
pub type MaterialId = u16;

/// Optional per-tick behavior hook, run once per evaluation of a particle.
pub type TickHook = fn(&mut Particle);

/// Built-in ids for the default material set.
pub const MAT_SAND: MaterialId = 0;
pub const MAT_WATER: MaterialId = 1;
pub const MAT_STONE: MaterialId = 2;

/// Physical state of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Solid,
    Liquid,
    Gas,
}

/// Declarative transform between adjacent particles. Not evaluated by the
/// in-scope step; the registry only stores and exposes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub reagents: Vec<String>,
    pub products: Vec<String>,
    #[serde(default = "default_rate")]
    pub rate: u32,
    #[serde(default)]
    pub min_temperature: Option<f32>,
}

fn default_rate() -> u32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    /// Mass per cell volume; heavier sinks below lighter.
    pub density: f32,
    pub melt_point: f32,
    pub boil_point: f32,
    pub heat_capacity: f32,
    /// Grip a resting particle accumulates before it can be undermined.
    pub stickiness: f32,
    /// Packed 0xRRGGBB colors sampled by the noise brush.
    pub palette: Vec<u32>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(skip)]
    pub tick: Option<TickHook>,
}

impl Material {
    pub fn new(name: impl Into<String>, density: f32, palette: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            density,
            melt_point: 1000.0,
            boil_point: 3000.0,
            heat_capacity: 1.0,
            stickiness: 0.0,
            palette,
            reactions: Vec::new(),
            tick: None,
        }
    }

    /// State this material takes at the given temperature.
    pub fn state_at(&self, temperature: f64) -> State {
        if temperature >= self.boil_point as f64 {
            State::Gas
        } else if temperature >= self.melt_point as f64 {
            State::Liquid
        } else {
            State::Solid
        }
    }
}

pub struct MaterialRegistry {
    materials: Vec<Material>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registry preloaded with the base set: Sand, Water, Stone.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let mut sand = Material::new(
            "Sand",
            1.6,
            vec![
                0xBFA68B, 0xC3AF91, 0xB79073, 0xAB947D, 0xA38B6F, 0xB8966D, 0xC4A98C,
                0xC9B6A1, 0xA38460, 0xA57E5D, 0xBBA285, 0xAF916A, 0xB9A388, 0xB9A287,
                0xB79A71,
            ],
        );
        sand.melt_point = 1700.0;
        sand.boil_point = 2230.0;
        sand.heat_capacity = 0.83;
        sand.stickiness = 0.1;

        let mut water = Material::new(
            "Water",
            1.0,
            vec![0x3B6EB5, 0x3F74BD, 0x4379C4, 0x376AA8],
        );
        water.melt_point = 0.0;
        water.boil_point = 100.0;
        water.heat_capacity = 4.19;

        let mut stone = Material::new(
            "Stone",
            2.6,
            vec![0x7D7D7D, 0x858585, 0x6F6F6F, 0x8D8D8D, 0x767676],
        );
        stone.melt_point = 1200.0;
        stone.boil_point = 2800.0;
        stone.heat_capacity = 0.79;
        stone.stickiness = 0.6;

        // Default registration cannot collide; ids are asserted below.
        let sand_id = registry.register(sand).expect("register Sand");
        let water_id = registry.register(water).expect("register Water");
        let stone_id = registry.register(stone).expect("register Stone");
        debug_assert_eq!(sand_id, MAT_SAND);
        debug_assert_eq!(water_id, MAT_WATER);
        debug_assert_eq!(stone_id, MAT_STONE);

        registry
    }

    /// Load a registry from a JSON material bundle.
    pub fn from_bundle_json(json: &str) -> Result<Self, EngineError> {
        let bundle: BundleRoot =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidBundle(e.to_string()))?;

        let mut registry = Self::new();
        for material in bundle.materials {
            if material.palette.is_empty() {
                return Err(EngineError::InvalidBundle(format!(
                    "material \"{}\" has an empty palette",
                    material.name
                )));
            }
            if !(material.density.is_finite() && material.density > 0.0) {
                return Err(EngineError::InvalidBundle(format!(
                    "material \"{}\" has a non-positive density",
                    material.name
                )));
            }
            registry.register(material)?;
        }
        Ok(registry)
    }

    /// Add a material; fails if the name is taken.
    pub fn register(&mut self, material: Material) -> Result<MaterialId, EngineError> {
        if self.by_name.contains_key(&material.name) {
            return Err(EngineError::DuplicateMaterial(material.name));
        }
        let id = self.materials.len() as MaterialId;
        self.by_name.insert(material.name.clone(), id);
        self.materials.push(material);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Result<&Material, EngineError> {
        self.id_of(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| EngineError::UnknownMaterial(name.to_string()))
    }

    pub fn id_of(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id as usize)
    }

    pub fn is_valid_id(&self, id: MaterialId) -> bool {
        (id as usize) < self.materials.len()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Reaction list of a material; entry point for a future reaction pass.
    pub fn reactions_of(&self, id: MaterialId) -> &[Reaction] {
        self.get(id).map(|m| m.reactions.as_slice()).unwrap_or(&[])
    }

    /// Serialized id/name/swatch list for the front end's material picker.
    pub fn manifest_json(&self) -> String {
        let entries: Vec<ManifestMaterial<'_>> = self
            .materials
            .iter()
            .enumerate()
            .map(|(idx, m)| ManifestMaterial {
                id: idx as MaterialId,
                name: &m.name,
                swatch: m.palette.first().copied().unwrap_or(0),
            })
            .collect();
        let manifest = Manifest {
            format_version: 1,
            materials: entries,
        };
        serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    format_version: u32,
    materials: Vec<ManifestMaterial<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestMaterial<'a> {
    id: MaterialId,
    name: &'a str,
    swatch: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    materials: Vec<Material>,
}
