use pauder_engine::materials::{MaterialRegistry, State, MAT_SAND};
use pauder_engine::WorldCore;

const BUNDLE: &str = r#"{
    "materials": [
        {
            "name": "Ash",
            "density": 0.6,
            "meltPoint": 900.0,
            "boilPoint": 2000.0,
            "heatCapacity": 1.1,
            "stickiness": 0.2,
            "palette": [5921370, 6316128, 5592405]
        },
        {
            "name": "Iron",
            "density": 7.9,
            "meltPoint": 1538.0,
            "boilPoint": 2862.0,
            "heatCapacity": 0.45,
            "stickiness": 0.8,
            "palette": [9013641, 8158332],
            "reactions": [
                {
                    "reagents": ["Iron", "Water"],
                    "products": ["Rust"],
                    "rate": 120,
                    "minTemperature": 5.0
                }
            ]
        }
    ]
}"#;

#[test]
fn material_bundle_smoke_parses_and_has_core_invariants() {
    let registry = MaterialRegistry::from_bundle_json(BUNDLE).expect("bundle should parse");

    assert_eq!(registry.len(), 2);
    let iron_id = registry.id_of("Iron").expect("Iron is registered");
    assert!(registry.is_valid_id(iron_id));

    let iron = registry.lookup("Iron").unwrap();
    assert_eq!(iron.density, 7.9);
    assert_eq!(iron.state_at(20.0), State::Solid);
    assert_eq!(iron.state_at(1600.0), State::Liquid);

    let reactions = registry.reactions_of(iron_id);
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].rate, 120);
    assert_eq!(reactions[0].min_temperature, Some(5.0));

    // The manifest must be valid JSON listing both materials.
    let manifest: serde_json::Value = serde_json::from_str(&registry.manifest_json()).unwrap();
    assert_eq!(manifest["materials"].as_array().unwrap().len(), 2);
}

#[test]
fn world_swaps_to_a_loaded_bundle() {
    let mut world = WorldCore::new(16, 16);
    world.spawn(MAT_SAND, 8, 8).unwrap();

    world
        .load_material_bundle_json(BUNDLE)
        .expect("bundle should load");

    // Loading clears the grid; ids now come from the new registry.
    assert_eq!(world.particle_count(), 0);
    let iron_id = world.materials().id_of("Iron").unwrap();
    world.spawn(iron_id, 8, 0).unwrap();
    world.step(1.0);
    assert!(world.particle_at(8, 1).is_some());
}
