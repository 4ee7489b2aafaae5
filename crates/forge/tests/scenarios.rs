//! End-to-end generation scenarios.

use std::collections::HashSet;

use forge::{GeneratorConfig, generate_system, generate_universe};
use orbits::Orbit;
use planetary::CompositionClass;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{BodyKind, Universe};

fn universe(seed: u64) -> Universe {
    generate_universe(&GeneratorConfig::default(), 40, 5.0, seed).unwrap()
}

#[test]
fn rock_bodies_stay_in_class_ranges() {
    let profile = CompositionClass::Rock.profile();
    let mut checked = 0;

    for seed in 0..5 {
        let universe = universe(seed);
        for system in universe.systems() {
            for (_, body) in system.bodies() {
                let Some(planetary) = body.planetary() else { continue };
                if planetary.class != CompositionClass::Rock {
                    continue;
                }
                let attrs = &planetary.attributes;
                assert!(attrs.mass >= profile.mass.0 && attrs.mass <= profile.mass.1);
                assert!(attrs.radius >= profile.radius.0 && attrs.radius <= profile.radius.1);
                checked += 1;
            }
        }
    }
    assert!(checked > 100, "only {checked} rock bodies generated");
}

#[test]
fn circular_orbit_starts_on_the_x_axis() {
    let orbit = Orbit::from_apsides(1.0, 1.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!((orbit.a, orbit.e, orbit.b), (1.0, 0.0, 1.0));

    let position = orbit.position(0.0);
    assert!((position.x - 1.0).abs() < 1e-12);
    assert!(position.y.abs() < 1e-12);
    assert!(position.z.abs() < 1e-12);
}

#[test]
fn system_without_planets_is_just_a_star() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let system = generate_system(&GeneratorConfig::default(), 1, "NIL-0000", 0, &mut rng).unwrap();

    assert_eq!(system.bodies().count(), 1);
    assert!(system.star.bound.is_empty());
    assert_eq!(system.orbital_view().body_count(), 1);
}

#[test]
fn heavy_gas_giants_carry_rock_sub_planets() {
    let config = GeneratorConfig::default();
    let mut giants = 0;

    for seed in 0..5 {
        for system in universe(seed).systems() {
            for planet in system.planets() {
                let Some(body) = planet.planetary() else { continue };
                let sub_planets: Vec<_> = planet
                    .bound
                    .iter()
                    .filter(|child| matches!(child.kind, BodyKind::Planet(_)))
                    .collect();

                if body.class == CompositionClass::Gas
                    && body.attributes.mass > config.sub_planets.mass_threshold
                {
                    giants += 1;
                    assert!(!sub_planets.is_empty());
                    assert!(sub_planets.len() <= config.sub_planets.max_count);
                    assert!(
                        sub_planets
                            .iter()
                            .all(|sub| sub.composition_class() == Some(CompositionClass::Rock))
                    );
                } else {
                    assert!(sub_planets.is_empty());
                }
            }
        }
    }
    assert!(giants > 0);
}

#[test]
fn hierarchy_respects_depth_ceiling() {
    let mut config = GeneratorConfig::default();
    config.satellite_means.moon = 1.0;
    config.max_satellite_depth = 4;

    let universe = generate_universe(&config, 30, 4.0, 99).unwrap();
    for system in universe.systems() {
        for planet in system.planets() {
            assert!(planet.satellite_depth() <= config.max_satellite_depth);
        }
    }
}

#[test]
fn seeded_universes_are_identical() {
    let a = universe(1234);
    let b = universe(1234);
    assert_eq!(a, b);

    let json = a.to_snapshot_json().unwrap();
    let restored = Universe::from_snapshot_json(&json).unwrap();
    assert_eq!(
        restored.names().collect::<Vec<_>>(),
        a.names().collect::<Vec<_>>()
    );
}

#[test]
fn system_names_are_unique() {
    let universe = generate_universe(&GeneratorConfig::default(), 500, 1.0, 3).unwrap();
    assert_eq!(universe.len(), 500);

    let stars: HashSet<&str> = universe.systems().map(|s| s.star.name.as_str()).collect();
    assert_eq!(stars.len(), 500);
}
