use planetary::{CompositionClass, OrbitContext, PlanetaryBody, roman_numeral};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{BodyId, BodyKind, CelestialBody};
use units::Length;

use crate::config::GeneratorConfig;
use crate::moon_generation::{attach_satellites, attach_sub_planets, qualifies_for_sub_planets};

fn planet(rng: &mut ChaChaRng, class: CompositionClass) -> CelestialBody {
    let orbit_radius = Length::from_au(5.0);
    let body = PlanetaryBody::sample(rng, class, OrbitContext::Primary { orbit_radius });
    CelestialBody::new(
        BodyId(101),
        "TST-0001-I",
        orbit_radius,
        Some(BodyId(10)),
        BodyKind::Planet(body),
    )
}

/// A gas giant above the default sub-planet threshold, and the stream after it.
fn heavy_gas_giant(seed: u64) -> (CelestialBody, ChaChaRng) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    loop {
        let candidate = planet(&mut rng, CompositionClass::Gas);
        if candidate.planetary().unwrap().attributes.mass > 100.0 {
            return (candidate, rng);
        }
    }
}

#[test]
fn test_above_ceiling_draws_nothing() {
    let config = GeneratorConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(1);
    let mut giant = planet(&mut rng, CompositionClass::Gas);

    let before = rng.clone();
    attach_satellites(&mut rng, &config, &mut giant, config.max_satellite_depth + 1);
    assert!(giant.bound.is_empty());
    assert_eq!(rng, before);
}

#[test]
fn test_satellite_names_and_orbits() {
    let mut config = GeneratorConfig::default();
    config.satellite_means.gas = 6.0;

    let mut rng = ChaChaRng::seed_from_u64(3);
    let mut giant = planet(&mut rng, CompositionClass::Gas);
    attach_satellites(&mut rng, &config, &mut giant, 1);
    assert!(!giant.bound.is_empty());

    let (min, max) = config.moon_orbit_au;
    for (i, moon) in giant.bound.iter().enumerate() {
        assert_eq!(moon.name, format!("TST-0001-I-{}", roman_numeral(i + 1)));
        assert_eq!(moon.composition_class(), Some(CompositionClass::Moon));
        assert_eq!(moon.parent, Some(BodyId(101)));
        let r = moon.orbit_radius.to_au();
        assert!(r >= min && r <= max);
    }
}

#[test]
fn test_default_moons_have_no_satellites() {
    let config = GeneratorConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(5);
    for _ in 0..20 {
        let mut giant = planet(&mut rng, CompositionClass::Gas);
        attach_satellites(&mut rng, &config, &mut giant, 1);
        assert!(giant.bound.iter().all(|moon| moon.bound.is_empty()));
    }
}

#[test]
fn test_ships_and_stars_get_no_satellites() {
    let config = GeneratorConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(5);
    let mut ship = CelestialBody::ship(BodyId(1), "Rocinante", Default::default());
    attach_satellites(&mut rng, &config, &mut ship, 1);
    assert!(ship.bound.is_empty());
}

#[test]
fn test_heavy_gas_giant_gets_sub_planets() {
    let config = GeneratorConfig::default();
    for seed in 0..30 {
        let (mut giant, mut rng) = heavy_gas_giant(seed);
        attach_satellites(&mut rng, &config, &mut giant, 1);
        let satellites = giant.bound.len();

        assert!(qualifies_for_sub_planets(&config, &giant));
        let added = attach_sub_planets(&mut rng, &config, &mut giant);
        assert!((1..=config.sub_planets.max_count).contains(&added));
        assert_eq!(giant.bound.len(), satellites + added);

        let (min, max) = config.sub_planets.orbit_au;
        for (j, sub) in giant.bound[satellites..].iter().enumerate() {
            assert!(matches!(sub.kind, BodyKind::Planet(_)));
            assert_eq!(sub.composition_class(), Some(CompositionClass::Rock));
            assert_eq!(sub.name, format!("TST-0001-I-{}", roman_numeral(satellites + j + 1)));
            let r = sub.orbit_radius.to_au();
            assert!(r >= min && r <= max);
            // satellites start one level deeper than the planet's own
            assert!(sub.satellite_depth() < config.max_satellite_depth);
        }
    }
}

#[test]
fn test_sub_planet_gate() {
    let mut config = GeneratorConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(11);

    let mut rock = planet(&mut rng, CompositionClass::Rock);
    assert_eq!(attach_sub_planets(&mut rng, &config, &mut rock), 0);
    assert!(rock.bound.is_empty());

    let (mut giant, mut rng) = heavy_gas_giant(2);
    config.sub_planets.mass_threshold = f64::INFINITY;
    assert!(!qualifies_for_sub_planets(&config, &giant));
    assert_eq!(attach_sub_planets(&mut rng, &config, &mut giant), 0);
}

#[test]
fn test_sub_planet_count_respects_max() {
    let mut config = GeneratorConfig::default();
    config.sub_planets.max_count = 1;
    for seed in 0..10 {
        let (mut giant, mut rng) = heavy_gas_giant(seed);
        assert_eq!(attach_sub_planets(&mut rng, &config, &mut giant), 1);
    }
}
