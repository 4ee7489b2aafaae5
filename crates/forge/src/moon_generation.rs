//! Satellite and sub-planet generation
//!
//! Satellites are attached recursively: every natural body draws a
//! Poisson-distributed number of moons for its composition class, and each
//! moon gets the same treatment one level deeper until the depth ceiling.
//! Heavy gas giants additionally collect a handful of small Rock sub-planets
//! on tight orbits, each with a satellite pass of its own.
//!
//! Bodies are created with placeholder ids; [`crate::generation`] numbers
//! the finished tree.

use planetary::{CompositionClass, OrbitContext, PlanetaryBody, roman_numeral};
use rand::Rng;
use rand_chacha::ChaChaRng;
use star_system::{BodyId, BodyKind, CelestialBody};
use stellar::sample_uniform;
use tracing::trace;
use units::Length;

use crate::config::GeneratorConfig;
use crate::sampling::sample_count;

/// Depth a planet's own satellites are generated at.
pub const PLANET_SATELLITE_DEPTH: usize = 1;

/// Depth a sub-planet's satellites are generated at.
pub const SUB_PLANET_SATELLITE_DEPTH: usize = 2;

// =============================================================================
// Satellites
// =============================================================================

/// Attach satellites to `parent` at `depth`, recursing one level per moon.
///
/// Nothing is drawn when `depth` exceeds the configured ceiling or when the
/// parent is not a planet or moon.
pub fn attach_satellites(
    rng: &mut ChaChaRng,
    config: &GeneratorConfig,
    parent: &mut CelestialBody,
    depth: usize,
) {
    if depth > config.max_satellite_depth {
        return;
    }
    let Some(body) = parent.planetary() else {
        return;
    };
    let mean = config.satellite_means.mean(body.class);
    let parent_radius = Some(body.attributes.radius);

    let count = sample_count(rng, mean);
    if count > 0 {
        trace!(parent = %parent.name, depth, count, "attaching satellites");
    }

    for i in 0..count {
        let orbit_radius = Length::from_au(sample_uniform(rng, config.moon_orbit_au));
        let name = format!("{}-{}", parent.name, roman_numeral(i + 1));
        let moon = PlanetaryBody::sample(
            rng,
            CompositionClass::Moon,
            OrbitContext::Satellite {
                orbit_radius,
                parent_radius,
            },
        );

        let mut satellite = CelestialBody::new(
            BodyId(0),
            name,
            orbit_radius,
            Some(parent.id),
            BodyKind::Moon(moon),
        );
        attach_satellites(rng, config, &mut satellite, depth + 1);
        parent.bound.push(satellite);
    }
}

// =============================================================================
// Sub-planets
// =============================================================================

/// Whether `planet` is a gas giant heavy enough for sub-planets.
pub fn qualifies_for_sub_planets(config: &GeneratorConfig, planet: &CelestialBody) -> bool {
    planet.planetary().is_some_and(|body| {
        body.class == CompositionClass::Gas
            && body.attributes.mass > config.sub_planets.mass_threshold
    })
}

/// Attach 1..=`max_count` Rock sub-planets to a qualifying gas giant.
///
/// Sub-planet numerals continue after the planet's satellites so sibling
/// names stay distinct. Returns the number attached.
pub fn attach_sub_planets(
    rng: &mut ChaChaRng,
    config: &GeneratorConfig,
    planet: &mut CelestialBody,
) -> usize {
    if !qualifies_for_sub_planets(config, planet) {
        return 0;
    }
    let settings = &config.sub_planets;
    let first_ordinal = planet.bound.len();
    let count = rng.random_range(1..=settings.max_count.max(1));
    trace!(planet = %planet.name, count, "attaching sub-planets");

    for j in 0..count {
        let orbit_radius = Length::from_au(sample_uniform(rng, settings.orbit_au));
        let name = format!("{}-{}", planet.name, roman_numeral(first_ordinal + j + 1));
        let body = PlanetaryBody::sample(
            rng,
            CompositionClass::Rock,
            OrbitContext::Primary { orbit_radius },
        );

        let mut sub_planet = CelestialBody::new(
            BodyId(0),
            name,
            orbit_radius,
            Some(planet.id),
            BodyKind::Planet(body),
        );
        attach_satellites(rng, config, &mut sub_planet, SUB_PLANET_SATELLITE_DEPTH);
        planet.bound.push(sub_planet);
    }
    count
}
