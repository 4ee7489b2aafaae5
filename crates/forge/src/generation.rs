//! Star system generation pipeline
//!
//! 1. A star of a uniformly chosen spectral class.
//! 2. Planets outward from `first_orbit_au` in uniform gaps; each radius
//!    picks the inner or outer class table.
//! 3. A recursive satellite pass per planet, then sub-planets for heavy
//!    gas giants (see [`crate::moon_generation`]).
//! 4. Ids are assigned once the tree is complete.

use orbits::Vec3;
use planetary::{OrbitContext, PlanetaryBody, roman_numeral};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{BodyId, BodyKind, CelestialBody, StarSystem, id_stride, seed_from_name};
use stellar::{sample_spectral_type, sample_star, sample_uniform};
use tracing::{debug, trace};
use units::Length;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::moon_generation::{PLANET_SATELLITE_DEPTH, attach_satellites, attach_sub_planets};
use crate::sampling::WeightedClasses;

/// Generate a star system with `n_planets` planets from the given stream.
///
/// The system sits at the origin; callers placing it in a universe set
/// [`StarSystem::position`] afterwards.
///
/// # Example
/// ```
/// use forge::{GeneratorConfig, generate_system};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(7);
/// let system = generate_system(&GeneratorConfig::default(), 1, "KVX-0042", 4, &mut rng).unwrap();
///
/// assert_eq!(system.planet_count(), 4);
/// assert_eq!(system.planets().next().unwrap().name, "KVX-0042-I");
/// ```
pub fn generate_system(
    config: &GeneratorConfig,
    id: u64,
    name: &str,
    n_planets: usize,
    rng: &mut ChaChaRng,
) -> Result<StarSystem, GenerationError> {
    config.validate()?;
    let inner = WeightedClasses::new("inner_weights", &config.inner_classes, &config.inner_weights)?;
    let outer = WeightedClasses::new("outer_weights", &config.outer_classes, &config.outer_weights)?;

    // ==== Star ====
    let spectral_type = sample_spectral_type(rng, &config.spectral_classes)
        .ok_or_else(|| GenerationError::invalid("spectral_classes", "must not be empty"))?;
    let star_id = id
        .checked_mul(10)
        .map(BodyId)
        .ok_or(GenerationError::IdOverflow { parent: id })?;
    let mut star = CelestialBody::new(
        star_id,
        format!("{}-{}", spectral_type, name),
        Length::zero(),
        None,
        BodyKind::Star(sample_star(rng, spectral_type)),
    );

    // ==== Planets ====
    let mut orbit_au = config.first_orbit_au;
    for i in 0..n_planets {
        orbit_au += sample_uniform(rng, config.orbit_gap_au);
        let class = if orbit_au < config.orbit_threshold_au {
            inner.sample(rng)
        } else {
            outer.sample(rng)
        };
        let orbit_radius = Length::from_au(orbit_au);
        trace!(%class, orbit = %orbit_radius, "sampling planet");

        let body = PlanetaryBody::sample(rng, class, OrbitContext::Primary { orbit_radius });
        let mut planet = CelestialBody::new(
            BodyId(0),
            format!("{}-{}", name, roman_numeral(i + 1)),
            orbit_radius,
            Some(star_id),
            BodyKind::Planet(body),
        );
        attach_satellites(rng, config, &mut planet, PLANET_SATELLITE_DEPTH);
        attach_sub_planets(rng, config, &mut planet);
        star.bound.push(planet);
    }

    assign_ids(&mut star)?;

    let system = StarSystem::new(id, name, Vec3::zeros(), star);
    debug!(
        system = %system.name,
        spectral = %spectral_type,
        planets = system.planet_count(),
        bodies = system.star.subtree_len(),
        "generated star system"
    );
    Ok(system)
}

/// Generate a system whose stream is seeded from its name.
///
/// The same name (and config) always reproduces the same system.
pub fn generate_system_named(
    config: &GeneratorConfig,
    id: u64,
    name: &str,
    n_planets: usize,
) -> Result<StarSystem, GenerationError> {
    let mut rng = ChaChaRng::seed_from_u64(seed_from_name(name));
    generate_system(config, id, name, n_planets, &mut rng)
}

/// Number every descendant of `body` from its own id and set parent links.
///
/// Children get ordinals 1..=n in bound order with a stride wide enough for
/// `n`, so siblings never collide.
fn assign_ids(body: &mut CelestialBody) -> Result<(), GenerationError> {
    let stride = id_stride(body.bound.len() as u64);
    let id = body.id;
    for (ordinal, child) in (1u64..).zip(body.bound.iter_mut()) {
        child.id = id
            .child(stride, ordinal)
            .ok_or(GenerationError::IdOverflow { parent: id.0 })?;
        child.parent = Some(id);
        assign_ids(child)?;
    }
    Ok(())
}
