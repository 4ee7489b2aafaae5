//! Universe generation

use orbits::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use star_system::Universe;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::generation::generate_system;
use crate::sampling::sample_count;

/// Generate `n_systems` uniquely named systems from one seed.
///
/// Per system the universe stream draws a name, a planet count
/// (`max(1, Poisson(lambda))`), a position in the unit cube and a private
/// seed for the system's own stream. System ids run from 1.
pub fn generate_universe(
    config: &GeneratorConfig,
    n_systems: usize,
    lambda: f64,
    seed: u64,
) -> Result<Universe, GenerationError> {
    if !(lambda.is_finite() && lambda >= 0.0) {
        return Err(GenerationError::invalid(
            "lambda",
            format!("planet-count mean must be a non-negative number, got {}", lambda),
        ));
    }
    config.validate()?;

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut universe = Universe::new();

    for index in 0..n_systems {
        let name = universe.unused_name(&mut rng);
        let n_planets = sample_count(&mut rng, lambda).max(1);
        let position = Vec3::new(rng.random(), rng.random(), rng.random());
        let mut system_rng = ChaChaRng::seed_from_u64(rng.random());

        let mut system = generate_system(config, index as u64 + 1, &name, n_planets, &mut system_rng)?;
        system.position = position;
        universe.insert(system);
    }

    debug!(systems = universe.len(), seed, "generated universe");
    Ok(universe)
}
