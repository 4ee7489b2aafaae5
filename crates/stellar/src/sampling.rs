use rand::Rng;
use rand_chacha::ChaChaRng;
use units::{Mass, Temperature, round_to};

use crate::spectral::SpectralType;
use crate::star::Star;
use crate::stellar_color::StellarColor;

/// Sample uniformly from the closed interval `[min, max]`.
///
/// A degenerate range (`min == max`) returns `min`. Callers are expected to
/// have validated `min <= max`.
pub fn sample_uniform(rng: &mut ChaChaRng, (min, max): (f64, f64)) -> f64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Pick a spectral class uniformly from the given list.
///
/// Returns `None` only for an empty list.
pub fn sample_spectral_type(rng: &mut ChaChaRng, classes: &[SpectralType]) -> Option<SpectralType> {
    if classes.is_empty() {
        return None;
    }
    Some(classes[rng.random_range(0..classes.len())])
}

/// Sample a star of the given spectral class.
///
/// Temperature, mass, radius and luminosity are drawn independently from the
/// class profile and rounded to two decimals. Rounding may take a value just
/// outside its profile range, e.g. an M-class luminosity of 0.0.
///
/// # Example
/// ```
/// use rand_chacha::ChaChaRng;
/// use rand::SeedableRng;
/// use stellar::{SpectralType, sample_star};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let star = sample_star(&mut rng, SpectralType::G);
///
/// assert!(star.mass.to_solar_masses() >= 0.8);
/// assert!(star.mass.to_solar_masses() <= 1.04);
/// ```
pub fn sample_star(rng: &mut ChaChaRng, spectral_type: SpectralType) -> Star {
    let profile = spectral_type.profile();

    let temperature = round_to(sample_uniform(rng, profile.temperature), 2);
    let mass = round_to(sample_uniform(rng, profile.mass), 2);
    let radius = round_to(sample_uniform(rng, profile.radius), 2);
    let luminosity = round_to(sample_uniform(rng, profile.luminosity), 2);

    Star {
        spectral_type,
        temperature: Temperature::from_kelvin(temperature),
        mass: Mass::from_solar_masses(mass),
        radius,
        luminosity,
        color: StellarColor::from_spectral_type(spectral_type),
    }
}
