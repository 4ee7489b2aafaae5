//! Physical attribute derivation
//!
//! Mass, radius and density are sampled independently from the class
//! profile; everything else is derived from those samples (or drawn from
//! class-independent ranges). Stored values are rounded for display, but the
//! derivations always run on the unrounded samples.

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::{Length, Temperature, Time, round_to};

use crate::composition_class::CompositionClass;

/// Earth-radius-to-AU factor applied to satellite orbit radii before the
/// period estimate.
pub const SATELLITE_RADIUS_TO_AU: f64 = 0.000_004_65;

/// Equilibrium temperature of a body at 1 AU, in Kelvin.
pub const TEMPERATURE_AT_ONE_AU: f64 = 288.0;

/// Rotation period range in hours, shared by every class.
pub const ROTATION_PERIOD_HOURS: (f64, f64) = (10.0, 1000.0);

/// Temperature range in Kelvin drawn for satellites.
pub const SATELLITE_TEMPERATURE: (f64, f64) = (50.0, 250.0);

/// What a body orbits, which decides how period and temperature are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitContext {
    /// Orbits the star directly.
    Primary { orbit_radius: Length },
    /// Orbits another body. `parent_radius` is the parent's radius in Earth
    /// radii, when known.
    Satellite {
        orbit_radius: Length,
        parent_radius: Option<f64>,
    },
}

impl OrbitContext {
    pub fn orbit_radius(&self) -> Length {
        match self {
            OrbitContext::Primary { orbit_radius } => *orbit_radius,
            OrbitContext::Satellite { orbit_radius, .. } => *orbit_radius,
        }
    }

    pub fn is_satellite(&self) -> bool {
        matches!(self, OrbitContext::Satellite { .. })
    }
}

/// Derived physical characteristics of a planet or moon, in Earth-normalized units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyAttributes {
    /// Mass in Earth masses (M⊕)
    pub mass: f64,
    /// Radius in Earth radii (R⊕)
    pub radius: f64,
    /// Bulk density in g/cm³
    pub density: f64,
    /// Surface gravity in g
    pub surface_gravity: f64,
    /// Escape velocity as a multiple of Earth's
    pub escape_velocity: f64,
    /// Sidereal rotation period in hours
    pub rotation_period: f64,
    pub orbital_period: Time,
    pub temperature: Temperature,
    pub atmosphere: String,
    pub core_composition: String,
}

/// Sample uniformly from the closed interval `[min, max]`.
pub(crate) fn sample_range(rng: &mut ChaChaRng, (min, max): (f64, f64)) -> f64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Sample and derive the attributes of a body of `class` in the given orbit.
///
/// # Derivations
/// * gravity = M / R²
/// * escape velocity = √(2 · g · R)
/// * primary orbit: P = √(r³) years, T = 288 K / √r
/// * satellite orbit: r is rescaled by [`SATELLITE_RADIUS_TO_AU`] and the
///   parent's radius, P = √(r³) expressed in days, T uniform in 50–250 K
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use planetary::{CompositionClass, OrbitContext, derive_attributes};
/// use units::Length;
///
/// let mut rng = ChaChaRng::seed_from_u64(1);
/// let earthlike = derive_attributes(
///     &mut rng,
///     CompositionClass::Rock,
///     OrbitContext::Primary { orbit_radius: Length::from_au(1.0) },
/// );
/// assert_eq!(earthlike.temperature.to_kelvin(), 288.0);
/// assert_eq!(earthlike.orbital_period.to_years(), 1.0);
/// ```
pub fn derive_attributes(
    rng: &mut ChaChaRng,
    class: CompositionClass,
    context: OrbitContext,
) -> BodyAttributes {
    let profile = class.profile();

    let mass = sample_range(rng, profile.mass);
    let radius = sample_range(rng, profile.radius);
    let density = sample_range(rng, profile.density);

    let surface_gravity = mass / radius.powi(2);
    let escape_velocity = (2.0 * surface_gravity * radius).sqrt();

    let rotation_period = sample_range(rng, ROTATION_PERIOD_HOURS);
    let atmosphere = profile.atmospheres.choose(rng).copied().unwrap_or("None");

    let (orbital_period, temperature) = match context {
        OrbitContext::Primary { orbit_radius } => {
            let r = orbit_radius.to_au();
            let years = r.powi(3).sqrt();
            let kelvin = TEMPERATURE_AT_ONE_AU / r.sqrt();
            (Time::from_years(round_to(years, 3)), kelvin)
        }
        OrbitContext::Satellite {
            orbit_radius,
            parent_radius,
        } => {
            let r = orbit_radius.to_au() * SATELLITE_RADIUS_TO_AU * parent_radius.unwrap_or(1.0);
            let days = Time::from_years(r.powi(3).sqrt()).to_days();
            let kelvin = sample_range(rng, SATELLITE_TEMPERATURE);
            (Time::from_days(round_to(days, 3)), kelvin)
        }
    };

    BodyAttributes {
        mass: round_to(mass, 3),
        radius: round_to(radius, 3),
        density: round_to(density, 3),
        surface_gravity: round_to(surface_gravity, 3),
        escape_velocity: round_to(escape_velocity, 3),
        rotation_period: round_to(rotation_period, 1),
        orbital_period,
        temperature: Temperature::from_kelvin(round_to(temperature, 1)),
        atmosphere: atmosphere.to_string(),
        core_composition: profile.core_composition.to_string(),
    }
}
