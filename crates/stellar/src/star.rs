//! The star at the root of every generated system.

use serde::{Deserialize, Serialize};
use units::{Mass, Temperature};

use super::spectral::SpectralType;
use super::stellar_color::StellarColor;

/// A main-sequence star.
///
/// Values are sampled uniformly inside the [`StellarProfile`](crate::StellarProfile)
/// of the spectral class and stored rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub spectral_type: SpectralType,
    pub temperature: Temperature,
    pub mass: Mass,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    /// Luminosity in solar luminosities (L☉).
    ///
    /// Rounded to two decimals, so a dim M-class star can read `0.0` even
    /// though its profile floor is 0.001 L☉. Never negative.
    pub luminosity: f64,
    pub color: StellarColor,
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-type star, {} / {} / {} R☉ / {} L☉",
            self.spectral_type, self.temperature, self.mass, self.radius, self.luminosity
        )
    }
}
