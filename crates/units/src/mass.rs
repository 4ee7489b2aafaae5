use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A stellar mass, stored in solar masses.
///
/// Planetary masses are plain Earth-mass figures on the body attributes and
/// never pass through this type.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let red_dwarf = Mass::from_solar_masses(0.2);
///
/// assert!(red_dwarf < sun);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl std::fmt::Display for Mass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} M☉", self.0)
    }
}
