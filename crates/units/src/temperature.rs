use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// A temperature, stored in Kelvin.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let earth = Temperature::from_kelvin(288.0);
/// assert_eq!((earth / 2.0).to_kelvin(), 144.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} K", self.0)
    }
}
