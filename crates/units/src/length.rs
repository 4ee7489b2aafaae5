use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A distance, stored in astronomical units.
///
/// Orbit radii of planets, satellites and sub-planets are all held as
/// `Length`.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let moon_orbit = Length::from_au(60.0 / 215.0);
///
/// assert!(moon_orbit < orbit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Raise to integer power (returns dimensionless f64)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} AU", self.0)
    }
}
