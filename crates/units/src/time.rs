use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

pub const DAYS_PER_YEAR: f64 = 365.25;

/// A duration, stored in years.
///
/// Orbital periods of primaries are naturally expressed in years and those of
/// satellites in days; both are held as `Time` and the caller picks the unit
/// when presenting.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let year = Time::from_years(1.0);
/// assert_eq!(year.to_days(), 365.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}
