use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpectralTypeError;

/// Main-sequence spectral classes, hottest first.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Closed sampling ranges for one spectral class.
///
/// Each pair is `(min, max)`, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarProfile {
    /// Effective temperature in Kelvin
    pub temperature: (f64, f64),
    /// Mass in solar masses (M☉)
    pub mass: (f64, f64),
    /// Radius in solar radii (R☉)
    pub radius: (f64, f64),
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: (f64, f64),
}

impl SpectralType {
    pub const ALL: [SpectralType; 7] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];

    pub fn profile(&self) -> StellarProfile {
        match self {
            SpectralType::O => StellarProfile {
                temperature: (30_000.0, 50_000.0),
                mass: (16.0, 90.0),
                radius: (6.6, 15.0),
                luminosity: (30_000.0, 800_000.0),
            },
            SpectralType::B => StellarProfile {
                temperature: (10_000.0, 30_000.0),
                mass: (2.1, 16.0),
                radius: (1.8, 6.6),
                luminosity: (25.0, 30_000.0),
            },
            SpectralType::A => StellarProfile {
                temperature: (7_500.0, 10_000.0),
                mass: (1.4, 2.1),
                radius: (1.4, 1.8),
                luminosity: (5.0, 25.0),
            },
            SpectralType::F => StellarProfile {
                temperature: (6_000.0, 7_500.0),
                mass: (1.04, 1.4),
                radius: (1.15, 1.4),
                luminosity: (1.5, 5.0),
            },
            SpectralType::G => StellarProfile {
                temperature: (5_200.0, 6_000.0),
                mass: (0.8, 1.04),
                radius: (0.96, 1.15),
                luminosity: (0.6, 1.5),
            },
            SpectralType::K => StellarProfile {
                temperature: (3_700.0, 5_200.0),
                mass: (0.45, 0.8),
                radius: (0.7, 0.96),
                luminosity: (0.08, 0.6),
            },
            SpectralType::M => StellarProfile {
                temperature: (2_400.0, 3_700.0),
                mass: (0.08, 0.45),
                radius: (0.1, 0.7),
                luminosity: (0.001, 0.08),
            },
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for SpectralType {
    type Err = SpectralTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "O" => Ok(SpectralType::O),
            "B" => Ok(SpectralType::B),
            "A" => Ok(SpectralType::A),
            "F" => Ok(SpectralType::F),
            "G" => Ok(SpectralType::G),
            "K" => Ok(SpectralType::K),
            "M" => Ok(SpectralType::M),
            other => Err(SpectralTypeError {
                label: other.to_string(),
            }),
        }
    }
}
