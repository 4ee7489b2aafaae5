//! Composition classes and their sampling ranges
//!
//! Every planetary body belongs to exactly one class. The class fixes the
//! closed intervals its mass, radius and density are drawn from, its core
//! composition and the atmospheres it may carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompositionClassError;

/// Bulk composition of a planet or moon.
///
/// | Class | Mass (M⊕)   | Radius (R⊕) | Density (g/cm³) | Core            |
/// |-------|-------------|-------------|-----------------|-----------------|
/// | Gas   | 50 – 300    | 3.5 – 14    | 0.3 – 1.3       | Hydrogen-Helium |
/// | Ice   | 1 – 50      | 1.5 – 3.5   | 0.9 – 2.0       | Water-Ice       |
/// | Rock  | 0.1 – 10    | 0.5 – 2     | 3.0 – 5.5       | Iron-Nickel     |
/// | Metal | 0.5 – 5     | 0.3 – 1.2   | 5.0 – 8.0       | Iron-Nickel     |
/// | Moon  | 0.001 – 0.1 | 0.1 – 0.5   | 2.5 – 4.0       | Rocky-Iron      |
///
/// Satellites are always `Moon`; sub-planets of gas giants are `Rock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompositionClass {
    Gas,
    Ice,
    Rock,
    Metal,
    Moon,
}

/// Sampling record for one composition class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProfile {
    /// Mass range in Earth masses (M⊕)
    pub mass: (f64, f64),
    /// Radius range in Earth radii (R⊕)
    pub radius: (f64, f64),
    /// Density range in g/cm³
    pub density: (f64, f64),
    pub core_composition: &'static str,
    pub atmospheres: &'static [&'static str],
}

impl CompositionClass {
    pub const ALL: [CompositionClass; 5] = [
        CompositionClass::Gas,
        CompositionClass::Ice,
        CompositionClass::Rock,
        CompositionClass::Metal,
        CompositionClass::Moon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gas => "Gas",
            Self::Ice => "Ice",
            Self::Rock => "Rock",
            Self::Metal => "Metal",
            Self::Moon => "Moon",
        }
    }

    pub fn profile(&self) -> ClassProfile {
        match self {
            Self::Gas => ClassProfile {
                mass: (50.0, 300.0),
                radius: (3.5, 14.0),
                density: (0.3, 1.3),
                core_composition: "Hydrogen-Helium",
                atmospheres: &["Hydrogen-Helium", "Methane", "Ammonia"],
            },
            Self::Ice => ClassProfile {
                mass: (1.0, 50.0),
                radius: (1.5, 3.5),
                density: (0.9, 2.0),
                core_composition: "Water-Ice",
                atmospheres: &["Methane", "Nitrogen", "None"],
            },
            Self::Rock => ClassProfile {
                mass: (0.1, 10.0),
                radius: (0.5, 2.0),
                density: (3.0, 5.5),
                core_composition: "Iron-Nickel",
                atmospheres: &["Thin CO₂", "Nitrogen-Oxygen", "None"],
            },
            Self::Metal => ClassProfile {
                mass: (0.5, 5.0),
                radius: (0.3, 1.2),
                density: (5.0, 8.0),
                core_composition: "Iron-Nickel",
                atmospheres: &["None"],
            },
            Self::Moon => ClassProfile {
                mass: (0.001, 0.1),
                radius: (0.1, 0.5),
                density: (2.5, 4.0),
                core_composition: "Rocky-Iron",
                atmospheres: &["None", "Trace Gases"],
            },
        }
    }
}

impl fmt::Display for CompositionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CompositionClass {
    type Err = CompositionClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.name() == s.trim())
            .ok_or_else(|| CompositionClassError {
                label: s.to_string(),
            })
    }
}
