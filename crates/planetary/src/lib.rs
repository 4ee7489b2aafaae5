//! Planetary bodies and their derived characteristics
//!
//! This crate owns the composition classes (Gas, Ice, Rock, Metal, Moon),
//! the per-class sampling ranges, the derivation of physical attributes from
//! those samples, and the one-shot surface scan that attaches a heightmap and
//! anomaly survey to a body.

pub mod anomalies;
pub mod attributes;
pub mod body;
pub mod composition_class;
pub mod error;
pub mod numeral;
pub mod surface;

// Re-export key types at crate root
pub use anomalies::Anomalies;
pub use attributes::{BodyAttributes, OrbitContext, derive_attributes};
pub use body::PlanetaryBody;
pub use composition_class::{ClassProfile, CompositionClass};
pub use error::CompositionClassError;
pub use numeral::roman_numeral;
pub use surface::{BinomialKernel, Palette, Surface, SurfaceScan};

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod composition_class_test;
#[cfg(test)]
mod surface_test;
