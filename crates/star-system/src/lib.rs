//! Star system model
//!
//! A [`StarSystem`] owns one star; the star's bound list holds the planets,
//! each planet holds its moons and sub-planets, and so on. Ships dock into
//! the same bound lists. A [`Universe`] keys systems by unique catalog names.

pub mod body;
pub mod error;
pub mod naming;
pub mod system;
pub mod universe;

// Re-export main types at crate root
pub use body::{BodyId, BodyKind, CelestialBody, Ship, id_stride};
pub use error::SystemError;
pub use naming::{catalog_name, is_catalog_name, seed_from_name};
pub use system::{Bodies, StarSystem};
pub use universe::Universe;

// Re-export body payload types for convenience
pub use planetary::{CompositionClass, PlanetaryBody};
pub use stellar::{SpectralType, Star};

#[cfg(test)]
mod test_support;
