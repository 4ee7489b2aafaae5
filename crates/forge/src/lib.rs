//! Procedural generation of star systems and universes
//!
//! Builds [`star_system::StarSystem`] trees: a star, planets in widening
//! orbits, recursive satellites, and sub-planets around heavy gas giants.
//! Everything is driven by an explicit [`rand_chacha::ChaChaRng`], so a seed
//! reproduces a system or a whole universe exactly.

pub mod config;
pub mod error;
pub mod generation;
pub mod moon_generation;
pub mod sampling;
pub mod universe;

pub use config::{GeneratorConfig, SatelliteMeans, SubPlanetConfig};
pub use error::GenerationError;
pub use generation::{generate_system, generate_system_named};
pub use moon_generation::{attach_satellites, attach_sub_planets, qualifies_for_sub_planets};
pub use sampling::{WeightedClasses, sample_count};
pub use universe::generate_universe;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod moon_generation_test;
