//! Typed physical quantities used across the atlas crates.
//!
//! Each quantity stores a single `f64` in its natural astronomical base unit
//! (AU, solar masses, Kelvin, years) and converts on the way in and out.

pub mod length;
pub mod mass;
pub mod precision;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod mass_test;

pub use length::Length;
pub use mass::Mass;
pub use precision::round_to;
pub use temperature::Temperature;
pub use time::Time;
