//! Orbital kinematics for display and animation.
//!
//! An [`Orbit`] is a fixed ellipse with its focus at the parent body, tilted
//! by three rotation angles. Time is expressed as a phase: `age` is the
//! fraction of one orbital period elapsed, so every body is periodic with
//! period 1 regardless of its size.
//!
//! [`OrbitalSystem`] is the serialized tree of such orbits. Absolute
//! positions are composed recursively: a satellite's position is its parent's
//! absolute position plus its own orbit-relative position.

pub mod ellipse;
pub mod error;
pub mod tree;
pub mod vector;


pub use ellipse::{MIN_RADIUS, Orbit};
pub use error::OrbitError;
pub use tree::{BodyPosition, OrbitNode, OrbitTrace, OrbitalSystem};
pub use vector::{AngleUnit, Vec3, VectorAngle};
