use nalgebra::Vector3;

use crate::error::OrbitError;

/// Cartesian position in AU.
///
/// Dot and cross products, norms and addition come straight from nalgebra.
pub type Vec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Angles between vectors, failing on zero-length operands.
pub trait VectorAngle {
    /// Cosine of the angle, clamped to [-1, 1].
    fn cos_angle_with(&self, other: &Self) -> Result<f64, OrbitError>;

    fn angle_with(&self, other: &Self, unit: AngleUnit) -> Result<f64, OrbitError> {
        let radians = self.cos_angle_with(other)?.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }
}

impl VectorAngle for Vec3 {
    fn cos_angle_with(&self, other: &Self) -> Result<f64, OrbitError> {
        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            return Err(OrbitError::DegenerateGeometry);
        }
        Ok((self.dot(other) / norms).clamp(-1.0, 1.0))
    }
}
