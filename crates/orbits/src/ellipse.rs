//! Parametric orbit ellipses.
//!
//! In the orbital plane the ellipse is `x = a·cos t − a·e`, `y = b·sin t`,
//! `z = 0`, which puts one focus at the origin. The plane is then rotated by
//! `R = Rz(alpha) · Ry(theta) · Rx(phi)`. The rendered curve and the
//! instantaneous position share the same parametrization and rotation, so a
//! position always lies on its curve.

use std::f64::consts::TAU;

use nalgebra::{Rotation3, Vector3};
use tracing::warn;

use crate::vector::Vec3;

/// Radii at or below this are raised to it.
pub const MIN_RADIUS: f64 = 1e-10;

/// A resolved orbit. Angles are stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub r_min: f64,
    pub r_max: f64,
    /// Semi-major axis
    pub a: f64,
    /// Eccentricity, always in [0, 1)
    pub e: f64,
    /// Semi-minor axis
    pub b: f64,
    /// Rotation about x
    pub phi: f64,
    /// Rotation about y
    pub theta: f64,
    /// Rotation about z
    pub alpha: f64,
    /// Fraction of the orbit already travelled at age 0, in [0, 1)
    pub start_phase: f64,
}

impl Orbit {
    /// Build an orbit from its apsides, with angles given in degrees.
    ///
    /// Radii at or below [`MIN_RADIUS`] are clamped to it and a reversed pair
    /// is swapped, so the result always has `0 <= e < 1`.
    pub fn from_apsides(
        r_min: f64,
        r_max: f64,
        phi_deg: f64,
        theta_deg: f64,
        alpha_deg: f64,
        start_phase: f64,
    ) -> Self {
        let mut r_min = clamp_radius(r_min);
        let mut r_max = clamp_radius(r_max);
        if r_min > r_max {
            std::mem::swap(&mut r_min, &mut r_max);
        }

        let a = (r_min + r_max) / 2.0;
        let e = (r_max - r_min) / (r_max + r_min);
        let b = a * (1.0 - e * e).sqrt();

        Self {
            r_min,
            r_max,
            a,
            e,
            b,
            phi: phi_deg.to_radians(),
            theta: theta_deg.to_radians(),
            alpha: alpha_deg.to_radians(),
            start_phase: start_phase.rem_euclid(1.0),
        }
    }

    /// An untilted circle of the given radius.
    pub fn circular(radius: f64, start_phase: f64) -> Self {
        Self::from_apsides(radius, radius, 0.0, 0.0, 0.0, start_phase)
    }

    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.alpha)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.theta)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.phi)
    }

    fn in_plane(&self, t: f64) -> Vec3 {
        Vec3::new(self.a * t.cos() - self.a * self.e, self.b * t.sin(), 0.0)
    }

    /// Point on the rotated ellipse at parameter angle `t` (radians).
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.rotation() * self.in_plane(t)
    }

    /// Position relative to the parent at `age`, a fraction of one period.
    pub fn position(&self, age: f64) -> Vec3 {
        let t = TAU * (age + self.start_phase).rem_euclid(1.0);
        self.point_at(t)
    }

    /// `samples` points on the closed curve, first and last both at t = 0 and 2π.
    pub fn sample_curve(&self, samples: usize) -> Vec<Vec3> {
        let rotation = self.rotation();
        match samples {
            0 => Vec::new(),
            1 => vec![rotation * self.in_plane(0.0)],
            n => (0..n)
                .map(|k| rotation * self.in_plane(TAU * k as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// `(phi, theta, alpha)` in degrees.
    pub fn angles_degrees(&self) -> (f64, f64, f64) {
        (
            self.phi.to_degrees(),
            self.theta.to_degrees(),
            self.alpha.to_degrees(),
        )
    }
}

fn clamp_radius(r: f64) -> f64 {
    if r > MIN_RADIUS {
        return r;
    }
    if r < 0.0 || r.is_nan() {
        warn!(radius = r, "non-positive orbit radius clamped");
    }
    MIN_RADIUS
}
