//! Fixed-precision rounding for presented quantities.

/// Round `value` to `places` decimal places (half away from zero).
///
/// Used only when storing a derived figure for display; callers keep the
/// unrounded value for any further derivation.
///
/// ```rust
/// use units::round_to;
///
/// assert_eq!(round_to(1.23456, 3), 1.235);
/// assert_eq!(round_to(287.96, 1), 288.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10_f64.powi(places as i32);
    (value * scale).round() / scale
}
