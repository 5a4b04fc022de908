//! Easing helpers.
//!
//! The count-up core uses a single fixed curve, quartic ease-out, at every
//! call site; it is deliberately not parameterizable.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quartic ease-out: `1 - (1 - t)^4`.
///
/// Input is clamped to [0, 1]. Endpoints are exact: `ease_out_quart(0.0)`
/// is 0.0 and `ease_out_quart(1.0)` is 1.0.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    1.0 - u * u * u * u
}
