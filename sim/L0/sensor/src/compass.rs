//! Compass heading from a horizontal forward direction.
//!
//! The heading is the clockwise angle between a reference north vector and
//! the sensor's facing, both taken in the host's world axes.

use nalgebra::Vector3;

/// Reference north in world coordinates.
///
/// The host's map projection places geographic north along world -Y.
pub const NORTH: Vector3<f64> = Vector3::new(0.0, -1.0, 0.0);

/// Squared lengths below this are treated as degenerate.
const SMALL_NUMBER_SQ: f64 = 1e-8;

/// Project `v` onto the horizontal plane and normalize it.
///
/// Returns the zero vector when the projection is degenerate: a horizontal
/// length under `1e-4`, which covers zero-length input and anything within
/// about 0.006 degrees of straight up or down.
#[must_use]
pub fn safe_normalize_2d(v: Vector3<f64>) -> Vector3<f64> {
    let flat = Vector3::new(v.x, v.y, 0.0);
    let norm_sq = flat.norm_squared();
    if norm_sq == 1.0 {
        flat
    } else if norm_sq < SMALL_NUMBER_SQ || !norm_sq.is_finite() {
        Vector3::zeros()
    } else {
        flat / norm_sq.sqrt()
    }
}

/// Heading in degrees of `forward` relative to `north`, in `[0, 360)`.
///
/// Both vectors are expected to be horizontal and unit length (or zero).
/// A zero `forward` yields 90 degrees.
#[must_use]
pub fn heading_degrees(north: &Vector3<f64>, forward: &Vector3<f64>) -> f64 {
    let cos_angle = north.dot(forward).clamp(-1.0, 1.0);
    let raw = cos_angle.acos().to_degrees();

    let heading = if north.cross(forward).z > 0.0 {
        360.0 - raw
    } else {
        raw
    };

    // 360 - tiny rounds to exactly 360
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}
