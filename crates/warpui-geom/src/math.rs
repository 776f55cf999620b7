//! Scalar and vector helpers shared by both projection directions.

use glam::Vec3;

/// Linearly maps `value` from `[from_lo, from_hi]` onto `[to_lo, to_hi]`.
///
/// Not clamped; values outside the source range extrapolate. Either range may
/// be reversed.
#[inline]
pub fn remap(value: f32, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
    (value - from_lo) / (from_hi - from_lo) * (to_hi - to_lo) + to_lo
}

/// Signed angle in degrees rotating `from` onto `to` about `axis`.
///
/// Result is in `(-180, 180]`. Zero-length inputs yield 0.
#[inline]
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    axis.dot(from.cross(to)).atan2(from.dot(to)).to_degrees()
}

/// Exchanges x and y, keeping z.
///
/// Vertical bends are evaluated as horizontal ones in this swapped frame.
#[inline]
pub fn swap_xy(v: Vec3) -> Vec3 {
    Vec3::new(v.y, v.x, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── remap ─────────────────────────────────────────────────────────────

    #[test]
    fn remap_endpoints_and_midpoint() {
        assert_eq!(remap(0.0, 0.0, 10.0, -5.0, 5.0), -5.0);
        assert_eq!(remap(10.0, 0.0, 10.0, -5.0, 5.0), 5.0);
        assert_eq!(remap(5.0, 0.0, 10.0, -5.0, 5.0), 0.0);
    }

    #[test]
    fn remap_reversed_source() {
        // Ring mapping runs its angular domain backwards.
        assert_eq!(remap(360.0, 360.0, 270.0, -1.0, 1.0), -1.0);
        assert_eq!(remap(270.0, 360.0, 270.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn remap_extrapolates() {
        assert_eq!(remap(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    }

    // ── signed_angle ──────────────────────────────────────────────────────

    #[test]
    fn signed_angle_quarter_turns() {
        assert!((signed_angle(Vec3::X, Vec3::Y, Vec3::Z) - 90.0).abs() < 1e-4);
        assert!((signed_angle(Vec3::Y, Vec3::X, Vec3::Z) + 90.0).abs() < 1e-4);
    }

    #[test]
    fn signed_angle_zero_vector() {
        assert_eq!(signed_angle(Vec3::ZERO, Vec3::Y, Vec3::Z), 0.0);
    }
}
