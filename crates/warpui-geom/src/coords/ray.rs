use glam::{Affine3A, Vec3};

/// Half-line `origin + t * direction`, `t >= 0`.
///
/// The direction is normalized on construction, so `t` is a distance. A zero
/// direction is kept as zero and never hits anything.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    /// Ray from `origin` through `target`.
    #[inline]
    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Whether this ray can produce intersections at all.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.origin.is_finite() && self.direction.is_finite() && self.direction != Vec3::ZERO
    }

    /// Maps the ray through an affine transform (e.g. world → canvas local).
    #[inline]
    #[must_use]
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        Self::new(
            transform.transform_point3(self.origin),
            transform.transform_vector3(self.direction),
        )
    }
}
