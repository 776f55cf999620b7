use glam::Vec2;

/// Flat canvas rectangle, centred on the canvas origin.
///
/// Only the size is stored; the rectangle always spans `[-size/2, size/2]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CanvasRect {
    pub size: Vec2,
}

impl CanvasRect {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height) }
    }

    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn half_extents(self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        -self.half_extents()
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.half_extents()
    }

    /// A canvas with no area cannot be bent; projections fall back to flat.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0) || !self.size.is_finite()
    }

    /// Swaps width and height.
    #[inline]
    #[must_use]
    pub fn transposed(self) -> Self {
        Self::new(self.size.y, self.size.x)
    }

    /// Closed containment with an absolute slack on every edge.
    #[inline]
    pub fn contains(self, p: Vec2, slack: f32) -> bool {
        let h = self.half_extents();
        p.x.abs() <= h.x + slack && p.y.abs() <= h.y + slack
    }

    /// Pulls `p` onto the rectangle. Hits accepted within an edge slack are
    /// reported on the edge itself.
    #[inline]
    pub fn clamp(self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// Converts a canvas point to `[-0.5, 0.5]` on both axes.
    ///
    /// Returns zero on an axis with no extent.
    #[inline]
    pub fn normalize(self, p: Vec2) -> Vec2 {
        let nx = if self.size.x != 0.0 { p.x / self.size.x } else { 0.0 };
        let ny = if self.size.y != 0.0 { p.y / self.size.y } else { 0.0 };
        Vec2::new(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── extents ───────────────────────────────────────────────────────────

    #[test]
    fn min_max_are_symmetric() {
        let r = CanvasRect::new(10.0, 4.0);
        assert_eq!(r.min(), Vec2::new(-5.0, -2.0));
        assert_eq!(r.max(), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn clamp_pulls_points_onto_edges() {
        let r = CanvasRect::new(10.0, 4.0);
        assert_eq!(r.clamp(Vec2::new(5.0005, -2.0005)), Vec2::new(5.0, -2.0));
        assert_eq!(r.clamp(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn transposed_swaps_axes() {
        assert_eq!(CanvasRect::new(10.0, 4.0).transposed(), CanvasRect::new(4.0, 10.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_edges_inclusive() {
        let r = CanvasRect::new(10.0, 4.0);
        assert!(r.contains(Vec2::new(5.0, 2.0), 0.0));
        assert!(r.contains(Vec2::new(-5.0, -2.0), 0.0));
    }

    #[test]
    fn contains_outside() {
        let r = CanvasRect::new(10.0, 4.0);
        assert!(!r.contains(Vec2::new(5.1, 0.0), 0.0));
        assert!(!r.contains(Vec2::new(0.0, -2.1), 0.0));
    }

    #[test]
    fn contains_respects_slack() {
        let r = CanvasRect::new(10.0, 4.0);
        assert!(r.contains(Vec2::new(5.05, 0.0), 0.1));
    }

    // ── degenerate ────────────────────────────────────────────────────────

    #[test]
    fn zero_or_negative_size_is_degenerate() {
        assert!(CanvasRect::new(0.0, 5.0).is_degenerate());
        assert!(CanvasRect::new(5.0, -1.0).is_degenerate());
        assert!(CanvasRect::new(f32::NAN, 5.0).is_degenerate());
        assert!(!CanvasRect::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn normalize_zero_extent_axis() {
        let r = CanvasRect::new(0.0, 4.0);
        assert_eq!(r.normalize(Vec2::new(3.0, 1.0)), Vec2::new(0.0, 0.25));
    }
}
