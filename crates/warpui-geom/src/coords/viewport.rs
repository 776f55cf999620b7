use glam::Vec2;

/// Viewport size in logical pixels.
///
/// Screen-space conversions map NDC onto this rectangle with the origin at the
/// top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// NDC (`[-1, 1]`, +Y up) → logical pixels (top-left origin, +Y down).
    #[inline]
    pub fn ndc_to_screen(self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }

    /// Inverse of [`ndc_to_screen`](Self::ndc_to_screen).
    #[inline]
    pub fn screen_to_ndc(self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.width * 2.0 - 1.0,
            1.0 - screen.y / self.height * 2.0,
        )
    }
}
