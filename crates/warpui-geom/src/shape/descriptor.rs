use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ShapeKind;

/// Per-canvas shape configuration.
///
/// Angles are in degrees. Out-of-range values are tolerated here and clamped by
/// [`sanitized`](Self::sanitized), which every consumer goes through.
///
/// | Field | Range | Used by |
/// |-------|-------|---------|
/// | `angle` | `[-360, 360]` (`[0, 360]` for rings) | all shapes |
/// | `vertical_angle` | `[0, 180]` | sphere without aspect preservation |
/// | `ring_fill` | `[0, 1]` | ring |
/// | `quality` | `[0.01, 10]` | tessellation |
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub angle: f32,
    pub vertical_angle: f32,
    pub preserve_aspect: bool,
    pub ring_external_diameter: f32,
    pub ring_fill: f32,
    pub ring_flip_vertical: bool,
    /// Flat canvas width and height.
    pub canvas_size: Vec2,
    /// Tessellation multiplier; higher means smaller sub-quads.
    pub quality: f32,
    /// Segments a full 360° circle is split into at quality 1.
    pub base_circle_segments: u32,
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Cylinder,
            angle: 90.0,
            vertical_angle: 90.0,
            preserve_aspect: true,
            ring_external_diameter: 1000.0,
            ring_fill: 0.5,
            ring_flip_vertical: false,
            canvas_size: Vec2::new(1000.0, 500.0),
            quality: 1.0,
            base_circle_segments: 24,
        }
    }
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, angle: f32, canvas_size: Vec2) -> Self {
        Self { kind, angle, canvas_size, ..Self::default() }
    }

    pub fn cylinder(angle: f32, canvas_size: Vec2) -> Self {
        Self::new(ShapeKind::Cylinder, angle, canvas_size)
    }

    pub fn cylinder_vertical(angle: f32, canvas_size: Vec2) -> Self {
        Self::new(ShapeKind::CylinderVertical, angle, canvas_size)
    }

    pub fn ring(angle: f32, external_diameter: f32, fill: f32, canvas_size: Vec2) -> Self {
        Self {
            ring_external_diameter: external_diameter,
            ring_fill: fill,
            ..Self::new(ShapeKind::Ring, angle, canvas_size)
        }
    }

    pub fn sphere(angle: f32, canvas_size: Vec2) -> Self {
        Self::new(ShapeKind::Sphere, angle, canvas_size)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the sphere's vertical extent and turns aspect preservation off,
    /// since the two are mutually exclusive.
    #[must_use]
    pub fn with_vertical_angle(mut self, vertical_angle: f32) -> Self {
        self.vertical_angle = vertical_angle;
        self.preserve_aspect = false;
        self
    }

    #[must_use]
    pub fn with_preserve_aspect(mut self, preserve: bool) -> Self {
        self.preserve_aspect = preserve;
        self
    }

    #[must_use]
    pub fn with_ring_flip(mut self, flip: bool) -> Self {
        self.ring_flip_vertical = flip;
        self
    }

    #[must_use]
    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    #[must_use]
    pub fn with_base_circle_segments(mut self, segments: u32) -> Self {
        self.base_circle_segments = segments;
        self
    }

    /// Returns a copy with every field clamped into its valid range.
    ///
    /// Non-finite numbers fall back to the neutral value for that field (zero
    /// angles and sizes, quality 1), which makes the shape project flat.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let angle_range = if self.kind == ShapeKind::Ring { (0.0, 360.0) } else { (-360.0, 360.0) };
        let size = Vec2::new(finite_or(self.canvas_size.x, 0.0), finite_or(self.canvas_size.y, 0.0));

        Self {
            kind: self.kind,
            angle: finite_or(self.angle, 0.0).clamp(angle_range.0, angle_range.1),
            vertical_angle: finite_or(self.vertical_angle, 0.0).clamp(0.0, 180.0),
            preserve_aspect: self.preserve_aspect,
            ring_external_diameter: finite_or(self.ring_external_diameter, 0.0).max(0.0),
            ring_fill: finite_or(self.ring_fill, 0.0).clamp(0.0, 1.0),
            ring_flip_vertical: self.ring_flip_vertical,
            canvas_size: size.max(Vec2::ZERO),
            quality: finite_or(self.quality, 1.0).clamp(0.01, 10.0),
            base_circle_segments: self.base_circle_segments.max(1),
        }
    }
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v } else { fallback }
}
