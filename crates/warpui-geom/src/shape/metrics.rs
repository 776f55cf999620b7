use glam::{Vec2, Vec3};

use crate::coords::CanvasRect;

use super::{ShapeDescriptor, ShapeKind};

/// Bends below this many radians are treated as flat. Their radii run to
/// billions of canvas units and stop being representable.
pub const MIN_BEND_RADIANS: f32 = 1e-6;

/// Constants derived from a [`ShapeDescriptor`].
///
/// Built once per descriptor change and read by every raycast and vertex
/// placement. All angles are in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeMetrics {
    pub kind: ShapeKind,
    pub canvas: CanvasRect,
    /// True when the shape degenerates to the flat canvas: a (near) zero
    /// angle, a canvas without area, or a ring without diameter. Every other
    /// field is then unused.
    pub flat: bool,
    /// Bend angle along the curved axis. Zero when flat.
    pub angle: f32,
    /// Sphere only: effective vertical extent.
    pub vertical_angle: f32,
    /// Signed radius. Negative angles give negative radii, which bend the
    /// canvas away from the viewer instead of around it.
    pub radius: f32,
    /// Centre of the cylinder axis or sphere, in canvas space.
    pub center: Vec3,
    pub ring_inner_radius: f32,
    pub ring_outer_radius: f32,
    pub ring_flip_vertical: bool,
    /// Largest allowed sub-quad edge per axis, already scaled by quality.
    pub tessellation_size: Vec2,
}

impl ShapeMetrics {
    pub fn from_descriptor(descriptor: &ShapeDescriptor) -> Self {
        let d = descriptor.sanitized();
        let canvas = CanvasRect::from_size(d.canvas_size);

        let bendable = !canvas.is_degenerate()
            && d.angle.to_radians().abs() >= MIN_BEND_RADIANS
            && !(d.kind == ShapeKind::Ring && d.ring_external_diameter <= 0.0);
        let radius = if bendable {
            match d.kind {
                ShapeKind::Cylinder => cylinder_radius(canvas.width(), d.angle, d.preserve_aspect),
                ShapeKind::CylinderVertical => cylinder_radius(canvas.height(), d.angle, d.preserve_aspect),
                ShapeKind::Sphere if d.preserve_aspect => canvas.width() / d.angle.to_radians(),
                ShapeKind::Sphere => canvas.width() * 0.5,
                ShapeKind::Ring => 0.0,
            }
        } else {
            0.0
        };

        let flat = !bendable || !radius.is_finite();
        let (angle, radius) = if flat { (0.0, 0.0) } else { (d.angle, radius) };

        let center = match d.kind {
            ShapeKind::Cylinder | ShapeKind::CylinderVertical => Vec3::new(0.0, 0.0, -radius),
            ShapeKind::Sphere if d.preserve_aspect => Vec3::new(0.0, 0.0, -radius),
            ShapeKind::Sphere | ShapeKind::Ring => Vec3::ZERO,
        };

        let vertical_angle = match d.kind {
            ShapeKind::Sphere if flat => 0.0,
            ShapeKind::Sphere if d.preserve_aspect => angle * canvas.height() / canvas.width(),
            ShapeKind::Sphere => d.vertical_angle,
            _ => 0.0,
        };

        let ring_outer_radius = d.ring_external_diameter * 0.5;

        Self {
            kind: d.kind,
            canvas,
            flat,
            angle,
            vertical_angle,
            radius,
            center,
            ring_inner_radius: ring_outer_radius * (1.0 - d.ring_fill),
            ring_outer_radius,
            ring_flip_vertical: d.ring_flip_vertical,
            tessellation_size: tessellation_size(&d, canvas, flat),
        }
    }

    /// Metrics with the canvas axes swapped.
    ///
    /// A vertical cylinder is a horizontal cylinder seen with x and y
    /// exchanged; the projection code uses this to share one implementation.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            canvas: self.canvas.transposed(),
            tessellation_size: Vec2::new(self.tessellation_size.y, self.tessellation_size.x),
            ..*self
        }
    }
}

/// Radius for a canvas of `extent` bent by `angle` degrees.
///
/// With aspect preserved the arc length equals the extent; otherwise the chord
/// does, which needs the half angle clamped below 90° for a usable sine.
fn cylinder_radius(extent: f32, angle: f32, preserve_aspect: bool) -> f32 {
    if preserve_aspect {
        extent / angle.to_radians()
    } else {
        (extent * 0.5) / (angle.clamp(-180.0, 180.0) * 0.5).to_radians().sin()
    }
}

fn tessellation_size(d: &ShapeDescriptor, canvas: CanvasRect, flat: bool) -> Vec2 {
    let (w, h) = (canvas.width(), canvas.height());
    let segments = d.base_circle_segments as f32;

    let size = if flat {
        Vec2::new(w, h)
    } else {
        let turns = d.angle.abs() / 360.0;
        match d.kind {
            ShapeKind::Cylinder | ShapeKind::CylinderVertical | ShapeKind::Ring => Vec2::new(
                (w / 4.0).min(w / (turns * segments)),
                (h / 4.0).min(h / (turns * segments)),
            ),
            ShapeKind::Sphere => {
                let x = (w / 4.0).min(w / (turns * segments * 0.5));
                let y = if d.preserve_aspect {
                    x * h / w
                } else if d.vertical_angle == 0.0 {
                    10.0
                } else {
                    (h / 4.0).min(h / (d.vertical_angle / 180.0 * segments * 0.5))
                };
                Vec2::new(x, y)
            }
        }
    };

    size / d.quality
}
