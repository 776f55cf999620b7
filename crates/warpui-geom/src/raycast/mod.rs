//! Inverse projection: pointer ray → flat canvas point.
//!
//! Each shape intersects the ray with its surface in closed form, keeps the
//! nearest hit that lies on the bounded canvas patch, and remaps the hit's
//! angular/radial coordinates back to linear canvas coordinates.
//!
//! Rays are expected in canvas-local space; see [`crate::screen`] for the
//! world-space conversion.

mod cylinder;
mod flat;
mod ring;
mod sphere;

use glam::{Vec2, Vec3};

use crate::coords::Ray;
use crate::shape::{ShapeKind, ShapeMetrics};

pub use cylinder::{raycast_cylinder, raycast_cylinder_vertical};
pub use flat::raycast_flat;
pub use ring::raycast_ring;
pub use sphere::raycast_sphere;

/// Slack on linear canvas bounds, in canvas units.
pub(crate) const EDGE_TOLERANCE: f32 = 1e-3;
/// Below this |direction component| a ray counts as parallel to a plane or axis.
pub(crate) const PARALLEL_EPSILON: f32 = 1e-7;

/// A ray/canvas intersection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasHit {
    /// Equivalent point on the flat canvas.
    pub canvas_point: Vec2,
    /// Hit point on the curved surface, canvas-local.
    pub surface_point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Intersects `ray` with the shape described by `metrics`.
///
/// Returns `None` when the ray misses the bounded canvas. That is the common
/// case for a pointer aimed elsewhere, not an error.
pub fn raycast(metrics: &ShapeMetrics, ray: &Ray) -> Option<CanvasHit> {
    if !ray.is_valid() {
        return None;
    }

    let hit = if metrics.flat {
        raycast_flat(metrics, ray)
    } else {
        match metrics.kind {
            ShapeKind::Cylinder => raycast_cylinder(metrics, ray),
            ShapeKind::CylinderVertical => raycast_cylinder_vertical(metrics, ray),
            ShapeKind::Ring => raycast_ring(metrics, ray),
            ShapeKind::Sphere => raycast_sphere(metrics, ray),
        }
    };

    if hit.is_none() {
        log::trace!("{} raycast missed: origin={} dir={}", metrics.kind, ray.origin, ray.direction);
    }
    hit
}

/// Real roots of `a t² + b t + c = 0`, ascending.
///
/// Coefficients come in as f64 and the roots use the cancellation-free form.
/// Nearly flat bends have radii many orders of magnitude above the canvas
/// size, and `|o|² - r²` loses the hit entirely in f32.
pub(crate) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f32, f32)> {
    if a.abs() < f64::from(PARALLEL_EPSILON) {
        return None;
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let (t0, t1) = if q == 0.0 {
        // b == 0 and c == 0: double root at zero.
        (0.0, 0.0)
    } else {
        (q / a, c / q)
    };

    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    Some((lo as f32, hi as f32))
}
