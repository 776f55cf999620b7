//! Forward projection: flat canvas vertex → curved surface vertex.
//!
//! The inverse of [`crate::raycast`]: a point forward-projected here and then
//! hit by a ray maps back to the same canvas coordinates. Canvas-space z is
//! kept as an offset so layered UI stays layered after bending.

use glam::Vec3;

use crate::math::{remap, swap_xy};
use crate::mesh::CurvableVertex;
use crate::shape::{ShapeKind, ShapeMetrics};

/// Moves one canvas-space point onto the shape.
///
/// Flat metrics return the point unchanged.
pub fn curve_point(metrics: &ShapeMetrics, p: Vec3) -> Vec3 {
    if metrics.flat {
        return p;
    }

    match metrics.kind {
        ShapeKind::Cylinder => bend(metrics, p),
        ShapeKind::CylinderVertical => swap_xy(bend(&metrics.transposed(), swap_xy(p))),
        ShapeKind::Ring => wrap_ring(metrics, p),
        ShapeKind::Sphere if metrics.vertical_angle == 0.0 => bend(metrics, p),
        ShapeKind::Sphere => wrap_sphere(metrics, p),
    }
}

/// Curves every vertex position in place. Other attributes are untouched.
pub fn curve_vertices<V: CurvableVertex>(metrics: &ShapeMetrics, vertices: &mut [V]) {
    if metrics.flat {
        return;
    }
    for v in vertices {
        v.set_position(curve_point(metrics, v.position()));
    }
}

/// `1 - cos a`, without the cancellation near zero.
#[inline]
fn versine(a: f32) -> f32 {
    2.0 * (a * 0.5).sin().powi(2)
}

/// Horizontal bend: θ grows linearly with x across the canvas width.
///
/// Depth is taken relative to the surface's front point; with radii in the
/// millions `r·cos θ - r` would round away the whole bend.
fn bend(m: &ShapeMetrics, p: Vec3) -> Vec3 {
    let theta = (p.x / m.canvas.width()) * m.angle.to_radians();
    Vec3::new(
        theta.sin() * m.radius,
        p.y,
        p.z + (m.center.z + m.radius) - versine(theta) * m.radius,
    )
}

fn wrap_ring(m: &ShapeMetrics, p: Vec3) -> Vec3 {
    let half = m.canvas.half_extents();
    let flip = if m.ring_flip_vertical { -1.0 } else { 1.0 };

    let psi = remap(p.x, -half.x, half.x, 0.0, m.angle).to_radians();
    let rho = remap(p.y, -half.y * flip, half.y * flip, m.ring_inner_radius, m.ring_outer_radius);

    Vec3::new(-psi.sin() * rho, psi.cos() * rho, p.z)
}

fn wrap_sphere(m: &ShapeMetrics, p: Vec3) -> Vec3 {
    let n = m.canvas.normalize(p.truncate());
    let h_half = m.angle * 0.5;
    let v_half = m.vertical_angle * 0.5;

    let theta = remap(n.x, -0.5, 0.5, -h_half, h_half).to_radians();
    let lat = remap(n.y, -0.5, 0.5, -v_half, v_half).to_radians();
    let r = m.radius;

    Vec3::new(
        lat.cos() * theta.sin() * r,
        lat.sin() * r,
        p.z + (m.center.z + r) - (versine(lat) + lat.cos() * versine(theta)) * r,
    )
}
