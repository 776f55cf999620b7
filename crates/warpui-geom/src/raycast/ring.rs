use glam::{Vec2, Vec3};

use crate::coords::Ray;
use crate::math::{remap, signed_angle};
use crate::shape::ShapeMetrics;

use super::flat::plane_distance;
use super::{CanvasHit, EDGE_TOLERANCE};

/// Canvas laid out on a flat annulus in the z = 0 plane.
///
/// Canvas x runs counter-clockwise from the top of the ring; canvas y runs
/// from the inner edge (bottom of the canvas) to the outer edge, or the other
/// way round when flipped.
pub fn raycast_ring(metrics: &ShapeMetrics, ray: &Ray) -> Option<CanvasHit> {
    let inner = metrics.ring_inner_radius;
    let outer = metrics.ring_outer_radius;
    if outer - inner <= f32::EPSILON {
        // Zero fill leaves no area to hit.
        return None;
    }

    let t = plane_distance(ray)?;
    let p = ray.at(t).with_z(0.0);
    let rho = p.length();

    let mut psi = signed_angle(p, Vec3::Y, Vec3::NEG_Z).rem_euclid(360.0);
    if psi - metrics.angle > 360.0 - psi {
        // Just clockwise of the top is the start of the ring, not its far end.
        psi -= 360.0;
    }

    let half = metrics.canvas.half_extents();
    let flip = if metrics.ring_flip_vertical { -1.0 } else { 1.0 };
    let canvas_point = Vec2::new(
        remap(psi, 0.0, metrics.angle, -half.x, half.x),
        remap(rho, inner, outer, -half.y * flip, half.y * flip),
    );

    metrics.canvas.contains(canvas_point, EDGE_TOLERANCE).then(|| CanvasHit {
        canvas_point: metrics.canvas.clamp(canvas_point),
        surface_point: p,
        distance: t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeDescriptor;

    fn ring(angle: f32, fill: f32) -> ShapeMetrics {
        ShapeMetrics::from_descriptor(&ShapeDescriptor::ring(angle, 10.0, fill, Vec2::new(36.0, 4.0)))
    }

    fn cast_at(m: &ShapeMetrics, x: f32, y: f32) -> Option<CanvasHit> {
        raycast_ring(m, &Ray::new(Vec3::new(x, y, -5.0), Vec3::Z))
    }

    #[test]
    fn top_of_ring_is_left_edge() {
        let hit = cast_at(&ring(360.0, 0.5), 0.0, 4.0).unwrap();
        assert!((hit.canvas_point.x + 18.0).abs() < 1e-3);
    }

    #[test]
    fn quarter_turn_counter_clockwise() {
        // 90° counter-clockwise from the top is the -x side.
        let hit = cast_at(&ring(360.0, 0.5), -4.0, 0.0).unwrap();
        assert!((hit.canvas_point.x + 9.0).abs() < 1e-3);
    }

    #[test]
    fn radial_mapping_with_partial_fill() {
        // fill 0.5 → radii 2.5..5; midway (3.75) is the canvas centre line.
        let hit = cast_at(&ring(360.0, 0.5), -3.75, 0.0).unwrap();
        assert!(hit.canvas_point.y.abs() < 1e-3);
    }

    #[test]
    fn flip_reverses_radial_axis() {
        let d = ShapeDescriptor::ring(360.0, 10.0, 0.5, Vec2::new(36.0, 4.0)).with_ring_flip(true);
        let m = ShapeMetrics::from_descriptor(&d);
        let hit = cast_at(&m, 0.0, 5.0).unwrap();
        assert!((hit.canvas_point.y + 2.0).abs() < 1e-3);
    }

    #[test]
    fn hole_and_outside_miss() {
        let m = ring(360.0, 0.5);
        assert!(cast_at(&m, 0.0, 1.0).is_none());
        assert!(cast_at(&m, 0.0, 6.0).is_none());
    }

    #[test]
    fn beyond_angular_extent_misses() {
        let m = ring(90.0, 0.5);
        // +x side is 270° counter-clockwise from the top.
        assert!(cast_at(&m, 4.0, 0.0).is_none());
        assert!(cast_at(&m, -4.0, 0.0).is_some());
    }

    #[test]
    fn just_clockwise_of_top_is_left_edge() {
        let m = ring(270.0, 0.5);
        let a = (-0.005f32).to_radians();
        let hit = cast_at(&m, -a.sin() * 4.0, a.cos() * 4.0).unwrap();
        assert!((hit.canvas_point.x + 18.0).abs() < 1e-3);
    }

    #[test]
    fn tiny_angle_keeps_tight_bounds() {
        // 0.01° of ring spread over 36 units: 0.03° is 72 units past the far edge.
        let m = ring(0.01, 0.5);
        let a = 0.03f32.to_radians();
        assert!(cast_at(&m, -a.sin() * 4.0, a.cos() * 4.0).is_none());
        let a = 0.005f32.to_radians();
        assert!(cast_at(&m, -a.sin() * 4.0, a.cos() * 4.0).is_some());
    }

    #[test]
    fn zero_fill_never_hits() {
        assert!(cast_at(&ring(360.0, 0.0), 0.0, 5.0).is_none());
    }
}
