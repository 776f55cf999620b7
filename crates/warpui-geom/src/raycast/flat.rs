use glam::Vec3;

use crate::coords::Ray;
use crate::shape::ShapeMetrics;

use super::{CanvasHit, EDGE_TOLERANCE, PARALLEL_EPSILON};

/// Unbent canvas: ray/plane intersection with z = 0, bounded by the rectangle.
pub fn raycast_flat(metrics: &ShapeMetrics, ray: &Ray) -> Option<CanvasHit> {
    let t = plane_distance(ray)?;
    let p = ray.at(t);
    let canvas_point = p.truncate();

    metrics.canvas.contains(canvas_point, EDGE_TOLERANCE).then(|| CanvasHit {
        canvas_point,
        surface_point: p.with_z(0.0),
        distance: t,
    })
}

/// Distance along `ray` to the z = 0 plane, if ahead of the origin.
pub(super) fn plane_distance(ray: &Ray) -> Option<f32> {
    if ray.direction.dot(Vec3::Z).abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = -ray.origin.z / ray.direction.z;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeDescriptor;
    use glam::Vec2;

    fn flat() -> ShapeMetrics {
        ShapeMetrics::from_descriptor(&ShapeDescriptor::cylinder(0.0, Vec2::new(10.0, 4.0)))
    }

    #[test]
    fn oblique_ray_hits_plane() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 1.0));
        let hit = raycast_flat(&flat(), &ray).unwrap();
        assert!((hit.canvas_point - Vec2::new(1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::X);
        assert!(raycast_flat(&flat(), &ray).is_none());
    }

    #[test]
    fn plane_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(raycast_flat(&flat(), &ray).is_none());
    }

    #[test]
    fn outside_rectangle_misses() {
        let ray = Ray::new(Vec3::new(6.0, 0.0, -1.0), Vec3::Z);
        assert!(raycast_flat(&flat(), &ray).is_none());
    }

    #[test]
    fn back_side_hits_too() {
        // The canvas has no culling; a ray from behind still resolves.
        let ray = Ray::new(Vec3::new(1.0, 1.0, 3.0), Vec3::NEG_Z);
        let hit = raycast_flat(&flat(), &ray).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-5);
    }
}
