use glam::{Vec2, Vec3};

use crate::coords::Ray;
use crate::math::{remap, signed_angle};
use crate::shape::ShapeMetrics;

use super::{raycast_cylinder, solve_quadratic, CanvasHit, EDGE_TOLERANCE};

/// Canvas stretched over a sphere patch.
///
/// Canvas x follows longitude (about y), canvas y follows latitude. A sphere
/// with no vertical extent keeps y linear, which is a cylinder band of the
/// same radius.
pub fn raycast_sphere(metrics: &ShapeMetrics, ray: &Ray) -> Option<CanvasHit> {
    if metrics.vertical_angle == 0.0 {
        return raycast_cylinder(metrics, ray);
    }

    let o = ray.origin.as_dvec3() - metrics.center.as_dvec3();
    let d = ray.direction.as_dvec3();
    let r = f64::from(metrics.radius);
    let (t0, t1) = solve_quadratic(
        d.length_squared(),
        2.0 * o.dot(d),
        o.x * o.x + o.y * o.y + (o.z - r) * (o.z + r),
    )?;

    [t0, t1]
        .into_iter()
        .filter(|&t| t >= 0.0)
        .find_map(|t| sphere_patch_hit(metrics, ray.at(t), t))
}

fn sphere_patch_hit(metrics: &ShapeMetrics, p: Vec3, distance: f32) -> Option<CanvasHit> {
    let q = (p - metrics.center) / metrics.radius;

    let longitude = -signed_angle(q.with_y(0.0), Vec3::Z, Vec3::Y);
    let latitude = q.y.clamp(-1.0, 1.0).asin().to_degrees();

    let h_half = metrics.angle * 0.5;
    let v_half = metrics.vertical_angle * 0.5;
    let half = metrics.canvas.half_extents();
    let canvas_point = Vec2::new(
        remap(longitude, -h_half, h_half, -half.x, half.x),
        remap(latitude, -v_half, v_half, -half.y, half.y),
    );

    metrics.canvas.contains(canvas_point, EDGE_TOLERANCE).then(|| CanvasHit {
        canvas_point: metrics.canvas.clamp(canvas_point),
        surface_point: p,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeDescriptor;

    #[test]
    fn forward_ray_from_centre_hits_canvas_centre() {
        let m = ShapeMetrics::from_descriptor(&ShapeDescriptor::sphere(90.0, Vec2::new(20.0, 10.0)));
        let hit = raycast_sphere(&m, &Ray::new(m.center, Vec3::Z)).unwrap();
        assert!(hit.canvas_point.length() < 1e-4);
        assert!(hit.surface_point.length() < 1e-3);
    }

    #[test]
    fn latitude_maps_to_canvas_y() {
        // Non-preserving sphere, 60° tall over height 12: 15° up is y = 3.
        let d = ShapeDescriptor::sphere(90.0, Vec2::new(20.0, 12.0)).with_vertical_angle(60.0);
        let m = ShapeMetrics::from_descriptor(&d);
        let dir = Vec3::new(0.0, 15f32.to_radians().sin(), 15f32.to_radians().cos());
        let hit = raycast_sphere(&m, &Ray::new(m.center, dir)).unwrap();
        assert!((hit.canvas_point - Vec2::new(0.0, 3.0)).length() < 1e-3);
    }

    #[test]
    fn above_vertical_extent_misses() {
        let d = ShapeDescriptor::sphere(90.0, Vec2::new(20.0, 12.0)).with_vertical_angle(60.0);
        let m = ShapeMetrics::from_descriptor(&d);
        let dir = Vec3::new(0.0, 40f32.to_radians().sin(), 40f32.to_radians().cos());
        assert!(raycast_sphere(&m, &Ray::new(m.center, dir)).is_none());
    }

    #[test]
    fn ray_missing_sphere_entirely() {
        let m = ShapeMetrics::from_descriptor(&ShapeDescriptor::sphere(90.0, Vec2::new(20.0, 10.0)));
        let far = Vec3::new(0.0, 1000.0, -10.0);
        assert!(raycast_sphere(&m, &Ray::new(far, Vec3::Z)).is_none());
    }
}
