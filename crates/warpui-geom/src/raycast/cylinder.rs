use glam::{Vec2, Vec3};

use crate::coords::Ray;
use crate::math::{remap, signed_angle, swap_xy};
use crate::shape::ShapeMetrics;

use super::{solve_quadratic, CanvasHit, EDGE_TOLERANCE};

/// Canvas bent around an axis parallel to y.
///
/// Canvas x follows the angle around the axis; canvas y is the hit height.
pub fn raycast_cylinder(metrics: &ShapeMetrics, ray: &Ray) -> Option<CanvasHit> {
    let o = ray.origin.as_dvec3() - metrics.center.as_dvec3();
    let d = ray.direction.as_dvec3();
    let r = f64::from(metrics.radius);
    let (t0, t1) = solve_quadratic(
        d.x * d.x + d.z * d.z,
        2.0 * (o.x * d.x + o.z * d.z),
        o.x * o.x + (o.z - r) * (o.z + r),
    )?;

    // The nearer root can sit on the unused part of the cylinder; fall through
    // to the far one in that case.
    [t0, t1]
        .into_iter()
        .filter(|&t| t >= 0.0)
        .find_map(|t| cylinder_patch_hit(metrics, ray.at(t), t))
}

/// Canvas bent around an axis parallel to x.
///
/// Solved as the horizontal case with x and y exchanged on the way in and out.
pub fn raycast_cylinder_vertical(metrics: &ShapeMetrics, ray: &Ray) -> Option<CanvasHit> {
    let swapped = Ray::new(swap_xy(ray.origin), swap_xy(ray.direction));
    raycast_cylinder(&metrics.transposed(), &swapped).map(|hit| CanvasHit {
        canvas_point: Vec2::new(hit.canvas_point.y, hit.canvas_point.x),
        surface_point: swap_xy(hit.surface_point),
        distance: hit.distance,
    })
}

fn cylinder_patch_hit(metrics: &ShapeMetrics, p: Vec3, distance: f32) -> Option<CanvasHit> {
    let half = metrics.canvas.half_extents();
    // Dividing by the signed radius folds the concave case onto the convex one.
    let q = (p - metrics.center) / metrics.radius;
    let theta = -signed_angle(q.with_y(0.0), Vec3::Z, Vec3::Y);
    let half_angle = metrics.angle * 0.5;
    let canvas_point = Vec2::new(remap(theta, -half_angle, half_angle, -half.x, half.x), p.y);

    // Bounds are checked in canvas units so the slack does not grow as the
    // bend angle shrinks.
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
    fn side_hit_maps_to_quarter_width() {
        // 180° over width 8: each 45° of arc is a quarter of the width.
        let m = ShapeMetrics::from_descriptor(&ShapeDescriptor::cylinder(180.0, Vec2::new(8.0, 4.0)));
        let dir = Vec3::new(45f32.to_radians().sin(), 0.0, 45f32.to_radians().cos());
        let hit = raycast_cylinder(&m, &Ray::new(m.center + Vec3::Y, dir)).unwrap();
        assert!((hit.canvas_point - Vec2::new(2.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn hit_beyond_angular_extent_misses() {
        let m = ShapeMetrics::from_descriptor(&ShapeDescriptor::cylinder(90.0, Vec2::new(8.0, 4.0)));
        // 60° off-centre is outside the ±45° patch.
        let dir = Vec3::new(60f32.to_radians().sin(), 0.0, 60f32.to_radians().cos());
        assert!(raycast_cylinder(&m, &Ray::new(m.center, dir)).is_none());
    }

    #[test]
    fn ray_along_axis_misses() {
        let m = ShapeMetrics::from_descriptor(&ShapeDescriptor::cylinder(90.0, Vec2::new(8.0, 4.0)));
        assert!(raycast_cylinder(&m, &Ray::new(Vec3::ZERO, Vec3::Y)).is_none());
    }

    #[test]
    fn vertical_side_hit_maps_to_quarter_height() {
        let m = ShapeMetrics::from_descriptor(&ShapeDescriptor::cylinder_vertical(180.0, Vec2::new(4.0, 8.0)));
        let dir = Vec3::new(0.0, 45f32.to_radians().sin(), 45f32.to_radians().cos());
        let hit = raycast_cylinder_vertical(&m, &Ray::new(m.center + Vec3::X, dir)).unwrap();
        assert!((hit.canvas_point - Vec2::new(1.0, 2.0)).length() < 1e-4);
    }
}
