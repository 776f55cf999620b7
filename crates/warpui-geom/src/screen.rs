//! Conversions between canvas space, world space and camera screen space.
//!
//! Screen coordinates are logical pixels with a top-left origin, the same
//! convention as [`Viewport`].

use glam::{Affine3A, Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::coords::{Ray, Viewport};

const MIN_CLIP_W: f32 = 1e-6;
const MIN_DETERMINANT: f32 = 1e-12;

/// Camera + canvas placement needed to move points between spaces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenProjector {
    /// Canvas local → world.
    pub canvas_to_world: Affine3A,
    /// World → clip space.
    pub view_projection: Mat4,
    pub viewport: Viewport,
}

impl ScreenProjector {
    pub fn new(canvas_to_world: Affine3A, view_projection: Mat4, viewport: Viewport) -> Self {
        Self { canvas_to_world, view_projection, viewport }
    }

    /// Flat canvas point → screen. `None` when the point is behind the camera.
    pub fn canvas_to_screen(&self, canvas_point: Vec2) -> Option<Vec2> {
        let world = self.canvas_to_world.transform_point3(canvas_point.extend(0.0));
        self.world_to_screen(world)
    }

    /// World point → screen. `None` when the point is behind the camera.
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection * world.extend(1.0);
        if clip.w <= MIN_CLIP_W {
            return None;
        }
        let ndc = clip.xy() / clip.w;
        Some(self.viewport.ndc_to_screen(ndc))
    }

    /// World ray → canvas-local ray.
    pub fn world_ray_to_canvas(&self, ray: &Ray) -> Ray {
        ray.transformed(&self.canvas_to_world.inverse())
    }

    /// Screen point → world ray from the near plane through the far plane.
    ///
    /// `None` for an empty viewport or a singular view-projection.
    pub fn screen_ray(&self, screen: Vec2) -> Option<Ray> {
        if !self.viewport.is_valid() {
            return None;
        }
        let det = self.view_projection.determinant();
        if !det.is_finite() || det.abs() < MIN_DETERMINANT {
            return None;
        }
        let inv = self.view_projection.inverse();
        let ndc = self.viewport.screen_to_ndc(screen);
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        let ray = Ray::towards(near, far);
        ray.is_valid().then_some(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn camera(eye: Vec3) -> Mat4 {
        let view = Mat4::look_at_lh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_lh(60f32.to_radians(), 4.0 / 3.0, 0.1, 1000.0);
        proj * view
    }

    fn projector() -> ScreenProjector {
        ScreenProjector::new(Affine3A::IDENTITY, camera(Vec3::new(0.0, 0.0, -10.0)), Viewport::new(800.0, 600.0))
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn origin_projects_to_viewport_centre() {
        let s = projector().canvas_to_screen(Vec2::ZERO).unwrap();
        assert!((s - Vec2::new(400.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn canvas_up_is_screen_up() {
        let p = projector();
        let up = p.canvas_to_screen(Vec2::new(0.0, 1.0)).unwrap();
        let right = p.canvas_to_screen(Vec2::new(1.0, 0.0)).unwrap();
        assert!(up.y < 300.0);
        assert!(right.x > 400.0);
    }

    #[test]
    fn point_behind_camera_is_none() {
        assert!(projector().world_to_screen(Vec3::new(0.0, 0.0, -20.0)).is_none());
    }

    #[test]
    fn canvas_transform_is_applied() {
        let mut p = projector();
        p.canvas_to_world = Affine3A::from_translation(Vec3::new(0.0, 2.0, 0.0));
        let s = p.canvas_to_screen(Vec2::ZERO).unwrap();
        assert!(s.y < 300.0);
    }

    // ── rays ──────────────────────────────────────────────────────────────

    #[test]
    fn world_ray_is_moved_into_canvas_space() {
        let mut p = projector();
        p.canvas_to_world = Affine3A::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(5.0, 0.0, 0.0),
        );
        let world = Ray::new(Vec3::new(5.0, 0.0, 3.0), Vec3::NEG_Z);
        let local = p.world_ray_to_canvas(&world);
        let back = local.transformed(&p.canvas_to_world);
        assert!((back.origin - world.origin).length() < 1e-4);
        assert!((back.direction - world.direction).length() < 1e-4);
    }

    #[test]
    fn screen_centre_ray_looks_forward() {
        let ray = projector().screen_ray(Vec2::new(400.0, 300.0)).unwrap();
        assert!((ray.direction - Vec3::Z).length() < 1e-4);
        assert!(ray.origin.x.abs() < 1e-4 && ray.origin.y.abs() < 1e-4);
    }

    #[test]
    fn screen_ray_reprojects_to_same_pixel() {
        let p = projector();
        let px = Vec2::new(123.0, 456.0);
        let ray = p.screen_ray(px).unwrap();
        let s = p.world_to_screen(ray.at(20.0)).unwrap();
        assert!((s - px).length() < 1e-2);
    }

    #[test]
    fn degenerate_inputs_give_no_ray() {
        let mut p = projector();
        p.viewport = Viewport::new(0.0, 600.0);
        assert!(p.screen_ray(Vec2::ZERO).is_none());

        let mut p = projector();
        p.view_projection = Mat4::ZERO;
        assert!(p.screen_ray(Vec2::ZERO).is_none());
    }
}
