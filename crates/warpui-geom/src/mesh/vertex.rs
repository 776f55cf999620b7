use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A vertex the tessellator can subdivide and the curver can move.
///
/// `blend` receives the four corners of a quad and bilinear weights that sum
/// to one; every attribute should be interpolated with them.
pub trait CurvableVertex: Copy {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn blend(corners: &[Self; 4], weights: [f32; 4]) -> Self;
}

impl CurvableVertex for Vec3 {
    #[inline]
    fn position(&self) -> Vec3 {
        *self
    }

    #[inline]
    fn set_position(&mut self, position: Vec3) {
        *self = position;
    }

    #[inline]
    fn blend(corners: &[Self; 4], weights: [f32; 4]) -> Self {
        corners
            .iter()
            .zip(weights)
            .fold(Vec3::ZERO, |acc, (c, w)| acc + *c * w)
    }
}

/// GPU-ready UI vertex: position, texture coordinate, linear RGBA.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl UiVertex {
    #[inline]
    pub const fn new(position: [f32; 3], uv: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, uv, color }
    }
}

impl CurvableVertex for UiVertex {
    #[inline]
    fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }

    fn blend(corners: &[Self; 4], weights: [f32; 4]) -> Self {
        let mut out = UiVertex::zeroed();
        for (c, w) in corners.iter().zip(weights) {
            for i in 0..3 {
                out.position[i] += c.position[i] * w;
            }
            for i in 0..2 {
                out.uv[i] += c.uv[i] * w;
            }
            for i in 0..4 {
                out.color[i] += c.color[i] * w;
            }
        }
        out
    }
}
