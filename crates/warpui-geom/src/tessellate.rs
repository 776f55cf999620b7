//! Quad subdivision ahead of curving.
//!
//! A flat quad bent as-is would keep straight edges between its corners. Each
//! quad is split into a grid of sub-quads no larger than the shape's
//! tessellation size, so the bend reads as smooth.
//!
//! Quad corner order follows the UI layout convention: `v0 → v1` is the
//! vertical edge and `v1 → v2` the horizontal one (bottom-left, top-left,
//! top-right, bottom-right for an axis-aligned quad).

use glam::Vec2;

use crate::mesh::{CurvableVertex, MeshError};

/// Most vertices a mesh can hold with 16-bit indices.
pub const MAX_MESH_VERTICES: usize = 1 << 16;

/// Sub-quad counts `(horizontal, vertical)` for one quad.
///
/// Each axis is `ceil(edge / max(1, required))`, never below one.
pub fn subdivision_counts<V: CurvableVertex>(quad: &[V; 4], required: Vec2) -> (usize, usize) {
    let horizontal = quad[2].position().distance(quad[1].position());
    let vertical = quad[1].position().distance(quad[0].position());
    (axis_count(horizontal, required.x), axis_count(vertical, required.y))
}

#[inline]
fn axis_count(edge: f32, required: f32) -> usize {
    let step = if required.is_finite() { required.max(1.0) } else { 1.0 };
    if !edge.is_finite() {
        return usize::MAX;
    }
    // Float → int casts saturate, so huge ratios clamp rather than wrap.
    ((edge / step).ceil() as usize).max(1)
}

/// Vertex count [`tessellate_into`] would produce for `vertices`.
///
/// Saturates instead of overflowing.
pub fn tessellated_vertex_count<V: CurvableVertex>(vertices: &[V], required: Vec2) -> usize {
    let quads = vertices.chunks_exact(4);
    let remainder = quads.remainder().len();

    quads
        .filter_map(|chunk| <&[V; 4]>::try_from(chunk).ok())
        .map(|quad| {
            let (h, v) = subdivision_counts(quad, required);
            h.saturating_mul(v).saturating_mul(4)
        })
        .fold(remainder, usize::saturating_add)
}

/// Subdivides every quad of `vertices` and appends the result to `out`.
///
/// Fails without touching `out` when the result would exceed
/// [`MAX_MESH_VERTICES`]. Trailing vertices that do not complete a quad are
/// copied through unchanged.
pub fn tessellate_into<V: CurvableVertex>(
    vertices: &[V],
    required: Vec2,
    out: &mut Vec<V>,
) -> Result<(), MeshError> {
    let required_count = tessellated_vertex_count(vertices, required);
    let total = required_count.saturating_add(out.len());
    if total > MAX_MESH_VERTICES {
        log::warn!(
            "tessellation needs {} vertices (limit {}); lower quality",
            total,
            MAX_MESH_VERTICES
        );
        return Err(MeshError::CapacityExceeded { required: total, limit: MAX_MESH_VERTICES });
    }

    out.reserve(required_count);

    let quads = vertices.chunks_exact(4);
    let remainder = quads.remainder();
    if !remainder.is_empty() {
        log::debug!("{} trailing vertices do not form a quad; passed through", remainder.len());
    }

    for quad in quads.filter_map(|chunk| <&[V; 4]>::try_from(chunk).ok()) {
        let (h, v) = subdivision_counts(quad, required);
        subdivide_quad(quad, h, v, out);
    }
    out.extend_from_slice(remainder);

    Ok(())
}

/// Emits an `h × v` grid of sub-quads, row by row, each in source corner order.
fn subdivide_quad<V: CurvableVertex>(quad: &[V; 4], h: usize, v: usize, out: &mut Vec<V>) {
    let mut y_start = 0.0;
    for row in 0..v {
        let y_end = (row + 1) as f32 / v as f32;
        let mut x_start = 0.0;

        for col in 0..h {
            let x_end = (col + 1) as f32 / h as f32;

            out.push(lerp_quad(quad, x_start, y_start));
            out.push(lerp_quad(quad, x_start, y_end));
            out.push(lerp_quad(quad, x_end, y_end));
            out.push(lerp_quad(quad, x_end, y_start));

            x_start = x_end;
        }
        y_start = y_end;
    }
}

/// Bilinear point at `(x, y) ∈ [0, 1]²` of the quad.
#[inline]
pub fn lerp_quad<V: CurvableVertex>(quad: &[V; 4], x: f32, y: f32) -> V {
    V::blend(
        quad,
        [(1.0 - x) * (1.0 - y), (1.0 - x) * y, x * y, x * (1.0 - y)],
    )
}
