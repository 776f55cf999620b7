use bytemuck::Pod;

use super::{CurvableVertex, UiVertex};

/// Curved vertex list plus its triangle indices.
///
/// Rebuilt wholesale by [`crate::shape::CurvedCanvas::rebuild_mesh`]; the
/// vectors keep their capacity between rebuilds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvedMesh<V = UiVertex> {
    pub vertices: Vec<V>,
    pub indices: Vec<u16>,
}

impl<V: CurvableVertex> CurvedMesh<V> {
    #[inline]
    pub fn new() -> Self {
        Self { vertices: Vec::new(), indices: Vec::new() }
    }

    /// Clears vertices and indices, keeping allocations.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Complete quads; trailing vertices that do not form one are not indexed.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Regenerates `indices` from the quad layout: (0, 1, 2) and (2, 3, 0).
    ///
    /// Callers guarantee the vertex count fits 16-bit indices.
    pub(crate) fn rebuild_indices(&mut self) {
        debug_assert!(self.vertices.len() <= crate::tessellate::MAX_MESH_VERTICES);

        self.indices.clear();
        self.indices.reserve(self.quad_count() * 6);
        for quad in 0..self.quad_count() {
            let base = (quad * 4) as u16;
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }
    }

    /// Index buffer as bytes for upload.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl<V: CurvableVertex + Pod> CurvedMesh<V> {
    /// Vertex buffer as bytes for upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
