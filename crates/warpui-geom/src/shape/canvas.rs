use glam::{Vec2, Vec3};

use crate::coords::Ray;
use crate::curve::{curve_point, curve_vertices};
use crate::mesh::{CurvableVertex, CurvedMesh, MeshError};
use crate::raycast::{raycast, CanvasHit};
use crate::screen::ScreenProjector;
use crate::tessellate::{tessellate_into, tessellated_vertex_count, MAX_MESH_VERTICES};

use super::{ShapeDescriptor, ShapeMetrics};

/// A canvas shape with its derived metrics memoized.
///
/// Hosts hold one per curved canvas and call [`set_descriptor`] whenever the
/// shape settings may have changed; metrics are only rebuilt when the new
/// descriptor differs from the current one.
///
/// [`set_descriptor`]: Self::set_descriptor
#[derive(Debug, Clone)]
pub struct CurvedCanvas {
    descriptor: ShapeDescriptor,
    metrics: ShapeMetrics,
}

impl CurvedCanvas {
    pub fn new(descriptor: ShapeDescriptor) -> Self {
        Self { metrics: ShapeMetrics::from_descriptor(&descriptor), descriptor }
    }

    #[inline]
    pub fn descriptor(&self) -> &ShapeDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn metrics(&self) -> &ShapeMetrics {
        &self.metrics
    }

    /// Replaces the descriptor. Returns `true` if it changed (and the metrics
    /// were recomputed).
    pub fn set_descriptor(&mut self, descriptor: ShapeDescriptor) -> bool {
        if descriptor == self.descriptor {
            return false;
        }
        self.descriptor = descriptor;
        self.metrics = ShapeMetrics::from_descriptor(&descriptor);
        log::debug!(
            "{} metrics rebuilt: angle={} radius={} tessellation={}",
            self.metrics.kind,
            self.metrics.angle,
            self.metrics.radius,
            self.metrics.tessellation_size
        );
        true
    }

    /// Canvas-local ray → canvas point. See [`crate::raycast`].
    #[inline]
    pub fn raycast(&self, ray: &Ray) -> Option<CanvasHit> {
        raycast(&self.metrics, ray)
    }

    /// World-space ray → screen point of the hit, for hosts whose UI event
    /// system works in camera screen coordinates.
    pub fn raycast_to_screen(&self, world_ray: &Ray, projector: &ScreenProjector) -> Option<Vec2> {
        let local = projector.world_ray_to_canvas(world_ray);
        let hit = self.raycast(&local)?;
        projector.canvas_to_screen(hit.canvas_point)
    }

    /// Canvas point → curved surface point.
    #[inline]
    pub fn curve_point(&self, p: Vec3) -> Vec3 {
        curve_point(&self.metrics, p)
    }

    /// Tessellates and curves a flat quad list into a new mesh.
    pub fn build_mesh<V: CurvableVertex>(&self, flat: &[V]) -> Result<CurvedMesh<V>, MeshError> {
        let mut mesh = CurvedMesh::new();
        self.rebuild_mesh(flat, &mut mesh)?;
        Ok(mesh)
    }

    /// Tessellates and curves `flat` into `mesh`, reusing its allocations.
    ///
    /// The vertex budget is checked before anything is written, so on error
    /// `mesh` keeps its previous contents.
    pub fn rebuild_mesh<V: CurvableVertex>(&self, flat: &[V], mesh: &mut CurvedMesh<V>) -> Result<(), MeshError> {
        let size = self.metrics.tessellation_size;
        let required = if self.metrics.flat { flat.len() } else { tessellated_vertex_count(flat, size) };
        if required > MAX_MESH_VERTICES {
            log::warn!(
                "{} mesh needs {} vertices (limit {}); lower quality",
                self.metrics.kind,
                required,
                MAX_MESH_VERTICES
            );
            return Err(MeshError::CapacityExceeded { required, limit: MAX_MESH_VERTICES });
        }

        mesh.vertices.clear();
        if self.metrics.flat {
            mesh.vertices.extend_from_slice(flat);
        } else {
            tessellate_into(flat, size, &mut mesh.vertices)?;
        }

        curve_vertices(&self.metrics, &mut mesh.vertices);
        mesh.rebuild_indices();
        Ok(())
    }
}
