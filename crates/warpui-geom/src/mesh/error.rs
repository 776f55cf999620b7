use thiserror::Error;

/// Errors from building a curved mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Tessellation would produce more vertices than 16-bit indices can address.
    ///
    /// Lower the quality (or the bend angle) and rebuild.
    #[error("tessellation needs {required} vertices, limit is {limit}")]
    CapacityExceeded {
        /// Vertex count the tessellation would have produced.
        required: usize,
        /// Maximum supported vertex count.
        limit: usize,
    },
}
