//! Mesh buffers produced by forward projection.
//!
//! Vertices are grouped in quads of four (the layout UI systems emit), and
//! indexed with 16-bit indices, two triangles per quad.

mod buffer;
mod error;
mod vertex;

pub use buffer::CurvedMesh;
pub use error::MeshError;
pub use vertex::{CurvableVertex, UiVertex};
