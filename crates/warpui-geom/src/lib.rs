//! Geometry for UI canvases bent onto curved surfaces.
//!
//! A flat canvas can be wrapped around a cylinder (bent left/right or up/down),
//! laid out on a flat ring, or stretched over part of a sphere. This crate owns
//! both directions of that mapping:
//!
//! - **inverse projection**: a pointer ray is intersected with the curved surface
//!   and mapped back to flat canvas coordinates ([`raycast`])
//! - **forward projection**: a flat UI mesh is tessellated and its vertices are
//!   moved onto the surface ([`curve`], [`tessellate`], [`mesh`])
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `CanvasRect`, `Ray`, `Viewport` |
//! | [`shape`] | `ShapeKind`, `ShapeDescriptor`, `ShapeMetrics`, `CurvedCanvas` |
//! | [`raycast`] | per-shape ray intersection, `CanvasHit` |
//! | [`curve`] | per-shape vertex placement |
//! | [`tessellate`] | quad subdivision with a hard vertex budget |
//! | [`mesh`] | `CurvedMesh`, `UiVertex`, `CurvableVertex`, `MeshError` |
//! | [`screen`] | canvas/world/screen conversions |
//! | [`pointer`] | per-frame pointer transitions over a canvas |
//!
//! # Quick start
//!
//! ```rust
//! use glam::{Vec2, Vec3};
//! use warpui_geom::coords::Ray;
//! use warpui_geom::shape::{CurvedCanvas, ShapeDescriptor};
//!
//! let canvas = CurvedCanvas::new(ShapeDescriptor::cylinder(90.0, Vec2::new(1000.0, 500.0)));
//! let hit = canvas
//!     .raycast(&Ray::new(Vec3::new(0.0, 0.0, -2000.0), Vec3::Z))
//!     .unwrap();
//! assert!(hit.canvas_point.length() < 1e-2);
//! ```

pub mod coords;
pub mod curve;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod pointer;
pub mod raycast;
pub mod screen;
pub mod shape;
pub mod tessellate;

pub use mesh::{CurvedMesh, MeshError, UiVertex};
pub use raycast::CanvasHit;
pub use shape::{CurvedCanvas, ShapeDescriptor, ShapeKind, ShapeMetrics};
