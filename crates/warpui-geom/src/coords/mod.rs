//! Coordinate types shared by the projection code.
//!
//! Canvas space:
//! - Origin at the canvas centre
//! - +X right, +Y up
//! - The flat canvas lies in the z = 0 plane and faces -Z (the viewer is on
//!   the -Z side)
//!
//! Screen space follows the host renderer: logical pixels, origin top-left,
//! +Y down.

mod canvas_rect;
mod ray;
mod viewport;

pub use canvas_rect::CanvasRect;
pub use ray::Ray;
pub use viewport::Viewport;
