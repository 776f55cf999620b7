//! Shape configuration and the constants derived from it.
//!
//! [`ShapeDescriptor`] is what the host sets; [`ShapeMetrics`] is what the
//! projection code reads. [`CurvedCanvas`] keeps the two in sync so metrics
//! are only recomputed when the descriptor actually changes.

mod canvas;
mod descriptor;
mod kind;
mod metrics;

pub use canvas::CurvedCanvas;
pub use descriptor::ShapeDescriptor;
pub use kind::ShapeKind;
pub use metrics::ShapeMetrics;
