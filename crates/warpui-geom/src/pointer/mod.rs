//! Pointer tracking over a curved canvas.
//!
//! Any control method (mouse, gaze, tracked controller) is reduced to a
//! [`PointerSample`]: a canvas-local ray plus a button state. A
//! [`PointerTracker`] turns consecutive samples into per-frame transitions.

mod frame;
mod state;

pub use frame::PointerFrame;
pub use state::{PointerConfig, PointerSample, PointerTracker};
