//! Logger setup.
//!
//! The library logs through the `log` facade under the `warpui_geom` target:
//!
//! | Level | Event |
//! |-------|-------|
//! | `warn` | mesh rebuild refused for exceeding the vertex budget |
//! | `debug` | shape metrics rebuilt, trailing non-quad vertices |
//! | `trace` | raycast misses, pointer transitions |
//!
//! Nothing is printed until a binary or test calls [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
