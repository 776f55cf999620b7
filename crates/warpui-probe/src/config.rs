use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use warpui_geom::pointer::PointerConfig;
use warpui_geom::ShapeDescriptor;

/// On-disk probe configuration.
///
/// ```json
/// { "shape": { "kind": "ring", "angle": 270, "ring_fill": 0.8 },
///   "pointer": { "drag_threshold": 4 } }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub shape: ShapeDescriptor,
    pub pointer: PointerConfig,
}

impl ProbeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
