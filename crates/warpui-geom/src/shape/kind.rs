use std::fmt;

use serde::{Deserialize, Serialize};

/// Surface a canvas is wrapped onto.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Bent left/right around a vertical axis.
    #[default]
    Cylinder,
    /// Bent up/down around a horizontal axis.
    CylinderVertical,
    /// Flat annulus; canvas x runs around the ring, canvas y runs outward.
    Ring,
    /// Patch of a sphere; both axes are angular.
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Cylinder,
        ShapeKind::CylinderVertical,
        ShapeKind::Ring,
        ShapeKind::Sphere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::CylinderVertical => "cylinder_vertical",
            ShapeKind::Ring => "ring",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
