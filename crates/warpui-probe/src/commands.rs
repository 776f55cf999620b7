use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::{Vec2, Vec3};
use serde::Deserialize;
use warpui_geom::coords::Ray;
use warpui_geom::pointer::{PointerConfig, PointerSample, PointerTracker};
use warpui_geom::{CurvedCanvas, ShapeKind, ShapeMetrics};

/// Largest canvas-space error `sweep` tolerates.
const SWEEP_TOLERANCE: f32 = 1e-2;

pub fn raycast(canvas: &CurvedCanvas, origin: Vec3, direction: Vec3) -> Result<()> {
    let ray = Ray::new(origin, direction);
    if !ray.is_valid() {
        bail!("ray direction must be non-zero and finite");
    }
    match canvas.raycast(&ray) {
        Some(hit) => println!(
            "hit canvas=({:.3}, {:.3}) surface=({:.3}, {:.3}, {:.3}) distance={:.3}",
            hit.canvas_point.x,
            hit.canvas_point.y,
            hit.surface_point.x,
            hit.surface_point.y,
            hit.surface_point.z,
            hit.distance
        ),
        None => println!("miss"),
    }
    Ok(())
}

pub fn curve(canvas: &CurvedCanvas, point: Vec2) {
    let p = canvas.curve_point(point.extend(0.0));
    println!("({:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})", point.x, point.y, p.x, p.y, p.z);
}

/// Builds a mesh for a single quad covering `size` (default: the whole canvas).
pub fn mesh(canvas: &CurvedCanvas, size: Option<Vec2>) -> Result<()> {
    let half = size.unwrap_or(canvas.descriptor().canvas_size) * 0.5;
    let quad = [
        Vec3::new(-half.x, -half.y, 0.0),
        Vec3::new(-half.x, half.y, 0.0),
        Vec3::new(half.x, half.y, 0.0),
        Vec3::new(half.x, -half.y, 0.0),
    ];
    let mesh = canvas.build_mesh(&quad).context("building mesh")?;
    let size = canvas.metrics().tessellation_size;
    println!(
        "{} vertices, {} quads, {} indices, tessellation=({:.2}, {:.2})",
        mesh.vertex_count(),
        mesh.quad_count(),
        mesh.indices.len(),
        size.x,
        size.y
    );
    Ok(())
}

/// Forward-projects a grid of canvas points, casts a ray at each, and reports
/// the worst round-trip error.
pub fn sweep(canvas: &CurvedCanvas, steps: u32) -> Result<()> {
    let m = canvas.metrics();
    let steps = steps.max(2);
    let half = m.canvas.half_extents();
    let mut worst = 0.0f32;
    let mut misses = 0u32;

    for i in 0..steps {
        for j in 0..steps {
            let t = Vec2::new(i as f32, j as f32) / (steps - 1) as f32;
            // Stay just inside the edges.
            let p = (t * 2.0 - Vec2::ONE) * half * 0.999;
            let surface = canvas.curve_point(p.extend(0.0));
            let ray = Ray::towards(sweep_eye(m, surface), surface);
            match canvas.raycast(&ray) {
                Some(hit) => worst = worst.max(hit.canvas_point.distance(p)),
                None => {
                    log::debug!("sweep miss at ({}, {})", p.x, p.y);
                    misses += 1;
                }
            }
        }
    }

    println!("{}: {} samples, {} misses, worst error {:.5}", m.kind, steps * steps, misses, worst);
    if misses > 0 || worst > SWEEP_TOLERANCE {
        bail!("round trip failed for {}", m.kind);
    }
    Ok(())
}

/// A viewpoint that sees `surface` without crossing another part of the shape.
fn sweep_eye(m: &ShapeMetrics, surface: Vec3) -> Vec3 {
    if m.flat {
        return surface - Vec3::Z * 10.0;
    }
    match m.kind {
        ShapeKind::Cylinder => Vec3::new(0.0, surface.y, m.center.z),
        ShapeKind::CylinderVertical => Vec3::new(surface.x, 0.0, m.center.z),
        ShapeKind::Ring => surface - Vec3::Z * 10.0,
        ShapeKind::Sphere => m.center,
    }
}

#[derive(Debug, Deserialize)]
struct SampleRecord {
    origin: Vec3,
    direction: Vec3,
    #[serde(default)]
    pressed: bool,
}

/// Replays pointer samples from a JSON array and prints each frame's transitions.
pub fn track(canvas: &CurvedCanvas, config: PointerConfig, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading samples {}", path.display()))?;
    let records: Vec<SampleRecord> =
        serde_json::from_str(&text).with_context(|| format!("parsing samples {}", path.display()))?;

    let mut tracker = PointerTracker::new(config);
    for (i, r) in records.into_iter().enumerate() {
        let frame = tracker.update(canvas, PointerSample::new(Ray::new(r.origin, r.direction), r.pressed));
        let pos = frame
            .hit
            .map(|h| format!("({:.2}, {:.2})", h.canvas_point.x, h.canvas_point.y))
            .unwrap_or_else(|| "-".to_owned());

        let mut events = Vec::new();
        for (on, name) in [
            (frame.entered, "enter"),
            (frame.exited, "exit"),
            (frame.pressed, "press"),
            (frame.released, "release"),
            (frame.clicked, "click"),
            (frame.drag_started, "drag"),
        ] {
            if on {
                events.push(name);
            }
        }
        println!("{i:>4} {pos:<20} {}", events.join(" "));
    }
    Ok(())
}
