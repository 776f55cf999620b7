mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glam::{Vec2, Vec3};
use warpui_geom::logging::{init_logging, LoggingConfig};
use warpui_geom::{CurvedCanvas, ShapeKind};

use config::ProbeConfig;

#[derive(Parser, Debug)]
#[command(name = "warpui-probe", about = "Raycast, curve and tessellate curved UI canvases")]
struct Cli {
    /// JSON file with `shape` and `pointer` sections.
    #[arg(long, global = true, env = "WARPUI_PROBE_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides the configured shape kind.
    #[arg(long, global = true)]
    shape: Option<ShapeArg>,

    /// Overrides the configured angle, in degrees.
    #[arg(long, global = true, allow_hyphen_values = true)]
    angle: Option<f32>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ShapeArg {
    Cylinder,
    CylinderVertical,
    Ring,
    Sphere,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Cylinder => ShapeKind::Cylinder,
            ShapeArg::CylinderVertical => ShapeKind::CylinderVertical,
            ShapeArg::Ring => ShapeKind::Ring,
            ShapeArg::Sphere => ShapeKind::Sphere,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Intersects a canvas-local ray with the canvas.
    Raycast {
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,1")]
        direction: Vec3,
    },
    /// Moves a flat canvas point onto the curved surface.
    Curve {
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        point: Vec2,
    },
    /// Tessellates and curves one quad and reports the mesh size.
    Mesh {
        /// Quad size as `w,h`; defaults to the canvas size.
        #[arg(long, value_parser = parse_vec2)]
        size: Option<Vec2>,
    },
    /// Checks that forward and inverse projection agree over a grid.
    Sweep {
        #[arg(long, default_value_t = 17)]
        steps: u32,
        /// Sweep every shape kind instead of the configured one.
        #[arg(long)]
        all: bool,
    },
    /// Replays a JSON array of `{origin, direction, pressed}` samples.
    Track { samples: PathBuf },
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got `{s}`"));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|e| format!("`{part}`: {e}"))?;
    }
    Ok(out)
}

fn parse_vec2(s: &str) -> Result<Vec2, String> {
    parse_floats::<2>(s).map(Vec2::from_array)
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_floats::<3>(s).map(Vec3::from_array)
}

/// `-v` flags override `RUST_LOG` for both crates; without them `RUST_LOG` applies.
fn logging_config(verbose: u8) -> LoggingConfig {
    let level = match verbose {
        0 => return LoggingConfig::default(),
        1 => "debug",
        _ => "trace",
    };
    LoggingConfig::with_filter(format!("warn,warpui_geom={level},warpui_probe={level}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(logging_config(cli.verbose));

    let mut cfg = match &cli.config {
        Some(path) => ProbeConfig::load(path)?,
        None => ProbeConfig::default(),
    };
    if let Some(shape) = cli.shape {
        cfg.shape.kind = shape.into();
    }
    if let Some(angle) = cli.angle {
        cfg.shape.angle = angle;
    }

    let canvas = CurvedCanvas::new(cfg.shape);
    log::debug!("shape: {:?}", canvas.descriptor());

    match cli.command {
        Command::Raycast { origin, direction } => commands::raycast(&canvas, origin, direction),
        Command::Curve { point } => {
            commands::curve(&canvas, point);
            Ok(())
        }
        Command::Mesh { size } => commands::mesh(&canvas, size),
        Command::Sweep { steps, all } => {
            if !all {
                return commands::sweep(&canvas, steps);
            }
            let mut failed = Vec::new();
            for kind in ShapeKind::ALL {
                let canvas = CurvedCanvas::new(cfg.shape.with_kind(kind));
                if let Err(err) = commands::sweep(&canvas, steps) {
                    log::error!("{err:#}");
                    failed.push(kind.name());
                }
            }
            if failed.is_empty() {
                Ok(())
            } else {
                anyhow::bail!("sweep failed for: {}", failed.join(", "))
            }
        }
        Command::Track { samples } => {
            commands::track(&canvas, cfg.pointer, &samples).context("tracking pointer samples")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn vectors_parse_with_spaces_and_negatives() {
        assert_eq!(parse_vec3("1, -2,3.5").unwrap(), Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(parse_vec2("-4,0").unwrap(), Vec2::new(-4.0, 0.0));
        assert!(parse_vec2("1,2,3").is_err());
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn global_overrides_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "warpui-probe",
            "raycast",
            "--origin",
            "0,0,-100",
            "--shape",
            "cylinder-vertical",
            "--angle",
            "-45",
        ])
        .unwrap();
        assert!(matches!(cli.shape, Some(ShapeArg::CylinderVertical)));
        assert_eq!(cli.angle, Some(-45.0));
        assert!(matches!(cli.command, Command::Raycast { .. }));
    }

    #[test]
    fn verbosity_selects_crate_filters() {
        assert!(logging_config(0).filter.is_none());
        assert_eq!(
            logging_config(1).filter.as_deref(),
            Some("warn,warpui_geom=debug,warpui_probe=debug")
        );
        assert_eq!(
            logging_config(3).filter.as_deref(),
            Some("warn,warpui_geom=trace,warpui_probe=trace")
        );
    }
}
