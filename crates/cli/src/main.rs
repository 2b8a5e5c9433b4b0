use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polars::df;
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use capcover::cover::{cap_geometry, CoverCfg};
use capcover::placement::{cap_centers, pole, rotation_aligning};
use capcover::Mat3;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Cap covering experiment runner")]
struct Cmd {
    /// Optional experiment tag; propagated to provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve cap geometry over a list of cap counts and write a CSV table
    Sweep {
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, value_delimiter = ',', default_values_t = [2usize, 4, 6, 8, 12, 20])]
        caps: Vec<usize>,
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
        #[arg(long)]
        out: String,
    },
    /// Emit per-cap centers and patch rotations as JSON for the renderer
    Placements {
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        caps: usize,
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
        #[arg(long)]
        out: String,
    },
    /// Convert a sweep CSV into a small publishable JSON series
    Figure {
        #[arg(long)]
        from: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sweep {
            radius,
            caps,
            tolerance,
            out,
        } => sweep(radius, &caps, tolerance, &out, cmd.tag),
        Action::Placements {
            radius,
            caps,
            tolerance,
            out,
        } => placements(radius, caps, tolerance, &out, cmd.tag),
        Action::Figure { from, out } => figure(&from, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn sweep(radius: f64, caps: &[usize], tolerance: f64, out: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(radius, ?caps, tolerance, out, "sweep");
    let cfg = CoverCfg { tolerance };

    let mut counts: Vec<i64> = Vec::with_capacity(caps.len());
    let mut heights: Vec<f64> = Vec::with_capacity(caps.len());
    let mut phi_degs: Vec<f64> = Vec::with_capacity(caps.len());
    let mut arc_lengths: Vec<f64> = Vec::with_capacity(caps.len());
    for &n in caps {
        let g = cap_geometry(radius, n, cfg);
        tracing::info!(
            num_caps = n,
            height = g.height,
            phi_deg = g.half_angle.to_degrees(),
            arc_length = g.arc_length,
            "sweep_row"
        );
        counts.push(n as i64);
        heights.push(g.height);
        phi_degs.push(g.half_angle.to_degrees());
        arc_lengths.push(g.arc_length);
    }

    let mut frame = df!(
        "num_caps" => counts,
        "height" => heights,
        "phi_deg" => phi_degs,
        "arc_length" => arc_lengths,
    )?;

    ensure_parent_dir(out)?;
    let file = File::create(out).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(file).finish(&mut frame)?;

    provenance::write_sidecar(
        out,
        provenance::Payload::new(
            serde_json::json!({
                "radius": radius,
                "caps": caps,
                "tolerance": tolerance
            }),
            tag,
        ),
    )?;
    Ok(())
}

/// Per-cap payload for the external renderer: where the cap sits and the
/// rotation to apply to the canonical polar patch.
#[derive(Serialize)]
struct CapRecord {
    center: [f64; 3],
    rotation: [[f64; 3]; 3],
}

#[derive(Serialize)]
struct PlacementArtifact {
    radius: f64,
    num_caps: usize,
    height: f64,
    half_angle: f64,
    arc_length: f64,
    caps: Vec<CapRecord>,
}

fn placements(
    radius: f64,
    num_caps: usize,
    tolerance: f64,
    out: &str,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(radius, num_caps, tolerance, out, "placements");
    let g = cap_geometry(radius, num_caps, CoverCfg { tolerance });
    let centers = cap_centers(radius, num_caps)?;

    let caps = centers
        .iter()
        .map(|d| CapRecord {
            center: [d.x, d.y, d.z],
            rotation: matrix_rows(&rotation_aligning(pole(), *d)),
        })
        .collect();
    let artifact = PlacementArtifact {
        radius,
        num_caps,
        height: g.height,
        half_angle: g.half_angle,
        arc_length: g.arc_length,
        caps,
    };

    ensure_parent_dir(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&artifact)?)
        .with_context(|| format!("writing {out}"))?;

    provenance::write_sidecar(
        out,
        provenance::Payload::new(
            serde_json::json!({
                "radius": radius,
                "num_caps": num_caps,
                "tolerance": tolerance
            }),
            tag,
        ),
    )?;
    Ok(())
}

fn figure(from: &str, out: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(from, out, "figure");
    let mut frame = LazyCsvReader::new(from)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    tracing::info!(rows = frame.height(), cols = frame.width(), "sweep_csv_shape");

    let mut buf = Vec::new();
    JsonWriter::new(&mut buf)
        .with_json_format(JsonFormat::Json)
        .finish(&mut frame)?;

    ensure_parent_dir(out)?;
    std::fs::write(out, buf).with_context(|| format!("writing {out}"))?;

    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({ "from": from }), tag),
    )?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "tag": tag,
        "capcover_version": capcover::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn matrix_rows(m: &Mat3<f64>) -> [[f64; 3]; 3] {
    let mut rows = [[0.0; 3]; 3];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = m[(r, c)];
        }
    }
    rows
}

fn ensure_parent_dir(out: &str) -> Result<()> {
    if let Some(parent) = Path::new(out).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
