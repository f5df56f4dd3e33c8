use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zonal::rand::{draw_samples, draw_zone_grid, GridCfg, ReplayToken, SampleCfg};
use zonal::{proportional_samples_for_zones, Feature, Vec2, Zone};

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "zonal")]
#[command(about = "Area-proportional sample budgets and zone density averages")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample budget per zone, proportional to zone area
    Allocate {
        /// GeoJSON FeatureCollection of rectangular Polygon zones
        #[arg(long)]
        zones: PathBuf,
        /// Budget of the largest zone
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        max_samples: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Associate samples with zones and write per-zone averages
    Average {
        #[arg(long)]
        zones: PathBuf,
        /// CSV or Parquet table with `lon`, `lat`, `value` columns
        #[arg(long)]
        samples: PathBuf,
        /// Also report each zone's budget
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_samples: Option<u32>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a random zone grid and a random sample table
    Synth {
        #[arg(long, default_value_t = 4)]
        nx: usize,
        #[arg(long, default_value_t = 4)]
        ny: usize,
        /// Cell side in degrees
        #[arg(long, default_value_t = 0.01)]
        cell: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, default_value_t = 0.5)]
        size_jitter: f64,
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        value_min: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        value_max: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        zones_out: PathBuf,
        #[arg(long)]
        samples_out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Allocate {
            zones,
            max_samples,
            out,
        } => allocate(&zones, max_samples, &out, cmd.tag).map(|_| ()),
        Action::Average {
            zones,
            samples,
            max_samples,
            out,
        } => average(&zones, &samples, max_samples, &out, cmd.tag).map(|_| ()),
        Action::Synth {
            nx,
            ny,
            cell,
            lon,
            lat,
            size_jitter,
            samples,
            value_min,
            value_max,
            seed,
            zones_out,
            samples_out,
        } => {
            let grid = GridCfg {
                nx,
                ny,
                origin: Vec2::new(lon, lat),
                cell,
                size_jitter,
            };
            let cloud = SampleCfg {
                count: samples,
                bounds: grid.extent(),
                value_min,
                value_max,
            };
            synth(grid, cloud, seed, &zones_out, &samples_out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

/// Validate every feature, naming the first bad one.
fn build_zones(features: &[Feature]) -> Result<Vec<Zone>> {
    features
        .iter()
        .enumerate()
        .map(|(i, f)| Zone::new(f).with_context(|| format!("zone {i} is invalid")))
        .collect()
}

fn allocate(zones: &Path, max_samples: u32, out: &Path, tag: Option<String>) -> Result<Vec<u32>> {
    tracing::info!(zones = %zones.display(), max_samples, out = %out.display(), tag = ?tag, "allocate");
    let zs = build_zones(&io::read_zones(zones)?)?;
    let counts = proportional_samples_for_zones(&zs, max_samples);
    io::write_json(out, &json!({ "samples": counts }))?;
    let params = json!({
        "zones": zones.to_string_lossy(),
        "max_samples": max_samples,
    });
    write_sidecar(out, Payload::new("allocate", params).tagged(tag))?;
    tracing::info!(
        zones = counts.len(),
        total = counts.iter().map(|&c| u64::from(c)).sum::<u64>(),
        "allocated"
    );
    Ok(counts)
}

#[derive(Debug, Serialize)]
struct ZoneSummary {
    index: usize,
    properties: Option<Map<String, Value>>,
    area: f64,
    budget: Option<u32>,
    count: usize,
    avg: Option<f64>,
}

fn average(
    zones: &Path,
    samples: &Path,
    max_samples: Option<u32>,
    out: &Path,
    tag: Option<String>,
) -> Result<Vec<ZoneSummary>> {
    tracing::info!(zones = %zones.display(), samples = %samples.display(), out = %out.display(), tag = ?tag, "average");
    let mut zs = build_zones(&io::read_zones(zones)?)?;
    let cloud = io::read_samples(samples)?;
    let budgets = max_samples.map(|m| proportional_samples_for_zones(&zs, m));
    for z in &mut zs {
        z.associate(&cloud);
    }
    let unassigned = cloud
        .iter()
        .filter(|s| !zs.iter().any(|z| z.contains_point(s.coord)))
        .count();
    let summaries: Vec<ZoneSummary> = zs
        .iter()
        .enumerate()
        .map(|(index, z)| ZoneSummary {
            index,
            properties: z.properties().cloned(),
            area: z.area(),
            budget: budgets.as_ref().map(|b| b[index]),
            count: z.samples().len(),
            avg: z.avg_samples(),
        })
        .collect();
    let empty = summaries.iter().filter(|s| s.avg.is_none()).count();
    io::write_json(
        out,
        &json!({
            "zones": summaries,
            "samples_total": cloud.len(),
            "samples_unassigned": unassigned,
        }),
    )?;
    let params = json!({
        "zones": zones.to_string_lossy(),
        "samples": samples.to_string_lossy(),
        "max_samples": max_samples,
    });
    write_sidecar(out, Payload::new("average", params).tagged(tag))?;
    if unassigned > 0 {
        tracing::warn!(unassigned, "samples outside every zone");
    }
    tracing::info!(zones = summaries.len(), empty, "averaged");
    Ok(summaries)
}

fn synth(
    grid: GridCfg,
    cloud: SampleCfg,
    seed: u64,
    zones_out: &Path,
    samples_out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(nx = grid.nx, ny = grid.ny, samples = cloud.count, seed, "synth");
    let features = draw_zone_grid(grid, ReplayToken { seed, index: 0 });
    let samples = draw_samples(cloud, ReplayToken { seed, index: 1 });
    io::write_zones(zones_out, features)?;
    io::write_samples(samples_out, &samples)?;
    let params = json!({
        "nx": grid.nx,
        "ny": grid.ny,
        "origin": [grid.origin.x, grid.origin.y],
        "cell": grid.cell,
        "size_jitter": grid.size_jitter,
        "samples": cloud.count,
        "value_range": [cloud.value_min, cloud.value_max],
        "seed": seed,
    });
    write_sidecar(zones_out, Payload::new("synth", params.clone()).tagged(tag.clone()))?;
    write_sidecar(samples_out, Payload::new("synth", params).tagged(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "zonal_version": zonal::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
