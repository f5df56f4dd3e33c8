//! File loading and writing for the CLI.
//!
//! - Zones: GeoJSON `FeatureCollection` of Polygon features.
//! - Samples: CSV (or Parquet, by extension) with `lon`, `lat`, `value` columns.

use anyhow::{bail, Context, Result};
use polars::df;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use zonal::{Feature, Sample};

/// GeoJSON `FeatureCollection` holding zone features.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

pub fn read_zones(path: &Path) -> Result<Vec<Feature>> {
    let raw = fs::read(path).with_context(|| format!("reading zones {}", path.display()))?;
    let fc: FeatureCollection = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing GeoJSON {}", path.display()))?;
    tracing::info!(path = %path.display(), zones = fc.features.len(), "zones_loaded");
    Ok(fc.features)
}

pub fn write_zones(path: &Path, features: Vec<Feature>) -> Result<()> {
    let fc = FeatureCollection { features };
    write_json(path, &serde_json::to_value(&fc)?)
}

pub fn read_samples(path: &Path) -> Result<Vec<Sample>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading samples {}", path.display()))?;
    let lon = f64_column(&df, "lon")?;
    let lat = f64_column(&df, "lat")?;
    let value = f64_column(&df, "value")?;
    let mut out = Vec::with_capacity(df.height());
    for (row, ((x, y), v)) in lon.into_iter().zip(lat).zip(value).enumerate() {
        match (x, y, v) {
            (Some(x), Some(y), Some(v)) => out.push(Sample::new(x, y, v)),
            _ => bail!("{}: row {row} has a missing lon/lat/value", path.display()),
        }
    }
    tracing::info!(path = %path.display(), samples = out.len(), "samples_loaded");
    Ok(out)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    Ok(col.f64()?.into_iter().collect())
}

pub fn write_samples(path: &Path, samples: &[Sample]) -> Result<()> {
    create_parent(path)?;
    let mut df = df!(
        "lon" => samples.iter().map(|s| s.coord.x).collect::<Vec<f64>>(),
        "lat" => samples.iter().map(|s| s.coord.y).collect::<Vec<f64>>(),
        "value" => samples.iter().map(|s| s.value).collect::<Vec<f64>>()
    )?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

pub fn write_json(path: &Path, doc: &serde_json::Value) -> Result<()> {
    create_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
