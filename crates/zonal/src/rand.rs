//! Random zone grids and sample clouds (seeded, replayable).
//!
//! Purpose
//! - Small deterministic generators for benches, property tests, and the CLI
//!   `synth` command.
//!
//! Model
//! - Zones: an `nx × ny` lattice of cells of side `cell`; each cell holds one
//!   axis-aligned rectangle anchored at the cell's lower-left corner whose
//!   width and height shrink by a random fraction up to `size_jitter`. Zones
//!   never overlap.
//! - Samples: positions uniform in a box, values uniform in a range.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};

use crate::geom2::Bounds2;
use crate::record::{Feature, Geometry};
use crate::zone::Sample;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Zone-grid generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub nx: usize,
    pub ny: usize,
    /// Lower-left corner of cell (0, 0).
    pub origin: Vector2<f64>,
    /// Cell side length in degrees.
    pub cell: f64,
    /// Maximum relative shrink of each side. Clamped to [0, 0.95].
    pub size_jitter: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            nx: 4,
            ny: 4,
            origin: Vector2::zeros(),
            cell: 0.01,
            size_jitter: 0.5,
        }
    }
}

impl GridCfg {
    /// Box covering every cell of the grid.
    pub fn extent(&self) -> Bounds2 {
        Bounds2 {
            min: self.origin,
            max: self.origin + Vector2::new(self.nx as f64, self.ny as f64) * self.cell,
        }
    }
}

/// Draw a grid of rectangular zone records, row-major from the origin.
///
/// Each feature carries `row` and `col` properties.
pub fn draw_zone_grid(cfg: GridCfg, tok: ReplayToken) -> Vec<Feature> {
    let mut rng = tok.to_std_rng();
    let jitter = cfg.size_jitter.clamp(0.0, 0.95);
    let cell = cfg.cell.abs().max(1e-12);
    let mut out = Vec::with_capacity(cfg.nx * cfg.ny);
    for row in 0..cfg.ny {
        for col in 0..cfg.nx {
            let x0 = cfg.origin.x + col as f64 * cell;
            let y0 = cfg.origin.y + row as f64 * cell;
            let w = cell * (1.0 - jitter * rng.gen::<f64>());
            let h = cell * (1.0 - jitter * rng.gen::<f64>());
            let mut props = Map::new();
            props.insert("row".into(), Value::from(row));
            props.insert("col".into(), Value::from(col));
            out.push(
                Feature::new(Geometry::rectangle(x0, y0, x0 + w, y0 + h)).with_properties(props),
            );
        }
    }
    out
}

/// Sample-cloud generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub bounds: Bounds2,
    pub value_min: f64,
    pub value_max: f64,
}

/// Draw `cfg.count` samples uniformly over `cfg.bounds`.
pub fn draw_samples(cfg: SampleCfg, tok: ReplayToken) -> Vec<Sample> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = if cfg.value_min <= cfg.value_max {
        (cfg.value_min, cfg.value_max)
    } else {
        (cfg.value_max, cfg.value_min)
    };
    (0..cfg.count)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            let t: f64 = rng.gen();
            Sample::new(
                cfg.bounds.min.x + u * cfg.bounds.width(),
                cfg.bounds.min.y + v * cfg.bounds.height(),
                lo + t * (hi - lo),
            )
        })
        .collect()
}
