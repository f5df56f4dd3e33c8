//! Allocate a sample budget over a random zone grid and average a random
//! sample cloud per zone.
//!
//! Usage:
//!   cargo run -p zonal --example grid_budget -- [seed]

use zonal::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let grid = GridCfg {
        nx: 3,
        ny: 2,
        ..GridCfg::default()
    };
    let features = draw_zone_grid(grid, ReplayToken { seed, index: 0 });
    let counts = match proportional_samples(&features, 50) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid zone: {e}");
            return;
        }
    };
    let samples = draw_samples(
        SampleCfg {
            count: 500,
            bounds: grid.extent(),
            value_min: 0.0,
            value_max: 100.0,
        },
        ReplayToken { seed, index: 1 },
    );
    for (f, count) in features.iter().zip(counts) {
        let Ok(mut zone) = Zone::new(f) else { continue };
        zone.associate(&samples);
        let avg = zone
            .avg_samples()
            .map(|a| format!("{a:.2}"))
            .unwrap_or_else(|| "no data".to_string());
        println!(
            "area={:.3e} budget={:>3} samples={:>3} avg={}",
            zone.area(),
            count,
            zone.samples().len(),
            avg
        );
    }
}
