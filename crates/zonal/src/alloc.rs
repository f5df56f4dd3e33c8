//! Area-proportional sample budgets.
//!
//! The largest zone gets `max_samples`; every other zone gets
//! `round(area / max_area * max_samples)`, rounded half away from zero and
//! never below 1. Output order follows input order.

use crate::error::ValidationError;
use crate::geom2::{ring_area, validate_ring, RingCfg};
use crate::record::Feature;
use crate::zone::Zone;

/// Validate every record and allocate samples by area.
///
/// Fails on the first invalid record; nothing is returned for the rest.
pub fn proportional_samples(
    zones: &[Feature],
    max_samples: u32,
) -> Result<Vec<u32>, ValidationError> {
    let areas = zones
        .iter()
        .map(|f| validate_ring(&f.geometry, RingCfg::default()).map(|r| ring_area(&r)))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(allocate_by_area(&areas, max_samples))
}

/// Allocation over already-validated zones.
pub fn proportional_samples_for_zones(zones: &[Zone], max_samples: u32) -> Vec<u32> {
    let areas: Vec<f64> = zones.iter().map(Zone::area).collect();
    allocate_by_area(&areas, max_samples)
}

/// Scale non-negative `areas` against their maximum.
///
/// A zero maximum (all areas zero) counts as a tie: every entry gets
/// `max_samples`.
pub fn allocate_by_area(areas: &[f64], max_samples: u32) -> Vec<u32> {
    let max_area = areas.iter().copied().fold(0.0_f64, f64::max);
    let budget = f64::from(max_samples);
    let counts: Vec<u32> = areas
        .iter()
        .map(|&area| {
            let ratio = if max_area > 0.0 { area / max_area } else { 1.0 };
            // ratio <= 1, so the cast cannot exceed max_samples
            ((ratio * budget).round() as u32).max(1)
        })
        .collect();
    tracing::debug!(zones = areas.len(), max_area, max_samples, "allocated samples by area");
    counts
}
