//! Zones: a validated rectangular ring plus the samples that fall inside it.
//!
//! Purpose
//! - Validate a polygon record exactly once, then answer area and containment
//!   queries against the stored ring.
//! - Accumulate density samples across `associate` calls and reduce them to a
//!   mean on demand.
//!
//! Code cross-refs: `geom2::{validate_ring, ring_area, contains_point}`, `record::Feature`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::geom2::{contains_point, ring_area, validate_ring, Bounds2, Ring, RingCfg};
use crate::record::{Feature, Geometry};

/// One density reading at a (lon, lat) position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub coord: Vector2<f64>,
    pub value: f64,
}

impl Sample {
    #[inline]
    pub fn new(lon: f64, lat: f64, value: f64) -> Self {
        Self {
            coord: Vector2::new(lon, lat),
            value,
        }
    }
}

/// Validated rectangular zone with its accumulated samples.
///
/// Invariants:
/// - `ring` is closed exactly (`ring[4] == ring[0]`).
/// - `bounds` is the bounding box of `ring`.
#[derive(Clone, Debug)]
pub struct Zone {
    ring: Ring,
    bounds: Bounds2,
    area: f64,
    properties: Option<Map<String, Value>>,
    samples: Vec<Sample>,
}

impl Zone {
    /// Validate `feature` with default tolerances.
    pub fn new(feature: &Feature) -> Result<Self, ValidationError> {
        Self::with_cfg(feature, RingCfg::default())
    }

    pub fn with_cfg(feature: &Feature, cfg: RingCfg) -> Result<Self, ValidationError> {
        let mut zone = Self::from_geometry_cfg(&feature.geometry, cfg)?;
        zone.properties = feature.properties.clone();
        Ok(zone)
    }

    /// Validate a bare geometry (no feature properties).
    pub fn from_geometry(geometry: &Geometry) -> Result<Self, ValidationError> {
        Self::from_geometry_cfg(geometry, RingCfg::default())
    }

    fn from_geometry_cfg(geometry: &Geometry, cfg: RingCfg) -> Result<Self, ValidationError> {
        let ring = validate_ring(geometry, cfg)?;
        Ok(Self {
            area: ring_area(&ring),
            bounds: Bounds2::from_ring(&ring),
            ring,
            properties: None,
            samples: Vec::new(),
        })
    }

    /// Planar area in squared coordinate degrees.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds2 {
        &self.bounds
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref()
    }

    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        contains_point(&self.ring, &self.bounds, p)
    }

    /// One flag per input point, in order.
    pub fn contains(&self, points: &[Vector2<f64>]) -> Vec<bool> {
        points.iter().map(|&p| self.contains_point(p)).collect()
    }

    /// Append every sample whose coordinate lies in the zone; returns how many
    /// were appended. No deduplication across calls.
    pub fn associate(&mut self, samples: &[Sample]) -> usize {
        let before = self.samples.len();
        let (ring, bounds) = (&self.ring, &self.bounds);
        self.samples.extend(
            samples
                .iter()
                .filter(|s| contains_point(ring, bounds, s.coord))
                .copied(),
        );
        let added = self.samples.len() - before;
        tracing::trace!(offered = samples.len(), added, total = self.samples.len(), "associate");
        added
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn clear_samples(&mut self) {
        self.samples.clear();
    }

    /// Mean sample value, or `None` when nothing has been associated.
    pub fn avg_samples(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(|s| s.value).sum();
        Some(sum / self.samples.len() as f64)
    }
}

impl TryFrom<&Feature> for Zone {
    type Error = ValidationError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        Zone::new(feature)
    }
}

#[cfg(test)]
mod tests;
