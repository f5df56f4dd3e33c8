//! Tolerances and bounding boxes.
//!
//! - `RingCfg`: closure tolerance used when validating a ring.
//! - `Bounds2`: closed axis-aligned box used for fast rejection.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::ring::Ring;
use crate::cfg::{CLOSE_ATOL, CLOSE_RTOL};

/// Ring validation configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingCfg {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            rtol: CLOSE_RTOL,
            atol: CLOSE_ATOL,
        }
    }
}

impl RingCfg {
    /// `|a - b| <= atol + rtol * |b|`
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

/// Closed axis-aligned box `min <= p <= max` (componentwise).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// Smallest box holding all `points`; `None` for an empty slice.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        Some(Self::enclose(first, &points[1..]))
    }

    /// Box of a validated ring (never empty).
    pub fn from_ring(ring: &Ring) -> Self {
        Self::enclose(ring[0], &ring[1..])
    }

    fn enclose(first: Vector2<f64>, rest: &[Vector2<f64>]) -> Self {
        rest.iter().fold(
            Bounds2 {
                min: first,
                max: first,
            },
            |acc, p| Bounds2 {
                min: acc.min.inf(p),
                max: acc.max.sup(p),
            },
        )
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
