use nalgebra::Vector2;

use super::types::{Bounds2, RingCfg};
use crate::cfg::RING_LEN;
use crate::error::ValidationError;
use crate::record::Geometry;

/// Validated outer ring: four corners plus a closing vertex equal to the first.
pub type Ring = [Vector2<f64>; RING_LEN];

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Check a geometry against the rectangular-zone rules and return its outer ring.
///
/// Order of checks: kind, ring presence, vertex count, per-position shape,
/// closure, finite area. The returned ring's last vertex is set to the first exactly.
pub fn validate_ring(geometry: &Geometry, cfg: RingCfg) -> Result<Ring, ValidationError> {
    let rings = match geometry {
        Geometry::Polygon { coordinates } => coordinates,
        other => return Err(ValidationError::NotPolygon(other.kind())),
    };
    let outer = rings.first().ok_or(ValidationError::MissingRing)?;
    if outer.len() != RING_LEN {
        return Err(ValidationError::VertexCount(outer.len()));
    }
    let mut ring: Ring = [Vector2::zeros(); RING_LEN];
    for (index, pos) in outer.iter().enumerate() {
        if pos.len() < 2 {
            return Err(ValidationError::BadPosition {
                index,
                len: pos.len(),
            });
        }
        if !(pos[0].is_finite() && pos[1].is_finite()) {
            return Err(ValidationError::NonFinite(index));
        }
        ring[index] = Vector2::new(pos[0], pos[1]);
    }
    let (first, last) = (ring[0], ring[RING_LEN - 1]);
    if !(cfg.is_close(last.x, first.x) && cfg.is_close(last.y, first.y)) {
        return Err(ValidationError::NotClosed {
            first_x: first.x,
            first_y: first.y,
            last_x: last.x,
            last_y: last.y,
        });
    }
    ring[RING_LEN - 1] = first;
    if !signed_area(&ring).is_finite() {
        return Err(ValidationError::NonFiniteArea);
    }
    Ok(ring)
}

/// Shoelace sum over consecutive vertex pairs of a closed ring.
/// Positive for counterclockwise rings.
///
/// Cross terms use offsets from the first vertex; the result is invariant
/// under translation of the ring.
pub fn signed_area(ring: &[Vector2<f64>]) -> f64 {
    let Some(&origin) = ring.first() else {
        return 0.0;
    };
    0.5 * ring
        .windows(2)
        .map(|w| parallelogram_area(w[0] - origin, w[1] - origin))
        .sum::<f64>()
}

/// Unsigned planar area enclosed by a closed ring.
#[inline]
pub fn ring_area(ring: &[Vector2<f64>]) -> f64 {
    signed_area(ring).abs()
}

/// Crossing-number test of `p` against a closed ring, after a bounding-box
/// rejection.
///
/// An edge counts when it straddles the horizontal line through `p` with the
/// half-open rule `vertex.y >= p.y`, and the crossing lies strictly right of `p`.
pub fn contains_point(ring: &[Vector2<f64>], bounds: &Bounds2, p: Vector2<f64>) -> bool {
    if !bounds.contains(p) {
        return false;
    }
    let mut inside = false;
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        if (a.y >= p.y) != (b.y >= p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}
