//! Planar ring geometry for rectangular zones.
//!
//! Purpose
//! - Validate a polygon record's outer ring once and keep it as a fixed-size,
//!   exactly closed array of `Vector2<f64>`.
//! - Provide the general simple-polygon primitives the zone code needs:
//!   shoelace area and a crossing-number point test.
//!
//! Boundary convention
//! - Half-open: a point on a left or top edge is inside, a point on a right or
//!   bottom edge is outside. Grid tiles therefore partition the plane.
//!
//! Code cross-refs: `zone::Zone`, `alloc::proportional_samples`

mod ring;
mod types;

pub use ring::{
    contains_point, parallelogram_area, ring_area, signed_area, validate_ring, Ring,
};
pub use types::{Bounds2, RingCfg};

#[cfg(test)]
mod tests;
