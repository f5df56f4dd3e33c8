//! Fixed constants shared by the ring checks (internal).
//!
//! Policy
//! - Closure tolerances are overridable per call through `RingCfg`; the rest
//!   are fixed because rectangles are the only supported zone shape.

/// Positions in a rectangular ring: four corners plus the closing duplicate.
pub(crate) const RING_LEN: usize = 5;
/// Default relative tolerance for the ring-closure comparison.
pub(crate) const CLOSE_RTOL: f64 = 1e-5;
/// Default absolute tolerance for the ring-closure comparison.
pub(crate) const CLOSE_ATOL: f64 = 1e-8;
