use thiserror::Error;

/// Structural problems with a zone polygon record.
///
/// Raised only where a record is validated: `Zone` construction and, through
/// it, `proportional_samples`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("zone geometry must be a Polygon, got {0}")]
    NotPolygon(&'static str),

    #[error("polygon has no outer ring")]
    MissingRing,

    #[error("outer ring must have 5 positions (4 corners + closing), got {0}")]
    VertexCount(usize),

    #[error("position {index} has {len} coordinates, expected at least 2")]
    BadPosition { index: usize, len: usize },

    #[error("position {0} has a non-finite coordinate")]
    NonFinite(usize),

    #[error("ring area is not finite (coordinates out of range)")]
    NonFiniteArea,

    #[error("outer ring is not closed: first ({first_x}, {first_y}) != last ({last_x}, {last_y})")]
    NotClosed {
        first_x: f64,
        first_y: f64,
        last_x: f64,
        last_y: f64,
    },
}
