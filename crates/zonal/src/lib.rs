//! Area-proportional sampling budgets and per-zone density averages.
//!
//! Zones are rectangular polygons over (longitude, latitude) degrees. Areas are
//! planar (squared degrees), not geodetic.
//!
//! Layout
//! - `geom2`: ring validation, shoelace area, point-in-ring test, bounds.
//! - `zone`: `Zone` (validated ring + accumulated samples) and `Sample`.
//! - `alloc`: `proportional_samples` and friends.
//! - `record`: GeoJSON-shaped input records accepted by the core.
//! - `rand`: seeded, replayable generators for zones and sample clouds.
//!
//! API Policy
//! - Breaking changes are fine when they improve clarity; callers live in this
//!   workspace (`crates/cli`).

pub mod alloc;
mod cfg;
pub mod error;
pub mod geom2;
pub mod rand;
pub mod record;
pub mod zone;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use alloc::{allocate_by_area, proportional_samples, proportional_samples_for_zones};
pub use error::ValidationError;
pub use geom2::{Bounds2, RingCfg};
pub use nalgebra::Vector2 as Vec2;
pub use record::{Feature, Geometry};
pub use zone::{Sample, Zone};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::alloc::{
        allocate_by_area, proportional_samples, proportional_samples_for_zones,
    };
    pub use crate::error::ValidationError;
    pub use crate::geom2::{Bounds2, RingCfg};
    pub use crate::rand::{draw_samples, draw_zone_grid, GridCfg, ReplayToken, SampleCfg};
    pub use crate::record::{Feature, Geometry};
    pub use crate::zone::{Sample, Zone};
    pub use nalgebra::Vector2 as Vec2;
}
