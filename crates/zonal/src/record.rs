//! GeoJSON-shaped zone records.
//!
//! The core only accepts already-parsed records; reading files is the caller's
//! job. Positions are `[lon, lat, ...]` arrays; entries past the second are
//! ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geometry object, tagged by its GeoJSON `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

impl Geometry {
    /// GeoJSON type name.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }

    /// Single-ring polygon from `(lon, lat)` pairs. The ring is taken as given
    /// (no closing vertex is appended).
    pub fn polygon(ring: &[(f64, f64)]) -> Self {
        let ring = ring.iter().map(|&(x, y)| vec![x, y]).collect();
        Geometry::Polygon {
            coordinates: vec![ring],
        }
    }

    /// Closed, counterclockwise axis-aligned rectangle.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::polygon(&[
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
            (min_x, min_y),
        ])
    }
}

/// A GeoJSON `Feature` carrying one zone geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            properties: None,
            geometry,
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }
}

impl From<Geometry> for Feature {
    fn from(geometry: Geometry) -> Self {
        Feature::new(geometry)
    }
}
