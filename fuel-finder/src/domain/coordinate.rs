//! Geographic coordinate and bounding-box types.

/// A (latitude, longitude) pair in decimal degrees.
///
/// Produced only by geocoding; never persisted, recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The axis-aligned rectangle in latitude/longitude space spanned by two
/// coordinate points.
///
/// Itinerary filtering is a containment check against this box, not a
/// corridor-distance test: stations far from the literal path between two
/// cities but inside the box are included. Inherited behavior, preserved
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// Build the box spanned by two endpoints. Order-independent.
    pub fn spanning(a: Coordinate, b: Coordinate) -> Self {
        Self {
            min_lat: a.lat.min(b.lat),
            max_lat: a.lat.max(b.lat),
            min_lon: a.lon.min(b.lon),
            max_lon: a.lon.max(b.lon),
        }
    }

    /// True iff `point` lies within the box, inclusive on all edges.
    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
