//! Read-only extraction of closed polygons as coordinate rings.

use serde::{Deserialize, Serialize};

use crate::model::{Plot, Polygon, MIN_CLOSED_POINTS};
use crate::plot_store::PlotStore;

/// Ordered `[x, y]` pairs of a ring without the closing duplicate.
pub type Ring = Vec<[f64; 2]>;

/// Boundary and obstacle rings of the drawn polygons.
///
/// The first polygon with at least three points, in insertion order, is the
/// boundary. Every later polygon with at least three points is an obstacle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonRings {
    pub boundary: Option<Ring>,
    pub obstacles: Vec<Ring>,
}

impl PolygonRings {
    pub fn from_store(store: &PlotStore) -> Self {
        let mut rings = store
            .iter()
            .filter_map(Plot::as_polygon)
            .filter(|polygon| polygon.len() >= MIN_CLOSED_POINTS)
            .map(polygon_ring)
            .filter(|ring| !ring.is_empty());

        let boundary = rings.next();
        let obstacles: Vec<Ring> = rings.collect();
        tracing::debug!(
            "Extracted boundary: {}, obstacles: {}",
            boundary.is_some(),
            obstacles.len()
        );

        Self {
            boundary,
            obstacles,
        }
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary.is_some()
    }
}

/// Coordinates of a polygon with a trailing duplicate of the first point
/// stripped.
pub fn polygon_ring(polygon: &Polygon) -> Ring {
    let mut ring: Ring = polygon
        .points()
        .iter()
        .map(|p| [p.x(), p.y()])
        .collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}
