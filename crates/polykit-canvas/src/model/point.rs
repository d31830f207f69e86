use serde::{Deserialize, Serialize};

use polykit_core::constants::POINT_COLOR;

/// An identified 2D coordinate.
///
/// Serves both as a standalone point plot and as a vertex inside polylines
/// and polygons. Any coordinate or color change marks the point dirty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    id: String,
    x: f64,
    y: f64,
    color: String,
    deletable: bool,
    dirty: bool,
}

impl PlotPoint {
    /// Creates a deletable point with the default point color.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        tracing::debug!("Created point at ({}, {}) with id: {}", x, y, id);
        Self {
            id,
            x,
            y,
            color: POINT_COLOR.to_string(),
            deletable: true,
            dirty: true,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_deletable(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_deletable(&self) -> bool {
        self.deletable
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_x(&mut self, x: f64) {
        tracing::debug!("Setting x of {} from {} to {}", self.id, self.x, x);
        self.x = x;
        self.dirty = true;
    }

    pub fn set_y(&mut self, y: f64) {
        tracing::debug!("Setting y of {} from {} to {}", self.id, self.y, y);
        self.y = y;
        self.dirty = true;
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.dirty = true;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.dirty = true;
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.dirty = true;
    }

    /// Deletability is metadata only and does not trigger a re-render.
    pub fn set_deletable(&mut self, deletable: bool) {
        self.deletable = deletable;
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Euclidean distance from this point to `(x, y)`.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    /// True when both coordinates equal the other point's.
    pub fn same_position(&self, other: &PlotPoint) -> bool {
        self.x == other.x && self.y == other.y
    }
}
