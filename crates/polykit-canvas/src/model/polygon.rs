//! Closed point rings with automatic closure.
//!
//! Once a polygon holds three points a synthetic, non-deletable closing
//! point duplicating the first point is appended. While closed, new points
//! are inserted before the closing point so it always stays last.

use serde::{Deserialize, Serialize};

use polykit_core::constants::{CLOSING_POINT_SUFFIX, POLYGON_COLOR};
use polykit_core::CanvasError;

use super::PlotPoint;

/// Minimum point count (closing point included) for a closed ring.
pub const MIN_CLOSED_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    id: String,
    color: String,
    points: Vec<PlotPoint>,
    closed: bool,
    dirty: bool,
}

impl Polygon {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_points(id, Vec::new())
    }

    /// Builds a polygon from vertices, closing it if there are enough.
    pub fn with_points(id: impl Into<String>, points: Vec<PlotPoint>) -> Self {
        let id = id.into();
        tracing::debug!("Created polygon with id: {}, {} points", id, points.len());
        let mut polygon = Self {
            id,
            color: POLYGON_COLOR.to_string(),
            points,
            closed: false,
            dirty: true,
        };
        polygon.ensure_closed();
        polygon
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.dirty = true;
    }

    /// All points, including the closing point when closed.
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// The ring's own vertices, without the closing duplicate.
    pub fn vertices(&self) -> &[PlotPoint] {
        match self.points.last() {
            Some(last) if self.closed && is_closing_point(last) => {
                &self.points[..self.points.len() - 1]
            }
            _ => &self.points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub fn closing_point(&self) -> Option<&PlotPoint> {
        if !self.closed {
            return None;
        }
        self.points.last().filter(|p| is_closing_point(p))
    }

    /// Adds a vertex, keeping the closing point last once closed.
    pub fn add_point(&mut self, point: PlotPoint) {
        if self.closed && self.points.len() >= MIN_CLOSED_POINTS {
            let index = self.points.len() - 1;
            tracing::debug!(
                "Inserting point {} at position {} in closed polygon {}",
                point.id(),
                index,
                self.id
            );
            self.points.insert(index, point);
        } else {
            tracing::debug!("Adding point {} to polygon {}", point.id(), self.id);
            self.points.push(point);
            self.ensure_closed();
        }
        self.dirty = true;
    }

    /// Removes a deletable vertex and re-establishes the closure invariant.
    pub fn take_point(&mut self, point_id: &str) -> Result<PlotPoint, CanvasError> {
        let index = self
            .points
            .iter()
            .position(|p| p.id() == point_id)
            .ok_or_else(|| CanvasError::PointNotFound {
                plot_id: self.id.clone(),
                point_id: point_id.to_string(),
            })?;

        if !self.points[index].is_deletable() {
            return Err(CanvasError::NonDeletablePoint {
                plot_id: self.id.clone(),
                point_id: point_id.to_string(),
            });
        }

        tracing::debug!("Removing point {} from polygon {}", point_id, self.id);
        let removed = self.points.remove(index);

        if self.points.len() < MIN_CLOSED_POINTS {
            self.open();
        } else {
            self.ensure_closed();
        }

        self.dirty = true;
        Ok(removed)
    }

    /// Removes a vertex by id. Returns false (and logs) if it is unknown
    /// or protected.
    pub fn remove_point(&mut self, point_id: &str) -> bool {
        match self.take_point(point_id) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    pub fn point(&self, point_id: &str) -> Option<&PlotPoint> {
        self.points.iter().find(|p| p.id() == point_id)
    }

    fn open(&mut self) {
        if self.closed && self.points.last().is_some_and(is_closing_point) {
            self.points.pop();
        }
        self.closed = false;
    }

    /// Closes the ring at three points and keeps the closing point in step
    /// with the current first vertex.
    fn ensure_closed(&mut self) {
        if self.points.len() < MIN_CLOSED_POINTS {
            return;
        }

        let first = self.points[0].clone();
        let closing_id = format!("{}{}", first.id(), CLOSING_POINT_SUFFIX);

        match self.points.last_mut() {
            Some(last) if self.closed && is_closing_point(last) => {
                if last.id() != closing_id {
                    last.set_id(closing_id);
                }
                if !last.same_position(&first) {
                    last.set_position(first.x(), first.y());
                }
            }
            _ => {
                tracing::debug!("Auto-closing polygon {} by adding closing point", self.id);
                let closing = PlotPoint::new(closing_id, first.x(), first.y())
                    .with_color(first.color())
                    .with_deletable(false);
                self.points.push(closing);
                self.closed = true;
            }
        }
    }
}

fn is_closing_point(point: &PlotPoint) -> bool {
    !point.is_deletable() && point.id().ends_with(CLOSING_POINT_SUFFIX)
}
