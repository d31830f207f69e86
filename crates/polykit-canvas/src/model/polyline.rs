use serde::{Deserialize, Serialize};

use polykit_core::constants::POLYLINE_COLOR;
use polykit_core::CanvasError;

use super::PlotPoint;

/// An open chain of points in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    id: String,
    color: String,
    points: Vec<PlotPoint>,
    dirty: bool,
}

impl Polyline {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_points(id, Vec::new())
    }

    pub fn with_points(id: impl Into<String>, points: Vec<PlotPoint>) -> Self {
        let id = id.into();
        tracing::debug!("Created polyline with id: {}, {} points", id, points.len());
        Self {
            id,
            color: POLYLINE_COLOR.to_string(),
            points,
            dirty: true,
        }
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

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Appends a point to the end of the chain.
    pub fn add_point(&mut self, point: PlotPoint) {
        tracing::debug!("Adding point {} to polyline {}", point.id(), self.id);
        self.points.push(point);
        self.dirty = true;
    }

    /// Removes the first point with a matching id and returns it.
    pub fn take_point(&mut self, point_id: &str) -> Result<PlotPoint, CanvasError> {
        let index = self
            .points
            .iter()
            .position(|p| p.id() == point_id)
            .ok_or_else(|| CanvasError::PointNotFound {
                plot_id: self.id.clone(),
                point_id: point_id.to_string(),
            })?;

        tracing::debug!("Removing point {} from polyline {}", point_id, self.id);
        let removed = self.points.remove(index);
        self.dirty = true;
        Ok(removed)
    }

    /// Removes a point by id. Returns false (and logs) if it was not found.
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
}
