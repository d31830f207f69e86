//! Editor controller.
//!
//! Holds the drawing mode and the in-progress multi-point shape, and turns
//! "add a point here" / "delete near here" requests into plot store edits.

use polykit_core::constants::{HISTORY_LIMIT, POINT_COLOR, POLYGON_COLOR, POLYLINE_COLOR};
use serde::{Deserialize, Serialize};

use crate::model::{generate_id, Plot, PlotKind, PlotPoint};
use crate::plot_store::PlotStore;

/// Tunables for an [`Editor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    pub point_color: String,
    pub polyline_color: String,
    pub polygon_color: String,
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_color: POINT_COLOR.to_string(),
            polyline_color: POLYLINE_COLOR.to_string(),
            polygon_color: POLYGON_COLOR.to_string(),
            history_limit: HISTORY_LIMIT,
        }
    }
}

impl EditorOptions {
    pub fn color_for(&self, kind: PlotKind) -> &str {
        match kind {
            PlotKind::Point => &self.point_color,
            PlotKind::Polyline => &self.polyline_color,
            PlotKind::Polygon => &self.polygon_color,
        }
    }
}

/// A hit found by [`Editor::find_point_near`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointHit {
    /// A standalone point plot.
    Plot { plot_id: String },
    /// A vertex of a polyline or polygon.
    Vertex { plot_id: String, point_id: String },
}

#[derive(Debug)]
pub struct Editor {
    store: PlotStore,
    plot_type: PlotKind,
    current_plot_id: Option<String>,
    options: EditorOptions,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            store: PlotStore::with_history_limit(options.history_limit),
            plot_type: PlotKind::default(),
            current_plot_id: None,
            options,
        }
    }

    pub fn store(&self) -> &PlotStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PlotStore {
        &mut self.store
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn plot_type(&self) -> PlotKind {
        self.plot_type
    }

    /// Switches the drawing mode. Always ends the in-progress shape.
    pub fn set_plot_type(&mut self, kind: PlotKind) {
        tracing::debug!("Setting plot type to {}", kind);
        self.plot_type = kind;
        self.current_plot_id = None;
    }

    pub fn current_plot_id(&self) -> Option<&str> {
        self.current_plot_id.as_deref()
    }

    /// Ends the in-progress shape so the next click starts a new one.
    pub fn clear_current_plot(&mut self) {
        tracing::debug!("Clearing current plot");
        self.current_plot_id = None;
    }

    /// Adds a point at world coordinates `(x, y)` according to the current
    /// mode and returns the id of the plot that received it.
    pub fn add_point(&mut self, x: f64, y: f64) -> String {
        tracing::debug!("Adding point at ({}, {})", x, y);
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!("Adding point with non-finite coordinates ({}, {})", x, y);
        }

        let kind = self.plot_type;
        if kind == PlotKind::Point {
            let id = generate_id(kind.id_prefix());
            let point =
                PlotPoint::new(id.clone(), x, y).with_color(self.options.color_for(kind));
            self.store.add_plot(point);
            tracing::debug!("Created new point plot: {}", id);
            return id;
        }

        let plot_id = self.current_shape_id(kind);
        let color = self
            .store
            .get_plot(&plot_id)
            .map(|plot| plot.color().to_string())
            .unwrap_or_else(|| self.options.color_for(kind).to_string());
        let point_id = generate_id(PlotKind::Point.id_prefix());
        let point = PlotPoint::new(point_id, x, y).with_color(color);
        self.store.edit_plot(&plot_id, |plot| plot.add_vertex(point));
        plot_id
    }

    /// Returns the id of the shape being extended, creating one when there is
    /// none or when the remembered plot no longer exists.
    fn current_shape_id(&mut self, kind: PlotKind) -> String {
        let live = self.current_plot_id.as_ref().filter(|id| {
            self.store
                .get_plot(id)
                .is_some_and(|plot| plot.kind() == kind)
        });
        if let Some(id) = live {
            return id.clone();
        }

        if let Some(stale) = self.current_plot_id.take() {
            tracing::debug!("Current plot {} is gone, starting a new {}", stale, kind);
        }

        let id = generate_id(kind.id_prefix());
        if let Some(shape) = Plot::empty_shape(kind, id.clone(), self.options.color_for(kind)) {
            self.store.add_plot(shape);
            tracing::debug!("Created new {}: {}", kind, id);
        }
        self.current_plot_id = Some(id.clone());
        id
    }

    /// First deletable point within `threshold` of `(x, y)`, scanning plots
    /// in store order and vertices in drawing order.
    pub fn find_point_near(&self, x: f64, y: f64, threshold: f64) -> Option<PointHit> {
        for plot in self.store.iter() {
            match plot {
                Plot::Point(point) => {
                    if point.is_deletable() && point.distance_to(x, y) <= threshold {
                        return Some(PointHit::Plot {
                            plot_id: point.id().to_string(),
                        });
                    }
                }
                Plot::Polyline(_) | Plot::Polygon(_) => {
                    let hit = plot
                        .points()
                        .iter()
                        .find(|p| p.is_deletable() && p.distance_to(x, y) <= threshold);
                    if let Some(point) = hit {
                        return Some(PointHit::Vertex {
                            plot_id: plot.id().to_string(),
                            point_id: point.id().to_string(),
                        });
                    }
                }
            }
        }
        None
    }

    /// Deletes the first deletable point within `threshold` of `(x, y)`.
    ///
    /// A standalone point plot is removed entirely; a shape loses only the
    /// matched vertex. Returns false when nothing is in range.
    pub fn delete_point_near(&mut self, x: f64, y: f64, threshold: f64) -> bool {
        tracing::debug!("Deleting point near ({}, {}) within {}", x, y, threshold);
        match self.find_point_near(x, y, threshold) {
            Some(PointHit::Plot { plot_id }) => {
                tracing::debug!("Removing point plot {}", plot_id);
                self.store.remove_plot(&plot_id)
            }
            Some(PointHit::Vertex { plot_id, point_id }) => {
                tracing::debug!("Removing point {} from {}", point_id, plot_id);
                self.store
                    .edit_plot(&plot_id, |plot| plot.remove_vertex(&point_id))
                    .unwrap_or(false)
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    /// Removes every plot as one undoable step and ends the current shape.
    pub fn clear(&mut self) {
        self.store.clear();
        self.current_plot_id = None;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
