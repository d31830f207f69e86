//! Render-sync helpers for hosts that draw the plot store.
//!
//! The store does not render anything itself. A host keeps a table of
//! display items keyed by plot id and uses [`SceneSync`] to pull the dirty
//! plots after each change notification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Plot, PlotPoint, MIN_CLOSED_POINTS};
use crate::plot_store::PlotStore;

/// Geometry a host should draw for one plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "points", rename_all = "snake_case")]
pub enum RenderPrimitive {
    /// Nothing to draw.
    Empty,
    /// Unconnected markers.
    Markers(Vec<(f64, f64)>),
    /// Connected line through the points in order.
    OpenPath(Vec<(f64, f64)>),
    /// Closed outline; the first coordinate is repeated at the end.
    ClosedRing(Vec<(f64, f64)>),
}

impl RenderPrimitive {
    pub fn coordinates(&self) -> &[(f64, f64)] {
        match self {
            RenderPrimitive::Empty => &[],
            RenderPrimitive::Markers(pts)
            | RenderPrimitive::OpenPath(pts)
            | RenderPrimitive::ClosedRing(pts) => pts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates().is_empty()
    }
}

fn coords(points: &[PlotPoint]) -> Vec<(f64, f64)> {
    points.iter().map(PlotPoint::position).collect()
}

fn markers_or_empty(points: &[PlotPoint]) -> RenderPrimitive {
    if points.is_empty() {
        RenderPrimitive::Empty
    } else {
        RenderPrimitive::Markers(coords(points))
    }
}

impl Plot {
    /// Geometry for this plot: polylines connect from two points, polygons
    /// from three, anything smaller is drawn as loose markers.
    pub fn render_primitive(&self) -> RenderPrimitive {
        match self {
            Plot::Point(point) => RenderPrimitive::Markers(vec![point.position()]),
            Plot::Polyline(line) => {
                if line.len() >= 2 {
                    RenderPrimitive::OpenPath(coords(line.points()))
                } else {
                    markers_or_empty(line.points())
                }
            }
            Plot::Polygon(polygon) => {
                let points = polygon.points();
                if points.len() < MIN_CLOSED_POINTS {
                    return markers_or_empty(points);
                }

                let mut ring = coords(points);
                if ring.first() == ring.last() {
                    ring.pop();
                }
                if let Some(&first) = ring.first() {
                    ring.push(first);
                }
                RenderPrimitive::ClosedRing(ring)
            }
        }
    }
}

/// One entry of the host's display table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub color: String,
    pub primitive: RenderPrimitive,
}

/// Outcome of one [`SceneSync::sync`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Ids re-rendered because they were dirty.
    pub updated: Vec<String>,
    /// Ids whose display item was dropped.
    pub removed: Vec<String>,
}

impl SyncReport {
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Display items kept in step with a [`PlotStore`] through its dirty set.
#[derive(Debug, Clone, Default)]
pub struct SceneSync {
    items: HashMap<String, DisplayItem>,
}

impl SceneSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, id: &str) -> Option<&DisplayItem> {
        self.items.get(id)
    }

    pub fn items(&self) -> &HashMap<String, DisplayItem> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Re-renders dirty plots, drops items of plots that no longer exist,
    /// then clears the store's dirty flags.
    pub fn sync(&mut self, store: &mut PlotStore) -> SyncReport {
        let mut report = SyncReport::default();

        let dirty = store.plots_to_update();
        tracing::debug!("Updating {} plots", dirty.len());
        for plot in dirty {
            let id = plot.id().to_string();
            let primitive = plot.render_primitive();
            if primitive.is_empty() {
                self.items.remove(&id);
            } else {
                self.items.insert(
                    id.clone(),
                    DisplayItem {
                        color: plot.color().to_string(),
                        primitive,
                    },
                );
            }
            report.updated.push(id);
        }

        let mut stale: Vec<String> = self
            .items
            .keys()
            .filter(|id| !store.contains(id))
            .cloned()
            .collect();
        stale.sort();
        for id in stale {
            tracing::debug!("Removing plot item {}", id);
            self.items.remove(&id);
            report.removed.push(id);
        }

        store.mark_all_updated();
        report
    }
}
