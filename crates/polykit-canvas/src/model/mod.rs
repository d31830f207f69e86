//! Plot model: points, polylines, and polygons.

mod point;
mod polygon;
mod polyline;

pub use point::PlotPoint;
pub use polygon::{Polygon, MIN_CLOSED_POINTS};
pub use polyline::Polyline;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use polykit_core::constants::{POINT_COLOR, POLYGON_COLOR, POLYLINE_COLOR};
use polykit_core::CanvasError;

/// Kind of drawable plot, also used as the editor's drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    #[default]
    Point,
    Polyline,
    Polygon,
}

impl PlotKind {
    /// Prefix used when generating ids for plots of this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            PlotKind::Point => "point",
            PlotKind::Polyline => "polyline",
            PlotKind::Polygon => "polygon",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            PlotKind::Point => POINT_COLOR,
            PlotKind::Polyline => POLYLINE_COLOR,
            PlotKind::Polygon => POLYGON_COLOR,
        }
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id_prefix())
    }
}

impl std::str::FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "point" => Ok(PlotKind::Point),
            "polyline" => Ok(PlotKind::Polyline),
            "polygon" => Ok(PlotKind::Polygon),
            other => Err(format!("Unknown plot type: {}", other)),
        }
    }
}

/// Generates a fresh id of the form `<prefix>_<8 hex digits>`.
pub fn generate_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &hex[..8])
}

/// One drawable entity held by the plot store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Plot {
    Point(PlotPoint),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Plot {
    pub fn id(&self) -> &str {
        match self {
            Plot::Point(p) => p.id(),
            Plot::Polyline(p) => p.id(),
            Plot::Polygon(p) => p.id(),
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Plot::Point(p) => p.color(),
            Plot::Polyline(p) => p.color(),
            Plot::Polygon(p) => p.color(),
        }
    }

    pub fn kind(&self) -> PlotKind {
        match self {
            Plot::Point(_) => PlotKind::Point,
            Plot::Polyline(_) => PlotKind::Polyline,
            Plot::Polygon(_) => PlotKind::Polygon,
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            Plot::Point(p) => p.is_dirty(),
            Plot::Polyline(p) => p.is_dirty(),
            Plot::Polygon(p) => p.is_dirty(),
        }
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        match self {
            Plot::Point(p) => p.set_dirty(dirty),
            Plot::Polyline(p) => p.set_dirty(dirty),
            Plot::Polygon(p) => p.set_dirty(dirty),
        }
    }

    /// Every point of the plot in order; a point plot yields itself.
    pub fn points(&self) -> &[PlotPoint] {
        match self {
            Plot::Point(p) => std::slice::from_ref(p),
            Plot::Polyline(p) => p.points(),
            Plot::Polygon(p) => p.points(),
        }
    }

    /// Empty shape of the given kind. Point plots need coordinates, so
    /// `PlotKind::Point` yields `None`.
    pub fn empty_shape(kind: PlotKind, id: impl Into<String>, color: &str) -> Option<Plot> {
        match kind {
            PlotKind::Point => None,
            PlotKind::Polyline => Some(Plot::Polyline(Polyline::new(id).with_color(color))),
            PlotKind::Polygon => Some(Plot::Polygon(Polygon::new(id).with_color(color))),
        }
    }

    /// Appends a vertex to a polyline or polygon.
    pub fn try_add_vertex(&mut self, point: PlotPoint) -> Result<(), CanvasError> {
        match self {
            Plot::Point(p) => Err(CanvasError::KindMismatch {
                id: p.id().to_string(),
                expected: "polyline or polygon".to_string(),
                actual: PlotKind::Point.to_string(),
            }),
            Plot::Polyline(line) => {
                line.add_point(point);
                Ok(())
            }
            Plot::Polygon(polygon) => {
                polygon.add_point(point);
                Ok(())
            }
        }
    }

    /// Appends a vertex; logs and returns false for point plots.
    pub fn add_vertex(&mut self, point: PlotPoint) -> bool {
        match self.try_add_vertex(point) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    /// Removes a vertex from a polyline or polygon by id.
    pub fn remove_vertex(&mut self, point_id: &str) -> bool {
        match self {
            Plot::Point(_) => false,
            Plot::Polyline(line) => line.remove_point(point_id),
            Plot::Polygon(polygon) => polygon.remove_point(point_id),
        }
    }

    pub fn as_point(&self) -> Option<&PlotPoint> {
        match self {
            Plot::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Plot::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Plot::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PlotPoint> for Plot {
    fn from(point: PlotPoint) -> Self {
        Plot::Point(point)
    }
}

impl From<Polyline> for Plot {
    fn from(line: Polyline) -> Self {
        Plot::Polyline(line)
    }
}

impl From<Polygon> for Plot {
    fn from(polygon: Polygon) -> Self {
        Plot::Polygon(polygon)
    }
}
