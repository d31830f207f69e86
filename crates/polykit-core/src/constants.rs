//! Default values shared across the editor crates.

/// Maximum number of undo snapshots kept before the oldest is evicted.
pub const HISTORY_LIMIT: usize = 100;

/// Hit-test radius (world units) for deleting points near a click.
pub const DELETE_THRESHOLD: f64 = 10.0;

/// Pointer travel (pixels) after a press before movement pans the view.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Range multiplier applied on a Ctrl+wheel step up. Values above 1 widen
/// the visible range.
pub const SCROLL_UP_ZOOM_FACTOR: f64 = 1.1;

/// Range multiplier applied on a Ctrl+wheel step down.
pub const SCROLL_DOWN_ZOOM_FACTOR: f64 = 0.9;

/// Default color of standalone point plots.
pub const POINT_COLOR: &str = "r";

/// Default color of polyline plots.
pub const POLYLINE_COLOR: &str = "b";

/// Default color of polygon plots.
pub const POLYGON_COLOR: &str = "g";

/// Suffix appended to the first point's id to form a polygon's closing point id.
pub const CLOSING_POINT_SUFFIX: &str = "_close";

/// Initial visible world range on both axes.
pub const DEFAULT_VIEW_RANGE: (f64, f64) = (0.0, 100.0);
