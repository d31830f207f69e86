//! # PolyKit Canvas
//!
//! The editable 2D plot model and everything that mutates it: points,
//! polylines and self-closing polygons, the plot store with snapshot-based
//! undo/redo, the editor controller that turns clicks into edits, and the
//! interaction logic that turns raw input events into editor calls or view
//! navigation.
//!
//! ## Architecture
//!
//! ```text
//! InteractionHandler (press / move / release / wheel / key)
//!   ├── ViewNavigator (pan, anchor zoom, pixel -> world)
//!   └── Editor (drawing mode, in-progress shape, hit-testing)
//!         └── PlotStore (plots, dirty flags, undo/redo, change events)
//!               └── Plot = Point | Polyline | Polygon
//!
//! SceneSync (host display items <- dirty plots)
//! PolygonRings (boundary / obstacle extraction)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use polykit_canvas::{Editor, PlotKind};
//!
//! let mut editor = Editor::new();
//! editor.set_plot_type(PlotKind::Polygon);
//! let id = editor.add_point(0.0, 0.0);
//! editor.add_point(10.0, 0.0);
//! editor.add_point(10.0, 10.0);
//!
//! let polygon = editor.store().get_plot(&id).unwrap().as_polygon().unwrap();
//! assert!(polygon.is_closed());
//! assert_eq!(polygon.len(), 4);
//! ```

pub mod editor;
pub mod export;
pub mod history;
pub mod interaction;
pub mod model;
pub mod plot_store;
pub mod renderer;
pub mod viewport;

pub use editor::{Editor, EditorOptions, PointHit};
pub use export::{polygon_ring, PolygonRings, Ring};
pub use history::UndoRedoManager;
pub use interaction::{
    InputEvent, InteractionHandler, InteractionOptions, Key, KeyEvent, Modifiers, MouseButton,
    PointerEvent, WheelEvent,
};
pub use model::{
    generate_id, Plot, PlotKind, PlotPoint, Polygon, Polyline, MIN_CLOSED_POINTS,
};
pub use plot_store::{PlotStore, StoreSnapshot};
pub use renderer::{DisplayItem, RenderPrimitive, SceneSync, SyncReport};
pub use viewport::{ViewNavigator, ViewRange, Viewport};

pub use polykit_core::{CanvasError, CanvasEvent, EventCategory, EventFilter, HistoryDirection};
