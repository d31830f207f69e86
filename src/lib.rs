//! # PolyKit
//!
//! Interactive 2D editor for points, polylines and polygons, used to draw a
//! field boundary and its obstacles as input to an external coverage path
//! planner.
//!
//! ## Architecture
//!
//! PolyKit is organized as a workspace with multiple crates:
//!
//! 1. **polykit-core** - Error taxonomy, change notification, shared constants
//! 2. **polykit-canvas** - Plot model, undo history, editor and interaction logic
//! 3. **polykit-settings** - Configuration loading, saving and validation
//! 4. **polykit-runner** - External algorithm parameters, git branches, execution
//! 5. **polykit** - Headless line-driven session and the main binary
//!
//! The canvas crate performs no drawing of its own. A host forwards pointer,
//! wheel and key events to an [`InteractionHandler`] and redraws the plots the
//! store reports as dirty.

pub mod session;

pub use session::{Command, JobRequest, Reply, Session};

pub use polykit_canvas::{
    Editor, EditorOptions, InputEvent, InteractionHandler, InteractionOptions, Plot, PlotKind,
    PlotPoint, PlotStore, Polygon, PolygonRings, Polyline, SceneSync, ViewNavigator, ViewRange,
    Viewport,
};
pub use polykit_core::{CanvasError, CanvasEvent, HistoryDirection};
pub use polykit_runner::{AlgorithmParams, AlgorithmRunner, RunnerError, RunnerOutcome};
pub use polykit_settings::{default_config_path, Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so stdout stays free for session replies. `RUST_LOG`
/// adds directives on top of the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
