//! Error handling for PolyKit
//!
//! Editing mistakes (deleting empty space, undoing with no history, touching
//! a polygon's closing point) are not fatal. The model and store expose
//! `try_*` operations returning [`CanvasError`] and thin wrappers that log
//! the error at warning level and report `false`/`None` to the caller.
//!
//! All error types use `thiserror` for ergonomic error handling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryDirection {
    /// Step back to the previous snapshot.
    Undo,
    /// Step forward to a previously undone snapshot.
    Redo,
}

impl std::fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undo => write!(f, "undo"),
            Self::Redo => write!(f, "redo"),
        }
    }
}

/// Canvas error type
///
/// Soft failures of the plot model, the plot store and the editor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// No plot with this id exists in the store
    #[error("Plot {id} not found")]
    PlotNotFound {
        /// The requested plot id.
        id: String,
    },

    /// No point with this id exists in the plot
    #[error("Point {point_id} not found in {plot_id}")]
    PointNotFound {
        /// The plot that was searched.
        plot_id: String,
        /// The requested point id.
        point_id: String,
    },

    /// The point is protected from deletion (e.g. a polygon's closing point)
    #[error("Cannot delete non-deletable point {point_id} from {plot_id}")]
    NonDeletablePoint {
        /// The plot owning the point.
        plot_id: String,
        /// The protected point id.
        point_id: String,
    },

    /// Undo or redo requested with an empty history stack
    #[error("No {direction} available")]
    EmptyHistory {
        /// Which stack was empty.
        direction: HistoryDirection,
    },

    /// The plot exists but is not of the expected kind
    #[error("Plot {id} is a {actual}, expected a {expected}")]
    KindMismatch {
        /// The plot id.
        id: String,
        /// The kind the caller needed.
        expected: String,
        /// The kind actually stored.
        actual: String,
    },
}

impl CanvasError {
    /// Check if this error means the addressed item does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CanvasError::PlotNotFound { .. } | CanvasError::PointNotFound { .. }
        )
    }
}
