//! Event type definitions for the event bus.

use serde::{Deserialize, Serialize};

use crate::error::HistoryDirection;

/// Notification published after a committed plot store mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// A plot was inserted or overwritten
    PlotAdded {
        /// Id of the plot.
        id: String,
    },
    /// A plot was removed
    PlotRemoved {
        /// Id of the removed plot.
        id: String,
    },
    /// A plot was edited in place (point added or removed)
    PlotModified {
        /// Id of the edited plot.
        id: String,
    },
    /// The whole store was replaced from history
    HistoryRestored {
        /// Whether this was an undo or a redo.
        direction: HistoryDirection,
    },
    /// All plots were removed
    Cleared,
}

impl CanvasEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            CanvasEvent::PlotAdded { .. } | CanvasEvent::PlotRemoved { .. } => {
                EventCategory::Structure
            }
            CanvasEvent::PlotModified { .. } => EventCategory::Edit,
            CanvasEvent::HistoryRestored { .. } => EventCategory::History,
            CanvasEvent::Cleared => EventCategory::Structure,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CanvasEvent::PlotAdded { id } => format!("Plot {} added", id),
            CanvasEvent::PlotRemoved { id } => format!("Plot {} removed", id),
            CanvasEvent::PlotModified { id } => format!("Plot {} modified", id),
            CanvasEvent::HistoryRestored { direction } => format!("State restored by {}", direction),
            CanvasEvent::Cleared => "All plots cleared".to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Plots added, removed, or cleared.
    Structure,
    /// Points added to or removed from an existing plot.
    Edit,
    /// Undo and redo restores.
    History,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Structure => write!(f, "Structure"),
            EventCategory::Edit => write!(f, "Edit"),
            EventCategory::History => write!(f, "History"),
        }
    }
}
