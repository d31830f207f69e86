//! Plot store: the keyed collection of plots with snapshot-based undo/redo.
//!
//! Every mutating operation records a deep copy of the current plots before
//! changing anything and publishes one [`CanvasEvent`] after the change is
//! committed. Snapshots own their plots and points outright, so nothing
//! reachable from the live store aliases history.

use polykit_core::constants::HISTORY_LIMIT;
use polykit_core::{CanvasError, CanvasEvent, EventBus, EventFilter, HistoryDirection, SubscriptionId};

use crate::history::UndoRedoManager;
use crate::model::Plot;

/// Immutable copy of every plot in the store at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    plots: Vec<Plot>,
}

impl StoreSnapshot {
    fn capture(plots: &[Plot]) -> Self {
        let plots = plots
            .iter()
            .map(|plot| {
                let mut copy = plot.clone();
                copy.set_dirty(false);
                copy
            })
            .collect();
        Self { plots }
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    fn into_plots(self) -> Vec<Plot> {
        self.plots
    }
}

#[derive(Debug)]
pub struct PlotStore {
    plots: Vec<Plot>,
    history: UndoRedoManager<StoreSnapshot>,
    events: EventBus,
}

impl PlotStore {
    pub fn new() -> Self {
        Self::with_history_limit(HISTORY_LIMIT)
    }

    pub fn with_history_limit(max_depth: usize) -> Self {
        tracing::debug!("Initialized plot store (history depth {})", max_depth);
        Self {
            plots: Vec::new(),
            history: UndoRedoManager::new(max_depth),
            events: EventBus::new(),
        }
    }

    /// Inserts a plot, or overwrites the plot with the same id in place.
    pub fn add_plot(&mut self, plot: impl Into<Plot>) {
        let mut plot = plot.into();
        tracing::debug!("Adding plot {} of type {}", plot.id(), plot.kind());
        self.save_state_for_undo();

        plot.set_dirty(true);
        let id = plot.id().to_string();
        match self.position(&id) {
            Some(index) => self.plots[index] = plot,
            None => self.plots.push(plot),
        }
        self.publish(CanvasEvent::PlotAdded { id });
    }

    pub fn try_remove_plot(&mut self, id: &str) -> Result<Plot, CanvasError> {
        let index = self
            .position(id)
            .ok_or_else(|| CanvasError::PlotNotFound { id: id.to_string() })?;

        tracing::debug!("Removing plot {}", id);
        self.save_state_for_undo();
        let removed = self.plots.remove(index);
        self.publish(CanvasEvent::PlotRemoved { id: id.to_string() });
        Ok(removed)
    }

    /// Removes a plot by id. Returns false (and logs) if it does not exist.
    pub fn remove_plot(&mut self, id: &str) -> bool {
        match self.try_remove_plot(id) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    pub fn get_plot(&self, id: &str) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// All plots in insertion order.
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plot> {
        self.plots.iter()
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Plots changed since the last [`mark_all_updated`](Self::mark_all_updated).
    pub fn plots_to_update(&self) -> Vec<&Plot> {
        let dirty: Vec<&Plot> = self.plots.iter().filter(|p| p.is_dirty()).collect();
        tracing::debug!("Found {} plots to update", dirty.len());
        dirty
    }

    pub fn mark_all_updated(&mut self) {
        for plot in &mut self.plots {
            plot.set_dirty(false);
        }
    }

    /// Records the current plots as an undo step and invalidates redo.
    ///
    /// Call this before mutating a plot in place outside of [`edit_plot`](Self::edit_plot).
    pub fn save_state_for_undo(&mut self) {
        self.history.record(StoreSnapshot::capture(&self.plots));
    }

    /// Applies `f` to a stored plot as one undoable edit.
    pub fn try_edit_plot<R>(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Plot) -> R,
    ) -> Result<R, CanvasError> {
        let index = self
            .position(id)
            .ok_or_else(|| CanvasError::PlotNotFound { id: id.to_string() })?;

        self.save_state_for_undo();
        let plot = &mut self.plots[index];
        let result = f(plot);
        plot.set_dirty(true);
        self.publish(CanvasEvent::PlotModified { id: id.to_string() });
        Ok(result)
    }

    /// Applies `f` to a stored plot. Returns `None` (and logs) for unknown ids.
    pub fn edit_plot<R>(&mut self, id: &str, f: impl FnOnce(&mut Plot) -> R) -> Option<R> {
        match self.try_edit_plot(id, f) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    pub fn try_undo(&mut self) -> Result<(), CanvasError> {
        if !self.history.can_undo() {
            return Err(CanvasError::EmptyHistory {
                direction: HistoryDirection::Undo,
            });
        }

        tracing::debug!("Performing undo");
        let current = StoreSnapshot::capture(&self.plots);
        if let Some(previous) = self.history.undo(current) {
            self.restore(previous, HistoryDirection::Undo);
        }
        Ok(())
    }

    /// Restores the previous snapshot. Returns false (and logs) when the
    /// undo history is empty.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    pub fn try_redo(&mut self) -> Result<(), CanvasError> {
        if !self.history.can_redo() {
            return Err(CanvasError::EmptyHistory {
                direction: HistoryDirection::Redo,
            });
        }

        tracing::debug!("Performing redo");
        let current = StoreSnapshot::capture(&self.plots);
        if let Some(next) = self.history.redo(current) {
            self.restore(next, HistoryDirection::Redo);
        }
        Ok(())
    }

    /// Re-applies the last undone snapshot. Returns false (and logs) when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.try_redo() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    /// Removes every plot as one undoable step.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing all plots");
        self.save_state_for_undo();
        self.plots.clear();
        self.publish(CanvasEvent::Cleared);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Change notifications for this store.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Registers a synchronous observer called after every committed mutation.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(CanvasEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(EventFilter::All, handler)
    }

    fn restore(&mut self, snapshot: StoreSnapshot, direction: HistoryDirection) {
        self.plots = snapshot.into_plots();
        for plot in &mut self.plots {
            plot.set_dirty(true);
        }
        self.publish(CanvasEvent::HistoryRestored { direction });
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.plots.iter().position(|p| p.id() == id)
    }

    fn publish(&self, event: CanvasEvent) {
        // Having no observers is normal for a headless store.
        self.events.publish(event).ok();
    }
}

impl Default for PlotStore {
    fn default() -> Self {
        Self::new()
    }
}
