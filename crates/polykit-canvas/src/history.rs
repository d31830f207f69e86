//! Bounded linear undo/redo history.
//!
//! Holds whole-state snapshots. Recording a new snapshot clears the redo
//! stack, and the undo stack evicts its oldest entry once it exceeds the
//! configured depth.

use std::collections::VecDeque;

use polykit_core::constants::HISTORY_LIMIT;

#[derive(Debug, Clone)]
pub struct UndoRedoManager<S> {
    undo_stack: VecDeque<S>,
    redo_stack: Vec<S>,
    max_depth: usize,
}

impl<S> UndoRedoManager<S> {
    /// Creates a manager keeping at most `max_depth` undo entries (minimum 1).
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Pushes the state as it was before a new action and drops redo history.
    pub fn record(&mut self, snapshot: S) {
        self.push_undo(snapshot);
        self.redo_stack.clear();
        tracing::debug!("Saved state for undo. Stack size: {}", self.undo_stack.len());
    }

    /// Steps back: stores `current` for redo and returns the previous state.
    ///
    /// Returns `None` without touching either stack if there is nothing to undo.
    pub fn undo(&mut self, current: S) -> Option<S> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Steps forward: stores `current` for undo and returns the next state.
    ///
    /// Returns `None` without touching either stack if there is nothing to redo.
    pub fn redo(&mut self, current: S) -> Option<S> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: S) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }
}

impl<S> Default for UndoRedoManager<S> {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}
