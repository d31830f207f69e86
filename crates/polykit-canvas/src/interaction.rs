//! Interaction decision logic.
//!
//! Maps raw pointer, wheel, and keyboard events to editor operations or view
//! navigation. Pointer positions are in pixels; they are mapped to world
//! coordinates through the [`ViewNavigator`] only where the editor needs them.

use serde::{Deserialize, Serialize};

use polykit_core::constants::{
    DELETE_THRESHOLD, DRAG_THRESHOLD_PX, SCROLL_UP_ZOOM_FACTOR, SCROLL_DOWN_ZOOM_FACTOR,
};

use crate::editor::Editor;
use crate::viewport::ViewNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        shift: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Other,
}

/// Pointer position in pixels with the button that was pressed or released,
/// or, for moves, the button held down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, button: Option<MouseButton>) -> Self {
        Self {
            x,
            y,
            button,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn left(x: f64, y: f64) -> Self {
        Self::new(x, y, Some(MouseButton::Left))
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub x: f64,
    pub y: f64,
    /// Vertical scroll amount; positive scrolls up.
    pub delta: f64,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(PointerEvent),
    Move(PointerEvent),
    Release(PointerEvent),
    Wheel(WheelEvent),
    KeyPress(KeyEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionOptions {
    /// Hit-test radius for Ctrl+click deletion, in world units.
    pub delete_threshold: f64,
    /// Pointer travel in pixels before a press turns into a pan.
    pub drag_threshold_px: f64,
    /// View range multiplier for Ctrl+scroll up.
    pub scroll_up_zoom_factor: f64,
    /// View range multiplier for Ctrl+scroll down.
    pub scroll_down_zoom_factor: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            delete_threshold: DELETE_THRESHOLD,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            scroll_up_zoom_factor: SCROLL_UP_ZOOM_FACTOR,
            scroll_down_zoom_factor: SCROLL_DOWN_ZOOM_FACTOR,
        }
    }
}

/// Drag-tracking state machine over input events.
#[derive(Debug, Clone, Default)]
pub struct InteractionHandler {
    is_dragging: bool,
    drag_start: Option<(f64, f64)>,
    options: InteractionOptions,
}

impl InteractionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: InteractionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_start(&self) -> Option<(f64, f64)> {
        self.drag_start
    }

    /// Handles one event. Returns true when the event was consumed, false
    /// when the host should apply its default behaviour.
    pub fn handle<V>(&mut self, event: InputEvent, editor: &mut Editor, view: &mut V) -> bool
    where
        V: ViewNavigator + ?Sized,
    {
        match event {
            InputEvent::Press(e) => self.handle_press(e, editor, view),
            InputEvent::Move(e) => self.handle_move(e, view),
            InputEvent::Release(e) => self.handle_release(e),
            InputEvent::Wheel(e) => self.handle_wheel(e, view),
            InputEvent::KeyPress(e) => self.handle_key(e, editor),
        }
    }

    fn handle_press<V>(&mut self, event: PointerEvent, editor: &mut Editor, view: &V) -> bool
    where
        V: ViewNavigator + ?Sized,
    {
        if event.button != Some(MouseButton::Left) {
            return false;
        }

        let (x, y) = view.map_to_world(event.x, event.y);
        if event.modifiers.ctrl {
            tracing::debug!("Ctrl+LeftClick at ({}, {}) - attempting to delete point", x, y);
            return editor.delete_point_near(x, y, self.options.delete_threshold);
        }

        tracing::debug!("LeftClick at ({}, {}) - adding point", x, y);
        editor.add_point(x, y);
        self.is_dragging = false;
        self.drag_start = Some((event.x, event.y));
        true
    }

    fn handle_move<V>(&mut self, event: PointerEvent, view: &mut V) -> bool
    where
        V: ViewNavigator + ?Sized,
    {
        if event.button != Some(MouseButton::Left) {
            return false;
        }
        let Some((start_x, start_y)) = self.drag_start else {
            return false;
        };

        let dx = event.x - start_x;
        let dy = event.y - start_y;
        if dx.hypot(dy) <= self.options.drag_threshold_px {
            return false;
        }

        if !self.is_dragging {
            self.is_dragging = true;
            tracing::debug!("Starting pan drag");
        }
        view.pan_by_pixels(dx, dy);
        self.drag_start = Some((event.x, event.y));
        true
    }

    fn handle_release(&mut self, event: PointerEvent) -> bool {
        if event.button != Some(MouseButton::Left) {
            return false;
        }

        if self.is_dragging {
            tracing::debug!("Ending pan drag");
            self.is_dragging = false;
        }
        self.drag_start = None;
        true
    }

    fn handle_wheel<V>(&mut self, event: WheelEvent, view: &mut V) -> bool
    where
        V: ViewNavigator + ?Sized,
    {
        if !event.modifiers.ctrl {
            return false;
        }

        let factor = if event.delta > 0.0 {
            self.options.scroll_up_zoom_factor
        } else {
            self.options.scroll_down_zoom_factor
        };
        tracing::debug!("Ctrl+Scroll: zooming by factor {}", factor);
        view.zoom_at(event.x, event.y, factor);
        true
    }

    fn handle_key(&mut self, event: KeyEvent, editor: &mut Editor) -> bool {
        let is_z = matches!(event.key, Key::Char('z') | Key::Char('Z'));
        if !event.modifiers.ctrl || !is_z {
            return false;
        }

        if event.modifiers.shift {
            tracing::debug!("Ctrl+Shift+Z pressed - redo");
            editor.redo();
        } else {
            tracing::debug!("Ctrl+Z pressed - undo");
            editor.undo();
        }
        true
    }
}
