//! View navigation for the canvas.
//!
//! The visible area is described as a world-space [`ViewRange`]. Hosts that
//! own their own view (a plotting widget, a test double) implement
//! [`ViewNavigator`]; [`Viewport`] is the built-in implementation used by the
//! headless session.
//!
//! Pixel coordinates have (0,0) at the top-left with +Y down. World
//! coordinates have +Y up, so the Y axis is flipped between the two.

use serde::{Deserialize, Serialize};

use polykit_core::constants::DEFAULT_VIEW_RANGE;

/// Visible world-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewRange {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max + dx,
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
        }
    }

    /// Scales the range by `factor` while keeping the world point
    /// `(anchor_x, anchor_y)` at the same relative position.
    ///
    /// ```text
    /// new_width  = width * factor
    /// new_center = center + (anchor - center) * (1 - factor)
    /// ```
    pub fn zoomed_about(&self, anchor_x: f64, anchor_y: f64, factor: f64) -> Self {
        let (cx, cy) = self.center();
        let half_w = self.width() * factor / 2.0;
        let half_h = self.height() * factor / 2.0;
        let offset_x = (anchor_x - cx) * (1.0 - factor);
        let offset_y = (anchor_y - cy) * (1.0 - factor);

        Self {
            x_min: cx - half_w + offset_x,
            x_max: cx + half_w + offset_x,
            y_min: cy - half_h + offset_y,
            y_max: cy + half_h + offset_y,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Default for ViewRange {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_RANGE, DEFAULT_VIEW_RANGE)
    }
}

/// Pan/zoom capability of the view the canvas is displayed in.
pub trait ViewNavigator {
    fn view_range(&self) -> ViewRange;

    fn set_view_range(&mut self, range: ViewRange);

    /// Widget size in pixels as `(width, height)`.
    fn widget_size(&self) -> (f64, f64);

    /// Maps a pixel position to world coordinates.
    fn map_to_world(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64);

    /// Pans by a pixel displacement of the pointer, so the content follows
    /// the drag.
    fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        let (width, height) = self.widget_size();
        if width <= 0.0 || height <= 0.0 {
            tracing::warn!("Cannot pan a view of size {}x{}", width, height);
            return;
        }

        let range = self.view_range();
        let pan_dx = -dx * range.width() / width;
        let pan_dy = dy * range.height() / height;
        self.set_view_range(range.translated(pan_dx, pan_dy));
    }

    /// Zooms by `factor` keeping the world point under the pixel position fixed.
    fn zoom_at(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) {
        let (anchor_x, anchor_y) = self.map_to_world(pixel_x, pixel_y);
        let range = self.view_range();
        self.set_view_range(range.zoomed_about(anchor_x, anchor_y, factor));
    }
}

/// Built-in view: a world range displayed in a widget of fixed pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    range: ViewRange,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    pub fn new(range: ViewRange, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            range,
            canvas_width,
            canvas_height,
        }
    }

    pub fn range(&self) -> ViewRange {
        self.range
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Converts pixel coordinates to world coordinates.
    ///
    /// ```text
    /// world_x = x_min + pixel_x / canvas_width  * width
    /// world_y = y_max - pixel_y / canvas_height * height  // Flip Y-axis
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        let world_x = self.range.x_min + pixel_x / self.canvas_width * self.range.width();
        let world_y = self.range.y_max - pixel_y / self.canvas_height * self.range.height();
        (world_x, world_y)
    }

    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let pixel_x = (world_x - self.range.x_min) / self.range.width() * self.canvas_width;
        let pixel_y = (self.range.y_max - world_y) / self.range.height() * self.canvas_height;
        (pixel_x, pixel_y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewRange::default(), 1200.0, 800.0)
    }
}

impl ViewNavigator for Viewport {
    fn view_range(&self) -> ViewRange {
        self.range
    }

    fn set_view_range(&mut self, range: ViewRange) {
        tracing::debug!(
            "View range set to x [{}, {}] y [{}, {}]",
            range.x_min,
            range.x_max,
            range.y_min,
            range.y_max
        );
        self.range = range;
    }

    fn widget_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    fn map_to_world(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        self.pixel_to_world(pixel_x, pixel_y)
    }
}
