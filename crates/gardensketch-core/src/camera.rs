//! Camera module for pan/zoom transforms between screen and garden space.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Render scale at zoom 1.0: how many screen pixels one garden meter spans.
pub const PIXELS_PER_METER: f64 = 100.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.3;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f64 = 4.0;

/// Camera manages the view transform for the garden canvas.
///
/// Garden space is measured in meters; the render transform is
/// `screen = (garden + pan) * zoom * PIXELS_PER_METER`, with the pan offset
/// applied before scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Garden dimensions in meters.
    pub garden_size: Size,
    /// Pan offset in garden units, applied before scaling.
    pub pan: Vec2,
    /// Current zoom factor (1.0 = 100%).
    pub zoom: f64,
}

impl Camera {
    /// Create a camera for a garden of the given size in meters.
    pub fn new(garden_size: Size) -> Self {
        Self {
            garden_size,
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Effective scale from garden meters to screen pixels.
    fn scale(&self) -> f64 {
        self.zoom * PIXELS_PER_METER
    }

    /// Convert a screen point to garden coordinates.
    pub fn to_garden(&self, screen: Point) -> Point {
        let s = self.scale();
        Point::new(screen.x / s - self.pan.x, screen.y / s - self.pan.y)
    }

    /// Convert a garden point to screen coordinates.
    pub fn to_screen(&self, garden: Point) -> Point {
        let s = self.scale();
        Point::new((garden.x + self.pan.x) * s, (garden.y + self.pan.y) * s)
    }

    /// Pan by a delta in screen pixels.
    ///
    /// The delta is divided by the effective scale so panning speed feels
    /// the same at every zoom level.
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        let s = self.scale();
        self.pan += Vec2::new(screen_delta.x / s, screen_delta.y / s);
    }

    /// Multiply the zoom factor, clamped to the allowed range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Restore zoom 1.0 and zero pan.
    pub fn reset_view(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = 1.0;
    }
}
