//! Gesture event vocabulary consumed by the editor.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A pointer gesture in screen coordinates.
///
/// The editor is agnostic to the delivering input framework; hosts map
/// their native touch/mouse events onto this small vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Gesture {
    DragStart { position: Point },
    DragMove { position: Point },
    DragEnd,
    Tap { position: Point },
    /// Combined pan + zoom gesture (two-finger / scroll).
    PanZoom { pan: Vec2, zoom_factor: f64 },
}
