//! Walkway (path) entity: a fixed-width segment of non-plantable ground.

use super::{GardenId, WalkwayId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum walkway length in meters; shorter gestures are discarded.
pub const MIN_WALKWAY_LENGTH: f64 = 0.3;

/// Default walkway width in meters.
pub const DEFAULT_WALKWAY_WIDTH: f64 = 0.4;

/// A straight walkway between two points in garden space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walkway {
    pub id: WalkwayId,
    pub garden_id: GardenId,
    pub start: Point,
    pub end: Point,
    /// Fixed width in meters.
    pub width: f64,
}

impl Walkway {
    /// Create a walkway with the default width.
    pub fn new(garden_id: GardenId, start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            garden_id,
            start,
            end,
            width: DEFAULT_WALKWAY_WIDTH,
        }
    }

    /// Length of the walkway centerline in meters.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Bounding box of the walkway, inflated by half its width.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
        .inflate(self.width / 2.0, self.width / 2.0)
    }
}
