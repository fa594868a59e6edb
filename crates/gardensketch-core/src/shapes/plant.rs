//! Plant marker: a catalog plant placed inside a bed.

use super::MarkerId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A plant placement inside a bed.
///
/// The radius is derived from the catalog plant's recommended in-row
/// spacing at placement time; markers are only valid when dropped inside a
/// bed's geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantMarker {
    pub id: MarkerId,
    /// Key into the plant catalog.
    pub plant_id: String,
    /// Placement point in garden meters.
    pub position: Point,
    /// Placement radius in meters (half the in-row spacing).
    pub radius: f64,
}

impl PlantMarker {
    pub fn new(plant_id: impl Into<String>, position: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            plant_id: plant_id.into(),
            position,
            radius,
        }
    }
}
