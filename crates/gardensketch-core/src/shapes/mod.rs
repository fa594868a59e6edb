//! Garden entities: beds, walkways, plant markers.

mod bed;
mod plant;
mod walkway;

pub use bed::{Bed, BedShape, MIN_BED_SIZE};
pub use plant::PlantMarker;
pub use walkway::{Walkway, DEFAULT_WALKWAY_WIDTH, MIN_WALKWAY_LENGTH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a bed.
pub type BedId = Uuid;

/// Unique identifier for a walkway.
pub type WalkwayId = Uuid;

/// Unique identifier for a plant marker.
pub type MarkerId = Uuid;

/// Unique identifier for a garden.
pub type GardenId = Uuid;

/// Serializable fill color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl BedColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for BedColor {
    /// Soil brown, the default fill for new beds.
    fn default() -> Self {
        Self::new(121, 85, 61, 255)
    }
}
