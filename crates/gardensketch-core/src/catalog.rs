//! Plant catalog lookup consumed when placing plant markers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog data for one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantInfo {
    /// Display name, e.g. "Carrot".
    pub name: String,
    /// Recommended in-row spacing in meters.
    pub row_spacing: f64,
}

impl PlantInfo {
    /// Marker radius for a placed plant: half the in-row spacing.
    pub fn marker_radius(&self) -> f64 {
        self.row_spacing / 2.0
    }
}

/// Lookup of plant-catalog entries by id.
///
/// Treated as an already-resolved in-memory lookup by the time the editor
/// uses it; resolution latency belongs to the surrounding application.
pub trait PlantCatalog {
    fn lookup(&self, plant_id: &str) -> Option<PlantInfo>;
}

/// Simple map-backed catalog for hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    plants: HashMap<String, PlantInfo>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, plant_id: impl Into<String>, info: PlantInfo) {
        self.plants.insert(plant_id.into(), info);
    }
}

impl PlantCatalog for InMemoryCatalog {
    fn lookup(&self, plant_id: &str) -> Option<PlantInfo> {
        self.plants.get(plant_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_radius() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(
            "carrot",
            PlantInfo {
                name: "Carrot".into(),
                row_spacing: 0.1,
            },
        );

        let info = catalog.lookup("carrot").expect("known plant");
        assert_eq!(info.name, "Carrot");
        assert!((info.marker_radius() - 0.05).abs() < f64::EPSILON);
        assert!(catalog.lookup("dragonfruit").is_none());
    }
}
