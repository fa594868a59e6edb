//! The garden document: beds and walkways for one garden.

use crate::shapes::{Bed, BedId, GardenId, Walkway, WalkwayId};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All editable content of one garden.
///
/// Bed order doubles as z-order (back to front); hit testing walks the list
/// in reverse so the most recently added bed wins when beds overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenDocument {
    pub id: GardenId,
    pub name: String,
    /// Garden dimensions in meters.
    pub size: Size,
    pub beds: Vec<Bed>,
    pub paths: Vec<Walkway>,
}

impl GardenDocument {
    /// Create a new empty garden of the given size in meters.
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size,
            beds: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// The garden bounds as a rect anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }

    /// Look up a bed by id.
    pub fn bed(&self, id: BedId) -> Option<&Bed> {
        self.beds.iter().find(|b| b.id == id)
    }

    /// Look up a bed by id, mutably.
    pub fn bed_mut(&mut self, id: BedId) -> Option<&mut Bed> {
        self.beds.iter_mut().find(|b| b.id == id)
    }

    /// Add a bed at the front of the z-order.
    pub fn add_bed(&mut self, bed: Bed) {
        self.beds.push(bed);
    }

    /// Remove a bed by id, returning it if present.
    pub fn remove_bed(&mut self, id: BedId) -> Option<Bed> {
        let idx = self.beds.iter().position(|b| b.id == id)?;
        Some(self.beds.remove(idx))
    }

    /// Replace a bed's content, matching by the replacement's id.
    /// No-op when the id is unknown.
    pub fn replace_bed(&mut self, bed: Bed) {
        if let Some(existing) = self.bed_mut(bed.id) {
            *existing = bed;
        }
    }

    /// Look up a walkway by id.
    pub fn path(&self, id: WalkwayId) -> Option<&Walkway> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// Add a walkway.
    pub fn add_path(&mut self, path: Walkway) {
        self.paths.push(path);
    }

    /// Remove a walkway by id, returning it if present.
    pub fn remove_path(&mut self, id: WalkwayId) -> Option<Walkway> {
        let idx = self.paths.iter().position(|p| p.id == id)?;
        Some(self.paths.remove(idx))
    }

    /// Find the topmost bed containing a garden-space point.
    pub fn bed_at_point(&self, point: Point) -> Option<&Bed> {
        self.beds.iter().rev().find(|b| b.hit_test(point))
    }

    /// Check whether a rect overlaps any bed's bounding box.
    pub fn overlaps_any_bed(&self, rect: Rect) -> bool {
        self.beds
            .iter()
            .any(|b| rect.intersect(b.bounds()).area() > 0.0)
    }

    /// Bounding boxes of all beds except the one with `excluded` id.
    /// Used as snapping siblings while dragging or resizing.
    pub fn sibling_bounds(&self, excluded: BedId) -> Vec<Rect> {
        self.beds
            .iter()
            .filter(|b| b.id != excluded)
            .map(|b| b.bounds())
            .collect()
    }
}
