//! The bed entity: the principal editable shape of a garden.

use super::{BedColor, BedId, GardenId, PlantMarker};
use crate::geometry::Polygon;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum bed extent (meters) in each dimension. Shapes below this are
/// treated as accidental gestures and discarded rather than persisted.
pub const MIN_BED_SIZE: f64 = 0.2;

/// Geometry of a bed: a general polygon from the freehand tool, or an
/// axis-aligned rectangle from the drag tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BedShape {
    Rect {
        /// Top-left corner in garden meters.
        position: Point,
        width: f64,
        height: f64,
    },
    Polygon(Polygon),
}

impl BedShape {
    /// Create a rectangle shape from two opposite corners.
    pub fn rect_from_corners(a: Point, b: Point) -> Self {
        BedShape::Rect {
            position: Point::new(a.x.min(b.x), a.y.min(b.y)),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            BedShape::Rect {
                position,
                width,
                height,
            } => Rect::new(position.x, position.y, position.x + width, position.y + height),
            BedShape::Polygon(poly) => poly.bounding_box(),
        }
    }

    /// Check if a garden-space point lies inside the shape.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            BedShape::Rect { .. } => self.bounds().contains(point),
            BedShape::Polygon(poly) => poly.contains(point),
        }
    }

    /// Translate the shape by a delta in garden meters.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            BedShape::Rect { position, .. } => {
                position.x += delta.x;
                position.y += delta.y;
            }
            BedShape::Polygon(poly) => {
                let moved: Vec<Point> =
                    poly.points().iter().map(|p| *p + delta).collect();
                *poly = Polygon::new(moved);
            }
        }
    }

    /// Fit the shape into a new bounding box.
    ///
    /// Rectangles take the box directly; polygons are scaled point-wise from
    /// the old box into the new one.
    pub fn set_bounds(&mut self, new: Rect) {
        match self {
            BedShape::Rect {
                position,
                width,
                height,
            } => {
                *position = Point::new(new.x0, new.y0);
                *width = new.width();
                *height = new.height();
            }
            BedShape::Polygon(poly) => {
                let old = poly.bounding_box();
                let sx = new.width() / old.width().max(f64::EPSILON);
                let sy = new.height() / old.height().max(f64::EPSILON);
                let scaled: Vec<Point> = poly
                    .points()
                    .iter()
                    .map(|p| {
                        Point::new(new.x0 + (p.x - old.x0) * sx, new.y0 + (p.y - old.y0) * sy)
                    })
                    .collect();
                *poly = Polygon::new(scaled);
            }
        }
    }
}

/// A plantable area within a garden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub id: BedId,
    pub garden_id: GardenId,
    /// Display name; may be empty, in which case "Bed" is shown.
    pub name: String,
    /// Optional short label or emoji shown on the canvas.
    pub label: Option<String>,
    pub shape: BedShape,
    pub color: BedColor,
    pub plants: Vec<PlantMarker>,
}

impl Bed {
    /// Create a new unnamed bed.
    pub fn new(garden_id: GardenId, shape: BedShape) -> Self {
        Self {
            id: Uuid::new_v4(),
            garden_id,
            name: String::new(),
            label: None,
            shape,
            color: BedColor::default(),
            plants: Vec::new(),
        }
    }

    /// The name shown to the user, falling back to "Bed".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Bed"
        } else {
            &self.name
        }
    }

    /// Axis-aligned bounding box in garden meters.
    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    /// Check if a garden-space point hits this bed.
    pub fn hit_test(&self, point: Point) -> bool {
        self.shape.contains(point)
    }

    /// Whether the bed exceeds the minimum persistable size in both
    /// dimensions.
    pub fn meets_minimum_size(&self) -> bool {
        let b = self.bounds();
        b.width() >= MIN_BED_SIZE && b.height() >= MIN_BED_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_bed(x: f64, y: f64, w: f64, h: f64) -> Bed {
        Bed::new(
            Uuid::new_v4(),
            BedShape::Rect {
                position: Point::new(x, y),
                width: w,
                height: h,
            },
        )
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let shape = BedShape::rect_from_corners(Point::new(3.0, 4.0), Point::new(1.0, 2.0));
        let b = shape.bounds();
        assert!((b.x0 - 1.0).abs() < f64::EPSILON);
        assert!((b.y0 - 2.0).abs() < f64::EPSILON);
        assert!((b.width() - 2.0).abs() < f64::EPSILON);
        assert!((b.height() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_name_default() {
        let mut bed = rect_bed(0.0, 0.0, 1.0, 1.0);
        assert_eq!(bed.display_name(), "Bed");
        bed.name = "Tomatoes".into();
        assert_eq!(bed.display_name(), "Tomatoes");
    }

    #[test]
    fn test_minimum_size() {
        assert!(!rect_bed(0.0, 0.0, 0.15, 0.15).meets_minimum_size());
        assert!(!rect_bed(0.0, 0.0, 1.0, 0.1).meets_minimum_size());
        assert!(rect_bed(0.0, 0.0, 0.25, 0.25).meets_minimum_size());
    }

    #[test]
    fn test_translate_polygon() {
        let mut shape = BedShape::Polygon(Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ]));
        shape.translate(Vec2::new(2.0, 3.0));
        let b = shape.bounds();
        assert!((b.x0 - 2.0).abs() < f64::EPSILON);
        assert!((b.y0 - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_bounds_scales_polygon() {
        let mut shape = BedShape::Polygon(Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ]));
        shape.set_bounds(Rect::new(1.0, 1.0, 2.0, 5.0));
        let b = shape.bounds();
        assert!((b.x0 - 1.0).abs() < 1e-9);
        assert!((b.y0 - 1.0).abs() < 1e-9);
        assert!((b.width() - 1.0).abs() < 1e-9);
        assert!((b.height() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test_rect() {
        let bed = rect_bed(1.0, 1.0, 2.0, 1.0);
        assert!(bed.hit_test(Point::new(2.0, 1.5)));
        assert!(!bed.hit_test(Point::new(0.5, 1.5)));
    }
}
