//! Corner handles for selecting and resizing beds.

use crate::shapes::MIN_BED_SIZE;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Corner hit tolerance in garden meters (15 cm).
pub const CORNER_HIT_TOLERANCE: f64 = 0.15;

/// Corner positions of a bed's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Position of this corner on a bounding box.
    pub fn position(self, bounds: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(bounds.x0, bounds.y0),
            Corner::TopRight => Point::new(bounds.x1, bounds.y0),
            Corner::BottomLeft => Point::new(bounds.x0, bounds.y1),
            Corner::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }

    const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// Find which corner of `bounds` (if any) is within tolerance of `point`.
pub fn hit_test_corner(bounds: Rect, point: Point, tolerance: f64) -> Option<Corner> {
    for corner in Corner::ALL {
        let pos = corner.position(bounds);
        let dx = point.x - pos.x;
        let dy = point.y - pos.y;
        if dx * dx + dy * dy <= tolerance * tolerance {
            return Some(corner);
        }
    }
    None
}

/// Recompute a bed's bounding box from an active corner and the pointer.
///
/// The two edges adjacent to the opposite (fixed) corner are held constant.
/// Each free edge is clamped so the rectangle never shrinks below
/// [`MIN_BED_SIZE`] and never extends past the garden bounds.
pub fn resize_from_corner(bounds: Rect, corner: Corner, pointer: Point, garden: Rect) -> Rect {
    let (x0, x1) = match corner {
        Corner::TopLeft | Corner::BottomLeft => {
            let new_x0 = pointer.x.clamp(garden.x0, bounds.x1 - MIN_BED_SIZE);
            (new_x0, bounds.x1)
        }
        Corner::TopRight | Corner::BottomRight => {
            let new_x1 = pointer.x.clamp(bounds.x0 + MIN_BED_SIZE, garden.x1);
            (bounds.x0, new_x1)
        }
    };
    let (y0, y1) = match corner {
        Corner::TopLeft | Corner::TopRight => {
            let new_y0 = pointer.y.clamp(garden.y0, bounds.y1 - MIN_BED_SIZE);
            (new_y0, bounds.y1)
        }
        Corner::BottomLeft | Corner::BottomRight => {
            let new_y1 = pointer.y.clamp(bounds.y0 + MIN_BED_SIZE, garden.y1);
            (bounds.y0, new_y1)
        }
    };
    Rect::new(x0, y0, x1, y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garden() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_hit_test_corner() {
        let bounds = Rect::new(1.0, 1.0, 3.0, 2.0);
        assert_eq!(
            hit_test_corner(bounds, Point::new(1.05, 1.05), CORNER_HIT_TOLERANCE),
            Some(Corner::TopLeft)
        );
        assert_eq!(
            hit_test_corner(bounds, Point::new(3.1, 2.1), CORNER_HIT_TOLERANCE),
            Some(Corner::BottomRight)
        );
        assert_eq!(
            hit_test_corner(bounds, Point::new(2.0, 1.5), CORNER_HIT_TOLERANCE),
            None
        );
    }

    #[test]
    fn test_resize_bottom_right() {
        let bounds = Rect::new(1.0, 1.0, 2.0, 2.0);
        let resized =
            resize_from_corner(bounds, Corner::BottomRight, Point::new(4.0, 3.0), garden());
        assert_eq!(resized, Rect::new(1.0, 1.0, 4.0, 3.0));
    }

    #[test]
    fn test_resize_holds_fixed_corner() {
        let bounds = Rect::new(1.0, 1.0, 3.0, 3.0);
        let resized =
            resize_from_corner(bounds, Corner::TopLeft, Point::new(0.5, 0.5), garden());
        assert!((resized.x1 - 3.0).abs() < f64::EPSILON);
        assert!((resized.y1 - 3.0).abs() < f64::EPSILON);
        assert!((resized.x0 - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_clamps_to_minimum_size() {
        let bounds = Rect::new(1.0, 1.0, 2.0, 2.0);
        // Dragging the bottom-right corner past the top-left.
        let resized =
            resize_from_corner(bounds, Corner::BottomRight, Point::new(0.0, 0.0), garden());
        assert!((resized.width() - MIN_BED_SIZE).abs() < 1e-12);
        assert!((resized.height() - MIN_BED_SIZE).abs() < 1e-12);
    }

    #[test]
    fn test_resize_clamps_to_garden() {
        let bounds = Rect::new(8.0, 8.0, 9.0, 9.0);
        let resized =
            resize_from_corner(bounds, Corner::BottomRight, Point::new(15.0, 15.0), garden());
        assert!((resized.x1 - 10.0).abs() < f64::EPSILON);
        assert!((resized.y1 - 10.0).abs() < f64::EPSILON);
    }
}
