//! Polygon geometry kernel: containment, bounds, smoothing, simplification.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default number of Chaikin passes when smoothing a polygon.
pub const DEFAULT_SMOOTH_ITERATIONS: usize = 2;

/// Distance tolerance (in meters) for reducing raw freehand samples.
///
/// Corresponds to roughly 8 px at the base render scale.
pub const FREEHAND_SIMPLIFY_TOLERANCE: f64 = 0.08;

/// An ordered, closed sequence of points.
///
/// Insertion order defines the boundary path; the last vertex implicitly
/// connects back to the first. A polygon with fewer than 3 points has no
/// interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a list of boundary points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The boundary points in path order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of boundary points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon encloses an interior (at least 3 vertices).
    pub fn has_interior(&self) -> bool {
        self.points.len() >= 3
    }

    /// Ray-casting point-in-polygon test.
    ///
    /// Casts a rightward ray from `point` and counts crossings against each
    /// edge, including the closing edge from the last vertex back to the
    /// first. The `>` / `<=` split on the y comparison handles horizontal
    /// edges and vertices lying exactly on the ray.
    pub fn contains(&self, point: Point) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Axis-aligned bounding box of all vertices.
    ///
    /// Returns `Rect::ZERO` for an empty point list.
    pub fn bounding_box(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Arithmetic mean of the vertices; origin for an empty list.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::ZERO;
        }

        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Chaikin corner-cutting smoothing.
    ///
    /// Each pass replaces every edge (p0, p1) with two points at the 1/4 and
    /// 3/4 interpolation positions, treating the boundary as closed. The
    /// point count exactly doubles per pass. Polygons with fewer than 3
    /// points are returned unchanged.
    pub fn smooth(&self, iterations: usize) -> Polygon {
        if self.points.len() < 3 {
            return self.clone();
        }

        let mut points = self.points.clone();
        for _ in 0..iterations {
            let mut next = Vec::with_capacity(points.len() * 2);
            for i in 0..points.len() {
                let p0 = points[i];
                let p1 = points[(i + 1) % points.len()];
                next.push(Point::new(
                    p0.x + 0.25 * (p1.x - p0.x),
                    p0.y + 0.25 * (p1.y - p0.y),
                ));
                next.push(Point::new(
                    p0.x + 0.75 * (p1.x - p0.x),
                    p0.y + 0.75 * (p1.y - p0.y),
                ));
            }
            points = next;
        }
        Polygon::new(points)
    }

    /// Greedy point-distance reduction.
    ///
    /// Keeps the first point, then every subsequent point whose distance from
    /// the last *kept* point exceeds `tolerance`. Returns the polygon
    /// unchanged when it already has 4 or fewer points. The result never has
    /// more points than the input and always has at least one.
    pub fn simplify(&self, tolerance: f64) -> Polygon {
        if self.points.len() <= 4 {
            return self.clone();
        }

        let mut kept = vec![self.points[0]];
        let mut last = self.points[0];
        for &p in &self.points[1..] {
            if last.distance(p) > tolerance {
                kept.push(p);
                last = p;
            }
        }
        Polygon::new(kept)
    }
}

/// Refine a raw freehand sample run into a bed outline.
///
/// Simplification runs first so that near-duplicate touch samples do not
/// bias the smoothing pass; a single Chaikin pass then rounds the reduced
/// outline.
pub fn refine_outline(samples: &[Point]) -> Polygon {
    Polygon::new(samples.to_vec())
        .simplify(FREEHAND_SIMPLIFY_TOLERANCE)
        .smooth(1)
}
