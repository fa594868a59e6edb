//! Plain serde records exchanged with the durable store, and the mapping
//! to and from in-memory editor entities.

use crate::geometry::Polygon;
use crate::shapes::{
    Bed, BedColor, BedId, BedShape, GardenId, MarkerId, PlantMarker, Walkway, WalkwayId,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Shape payload of a bed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeRecord {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Polygon {
        points: Vec<(f64, f64)>,
    },
}

/// A plant marker as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: MarkerId,
    pub plant_id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A bed as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedRecord {
    pub id: BedId,
    pub garden_id: GardenId,
    pub name: String,
    pub label: Option<String>,
    pub color: [u8; 4],
    pub shape: ShapeRecord,
    pub plants: Vec<PlantRecord>,
}

/// A walkway as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub id: WalkwayId,
    pub garden_id: GardenId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
}

impl From<&Bed> for BedRecord {
    fn from(bed: &Bed) -> Self {
        let shape = match &bed.shape {
            BedShape::Rect {
                position,
                width,
                height,
            } => ShapeRecord::Rect {
                x: position.x,
                y: position.y,
                width: *width,
                height: *height,
            },
            BedShape::Polygon(poly) => ShapeRecord::Polygon {
                points: poly.points().iter().map(|p| (p.x, p.y)).collect(),
            },
        };
        Self {
            id: bed.id,
            garden_id: bed.garden_id,
            name: bed.name.clone(),
            label: bed.label.clone(),
            color: [bed.color.r, bed.color.g, bed.color.b, bed.color.a],
            shape,
            plants: bed.plants.iter().map(PlantRecord::from).collect(),
        }
    }
}

impl From<BedRecord> for Bed {
    fn from(record: BedRecord) -> Self {
        let shape = match record.shape {
            ShapeRecord::Rect {
                x,
                y,
                width,
                height,
            } => BedShape::Rect {
                position: Point::new(x, y),
                width,
                height,
            },
            ShapeRecord::Polygon { points } => BedShape::Polygon(Polygon::new(
                points.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
            )),
        };
        Self {
            id: record.id,
            garden_id: record.garden_id,
            name: record.name,
            label: record.label,
            shape,
            color: BedColor::new(
                record.color[0],
                record.color[1],
                record.color[2],
                record.color[3],
            ),
            plants: record.plants.into_iter().map(PlantMarker::from).collect(),
        }
    }
}

impl From<&PlantMarker> for PlantRecord {
    fn from(marker: &PlantMarker) -> Self {
        Self {
            id: marker.id,
            plant_id: marker.plant_id.clone(),
            x: marker.position.x,
            y: marker.position.y,
            radius: marker.radius,
        }
    }
}

impl From<PlantRecord> for PlantMarker {
    fn from(record: PlantRecord) -> Self {
        Self {
            id: record.id,
            plant_id: record.plant_id,
            position: Point::new(record.x, record.y),
            radius: record.radius,
        }
    }
}

impl From<&Walkway> for PathRecord {
    fn from(path: &Walkway) -> Self {
        Self {
            id: path.id,
            garden_id: path.garden_id,
            x1: path.start.x,
            y1: path.start.y,
            x2: path.end.x,
            y2: path.end.y,
            width: path.width,
        }
    }
}

impl From<PathRecord> for Walkway {
    fn from(record: PathRecord) -> Self {
        Self {
            id: record.id,
            garden_id: record.garden_id,
            start: Point::new(record.x1, record.y1),
            end: Point::new(record.x2, record.y2),
            width: record.width,
        }
    }
}
