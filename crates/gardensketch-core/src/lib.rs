//! Core library for the gardensketch canvas editor.
//!
//! Platform-independent model of a freehand garden planner: geometry,
//! camera transform, snapping, domain entities, the editor state machine,
//! and the persistence bridge. Rendering and input delivery live in host
//! crates; this crate works purely in garden meters and screen pixels.

pub mod actions;
pub mod camera;
pub mod catalog;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod handles;
pub mod input;
pub mod shapes;
pub mod snap;
pub mod storage;

pub use actions::{ActionHistory, EditorAction, MAX_UNDO_HISTORY};
pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM, PIXELS_PER_METER};
pub use catalog::{InMemoryCatalog, PlantCatalog, PlantInfo};
pub use document::GardenDocument;
pub use editor::{DrawKind, EditorMode, GardenEditor, Interaction, Tool};
pub use geometry::{refine_outline, Polygon, FREEHAND_SIMPLIFY_TOLERANCE};
pub use handles::{hit_test_corner, resize_from_corner, Corner, CORNER_HIT_TOLERANCE};
pub use input::Gesture;
pub use shapes::{
    Bed, BedColor, BedId, BedShape, GardenId, MarkerId, PlantMarker, Walkway, WalkwayId,
    DEFAULT_WALKWAY_WIDTH, MIN_BED_SIZE, MIN_WALKWAY_LENGTH,
};
pub use snap::{
    edge_positions, find_snap, snap_edge, Axis, SnapGuide, SnapResult, SNAP_THRESHOLD,
};
pub use storage::{
    BedRecord, BedSubscription, GardenStore, MemoryStore, PathRecord, StorageError,
    StorageResult, WriteOp, WriteQueue,
};
