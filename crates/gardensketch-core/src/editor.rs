//! The editor state machine: modes, tools, gesture handling, undo/redo.
//!
//! All gesture input arrives in screen coordinates and is converted through
//! the camera at entry; everything below this layer works in garden meters.
//! Every committed mutation records one undo entry and enqueues one storage
//! write.

use crate::actions::{ActionHistory, EditorAction};
use crate::camera::Camera;
use crate::catalog::PlantCatalog;
use crate::document::GardenDocument;
use crate::geometry::refine_outline;
use crate::handles::{hit_test_corner, resize_from_corner, Corner, CORNER_HIT_TOLERANCE};
use crate::input::Gesture;
use crate::shapes::{
    Bed, BedId, BedShape, MarkerId, PlantMarker, Walkway, WalkwayId, MIN_BED_SIZE,
    MIN_WALKWAY_LENGTH,
};
use crate::snap::{edge_positions, find_snap, snap_edge, Axis, SnapGuide};
use crate::storage::{BedRecord, GardenStore, PathRecord, WriteOp, WriteQueue};
use kurbo::{Point, Rect, Vec2};
use std::sync::Arc;

/// Minimum pointer travel (meters) between recorded freehand samples.
pub const FREEHAND_SAMPLE_MIN_MOVE: f64 = 0.03;

/// Top-level editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Browse the garden: pan, zoom, tap to highlight. No mutation.
    Navigation,
    /// Edit the garden layout.
    Build,
}

/// How a new bed is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Rect,
    Freehand,
}

/// Active tool within build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    AddBed(DrawKind),
    AddPath,
}

/// In-flight interaction sub-state.
#[derive(Debug, Clone)]
pub enum Interaction {
    Idle,
    /// A draw gesture in progress: the anchor point and the samples so far.
    Drawing { anchor: Point, points: Vec<Point> },
    /// A bed being moved; `original` is the pre-drag snapshot for undo.
    Dragging {
        bed: BedId,
        last: Point,
        original: Bed,
    },
    /// A bed being resized from one corner.
    Resizing {
        bed: BedId,
        corner: Corner,
        original: Bed,
    },
    /// A freshly drawn freehand bed awaiting a name.
    Naming { bed: BedId },
}

/// The garden canvas editor.
pub struct GardenEditor {
    document: GardenDocument,
    camera: Camera,
    mode: EditorMode,
    tool: Tool,
    interaction: Interaction,
    selected: Option<BedId>,
    highlighted: Option<BedId>,
    snap_guides: Vec<SnapGuide>,
    history: ActionHistory,
    writes: Arc<WriteQueue>,
}

impl GardenEditor {
    /// Create an editor over a document, writing through to `store`.
    pub fn new(document: GardenDocument, store: Arc<dyn GardenStore>) -> Self {
        let camera = Camera::new(document.size);
        Self {
            camera,
            document,
            mode: EditorMode::Navigation,
            tool: Tool::Select,
            interaction: Interaction::Idle,
            selected: None,
            highlighted: None,
            snap_guides: Vec::new(),
            history: ActionHistory::new(),
            writes: Arc::new(WriteQueue::new(store)),
        }
    }

    pub fn document(&self) -> &GardenDocument {
        &self.document
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn selected_bed(&self) -> Option<BedId> {
        self.selected
    }

    pub fn highlighted_bed(&self) -> Option<BedId> {
        self.highlighted
    }

    /// Alignment guides produced by the current drag, for rendering.
    pub fn snap_guides(&self) -> &[SnapGuide] {
        &self.snap_guides
    }

    /// The pending-write queue; hosts flush it on their executor.
    pub fn writes(&self) -> Arc<WriteQueue> {
        self.writes.clone()
    }

    /// Switch editor mode. Any in-flight interaction is abandoned; entering
    /// navigation clears the selection. The tool resets to select.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.tool = Tool::Select;
        self.interaction = Interaction::Idle;
        self.snap_guides.clear();
        if mode == EditorMode::Navigation {
            self.selected = None;
        }
    }

    /// Switch the active tool. Ignored outside build mode.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.mode != EditorMode::Build {
            return;
        }
        self.tool = tool;
        self.interaction = Interaction::Idle;
        self.snap_guides.clear();
    }

    /// Route a gesture to the matching handler.
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::DragStart { position } => self.drag_start(position),
            Gesture::DragMove { position } => self.drag_move(position),
            Gesture::DragEnd => self.drag_end(),
            Gesture::Tap { position } => self.tap(position),
            Gesture::PanZoom { pan, zoom_factor } => self.pan_zoom(pan, zoom_factor),
        }
    }

    /// Begin a drag gesture at a screen position.
    pub fn drag_start(&mut self, screen: Point) {
        if self.mode != EditorMode::Build {
            return;
        }
        let p = self.camera.to_garden(screen);

        match self.tool {
            Tool::Select => {
                // A corner of the selected bed takes priority over body hits.
                if let Some(sel) = self.selected {
                    if let Some(bed) = self.document.bed(sel) {
                        if let Some(corner) =
                            hit_test_corner(bed.bounds(), p, CORNER_HIT_TOLERANCE)
                        {
                            self.interaction = Interaction::Resizing {
                                bed: sel,
                                corner,
                                original: bed.clone(),
                            };
                            return;
                        }
                    }
                }
                if let Some(bed) = self.document.bed_at_point(p) {
                    let id = bed.id;
                    let original = bed.clone();
                    self.selected = Some(id);
                    // A touch near the hit bed's corner resizes it directly,
                    // selection or not.
                    if let Some(corner) =
                        hit_test_corner(original.bounds(), p, CORNER_HIT_TOLERANCE)
                    {
                        self.interaction = Interaction::Resizing {
                            bed: id,
                            corner,
                            original,
                        };
                    } else {
                        self.interaction = Interaction::Dragging {
                            bed: id,
                            last: p,
                            original,
                        };
                    }
                } else {
                    self.selected = None;
                    self.interaction = Interaction::Idle;
                }
            }
            Tool::AddBed(DrawKind::Freehand) => {
                self.interaction = Interaction::Drawing {
                    anchor: p,
                    points: vec![p],
                };
            }
            Tool::AddBed(DrawKind::Rect) | Tool::AddPath => {
                self.interaction = Interaction::Drawing {
                    anchor: p,
                    points: Vec::new(),
                };
            }
        }
    }

    /// Continue a drag gesture.
    pub fn drag_move(&mut self, screen: Point) {
        let p = self.camera.to_garden(screen);

        if let Interaction::Drawing { points, .. } = &mut self.interaction {
            match self.tool {
                Tool::AddBed(DrawKind::Freehand) => {
                    let far_enough = points
                        .last()
                        .map_or(true, |last| last.distance(p) > FREEHAND_SAMPLE_MIN_MOVE);
                    if far_enough {
                        points.push(p);
                    }
                }
                // Rect and path draws only track the current endpoint.
                _ => {
                    points.clear();
                    points.push(p);
                }
            }
            return;
        }

        let dragging = match &mut self.interaction {
            Interaction::Dragging { bed, last, .. } => {
                let delta = p - *last;
                *last = p;
                Some((*bed, delta))
            }
            _ => None,
        };
        if let Some((id, delta)) = dragging {
            if !self.move_bed(id, delta) {
                self.abort_interaction();
            }
            return;
        }

        let resizing = match &self.interaction {
            Interaction::Resizing { bed, corner, .. } => Some((*bed, *corner)),
            _ => None,
        };
        if let Some((id, corner)) = resizing {
            if !self.resize_bed(id, corner, p) {
                self.abort_interaction();
            }
        }
    }

    /// Finish a drag gesture: commit the in-flight interaction.
    pub fn drag_end(&mut self) {
        let interaction = std::mem::replace(&mut self.interaction, Interaction::Idle);
        self.snap_guides.clear();

        match interaction {
            Interaction::Dragging { bed, original, .. }
            | Interaction::Resizing { bed, original, .. } => {
                if let Some(current) = self.document.bed(bed) {
                    if *current != original {
                        let action = EditorAction::UpdateBed {
                            old: original,
                            new: current.clone(),
                        };
                        self.record(action);
                    }
                }
            }
            Interaction::Drawing { anchor, points } => match self.tool {
                Tool::AddBed(DrawKind::Rect) => self.finish_rect_bed(anchor, points.last().copied()),
                Tool::AddBed(DrawKind::Freehand) => self.finish_freehand_bed(points),
                Tool::AddPath => self.finish_path(anchor, points.last().copied()),
                Tool::Select => {}
            },
            // A stray drag-end does not dismiss the naming prompt.
            Interaction::Naming { bed } => self.interaction = Interaction::Naming { bed },
            Interaction::Idle => {}
        }
    }

    /// Handle a tap. Navigation taps highlight; build-mode taps select.
    pub fn tap(&mut self, screen: Point) {
        let p = self.camera.to_garden(screen);
        match self.mode {
            EditorMode::Navigation => {
                self.highlighted = self.document.bed_at_point(p).map(|b| b.id);
            }
            EditorMode::Build => {
                if matches!(self.interaction, Interaction::Naming { .. }) {
                    // Tapping away keeps the default name.
                    self.interaction = Interaction::Idle;
                    self.tool = Tool::Select;
                }
                if self.tool == Tool::Select {
                    self.selected = self.document.bed_at_point(p).map(|b| b.id);
                }
            }
        }
    }

    /// Apply a combined pan/zoom gesture. Pan is applied first, at the
    /// pre-gesture scale.
    pub fn pan_zoom(&mut self, pan: Vec2, zoom_factor: f64) {
        self.camera.pan_by(pan);
        self.camera.zoom_by(zoom_factor);
    }

    /// Restore the default view transform.
    pub fn reset_view(&mut self) {
        self.camera.reset_view();
    }

    /// Confirm the name of a freshly drawn freehand bed.
    pub fn finish_naming(&mut self, name: impl Into<String>) {
        let id = match &self.interaction {
            Interaction::Naming { bed } => *bed,
            _ => return,
        };
        self.interaction = Interaction::Idle;
        self.tool = Tool::Select;

        let name = name.into();
        let Some(current) = self.document.bed(id) else {
            return;
        };
        if current.name == name {
            return;
        }
        let old = current.clone();
        let mut new = old.clone();
        new.name = name;
        self.commit(EditorAction::UpdateBed { old, new });
    }

    /// Drop a catalog plant at a screen position. Returns the new marker's
    /// id, or `None` when the point is outside every bed or the plant is
    /// unknown.
    pub fn place_plant(
        &mut self,
        screen: Point,
        plant_id: &str,
        catalog: &dyn PlantCatalog,
    ) -> Option<MarkerId> {
        if self.mode != EditorMode::Build {
            return None;
        }
        let p = self.camera.to_garden(screen);
        let bed_id = self.document.bed_at_point(p)?.id;
        let info = catalog.lookup(plant_id)?;
        let marker = PlantMarker::new(plant_id, p, info.marker_radius());
        let id = marker.id;
        self.commit(EditorAction::AddPlant { bed_id, marker });
        Some(id)
    }

    /// Remove a plant marker from a bed.
    pub fn remove_plant(&mut self, bed_id: BedId, marker_id: MarkerId) -> bool {
        let marker = self
            .document
            .bed(bed_id)
            .and_then(|b| b.plants.iter().find(|m| m.id == marker_id))
            .cloned();
        let Some(marker) = marker else {
            return false;
        };
        self.commit(EditorAction::RemovePlant { bed_id, marker });
        true
    }

    /// Delete the selected bed.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        let Some(bed) = self.document.bed(id).cloned() else {
            return false;
        };
        self.commit(EditorAction::DeleteBed { bed });
        true
    }

    /// Delete a walkway by id.
    pub fn delete_path(&mut self, id: WalkwayId) -> bool {
        let Some(path) = self.document.path(id).cloned() else {
            return false;
        };
        self.commit(EditorAction::DeletePath { path });
        true
    }

    /// Undo the most recent action. Returns `false` when the history is
    /// empty.
    pub fn undo(&mut self) -> bool {
        let Some(inverse) = self.history.undo() else {
            return false;
        };
        inverse.apply(&mut self.document);
        if let Some(op) = self.write_op(&inverse) {
            self.writes.enqueue(op);
        }
        self.prune_stale_references();
        true
    }

    /// Redo the most recently undone action.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.redo() else {
            return false;
        };
        action.apply(&mut self.document);
        if let Some(op) = self.write_op(&action) {
            self.writes.enqueue(op);
        }
        self.prune_stale_references();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply an action to the document, then record and persist it.
    fn commit(&mut self, action: EditorAction) {
        action.apply(&mut self.document);
        self.record(action);
    }

    /// Record an already-applied action and enqueue its storage write.
    fn record(&mut self, action: EditorAction) {
        if let Some(op) = self.write_op(&action) {
            self.writes.enqueue(op);
        }
        self.history.record(action);
    }

    /// The storage write implied by an action, evaluated against the
    /// current document state (plant edits persist the whole owning bed).
    fn write_op(&self, action: &EditorAction) -> Option<WriteOp> {
        match action {
            EditorAction::AddBed { bed } => Some(WriteOp::CreateBed(BedRecord::from(bed))),
            EditorAction::UpdateBed { new, .. } => Some(WriteOp::UpdateBed(BedRecord::from(new))),
            EditorAction::DeleteBed { bed } => Some(WriteOp::DeleteBed {
                garden_id: bed.garden_id,
                id: bed.id,
            }),
            EditorAction::AddPath { path } => Some(WriteOp::CreatePath(PathRecord::from(path))),
            EditorAction::DeletePath { path } => Some(WriteOp::DeletePath {
                garden_id: path.garden_id,
                id: path.id,
            }),
            EditorAction::AddPlant { bed_id, .. } | EditorAction::RemovePlant { bed_id, .. } => {
                self.document
                    .bed(*bed_id)
                    .map(|b| WriteOp::UpdateBed(BedRecord::from(b)))
            }
        }
    }

    /// Translate a bed, clamping into the garden and applying edge snapping.
    /// Returns `false` when the bed no longer exists.
    fn move_bed(&mut self, id: BedId, delta: Vec2) -> bool {
        let garden = self.document.bounds();
        let siblings = self.document.sibling_bounds(id);
        let Some(bed) = self.document.bed_mut(id) else {
            return false;
        };

        let b = bed.bounds();
        let max_x0 = (garden.x1 - b.width()).max(garden.x0);
        let max_y0 = (garden.y1 - b.height()).max(garden.y0);
        let x0 = (b.x0 + delta.x).clamp(garden.x0, max_x0);
        let y0 = (b.y0 + delta.y).clamp(garden.y0, max_y0);
        let candidate = Rect::new(x0, y0, x0 + b.width(), y0 + b.height());

        // A snap that would push the bed outside the garden is ignored.
        let snap = find_snap(candidate, &siblings, garden);
        let snapped_x = snap.x.filter(|x| (garden.x0..=max_x0).contains(x));
        let snapped_y = snap.y.filter(|y| (garden.y0..=max_y0).contains(y));
        let x0 = snapped_x.unwrap_or(x0);
        let y0 = snapped_y.unwrap_or(y0);
        bed.shape
            .set_bounds(Rect::new(x0, y0, x0 + b.width(), y0 + b.height()));

        self.snap_guides = snap
            .guides
            .into_iter()
            .filter(|g| match g.axis {
                Axis::X => snapped_x.is_some(),
                Axis::Y => snapped_y.is_some(),
            })
            .collect();
        true
    }

    /// Resize a bed from a corner handle, snapping the two moving edges.
    /// Returns `false` when the bed no longer exists.
    fn resize_bed(&mut self, id: BedId, corner: Corner, pointer: Point) -> bool {
        let garden = self.document.bounds();
        let siblings = self.document.sibling_bounds(id);
        let Some(bed) = self.document.bed_mut(id) else {
            return false;
        };

        let mut bounds = resize_from_corner(bed.bounds(), corner, pointer, garden);
        let (edges_x, edges_y) = edge_positions(&siblings, garden);
        let mut guides = Vec::new();

        // Only the edges the grabbed corner moves may snap; a snap that
        // would violate the minimum size or the garden bounds is ignored.
        match corner {
            Corner::TopLeft | Corner::BottomLeft => {
                if let Some(edge) = snap_edge(bounds.x0, &edges_x) {
                    if edge >= garden.x0 && edge <= bounds.x1 - MIN_BED_SIZE {
                        bounds.x0 = edge;
                        guides.push(SnapGuide {
                            axis: Axis::X,
                            position: edge,
                        });
                    }
                }
            }
            Corner::TopRight | Corner::BottomRight => {
                if let Some(edge) = snap_edge(bounds.x1, &edges_x) {
                    if edge >= bounds.x0 + MIN_BED_SIZE && edge <= garden.x1 {
                        bounds.x1 = edge;
                        guides.push(SnapGuide {
                            axis: Axis::X,
                            position: edge,
                        });
                    }
                }
            }
        }
        match corner {
            Corner::TopLeft | Corner::TopRight => {
                if let Some(edge) = snap_edge(bounds.y0, &edges_y) {
                    if edge >= garden.y0 && edge <= bounds.y1 - MIN_BED_SIZE {
                        bounds.y0 = edge;
                        guides.push(SnapGuide {
                            axis: Axis::Y,
                            position: edge,
                        });
                    }
                }
            }
            Corner::BottomLeft | Corner::BottomRight => {
                if let Some(edge) = snap_edge(bounds.y1, &edges_y) {
                    if edge >= bounds.y0 + MIN_BED_SIZE && edge <= garden.y1 {
                        bounds.y1 = edge;
                        guides.push(SnapGuide {
                            axis: Axis::Y,
                            position: edge,
                        });
                    }
                }
            }
        }

        bed.shape.set_bounds(bounds);
        self.snap_guides = guides;
        true
    }

    fn finish_rect_bed(&mut self, anchor: Point, current: Option<Point>) {
        let Some(current) = current else {
            return;
        };
        let mut shape = BedShape::rect_from_corners(anchor, current);
        let garden = self.document.bounds();
        shape.set_bounds(clamp_into(shape.bounds(), garden));

        let bed = Bed::new(self.document.id, shape);
        if !bed.meets_minimum_size() {
            return;
        }
        let id = bed.id;
        self.commit(EditorAction::AddBed { bed });
        self.selected = Some(id);
        self.tool = Tool::Select;
    }

    fn finish_freehand_bed(&mut self, points: Vec<Point>) {
        if points.len() < 3 {
            return;
        }
        let outline = refine_outline(&points);
        let bed = Bed::new(self.document.id, BedShape::Polygon(outline));
        if !bed.meets_minimum_size() {
            return;
        }
        let id = bed.id;
        self.commit(EditorAction::AddBed { bed });
        self.selected = Some(id);
        self.interaction = Interaction::Naming { bed: id };
    }

    fn finish_path(&mut self, anchor: Point, current: Option<Point>) {
        let Some(end) = current else {
            return;
        };
        let path = Walkway::new(self.document.id, anchor, end);
        if path.length() < MIN_WALKWAY_LENGTH {
            return;
        }
        if self.document.overlaps_any_bed(path.bounds()) {
            log::debug!("walkway rejected: overlaps a bed");
            return;
        }
        self.commit(EditorAction::AddPath { path });
    }

    /// Abandon the in-flight interaction (e.g. its target bed was deleted).
    fn abort_interaction(&mut self) {
        self.interaction = Interaction::Idle;
        self.snap_guides.clear();
    }

    /// Drop selection/highlight/naming references to beds that no longer
    /// exist after an undo or redo.
    fn prune_stale_references(&mut self) {
        if let Some(id) = self.selected {
            if self.document.bed(id).is_none() {
                self.selected = None;
            }
        }
        if let Some(id) = self.highlighted {
            if self.document.bed(id).is_none() {
                self.highlighted = None;
            }
        }
        if let Interaction::Naming { bed } = &self.interaction {
            if self.document.bed(*bed).is_none() {
                self.interaction = Interaction::Idle;
            }
        }
    }
}

/// Clamp a rect's position so it lies within `garden`, preserving its size
/// where possible.
fn clamp_into(b: Rect, garden: Rect) -> Rect {
    let x0 = b.x0.clamp(garden.x0, (garden.x1 - b.width()).max(garden.x0));
    let y0 = b.y0.clamp(garden.y0, (garden.y1 - b.height()).max(garden.y0));
    Rect::new(x0, y0, x0 + b.width(), y0 + b.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, PlantInfo};
    use crate::storage::MemoryStore;
    use kurbo::Size;

    fn editor() -> GardenEditor {
        let doc = GardenDocument::new("Test", Size::new(10.0, 10.0));
        let mut ed = GardenEditor::new(doc, Arc::new(MemoryStore::new()));
        ed.set_mode(EditorMode::Build);
        ed
    }

    /// Screen position of a garden point under the default view.
    fn s(x: f64, y: f64) -> Point {
        Point::new(x * 100.0, y * 100.0)
    }

    fn draw_rect_bed(ed: &mut GardenEditor, a: Point, b: Point) {
        ed.set_tool(Tool::AddBed(DrawKind::Rect));
        ed.drag_start(s(a.x, a.y));
        ed.drag_move(s(b.x, b.y));
        ed.drag_end();
    }

    #[test]
    fn test_rect_bed_drawn_and_selected() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        assert_eq!(ed.document().beds.len(), 1);
        let bed = &ed.document().beds[0];
        assert_eq!(bed.bounds(), Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(ed.selected_bed(), Some(bed.id));
        assert_eq!(ed.tool(), Tool::Select);
        assert!(ed.can_undo());
    }

    #[test]
    fn test_tiny_rect_discarded() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(1.15, 1.15));
        assert!(ed.document().beds.is_empty());
        assert!(!ed.can_undo());

        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(1.25, 1.25));
        assert_eq!(ed.document().beds.len(), 1);
    }

    #[test]
    fn test_rect_bed_clamped_into_garden() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(9.5, 9.5), Point::new(11.0, 11.0));

        let b = ed.document().beds[0].bounds();
        assert!((b.x1 - 10.0).abs() < 1e-12);
        assert!((b.y1 - 10.0).abs() < 1e-12);
        assert!((b.width() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_freehand_bed_and_naming() {
        let mut ed = editor();
        ed.set_tool(Tool::AddBed(DrawKind::Freehand));

        // Walk the perimeter of a 1m square in 0.1m steps.
        ed.drag_start(s(1.0, 1.0));
        for i in 1..=10 {
            ed.drag_move(s(1.0 + i as f64 * 0.1, 1.0));
        }
        for i in 1..=10 {
            ed.drag_move(s(2.0, 1.0 + i as f64 * 0.1));
        }
        for i in 1..=10 {
            ed.drag_move(s(2.0 - i as f64 * 0.1, 2.0));
        }
        for i in 1..=9 {
            ed.drag_move(s(1.0, 2.0 - i as f64 * 0.1));
        }
        ed.drag_end();

        assert_eq!(ed.document().beds.len(), 1);
        let bed = &ed.document().beds[0];
        assert!(matches!(bed.shape, BedShape::Polygon(_)));
        assert!(bed.hit_test(Point::new(1.5, 1.5)));
        let id = bed.id;
        assert!(matches!(ed.interaction(), Interaction::Naming { bed } if *bed == id));

        ed.finish_naming("Herbs");
        assert_eq!(ed.document().beds[0].name, "Herbs");
        assert!(matches!(ed.interaction(), Interaction::Idle));
        assert_eq!(ed.tool(), Tool::Select);
    }

    #[test]
    fn test_freehand_too_few_points_discarded() {
        let mut ed = editor();
        ed.set_tool(Tool::AddBed(DrawKind::Freehand));
        ed.drag_start(s(1.0, 1.0));
        ed.drag_move(s(1.5, 1.0));
        ed.drag_end();
        assert!(ed.document().beds.is_empty());
    }

    #[test]
    fn test_tiny_freehand_scribble_discarded() {
        let mut ed = editor();
        ed.set_tool(Tool::AddBed(DrawKind::Freehand));
        ed.drag_start(s(1.0, 1.0));
        ed.drag_move(s(1.06, 1.0));
        ed.drag_move(s(1.06, 1.06));
        ed.drag_move(s(1.0, 1.06));
        ed.drag_end();
        assert!(ed.document().beds.is_empty());
    }

    #[test]
    fn test_path_created() {
        let mut ed = editor();
        ed.set_tool(Tool::AddPath);
        ed.drag_start(s(5.0, 5.0));
        ed.drag_move(s(8.0, 5.0));
        ed.drag_end();

        assert_eq!(ed.document().paths.len(), 1);
        assert!((ed.document().paths[0].length() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_short_path_discarded() {
        let mut ed = editor();
        ed.set_tool(Tool::AddPath);
        ed.drag_start(s(5.0, 5.0));
        ed.drag_move(s(5.1, 5.0));
        ed.drag_end();
        assert!(ed.document().paths.is_empty());
    }

    #[test]
    fn test_path_over_bed_rejected() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(3.0, 3.0));

        ed.set_tool(Tool::AddPath);
        ed.drag_start(s(2.0, 0.5));
        ed.drag_move(s(2.0, 4.0));
        ed.drag_end();
        assert!(ed.document().paths.is_empty());

        // Same draw clear of the bed succeeds.
        ed.drag_start(s(6.0, 0.5));
        ed.drag_move(s(6.0, 4.0));
        ed.drag_end();
        assert_eq!(ed.document().paths.len(), 1);
    }

    #[test]
    fn test_drag_moves_bed_with_single_undo_entry() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        ed.drag_start(s(1.5, 1.5));
        ed.drag_move(s(2.5, 2.5));
        ed.drag_move(s(3.5, 3.5));
        ed.drag_end();

        let b = ed.document().beds[0].bounds();
        assert!((b.x0 - 3.0).abs() < 1e-9);
        assert!((b.y0 - 3.0).abs() < 1e-9);

        // One undo restores the pre-drag position; the next removes the bed.
        assert!(ed.undo());
        assert_eq!(ed.document().beds[0].bounds(), Rect::new(1.0, 1.0, 2.0, 2.0));
        assert!(ed.undo());
        assert!(ed.document().beds.is_empty());
        assert!(!ed.can_undo());
    }

    #[test]
    fn test_drag_snaps_to_sibling_edge() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(2.0, 5.0), Point::new(3.0, 6.0));
        draw_rect_bed(&mut ed, Point::new(5.0, 8.0), Point::new(6.0, 9.0));

        // Drag the second bed so its left edge lands 3cm from the first's.
        ed.drag_start(s(5.5, 8.5));
        ed.drag_move(s(2.53, 8.5));
        assert!((ed.document().beds[1].bounds().x0 - 2.0).abs() < 1e-9);
        assert!(!ed.snap_guides().is_empty());
        ed.drag_end();
        assert!(ed.snap_guides().is_empty());
    }

    #[test]
    fn test_drag_misses_snap_outside_threshold() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(2.0, 5.0), Point::new(3.0, 6.0));
        draw_rect_bed(&mut ed, Point::new(5.0, 8.0), Point::new(6.0, 9.0));

        // 10cm away: no snap.
        ed.drag_start(s(5.5, 8.5));
        ed.drag_move(s(2.6, 8.5));
        assert!((ed.document().beds[1].bounds().x0 - 2.1).abs() < 1e-9);
        ed.drag_end();
    }

    #[test]
    fn test_drag_clamped_to_garden() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        ed.drag_start(s(1.5, 1.5));
        ed.drag_move(s(-5.0, 1.5));
        let b = ed.document().beds[0].bounds();
        assert!(b.x0 >= 0.0);
        ed.drag_end();
    }

    #[test]
    fn test_resize_from_corner() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        // Grab the bottom-right corner of the selected bed.
        ed.drag_start(s(2.0, 2.0));
        assert!(matches!(ed.interaction(), Interaction::Resizing { .. }));
        ed.drag_move(s(3.0, 3.0));
        ed.drag_end();

        assert_eq!(ed.document().beds[0].bounds(), Rect::new(1.0, 1.0, 3.0, 3.0));
        assert!(ed.undo());
        assert_eq!(ed.document().beds[0].bounds(), Rect::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_corner_grab_on_unselected_bed_resizes() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let id = ed.document().beds[0].id;

        ed.tap(s(5.0, 5.0));
        assert_eq!(ed.selected_bed(), None);

        // 7cm inside the bottom-right corner: resize, not drag.
        ed.drag_start(s(1.95, 1.95));
        assert!(matches!(
            ed.interaction(),
            Interaction::Resizing {
                corner: Corner::BottomRight,
                ..
            }
        ));
        assert_eq!(ed.selected_bed(), Some(id));

        ed.drag_move(s(3.0, 3.0));
        ed.drag_end();
        assert_eq!(ed.document().beds[0].bounds(), Rect::new(1.0, 1.0, 3.0, 3.0));
    }

    #[test]
    fn test_snap_never_pushes_bed_outside_garden() {
        let mut ed = editor();
        // Sibling whose right edge sits 3cm inside the right wall.
        draw_rect_bed(&mut ed, Point::new(8.03, 5.0), Point::new(9.03, 6.0));
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        ed.drag_start(s(1.5, 1.5));
        ed.drag_move(s(11.0, 1.5));

        // The wall clamp puts the bed at 9.0; the 9.03 edge would push it
        // past the wall, so it must not snap.
        let b = ed.document().beds[1].bounds();
        assert!(b.x1 <= 10.0 + 1e-12);
        assert!((b.x0 - 9.0).abs() < 1e-9);
        assert!(ed.snap_guides().is_empty());
        ed.drag_end();
    }

    #[test]
    fn test_resize_snaps_moving_edge_to_sibling() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(7.03, 5.0), Point::new(8.0, 6.0));
        draw_rect_bed(&mut ed, Point::new(5.0, 5.0), Point::new(6.0, 6.0));

        // Pull the second bed's bottom-right corner toward the sibling's
        // left edge at 7.03.
        ed.drag_start(s(6.0, 6.0));
        assert!(matches!(ed.interaction(), Interaction::Resizing { .. }));
        ed.drag_move(s(7.0, 6.5));

        let b = ed.document().beds[1].bounds();
        assert!((b.x1 - 7.03).abs() < 1e-9);
        assert!((b.x0 - 5.0).abs() < 1e-12);
        assert!((b.y1 - 6.5).abs() < 1e-9);
        assert!(ed.snap_guides().iter().any(|g| g.axis == Axis::X));
        ed.drag_end();
        assert!(ed.snap_guides().is_empty());
    }

    #[test]
    fn test_drag_of_deleted_bed_goes_idle() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        ed.drag_start(s(1.5, 1.5));
        ed.document.beds.clear();
        ed.drag_move(s(3.0, 3.0));
        assert!(matches!(ed.interaction(), Interaction::Idle));
    }

    #[test]
    fn test_navigation_taps_highlight_only() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let id = ed.document().beds[0].id;

        ed.set_mode(EditorMode::Navigation);
        assert_eq!(ed.selected_bed(), None);

        ed.tap(s(1.5, 1.5));
        assert_eq!(ed.highlighted_bed(), Some(id));
        assert_eq!(ed.selected_bed(), None);

        // Drags mutate nothing in navigation mode.
        ed.drag_start(s(1.5, 1.5));
        ed.drag_move(s(4.0, 4.0));
        ed.drag_end();
        assert_eq!(ed.document().beds[0].bounds(), Rect::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_mode_switch_resets_tool_and_selection() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        ed.set_tool(Tool::AddPath);

        ed.set_mode(EditorMode::Navigation);
        assert_eq!(ed.tool(), Tool::Select);
        assert_eq!(ed.selected_bed(), None);
        assert!(matches!(ed.interaction(), Interaction::Idle));
    }

    #[test]
    fn test_tap_selects_and_clears() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let id = ed.document().beds[0].id;

        ed.tap(s(5.0, 5.0));
        assert_eq!(ed.selected_bed(), None);
        ed.tap(s(1.5, 1.5));
        assert_eq!(ed.selected_bed(), Some(id));
    }

    #[test]
    fn test_place_and_remove_plant() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(3.0, 3.0));
        let bed_id = ed.document().beds[0].id;

        let mut catalog = InMemoryCatalog::new();
        catalog.insert(
            "carrot",
            PlantInfo {
                name: "Carrot".into(),
                row_spacing: 0.1,
            },
        );

        // Outside every bed: rejected.
        assert!(ed.place_plant(s(7.0, 7.0), "carrot", &catalog).is_none());
        // Unknown plant: rejected.
        assert!(ed.place_plant(s(2.0, 2.0), "kraken", &catalog).is_none());

        let marker_id = ed
            .place_plant(s(2.0, 2.0), "carrot", &catalog)
            .expect("placed");
        let bed = &ed.document().beds[0];
        assert_eq!(bed.plants.len(), 1);
        assert!((bed.plants[0].radius - 0.05).abs() < 1e-12);

        assert!(ed.undo());
        assert!(ed.document().beds[0].plants.is_empty());
        assert!(ed.redo());
        assert_eq!(ed.document().beds[0].plants.len(), 1);

        assert!(ed.remove_plant(bed_id, marker_id));
        assert!(ed.document().beds[0].plants.is_empty());
        assert!(!ed.remove_plant(bed_id, marker_id));
    }

    #[test]
    fn test_delete_selected_and_undo() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        assert!(ed.delete_selected());
        assert!(ed.document().beds.is_empty());
        assert_eq!(ed.selected_bed(), None);
        assert!(!ed.delete_selected());

        assert!(ed.undo());
        assert_eq!(ed.document().beds.len(), 1);
    }

    #[test]
    fn test_delete_path_and_undo() {
        let mut ed = editor();
        ed.set_tool(Tool::AddPath);
        ed.drag_start(s(5.0, 5.0));
        ed.drag_move(s(8.0, 5.0));
        ed.drag_end();
        let id = ed.document().paths[0].id;

        assert!(ed.delete_path(id));
        assert!(ed.document().paths.is_empty());
        assert!(ed.undo());
        assert_eq!(ed.document().paths.len(), 1);
    }

    #[test]
    fn test_pan_zoom_gesture() {
        let mut ed = editor();
        ed.handle_gesture(Gesture::PanZoom {
            pan: Vec2::new(100.0, 0.0),
            zoom_factor: 2.0,
        });
        assert!((ed.camera().zoom - 2.0).abs() < 1e-12);
        assert!((ed.camera().pan.x - 1.0).abs() < 1e-12);

        ed.reset_view();
        assert!((ed.camera().zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_edits_write_through() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert_eq!(ed.writes().pending_len(), 1);

        ed.undo();
        ed.redo();
        // One create, one delete from undo, one create from redo.
        assert_eq!(ed.writes().pending_len(), 3);
    }

    #[test]
    fn test_undo_prunes_selection() {
        let mut ed = editor();
        draw_rect_bed(&mut ed, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert!(ed.selected_bed().is_some());
        ed.undo();
        assert_eq!(ed.selected_bed(), None);
    }
}
