//! Reversible edit actions and the linear undo/redo history.

use crate::document::GardenDocument;
use crate::shapes::{Bed, BedId, PlantMarker, Walkway};
use serde::{Deserialize, Serialize};

/// Maximum number of actions kept in the undo history.
pub const MAX_UNDO_HISTORY: usize = 50;

/// One reversible edit.
///
/// Each variant carries full entity snapshots (exact-snapshot model), so
/// inverting never needs recomputation or diffing. Actions exist only for
/// the session's undo history; they are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditorAction {
    AddBed { bed: Bed },
    UpdateBed { old: Bed, new: Bed },
    DeleteBed { bed: Bed },
    AddPath { path: Walkway },
    DeletePath { path: Walkway },
    AddPlant { bed_id: BedId, marker: PlantMarker },
    RemovePlant { bed_id: BedId, marker: PlantMarker },
}

impl EditorAction {
    /// The structurally inverse action: add and delete are mutual inverses,
    /// update swaps its snapshots.
    pub fn inverted(&self) -> EditorAction {
        match self {
            EditorAction::AddBed { bed } => EditorAction::DeleteBed { bed: bed.clone() },
            EditorAction::DeleteBed { bed } => EditorAction::AddBed { bed: bed.clone() },
            EditorAction::UpdateBed { old, new } => EditorAction::UpdateBed {
                old: new.clone(),
                new: old.clone(),
            },
            EditorAction::AddPath { path } => EditorAction::DeletePath { path: path.clone() },
            EditorAction::DeletePath { path } => EditorAction::AddPath { path: path.clone() },
            EditorAction::AddPlant { bed_id, marker } => EditorAction::RemovePlant {
                bed_id: *bed_id,
                marker: marker.clone(),
            },
            EditorAction::RemovePlant { bed_id, marker } => EditorAction::AddPlant {
                bed_id: *bed_id,
                marker: marker.clone(),
            },
        }
    }

    /// Apply this action to a document. Unknown ids degrade to no-ops.
    pub fn apply(&self, doc: &mut GardenDocument) {
        match self {
            EditorAction::AddBed { bed } => doc.add_bed(bed.clone()),
            EditorAction::DeleteBed { bed } => {
                doc.remove_bed(bed.id);
            }
            EditorAction::UpdateBed { new, .. } => doc.replace_bed(new.clone()),
            EditorAction::AddPath { path } => doc.add_path(path.clone()),
            EditorAction::DeletePath { path } => {
                doc.remove_path(path.id);
            }
            EditorAction::AddPlant { bed_id, marker } => {
                if let Some(bed) = doc.bed_mut(*bed_id) {
                    bed.plants.push(marker.clone());
                }
            }
            EditorAction::RemovePlant { bed_id, marker } => {
                if let Some(bed) = doc.bed_mut(*bed_id) {
                    bed.plants.retain(|m| m.id != marker.id);
                }
            }
        }
    }
}

/// Linear undo/redo history: two stacks, no branching.
#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    undo: Vec<EditorAction>,
    redo: Vec<EditorAction>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly committed action. Clears the redo stack and bounds
    /// the undo stack at [`MAX_UNDO_HISTORY`] entries.
    pub fn record(&mut self, action: EditorAction) {
        self.undo.push(action);
        self.redo.clear();
        if self.undo.len() > MAX_UNDO_HISTORY {
            self.undo.remove(0);
        }
    }

    /// Pop the most recent action and return its inverse for the caller to
    /// apply. The original action moves to the redo stack. Returns `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<EditorAction> {
        let action = self.undo.pop()?;
        let inverse = action.inverted();
        self.redo.push(action);
        Some(inverse)
    }

    /// Pop the most recent undone action and return it for the caller to
    /// re-apply. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<EditorAction> {
        let action = self.redo.pop()?;
        self.undo.push(action.clone());
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
