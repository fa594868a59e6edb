//! Edge-alignment snapping for beds being dragged or resized.

use kurbo::Rect;

/// Distance threshold for edge alignment, in garden meters (5 cm).
pub const SNAP_THRESHOLD: f64 = 0.05;

/// Axis of an alignment guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// An edge position that produced a snap, for drawing alignment guide lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapGuide {
    pub axis: Axis,
    pub position: f64,
}

/// Result of a snap evaluation.
///
/// `x`/`y` are the snapped top-left position per axis; `None` means no snap
/// on that axis and the raw position should be used. The caller decides
/// whether to apply the snapped coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapResult {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub guides: Vec<SnapGuide>,
}

impl SnapResult {
    /// Check if any axis snapped.
    pub fn is_snapped(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Compute alignment snapping for a candidate bounding box.
///
/// Candidate edges are tested against the garden's own edges and each
/// sibling's edges, in list order. Per axis the leading edge (left/top) is
/// tested first; the trailing edge is only consulted when the leading edge
/// found no match, and its snap is reported as the implied leading position
/// (`edge - extent`). At most one snap is applied per axis; the first edge
/// within [`SNAP_THRESHOLD`] wins.
pub fn find_snap(candidate: Rect, siblings: &[Rect], garden: Rect) -> SnapResult {
    let (edges_x, edges_y) = edge_positions(siblings, garden);
    let mut result = SnapResult::default();

    if let Some((pos, edge)) = snap_axis(candidate.x0, candidate.width(), &edges_x) {
        result.x = Some(pos);
        result.guides.push(SnapGuide {
            axis: Axis::X,
            position: edge,
        });
    }
    if let Some((pos, edge)) = snap_axis(candidate.y0, candidate.height(), &edges_y) {
        result.y = Some(pos);
        result.guides.push(SnapGuide {
            axis: Axis::Y,
            position: edge,
        });
    }

    result
}

/// Snap one axis. Returns the snapped leading position and the edge that
/// produced it.
fn snap_axis(leading: f64, extent: f64, edges: &[f64]) -> Option<(f64, f64)> {
    if let Some(edge) = snap_edge(leading, edges) {
        return Some((edge, edge));
    }
    let trailing = leading + extent;
    snap_edge(trailing, edges).map(|edge| (edge - extent, edge))
}

/// Snap a single edge coordinate to the first list edge within
/// [`SNAP_THRESHOLD`]. Used directly when resizing, where only the moving
/// edge may snap.
pub fn snap_edge(value: f64, edges: &[f64]) -> Option<f64> {
    edges
        .iter()
        .copied()
        .find(|edge| (value - edge).abs() <= SNAP_THRESHOLD)
}

/// All alignment edge positions per axis: the garden's own edges followed
/// by each sibling's, in list order.
pub fn edge_positions(siblings: &[Rect], garden: Rect) -> (Vec<f64>, Vec<f64>) {
    let mut edges_x = vec![garden.x0, garden.x1];
    let mut edges_y = vec![garden.y0, garden.y1];
    for sib in siblings {
        edges_x.push(sib.x0);
        edges_x.push(sib.x1);
        edges_y.push(sib.y0);
        edges_y.push(sib.y1);
    }
    (edges_x, edges_y)
}
