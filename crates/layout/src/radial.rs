//! 2D radial layout by recursive angular subdivision.

use pathwise_catalog::MindMapNode;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::debug;

/// Distance between concentric rings.
pub const RADIUS_STEP: f64 = 140.0;

/// Fraction of the parent's angular interval granted to its children at
/// levels below the root. The remaining 20% splits into margins on both
/// sides, keeping sibling subtrees visually separated.
const CHILD_SPAN_RATIO: f64 = 0.8;

/// A positioned node from one radial layout pass.
///
/// Borrows the tree it was computed from; positions are ephemeral and
/// recomputed whenever the source tree changes.
#[derive(Debug, Clone, Serialize)]
pub struct NodePosition<'a> {
    /// The tree node this position belongs to.
    pub node: &'a MindMapNode,
    pub x: f64,
    pub y: f64,
    /// Depth, 0 for the root.
    pub level: usize,
    /// Parent's x coordinate; `None` for the root.
    pub parent_x: Option<f64>,
    /// Parent's y coordinate; `None` for the root.
    pub parent_y: Option<f64>,
}

/// Compute 2D positions for every node of the tree.
///
/// The root sits exactly at `(center_x, center_y)`. Each deeper node sits
/// on the ring `level * RADIUS_STEP` along the bisecting angle of the
/// interval its parent assigned to it. The root's children spread over
/// the full circle starting at the top (`-pi/2`); deeper children occupy
/// the centered [`CHILD_SPAN_RATIO`] share of their parent's interval,
/// subdivided evenly.
#[must_use]
pub fn layout_radial(root: &MindMapNode, center_x: f64, center_y: f64) -> Vec<NodePosition<'_>> {
    let mut positions = Vec::with_capacity(root.node_count());
    place(
        root,
        center_x,
        center_y,
        0,
        0.0,
        TAU,
        None,
        &mut positions,
    );
    debug!(nodes = positions.len(), "computed radial layout");
    positions
}

#[allow(clippy::too_many_arguments)]
fn place<'a>(
    node: &'a MindMapNode,
    center_x: f64,
    center_y: f64,
    level: usize,
    angle_start: f64,
    angle_end: f64,
    parent: Option<(f64, f64)>,
    out: &mut Vec<NodePosition<'a>>,
) {
    let (x, y) = if level == 0 {
        (center_x, center_y)
    } else {
        let radius = level as f64 * RADIUS_STEP;
        let angle = (angle_start + angle_end) / 2.0;
        (
            center_x + angle.cos() * radius,
            center_y + angle.sin() * radius,
        )
    };

    out.push(NodePosition {
        node,
        x,
        y,
        level,
        parent_x: parent.map(|(px, _)| px),
        parent_y: parent.map(|(_, py)| py),
    });

    if node.children.is_empty() {
        return;
    }

    let child_count = node.children.len() as f64;
    let (range, start) = if level == 0 {
        (TAU, -FRAC_PI_2)
    } else {
        let range = (angle_end - angle_start) * CHILD_SPAN_RATIO;
        (range, angle_start + (angle_end - angle_start - range) / 2.0)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_start = start + range / child_count * i as f64;
        let child_end = start + range / child_count * (i + 1) as f64;
        place(
            child,
            center_x,
            center_y,
            level + 1,
            child_start,
            child_end,
            Some((x, y)),
            out,
        );
    }
}
