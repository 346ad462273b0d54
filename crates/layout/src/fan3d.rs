//! 3D fan projection of a mind-map tree.
//!
//! A cosmetic re-projection of the radial idea for 3D renderers: siblings
//! fan out across a fixed angular spread around the y axis, each level
//! pushed one ring further out and slightly higher. Child fans inherit a
//! small per-sibling twist from their parent chain so branches do not
//! stack onto the same plane.

use pathwise_catalog::MindMapNode;
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// Distance between rings, in scene units.
const RING_STEP: f64 = 4.0;

/// Total angular spread a sibling group fans across.
const FAN_SPREAD: f64 = PI * 1.5;

/// Per-sibling twist inherited by a child's own fan.
const SIBLING_TWIST: f64 = 0.3;

/// Vertical rise per level.
const LEVEL_RISE: f64 = 1.5;

/// Vertical offset of ring 1 relative to the root.
const BASE_DROP: f64 = 2.0;

/// A positioned node from one 3D layout pass.
#[derive(Debug, Clone, Serialize)]
pub struct NodePosition3<'a> {
    /// The tree node this position belongs to.
    pub node: &'a MindMapNode,
    /// Scene coordinates `[x, y, z]`.
    pub position: [f64; 3],
    /// Depth, 0 for the root.
    pub level: usize,
    /// Index among siblings.
    pub index: usize,
    /// Parent's coordinates; `None` for the root.
    pub parent_position: Option<[f64; 3]>,
}

/// Compute 3D positions for every node of the tree.
///
/// The root sits at the origin. A node at depth `level` with sibling
/// index `i` sits on the ring `level * RING_STEP` at angle
/// `-FAN_SPREAD / 2 + step * i + twist`, where `step` divides the spread
/// among the siblings and `twist` accumulates [`SIBLING_TWIST`] offsets
/// down the parent chain. Height grows linearly with depth.
#[must_use]
pub fn layout_fan3d(root: &MindMapNode) -> Vec<NodePosition3<'_>> {
    let mut positions = Vec::with_capacity(root.node_count());
    place(root, 0, 0, None, 0.0, 1, &mut positions);
    debug!(nodes = positions.len(), "computed 3d fan layout");
    positions
}

fn place<'a>(
    node: &'a MindMapNode,
    level: usize,
    index: usize,
    parent_position: Option<[f64; 3]>,
    angle_offset: f64,
    total_siblings: usize,
    out: &mut Vec<NodePosition3<'a>>,
) {
    let position = if level == 0 {
        [0.0, 0.0, 0.0]
    } else {
        let radius = level as f64 * RING_STEP;
        let start_angle = -FAN_SPREAD / 2.0;
        let angle_step = if total_siblings > 1 {
            FAN_SPREAD / (total_siblings - 1) as f64
        } else {
            0.0
        };
        let angle = start_angle + angle_step * index as f64 + angle_offset;

        [
            angle.sin() * radius,
            level as f64 * LEVEL_RISE - BASE_DROP,
            angle.cos() * radius,
        ]
    };

    out.push(NodePosition3 {
        node,
        position,
        level,
        index,
        parent_position,
    });

    let sibling_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let twist = (i as f64 - (sibling_count - 1) as f64 / 2.0) * SIBLING_TWIST;
        place(
            child,
            level + 1,
            i,
            Some(position),
            angle_offset + twist,
            sibling_count,
            out,
        );
    }
}
