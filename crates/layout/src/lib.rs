//! Geometric layout for mind-map trees.
//!
//! Two pure layout passes over a [`pathwise_catalog::MindMapNode`] tree:
//! - [`layout_radial`]: concentric 2D rings with angular subdivision
//! - [`layout_fan3d`]: a 3D fan projection of the same tree
//!
//! Both walk the tree depth-first, root first, and attach the parent's
//! coordinates to every position so connectors can be drawn without a
//! second traversal. Output order is an implementation convenience;
//! consumers correlate positions by node id. The engines trust the tree
//! invariant (rooted, acyclic) established by the content provider.

pub mod fan3d;
pub mod radial;

pub use fan3d::{layout_fan3d, NodePosition3};
pub use radial::{layout_radial, NodePosition, RADIUS_STEP};
