use crate::models::common::{BoundingBox, PointId};

/// An index of a node inside quadtree arena.
pub type NodeIndex = usize;

/// A quadtree node which represents an axis-aligned box. Children are indexed by quadrant,
/// only leaf nodes hold points.
#[derive(Clone, Debug)]
pub struct Node {
    pub(super) bbox: BoundingBox,
    pub(super) children: [Option<NodeIndex>; 4],
    pub(super) points: Vec<PointId>,
    pub(super) indirect_points: usize,
}

impl Node {
    pub(super) fn new(bbox: BoundingBox) -> Self {
        Self { bbox, children: [None; 4], points: Vec::default(), indirect_points: 0 }
    }

    /// Returns true if node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Returns the box covered by the node.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Returns indices of existing children.
    pub fn children(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Returns points stored directly in the node.
    pub fn points(&self) -> &[PointId] {
        self.points.as_slice()
    }

    /// Returns amount of points stored in the node and all of its descendants.
    pub fn total_points(&self) -> usize {
        self.indirect_points + self.points.len()
    }
}
