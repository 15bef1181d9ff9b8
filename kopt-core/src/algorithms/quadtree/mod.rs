//! A point quadtree used to answer "which points lie near this point" queries.
//!
//! Every point gets a Morton key computed from its quantized coordinates at the maximum depth. The key
//! defines a path from the root: nodes along the path are created lazily and the point is stored in the
//! terminal leaf. The tree is built once per run and never changes afterwards since point coordinates
//! are fixed.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/quadtree/quadtree_test.rs"]
mod quadtree_test;

mod domain;
pub use self::domain::Domain;

mod morton;
pub use self::morton::*;

mod node;
pub use self::node::{Node, NodeIndex};

use crate::models::common::{BoundingBox, Length, PointId};
use crate::models::problem::PointSet;
use crate::utils::{GenericError, GenericResult};
use std::sync::Arc;

/// A point quadtree stored as an arena of nodes addressed by index. The root has index 0.
pub struct Quadtree {
    points: Arc<PointSet>,
    domain: Domain,
    nodes: Vec<Node>,
}

impl Quadtree {
    /// Builds a quadtree over all points of the set.
    ///
    /// # Panics
    /// Panics if the built tree does not account for every point exactly once.
    pub fn new(points: Arc<PointSet>, domain: Domain) -> Self {
        let root = Node::new(*domain.bounding_box());
        let mut quadtree = Self { points, domain, nodes: vec![root] };

        (0..quadtree.points.size()).for_each(|point| quadtree.insert(point));

        let counted = quadtree.count_points();
        assert_eq!(counted, quadtree.points.size(), "quadtree did not count points accurately");

        quadtree
    }

    /// Builds a quadtree with a domain of given depth.
    pub fn with_max_depth(points: Arc<PointSet>, max_depth: usize) -> GenericResult<Self> {
        let domain = Domain::new(points.as_ref(), max_depth)?;
        Ok(Self::new(points, domain))
    }

    /// Returns the domain of the tree.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Returns node by its index.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    /// Returns all points stored in leaves whose boxes touch the search box. The result over-approximates:
    /// callers are expected to filter candidates by exact distance.
    pub fn query(&self, search_box: &BoundingBox) -> Vec<PointId> {
        let mut found = Vec::default();
        self.query_into(search_box, &mut found);

        found
    }

    /// Same as `query`, but appends found points to the given buffer.
    pub fn query_into(&self, search_box: &BoundingBox, found: &mut Vec<PointId>) {
        let mut stack = vec![0];

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.bbox.touches(search_box) {
                continue;
            }

            found.extend_from_slice(node.points.as_slice());
            stack.extend(node.children());
        }
    }

    /// Returns all candidate points within the square of given radius around the point.
    pub fn query_around(&self, point: PointId, radius: Length) -> Vec<PointId> {
        let (x, y) = self.points.coordinates(point);
        self.query(&BoundingBox::around(x, y, radius))
    }

    /// Counts points stored in leaves.
    pub fn count_points(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).map(|node| node.points.len()).sum()
    }

    /// Counts all nodes including the root.
    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Checks structural invariants: only leaves hold points, leaves are not empty, indirect counts
    /// match amount of points below each node.
    pub fn validate(&self) -> GenericResult<()> {
        self.nodes.iter().enumerate().try_for_each(|(index, node)| {
            if node.is_leaf() {
                if node.points.is_empty() {
                    return Err(GenericError::from(format!("leaf node {index} is empty")));
                }
            } else {
                if !node.points.is_empty() {
                    return Err(format!("internal node {index} holds points").into());
                }

                let below = node.children().map(|child| self.nodes[child].total_points()).sum::<usize>();
                if below != node.indirect_points {
                    return Err(format!(
                        "node {index} counts {} indirect points, but has {below} below",
                        node.indirect_points
                    )
                    .into());
                }
            }

            Ok(())
        })
    }

    fn insert(&mut self, point: PointId) {
        let (x, y) = self.points.coordinates(point);
        let (grid_x, grid_y) = self.domain.quantize(x, y);
        let key = morton_key(grid_x, grid_y);

        let mut current = 0;
        for (depth, quadrant) in insertion_path(key, self.domain.max_depth()).enumerate() {
            let node = &mut self.nodes[current];
            node.indirect_points += 1;
            node.bbox.extend(x, y);
            let existing = node.children[quadrant];

            current = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new(self.domain.cell_box(depth + 1, grid_x, grid_y)));
                    self.nodes[current].children[quadrant] = Some(child);
                    child
                }
            };
        }

        // coordinates are quantized, so the leaf box is extended to contain the point exactly
        let leaf = &mut self.nodes[current];
        leaf.bbox.extend(x, y);
        leaf.points.push(point);
    }
}
