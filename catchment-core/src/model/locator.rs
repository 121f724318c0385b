//! Nearest-node lookup over node coordinates.

use geo::Point;
use rstar::{PointDistance, RTree, primitives::GeomWithData};

use super::components::{Node, NodeId};

pub type IndexedPoint = GeomWithData<[f64; 2], NodeId>;

/// R-tree over the nodes that have a geometry.
///
/// Built from a [`GraphStore`](super::GraphStore) snapshot; it does not
/// observe later changes to the store.
#[derive(Debug, Clone)]
pub struct NodeLocator {
    tree: RTree<IndexedPoint>,
}

impl NodeLocator {
    pub fn from_nodes<'a>(nodes: impl Iterator<Item = &'a Node>) -> Self {
        let points = nodes
            .filter_map(|node| {
                node.geometry
                    .map(|point| IndexedPoint::new([point.x(), point.y()], node.id))
            })
            .collect::<Vec<_>>();

        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Nearest node and its planar distance to `point`
    pub fn nearest(&self, point: &Point<f64>) -> Option<(NodeId, f64)> {
        let query = [point.x(), point.y()];
        self.tree
            .nearest_neighbor(&query)
            .map(|found| (found.data, found.distance_2(&query).sqrt()))
    }

    /// All nodes within `radius` of `point`, closest first
    pub fn within(&self, point: &Point<f64>, radius: f64) -> Vec<(NodeId, f64)> {
        let query = [point.x(), point.y()];
        let mut found: Vec<(NodeId, f64)> = self
            .tree
            .locate_within_distance(query, radius * radius)
            .map(|item| (item.data, item.distance_2(&query).sqrt()))
            .collect();
        found.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        found
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
