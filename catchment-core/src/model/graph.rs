//! In-memory graph store backed by a `petgraph` directed graph.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use petgraph::{
    Direction as PetDirection,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use super::components::{Edge, Node, NodeId};
use super::locator::NodeLocator;
use crate::{Direction, Distance, Error};

/// Weighted graph with a marked subset of source nodes.
///
/// The store is only mutated while it is being built. Solvers borrow it
/// immutably, so any number of solves can share one store across threads.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    pub(crate) graph: DiGraph<Node, Distance>,
    index: HashMap<NodeId, NodeIndex>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Add a bare node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: impl Into<NodeId>, is_source: bool) -> Result<(), Error> {
        self.add_node_with(Node::new(id).source(is_source))
    }

    /// Add a fully described node (label, geometry, source flag).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if the node id is already present.
    pub fn add_node_with(&mut self, node: Node) -> Result<(), Error> {
        let id = node.id;
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        Ok(())
    }

    /// Add a directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is missing and
    /// [`Error::InvalidWeight`] if the weight is negative, NaN or infinite.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: Distance,
    ) -> Result<(), Error> {
        let (from, to) = (from.into(), to.into());
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { from, to, weight });
        }
        self.graph.add_edge(a, b, weight);
        Ok(())
    }

    /// Add the pair of directed edges `a -> b` and `b -> a`.
    ///
    /// # Errors
    ///
    /// Same as [`GraphStore::add_edge`]. Nothing is inserted on error.
    pub fn add_undirected_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        weight: Distance,
    ) -> Result<(), Error> {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Change the source flag of an existing node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is absent.
    pub fn set_source(&mut self, id: impl Into<NodeId>, is_source: bool) -> Result<(), Error> {
        let idx = self.index_of(id.into())?;
        self.graph[idx].is_source = is_source;
        Ok(())
    }

    /// Outgoing `(neighbor, weight)` pairs in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is absent.
    pub fn neighbors(&self, id: impl Into<NodeId>) -> Result<Vec<(NodeId, Distance)>, Error> {
        self.neighbors_directed(id, Direction::Outgoing)
    }

    /// Neighbors along outgoing or incoming edges, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is absent.
    pub fn neighbors_directed(
        &self,
        id: impl Into<NodeId>,
        direction: Direction,
    ) -> Result<Vec<(NodeId, Distance)>, Error> {
        let idx = self.index_of(id.into())?;
        let dir = PetDirection::from(direction);
        // petgraph walks the adjacency list newest first
        let mut pairs: Vec<(NodeId, Distance)> = self
            .graph
            .edges_directed(idx, dir)
            .map(|edge| {
                let other = match dir {
                    PetDirection::Outgoing => edge.target(),
                    PetDirection::Incoming => edge.source(),
                };
                (self.graph[other].id, *edge.weight())
            })
            .collect();
        pairs.reverse();
        Ok(pairs)
    }

    /// Identifiers of all nodes flagged as sources, ascending.
    pub fn source_nodes(&self) -> BTreeSet<NodeId> {
        self.graph
            .node_weights()
            .filter(|node| node.is_source)
            .map(|node| node.id)
            .collect()
    }

    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.index.get(&id.into()).map(|&idx| &self.graph[idx])
    }

    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        self.index.contains_key(&id.into())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().map(|node| node.id)
    }

    /// All directed edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edge_references().map(|edge| Edge {
            from: self.graph[edge.source()].id,
            to: self.graph[edge.target()].id,
            weight: *edge.weight(),
        })
    }

    /// Build a spatial index over the nodes that carry a geometry.
    pub fn locator(&self) -> NodeLocator {
        NodeLocator::from_nodes(self.nodes())
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.index.get(&id).copied().ok_or(Error::UnknownNode(id))
    }

    pub(crate) fn id_at(&self, idx: NodeIndex) -> NodeId {
        self.graph[idx].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> GraphStore {
        let mut graph = GraphStore::new();
        graph.add_node(1, true).unwrap();
        graph.add_node(2, false).unwrap();
        graph.add_node(3, false).unwrap();
        graph.add_edge(1, 3, 4.0).unwrap();
        graph.add_edge(1, 2, 1.5).unwrap();
        graph.add_edge(2, 3, 2.0).unwrap();
        graph
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let mut graph = triangle();
        assert_eq!(graph.add_node(2, true), Err(Error::DuplicateNode(NodeId(2))));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn edge_with_unknown_endpoint_is_rejected() {
        let mut graph = triangle();
        assert_eq!(graph.add_edge(1, 9, 1.0), Err(Error::UnknownNode(NodeId(9))));
        assert_eq!(graph.add_edge(9, 1, 1.0), Err(Error::UnknownNode(NodeId(9))));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let mut graph = triangle();
        assert!(matches!(
            graph.add_edge(1, 2, -0.5),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge(1, 2, f64::NAN),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge(1, 2, f64::INFINITY),
            Err(Error::InvalidWeight { .. })
        ));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let graph = triangle();
        assert_eq!(
            graph.neighbors(1).unwrap(),
            vec![(NodeId(3), 4.0), (NodeId(2), 1.5)]
        );
        assert!(graph.neighbors(3).unwrap().is_empty());
        assert_eq!(graph.neighbors(7), Err(Error::UnknownNode(NodeId(7))));
    }

    #[test]
    fn incoming_neighbors() {
        let graph = triangle();
        assert_eq!(
            graph.neighbors_directed(3, Direction::Incoming).unwrap(),
            vec![(NodeId(1), 4.0), (NodeId(2), 2.0)]
        );
    }

    #[test]
    fn parallel_and_self_edges_are_kept() {
        let mut graph = triangle();
        graph.add_edge(2, 2, 1.0).unwrap();
        graph.add_edge(1, 2, 0.5).unwrap();
        assert_eq!(graph.neighbors(1).unwrap().len(), 3);
        assert_eq!(graph.neighbors(2).unwrap()[1], (NodeId(2), 1.0));
    }

    #[test]
    fn source_set_can_be_empty_and_updated() {
        let mut graph = triangle();
        assert_eq!(graph.source_nodes().into_iter().collect::<Vec<_>>(), [NodeId(1)]);
        graph.set_source(1, false).unwrap();
        assert!(graph.source_nodes().is_empty());
        graph.set_source(3, true).unwrap();
        graph.set_source(2, true).unwrap();
        assert_eq!(
            graph.source_nodes().into_iter().collect::<Vec<_>>(),
            [NodeId(2), NodeId(3)]
        );
    }

    #[test]
    fn lookup_and_listing() {
        let graph = triangle();
        assert!(graph.contains(2));
        assert!(!graph.contains(NodeId(8)));
        assert_eq!(
            graph.node_ids().collect::<Vec<_>>(),
            [NodeId(1), NodeId(2), NodeId(3)]
        );
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            [
                Edge { from: NodeId(1), to: NodeId(3), weight: 4.0 },
                Edge { from: NodeId(1), to: NodeId(2), weight: 1.5 },
                Edge { from: NodeId(2), to: NodeId(3), weight: 2.0 },
            ]
        );
        assert_eq!(GraphStore::new().edges().count(), 0);
    }

    #[test]
    fn undirected_edge_inserts_both_directions() {
        let mut graph = triangle();
        graph.add_undirected_edge(3, 2, 7.0).unwrap();
        assert!(graph.neighbors(3).unwrap().contains(&(NodeId(2), 7.0)));
        assert!(graph.neighbors(2).unwrap().contains(&(NodeId(3), 7.0)));
    }
}
