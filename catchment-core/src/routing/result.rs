use std::collections::{BTreeMap, BTreeSet};

use hashbrown::HashMap;
use serde::Serialize;

use crate::{Direction, Distance, NodeId};

/// Outcome of the search for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reach {
    Reached { distance: Distance, source: NodeId },
    Unreachable,
}

impl Reach {
    pub fn distance(&self) -> Option<Distance> {
        match self {
            Reach::Reached { distance, .. } => Some(*distance),
            Reach::Unreachable => None,
        }
    }

    pub fn source(&self) -> Option<NodeId> {
        match self {
            Reach::Reached { source, .. } => Some(*source),
            Reach::Unreachable => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Reach::Reached { .. })
    }
}

/// Distance to the nearest source for every node of a graph.
///
/// Produced once by the solver and never modified afterwards; a new
/// source set or a changed graph needs a new solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceResult {
    nodes: BTreeMap<NodeId, Reach>,
    sources: BTreeSet<NodeId>,
    direction: Direction,
    #[serde(skip)]
    predecessors: HashMap<NodeId, NodeId>,
}

impl DistanceResult {
    pub(crate) fn new(
        reaches: Vec<(NodeId, Reach)>,
        links: Vec<(NodeId, NodeId)>,
        sources: BTreeSet<NodeId>,
        direction: Direction,
    ) -> Self {
        Self {
            nodes: reaches.into_iter().collect(),
            sources,
            direction,
            predecessors: links.into_iter().collect(),
        }
    }

    /// `None` if the node was not part of the solved graph
    pub fn get(&self, id: impl Into<NodeId>) -> Option<&Reach> {
        self.nodes.get(&id.into())
    }

    pub fn distance(&self, id: impl Into<NodeId>) -> Option<Distance> {
        self.get(id).and_then(Reach::distance)
    }

    pub fn nearest_source(&self, id: impl Into<NodeId>) -> Option<NodeId> {
        self.get(id).and_then(Reach::source)
    }

    /// All nodes in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Reach)> {
        self.nodes.iter().map(|(id, reach)| (*id, reach))
    }

    pub fn reached(&self) -> impl Iterator<Item = (NodeId, Distance, NodeId)> + '_ {
        self.nodes.iter().filter_map(|(id, reach)| match reach {
            Reach::Reached { distance, source } => Some((*id, *distance, *source)),
            Reach::Unreachable => None,
        })
    }

    pub fn unreachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|(_, reach)| !reach.is_reached())
            .map(|(id, _)| *id)
    }

    /// Source set the search was seeded with
    pub fn sources(&self) -> &BTreeSet<NodeId> {
        &self.sources
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn reached_count(&self) -> usize {
        self.nodes.values().filter(|reach| reach.is_reached()).count()
    }

    /// Shortest path between `id` and its nearest source, in travel order.
    ///
    /// For [`Direction::Outgoing`] the path starts at the source, for
    /// [`Direction::Incoming`] it starts at `id` and ends at the source.
    /// `None` if the node is unreachable or unknown.
    pub fn path_to(&self, id: impl Into<NodeId>) -> Option<Vec<NodeId>> {
        let id = id.into();
        let source = self.nearest_source(id)?;

        let mut path = vec![id];
        let mut current = id;
        while current != source {
            current = *self.predecessors.get(&current)?;
            path.push(current);
        }

        if self.direction == Direction::Outgoing {
            path.reverse();
        }
        Some(path)
    }
}
