//! Graph components - node identifiers, nodes and edges

use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Distance;

/// Caller-assigned node identifier.
///
/// The ordering of identifiers is the tie-break order used by the solver,
/// so results never depend on insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Graph node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Human readable name, e.g. station name
    pub label: Option<String>,
    /// Optional position, used for nearest-node lookups
    pub geometry: Option<Point<f64>>,
    /// Whether the node belongs to the source set
    pub is_source: bool,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            geometry: None,
            is_source: false,
        }
    }

    #[must_use]
    pub fn source(mut self, is_source: bool) -> Self {
        self.is_source = is_source;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: Point<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }
}

/// Directed weighted edge as seen from outside the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Distance,
}
