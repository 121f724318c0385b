//! Graph model: nodes, weighted edges and the source-node marking.

pub mod components;
pub mod graph;
pub mod locator;

pub use components::{Edge, Node, NodeId};
pub use graph::GraphStore;
pub use locator::NodeLocator;
