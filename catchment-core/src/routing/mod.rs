//! Shortest-distance computation from a set of source nodes.

pub mod dijkstra;
mod result;

use serde::{Deserialize, Serialize};

pub use dijkstra::{Cancellation, Solver, solve};
pub use result::{DistanceResult, Reach};

/// Which edges the solver follows when expanding a node.
///
/// `Outgoing` measures distance *from* the nearest source, `Incoming`
/// measures distance *to* the nearest source over the same directed edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Outgoing,
    Incoming,
}

impl From<Direction> for petgraph::Direction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Outgoing => petgraph::Direction::Outgoing,
            Direction::Incoming => petgraph::Direction::Incoming,
        }
    }
}
