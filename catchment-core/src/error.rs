use thiserror::Error;

use crate::{Distance, NodeId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Node {0} already exists")]
    DuplicateNode(NodeId),
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),
    #[error("Invalid weight {weight} on edge {from} -> {to}: weights must be finite and non-negative")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: Distance,
    },
    #[error("Graph has no source nodes")]
    NoSourceNodes,
    #[error("Invalid cutoff {0}: must be non-negative")]
    InvalidCutoff(Distance),
    #[error("Thresholds are not strictly ascending at position {index}")]
    UnsortedThresholds { index: usize },
    #[error("Invalid threshold {value} at position {index}")]
    InvalidThreshold { index: usize, value: Distance },
    #[error("Solve cancelled after finalizing {finalized} nodes")]
    Cancelled { finalized: usize },
}
