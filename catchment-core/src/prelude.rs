// Re-export key components
pub use crate::algo::catchment::{Catchments, catchments};
pub use crate::algo::isochrone::{Band, BandAssignment, Thresholds, partition};
pub use crate::model::{Edge, GraphStore, Node, NodeId, NodeLocator};
pub use crate::routing::{Cancellation, Direction, DistanceResult, Reach, Solver, solve};

pub use crate::Distance;
pub use crate::Error;
