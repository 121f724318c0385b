//! Multi-source shortest distances over weighted graphs.
//!
//! The crate answers one question: for every node, how far is the nearest
//! node of a designated *source* set, and which source is it. On top of
//! that it derives isochrone bands and per-source catchment regions.

pub mod algo;
pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Edge, GraphStore, Node, NodeId, NodeLocator};
pub use routing::{Cancellation, Direction, DistanceResult, Reach, Solver, solve};

/// Edge weight and path length (distance or travel time, caller's unit)
pub type Distance = f64;
