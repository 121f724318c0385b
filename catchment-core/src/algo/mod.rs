//! Post-processing of solver output into isochrone bands and catchments.

pub mod catchment;
pub mod isochrone;

pub use catchment::{Catchments, catchments};
pub use isochrone::{Band, BandAssignment, Thresholds, partition};
