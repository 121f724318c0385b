use catchment_core::{
    DistanceResult, Error, GraphStore, Solver,
    algo::{BandAssignment, Catchments, catchments, partition},
};
use log::info;
use serde::Serialize;

use crate::RecomputeConfig;

/// Everything derived from one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recomputation {
    pub distances: DistanceResult,
    pub bands: BandAssignment,
    pub catchments: Catchments,
}

/// Solve with the graph's own source flags, then band and group the result.
///
/// Re-entrant: the graph is only borrowed and no state survives the call.
///
/// # Errors
///
/// Any validation or solve error from [`catchment_core`], see
/// [`recompute_with`].
pub fn recompute(graph: &GraphStore, config: &RecomputeConfig) -> Result<Recomputation, Error> {
    recompute_with(Solver::new(graph), config)
}

/// Same as [`recompute`] with a caller-prepared solver, e.g. one carrying an
/// explicit source set or a cancel flag. Direction and cutoff from `config`
/// override the solver's.
///
/// # Errors
///
/// - threshold validation errors, reported before any search work
/// - [`Error::NoSourceNodes`], [`Error::UnknownNode`], [`Error::InvalidCutoff`]
///   and [`Error::Cancelled`] from the solver
pub fn recompute_with(solver: Solver<'_>, config: &RecomputeConfig) -> Result<Recomputation, Error> {
    let thresholds = config.thresholds()?;

    let mut solver = solver.direction(config.direction);
    if let Some(limit) = config.max_distance {
        solver = solver.cutoff(limit);
    }

    let distances = solver.solve()?;
    let bands = partition(&distances, &thresholds);
    let catchments = catchments(&distances);

    info!(
        "Recomputed {} nodes: {} reached from {} sources, {} bands",
        distances.len(),
        distances.reached_count(),
        distances.sources().len(),
        thresholds.len()
    );

    Ok(Recomputation {
        distances,
        bands,
        catchments,
    })
}
