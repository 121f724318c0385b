use catchment_core::{Direction, Distance, Error, algo::Thresholds};
use serde::{Deserialize, Serialize};

/// Parameters of a recompute run.
///
/// Passed explicitly to every call; there is no process-wide registry.
/// Missing fields fall back to [`RecomputeConfig::default`] when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecomputeConfig {
    /// Ascending isochrone band limits
    pub thresholds: Vec<Distance>,
    /// Measure distance from (`outgoing`) or to (`incoming`) the sources
    pub direction: Direction,
    /// Stop the search beyond this distance
    pub max_distance: Option<Distance>,
    /// Evaluate scenarios on the rayon pool instead of one by one
    pub parallel: bool,
}

impl Default for RecomputeConfig {
    /// Six 5-unit bands, outgoing edges, unbounded search, parallel scenarios
    fn default() -> Self {
        Self {
            thresholds: vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0],
            direction: Direction::Outgoing,
            max_distance: None,
            parallel: true,
        }
    }
}

impl RecomputeConfig {
    /// Validated band limits.
    ///
    /// # Errors
    ///
    /// Propagates [`Thresholds::new`] validation errors.
    pub fn thresholds(&self) -> Result<Thresholds, Error> {
        Thresholds::new(self.thresholds.clone())
    }
}
