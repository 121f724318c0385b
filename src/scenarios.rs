//! Several source configurations over one graph.
//!
//! With [`RecomputeConfig::parallel`] set the graph is shared read-only
//! between rayon workers; every scenario gets its own solve and its own
//! result either way.

use catchment_core::{Error, GraphStore, NodeId, Solver};
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Recomputation, RecomputeConfig, recompute_with};

/// Named source set, e.g. "current stations" vs "with planned station".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceScenario {
    pub name: String,
    pub sources: Vec<NodeId>,
}

impl SourceScenario {
    pub fn new(name: impl Into<String>, sources: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        Self {
            name: name.into(),
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    #[serde(flatten)]
    pub output: Recomputation,
}

/// Recompute every scenario. Outcomes are returned in input order.
///
/// # Errors
///
/// Fails if any scenario fails, e.g. an empty source set
/// ([`Error::NoSourceNodes`]) or a source missing from the graph. The error
/// is taken from a failing scenario; with `parallel` set it is not
/// necessarily the earliest one in input order.
pub fn recompute_scenarios(
    graph: &GraphStore,
    scenarios: &[SourceScenario],
    config: &RecomputeConfig,
) -> Result<Vec<ScenarioOutcome>, Error> {
    info!(
        "Recomputing {} scenarios over {} nodes ({})",
        scenarios.len(),
        graph.node_count(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let run = |scenario: &SourceScenario| run_scenario(graph, scenario, config);
    if config.parallel {
        scenarios.par_iter().map(run).collect()
    } else {
        scenarios.iter().map(run).collect()
    }
}

fn run_scenario(
    graph: &GraphStore,
    scenario: &SourceScenario,
    config: &RecomputeConfig,
) -> Result<ScenarioOutcome, Error> {
    debug!(
        "Scenario {:?} with {} sources",
        scenario.name,
        scenario.sources.len()
    );
    let solver = Solver::new(graph).with_sources(scenario.sources.iter().copied());
    recompute_with(solver, config).map(|output| ScenarioOutcome {
        name: scenario.name.clone(),
        output,
    })
}
