use std::collections::BTreeSet;

use catchment::{
    Distance, DistanceResult, GraphStore, NodeId, ScenarioOutcome,
    algo::{BandAssignment, Catchments},
};
use serde::Serialize;

/// JSON document written by the CLI.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub nodes: usize,
    pub edges: usize,
    pub scenarios: Vec<ScenarioReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub name: &'a str,
    pub sources: &'a BTreeSet<NodeId>,
    pub reached: usize,
    pub unreachable: Vec<NodeId>,
    pub distances: &'a DistanceResult,
    pub bands: Vec<BandSummary>,
    pub catchments: &'a Catchments,
}

#[derive(Debug, Serialize)]
pub struct BandSummary {
    pub band: String,
    pub upper_bound: Option<Distance>,
    pub count: usize,
    pub members: Vec<NodeId>,
}

impl<'a> Report<'a> {
    pub fn new(graph: &GraphStore, outcomes: &'a [ScenarioOutcome]) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            scenarios: outcomes.iter().map(ScenarioReport::new).collect(),
        }
    }
}

impl<'a> ScenarioReport<'a> {
    fn new(outcome: &'a ScenarioOutcome) -> Self {
        let distances = &outcome.output.distances;
        Self {
            name: &outcome.name,
            sources: distances.sources(),
            reached: distances.reached_count(),
            unreachable: distances.unreachable().collect(),
            distances,
            bands: summarize_bands(&outcome.output.bands),
            catchments: &outcome.output.catchments,
        }
    }
}

fn summarize_bands(bands: &BandAssignment) -> Vec<BandSummary> {
    bands
        .counts()
        .into_iter()
        .map(|(band, count)| BandSummary {
            band: band.to_string(),
            upper_bound: bands.thresholds().upper_bound(band),
            count,
            members: bands.members(band),
        })
        .collect()
}
