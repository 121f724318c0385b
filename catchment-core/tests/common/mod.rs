#![allow(dead_code)]

use std::collections::BTreeMap;

use catchment_core::prelude::*;
use proptest::prelude::*;

/// Plain description of a small graph, easy to tweak and rebuild.
#[derive(Debug, Clone)]
pub struct GraphSpec {
    pub node_count: u64,
    pub edges: Vec<(u64, u64, Distance)>,
    pub sources: Vec<u64>,
}

impl GraphSpec {
    pub fn build(&self) -> GraphStore {
        let mut graph = GraphStore::new();
        for id in 0..self.node_count {
            graph.add_node(id, self.sources.contains(&id)).unwrap();
        }
        for &(from, to, weight) in &self.edges {
            graph.add_edge(from, to, weight).unwrap();
        }
        graph
    }
}

/// Random small graphs with integer weights (sums stay exact) and at
/// least one source.
pub fn graph_spec_strategy(max_nodes: u64, max_edges: usize) -> impl Strategy<Value = GraphSpec> {
    (1..=max_nodes).prop_flat_map(move |node_count| {
        let edges = proptest::collection::vec(
            (0..node_count, 0..node_count, 0u32..12).prop_map(|(a, b, w)| (a, b, f64::from(w))),
            0..=max_edges,
        );
        let flags = proptest::collection::vec(proptest::bool::weighted(0.3), node_count as usize);
        (edges, flags).prop_map(move |(edges, flags)| {
            let mut sources: Vec<u64> = flags
                .iter()
                .enumerate()
                .filter(|(_, flag)| **flag)
                .map(|(id, _)| id as u64)
                .collect();
            if sources.is_empty() {
                sources.push(0);
            }
            GraphSpec {
                node_count,
                edges,
                sources,
            }
        })
    })
}

/// Exhaustive reference: enumerate every simple path that starts at a source
/// and never enters another source, keep the lexicographically smallest
/// `(length, source)` per node.
pub fn brute_force(spec: &GraphSpec) -> BTreeMap<u64, Option<(Distance, u64)>> {
    let mut best: BTreeMap<u64, Option<(Distance, u64)>> =
        (0..spec.node_count).map(|id| (id, None)).collect();

    for &source in &spec.sources {
        let mut visited = vec![false; spec.node_count as usize];
        visited[source as usize] = true;
        explore(spec, source, source, 0.0, &mut visited, &mut best);
    }
    best
}

fn explore(
    spec: &GraphSpec,
    source: u64,
    node: u64,
    length: Distance,
    visited: &mut [bool],
    best: &mut BTreeMap<u64, Option<(Distance, u64)>>,
) {
    let entry = best.get_mut(&node).unwrap();
    let better = match entry {
        None => true,
        Some((d, s)) => length < *d || (length == *d && source < *s),
    };
    if better {
        *entry = Some((length, source));
    }

    for &(from, to, weight) in &spec.edges {
        if from != node || visited[to as usize] || spec.sources.contains(&to) {
            continue;
        }
        visited[to as usize] = true;
        explore(spec, source, to, length + weight, visited, best);
        visited[to as usize] = false;
    }
}

/// Distance with unreachable mapped to infinity, for monotonicity checks.
pub fn distance_or_inf(result: &DistanceResult, id: u64) -> Distance {
    result.distance(id).unwrap_or(Distance::INFINITY)
}
