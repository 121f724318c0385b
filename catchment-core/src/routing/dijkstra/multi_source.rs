use std::collections::{BTreeSet, BinaryHeap};

use fixedbitset::FixedBitSet;
use log::{debug, trace};
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::{
    cancel::Cancellation,
    state::{State, precedes},
};
use crate::{
    Direction, Distance, Error, GraphStore, NodeId,
    routing::{DistanceResult, Reach},
};

/// Compute the distance from every node to its nearest source.
///
/// Shorthand for `Solver::new(graph).solve()`.
///
/// # Errors
///
/// Returns [`Error::NoSourceNodes`] if no node of `graph` is a source.
pub fn solve(graph: &GraphStore) -> Result<DistanceResult, Error> {
    Solver::new(graph).solve()
}

/// Multi-source Dijkstra over a borrowed [`GraphStore`].
///
/// All sources are seeded at distance zero, which is equivalent to a
/// single-source search from a virtual node joined to every source by a
/// zero-weight edge. The frontier is keyed by `(distance, source, node)`
/// and relaxation accepts a candidate only when `(distance, source)` is
/// lexicographically smaller than the recorded one, so among all sources at
/// minimal distance the one with the lowest [`NodeId`] always wins. Edges
/// into a source are never relaxed: a source is its own nearest source, and
/// paths running through it are attributed to it.
///
/// Runs in `O((V + E) log V)`.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    graph: &'a GraphStore,
    sources: Option<BTreeSet<NodeId>>,
    direction: Direction,
    cutoff: Option<Distance>,
    cancel: Option<&'a dyn Cancellation>,
}

impl<'a> Solver<'a> {
    pub fn new(graph: &'a GraphStore) -> Self {
        Self {
            graph,
            sources: None,
            direction: Direction::Outgoing,
            cutoff: None,
            cancel: None,
        }
    }

    /// Use `sources` instead of the source flags stored in the graph.
    #[must_use]
    pub fn with_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.sources = Some(sources.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Leave nodes farther than `max_distance` unreachable.
    #[must_use]
    pub fn cutoff(mut self, max_distance: Distance) -> Self {
        self.cutoff = Some(max_distance);
        self
    }

    /// Abort with [`Error::Cancelled`] once `token` reports cancellation.
    /// Checked before each frontier extraction; an `AtomicBool` works as a
    /// token.
    #[must_use]
    pub fn cancel_with(mut self, token: &'a dyn Cancellation) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the search.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSourceNodes`] if the source set is empty
    /// - [`Error::UnknownNode`] if an explicit source is not in the graph
    /// - [`Error::InvalidCutoff`] if the cutoff is negative or NaN
    /// - [`Error::Cancelled`] if the cancellation token fired
    pub fn solve(&self) -> Result<DistanceResult, Error> {
        let graph = self.graph;
        let sources = match &self.sources {
            Some(explicit) => explicit.clone(),
            None => graph.source_nodes(),
        };
        if sources.is_empty() {
            return Err(Error::NoSourceNodes);
        }
        let cutoff = match self.cutoff {
            Some(limit) if limit.is_nan() || limit < 0.0 => {
                return Err(Error::InvalidCutoff(limit));
            }
            Some(limit) => limit,
            None => Distance::INFINITY,
        };

        let node_count = graph.node_count();
        let mut best: Vec<Option<(Distance, NodeId)>> = vec![None; node_count];
        let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
        let mut finalized = FixedBitSet::with_capacity(node_count);
        let mut seeded = FixedBitSet::with_capacity(node_count);
        let mut heap = BinaryHeap::with_capacity(sources.len().max(node_count / 4));

        for &source in &sources {
            let node = graph.index_of(source)?;
            best[node.index()] = Some((0.0, source));
            seeded.insert(node.index());
            heap.push(State {
                cost: 0.0,
                source,
                id: source,
                node,
            });
        }

        let dir = petgraph::Direction::from(self.direction);
        let mut pops = 0usize;

        while let Some(State {
            cost, source, node, ..
        }) = heap.pop()
        {
            if let Some(token) = self.cancel {
                if token.is_cancelled() {
                    let done = finalized.count_ones(..);
                    debug!("Solve cancelled with {done} of {node_count} nodes finalized");
                    return Err(Error::Cancelled { finalized: done });
                }
            }
            pops += 1;

            if finalized.contains(node.index()) {
                continue;
            }
            // Stale entry, a better label was pushed after this one
            if best[node.index()] != Some((cost, source)) {
                continue;
            }
            finalized.insert(node.index());

            for edge in graph.graph.edges_directed(node, dir) {
                let next = match dir {
                    petgraph::Direction::Outgoing => edge.target(),
                    petgraph::Direction::Incoming => edge.source(),
                };
                // Sources always keep themselves, even behind a zero-weight edge
                if finalized.contains(next.index()) || seeded.contains(next.index()) {
                    continue;
                }

                // Sums of huge finite weights can overflow to infinity
                let candidate = cost + *edge.weight();
                if !candidate.is_finite() || candidate > cutoff {
                    continue;
                }

                let improves = match best[next.index()] {
                    None => true,
                    Some(current) => precedes((candidate, source), current),
                };
                if improves {
                    best[next.index()] = Some((candidate, source));
                    predecessors[next.index()] = Some(node);
                    heap.push(State {
                        cost: candidate,
                        source,
                        id: graph.id_at(next),
                        node: next,
                    });
                }
            }
        }

        let reached = finalized.count_ones(..);
        debug!(
            "Multi-source search from {} sources reached {reached} of {node_count} nodes ({pops} frontier pops)",
            sources.len()
        );

        let mut reaches = Vec::with_capacity(node_count);
        let mut links = Vec::with_capacity(reached);
        for idx in graph.graph.node_indices() {
            let id = graph.id_at(idx);
            let reach = match best[idx.index()] {
                Some((distance, source)) => Reach::Reached { distance, source },
                None => {
                    trace!("Node {id} is unreachable from every source");
                    Reach::Unreachable
                }
            };
            reaches.push((id, reach));
            if let Some(prev) = predecessors[idx.index()] {
                links.push((id, graph.id_at(prev)));
            }
        }

        Ok(DistanceResult::new(
            reaches,
            links,
            sources,
            self.direction,
        ))
    }
}
