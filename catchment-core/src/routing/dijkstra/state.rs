use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::{Distance, NodeId};

/// Frontier entry. `cost` is never NaN, edge weights are validated on insert.
#[derive(Copy, Clone, PartialEq)]
pub(super) struct State {
    pub(super) cost: Distance,
    pub(super) source: NodeId,
    pub(super) id: NodeId,
    pub(super) node: NodeIndex,
}

impl Eq for State {}

// Min-heap on (cost, source, id), reversed from standard Rust BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.source.cmp(&self.source))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic `(distance, source)` order used to accept a relaxation.
pub(super) fn precedes(candidate: (Distance, NodeId), current: (Distance, NodeId)) -> bool {
    candidate
        .0
        .total_cmp(&current.0)
        .then_with(|| candidate.1.cmp(&current.1))
        == Ordering::Less
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    fn state(cost: Distance, source: u64, id: u64) -> State {
        State {
            cost,
            source: NodeId(source),
            id: NodeId(id),
            node: NodeIndex::new(0),
        }
    }

    #[test]
    fn heap_pops_cheapest_then_lowest_source_then_lowest_id() {
        let mut heap = BinaryHeap::new();
        heap.push(state(2.0, 1, 1));
        heap.push(state(1.0, 5, 9));
        heap.push(state(1.0, 5, 3));
        heap.push(state(1.0, 2, 8));

        let order: Vec<(Distance, u64, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|s| (s.cost, s.source.0, s.id.0))
            .collect();
        assert_eq!(order, [(1.0, 2, 8), (1.0, 5, 3), (1.0, 5, 9), (2.0, 1, 1)]);
    }

    #[test]
    fn precedes_is_strict() {
        assert!(precedes((1.0, NodeId(9)), (2.0, NodeId(1))));
        assert!(precedes((1.0, NodeId(1)), (1.0, NodeId(2))));
        assert!(!precedes((1.0, NodeId(2)), (1.0, NodeId(2))));
        assert!(!precedes((3.0, NodeId(0)), (2.0, NodeId(5))));
    }
}
