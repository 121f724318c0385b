use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{DistanceResult, NodeId};

/// Nodes grouped by their nearest source.
///
/// Every reached node belongs to exactly one catchment and every source is
/// a member of its own. Unreachable nodes belong to none.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catchments {
    regions: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl Catchments {
    /// Members of the catchment of `source`
    pub fn of(&self, source: impl Into<NodeId>) -> Option<&BTreeSet<NodeId>> {
        self.regions.get(&source.into())
    }

    /// Sources and their members in ascending source order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &BTreeSet<NodeId>)> {
        self.regions.iter().map(|(source, members)| (*source, members))
    }

    pub fn sizes(&self) -> BTreeMap<NodeId, usize> {
        self.regions
            .iter()
            .map(|(source, members)| (*source, members.len()))
            .collect()
    }

    /// Number of catchments, one per source
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Group the reached nodes of `result` by nearest source.
pub fn catchments(result: &DistanceResult) -> Catchments {
    let mut regions: BTreeMap<NodeId, BTreeSet<NodeId>> = result
        .sources()
        .iter()
        .map(|&source| (source, BTreeSet::new()))
        .collect();

    for (id, _, source) in result.reached() {
        regions.entry(source).or_default().insert(id);
    }

    Catchments { regions }
}
