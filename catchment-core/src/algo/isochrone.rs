//! Isochrone banding: bucket every node by its distance to the nearest
//! source using an ascending list of thresholds (e.g. 5, 10, 15 minutes).
//! Band `i` holds the nodes whose distance is at most `thresholds[i]` and
//! above every earlier threshold.

use std::{collections::BTreeMap, fmt};

use itertools::Itertools;
use serde::Serialize;

use crate::{Distance, DistanceResult, Error, NodeId};

/// Strictly ascending, non-negative band limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Thresholds(Vec<Distance>);

impl Thresholds {
    /// # Errors
    ///
    /// - [`Error::InvalidThreshold`] for a negative or non-finite value
    /// - [`Error::UnsortedThresholds`] if a value is not greater than the
    ///   one before it; `index` points at the offending value
    pub fn new(values: Vec<Distance>) -> Result<Self, Error> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(Error::InvalidThreshold { index, value });
        }

        if let Some((index, _)) = values
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (prev, next))| prev >= next)
        {
            return Err(Error::UnsortedThresholds { index: index + 1 });
        }

        Ok(Self(values))
    }

    /// Evenly spaced thresholds `step, 2*step, ..., count*step`.
    ///
    /// # Errors
    ///
    /// Same as [`Thresholds::new`]; a zero `step` with `count > 1` is unsorted.
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(step: Distance, count: usize) -> Result<Self, Error> {
        Self::new((1..=count).map(|i| step * i as Distance).collect::<Vec<_>>())
    }

    pub fn as_slice(&self) -> &[Distance] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Band for a reached distance.
    pub fn band_for(&self, distance: Distance) -> Band {
        let index = self.0.partition_point(|&limit| limit < distance);
        if index < self.0.len() {
            Band::Within(index)
        } else {
            Band::Overflow
        }
    }

    /// Upper limit of a band, `None` for overflow and unreachable
    pub fn upper_bound(&self, band: Band) -> Option<Distance> {
        match band {
            Band::Within(index) => self.0.get(index).copied(),
            Band::Overflow | Band::Unreachable => None,
        }
    }
}

/// Band a node falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Index of the first threshold not below the node's distance
    Within(usize),
    /// Reached, but farther than the last threshold
    Overflow,
    /// Not reached from any source
    Unreachable,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Within(index) => write!(f, "band-{index}"),
            Band::Overflow => f.write_str("overflow"),
            Band::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Band of every node of a [`DistanceResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandAssignment {
    thresholds: Thresholds,
    bands: BTreeMap<NodeId, Band>,
}

impl BandAssignment {
    pub fn band_of(&self, id: impl Into<NodeId>) -> Option<Band> {
        self.bands.get(&id.into()).copied()
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Nodes in ascending id order with their band
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Band)> + '_ {
        self.bands.iter().map(|(id, band)| (*id, *band))
    }

    pub fn members(&self, band: Band) -> Vec<NodeId> {
        self.bands
            .iter()
            .filter(|(_, b)| **b == band)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of nodes per band, empty bands included
    pub fn counts(&self) -> BTreeMap<Band, usize> {
        let mut counts: BTreeMap<Band, usize> = (0..self.thresholds.len())
            .map(Band::Within)
            .chain([Band::Overflow, Band::Unreachable])
            .map(|band| (band, 0))
            .collect();
        for band in self.bands.values() {
            *counts.entry(*band).or_default() += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Assign every node of `result` to an isochrone band.
///
/// Sources land in band 0 unless `thresholds` is empty, in which case every
/// reached node overflows.
pub fn partition(result: &DistanceResult, thresholds: &Thresholds) -> BandAssignment {
    let bands = result
        .iter()
        .map(|(id, reach)| {
            let band = reach
                .distance()
                .map_or(Band::Unreachable, |distance| thresholds.band_for(distance));
            (id, band)
        })
        .collect();

    BandAssignment {
        thresholds: thresholds.clone(),
        bands,
    }
}
