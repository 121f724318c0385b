//! Network document: the finished graph handed over by whatever produced
//! it. Only the shape below is accepted, no format conversion happens here.
//!
//! ```toml
//! [[nodes]]
//! id = 1
//! label = "Station A"
//! source = true
//! x = 2.35
//! y = 48.85
//!
//! [[edges]]
//! from = 1
//! to = 2
//! weight = 4.5
//! bidirectional = true
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use catchment::{Distance, GraphStore, Node, NodeId};
use geo::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkFile {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub source: bool,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Distance,
    #[serde(default)]
    pub bidirectional: bool,
}

impl NetworkFile {
    /// Read a `.json` document, anything else is parsed as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading network file at {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let network: NetworkFile = if is_json {
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing JSON network from {}", path.display()))?
        } else {
            toml::from_str(&contents)
                .with_context(|| format!("parsing TOML network from {}", path.display()))?
        };

        debug!(
            nodes = network.nodes.len(),
            edges = network.edges.len(),
            "loaded network document"
        );
        Ok(network)
    }

    pub fn into_graph(self) -> Result<GraphStore> {
        let mut graph = GraphStore::with_capacity(self.nodes.len(), self.edges.len() * 2);

        for record in self.nodes {
            let mut node = Node::new(record.id).source(record.source);
            if let Some(label) = record.label {
                node = node.with_label(label);
            }
            match (record.x, record.y) {
                (Some(x), Some(y)) => node = node.with_geometry(Point::new(x, y)),
                (None, None) => {}
                _ => bail!("node {} has only one of x and y", record.id),
            }
            graph.add_node_with(node)?;
        }

        for (position, edge) in self.edges.into_iter().enumerate() {
            let inserted = if edge.bidirectional {
                graph.add_undirected_edge(edge.from, edge.to, edge.weight)
            } else {
                graph.add_edge(edge.from, edge.to, edge.weight)
            };
            inserted.with_context(|| format!("edge #{position} ({} -> {})", edge.from, edge.to))?;
        }

        Ok(graph)
    }
}
