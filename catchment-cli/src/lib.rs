//! `catchment` command-line tool: load a network document, recompute
//! distances to the nearest source, write a JSON report.

pub mod cli;
pub mod logging;
pub mod network;
pub mod report;
pub mod settings;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::{Context, Result, bail};
use catchment::{
    GraphStore, NodeId, ScenarioOutcome, SourceScenario, recompute, recompute_scenarios,
};
use geo::Point;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::network::NetworkFile;
use crate::report::Report;
use crate::settings::RunSettings;

/// Entry point used by `main.rs`.
///
/// Sources come from, in order of precedence: `--sources`/`--source-near`,
/// `[[scenarios]]` in the run configuration, the flags in the network.
pub fn run(args: &CliArgs) -> Result<()> {
    let graph = NetworkFile::load(&args.network)?.into_graph()?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        sources = graph.source_nodes().len(),
        "network loaded"
    );

    let settings = match &args.config {
        Some(path) => RunSettings::load(path)?,
        None => RunSettings::default(),
    };

    let cli_sources = sources_from_args(&graph, args)?;
    let outcomes = if !cli_sources.is_empty() {
        let scenario = SourceScenario::new("cli", cli_sources);
        recompute_scenarios(&graph, &[scenario], &settings.recompute)?
    } else if !settings.scenarios.is_empty() {
        recompute_scenarios(&graph, &settings.scenarios, &settings.recompute)?
    } else {
        let output = recompute(&graph, &settings.recompute).context("recomputing with network sources")?;
        vec![ScenarioOutcome {
            name: "default".to_string(),
            output,
        }]
    };

    for outcome in &outcomes {
        let unreachable = outcome.output.distances.unreachable().count();
        if unreachable > 0 {
            warn!(scenario = %outcome.name, unreachable, "some nodes are not reachable from any source");
        }
    }

    let report = Report::new(&graph, &outcomes);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file at {}", path.display()))?;
            write_report(BufWriter::new(file), &report)?;
            info!(path = %path.display(), "report written");
        }
        None => write_report(io::stdout().lock(), &report)?,
    }

    Ok(())
}

fn write_report(mut writer: impl Write, report: &Report<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).context("serializing report")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Explicit ids plus the nodes nearest to each `--source-near` point.
fn sources_from_args(graph: &GraphStore, args: &CliArgs) -> Result<Vec<NodeId>> {
    let mut sources: Vec<NodeId> = args.sources.iter().copied().map(NodeId).collect();
    if args.source_near.is_empty() {
        return Ok(sources);
    }

    let locator = graph.locator();
    if locator.is_empty() {
        bail!("--source-near needs node coordinates, the network has none");
    }
    for &(x, y) in &args.source_near {
        if let Some((id, distance)) = locator.nearest(&Point::new(x, y)) {
            info!(%id, x, y, distance, "snapped source point to node");
            sources.push(id);
        }
    }
    Ok(sources)
}
