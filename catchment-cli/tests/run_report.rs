use std::fs;

use catchment_cli::{cli::CliArgs, run};
use clap::Parser;
use serde_json::Value;

const NETWORK: &str = r#"
[[nodes]]
id = 1
label = "A"
source = true
x = 0.0
y = 0.0

[[nodes]]
id = 2
label = "B"
x = 5.0
y = 0.0

[[nodes]]
id = 3
label = "C"
x = 8.0
y = 0.0

[[nodes]]
id = 4
label = "D"
x = 10.0
y = 0.0

[[nodes]]
id = 5
label = "island"

[[edges]]
from = 1
to = 2
weight = 5.0
bidirectional = true

[[edges]]
from = 2
to = 3
weight = 3.0
bidirectional = true

[[edges]]
from = 1
to = 4
weight = 20.0
bidirectional = true

[[edges]]
from = 3
to = 4
weight = 2.0
bidirectional = true
"#;

fn run_with(extra: &[&str], config: Option<&str>) -> Value {
    let dir = tempfile::tempdir().unwrap();
    let network = dir.path().join("network.toml");
    let output = dir.path().join("report.json");
    fs::write(&network, NETWORK).unwrap();

    let mut argv = vec![
        "catchment".to_string(),
        "--network".to_string(),
        network.display().to_string(),
        "--output".to_string(),
        output.display().to_string(),
    ];
    if let Some(contents) = config {
        let path = dir.path().join("run.toml");
        fs::write(&path, contents).unwrap();
        argv.push("--config".to_string());
        argv.push(path.display().to_string());
    }
    argv.extend(extra.iter().map(|s| s.to_string()));

    let args = CliArgs::parse_from(argv);
    run(&args).unwrap();
    serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap()
}

#[test]
fn default_run_uses_network_sources() {
    let report = run_with(&[], None);
    assert_eq!(report["nodes"], 5);
    assert_eq!(report["edges"], 8);

    let scenario = &report["scenarios"][0];
    assert_eq!(scenario["name"], "default");
    assert_eq!(scenario["reached"], 4);
    assert_eq!(scenario["unreachable"], serde_json::json!([5]));

    let nodes = &scenario["distances"]["nodes"];
    assert_eq!(nodes["4"]["distance"], 10.0);
    assert_eq!(nodes["4"]["source"], 1);
    assert_eq!(nodes["5"]["status"], "unreachable");

    assert_eq!(scenario["catchments"]["1"], serde_json::json!([1, 2, 3, 4]));
}

#[test]
fn config_scenarios_and_thresholds() {
    let config = r#"
        [recompute]
        thresholds = [5.0, 9.0]

        [[scenarios]]
        name = "ends"
        sources = [1, 4]
    "#;
    let report = run_with(&[], Some(config));
    let scenario = &report["scenarios"][0];
    assert_eq!(scenario["name"], "ends");
    assert_eq!(scenario["distances"]["nodes"]["3"]["distance"], 2.0);
    assert_eq!(scenario["distances"]["nodes"]["3"]["source"], 4);

    let bands = scenario["bands"].as_array().unwrap();
    assert_eq!(bands[0]["band"], "band-0");
    assert_eq!(bands[0]["upper_bound"], 5.0);
    assert_eq!(bands[0]["members"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(bands[1]["count"], 0);
    assert_eq!(bands[3]["band"], "unreachable");
    assert_eq!(bands[3]["members"], serde_json::json!([5]));
}

#[test]
fn source_near_snaps_to_closest_node() {
    let report = run_with(&["--source-near", "7.6,0.4"], None);
    let scenario = &report["scenarios"][0];
    assert_eq!(scenario["name"], "cli");
    assert_eq!(scenario["sources"], serde_json::json!([3]));
    assert_eq!(scenario["distances"]["nodes"]["1"]["distance"], 8.0);
}
