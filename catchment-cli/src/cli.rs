//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "catchment",
    version,
    about = "Distance to the nearest source node, isochrone bands and catchment regions.",
    long_about = None
)]
pub struct CliArgs {
    /// Network document (`.toml` or `.json`) with `nodes` and `edges`.
    #[arg(long, value_name = "PATH")]
    pub network: PathBuf,

    /// Run configuration (TOML) with a `[recompute]` table and optional
    /// `[[scenarios]]`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use these node ids as sources instead of the flags in the network.
    #[arg(long, value_name = "ID", value_delimiter = ',')]
    pub sources: Vec<u64>,

    /// Add the node nearest to `X,Y` as a source. Repeatable.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub source_near: Vec<(f64, f64)>,

    /// Write the JSON report here instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Logging level. Falls back to `CATCHMENT_LOG`, then `RUST_LOG`, then `info`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn parse_point(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {raw:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X in {raw:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y in {raw:?}: {e}"))?;
    Ok((x, y))
}

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
