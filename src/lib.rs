//! Recompute pipeline over [`catchment_core`].
//!
//! Callers build a [`GraphStore`] once, describe what they want in a
//! [`RecomputeConfig`] and call [`recompute`] (one source set) or
//! [`recompute_scenarios`] (many source sets, evaluated in parallel).
//! Nothing is cached between calls.

pub mod config;
pub mod recompute;
pub mod scenarios;

pub use catchment_core::prelude::*;
pub use catchment_core::{algo, model, routing};

pub use config::RecomputeConfig;
pub use recompute::{Recomputation, recompute, recompute_with};
pub use scenarios::{ScenarioOutcome, SourceScenario, recompute_scenarios};
