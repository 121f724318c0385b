use std::{fs, path::Path};

use anyhow::{Context, Result};
use catchment::{RecomputeConfig, SourceScenario};
use serde::Deserialize;

/// Run configuration file.
///
/// ```toml
/// [recompute]
/// thresholds = [5.0, 10.0, 15.0]
/// direction = "incoming"
///
/// [[scenarios]]
/// name = "today"
/// sources = [1, 7]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    pub recompute: RecomputeConfig,
    pub scenarios: Vec<SourceScenario>,
}

impl RunSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file at {}", path.display()))?;
        let settings = toml::from_str(&contents)
            .with_context(|| format!("parsing TOML config from {}", path.display()))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use catchment::{Direction, NodeId};

    use super::*;

    #[test]
    fn scenarios_and_recompute_table() {
        let settings: RunSettings = toml::from_str(
            r#"
            [recompute]
            thresholds = [1.0, 2.0]
            direction = "incoming"

            [[scenarios]]
            name = "today"
            sources = [1, 7]
            "#,
        )
        .unwrap();
        assert_eq!(settings.recompute.direction, Direction::Incoming);
        assert_eq!(settings.scenarios.len(), 1);
        assert_eq!(settings.scenarios[0].sources, [NodeId(1), NodeId(7)]);
    }

    #[test]
    fn empty_file_is_default() {
        let settings: RunSettings = toml::from_str("").unwrap();
        assert_eq!(settings, RunSettings::default());
    }
}
