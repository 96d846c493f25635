//! Configuration types for the simulation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::Variant;
use crate::error::{Error, Result};

/// Shortest tick interval a configuration may ask for
pub const MIN_INTERVAL_MS: u64 = 50;
/// Longest tick interval a configuration may ask for
pub const MAX_INTERVAL_MS: u64 = 10_000;

/// Random fill parameters used instead of a seed map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomFill {
    pub width: usize,
    pub height: usize,
    /// Chance of a cell starting alive (0.0 to 1.0)
    pub density: f64,
    /// RNG seed, so runs are reproducible
    pub seed: u64,
}

impl RandomFill {
    /// Density must be a probability and the room must fit its walls
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::Config(format!(
                "random.density {} outside 0.0..=1.0",
                self.density
            )));
        }
        if self.width < 3 || self.height < 3 {
            return Err(Error::Config("random map needs at least 3x3 for its walls".into()));
        }
        Ok(())
    }
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            width: 40,
            height: 24,
            density: 0.3,
            seed: 0,
        }
    }
}

/// Simulation configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Milliseconds between ticks while running
    pub interval_ms: u64,
    /// Name of a built-in map, used when `rows` and `random` are absent
    pub map: String,
    /// Inline seed map, takes precedence over `map`
    pub rows: Option<Vec<String>>,
    /// Legend for inline rows
    pub variant: Variant,
    /// Random walled map, takes precedence over `map`
    pub random: Option<RandomFill>,
    /// Plan ticks with rayon
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            map: "glider_box".to_string(),
            rows: None,
            variant: Variant::Life,
            random: None,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Check values that deserialize fine but can't run as given
    pub fn validate(&self) -> Result<()> {
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(Error::Config(format!(
                "interval_ms {} outside {MIN_INTERVAL_MS}..={MAX_INTERVAL_MS}",
                self.interval_ms
            )));
        }
        self.random.as_ref().map_or(Ok(()), RandomFill::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(2000));
        assert_eq!(config.map, "glider_box");
        assert!(!config.parallel);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SimulationConfig::from_json(r#"{ "map": "cave", "parallel": true }"#).unwrap();
        assert_eq!(config.map, "cave");
        assert!(config.parallel);
        assert_eq!(config.interval_ms, 2000);
    }

    #[test]
    fn test_inline_rows_and_variant() {
        let config = SimulationConfig::from_json(
            r####"{ "rows": ["###", "#o#", "###"], "variant": "walkers", "interval_ms": 250 }"####,
        )
        .unwrap();
        assert_eq!(config.variant, Variant::Walkers);
        assert_eq!(config.rows.as_ref().map(Vec::len), Some(3));
        assert_eq!(config.interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = SimulationConfig::from_json(r#"{ "interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_interval_outside_bounds_rejected() {
        for ms in [20, 60_000] {
            let json = format!(r#"{{ "interval_ms": {ms} }}"#);
            assert!(matches!(SimulationConfig::from_json(&json), Err(Error::Config(_))));
        }
        let edges = [MIN_INTERVAL_MS, MAX_INTERVAL_MS];
        for ms in edges {
            let json = format!(r#"{{ "interval_ms": {ms} }}"#);
            assert_eq!(SimulationConfig::from_json(&json).unwrap().interval_ms, ms);
        }
    }

    #[test]
    fn test_struct_literal_validates_random_fill() {
        let config = SimulationConfig {
            random: Some(RandomFill { width: 2, ..RandomFill::default() }),
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_density_rejected() {
        let json = r#"{ "random": { "width": 10, "height": 10, "density": 1.5, "seed": 1 } }"#;
        assert!(matches!(SimulationConfig::from_json(json), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(SimulationConfig::from_json("{"), Err(Error::Config(_))));
    }
}
