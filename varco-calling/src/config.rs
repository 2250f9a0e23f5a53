use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HETEROZYGOUS_THRESHOLD, DEFAULT_HOMOZYGOUS_THRESHOLD};

///
/// Zygosity-calling thresholds.
///
/// The variant fraction of a tally is compared against these with strict
/// `>`: above `homozygous_threshold` (default 0.8) the call is homozygous,
/// above `heterozygous_threshold` (default 0.3) heterozygous, otherwise
/// absent. The defaults are a fixed heuristic, not a fitted model; they
/// are configurable so reruns never require a code change.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallingConfig {
    #[serde(default = "default_homozygous_threshold")]
    pub homozygous_threshold: f64,
    #[serde(default = "default_heterozygous_threshold")]
    pub heterozygous_threshold: f64,
}

fn default_homozygous_threshold() -> f64 {
    DEFAULT_HOMOZYGOUS_THRESHOLD
}

fn default_heterozygous_threshold() -> f64 {
    DEFAULT_HETEROZYGOUS_THRESHOLD
}

impl Default for CallingConfig {
    fn default() -> Self {
        CallingConfig {
            homozygous_threshold: DEFAULT_HOMOZYGOUS_THRESHOLD,
            heterozygous_threshold: DEFAULT_HETEROZYGOUS_THRESHOLD,
        }
    }
}

impl CallingConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calling config: {:?}", path))?;
        let config: CallingConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse calling config: {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_thresholds() {
        let config = CallingConfig::default();
        assert_eq!(config.homozygous_threshold, 0.8);
        assert_eq!(config.heterozygous_threshold, 0.3);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "homozygous_threshold: 0.9").unwrap();

        let config = CallingConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.homozygous_threshold, 0.9);
        assert_eq!(config.heterozygous_threshold, 0.3);
    }
}
