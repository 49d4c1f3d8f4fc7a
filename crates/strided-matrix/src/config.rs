use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Settings for randomly filled matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RandomConfig {
    /// Fixed seed for reproducible fills. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub distribution: FillDistribution,
}

/// Distributions a matrix can be filled from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum FillDistribution {
    Gaussian { mean: f64, std_dev: f64 },
    Uniform,
}

impl Default for FillDistribution {
    fn default() -> Self {
        FillDistribution::Gaussian {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl FromStr for FillDistribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gaussian" | "normal" => Ok(FillDistribution::default()),
            "uniform" => Ok(FillDistribution::Uniform),
            _ => Err(format!(
                "Unknown fill distribution: {}. Expected one of `gaussian`, `normal` or `uniform`",
                s
            )),
        }
    }
}

impl RandomConfig {
    pub fn new(seed: Option<u64>, distribution: FillDistribution) -> Self {
        Self { seed, distribution }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Builds the generator described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: None,
            distribution: FillDistribution::default(),
        }
    }
}

/// Load a random fill configuration from a JSON file.
pub fn load_random_config<P: AsRef<Path>>(path: P) -> anyhow::Result<RandomConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RandomConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded random config from {}: {:?}",
        path.as_ref().display(),
        config
    );
    Ok(config)
}
