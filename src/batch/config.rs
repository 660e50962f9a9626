use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Reference-price validation settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ValidationConfig {
    /// Whether computed prices are compared against the record's reference price
    #[serde(default = "default_validation_enabled")]
    pub enabled: bool,
    /// Maximum accepted `|reference - computed|`
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: default_validation_enabled(),
            tolerance: default_tolerance(),
        }
    }
}

/// Main configuration struct for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BatchConfig {
    /// Size of the working set tiled from the seed table
    #[serde(default = "default_target_count")]
    pub target_count: usize,

    /// Number of timed passes over the working set
    #[serde(default = "default_num_repetitions")]
    pub num_repetitions: usize,

    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            num_repetitions: default_num_repetitions(),
            validation: ValidationConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Reference benchmark: ten million options, one pass, validation on
    pub fn reference() -> Self {
        Self::default()
    }

    /// Pure throughput measurement with validation switched off
    pub fn throughput() -> Self {
        Self {
            validation: ValidationConfig {
                enabled: false,
                ..ValidationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Small working set for tests and quick checks
    pub fn smoke() -> Self {
        Self {
            target_count: 10_000,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse batch config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_repetitions == 0 {
            bail!("num_repetitions must be at least 1");
        }
        let tol = self.validation.tolerance;
        if !tol.is_finite() || tol < 0.0 {
            bail!("Validation tolerance must be finite and non-negative, got {}", tol);
        }
        Ok(())
    }
}

fn default_target_count() -> usize {
    10_000_000
}

fn default_num_repetitions() -> usize {
    1
}

fn default_validation_enabled() -> bool {
    true
}

fn default_tolerance() -> f32 {
    1e-4
}
