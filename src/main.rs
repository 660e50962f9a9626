//! Blackscholes batch benchmark
//!
//! Tiles the embedded seed dataset into the configured working set, prices it
//! and prints mismatch diagnostics followed by the elapsed time. Validation
//! mismatches never change the exit status.

use std::path::PathBuf;

use anyhow::Result;
use blackscholes_lib::{run_batch, BatchConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes batch pricing benchmark
#[derive(Parser)]
#[command(name = "blackscholes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of options in the working set
    #[arg(short = 'n', long)]
    target_count: Option<usize>,

    /// Number of timed passes over the working set
    #[arg(short, long)]
    repetitions: Option<usize>,

    /// Skip reference-price validation
    #[arg(long)]
    no_validate: bool,

    /// Maximum accepted deviation from the reference price
    #[arg(short, long)]
    tolerance: Option<f32>,
}

impl Cli {
    fn batch_config(&self) -> Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::from_file(path)?,
            None => BatchConfig::reference(),
        };

        if let Some(n) = self.target_count {
            config.target_count = n;
        }
        if let Some(reps) = self.repetitions {
            config.num_repetitions = reps;
        }
        if self.no_validate {
            config.validation.enabled = false;
        }
        if let Some(tol) = self.tolerance {
            config.validation.tolerance = tol;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = cli.batch_config()?;

    let mut stdout = std::io::stdout().lock();
    run_batch(config, &mut stdout)?;

    Ok(())
}
