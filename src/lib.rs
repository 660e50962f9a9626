//! # Blackscholes-Lib: Batch European Option Pricing Kernel
//!
//! `blackscholes-lib` prices a large batch of European options with the closed-form
//! Black-Scholes formula in single precision and reports the wall-clock time of the
//! pricing passes. Every computed price can be checked against a reference value
//! shipped with the seed dataset.
//!
//! ## Core Features
//!
//! - **CND Approximation**: Six-term polynomial approximation of the normal CDF
//! - **Option Pricing**: Closed-form Black-Scholes for calls and puts
//! - **Batch Driver**: Tiles a small seed table into a large working set, times repeated
//!   passes and reports deviations from reference prices
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blackscholes_lib::{default_configs, BatchDriver, SeedSet};
//!
//! let seed = SeedSet::embedded()?;
//! let driver = BatchDriver::new(&seed, default_configs::reference())?;
//!
//! let mut stdout = std::io::stdout().lock();
//! let report = driver.run(&mut stdout)?;
//! println!("{:.0} options/sec", report.options_per_second());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Precision
//!
//! All arithmetic is `f32` and the transcendental functions come from `libm`, so a
//! given input produces the same price on every platform.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod batch;
pub mod models;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;
use std::io::Write;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Driver, configuration and data types
pub use batch::{
    config::{BatchConfig, ValidationConfig},
    pipeline::{check_price, expand, BatchDriver},
    seed::SeedSet,
    types::{BatchReport, OptionRecord, PriceMismatch, PricingResult},
};

// Pricing kernel
pub use models::{
    bs::{parity_gap, price, price_record, OptionKind},
    cnd::cndf,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured batch settings.
///
/// - [`reference()`]: Ten million options, one pass, validation on
/// - [`throughput()`]: Same working set with validation off
/// - [`smoke()`]: Ten thousand options for quick checks
pub mod default_configs {
    use crate::batch::config::BatchConfig;

    /// The reference benchmark configuration.
    ///
    /// ```rust
    /// use blackscholes_lib::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert_eq!(config.target_count, 10_000_000);
    /// ```
    pub fn reference() -> BatchConfig {
        BatchConfig::reference()
    }

    /// Throughput-only configuration; no reference checks inside the timed loop.
    pub fn throughput() -> BatchConfig {
        BatchConfig::throughput()
    }

    /// Small working set, validation on.
    pub fn smoke() -> BatchConfig {
        BatchConfig::smoke()
    }
}

/// Price the embedded seed dataset tiled to `config.target_count` records.
///
/// Mismatch diagnostics and the final elapsed-time line are written to `out`.
///
/// # Errors
///
/// * `anyhow::Error` if the configuration is invalid
/// * `anyhow::Error` if writing to `out` fails
///
/// Price deviations are never errors; they are reported and the run continues.
pub fn run_batch<W: Write>(config: BatchConfig, out: &mut W) -> Result<BatchReport> {
    let seed = SeedSet::embedded()?;
    let driver = BatchDriver::new(&seed, config)?;
    driver.run(out)
}
