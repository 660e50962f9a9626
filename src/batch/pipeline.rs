use anyhow::{Context, Result};
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

use crate::batch::config::BatchConfig;
use crate::batch::seed::SeedSet;
use crate::batch::types::{BatchReport, OptionRecord, PriceMismatch, PricingResult};
use crate::models::bs::price_record;

/// Tile `seed` cyclically until `target_count` records exist.
///
/// Element `i` of the result is a copy of `seed[i % seed.len()]`. An empty seed
/// yields an empty working set.
pub fn expand(seed: &[OptionRecord], target_count: usize) -> Vec<OptionRecord> {
    seed.iter().cycle().take(target_count).copied().collect()
}

/// Compare a computed price against the record's reference.
///
/// Returns a mismatch only when `|reference - computed|` strictly exceeds
/// `tolerance`; a deviation of exactly `tolerance` is accepted.
#[inline]
pub fn check_price(
    repetition: usize,
    record: &OptionRecord,
    computed: f32,
    tolerance: f32,
) -> Option<PriceMismatch> {
    let delta = record.reference_price - computed;
    if delta.abs() > tolerance {
        Some(PriceMismatch {
            repetition,
            computed,
            reference: record.reference_price,
            delta,
        })
    } else {
        None
    }
}

/// Owns the expanded working set and runs the timed pricing passes.
///
/// Construction loads and expands the data; [`BatchDriver::run`] consumes the
/// driver, so a completed batch cannot be run again and its working set is
/// released as soon as the report is produced.
#[derive(Debug)]
pub struct BatchDriver {
    config: BatchConfig,
    working_set: Vec<OptionRecord>,
}

impl BatchDriver {
    pub fn new(seed: &SeedSet, config: BatchConfig) -> Result<Self> {
        config.validate()?;
        seed.ensure_non_empty().context("Cannot build a working set")?;

        debug!(?config, seed_size = seed.len(), "building working set");
        let working_set = expand(seed.records(), config.target_count);
        info!(
            records = working_set.len(),
            seed_size = seed.len(),
            "working set expanded"
        );

        Ok(Self {
            config,
            working_set,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn working_set(&self) -> &[OptionRecord] {
        &self.working_set
    }

    /// One untimed pass over the working set, in index order.
    pub fn results(&self) -> impl Iterator<Item = PricingResult> + '_ {
        self.working_set
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let price = price_record(record);
                PricingResult {
                    index,
                    price,
                    reference: record.reference_price,
                    delta: record.reference_price - price,
                }
            })
    }

    /// Run every configured repetition and write diagnostics plus the final
    /// elapsed-time line to `out`.
    ///
    /// Mismatches are written as they are found and never stop the run. Only
    /// failures to write to `out` are returned as errors.
    pub fn run<W: Write>(self, out: &mut W) -> Result<BatchReport> {
        let validation = self.config.validation;
        let repetitions = self.config.num_repetitions;

        let start = Instant::now();
        for repetition in 0..repetitions {
            for record in &self.working_set {
                let price = black_box(price_record(record));
                if validation.enabled {
                    if let Some(mismatch) =
                        check_price(repetition, record, price, validation.tolerance)
                    {
                        writeln!(out, "{}", mismatch)?;
                    }
                }
            }
        }
        let elapsed = start.elapsed();

        let report = BatchReport {
            records: self.working_set.len(),
            repetitions,
            elapsed,
        };
        writeln!(out, "{}", report)?;
        out.flush()?;

        info!(
            records = report.records,
            repetitions = report.repetitions,
            elapsed_ms = report.elapsed_millis(),
            options_per_sec = report.options_per_second(),
            "batch completed"
        );

        Ok(report)
    }
}
