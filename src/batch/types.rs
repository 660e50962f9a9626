use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::models::bs::OptionKind;

/// Static market parameters for one European option.
///
/// Records are plain `Copy` values: once loaded they are only ever read, and
/// the working set is built by copying seed records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionRecord {
    /// Spot price of the underlying
    pub spot: f32,
    /// Strike price
    pub strike: f32,
    /// Continuously compounded risk-free rate
    pub rate: f32,
    /// Dividend yield (carried, not priced)
    pub dividend_yield: f32,
    /// Volatility (as decimal, e.g., 0.20 for 20%)
    pub volatility: f32,
    /// Time to expiration in years
    pub time: f32,
    pub kind: OptionKind,
    /// Discrete dividend amount (carried, not priced)
    pub dividend: f32,
    /// Reference price the computed value is validated against
    pub reference_price: f32,
}

/// Raw CSV row of the seed table. The option type stays a string here so
/// that unknown codes surface as a proper error instead of a serde message.
#[derive(Debug, Deserialize)]
pub(crate) struct SeedRow {
    pub spot: f32,
    pub strike: f32,
    pub rate: f32,
    pub dividend_yield: f32,
    pub volatility: f32,
    pub time: f32,
    pub option_type: String,
    pub dividend: f32,
    pub reference_price: f32,
}

impl SeedRow {
    pub(crate) fn into_record(self) -> anyhow::Result<OptionRecord> {
        Ok(OptionRecord {
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
            volatility: self.volatility,
            time: self.time,
            kind: self.option_type.parse()?,
            dividend: self.dividend,
            reference_price: self.reference_price,
        })
    }
}

/// Price computed for a single working-set element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Position in the working set
    pub index: usize,
    pub price: f32,
    pub reference: f32,
    /// `reference - price`
    pub delta: f32,
}

/// A computed price that deviates from its reference beyond tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceMismatch {
    /// Repetition (timed pass) during which the mismatch was observed
    pub repetition: usize,
    pub computed: f32,
    pub reference: f32,
    pub delta: f32,
}

impl fmt::Display for PriceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error on {}. Computed={:.5}, Ref={:.5}, Delta={:.5}",
            self.repetition, self.computed, self.reference, self.delta
        )
    }
}

/// Outcome of a completed batch run.
#[derive(Debug, Clone, Copy)]
pub struct BatchReport {
    /// Working-set size
    pub records: usize,
    /// Number of timed passes over the working set
    pub repetitions: usize,
    /// Wall-clock time of the timed region
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    /// Throughput over all repetitions. Zero when nothing was timed.
    pub fn options_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.records * self.repetitions) as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Elapsed time: {} msec", self.elapsed_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let mismatch = PriceMismatch {
            repetition: 0,
            computed: 10.0,
            reference: 10.5,
            delta: 0.5,
        };
        assert_eq!(
            mismatch.to_string(),
            "Error on 0. Computed=10.00000, Ref=10.50000, Delta=0.50000"
        );
    }

    #[test]
    fn test_report_throughput() {
        let report = BatchReport {
            records: 1_000,
            repetitions: 2,
            elapsed: Duration::from_millis(500),
        };
        assert!((report.elapsed_millis() - 500.0).abs() < 1e-9);
        assert!((report.options_per_second() - 4_000.0).abs() < 1e-6);
        assert_eq!(report.to_string(), "Elapsed time: 500 msec");

        let instant = BatchReport {
            elapsed: Duration::ZERO,
            ..report
        };
        assert_eq!(instant.options_per_second(), 0.0);
    }

    #[test]
    fn test_seed_row_rejects_unknown_type() {
        let row = SeedRow {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.2,
            time: 1.0,
            option_type: "X".to_string(),
            dividend: 0.0,
            reference_price: 10.45,
        };
        assert!(row.into_record().is_err());
    }
}
