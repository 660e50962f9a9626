// Closed-form Black-Scholes for European options without dividends, evaluated
// in single precision. Greeks and implied volatility are out of scope here.

use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

use crate::batch::types::OptionRecord;
use crate::models::cnd::cndf;
use crate::models::utils::log_moneyness;

/// European exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Single-character code used by the seed dataset.
    pub fn code(self) -> char {
        match self {
            OptionKind::Call => 'C',
            OptionKind::Put => 'P',
        }
    }
}

impl TryFrom<char> for OptionKind {
    type Error = anyhow::Error;

    fn try_from(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            'C' => Ok(OptionKind::Call),
            'P' => Ok(OptionKind::Put),
            other => Err(anyhow!("Invalid option type code: {:?}", other)),
        }
    }
}

impl FromStr for OptionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_matches('"');
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => OptionKind::try_from(c),
            _ => Err(anyhow!("Invalid option type code: {:?}", s)),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Price of a European option under Black-Scholes assumptions.
///
/// Inputs are not checked: `spot`, `strike`, `volatility` and `time` must be
/// positive, otherwise the result is NaN or infinite. Approximation error in
/// [`cndf`] can push deep out-of-the-money prices marginally below zero; no
/// clamping is applied.
///
/// # Example
///
/// ```rust
/// use blackscholes_lib::models::bs::{price, OptionKind};
///
/// let call = price(100.0, 100.0, 0.05, 0.2, 1.0, OptionKind::Call);
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
#[inline]
pub fn price(
    spot: f32,
    strike: f32,
    rate: f32,
    volatility: f32,
    time: f32,
    kind: OptionKind,
) -> f32 {
    let sqrt_time = libm::sqrtf(time);
    let log_term = log_moneyness(spot, strike);

    let power_term = volatility * volatility * 0.5;
    let den = volatility * sqrt_time;

    let d1 = ((rate + power_term) * time + log_term) / den;
    let d2 = d1 - den;

    let nd1 = cndf(d1);
    let nd2 = cndf(d2);

    let discounted_strike = strike * libm::expf(-rate * time);

    match kind {
        OptionKind::Call => spot * nd1 - discounted_strike * nd2,
        OptionKind::Put => discounted_strike * (1.0 - nd2) - spot * (1.0 - nd1),
    }
}

/// Price a seed or working-set record. Dividend fields are ignored.
#[inline]
pub fn price_record(record: &OptionRecord) -> f32 {
    price(
        record.spot,
        record.strike,
        record.rate,
        record.volatility,
        record.time,
        record.kind,
    )
}

/// Right-hand side of put-call parity: `spot - strike·e^(-rate·time)`.
pub fn parity_gap(spot: f32, strike: f32, rate: f32, time: f32) -> f32 {
    spot - strike * libm::expf(-rate * time)
}
