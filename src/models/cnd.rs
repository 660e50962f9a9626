//! Cumulative normal distribution via the six-term polynomial approximation
//! (Abramowitz & Stegun 26.2.17, as popularised in Hull).
//!
//! Everything here works in `f32`. The approximation carries an absolute error
//! of roughly `7.5e-8` in exact arithmetic; single-precision rounding adds a
//! few ulps on top of that.

/// `1 / sqrt(2π)`
pub const INV_SQRT_2PI: f32 = 0.398_942_280_401_432_7;

/// Scale applied to `|x|` when forming `k = 1 / (1 + K_SCALE·|x|)`.
pub const K_SCALE: f32 = 0.231_641_9;

/// Polynomial coefficients for `k, k², k³, k⁴, k⁵`.
pub const COEFFICIENTS: [f32; 5] = [
    0.319_381_53,
    -0.356_563_782,
    1.781_477_937,
    -1.821_255_978,
    1.330_274_429,
];

/// Standard normal density `exp(-x²/2) / sqrt(2π)`.
#[inline]
pub fn norm_pdf(x: f32) -> f32 {
    libm::expf(-0.5 * x * x) * INV_SQRT_2PI
}

/// Approximate standard normal CDF.
///
/// Defined for every finite input and never fails. The negative half is
/// produced by reflection, so `cndf(-x) == 1.0 - cndf(x)` holds bit-for-bit
/// for every `x` outside the few ulps around zero where the result rounds to
/// just below one half.
///
/// ```rust
/// use blackscholes_lib::models::cnd::cndf;
///
/// assert!((cndf(0.0) - 0.5).abs() < 1e-7);
/// assert!(cndf(1.0) > cndf(0.5));
/// ```
#[inline]
pub fn cndf(x: f32) -> f32 {
    let negative = x < 0.0;
    let x = x.abs();

    let density = norm_pdf(x);

    let k = 1.0 / (1.0 + K_SCALE * x);
    let k2 = k * k;
    let k3 = k2 * k;
    let k4 = k3 * k;
    let k5 = k4 * k;

    // Higher-order terms are accumulated first and the leading term added last.
    let mut tail = k2 * COEFFICIENTS[1];
    tail += k3 * COEFFICIENTS[2];
    tail += k4 * COEFFICIENTS[3];
    tail += k5 * COEFFICIENTS[4];
    let poly = tail + k * COEFFICIENTS[0];

    let upper = 1.0 - poly * density;

    if negative {
        1.0 - upper
    } else {
        upper
    }
}
