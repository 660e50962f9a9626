pub mod bs;
pub mod cnd;

/// Small helpers shared by the pricing kernel
pub mod utils {
    /// Calculate log-moneyness: ln(S/K)
    #[inline]
    pub fn log_moneyness(spot: f32, strike: f32) -> f32 {
        libm::logf(spot / strike)
    }

}
