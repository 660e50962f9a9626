
use blackscholes_lib::{cndf, parity_gap, price, OptionKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_utils::{exact_cdf, load_reference_cases};

const REFERENCE_PATH: &str = "tests/data/reference_prices.csv";

#[test]
fn test_cndf_at_zero_is_one_half() {
    assert!((cndf(0.0) - 0.5).abs() < 1e-7);
}

#[test]
fn test_cndf_tracks_exact_normal_cdf() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5_000 {
        let x: f32 = rng.gen_range(-6.0..6.0);
        let err = (cndf(x) as f64 - exact_cdf(x as f64)).abs();
        assert!(err < 5e-7, "x={} err={:e}", x, err);
    }
}

#[test]
fn test_cndf_is_monotone() {
    let mut prev = cndf(-4.0);
    for i in -399..=400 {
        let x = i as f32 * 0.01;
        let c = cndf(x);
        assert!(c >= prev, "cndf decreased at x={}: {} < {}", x, c, prev);
        prev = c;
    }
}

#[test]
fn test_cndf_symmetry_random() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let magnitude: f32 = rng.gen_range(1e-3..20.0);
        let x = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
        assert_eq!(cndf(-x), 1.0 - cndf(x), "x={}", x);
    }
}

#[test]
fn test_atm_call_reference_value() {
    let call = price(100.0, 100.0, 0.05, 0.2, 1.0, OptionKind::Call);
    assert!((call - 10.4506).abs() < 1e-4, "call = {}", call);
}

#[test]
fn test_textbook_reference_prices() {
    let cases = load_reference_cases(REFERENCE_PATH).expect("Failed to load reference cases");
    assert!(!cases.is_empty());

    for case in &cases {
        let computed = price(
            case.spot,
            case.strike,
            case.rate,
            case.volatility,
            case.time,
            case.kind(),
        );
        let delta = (case.price - computed as f64).abs();
        println!(
            "{:<14} {} computed={:.6} ref={:.6} delta={:.2e}",
            case.name,
            case.kind(),
            computed,
            case.price,
            delta
        );
        assert!(delta < 1e-4, "{} {} delta {}", case.name, case.kind(), delta);
    }
}

#[test]
fn test_put_call_parity_random() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..2_000 {
        let spot: f32 = rng.gen_range(10.0..200.0);
        let strike: f32 = rng.gen_range(10.0..200.0);
        let rate: f32 = rng.gen_range(0.0..0.1);
        let vol: f32 = rng.gen_range(0.05..0.8);
        let time: f32 = rng.gen_range(0.05..3.0);

        let call = price(spot, strike, rate, vol, time, OptionKind::Call);
        let put = price(spot, strike, rate, vol, time, OptionKind::Put);
        let gap = parity_gap(spot, strike, rate, time);
        assert!(
            (call - put - gap).abs() < 2e-4,
            "parity broken: S={} K={} r={} v={} t={} call={} put={}",
            spot,
            strike,
            rate,
            vol,
            time,
            call,
            put
        );
    }
}

#[test]
fn test_call_price_increases_with_spot() {
    let mut prev = price(50.0, 100.0, 0.05, 0.3, 1.0, OptionKind::Call);
    for i in 1..=100 {
        let spot = 50.0 + i as f32;
        let p = price(spot, 100.0, 0.05, 0.3, 1.0, OptionKind::Call);
        assert!(p > prev, "call not increasing at spot={}", spot);
        prev = p;
    }
}

#[test]
fn test_pricing_is_deterministic() {
    let a = price(87.5, 91.0, 0.035, 0.27, 0.8, OptionKind::Put);
    let b = price(87.5, 91.0, 0.035, 0.27, 0.8, OptionKind::Put);
    assert_eq!(a.to_bits(), b.to_bits());
}
