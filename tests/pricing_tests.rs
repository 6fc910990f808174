
use bsm_lib::{
    price_call_closed_form, price_call_monte_carlo, price_closed_form, price_monte_carlo,
    sample_terminal_prices, OptionParameters, PricingError,
};
use test_utils::{
    benchmark_market, init_tracing, load_reference_prices, seeded_draws, BENCHMARK_CALL,
    BENCHMARK_STRIKE, REFERENCE_PRICES,
};

/// Closed-form call and put values against the reference table
#[test]
fn test_closed_form_matches_reference_table() {
    let rows = load_reference_prices(REFERENCE_PRICES).expect("Failed to load reference prices");
    assert!(rows.len() >= 10, "reference table should not be truncated");

    for row in &rows {
        let market = row.market();
        let call = price_closed_form(&market, &OptionParameters::call(row.strike)).unwrap();
        let put = price_closed_form(&market, &OptionParameters::put(row.strike)).unwrap();
        assert!(
            (call - row.call).abs() < 1e-9,
            "call mismatch for {:?}: got {}",
            row,
            call
        );
        assert!(
            (put - row.put).abs() < 1e-9,
            "put mismatch for {:?}: got {}",
            row,
            put
        );
    }
}

#[test]
fn test_closed_form_benchmark_value() {
    let value = price_call_closed_form(100.0, 0.03, 0.4, 0.25, 105.0).unwrap();
    assert!((value - 6.1979).abs() < 1e-3);
}

#[test]
fn test_closed_form_domain_errors() {
    let zero_vol = price_call_closed_form(100.0, 0.03, 0.0, 0.25, 105.0);
    assert!(matches!(zero_vol, Err(PricingError::Domain { .. })));

    let zero_expiry = price_call_closed_form(100.0, 0.03, 0.4, 0.0, 105.0);
    assert!(matches!(zero_expiry, Err(PricingError::Domain { .. })));
}

#[test]
fn test_scalar_and_single_element_sampling_agree() {
    let (s0, r, sigma, t) = (100.0, 0.03, 0.4, 0.25);
    for z in [-1.7, 0.0, 0.42, 2.2] {
        let scalar = s0 * ((r - sigma * sigma / 2.0) * t + sigma * f64::sqrt(t) * z).exp();
        let prices = sample_terminal_prices(s0, r, sigma, t, &[z]);
        assert_eq!(prices.len(), 1);
        assert!((prices.as_slice()[0] - scalar).abs() < 1e-12);
    }
}

#[test]
fn test_sampling_preserves_length_and_positivity() {
    let draws = seeded_draws(5_000, 3);
    let prices = sample_terminal_prices(100.0, 0.03, 0.4, 0.25, draws.as_slice());
    assert_eq!(prices.len(), draws.len());
    assert!(prices.as_slice().iter().all(|&p| p > 0.0 && p.is_finite()));
}

#[test]
fn test_monte_carlo_empty_draws_fail() {
    let result = price_call_monte_carlo(100.0, 0.03, 0.4, 0.25, 105.0, &[]);
    assert!(matches!(result, Err(PricingError::InvalidSize { len: 0, .. })));
}

#[test]
fn test_monte_carlo_non_negative_across_inputs() {
    let draws = seeded_draws(2_000, 17);
    for &(r, sigma, k) in &[
        (0.03, 0.4, 105.0),
        (-0.02, 0.4, 105.0),
        (0.03, 0.0, 105.0),
        (0.03, 0.4, 10_000.0),
        (0.25, 1.5, 1.0),
    ] {
        let value = price_call_monte_carlo(100.0, r, sigma, 0.25, k, draws.as_slice()).unwrap();
        assert!(value >= 0.0, "negative value {} for r={} σ={} K={}", value, r, sigma, k);
    }
}

/// Paths whose terminal price overflows must surface as an error, not NaN
#[test]
fn test_monte_carlo_overflow_is_reported() {
    for draws in [&[5000.0, 5000.0][..], &[1e4][..]] {
        let result = price_call_monte_carlo(100.0, 0.03, 0.4, 0.25, 105.0, draws);
        assert!(matches!(result, Err(PricingError::NonFinite { .. })), "{:?}", result);
    }

    let huge_spot = price_call_monte_carlo(1e308, 0.03, 0.4, 0.25, 105.0, &[3.0, 3.0, 0.0]);
    assert!(matches!(huge_spot, Err(PricingError::NonFinite { .. })));

    // Large but representable prices still price normally
    let value = price_call_monte_carlo(1e300, 0.03, 0.4, 0.25, 105.0, &[3.0, 3.0, 0.0]).unwrap();
    assert!(value.is_finite() && value > 0.0);
}

/// Multiplying S0 and K by c multiplies both prices by c
#[test]
fn test_scale_invariance() {
    let draws = seeded_draws(20_000, 5);
    let market = benchmark_market();
    let call = OptionParameters::call(BENCHMARK_STRIKE);
    let base_mc = price_monte_carlo(&market, &call, draws.as_slice()).unwrap();
    let base_cf = price_closed_form(&market, &call).unwrap();

    for c in [0.01, 3.0, 250.0] {
        let (m, o) = (market.scaled(c), call.scaled(c));
        let mc = price_monte_carlo(&m, &o, draws.as_slice()).unwrap();
        let cf = price_closed_form(&m, &o).unwrap();
        assert!((mc - c * base_mc).abs() <= 1e-10 * c * base_mc, "MC scale c={}", c);
        assert!((cf - c * base_cf).abs() <= 1e-10 * c * base_cf, "closed form scale c={}", c);
    }
}

#[test]
fn test_deep_in_and_out_of_the_money_limits() {
    let (s0, r, sigma, t) = (100.0, 0.03, 0.4, 0.25);

    let k = 1e-6;
    let itm = price_call_closed_form(s0, r, sigma, t, k).unwrap();
    assert!((itm - (s0 - k * (-r * t).exp())).abs() < 1e-9);

    let otm = price_call_closed_form(s0, r, sigma, t, 1e4).unwrap();
    assert!(otm >= 0.0 && otm < 1e-12);

    let draws = seeded_draws(10_000, 8);
    let itm_mc = price_call_monte_carlo(s0, r, sigma, t, k, draws.as_slice()).unwrap();
    // With K≈0 the estimate is the discounted sample mean of S_T, within a few standard errors of S0
    assert!((itm_mc - s0).abs() < 1.0);
    assert_eq!(price_call_monte_carlo(s0, r, sigma, t, 1e4, draws.as_slice()).unwrap(), 0.0);
}

#[test]
fn test_benchmark_monte_carlo_close_to_closed_form() {
    init_tracing();
    let market = benchmark_market();
    let draws = seeded_draws(200_000, 2025);
    let estimate = bsm_lib::estimate_monte_carlo(
        &market,
        &OptionParameters::call(BENCHMARK_STRIKE),
        draws.as_slice(),
        0.99,
    )
    .unwrap();
    let se = estimate.standard_error.unwrap();
    assert!(
        (estimate.value - BENCHMARK_CALL).abs() < 4.0 * se,
        "estimate {} vs {} (se {})",
        estimate.value,
        BENCHMARK_CALL,
        se
    );
}
