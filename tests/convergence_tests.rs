
use bsm_lib::{estimate_monte_carlo, OptionParameters, PricingProcess};
use test_utils::{
    benchmark_market, create_test_config, init_tracing, seeded_draws, BENCHMARK_CALL,
    BENCHMARK_STRIKE,
};

/// Integration test for Monte Carlo convergence on the benchmark call
///
/// Runs the pricing process at 10^3 .. 10^6 paths and checks that the estimate
/// approaches the closed form while the standard error shrinks like 1/√n.
#[test]
fn test_convergence_towards_closed_form() {
    init_tracing();
    let process = PricingProcess::new(
        benchmark_market(),
        OptionParameters::call(BENCHMARK_STRIKE),
        create_test_config(),
    );

    let sizes = [1_000, 10_000, 100_000, 1_000_000];
    let results = process
        .run_convergence(&sizes)
        .expect("convergence run should succeed");

    for r in &results {
        println!(
            "n={:>9} estimate={:.5} closed_form={:.5} |err|={:.5} se={:.5}",
            r.estimate.paths,
            r.estimate.value,
            r.closed_form,
            r.abs_error,
            r.estimate.standard_error.unwrap_or(f64::NAN)
        );
        assert!((r.closed_form - BENCHMARK_CALL).abs() < 1e-9);
        let se = r.estimate.standard_error.unwrap();
        assert!(r.abs_error < 4.0 * se, "n={} outside 4 standard errors", r.estimate.paths);
    }

    let se_small = results[1].estimate.standard_error.unwrap();
    let se_large = results[3].estimate.standard_error.unwrap();
    let ratio = se_large / se_small;
    // 100x the paths should cut the standard error by about 10x
    assert!(ratio > 0.08 && ratio < 0.12, "standard error ratio {}", ratio);

    let final_err = results[3].abs_error;
    assert!(final_err < 0.05, "final error {} too large", final_err);
}

/// Across many independent seeds, the closed form should fall inside ±3 standard
/// errors of the estimate in the large majority of runs.
#[test]
fn test_three_standard_error_coverage() {
    let market = benchmark_market();
    let call = OptionParameters::call(BENCHMARK_STRIKE);
    let trials = 200;

    let covered = (0..trials)
        .filter(|&seed| {
            let draws = seeded_draws(5_000, 10_000 + seed);
            let est = estimate_monte_carlo(&market, &call, draws.as_slice(), 0.99).unwrap();
            (est.value - BENCHMARK_CALL).abs() < 3.0 * est.standard_error.unwrap()
        })
        .count();

    let coverage = covered as f64 / trials as f64;
    println!("3-se coverage over {} seeds: {:.3}", trials, coverage);
    assert!(coverage >= 0.95, "coverage {} below expectation", coverage);
}

#[test]
fn test_confidence_interval_contains_closed_form() {
    let draws = seeded_draws(400_000, 31337);
    let est = estimate_monte_carlo(
        &benchmark_market(),
        &OptionParameters::call(BENCHMARK_STRIKE),
        draws.as_slice(),
        0.999,
    )
    .unwrap();
    let (lo, hi) = est.confidence_interval.unwrap();
    assert!(
        lo < BENCHMARK_CALL && BENCHMARK_CALL < hi,
        "[{}, {}] misses {}",
        lo,
        hi,
        BENCHMARK_CALL
    );
}
