//! Tests for probability and benchmark queries over full simulation runs

use crate::analysis::OutcomeStats;
use crate::config::SimulationBuilder;
use crate::query::{benchmark_outperformance_rate, growth_probability};
use crate::simulation::simulate;

fn run() -> (crate::model::OutcomeSet, crate::model::SimulationConfig) {
    let (portfolio, config) = SimulationBuilder::new()
        .years(10)
        .trials(500)
        .initial_investment(100.0)
        .seed(77)
        .asset("STOCKS", 0.7, vec![0.21, -0.05, 0.18, 0.29, -0.19, 0.08, 0.31])
        .asset("BONDS", 0.3, vec![0.06, -0.02, 0.04, 0.01, -0.13, 0.09, 0.02])
        .build()
        .unwrap();
    let outcomes = simulate(&portfolio, &config).unwrap();
    (outcomes, config)
}

#[test]
fn test_lower_bound_at_minimum_captures_everything() {
    let (outcomes, _) = run();
    let stats = OutcomeStats::new(&outcomes);

    let p = growth_probability(&outcomes, Some(stats.min()), None).unwrap();
    assert_eq!(p, 1.0);

    let p = growth_probability(&outcomes, Some(stats.max() + 1.0), None).unwrap();
    assert_eq!(p, 0.0);
}

#[test]
fn test_interval_probabilities_partition() {
    let (outcomes, _) = run();
    let stats = OutcomeStats::new(&outcomes);
    let split = stats.median();

    let below = growth_probability(&outcomes, None, Some(split)).unwrap();
    let above = growth_probability(&outcomes, Some(split), None).unwrap();

    // Inclusive bounds double-count trials landing exactly on the split
    assert!(below + above >= 1.0 - 1e-9);
    assert!(below > 0.0 && above > 0.0);
}

#[test]
fn test_benchmark_rate_at_zero_return_matches_growth_query() {
    let (outcomes, config) = run();
    let zero_benchmark = crate::model::SimulationConfig {
        benchmark_annual_return: 0.0,
        ..config
    };

    let rate = benchmark_outperformance_rate(&outcomes, &zero_benchmark);

    // With a 0% benchmark, outperforming means ending strictly above the
    // initial investment
    let strictly_above = outcomes
        .final_values()
        .iter()
        .filter(|&&v| v > 100.0)
        .count() as f64
        / outcomes.num_trials() as f64;
    assert_eq!(rate, strictly_above);
}

#[test]
fn test_growth_percentages_match_final_values() {
    let (outcomes, _) = run();
    let growths = outcomes.growth_percentages();
    assert_eq!(growths.len(), outcomes.num_trials());
    for (growth, &fv) in growths.iter().zip(outcomes.final_values()) {
        let expected = (fv - 100.0) / 100.0 * 100.0;
        assert!((growth - expected).abs() < 1e-9);
    }
}

#[test]
fn test_stats_bracket_every_final_value() {
    let (outcomes, _) = run();
    let stats = OutcomeStats::new(&outcomes);
    for &v in outcomes.final_values() {
        assert!(v >= stats.min() && v <= stats.max());
    }
    assert!(stats.mean() >= stats.min() && stats.mean() <= stats.max());
    let summary = stats.summary();
    assert!(summary.p5 <= summary.median && summary.median <= summary.p95);
}
