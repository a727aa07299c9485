//! Criterion benchmarks for pricer_risk.
//!
//! Benchmarks cover:
//! - Single-position Greeks (six reprices)
//! - Full scenario grid with decomposition
//! - Portfolio aggregation, sequential vs Rayon, up to 1000 legs
//! - Hypothetical impact (three aggregations)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{OptionPosition, OptionSpec, OptionType};
use pricer_risk::greeks::{GreeksCalculator, GreeksConfig};
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::portfolio::{PortfolioAggregator, PortfolioPosition};
use pricer_risk::scenarios::ScenarioEngine;

const SPY: f64 = 600.0;

fn atm_call() -> OptionSpec {
    OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30)
}

/// Mixed book: every fourth leg is equity, the rest are options.
fn create_benchmark_book(n_legs: usize) -> Vec<PortfolioPosition> {
    (0..n_legs)
        .map(|i| {
            let spot = 50.0 + (i % 40) as f64 * 10.0;
            let beta = 0.8 + (i % 9) as f64 * 0.15;
            if i % 4 == 0 {
                PortfolioPosition::equity(format!("EQ{}", i), 100.0, spot, beta)
            } else {
                let option_type = if i % 2 == 0 { OptionType::Call } else { OptionType::Put };
                let spec = OptionSpec::new(
                    option_type,
                    spot,
                    spot * (0.9 + (i % 5) as f64 * 0.05),
                    (7 + i % 180) as f64 / 365.0,
                    0.043,
                    0.01,
                    0.2 + (i % 6) as f64 * 0.05,
                );
                PortfolioPosition::option(format!("OP{}", i), spec, (i % 7) as i64 - 3, beta)
            }
        })
        .collect()
}

fn bench_position_greeks(c: &mut Criterion) {
    let calculator = GreeksCalculator::default();
    let spec = atm_call();

    c.bench_function("position_greeks", |b| {
        b.iter(|| calculator.compute(black_box(&spec), black_box(5)))
    });
}

fn bench_scenario_grid(c: &mut Criterion) {
    let engine = ScenarioEngine::default();
    let position = OptionPosition::at_theoretical_entry(atm_call(), 5);

    c.bench_function("scenario_grid", |b| {
        b.iter(|| engine.run(black_box(&position), black_box(7)))
    });
}

fn bench_portfolio_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_aggregation");
    group.sample_size(20);

    let sequential = PortfolioAggregator::new(GreeksConfig::default(), ParallelConfig::sequential());
    let parallel = PortfolioAggregator::new(GreeksConfig::default(), ParallelConfig::new(32, 1));

    for n_legs in [10, 100, 1000] {
        let book = create_benchmark_book(n_legs);

        group.bench_with_input(BenchmarkId::new("sequential", n_legs), &book, |b, book| {
            b.iter(|| sequential.aggregate(black_box(book), black_box(SPY)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", n_legs), &book, |b, book| {
            b.iter(|| parallel.aggregate(black_box(book), black_box(SPY)))
        });
    }

    group.finish();
}

fn bench_hypothetical_impact(c: &mut Criterion) {
    let aggregator = PortfolioAggregator::default();
    let book = create_benchmark_book(200);
    let hedge = PortfolioPosition::option(
        "SPY",
        OptionSpec::new(OptionType::Put, SPY, 580.0, 45.0 / 365.0, 0.043, 0.013, 0.18),
        10,
        1.0,
    );

    c.bench_function("hypothetical_impact_200", |b| {
        b.iter(|| aggregator.hypothetical_impact(black_box(&book), black_box(&hedge), SPY))
    });
}

criterion_group!(
    benches,
    bench_position_greeks,
    bench_scenario_grid,
    bench_portfolio_aggregation,
    bench_hypothetical_impact,
);

criterion_main!(benches);
