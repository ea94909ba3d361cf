//! SIR step benchmarks.
//!
//! Measures one synchronous step on random contact networks of increasing
//! size and density, starting from the same seeded snapshot every iteration.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use netlab_benches::{
    error::BenchSetupError,
    params::{EpidemicBenchParams, SEED},
};
use netlab_core::{TransmissionParams, step_epidemic};

const CASES: &[EpidemicBenchParams] = &[
    EpidemicBenchParams {
        nodes: 100,
        connection_probability: 0.1,
        infected_percent: 5,
    },
    EpidemicBenchParams {
        nodes: 300,
        connection_probability: 0.05,
        infected_percent: 10,
    },
    EpidemicBenchParams {
        nodes: 500,
        connection_probability: 0.02,
        infected_percent: 30,
    },
];

fn epidemic_step_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let transmission = TransmissionParams::new(0.5, 0.05)?;
    let mut group = c.benchmark_group("epidemic_step");

    for params in CASES {
        let network = params.network()?;
        group.bench_with_input(BenchmarkId::from_parameter(params), &network, |b, network| {
            b.iter_batched(
                || SmallRng::seed_from_u64(SEED),
                |mut rng| step_epidemic(network, &transmission, &mut rng),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
    Ok(())
}

fn epidemic_step(c: &mut Criterion) {
    if let Err(err) = epidemic_step_impl(c) {
        panic!("epidemic_step benchmark setup failed: {err}");
    }
}

criterion_group!(benches, epidemic_step);
criterion_main!(benches);
