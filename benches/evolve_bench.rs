//! Criterion benchmarks for the evolutionary harness.
//!
//! Uses a synthetic string-growth problem with a trivially cheap evaluator
//! to measure pure loop overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evo_harness::evolve::{
    Breeder, Evaluator, EvolveConfig, Mutator, Population, StrategyError,
};
use rand::Rng;

struct LengthEvaluator;

impl Evaluator<String> for LengthEvaluator {
    type Fitness = f64;
    fn evaluate(&self, gene: &String) -> Result<f64, StrategyError> {
        Ok(gene.len() as f64)
    }
}

struct AppendMutator;

impl Mutator<String> for AppendMutator {
    fn mutate<R: Rng>(&self, gene: &String, rng: &mut R) -> Result<String, StrategyError> {
        let mut child = gene.clone();
        child.push((b'a' + rng.random_range(0..26)) as char);
        Ok(child)
    }
}

struct SpliceBreeder;

impl Breeder<String> for SpliceBreeder {
    fn breed<R: Rng>(&self, a: &String, b: &String, rng: &mut R) -> Result<String, StrategyError> {
        let cut = rng.random_range(0..=a.len());
        Ok(format!("{}{}", &a[..cut], b))
    }
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_generations");

    for &population_size in &[20usize, 100, 500] {
        group.bench_with_input(
            BenchmarkId::new("run_10_generations", population_size),
            &population_size,
            |b, &n| {
                b.iter(|| {
                    let config = EvolveConfig::default()
                        .with_population_size(n)
                        .with_survivor_count((n / 10).max(2))
                        .with_mutation_probability(0.5)
                        .with_seed(42);
                    let mut population = Population::new(
                        config,
                        "seed".to_string(),
                        LengthEvaluator,
                        AppendMutator,
                        SpliceBreeder,
                    )
                    .unwrap();
                    population.run_generations(10).unwrap();
                    black_box(*population.best_fitness())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generations);
criterion_main!(benches);
