//! The population orchestrator and its generation loop.
//!
//! [`Population`] owns the current generation's genes and the best-ever
//! result, and drives evaluate → select → refill cycles by composing the
//! three injected strategies.

use super::config::EvolveConfig;
use super::error::EvolveError;
use super::selection::select_survivors;
use super::types::{Breeder, Evaluator, Fitness, Mutator};
use crate::random::create_rng;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

/// Per-generation summary handed to an observer callback.
///
/// Purely informational; observing a run must not change its outcome.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// 1-based generation index, cumulative across `run_generations` calls.
    pub generation: usize,

    /// Best fitness within this generation.
    pub generation_best: f64,

    /// Best fitness observed across all generations so far.
    pub best_ever: f64,
}

/// A population of genes under evolution.
///
/// Generic over the gene type `G` and the three strategy objects. The gene
/// type is opaque to the harness: any `Clone + Send + Sync` type works, and
/// all domain knowledge lives in the strategies.
///
/// # Lifecycle
///
/// Constructed once per search run via [`new`](Population::new), which
/// seeds the population with `population_size` independent mutations of
/// one seed gene. [`run_generations`](Population::run_generations) then
/// advances the search; the best-ever gene and fitness persist across
/// calls and survive a failed run.
///
/// # Example
///
/// ```
/// use evo_harness::evolve::{
///     Breeder, EvolveConfig, Evaluator, Mutator, Population, StrategyError,
/// };
/// use rand::Rng;
///
/// struct LongestString;
///
/// impl Evaluator<String> for LongestString {
///     type Fitness = f64;
///     fn evaluate(&self, gene: &String) -> Result<f64, StrategyError> {
///         Ok(gene.len() as f64)
///     }
/// }
///
/// struct AppendChar;
///
/// impl Mutator<String> for AppendChar {
///     fn mutate<R: Rng>(&self, gene: &String, rng: &mut R) -> Result<String, StrategyError> {
///         let mut child = gene.clone();
///         child.push((b'a' + rng.random_range(0..26)) as char);
///         Ok(child)
///     }
/// }
///
/// struct Concat;
///
/// impl Breeder<String> for Concat {
///     fn breed<R: Rng>(&self, a: &String, b: &String, _rng: &mut R) -> Result<String, StrategyError> {
///         Ok(format!("{a}{b}"))
///     }
/// }
///
/// let config = EvolveConfig::default()
///     .with_population_size(10)
///     .with_survivor_count(3)
///     .with_seed(42);
/// let mut population =
///     Population::new(config, "seed".to_string(), LongestString, AppendChar, Concat).unwrap();
/// population.run_generations(5).unwrap();
/// assert!(population.best_fitness() > &4.0);
/// ```
pub struct Population<G, E, M, B>
where
    E: Evaluator<G>,
{
    config: EvolveConfig,
    evaluator: E,
    mutator: M,
    breeder: B,
    organisms: Vec<G>,
    best_gene: Option<G>,
    best_fitness: E::Fitness,
    generations_run: usize,
    rng: StdRng,
}

impl<G, E, M, B> Population<G, E, M, B>
where
    G: Clone + Send + Sync,
    E: Evaluator<G>,
    M: Mutator<G>,
    B: Breeder<G>,
{
    /// Creates a population from a validated config and a seed gene.
    ///
    /// The initial population is `population_size` independent mutations of
    /// `seed_gene` — each gene is one `mutate` call away from the seed,
    /// never derived from another initial gene.
    ///
    /// # Errors
    ///
    /// [`EvolveError::Config`] if the configuration is invalid (checked
    /// before any strategy runs), or [`EvolveError::Strategy`] if an
    /// initial mutation fails.
    pub fn new(
        config: EvolveConfig,
        seed_gene: G,
        evaluator: E,
        mutator: M,
        breeder: B,
    ) -> Result<Self, EvolveError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let organisms = (0..config.population_size)
            .map(|_| mutator.mutate(&seed_gene, &mut rng))
            .collect::<Result<Vec<_>, _>>()
            .map_err(EvolveError::Strategy)?;

        Ok(Self {
            config,
            evaluator,
            mutator,
            breeder,
            organisms,
            best_gene: None,
            best_fitness: E::Fitness::worst(),
            generations_run: 0,
            rng,
        })
    }

    /// Runs `num_generations` evaluate → select → refill cycles.
    ///
    /// Returns the final organisms. On error the remaining generations are
    /// aborted; completed generations' best-ever state stays readable via
    /// [`best_gene`](Self::best_gene) / [`best_fitness`](Self::best_fitness).
    pub fn run_generations(&mut self, num_generations: usize) -> Result<&[G], EvolveError> {
        self.run_generations_observed(num_generations, None)
    }

    /// Like [`run_generations`](Self::run_generations), with an optional
    /// observer invoked once after each completed generation.
    ///
    /// The observer sees summary statistics only; supplying one (e.g. a
    /// progress bar driver) cannot change the search outcome.
    pub fn run_generations_observed(
        &mut self,
        num_generations: usize,
        mut observer: Option<&mut dyn FnMut(&GenerationStats)>,
    ) -> Result<&[G], EvolveError> {
        for _ in 0..num_generations {
            let fitnesses = self.evaluate_all()?;

            // Strict `>` keeps the first maximum on ties.
            let mut gen_best_idx = 0;
            for (i, f) in fitnesses.iter().enumerate() {
                if f > &fitnesses[gen_best_idx] {
                    gen_best_idx = i;
                }
            }
            let generation_best = fitnesses[gen_best_idx].clone();
            if generation_best > self.best_fitness {
                self.best_fitness = generation_best.clone();
                self.best_gene = Some(self.organisms[gen_best_idx].clone());
            }

            self.generations_run += 1;
            debug!(
                "generation {}: best {:.4}, best-ever {:.4}",
                self.generations_run,
                generation_best.to_f64(),
                self.best_fitness.to_f64(),
            );

            let scored: Vec<(G, E::Fitness)> = std::mem::take(&mut self.organisms)
                .into_iter()
                .zip(fitnesses)
                .collect();
            let survivors = select_survivors(scored, self.config.survivor_count);
            self.organisms = self.refill(survivors)?;

            if let Some(cb) = observer.as_deref_mut() {
                cb(&GenerationStats {
                    generation: self.generations_run,
                    generation_best: generation_best.to_f64(),
                    best_ever: self.best_fitness.to_f64(),
                });
            }
        }

        Ok(&self.organisms)
    }

    /// Grows the survivor pool back to `population_size`.
    ///
    /// Each slot is filled by a Bernoulli draw: with `mutation_probability`
    /// a uniformly-chosen pool member is mutated; otherwise two distinct
    /// pool members are bred. Offspring join the pool immediately and are
    /// eligible as parents for later slots.
    fn refill(&mut self, mut pool: Vec<G>) -> Result<Vec<G>, EvolveError> {
        let deficit = self.config.population_size - pool.len();
        for _ in 0..deficit {
            // Strict `<` over a [0, 1) draw: probability 0.0 provably never
            // mutates and 1.0 provably never breeds.
            let child = if self.rng.random_range(0.0..1.0) < self.config.mutation_probability {
                let parent = self.rng.random_range(0..pool.len());
                trace!("refill: mutating pool member {parent}");
                self.mutator
                    .mutate(&pool[parent], &mut self.rng)
                    .map_err(EvolveError::Strategy)?
            } else {
                if pool.len() < 2 {
                    return Err(EvolveError::InsufficientSurvivors {
                        survivors: pool.len(),
                    });
                }
                let parents = rand::seq::index::sample(&mut self.rng, pool.len(), 2);
                trace!(
                    "refill: breeding pool members {} and {}",
                    parents.index(0),
                    parents.index(1)
                );
                self.breeder
                    .breed(&pool[parents.index(0)], &pool[parents.index(1)], &mut self.rng)
                    .map_err(EvolveError::Strategy)?
            };
            pool.push(child);
        }
        Ok(pool)
    }

    /// Scores every organism, once each.
    ///
    /// With the `parallel` feature and `config.parallel` set, evaluation
    /// fans out over rayon; selection still observes every score before it
    /// runs, and evaluation order is never significant.
    fn evaluate_all(&self) -> Result<Vec<E::Fitness>, EvolveError> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;

            return self
                .organisms
                .par_iter()
                .map(|gene| self.evaluator.evaluate(gene))
                .collect::<Result<Vec<_>, _>>()
                .map_err(EvolveError::Strategy);
        }

        self.organisms
            .iter()
            .map(|gene| self.evaluator.evaluate(gene))
            .collect::<Result<Vec<_>, _>>()
            .map_err(EvolveError::Strategy)
    }

    /// The current generation's genes. Survivors occupy the head of the
    /// slice, best first.
    pub fn organisms(&self) -> &[G] {
        &self.organisms
    }

    /// The best gene observed across all generations, if any generation
    /// has completed an evaluation pass.
    pub fn best_gene(&self) -> Option<&G> {
        self.best_gene.as_ref()
    }

    /// The best fitness observed so far; [`Fitness::worst`] before the
    /// first evaluation pass. Never decreases.
    pub fn best_fitness(&self) -> &E::Fitness {
        &self.best_fitness
    }

    /// Number of completed generations across all runs.
    pub fn generations_run(&self) -> usize {
        self.generations_run
    }
}

// ============================================================================
// Tests
// ============================================================================
