//! Core trait definitions for the evolutionary harness.
//!
//! A gene is any `Clone + Send + Sync` type; it carries no behavior of its
//! own. The three strategy traits — [`Evaluator`], [`Mutator`], and
//! [`Breeder`] — supply the domain-specific capabilities the
//! [`Population`](super::Population) composes into the generation loop.

use rand::Rng;

/// Error type strategies may return.
///
/// Strategy failures are propagated verbatim to the caller of
/// [`run_generations`](super::Population::run_generations), wrapped in
/// [`EvolveError::Strategy`](super::EvolveError::Strategy).
pub type StrategyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Marker trait for fitness values.
///
/// Higher fitness is better (maximization). Only comparison is required of
/// the value itself; [`to_f64`](Fitness::to_f64) exists for logging and
/// statistics, not for algorithmic decisions.
///
/// Built-in implementations exist for `f64` and `f32`.
/// For minimization problems, negate the fitness or use a wrapper type.
pub trait Fitness: PartialOrd + Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a sentinel strictly below any attainable fitness.
    ///
    /// Used to initialize the best-ever tracker before the first
    /// evaluation pass.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(&self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

/// Computes the fitness of a gene.
///
/// This is typically the expensive step (it may call out to an external
/// model); the harness invokes it at most once per gene per generation and
/// never stores the result on the gene.
///
/// # Contract
///
/// For a fixed evaluator instance, `evaluate` must be a pure function of the
/// gene's content, and must not mutate the gene.
pub trait Evaluator<G>: Send + Sync {
    /// The fitness type produced by this evaluator.
    type Fitness: Fitness;

    /// Evaluates a gene and returns its fitness. Higher is better.
    fn evaluate(&self, gene: &G) -> Result<Self::Fitness, StrategyError>;
}

/// Produces a new gene from one existing gene (asexual variation).
///
/// # Contract
///
/// `mutate` must not modify its input; it returns a structurally related
/// but generally distinct gene. It should succeed for any valid gene.
pub trait Mutator<G>: Send + Sync {
    /// Returns a mutated copy of `gene`.
    fn mutate<R: Rng>(&self, gene: &G, rng: &mut R) -> Result<G, StrategyError>;
}

/// Produces one child gene from two parent genes (recombination).
///
/// # Contract
///
/// `breed` must not modify either parent. Argument order may or may not
/// matter — that is representation-defined, and the harness does not rely
/// on commutativity.
pub trait Breeder<G>: Send + Sync {
    /// Returns a child recombined from the two parents.
    fn breed<R: Rng>(&self, parent_a: &G, parent_b: &G, rng: &mut R) -> Result<G, StrategyError>;
}
