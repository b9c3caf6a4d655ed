//! Evolutionary-search harness.
//!
//! A generic, domain-agnostic generation loop built on trait-based
//! abstractions. Users define their problem by implementing the three
//! strategy traits, which specify how to evaluate, mutate, and breed genes;
//! the gene type itself is opaque to the harness.
//!
//! # Core Traits
//!
//! - [`Evaluator`]: scores a gene (the expensive, domain-specific step)
//! - [`Mutator`]: derives one new gene from one existing gene
//! - [`Breeder`]: recombines two parent genes into one child
//! - [`Fitness`]: comparable score type; higher is better
//!
//! # Key Types
//!
//! - [`EvolveConfig`]: loop parameters (population size, survivor count,
//!   mutation probability, seed)
//! - [`Population`]: owns the genes and the best-ever result, runs the
//!   evaluate → select → refill cycle
//! - [`GenerationStats`]: per-generation summary for observer callbacks
//!
//! # Algorithm
//!
//! Each generation evaluates every gene, keeps the `survivor_count`
//! highest-scoring genes (elitist truncation), and refills to
//! `population_size` with offspring produced by a Bernoulli choice between
//! mutation and breeding. The best gene ever seen is tracked across
//! generations and survives failed runs.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod error;
mod population;
mod selection;
mod types;

pub use config::EvolveConfig;
pub use error::EvolveError;
pub use population::{GenerationStats, Population};
pub use types::{Breeder, Evaluator, Fitness, Mutator, StrategyError};
