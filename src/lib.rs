//! Generic evolutionary-search harness.
//!
//! Evolves a population of opaque candidate solutions ("genes") across
//! generations using pluggable strategies:
//!
//! - **Evaluation**: maps a gene to a comparable fitness score. This is the
//!   expensive, domain-specific step (it may call an external model) and is
//!   invoked at most once per gene per generation.
//! - **Mutation**: asexual variation — one gene in, one new gene out.
//! - **Breeding**: recombination — two read-only parents in, one child out.
//!
//! The harness owns only the population lifecycle: seeding from one initial
//! gene, per-generation evaluation, elitist truncation selection, and
//! probabilistic mutate-or-breed refill, with best-ever tracking across the
//! whole run. It is aimed at problems with no usable gradient (prompt
//! search, structural search) where fitness evaluation dominates the cost.
//!
//! # Architecture
//!
//! This crate contains no domain-specific concepts — gene representations,
//! fitness functions, and operators are all defined by consumers through
//! the traits in [`evolve`]. Randomness is seeded through
//! [`random::create_rng`], so a fixed seed reproduces a run exactly given
//! deterministic strategies.

pub mod evolve;
pub mod random;
