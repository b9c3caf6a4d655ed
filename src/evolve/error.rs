//! Error taxonomy for the evolutionary harness.

use super::types::StrategyError;
use thiserror::Error;

/// Errors produced by [`Population`](super::Population) construction and
/// the generation loop.
///
/// No error is retried internally; recovery is the caller's responsibility.
/// When the loop aborts mid-run, the best-ever gene and fitness from
/// completed generations remain readable on the `Population`.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Invalid configuration, reported before any strategy is invoked.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Breeding was drawn while the survivor pool holds fewer than two
    /// genes. Reachable only with `survivor_count == 1` and a mutation
    /// probability below 1.0.
    #[error("breeding requires two distinct survivors, but only {survivors} survived")]
    InsufficientSurvivors {
        /// Number of survivors present when breeding was attempted.
        survivors: usize,
    },

    /// An evaluation, mutation, or breeding strategy failed. The source
    /// error is carried unchanged.
    #[error("strategy failure: {0}")]
    Strategy(#[source] StrategyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = EvolveError::Config("survivor_count (5) exceeds population_size (3)".into());
        assert!(e.to_string().contains("invalid configuration"));

        let e = EvolveError::InsufficientSurvivors { survivors: 1 };
        assert!(e.to_string().contains("only 1 survived"));
    }

    #[test]
    fn test_strategy_source_preserved() {
        use std::error::Error;

        let inner: StrategyError = "model endpoint unreachable".into();
        let e = EvolveError::Strategy(inner);
        assert!(e.source().is_some());
        assert_eq!(e.source().map(|s| s.to_string()).as_deref(), Some("model endpoint unreachable"));
    }
}
