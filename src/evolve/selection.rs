//! Survivor selection.
//!
//! The harness uses elitist truncation exclusively: after evaluation, the
//! `survivor_count` highest-fitness genes are carried forward unchanged.
//! This guarantees the retained gene pool never regresses, at some cost in
//! diversity; it is deterministic given the scores and costs one sort per
//! generation.

use super::types::Fitness;

/// Keeps the `survivor_count` highest-fitness genes from a scored
/// generation.
///
/// Ties are broken arbitrarily (no ordering promise among equal scores).
/// The returned genes preserve score order, best first.
///
/// # Panics
/// Debug-asserts `survivor_count <= scored.len()`; the config is validated
/// before this is ever reached.
pub(super) fn select_survivors<G, F: Fitness>(
    mut scored: Vec<(G, F)>,
    survivor_count: usize,
) -> Vec<G> {
    debug_assert!(survivor_count <= scored.len());

    // Descending by fitness; incomparable scores (e.g. NaN) rank as equal.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(survivor_count);
    scored.into_iter().map(|(gene, _)| gene).collect()
}
