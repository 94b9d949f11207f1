//! Fuzzy string ranking for search-by-similarity.
//!
//! The metrics themselves come from `strsim`; all four are normalized to
//! `0.0..=1.0` (1.0 = identical) so that one threshold knob works across
//! metrics. Two empty strings are identical under every metric.

use serde::{Deserialize, Serialize};

/// Similarity metric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// Edit distance normalized by the longer input.
    Levenshtein,
    /// Jaro matching-window similarity.
    Jaro,
    /// Jaro with the common-prefix bonus.
    JaroWinkler,
    /// Sørensen–Dice coefficient over character bigrams.
    SorensenDice,
}

/// Score the similarity between two strings under the chosen metric.
pub fn score(metric: SimilarityMetric, a: &str, b: &str) -> f64 {
    match metric {
        SimilarityMetric::Levenshtein => strsim::normalized_levenshtein(a, b),
        SimilarityMetric::Jaro => strsim::jaro(a, b),
        SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
        SimilarityMetric::SorensenDice => strsim::sorensen_dice(a, b),
    }
}

/// Rank candidates by similarity to the target.
///
/// Candidates scoring below `threshold` are dropped; the rest come back
/// sorted by descending score, truncated to `limit` (0 means all).
pub fn rank_similar(
    candidates: &[String],
    target: &str,
    metric: SimilarityMetric,
    threshold: f64,
    limit: usize,
) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (score(metric, candidate, target), candidate))
        .filter(|(s, _)| *s >= threshold)
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let keep = if limit > 0 { limit.min(scored.len()) } else { scored.len() };
    scored[..keep].iter().map(|(_, c)| (*c).clone()).collect()
}
