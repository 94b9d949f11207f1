//! Fuzzy-matching metric goldens and ranking behavior.

use action_kit::similarity::{rank_similar, score, SimilarityMetric};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

// ============================================================================
// Metric goldens
// ============================================================================

#[test]
fn identical_and_empty_inputs_score_one() {
    for metric in [
        SimilarityMetric::Levenshtein,
        SimilarityMetric::Jaro,
        SimilarityMetric::JaroWinkler,
        SimilarityMetric::SorensenDice,
    ] {
        assert!(close(score(metric, "same", "same"), 1.0));
        assert!(close(score(metric, "", ""), 1.0));
    }
}

#[test]
fn disjoint_inputs_score_zero() {
    assert!(close(score(SimilarityMetric::Levenshtein, "abc", "xyz"), 0.0));
    assert!(close(score(SimilarityMetric::Jaro, "abc", "xyz"), 0.0));
    assert!(close(score(SimilarityMetric::SorensenDice, "abc", "xyz"), 0.0));
}

#[test]
fn levenshtein_normalizes_by_the_longer_input() {
    // kitten→sitting is three edits over seven characters.
    assert!(close(
        score(SimilarityMetric::Levenshtein, "kitten", "sitting"),
        1.0 - 3.0 / 7.0
    ));
}

#[test]
fn jaro_martha_golden() {
    assert!(close(
        score(SimilarityMetric::Jaro, "MARTHA", "MARHTA"),
        17.0 / 18.0
    ));
}

#[test]
fn jaro_winkler_boosts_shared_prefixes() {
    // Three-character common prefix, p = 0.1.
    let base = 17.0 / 18.0;
    assert!(close(
        score(SimilarityMetric::JaroWinkler, "MARTHA", "MARHTA"),
        base + 3.0 * 0.1 * (1.0 - base)
    ));
    // With no shared prefix the boost vanishes.
    let jaro = score(SimilarityMetric::Jaro, "martha", "aMRTHA");
    let winkler = score(SimilarityMetric::JaroWinkler, "martha", "aMRTHA");
    assert!(close(winkler, jaro));
    // A prefixed pair never scores below its plain Jaro score, and never
    // above 1.0.
    let jaro = score(SimilarityMetric::Jaro, "prefixed", "prefixes");
    let winkler = score(SimilarityMetric::JaroWinkler, "prefixed", "prefixes");
    assert!(winkler >= jaro);
    assert!(winkler <= 1.0);
}

#[test]
fn sorensen_dice_compares_bigram_sets() {
    // night/nacht share only the "ht" bigram: 2*1 / (4+4).
    assert!(close(
        score(SimilarityMetric::SorensenDice, "night", "nacht"),
        0.25
    ));
}

#[test]
fn single_character_inputs_fall_back_to_equality() {
    assert!(close(score(SimilarityMetric::SorensenDice, "a", "a"), 1.0));
    assert!(close(score(SimilarityMetric::SorensenDice, "a", "b"), 0.0));
}

// ============================================================================
// Ranking
// ============================================================================

fn candidates() -> Vec<String> {
    ["apple", "apply", "banana"].map(String::from).to_vec()
}

#[test]
fn ranking_filters_then_sorts_descending() {
    let ranked = rank_similar(
        &candidates(),
        "apple",
        SimilarityMetric::Levenshtein,
        0.5,
        0,
    );
    assert_eq!(ranked, vec!["apple".to_string(), "apply".to_string()]);
}

#[test]
fn limit_truncates_after_sorting() {
    let ranked = rank_similar(
        &candidates(),
        "apple",
        SimilarityMetric::Levenshtein,
        0.0,
        1,
    );
    assert_eq!(ranked, vec!["apple".to_string()]);
}

#[test]
fn zero_limit_means_unlimited() {
    let ranked = rank_similar(
        &candidates(),
        "apple",
        SimilarityMetric::Levenshtein,
        0.0,
        0,
    );
    assert_eq!(ranked.len(), 3);
}

#[test]
fn threshold_can_exclude_everything() {
    let ranked = rank_similar(
        &candidates(),
        "zzz",
        SimilarityMetric::Levenshtein,
        0.9,
        0,
    );
    assert!(ranked.is_empty());
}
