//! Confidence derivation for claims
//!
//! Implements the deterministic weighted-index formula that classifies a
//! claim's scoring bundle into a [`ConfidenceTier`].
//!
//! ```text
//! index = scripture*3 + patristicBreadth*2 + council*1.5 + consensus*2
//! ```
//!
//! With sub-scores capped at (3, 3, 2, 3) the maximum index is 24.

use crate::claim::SubScores;
use crate::ConfidenceTier;

/// Weight applied to the scripture score (0-3)
pub const SCRIPTURE_WEIGHT: f64 = 3.0;

/// Weight applied to patristic breadth (0-3)
pub const PATRISTIC_WEIGHT: f64 = 2.0;

/// Weight applied to the council score (0-2)
pub const COUNCIL_WEIGHT: f64 = 1.5;

/// Weight applied to the consensus score (0-3)
pub const CONSENSUS_WEIGHT: f64 = 2.0;

/// Index at or above which a claim is `High` (75% of the maximum)
pub const HIGH_THRESHOLD: f64 = 18.0;

/// Index at or above which a claim is `Mixed` (50% of the maximum)
pub const MIXED_THRESHOLD: f64 = 12.0;

/// Compute the weighted evidence index for a set of sub-scores
pub fn evidence_index(scores: &SubScores) -> f64 {
    scores.scripture as f64 * SCRIPTURE_WEIGHT
        + scores.patristic_breadth as f64 * PATRISTIC_WEIGHT
        + scores.council as f64 * COUNCIL_WEIGHT
        + scores.consensus as f64 * CONSENSUS_WEIGHT
}

/// Classify an evidence index into a tier
pub fn tier_for_index(index: f64) -> ConfidenceTier {
    if index >= HIGH_THRESHOLD {
        ConfidenceTier::High
    } else if index >= MIXED_THRESHOLD {
        ConfidenceTier::Mixed
    } else {
        ConfidenceTier::Contested
    }
}

/// Derive the confidence tier from sub-scores alone
pub fn derive_confidence(scores: &SubScores) -> ConfidenceTier {
    tier_for_index(evidence_index(scores))
}

/// Resolve the confidence label reported for a claim
///
/// A non-empty upstream label is authoritative and returned verbatim;
/// the weighted formula only runs when it is blank.
pub fn resolve_confidence(supplied: &str, scores: &SubScores) -> String {
    if supplied.is_empty() {
        derive_confidence(scores).as_str().to_string()
    } else {
        supplied.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(scripture: i64, patristic_breadth: i64, council: i64, consensus: i64) -> SubScores {
        SubScores {
            scripture,
            patristic_breadth,
            council,
            consensus,
        }
    }

    #[test]
    fn test_maximum_scores_are_high() {
        let max = scores(3, 3, 2, 3);
        assert_eq!(evidence_index(&max), 24.0);
        assert_eq!(derive_confidence(&max), ConfidenceTier::High);
    }

    #[test]
    fn test_zero_scores_are_contested() {
        let zero = SubScores::default();
        assert_eq!(evidence_index(&zero), 0.0);
        assert_eq!(derive_confidence(&zero), ConfidenceTier::Contested);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(tier_for_index(18.0), ConfidenceTier::High);
        assert_eq!(tier_for_index(17.999), ConfidenceTier::Mixed);
        assert_eq!(tier_for_index(12.0), ConfidenceTier::Mixed);
        assert_eq!(tier_for_index(11.9), ConfidenceTier::Contested);
    }

    #[test]
    fn test_council_weight_is_fractional() {
        // 1.5 on its own is well below Mixed
        assert_eq!(evidence_index(&scores(0, 0, 1, 0)), 1.5);
        assert_eq!(derive_confidence(&scores(0, 0, 1, 0)), ConfidenceTier::Contested);
    }

    #[test]
    fn test_exact_eighteen_from_scores() {
        // 3*3 + 3*2 + 0 + 1*2 = 17; adding one council point crosses to 18.5
        assert_eq!(derive_confidence(&scores(3, 3, 0, 1)), ConfidenceTier::Mixed);
        assert_eq!(derive_confidence(&scores(3, 3, 1, 1)), ConfidenceTier::High);
        // 2*3 + 3*2 + 0 + 3*2 = 18
        assert_eq!(evidence_index(&scores(2, 3, 0, 3)), 18.0);
        assert_eq!(derive_confidence(&scores(2, 3, 0, 3)), ConfidenceTier::High);
    }

    #[test]
    fn test_supplied_label_wins() {
        let max = scores(3, 3, 2, 3);
        assert_eq!(resolve_confidence("Contested", &max), "Contested");
        assert_eq!(resolve_confidence("Very High", &SubScores::default()), "Very High");
    }

    #[test]
    fn test_blank_label_derives() {
        // 2*3 + 2*2 + 0 + 2*2 = 14
        assert_eq!(resolve_confidence("", &scores(2, 2, 0, 2)), "Mixed");
        // 2*3 + 2*2 = 10
        assert_eq!(resolve_confidence("", &scores(2, 2, 0, 0)), "Contested");
        assert_eq!(resolve_confidence("", &SubScores::default()), "Contested");
    }

    #[test]
    fn test_exact_twelve_from_scores() {
        // 2*3 + 1*2 + 0 + 2*2 = 12
        assert_eq!(evidence_index(&scores(2, 1, 0, 2)), 12.0);
        assert_eq!(derive_confidence(&scores(2, 1, 0, 2)), ConfidenceTier::Mixed);
        // 1*3 + 2*2 + 1*1.5 + 1*2 = 10.5
        assert_eq!(derive_confidence(&scores(1, 2, 1, 1)), ConfidenceTier::Contested);
    }
}
