//! Claim module - doctrinal assertions and their scoring bundles

use crate::confidence_computation::resolve_confidence;
use serde::Serialize;

/// The four integer sub-scores feeding the weighted evidence index
///
/// Every component defaults to 0 when the source cell is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubScores {
    /// Scripture score (0-3)
    pub scripture: i64,

    /// Patristic breadth (0-3)
    pub patristic_breadth: i64,

    /// Council score (0-2)
    pub council: i64,

    /// Consensus score (0-3)
    pub consensus: i64,
}

/// Evidentiary scoring owned by exactly one claim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringBundle {
    /// Scripture score (0-3)
    pub scripture_score: i64,

    /// Free-text scripture classification
    pub scripture_class: String,

    /// Patristic breadth (0-3)
    pub patristic_breadth: i64,

    /// Council score (0-2)
    pub council_score: i64,

    /// Consensus score (0-3)
    pub consensus_score: i64,

    /// Explicit tier label, passed through untouched
    pub tier: String,

    /// Authoritative confidence label; blank when none was supplied
    pub confidence: String,

    /// `confidence` when supplied, otherwise the tier derived from the sub-scores
    pub derived_confidence: String,
}

impl ScoringBundle {
    /// Build a bundle, resolving `derived_confidence`
    pub fn new(scores: SubScores, scripture_class: String, tier: String, confidence: String) -> Self {
        let derived_confidence = resolve_confidence(&confidence, &scores);
        Self {
            scripture_score: scores.scripture,
            scripture_class,
            patristic_breadth: scores.patristic_breadth,
            council_score: scores.council,
            consensus_score: scores.consensus,
            tier,
            confidence,
            derived_confidence,
        }
    }

    /// Bundle for a claim with no scoring row: all zeros, hence `Contested`
    pub fn unscored() -> Self {
        Self::new(SubScores::default(), String::new(), String::new(), String::new())
    }
}

/// A doctrinal assertion
///
/// Claims are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    /// Doctrine identifier (unique)
    pub id: String,

    /// Category the doctrine is clustered under
    pub cluster: String,

    /// Short term naming the doctrine
    pub short_label: String,

    /// Plain-language definition
    pub full_statement: String,

    /// Technical definition (may be empty)
    #[serde(rename = "technicalDefinition")]
    pub technical_definition: String,

    /// Plain definition, followed by the technical one when present
    pub definition_variants: Vec<String>,

    /// Linked key document IDs
    #[serde(rename = "keyDocs")]
    pub key_docs: Vec<String>,

    /// Linked source IDs
    #[serde(rename = "sourceIds")]
    pub source_ids: Vec<String>,

    /// Evidentiary scoring
    pub scoring: ScoringBundle,
}

impl Claim {
    /// Create a new claim
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        cluster: String,
        short_label: String,
        plain_definition: String,
        technical_definition: String,
        key_docs: Vec<String>,
        source_ids: Vec<String>,
        scoring: ScoringBundle,
    ) -> Self {
        let definition_variants = if technical_definition.is_empty() {
            vec![plain_definition.clone()]
        } else {
            vec![plain_definition.clone(), technical_definition.clone()]
        };

        Self {
            id,
            cluster,
            short_label,
            full_statement: plain_definition,
            technical_definition,
            definition_variants,
            key_docs,
            source_ids,
            scoring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(technical: &str, scoring: ScoringBundle) -> Claim {
        Claim::new(
            "D001".to_string(),
            "Trinity".to_string(),
            "Homoousios".to_string(),
            "The Son is of one substance with the Father.".to_string(),
            technical.to_string(),
            vec!["NIC325".to_string()],
            vec![],
            scoring,
        )
    }

    #[test]
    fn test_definition_variants_with_technical() {
        let c = claim("Consubstantiality of hypostases.", ScoringBundle::unscored());
        assert_eq!(c.definition_variants.len(), 2);
        assert_eq!(c.definition_variants[1], "Consubstantiality of hypostases.");
    }

    #[test]
    fn test_definition_variants_without_technical() {
        let c = claim("", ScoringBundle::unscored());
        assert_eq!(c.definition_variants, vec![c.full_statement.clone()]);
    }

    #[test]
    fn test_unscored_bundle() {
        let bundle = ScoringBundle::unscored();
        assert_eq!(bundle.scripture_score, 0);
        assert_eq!(bundle.patristic_breadth, 0);
        assert_eq!(bundle.council_score, 0);
        assert_eq!(bundle.consensus_score, 0);
        assert_eq!(bundle.derived_confidence, "Contested");
        assert!(bundle.confidence.is_empty());
    }

    #[test]
    fn test_supplied_confidence_passes_through() {
        let scores = SubScores {
            scripture: 3,
            patristic_breadth: 3,
            council: 2,
            consensus: 3,
        };
        let bundle = ScoringBundle::new(scores, "Explicit".into(), "T1".into(), "Mixed".into());
        assert_eq!(bundle.confidence, "Mixed");
        assert_eq!(bundle.derived_confidence, "Mixed");
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(claim("", ScoringBundle::unscored())).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "cluster",
            "short_label",
            "full_statement",
            "technicalDefinition",
            "definition_variants",
            "keyDocs",
            "sourceIds",
            "scoring",
        ] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        let scoring = obj["scoring"].as_object().unwrap();
        assert_eq!(scoring["scriptureScore"], 0);
        assert_eq!(scoring["derivedConfidence"], "Contested");
    }
}
