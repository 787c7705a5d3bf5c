//! Interpretation aggregation
//!
//! Rolls raw tradition positions up into one summary per
//! `(claim, tradition family)` pair. Groups come out ordered by the first
//! appearance of the claim, then by the first appearance of the family
//! within that claim; positions inside a group keep row order.

use crate::PositionConfidence;
use serde::Serialize;
use std::collections::HashMap;

/// Family used when a position references an unknown tradition
pub const OTHER_FAMILY: &str = "Other";

/// Maximum number of key points drawn from a group's leading positions
pub const MAX_KEY_POINTS: usize = 5;

/// One tradition's position on a claim, as carried inside an interpretation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Tradition identifier
    pub tradition_id: String,
    /// Tradition display name, or the raw ID when the tradition is unknown
    pub tradition_name: String,
    /// Raw stance token
    pub stance: String,
    /// Free-text summary
    pub summary: String,
    /// Position confidence
    pub confidence: PositionConfidence,
    /// Key source IDs
    pub key_sources: Vec<String>,
}

impl Position {
    /// Whether the stance is one of the two affirming spellings
    ///
    /// Narrower than [`crate::RelationType::from_stance`]: only
    /// `Affirm` and `affirm` count toward the consensus summary.
    pub fn affirms(&self) -> bool {
        matches!(self.stance.as_str(), "Affirm" | "affirm")
    }
}

/// A summarized point with its supporting citations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyPoint {
    /// `"{traditionName}: {summary}"`
    pub text: String,
    /// Key sources of the originating position
    pub citations: Vec<String>,
}

/// Aggregated reception of one claim within one tradition family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    /// `INT_{claimId}_{FAMILY}`
    pub id: String,
    /// Referenced claim
    pub claim_id: String,
    /// Tradition family
    pub lens: String,
    /// Generated consensus sentence
    pub summary: String,
    /// Up to five points taken from the leading positions
    pub key_points: Vec<KeyPoint>,
    /// Every position in the group
    pub positions: Vec<Position>,
}

/// Choose the consensus sentence for a group
pub fn consensus_summary(family: &str, affirm_count: usize, total: usize) -> String {
    if affirm_count == total {
        format!("All {} traditions affirm this doctrine.", family)
    } else if affirm_count * 2 > total {
        format!("Most {} traditions affirm this doctrine, with some variations.", family)
    } else {
        format!("{} traditions show varied positions on this doctrine.", family)
    }
}

impl Interpretation {
    /// Finalize one group of positions
    pub fn from_positions(claim_id: String, family: String, positions: Vec<Position>) -> Self {
        let affirm_count = positions.iter().filter(|p| p.affirms()).count();
        let summary = consensus_summary(&family, affirm_count, positions.len());

        let key_points = positions
            .iter()
            .take(MAX_KEY_POINTS)
            .filter(|p| !p.summary.is_empty())
            .map(|p| KeyPoint {
                text: format!("{}: {}", p.tradition_name, p.summary),
                citations: p.key_sources.clone(),
            })
            .collect();

        Self {
            id: format!("INT_{}_{}", claim_id, family.to_uppercase()),
            claim_id,
            lens: family,
            summary,
            key_points,
            positions,
        }
    }
}

#[derive(Debug)]
struct ClaimGroups {
    claim_id: String,
    families: Vec<(String, Vec<Position>)>,
}

/// Ordered multi-map from `(claim, family)` to positions
///
/// Rows are pushed once in source order; [`finish`](Self::finish) turns each
/// group into an [`Interpretation`].
#[derive(Debug, Default)]
pub struct InterpretationBuilder {
    claims: Vec<ClaimGroups>,
    claim_index: HashMap<String, usize>,
}

impl InterpretationBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position to its `(claim, family)` group
    pub fn push(&mut self, claim_id: &str, family: &str, position: Position) {
        let idx = match self.claim_index.get(claim_id) {
            Some(&idx) => idx,
            None => {
                self.claims.push(ClaimGroups {
                    claim_id: claim_id.to_string(),
                    families: Vec::new(),
                });
                let idx = self.claims.len() - 1;
                self.claim_index.insert(claim_id.to_string(), idx);
                idx
            }
        };

        let families = &mut self.claims[idx].families;
        match families.iter_mut().find(|(f, _)| f == family) {
            Some((_, positions)) => positions.push(position),
            None => families.push((family.to_string(), vec![position])),
        }
    }

    /// Number of `(claim, family)` groups collected so far
    pub fn group_count(&self) -> usize {
        self.claims.iter().map(|c| c.families.len()).sum()
    }

    /// Finalize every group in order
    pub fn finish(self) -> Vec<Interpretation> {
        self.claims
            .into_iter()
            .flat_map(|claim| {
                let claim_id = claim.claim_id;
                claim
                    .families
                    .into_iter()
                    .map(move |(family, positions)| {
                        Interpretation::from_positions(claim_id.clone(), family, positions)
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(tradition: &str, stance: &str, summary: &str) -> Position {
        Position {
            tradition_id: tradition.to_string(),
            tradition_name: format!("{} Church", tradition),
            stance: stance.to_string(),
            summary: summary.to_string(),
            confidence: PositionConfidence::High,
            key_sources: vec![format!("S_{}", tradition)],
        }
    }

    #[test]
    fn test_all_affirm() {
        let interp = Interpretation::from_positions(
            "D001".into(),
            "Catholic".into(),
            vec![position("T1", "Affirm", "Yes."), position("T2", "affirm", "Yes.")],
        );
        assert_eq!(interp.summary, "All Catholic traditions affirm this doctrine.");
        assert_eq!(interp.id, "INT_D001_CATHOLIC");
        assert_eq!(interp.lens, "Catholic");
    }

    #[test]
    fn test_most_affirm() {
        let interp = Interpretation::from_positions(
            "D001".into(),
            "Orthodox".into(),
            vec![
                position("T1", "Affirm", "a"),
                position("T2", "Affirm", "b"),
                position("T3", "Affirm", "c"),
                position("T4", "Deny", "d"),
            ],
        );
        assert_eq!(
            interp.summary,
            "Most Orthodox traditions affirm this doctrine, with some variations."
        );
        assert_eq!(interp.key_points.len(), 4);
        assert_eq!(interp.key_points[0].text, "T1 Church: a");
        assert_eq!(interp.key_points[0].citations, vec!["S_T1".to_string()]);
    }

    #[test]
    fn test_exactly_half_is_varied() {
        let interp = Interpretation::from_positions(
            "D002".into(),
            "Reformed".into(),
            vec![position("T1", "Affirm", ""), position("T2", "Nuance", "")],
        );
        assert_eq!(interp.summary, "Reformed traditions show varied positions on this doctrine.");
        assert!(interp.key_points.is_empty());
    }

    #[test]
    fn test_affirm_detection_is_narrow() {
        // Supports-class spellings beyond the two literals do not count
        assert!(!position("T1", "AFFIRM", "").affirms());
        assert!(!position("T1", "Affirms", "").affirms());
        assert!(position("T1", "affirm", "").affirms());
    }

    #[test]
    fn test_key_points_limited_to_first_five() {
        let positions: Vec<Position> = (1..=7)
            .map(|i| {
                let summary = if i == 2 { "" } else { "s" };
                position(&format!("T{}", i), "Affirm", summary)
            })
            .collect();
        let interp = Interpretation::from_positions("D003".into(), "Baptist".into(), positions);

        // First five rows, minus the one with an empty summary
        assert_eq!(interp.key_points.len(), 4);
        assert_eq!(interp.key_points.last().unwrap().text, "T5 Church: s");
        assert_eq!(interp.positions.len(), 7);
    }

    #[test]
    fn test_builder_grouping_order() {
        let mut builder = InterpretationBuilder::new();
        builder.push("D1", "Catholic", position("T1", "Affirm", "a"));
        builder.push("D2", "Catholic", position("T1", "Affirm", "b"));
        builder.push("D1", "Orthodox", position("T2", "Deny", "c"));
        builder.push("D1", "Catholic", position("T3", "Deny", "d"));
        assert_eq!(builder.group_count(), 3);

        let interps = builder.finish();
        let ids: Vec<&str> = interps.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["INT_D1_CATHOLIC", "INT_D1_ORTHODOX", "INT_D2_CATHOLIC"]);

        // Same-family positions accumulate in row order
        assert_eq!(interps[0].positions.len(), 2);
        assert_eq!(interps[0].positions[1].tradition_id, "T3");
    }

    #[test]
    fn test_json_field_names() {
        let interp = Interpretation::from_positions(
            "D1".into(),
            OTHER_FAMILY.into(),
            vec![position("T9", "Affirm", "x")],
        );
        let value = serde_json::to_value(&interp).unwrap();
        assert_eq!(value["id"], "INT_D1_OTHER");
        assert_eq!(value["key_points"][0]["text"], "T9 Church: x");
        assert_eq!(value["positions"][0]["traditionName"], "T9 Church");
        assert_eq!(value["positions"][0]["keySources"][0], "S_T9");
    }
}
