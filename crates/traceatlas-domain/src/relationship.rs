//! Relationship module - a tradition's stance toward a claim

use crate::PositionConfidence;
use serde::Serialize;

/// Prefix of the virtual node standing in for a tradition
pub const TRADITION_NODE_PREFIX: &str = "TRAD_";

/// Type of relationship between a tradition and a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationType {
    /// The tradition affirms the claim
    Supports,

    /// The tradition denies or rejects the claim
    Challenges,

    /// The tradition modifies or nuances the claim
    Develops,

    /// Anything else, including a blank stance
    Defines,
}

impl RelationType {
    /// Classify a stance token
    ///
    /// Matching is literal against a fixed vocabulary; only the spellings
    /// listed here are recognised.
    pub fn from_stance(stance: &str) -> Self {
        match stance {
            "Affirm" | "affirm" => RelationType::Supports,
            "Deny" | "deny" | "Reject" => RelationType::Challenges,
            "Modify" | "modify" | "Nuance" => RelationType::Develops,
            _ => RelationType::Defines,
        }
    }

    /// Get the relation name as written to `edges.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Supports => "Supports",
            RelationType::Challenges => "Challenges",
            RelationType::Develops => "Develops",
            RelationType::Defines => "Defines",
        }
    }
}

/// A tradition's stance toward one claim
///
/// Edge IDs are sequential (`E1`, `E2`, ...) in the order rows are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Sequential edge identifier
    pub id: String,

    /// Referenced claim
    pub claim_id: String,

    /// Virtual tradition node (`TRAD_{traditionId}`)
    pub node_id: String,

    /// Relation classified from the stance
    pub relation_type: RelationType,

    /// Free-text summary of the position
    pub note: String,

    /// Position confidence
    pub confidence: PositionConfidence,

    /// Referenced tradition
    #[serde(rename = "traditionId")]
    pub tradition_id: String,

    /// Raw stance token
    pub stance: String,

    /// Key source IDs
    #[serde(rename = "keySources")]
    pub key_sources: Vec<String>,
}

impl Edge {
    /// Create an edge with the given 1-based sequence number
    pub fn new(
        sequence: usize,
        claim_id: String,
        tradition_id: String,
        stance: String,
        note: String,
        confidence: PositionConfidence,
        key_sources: Vec<String>,
    ) -> Self {
        Self {
            id: format!("E{}", sequence),
            claim_id,
            node_id: format!("{}{}", TRADITION_NODE_PREFIX, tradition_id),
            relation_type: RelationType::from_stance(&stance),
            note,
            confidence,
            tradition_id,
            stance,
            key_sources,
        }
    }
}
