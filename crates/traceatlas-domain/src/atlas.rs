//! The complete set of records produced by one extraction run

use crate::{Claim, Edge, Interpretation, Node, Source, Tradition};
use std::fmt;

/// All six record sequences, each in source row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atlas {
    /// Doctrinal claims with scoring
    pub claims: Vec<Claim>,
    /// Traditions with epistemic posture
    pub traditions: Vec<Tradition>,
    /// Citable sources
    pub sources: Vec<Source>,
    /// Events, documents and persons
    pub nodes: Vec<Node>,
    /// Tradition stances toward claims
    pub edges: Vec<Edge>,
    /// Family-level summaries
    pub interpretations: Vec<Interpretation>,
}

/// Record counts per document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtlasCounts {
    /// Number of claims
    pub claims: usize,
    /// Number of traditions
    pub traditions: usize,
    /// Number of sources
    pub sources: usize,
    /// Number of nodes
    pub nodes: usize,
    /// Number of edges
    pub edges: usize,
    /// Number of interpretations
    pub interpretations: usize,
}

impl Atlas {
    /// Count the records in each sequence
    pub fn counts(&self) -> AtlasCounts {
        AtlasCounts {
            claims: self.claims.len(),
            traditions: self.traditions.len(),
            sources: self.sources.len(),
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            interpretations: self.interpretations.len(),
        }
    }

    /// Look up a claim by ID
    pub fn claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    /// Look up a tradition by ID
    pub fn tradition(&self, id: &str) -> Option<&Tradition> {
        self.traditions.iter().find(|t| t.id == id)
    }

    /// Edges whose claim or tradition does not resolve to a record
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| self.claim(&e.claim_id).is_none() || self.tradition(&e.tradition_id).is_none())
            .collect()
    }
}

impl fmt::Display for AtlasCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} claims, {} traditions, {} sources, {} nodes, {} edges, {} interpretations",
            self.claims, self.traditions, self.sources, self.nodes, self.edges, self.interpretations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PositionConfidence, ScoringBundle};

    #[test]
    fn test_counts_and_dangling_edges() {
        let mut atlas = Atlas::default();
        atlas.claims.push(Claim::new(
            "D1".into(),
            "".into(),
            "".into(),
            "".into(),
            "".into(),
            vec![],
            vec![],
            ScoringBundle::unscored(),
        ));
        atlas.traditions.push(Tradition::new(
            "T1".into(),
            "".into(),
            "".into(),
            "".into(),
            "".into(),
            "".into(),
            "".into(),
            vec![],
        ));
        let edge = |seq, claim: &str, trad: &str| {
            Edge::new(
                seq,
                claim.into(),
                trad.into(),
                "Affirm".into(),
                "".into(),
                PositionConfidence::High,
                vec![],
            )
        };
        atlas.edges.push(edge(1, "D1", "T1"));
        atlas.edges.push(edge(2, "D9", "T1"));

        let counts = atlas.counts();
        assert_eq!(counts.claims, 1);
        assert_eq!(counts.edges, 2);
        assert_eq!(atlas.dangling_edges().len(), 1);
        assert_eq!(atlas.dangling_edges()[0].id, "E2");
        assert!(counts.to_string().starts_with("1 claims"));
    }
}
