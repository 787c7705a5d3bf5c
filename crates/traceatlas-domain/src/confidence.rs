//! Confidence labels for claims and tradition positions

use serde::{Serialize, Serializer};
use std::fmt;

/// Claim-level confidence tier derived from the weighted evidence index
///
/// Tiers are ordered from weakest to strongest so that
/// `ConfidenceTier::Contested < ConfidenceTier::High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceTier {
    /// Index below 12
    Contested,

    /// Index in [12, 18)
    Mixed,

    /// Index at or above 18
    High,
}

impl ConfidenceTier {
    /// Get the tier label as written to `claims.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Contested => "Contested",
            ConfidenceTier::Mixed => "Mixed",
            ConfidenceTier::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConfidenceTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Confidence attached to a single tradition position
///
/// Positions never go through the weighted formula; the raw label is
/// matched exactly and everything unrecognised is `Contested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PositionConfidence {
    /// Exact label `High`
    High,

    /// Exact label `Medium`
    Medium,

    /// Any other label, including blank
    Contested,
}

impl PositionConfidence {
    /// Classify a raw confidence cell
    pub fn classify(raw: &str) -> Self {
        match raw {
            "High" => PositionConfidence::High,
            "Medium" => PositionConfidence::Medium,
            _ => PositionConfidence::Contested,
        }
    }

    /// Get the label as written to `edges.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionConfidence::High => "High",
            PositionConfidence::Medium => "Medium",
            PositionConfidence::Contested => "Contested",
        }
    }
}

impl fmt::Display for PositionConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(ConfidenceTier::Contested < ConfidenceTier::Mixed);
        assert!(ConfidenceTier::Mixed < ConfidenceTier::High);
    }

    #[test]
    fn test_position_confidence_is_exact_match() {
        assert_eq!(PositionConfidence::classify("High"), PositionConfidence::High);
        assert_eq!(PositionConfidence::classify("Medium"), PositionConfidence::Medium);
        assert_eq!(PositionConfidence::classify("high"), PositionConfidence::Contested);
        assert_eq!(PositionConfidence::classify("Low"), PositionConfidence::Contested);
        assert_eq!(PositionConfidence::classify(""), PositionConfidence::Contested);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&PositionConfidence::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        let json = serde_json::to_string(&ConfidenceTier::Mixed).unwrap();
        assert_eq!(json, "\"Mixed\"");
    }
}
