//! Traceatlas Domain Layer
//!
//! This crate contains the record types and classification rules for the
//! doctrine traceability atlas. It performs no I/O: the extractor feeds it
//! normalized cell text and the CLI serializes what it produces.
//!
//! ## Key Concepts
//!
//! - **Claim**: A doctrinal assertion with its evidentiary scoring bundle
//! - **Confidence Tier**: High / Mixed / Contested, derived from weighted sub-scores
//! - **Tradition**: A faith tradition carrying an epistemic-posture sentence
//! - **Source**: A citable reference, classified Primary or Secondary
//! - **Node**: A timeline event, key document, or church father
//! - **Edge**: One tradition's stance toward one claim
//! - **Interpretation**: All positions of one tradition family on one claim, summarized
//!
//! ## Architecture
//!
//! - Only `serde` derives as an external dependency
//! - Every entity is created once and never mutated afterwards
//! - Lookup tables are closed enums matched exhaustively

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod atlas;
pub mod claim;
pub mod confidence;
pub mod confidence_computation;
pub mod interpretation;
pub mod node;
pub mod relationship;
pub mod source;
pub mod tradition;

// Re-exports for convenience
pub use atlas::{Atlas, AtlasCounts};
pub use claim::{Claim, ScoringBundle, SubScores};
pub use confidence::{ConfidenceTier, PositionConfidence};
pub use interpretation::{Interpretation, InterpretationBuilder, KeyPoint, Position};
pub use node::{Node, NodeKind};
pub use relationship::{Edge, RelationType};
pub use source::{Source, SourceClass};
pub use tradition::{Tradition, TraditionFamily};

/// Delimiter separating entries in list-valued cells
pub const LIST_DELIMITER: char = ';';
