//! Nodes - timeline events, key documents and church fathers

use serde::Serialize;

/// What a node represents; determines its ID prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Row from the timeline events sheet
    Event,
    /// Row from the key documents sheet
    Document,
    /// Row from the church fathers index
    Person,
}

impl NodeKind {
    /// ID prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            NodeKind::Event => "EV_",
            NodeKind::Document => "DOC_",
            NodeKind::Person => "FATHER_",
        }
    }

    /// `type` used when the row leaves it blank
    pub fn default_type(&self) -> &'static str {
        match self {
            NodeKind::Event => "Event",
            NodeKind::Document => "Text",
            NodeKind::Person => "Person",
        }
    }

    /// Build a node ID from a raw key
    ///
    /// Person keys are the father's name, upper-cased with spaces turned
    /// into underscores and periods removed.
    pub fn node_id(&self, raw: &str) -> String {
        match self {
            NodeKind::Person => {
                let slug = raw.to_uppercase().replace(' ', "_").replace('.', "");
                format!("{}{}", self.prefix(), slug)
            }
            _ => format!("{}{}", self.prefix(), raw),
        }
    }

    /// Resolve a node type, falling back to this kind's default
    pub fn resolve_type(&self, raw: &str) -> String {
        if raw.is_empty() {
            self.default_type().to_string()
        } else {
            raw.to_string()
        }
    }
}

/// A timeline event, key document, or historical person
///
/// Exactly one of `key_figures`, `tradition`, `language` is set, matching the
/// node's kind; the others are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Prefixed node identifier
    pub id: String,

    /// Node type
    #[serde(rename = "type")]
    pub node_type: String,

    /// Title
    pub title: String,

    /// Date or date range as written in the workbook
    pub date_range: String,

    /// Region (empty for documents)
    pub region: String,

    /// Summary sentence
    pub summary: String,

    /// Key figures (events only)
    #[serde(rename = "keyFigures", skip_serializing_if = "Option::is_none")]
    pub key_figures: Option<String>,

    /// Issuing tradition (documents only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradition: Option<String>,

    /// Language (persons only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Linked citations
    pub citations: Vec<String>,
}

impl Node {
    /// Create an event node
    #[allow(clippy::too_many_arguments)]
    pub fn event(
        event_id: &str,
        event_type: &str,
        title: String,
        year: String,
        region: String,
        why_it_matters: String,
        key_figures: String,
        citations: Vec<String>,
    ) -> Self {
        let kind = NodeKind::Event;
        Self {
            id: kind.node_id(event_id),
            node_type: kind.resolve_type(event_type),
            title,
            date_range: year,
            region,
            summary: why_it_matters,
            key_figures: Some(key_figures),
            tradition: None,
            language: None,
            citations,
        }
    }

    /// Create a key-document node
    pub fn document(
        doc_id: &str,
        doc_type: &str,
        name: String,
        year: String,
        key_topics: &str,
        tradition: String,
        citations: Vec<String>,
    ) -> Self {
        let kind = NodeKind::Document;
        Self {
            id: kind.node_id(doc_id),
            node_type: kind.resolve_type(doc_type),
            title: name,
            date_range: year,
            region: String::new(),
            summary: format!("Key topics: {}", key_topics),
            key_figures: None,
            tradition: Some(tradition),
            language: None,
            citations,
        }
    }

    /// Create a church-father node
    ///
    /// The link, when non-empty, becomes the only citation.
    pub fn person(
        father: String,
        dates: String,
        region: String,
        why_read: &str,
        key_works: &str,
        language: String,
        link: String,
    ) -> Self {
        let kind = NodeKind::Person;
        let citations = if link.is_empty() { Vec::new() } else { vec![link] };
        Self {
            id: kind.node_id(&father),
            node_type: kind.default_type().to_string(),
            title: father,
            date_range: dates,
            region,
            summary: format!("{} Key works: {}", why_read, key_works),
            key_figures: None,
            tradition: None,
            language: Some(language),
            citations,
        }
    }
}
