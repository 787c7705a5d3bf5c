//! Citable sources

use serde::Serialize;

/// Whether a source is a primary or secondary witness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceClass {
    /// Creeds, councils, confessions and scripture
    Primary,
    /// Everything else
    Secondary,
}

impl SourceClass {
    /// Source types counted as primary
    pub const PRIMARY_TYPES: [&'static str; 4] = ["Creed", "Council", "Confession", "Scripture"];

    /// Classify a source by its exact type label
    pub fn classify(source_type: &str) -> Self {
        if Self::PRIMARY_TYPES.iter().any(|t| *t == source_type) {
            SourceClass::Primary
        } else {
            SourceClass::Secondary
        }
    }
}

/// Format `"{title}. {author}. {year}."`, keeping empty segments
pub fn chicago_citation(title: &str, author: &str, year: &str) -> String {
    format!("{}. {}. {}.", title, author, year)
}

/// A citable reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    /// Source identifier (unique)
    pub id: String,
    /// Source type (Creed, Council, Monograph, ...)
    #[serde(rename = "type")]
    pub source_type: String,
    /// Title
    pub title: String,
    /// Author or issuing body
    pub author: String,
    /// Year as written in the workbook
    pub year: String,
    /// Associated tradition
    pub tradition: String,
    /// URL
    pub url: String,
    /// Notes
    pub notes: String,
    /// Primary/secondary classification
    pub primary_or_secondary: SourceClass,
    /// Synthesized citation string
    pub citation_chicago: String,
}

impl Source {
    /// Create a source, classifying it and synthesizing its citation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        source_type: String,
        title: String,
        author: String,
        year: String,
        tradition: String,
        url: String,
        notes: String,
    ) -> Self {
        let primary_or_secondary = SourceClass::classify(&source_type);
        let citation_chicago = chicago_citation(&title, &author, &year);
        Self {
            id,
            source_type,
            title,
            author,
            year,
            tradition,
            url,
            notes,
            primary_or_secondary,
            citation_chicago,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_types() {
        for t in SourceClass::PRIMARY_TYPES {
            assert_eq!(SourceClass::classify(t), SourceClass::Primary);
        }
        assert_eq!(SourceClass::classify("Monograph"), SourceClass::Secondary);
        assert_eq!(SourceClass::classify("creed"), SourceClass::Secondary);
        assert_eq!(SourceClass::classify(""), SourceClass::Secondary);
    }

    #[test]
    fn test_citation_keeps_empty_segments() {
        assert_eq!(chicago_citation("Title", "", "1950"), "Title. . 1950.");
        assert_eq!(chicago_citation("", "", ""), ". . .");
    }

    #[test]
    fn test_source_json_shape() {
        let source = Source::new(
            "S001".into(),
            "Creed".into(),
            "Nicene Creed".into(),
            "Council of Nicaea".into(),
            "325".into(),
            "Ecumenical".into(),
            "".into(),
            "".into(),
        );
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["type"], "Creed");
        assert_eq!(value["primary_or_secondary"], "Primary");
        assert_eq!(value["citation_chicago"], "Nicene Creed. Council of Nicaea. 325.");
    }
}
