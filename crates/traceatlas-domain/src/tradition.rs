//! Traditions and their epistemic postures

use serde::Serialize;

/// Posture assigned when neither the family nor the name is recognised
pub const GENERIC_POSTURE: &str =
    "Holds to historic Christian orthodoxy within its distinctive tradition.";

/// The nine tradition families with a known epistemic posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraditionFamily {
    /// Roman Catholic
    Catholic,
    /// Eastern Orthodox
    Orthodox,
    /// Protestant (general)
    Protestant,
    /// Oriental Orthodox
    Oriental,
    /// Reformed / Presbyterian
    Reformed,
    /// Lutheran
    Lutheran,
    /// Anglican
    Anglican,
    /// Baptist
    Baptist,
    /// Pentecostal
    Pentecostal,
}

/// Name substrings scanned when the family label is unknown, in priority order
const NAME_KEYWORDS: [(&str, TraditionFamily); 6] = [
    ("Reformed", TraditionFamily::Reformed),
    ("Presbyterian", TraditionFamily::Reformed),
    ("Lutheran", TraditionFamily::Lutheran),
    ("Baptist", TraditionFamily::Baptist),
    ("Anglican", TraditionFamily::Anglican),
    ("Pentecostal", TraditionFamily::Pentecostal),
];

impl TraditionFamily {
    /// Match a family label exactly (case-sensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Catholic" => Some(TraditionFamily::Catholic),
            "Orthodox" => Some(TraditionFamily::Orthodox),
            "Protestant" => Some(TraditionFamily::Protestant),
            "Oriental" => Some(TraditionFamily::Oriental),
            "Reformed" => Some(TraditionFamily::Reformed),
            "Lutheran" => Some(TraditionFamily::Lutheran),
            "Anglican" => Some(TraditionFamily::Anglican),
            "Baptist" => Some(TraditionFamily::Baptist),
            "Pentecostal" => Some(TraditionFamily::Pentecostal),
            _ => None,
        }
    }

    /// Find the first family whose keyword occurs in a tradition's display name
    pub fn from_name(name: &str) -> Option<Self> {
        NAME_KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, family)| *family)
    }

    /// One-sentence description of how this family weighs its authorities
    pub fn posture(&self) -> &'static str {
        match self {
            TraditionFamily::Catholic => {
                "Scripture + Tradition + Magisterium; development of doctrine under papal authority."
            }
            TraditionFamily::Orthodox => {
                "Scripture + Tradition + Councils; emphasizes theosis, mystery, and patristic continuity."
            }
            TraditionFamily::Protestant => {
                "Scripture as primary authority; tradition valued but subordinate to biblical witness."
            }
            TraditionFamily::Oriental => {
                "Ancient christological formulations; non-Chalcedonian tradition with patristic roots."
            }
            TraditionFamily::Reformed => {
                "Scripture alone; covenant theology and divine sovereignty in salvation."
            }
            TraditionFamily::Lutheran => {
                "Scripture + confessions; justification by grace through faith and the means of grace."
            }
            TraditionFamily::Anglican => {
                "Scripture, tradition, reason; via media between Catholic and Protestant."
            }
            TraditionFamily::Baptist => {
                "Scripture alone; believer's profession and memorial understanding of sacraments."
            }
            TraditionFamily::Pentecostal => {
                "Scripture + Spirit; emphasis on gifts, experience, and charismatic renewal."
            }
        }
    }
}

/// Assign an epistemic posture from a family label and display name
///
/// The exact family label wins; otherwise the name is scanned for family
/// keywords; otherwise [`GENERIC_POSTURE`].
pub fn epistemic_posture(family: &str, name: &str) -> &'static str {
    TraditionFamily::from_label(family)
        .or_else(|| TraditionFamily::from_name(name))
        .map(|f| f.posture())
        .unwrap_or(GENERIC_POSTURE)
}

/// A faith tradition or denomination
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tradition {
    /// Tradition identifier (unique)
    pub id: String,
    /// Display name
    pub name: String,
    /// Family label (free text, not restricted to [`TraditionFamily`])
    pub family: String,
    /// Communion
    pub communion: String,
    /// Primary regions
    pub primary_regions: String,
    /// Start year as written in the workbook
    pub start_year: String,
    /// Notes
    pub notes: String,
    /// Key source IDs
    pub key_sources: Vec<String>,
    /// Assigned epistemic posture
    pub epistemic_posture: String,
}

impl Tradition {
    /// Create a tradition, assigning its epistemic posture
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        family: String,
        communion: String,
        primary_regions: String,
        start_year: String,
        notes: String,
        key_sources: Vec<String>,
    ) -> Self {
        let epistemic_posture = epistemic_posture(&family, &name).to_string();
        Self {
            id,
            name,
            family,
            communion,
            primary_regions,
            start_year,
            notes,
            key_sources,
            epistemic_posture,
        }
    }
}
