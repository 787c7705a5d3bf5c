//! Header names for every sheet the extractor reads.
//!
//! Columns are located by header text, never by position, so these names are
//! the whole of the input contract. Which columns are optional is decided by
//! the extractor that reads them.

#![allow(missing_docs)]

/// `Doctrines` sheet
pub mod doctrines {
    pub const DOCTRINE_ID: &str = "DoctrineID";
    pub const CATEGORY: &str = "Category";
    pub const TERM: &str = "Term";
    pub const PLAIN_DEFINITION: &str = "PlainDefinition";
    pub const TECHNICAL_DEFINITION: &str = "TechnicalDefinition";
    pub const KEY_DOCS: &str = "KeyDocs";
    pub const SOURCE_IDS: &str = "SourceIDs";
}

/// `Doctrine_Scoring` sheet
pub mod scoring {
    pub const DOCTRINE_ID: &str = "DoctrineID";
    pub const SCRIPTURE_SCORE: &str = "ScriptureScore";
    pub const SCRIPTURE_CLASS: &str = "ScriptureClass";
    pub const PATRISTIC_BREADTH: &str = "PatristicBreadth";
    pub const COUNCIL_SCORE: &str = "CouncilScore";
    pub const CONSENSUS_SCORE: &str = "ConsensusScore";
    pub const TIER: &str = "Tier";
    pub const CONFIDENCE: &str = "Confidence";
}

/// `Traditions` sheet
pub mod traditions {
    pub const TRADITION_ID: &str = "TraditionID";
    pub const NAME: &str = "Name";
    pub const FAMILY: &str = "Family";
    pub const COMMUNION: &str = "Communion";
    pub const PRIMARY_REGIONS: &str = "PrimaryRegions";
    pub const START_YEAR: &str = "StartYear";
    pub const NOTES: &str = "Notes";
    pub const KEY_SOURCES: &str = "KeySources";
}

/// `Sources` sheet
pub mod sources {
    pub const SOURCE_ID: &str = "SourceID";
    pub const TYPE: &str = "Type";
    pub const TITLE: &str = "Title";
    pub const AUTHOR_BODY: &str = "AuthorBody";
    pub const YEAR: &str = "Year";
    pub const TRADITION: &str = "Tradition";
    pub const URL: &str = "URL";
    pub const NOTES: &str = "Notes";
}

/// `Timeline_Events` sheet
pub mod events {
    pub const EVENT_ID: &str = "EventID";
    pub const TYPE: &str = "Type";
    pub const EVENT: &str = "Event";
    pub const YEAR: &str = "Year";
    pub const REGION: &str = "Region";
    pub const WHY_IT_MATTERS: &str = "WhyItMatters";
    pub const KEY_FIGURES: &str = "KeyFigures";
    pub const SOURCE_IDS: &str = "SourceIDs";
}

/// `Key_Documents` sheet
pub mod documents {
    pub const DOC_ID: &str = "DocID";
    pub const TYPE: &str = "Type";
    pub const NAME: &str = "Name";
    pub const YEAR: &str = "Year";
    pub const KEY_TOPICS: &str = "KeyTopics";
    pub const TRADITION: &str = "Tradition";
    pub const SOURCE_IDS: &str = "SourceIDs";
}

/// `Church_Fathers_Index` sheet
pub mod fathers {
    pub const FATHER: &str = "Father";
    pub const DATES: &str = "Dates";
    pub const REGION: &str = "Region";
    pub const WHY_READ: &str = "WhyRead";
    pub const KEY_WORKS: &str = "KeyWorks";
    pub const LANGUAGE: &str = "Language";
    pub const LINK: &str = "Link";
}

/// `Positions_Long` sheet
pub mod positions {
    pub const DOCTRINE_ID: &str = "DoctrineID";
    pub const TRADITION_ID: &str = "TraditionID";
    pub const CONFIDENCE: &str = "Confidence";
    pub const STANCE: &str = "Stance";
    pub const SUMMARY: &str = "Summary";
    pub const KEY_SOURCES: &str = "KeySources";
}
