//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::schema;
use crate::workbook::{Table, WorkbookSource};
use std::collections::HashMap;
use traceatlas_domain::interpretation::OTHER_FAMILY;
use traceatlas_domain::{
    Atlas, Claim, Edge, Interpretation, InterpretationBuilder, Node, Position, PositionConfidence,
    ScoringBundle, Source, SubScores, Tradition,
};
use tracing::{debug, info, warn};

/// Extractor turning a workbook into the six atlas record sequences
///
/// Sheets are read in a fixed order: doctrines and scoring, traditions,
/// sources, the three node sheets, then positions. Each stage only depends
/// on the records produced before it.
///
/// # Examples
///
/// ```no_run
/// use traceatlas_extractor::{Extractor, ExtractorConfig, XlsxWorkbook};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut workbook = XlsxWorkbook::open("atlas.xlsx")?;
/// let extractor = Extractor::new(ExtractorConfig::default());
/// let atlas = extractor.extract(&mut workbook)?;
/// println!("{}", atlas.counts());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Run every extraction stage
    pub fn extract<W>(&self, workbook: &mut W) -> Result<Atlas, ExtractorError>
    where
        W: WorkbookSource + ?Sized,
    {
        self.config.validate().map_err(ExtractorError::Config)?;
        info!("Found sheets: {:?}", workbook.sheet_names());

        let claims = self.extract_claims(workbook)?;
        let traditions = self.extract_traditions(workbook)?;
        let sources = self.extract_sources(workbook)?;
        let nodes = self.extract_nodes(workbook)?;
        let (edges, interpretations) =
            self.extract_edges_and_interpretations(workbook, &claims, &traditions)?;

        Ok(Atlas {
            claims,
            traditions,
            sources,
            nodes,
            edges,
            interpretations,
        })
    }

    /// Extract claims from the doctrine catalogue joined with scoring
    pub fn extract_claims<W>(&self, workbook: &mut W) -> Result<Vec<Claim>, ExtractorError>
    where
        W: WorkbookSource + ?Sized,
    {
        let sheets = &self.config.sheets;
        info!("Extracting claims from {} + {}", sheets.doctrines, sheets.doctrine_scoring);

        let doctrines = workbook.table(&sheets.doctrines)?;
        let scoring = workbook.table(&sheets.doctrine_scoring)?;
        let scoring_lookup = scoring_lookup(&scoring)?;

        use schema::doctrines as col;
        let id = doctrines.column(col::DOCTRINE_ID)?;
        let category = doctrines.column(col::CATEGORY)?;
        let term = doctrines.column(col::TERM)?;
        let plain = doctrines.column(col::PLAIN_DEFINITION)?;
        let technical = doctrines.column(col::TECHNICAL_DEFINITION)?;
        let key_docs = doctrines.optional_column(col::KEY_DOCS);
        let source_ids = doctrines.optional_column(col::SOURCE_IDS);

        let claims: Vec<Claim> = doctrines
            .rows()
            .map(|row| {
                let doctrine_id = row.text(id);
                let bundle = match scoring_lookup.get(&doctrine_id) {
                    Some(bundle) => bundle.clone(),
                    None => {
                        debug!("No scoring row for doctrine {}", doctrine_id);
                        ScoringBundle::unscored()
                    }
                };
                Claim::new(
                    doctrine_id,
                    row.text(category),
                    row.text(term),
                    row.text(plain),
                    row.text(technical),
                    row.list(key_docs),
                    row.list(source_ids),
                    bundle,
                )
            })
            .collect();

        info!("Extracted {} claims", claims.len());
        Ok(claims)
    }

    /// Extract traditions, assigning epistemic postures
    pub fn extract_traditions<W>(&self, workbook: &mut W) -> Result<Vec<Tradition>, ExtractorError>
    where
        W: WorkbookSource + ?Sized,
    {
        info!("Extracting traditions");
        let table = workbook.table(&self.config.sheets.traditions)?;

        use schema::traditions as col;
        let id = table.column(col::TRADITION_ID)?;
        let name = table.column(col::NAME)?;
        let family = table.column(col::FAMILY)?;
        let communion = table.column(col::COMMUNION)?;
        let regions = table.column(col::PRIMARY_REGIONS)?;
        let start_year = table.column(col::START_YEAR)?;
        let notes = table.column(col::NOTES)?;
        let key_sources = table.optional_column(col::KEY_SOURCES);

        let traditions: Vec<Tradition> = table
            .rows()
            .map(|row| {
                Tradition::new(
                    row.text(id),
                    row.text(name),
                    row.text(family),
                    row.text(communion),
                    row.text(regions),
                    row.text(start_year),
                    row.text(notes),
                    row.list(key_sources),
                )
            })
            .collect();

        info!("Extracted {} traditions", traditions.len());
        Ok(traditions)
    }

    /// Extract sources with primary/secondary classification
    pub fn extract_sources<W>(&self, workbook: &mut W) -> Result<Vec<Source>, ExtractorError>
    where
        W: WorkbookSource + ?Sized,
    {
        info!("Extracting sources");
        let table = workbook.table(&self.config.sheets.sources)?;

        use schema::sources as col;
        let id = table.column(col::SOURCE_ID)?;
        let source_type = table.column(col::TYPE)?;
        let title = table.column(col::TITLE)?;
        let author = table.column(col::AUTHOR_BODY)?;
        let year = table.column(col::YEAR)?;
        let tradition = table.column(col::TRADITION)?;
        let url = table.column(col::URL)?;
        let notes = table.column(col::NOTES)?;

        let sources: Vec<Source> = table
            .rows()
            .map(|row| {
                Source::new(
                    row.text(id),
                    row.text(source_type),
                    row.text(title),
                    row.text(author),
                    row.text(year),
                    row.text(tradition),
                    row.text(url),
                    row.text(notes),
                )
            })
            .collect();

        info!("Extracted {} sources", sources.len());
        Ok(sources)
    }

    /// Extract nodes: timeline events, then key documents, then church fathers
    pub fn extract_nodes<W>(&self, workbook: &mut W) -> Result<Vec<Node>, ExtractorError>
    where
        W: WorkbookSource + ?Sized,
    {
        let sheets = &self.config.sheets;
        info!(
            "Extracting nodes from {} + {} + {}",
            sheets.timeline_events, sheets.key_documents, sheets.church_fathers
        );

        let mut nodes = Vec::new();

        let events = workbook.table(&sheets.timeline_events)?;
        {
            use schema::events as col;
            let id = events.column(col::EVENT_ID)?;
            let event_type = events.column(col::TYPE)?;
            let title = events.column(col::EVENT)?;
            let year = events.column(col::YEAR)?;
            let region = events.column(col::REGION)?;
            let why = events.column(col::WHY_IT_MATTERS)?;
            let figures = events.column(col::KEY_FIGURES)?;
            let source_ids = events.optional_column(col::SOURCE_IDS);

            nodes.extend(events.rows().map(|row| {
                Node::event(
                    &row.text(id),
                    &row.text(event_type),
                    row.text(title),
                    row.text(year),
                    row.text(region),
                    row.text(why),
                    row.text(figures),
                    row.list(source_ids),
                )
            }));
        }

        let documents = workbook.table(&sheets.key_documents)?;
        {
            use schema::documents as col;
            let id = documents.column(col::DOC_ID)?;
            let doc_type = documents.column(col::TYPE)?;
            let name = documents.column(col::NAME)?;
            let year = documents.column(col::YEAR)?;
            let topics = documents.column(col::KEY_TOPICS)?;
            let tradition = documents.column(col::TRADITION)?;
            let source_ids = documents.optional_column(col::SOURCE_IDS);

            nodes.extend(documents.rows().map(|row| {
                Node::document(
                    &row.text(id),
                    &row.text(doc_type),
                    row.text(name),
                    row.text(year),
                    &row.text(topics),
                    row.text(tradition),
                    row.list(source_ids),
                )
            }));
        }

        let fathers = workbook.table(&sheets.church_fathers)?;
        {
            use schema::fathers as col;
            let father = fathers.column(col::FATHER)?;
            let dates = fathers.column(col::DATES)?;
            let region = fathers.column(col::REGION)?;
            let why = fathers.column(col::WHY_READ)?;
            let works = fathers.column(col::KEY_WORKS)?;
            let language = fathers.column(col::LANGUAGE)?;
            let link = fathers.optional_column(col::LINK);

            nodes.extend(fathers.rows().map(|row| {
                Node::person(
                    row.text(father),
                    row.text(dates),
                    row.text(region),
                    &row.text(why),
                    &row.text(works),
                    row.text(language),
                    row.text(link),
                )
            }));
        }

        info!("Extracted {} nodes", nodes.len());
        Ok(nodes)
    }

    /// Extract edges from position rows and aggregate them into interpretations
    ///
    /// Rows with a blank doctrine or tradition ID are dropped. Non-blank IDs
    /// that do not resolve are kept; the tradition name falls back to the raw
    /// ID and the family to `Other`.
    pub fn extract_edges_and_interpretations<W>(
        &self,
        workbook: &mut W,
        claims: &[Claim],
        traditions: &[Tradition],
    ) -> Result<(Vec<Edge>, Vec<Interpretation>), ExtractorError>
    where
        W: WorkbookSource + ?Sized,
    {
        info!("Extracting edges from {}", self.config.sheets.positions);
        let table = workbook.table(&self.config.sheets.positions)?;

        use schema::positions as col;
        let doctrine_col = table.column(col::DOCTRINE_ID)?;
        let tradition_col = table.column(col::TRADITION_ID)?;
        let confidence_col = table.column(col::CONFIDENCE)?;
        let stance_col = table.column(col::STANCE)?;
        let summary_col = table.column(col::SUMMARY)?;
        let key_sources_col = table.optional_column(col::KEY_SOURCES);

        let claim_ids: HashMap<&str, &Claim> = claims.iter().map(|c| (c.id.as_str(), c)).collect();
        let tradition_lookup: HashMap<&str, &Tradition> =
            traditions.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut edges = Vec::new();
        let mut builder = InterpretationBuilder::new();
        let mut dropped = 0usize;

        for row in table.rows() {
            let doctrine_id = row.text(doctrine_col);
            let tradition_id = row.text(tradition_col);

            if doctrine_id.is_empty() || tradition_id.is_empty() {
                dropped += 1;
                continue;
            }

            if !claim_ids.contains_key(doctrine_id.as_str()) {
                warn!("Position references unknown doctrine {}", doctrine_id);
            }

            let confidence = PositionConfidence::classify(&row.text(confidence_col));
            let stance = row.text(stance_col);
            let summary = row.text(summary_col);
            let key_sources = row.list(key_sources_col);

            let (family, tradition_name) = match tradition_lookup.get(tradition_id.as_str()) {
                Some(t) => (t.family.clone(), t.name.clone()),
                None => {
                    warn!("Position references unknown tradition {}", tradition_id);
                    (OTHER_FAMILY.to_string(), tradition_id.clone())
                }
            };

            builder.push(
                &doctrine_id,
                &family,
                Position {
                    tradition_id: tradition_id.clone(),
                    tradition_name,
                    stance: stance.clone(),
                    summary: summary.clone(),
                    confidence,
                    key_sources: key_sources.clone(),
                },
            );

            edges.push(Edge::new(
                edges.len() + 1,
                doctrine_id,
                tradition_id,
                stance,
                summary,
                confidence,
                key_sources,
            ));
        }

        if dropped > 0 {
            debug!("Dropped {} position rows with a blank doctrine or tradition ID", dropped);
        }
        info!("Extracted {} edges", edges.len());

        info!("Generating interpretations from positions");
        debug!("Collected {} (claim, family) groups", builder.group_count());
        let interpretations = builder.finish();
        info!("Generated {} interpretations", interpretations.len());

        Ok((edges, interpretations))
    }
}

/// Index scoring rows by doctrine ID; a later row for the same ID wins
fn scoring_lookup(table: &Table) -> Result<HashMap<String, ScoringBundle>, ExtractorError> {
    use schema::scoring as col;
    let id = table.column(col::DOCTRINE_ID)?;
    let scripture = table.column(col::SCRIPTURE_SCORE)?;
    let scripture_class = table.column(col::SCRIPTURE_CLASS)?;
    let patristic = table.column(col::PATRISTIC_BREADTH)?;
    let council = table.column(col::COUNCIL_SCORE)?;
    let consensus = table.column(col::CONSENSUS_SCORE)?;
    let tier = table.column(col::TIER)?;
    let confidence = table.column(col::CONFIDENCE)?;

    Ok(table
        .rows()
        .map(|row| {
            let scores = SubScores {
                scripture: row.score(scripture),
                patristic_breadth: row.score(patristic),
                council: row.score(council),
                consensus: row.score(consensus),
            };
            let bundle = ScoringBundle::new(
                scores,
                row.text(scripture_class),
                row.text(tier),
                row.text(confidence),
            );
            (row.text(id), bundle)
        })
        .collect())
}
