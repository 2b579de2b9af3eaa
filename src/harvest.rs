//! Harvest driver: fetch, filter, map, merge.
//!
//! [`Harvester`] sequences one harvest over a [`RecordSource`]:
//!
//! 1. list candidate works for a [`WorkQuery`]
//! 2. fetch each work's full record (listings carry summaries only)
//! 3. drop records failing the tag filter
//! 4. fill in missing researcher identifiers via an [`AuthorEnricher`]
//! 5. map each record to a fragment, optionally on the rayon pool
//! 6. merge fragments in input order, optionally deduplicating by DOI
//!
//! A single article that fails to fetch is logged and counted, not fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{HarvestError, Result};
use crate::record::{non_empty, AuthorEntry, WorkRecord};
use crate::vivo::{
    canonical_doi_key, map_record, Fragment, GraphAssembler, MappingConfig, RdfFormat, RdfGraph,
    WorkKeyPolicy,
};

/// What to harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkQuery {
    /// All works of an institution.
    Institution(String),
    /// Works matching a free-text search term.
    Search(String),
    /// One work by source id.
    Article(String),
}

/// A repository that can list and fetch work records.
pub trait RecordSource {
    /// Lists works matching a query. Entries may be summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be retrieved.
    fn list(&self, query: &WorkQuery) -> Result<Vec<WorkRecord>>;

    /// Fetches the full record of one work.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be retrieved or decoded.
    fn fetch(&self, id: &str) -> Result<WorkRecord>;
}

/// An in-memory [`RecordSource`], for tests and offline re-mapping of saved
/// API responses.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<WorkRecord>,
}

impl StaticSource {
    /// Creates a source over the given full records.
    #[must_use]
    pub fn new(records: Vec<WorkRecord>) -> Self {
        Self { records }
    }

    /// Loads records from a JSON array (as saved from the API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(serde_json::from_str(&text)?))
    }
}

impl RecordSource for StaticSource {
    fn list(&self, query: &WorkQuery) -> Result<Vec<WorkRecord>> {
        Ok(match query {
            WorkQuery::Institution(_) => self.records.clone(),
            // Search is fuzzy upstream; mimic it with substring matching.
            WorkQuery::Search(term) => self
                .records
                .iter()
                .filter(|r| r.tags.iter().any(|t| t.contains(term.as_str())))
                .cloned()
                .collect(),
            WorkQuery::Article(id) => vec![self.fetch(id)?],
        })
    }

    fn fetch(&self, id: &str) -> Result<WorkRecord> {
        self.records
            .iter()
            .find(|r| r.source_id() == Some(id))
            .cloned()
            .ok_or_else(|| HarvestError::InvalidRecord(format!("no record with id {id}")))
    }
}

/// Supplies researcher identifiers for authors whose record lacks one.
///
/// Enrichment is optional: `None` is the ordinary "nothing known" answer,
/// and the author then resolves to a synthesized identity.
pub trait AuthorEnricher: Send + Sync {
    /// Looks up an ORCID for an author entry.
    fn orcid_for(&self, author: &AuthorEntry) -> Option<String>;
}

/// The enricher that never knows anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnrichment;

impl AuthorEnricher for NoEnrichment {
    fn orcid_for(&self, _author: &AuthorEntry) -> Option<String> {
        None
    }
}

/// An in-memory directory of known ORCIDs, keyed by source author id or
/// by exact full name.
#[derive(Debug, Clone, Default)]
pub struct OrcidDirectory {
    by_author_id: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl OrcidDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an ORCID for a source author id.
    #[must_use]
    pub fn with_author_id(
        mut self,
        author_id: impl Into<String>,
        orcid: impl Into<String>,
    ) -> Self {
        self.by_author_id.insert(author_id.into(), orcid.into());
        self
    }

    /// Registers an ORCID for a full name.
    #[must_use]
    pub fn with_name(mut self, full_name: impl Into<String>, orcid: impl Into<String>) -> Self {
        self.by_name.insert(full_name.into(), orcid.into());
        self
    }
}

impl AuthorEnricher for OrcidDirectory {
    fn orcid_for(&self, author: &AuthorEntry) -> Option<String> {
        non_empty(&author.id)
            .and_then(|id| self.by_author_id.get(id))
            .or_else(|| self.by_name.get(author.full_name.trim()))
            .cloned()
    }
}

/// Returns a copy of `record` with missing ORCIDs filled in by `enricher`.
#[must_use]
pub fn enrich_record(record: &WorkRecord, enricher: &dyn AuthorEnricher) -> WorkRecord {
    let mut enriched = record.clone();
    for author in &mut enriched.authors {
        if non_empty(&author.orcid_id).is_none() {
            if let Some(orcid) = enricher.orcid_for(author) {
                debug!(author = %author.full_name, %orcid, "author enriched");
                author.orcid_id = Some(orcid);
            }
        }
    }
    enriched
}

/// Maps records to fragments, preserving input order.
///
/// With `parallel`, records are mapped on the rayon pool; the result is
/// identical to the sequential path.
#[must_use]
pub fn map_records(
    records: &[WorkRecord],
    config: &MappingConfig,
    parallel: bool,
) -> Vec<Option<Fragment>> {
    if parallel {
        records
            .par_iter()
            .map(|record| map_record(record, config))
            .collect()
    } else {
        records.iter().map(|record| map_record(record, config)).collect()
    }
}

/// Options for one harvest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestOptions {
    /// What to list.
    pub query: WorkQuery,
    /// Keep only records carrying exactly this tag.
    pub required_tag: Option<String>,
    /// Fetch the full record of every listed work.
    pub fetch_details: bool,
    /// Drop later works whose version-free DOI was already merged. Always
    /// applied when works are keyed by DOI, since versions then share one
    /// work URI.
    pub dedupe_by_doi: bool,
    /// Map records on the rayon pool.
    pub parallel: bool,
}

impl HarvestOptions {
    /// Harvests all works of an institution.
    #[must_use]
    pub fn institution(id: impl Into<String>) -> Self {
        Self::for_query(WorkQuery::Institution(id.into()))
    }

    /// Harvests works carrying `tag`. Search results are post-filtered to
    /// exact tag matches.
    #[must_use]
    pub fn tagged(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            required_tag: Some(tag.clone()),
            ..Self::for_query(WorkQuery::Search(tag))
        }
    }

    /// Harvests a single work.
    #[must_use]
    pub fn article(id: impl Into<String>) -> Self {
        Self::for_query(WorkQuery::Article(id.into()))
    }

    fn for_query(query: WorkQuery) -> Self {
        Self {
            query,
            required_tag: None,
            fetch_details: true,
            dedupe_by_doi: false,
            parallel: false,
        }
    }

    /// Sets DOI deduplication.
    #[must_use]
    pub const fn with_doi_dedup(mut self, enabled: bool) -> Self {
        self.dedupe_by_doi = enabled;
        self
    }

    /// Sets parallel mapping.
    #[must_use]
    pub const fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets whether listed works are re-fetched in full.
    #[must_use]
    pub const fn with_fetch_details(mut self, enabled: bool) -> Self {
        self.fetch_details = enabled;
        self
    }
}

/// What happened during a harvest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestReport {
    /// Works returned by the listing.
    pub listed: usize,
    /// Full records fetched.
    pub fetched: usize,
    /// Works whose fetch failed.
    pub fetch_failed: usize,
    /// Records dropped by the tag filter.
    pub filtered_out: usize,
    /// Records with no stable key, not mapped.
    pub skipped: usize,
    /// Fragments merged.
    pub accepted: usize,
    /// Fragments dropped as duplicates.
    pub duplicates: usize,
    /// Statements in the final graph.
    pub triples: usize,
}

/// Runs harvests against one source with one mapping configuration.
pub struct Harvester<'a, S: RecordSource> {
    source: &'a S,
    config: &'a MappingConfig,
    enricher: Box<dyn AuthorEnricher + 'a>,
}

impl<S: RecordSource> std::fmt::Debug for Harvester<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harvester")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, S: RecordSource> Harvester<'a, S> {
    /// Creates a harvester with no author enrichment.
    #[must_use]
    pub fn new(source: &'a S, config: &'a MappingConfig) -> Self {
        Self {
            source,
            config,
            enricher: Box::new(NoEnrichment),
        }
    }

    /// Installs an author enricher.
    #[must_use]
    pub fn with_enricher(mut self, enricher: impl AuthorEnricher + 'a) -> Self {
        self.enricher = Box::new(enricher);
        self
    }

    /// Runs one harvest and returns the merged graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if the initial listing fails.
    pub fn run(&self, options: &HarvestOptions) -> Result<(RdfGraph, HarvestReport)> {
        let mut report = HarvestReport::default();

        let listed = self.source.list(&options.query)?;
        report.listed = listed.len();
        info!(query = ?options.query, works = report.listed, "listing retrieved");

        let records = self.collect_records(listed, options, &mut report);
        let fragments = map_records(&records, self.config, options.parallel);

        // Two versions merged into one DOI-keyed work would give it two
        // authors at each rank.
        let dedupe = options.dedupe_by_doi || self.config.work_key == WorkKeyPolicy::NormalizedDoi;
        let mut assembler = if dedupe {
            GraphAssembler::with_key(canonical_doi_key)
        } else {
            GraphAssembler::new()
        };
        for fragment in fragments {
            match fragment {
                Some(fragment) => {
                    assembler.offer(fragment);
                },
                None => report.skipped += 1,
            }
        }

        let (graph, stats) = assembler.finish();
        report.accepted = stats.accepted;
        report.duplicates = stats.duplicates;
        report.triples = graph.len();
        info!(
            accepted = report.accepted,
            skipped = report.skipped,
            duplicates = report.duplicates,
            fetch_failed = report.fetch_failed,
            triples = report.triples,
            "harvest complete"
        );
        Ok((graph, report))
    }

    /// Fetches, filters and enriches the listed works.
    fn collect_records(
        &self,
        listed: Vec<WorkRecord>,
        options: &HarvestOptions,
        report: &mut HarvestReport,
    ) -> Vec<WorkRecord> {
        // An article listing already is the full record.
        let listing_is_full = matches!(options.query, WorkQuery::Article(_));
        if listing_is_full {
            report.fetched = listed.len();
        }
        let refetch = options.fetch_details && !listing_is_full;

        let mut records = Vec::with_capacity(listed.len());
        for (index, summary) in listed.into_iter().enumerate() {
            if (index + 1) % 10 == 0 {
                info!(processed = index + 1, "harvest progress");
            }

            let record = match summary.source_id().filter(|_| refetch) {
                Some(id) => match self.source.fetch(id) {
                    Ok(record) => {
                        report.fetched += 1;
                        record
                    },
                    Err(e) => {
                        warn!(id, error = %e, "fetch failed, work skipped");
                        report.fetch_failed += 1;
                        continue;
                    },
                },
                // Nothing to fetch by, or fetching disabled: use the summary.
                None => summary,
            };

            if let Some(tag) = &options.required_tag {
                if !record.has_tag(tag) {
                    debug!(id = record.source_id().unwrap_or("-"), tag, "tag filter");
                    report.filtered_out += 1;
                    continue;
                }
            }

            records.push(enrich_record(&record, self.enricher.as_ref()));
        }
        records
    }
}

/// Writes a graph to `path` in `format`, once.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_graph(graph: &RdfGraph, path: impl AsRef<Path>, format: RdfFormat) -> Result<()> {
    let file = File::create(path.as_ref())?;
    graph.serialize_to_writer(BufWriter::new(file), format)?;
    info!(path = %path.as_ref().display(), %format, triples = graph.len(), "graph written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> WorkRecord {
        WorkRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_orcid_directory_lookup_order() {
        let directory = OrcidDirectory::new()
            .with_author_id("42", "0000-0001")
            .with_name("Jane Smith", "0000-0002");

        let by_id = AuthorEntry {
            id: Some("42".into()),
            full_name: "Jane Smith".into(),
            ..AuthorEntry::default()
        };
        assert_eq!(directory.orcid_for(&by_id).as_deref(), Some("0000-0001"));

        let by_name = AuthorEntry {
            full_name: " Jane Smith ".into(),
            ..AuthorEntry::default()
        };
        assert_eq!(directory.orcid_for(&by_name).as_deref(), Some("0000-0002"));

        assert_eq!(directory.orcid_for(&AuthorEntry::default()), None);
    }

    #[test]
    fn test_enrichment_keeps_existing_orcid() {
        let original = record(json!({"authors": [
            {"full_name": "Jane Smith", "orcid_id": "0000-0009"},
            {"full_name": "John Doe"}
        ]}));
        let directory = OrcidDirectory::new()
            .with_name("Jane Smith", "0000-0002")
            .with_name("John Doe", "0000-0003");

        let enriched = enrich_record(&original, &directory);
        assert_eq!(enriched.authors[0].orcid_id.as_deref(), Some("0000-0009"));
        assert_eq!(enriched.authors[1].orcid_id.as_deref(), Some("0000-0003"));
        assert_eq!(enrich_record(&original, &NoEnrichment), original);
    }

    #[test]
    fn test_parallel_mapping_matches_sequential() {
        let records: Vec<_> = (0..40)
            .map(|i| record(json!({"id": i, "doi": format!("10.1/{i}"), "tags": ["t"]})))
            .chain(std::iter::once(record(json!({"id": 99}))))
            .collect();
        let config = MappingConfig::default();
        assert_eq!(
            map_records(&records, &config, true),
            map_records(&records, &config, false)
        );
    }

    #[test]
    fn test_static_source_fetch_missing_is_error() {
        let source = StaticSource::new(vec![record(json!({"id": 1}))]);
        assert!(source.fetch("1").is_ok());
        assert!(matches!(source.fetch("2"), Err(HarvestError::InvalidRecord(_))));
    }
}
