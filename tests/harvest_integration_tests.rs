//! Harvest driver over an in-memory source.

mod common;

use common::{record, vivo16_source};
use figvivo::vivo::{classes, properties, MappingConfig, RdfFormat, RdfGraph, RdfNode};
use figvivo::{
    write_graph, HarvestError, HarvestOptions, Harvester, OrcidDirectory, RecordSource,
    StaticSource, WorkQuery, WorkRecord,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

const WORK: &str = "http://openvivo.org/a/doi10.6084/m9.figshare.3117808";

#[test]
fn test_tag_harvest_report() {
    let source = vivo16_source();
    let config = MappingConfig::default();
    let (graph, report) = Harvester::new(&source, &config)
        .run(&HarvestOptions::tagged("vivo16"))
        .unwrap();

    assert_eq!(report.listed, 4);
    assert_eq!(report.fetched, 4);
    assert_eq!(report.fetch_failed, 0);
    assert_eq!(report.filtered_out, 1);
    assert_eq!(report.skipped, 1);
    // The v1 deposit shares the DOI-keyed work and is dropped.
    assert_eq!(report.accepted, 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.triples, graph.len());
    assert!(graph
        .subjects(properties::TYPE, &RdfNode::uri(classes::CONFERENCE_POSTER))
        .next()
        .is_none());
}

#[test]
fn test_doi_dedup_keeps_first_version() {
    let source = vivo16_source();
    let config = MappingConfig::default();
    let (graph, report) = Harvester::new(&source, &config)
        .run(&HarvestOptions::tagged("vivo16").with_doi_dedup(true))
        .unwrap();

    assert_eq!(report.accepted, 1);
    assert_eq!(report.duplicates, 1);
    let labels: Vec<_> = graph
        .objects(&RdfNode::uri(WORK), properties::LABEL)
        .filter_map(RdfNode::literal_value)
        .collect();
    assert_eq!(labels, vec!["VIVO Status -- Duraspace Summit March 16, 2016"]);
}

#[test]
fn test_parallel_harvest_matches_sequential() {
    let source = vivo16_source();
    let config = MappingConfig::default();
    let harvester = Harvester::new(&source, &config);
    let options = HarvestOptions::institution("2");

    let (sequential, _) = harvester.run(&options).unwrap();
    let (parallel, _) = harvester.run(&options.clone().with_parallel(true)).unwrap();
    assert_eq!(
        sequential.serialize(RdfFormat::NTriples).unwrap(),
        parallel.serialize(RdfFormat::NTriples).unwrap()
    );
}

#[test]
fn test_enrichment_confirms_author() {
    let source = vivo16_source();
    let config = MappingConfig::default();
    let directory = OrcidDirectory::new().with_author_id("1001", "0000-0001-5988-4337");
    let (graph, _) = Harvester::new(&source, &config)
        .with_enricher(directory)
        .run(&HarvestOptions::article("3117808"))
        .unwrap();

    let krafft = RdfNode::uri("http://openvivo.org/a/orcid0000-0001-5988-4337");
    assert!(graph.contains(&krafft, properties::TYPE, &RdfNode::uri(classes::PERSON)));
    assert!(graph
        .subjects(properties::TYPE, &RdfNode::uri(classes::VCARD_INDIVIDUAL))
        .next()
        .is_none());
}

/// Lists two works but can only fetch one of them.
struct FlakySource;

impl RecordSource for FlakySource {
    fn list(&self, _query: &WorkQuery) -> figvivo::Result<Vec<WorkRecord>> {
        Ok(vec![record(json!({"id": 1})), record(json!({"id": 2}))])
    }

    fn fetch(&self, id: &str) -> figvivo::Result<WorkRecord> {
        match id {
            "1" => Ok(record(json!({"id": 1, "doi": "10.1/one", "title": "One"}))),
            _ => Err(HarvestError::InvalidRecord(format!("gone: {id}"))),
        }
    }
}

#[test]
fn test_fetch_failure_is_not_fatal() {
    let config = MappingConfig::default();
    let (graph, report) = Harvester::new(&FlakySource, &config)
        .run(&HarvestOptions::institution("x"))
        .unwrap();
    assert_eq!(report.fetched, 1);
    assert_eq!(report.fetch_failed, 1);
    assert_eq!(report.accepted, 1);
    assert!(!graph.is_empty());
}

#[test]
fn test_listing_failure_is_fatal() {
    let source = StaticSource::new(Vec::new());
    let config = MappingConfig::default();
    let result = Harvester::new(&source, &config).run(&HarvestOptions::article("404"));
    assert!(matches!(result, Err(HarvestError::InvalidRecord(_))));
}

#[test]
fn test_summaries_mapped_without_fetch() {
    let source = StaticSource::new(vec![record(json!({"id": 5, "doi": "10.1/five.v3"}))]);
    let config = MappingConfig::default();
    let (_, report) = Harvester::new(&source, &config)
        .run(&HarvestOptions::institution("i").with_fetch_details(false))
        .unwrap();
    assert_eq!(report.fetched, 0);
    assert_eq!(report.accepted, 1);
}

#[test]
fn test_write_graph_once() {
    let source = vivo16_source();
    let config = MappingConfig::default();
    let (graph, _) = Harvester::new(&source, &config)
        .run(&HarvestOptions::tagged("vivo16"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vivo16.nt");
    write_graph(&graph, &path, RdfFormat::NTriples).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let reread = RdfGraph::parse_from_reader(file, RdfFormat::NTriples).unwrap();
    assert_eq!(reread, graph);
}

#[test]
fn test_default_harvest_keeps_ranks_unique() {
    let source = StaticSource::new(vec![
        record(json!({
            "id": 2, "doi": "10.1/7.v2", "title": "Second",
            "authors": [{"full_name": "Jane Smith"}, {"full_name": "Bob Jones"}]
        })),
        record(json!({
            "id": 1, "doi": "10.1/7.v1", "title": "First",
            "authors": [{"full_name": "Bob Jones"}]
        })),
    ]);
    let config = MappingConfig::default();
    let (graph, report) = Harvester::new(&source, &config)
        .run(&HarvestOptions::institution("i"))
        .unwrap();
    assert_eq!(report.duplicates, 1);

    let work = RdfNode::uri("http://openvivo.org/a/doi10.1/7");
    let authorships: Vec<_> = graph.objects(&work, properties::RELATED_BY).collect();
    assert_eq!(authorships.len(), 2);
    for authorship in authorships {
        let parties: Vec<_> = graph
            .objects(authorship, properties::RELATES)
            .filter(|party| **party != work)
            .collect();
        assert_eq!(parties.len(), 1, "{authorship:?} relates {parties:?}");
        assert_eq!(graph.objects(authorship, properties::RANK).count(), 1);
    }
}

/// Counts fetches made against an inner source.
struct CountingSource {
    inner: StaticSource,
    fetches: AtomicUsize,
}

impl RecordSource for CountingSource {
    fn list(&self, query: &WorkQuery) -> figvivo::Result<Vec<WorkRecord>> {
        self.inner.list(query)
    }

    fn fetch(&self, id: &str) -> figvivo::Result<WorkRecord> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(id)
    }
}

#[test]
fn test_article_query_is_not_refetched() {
    let source = CountingSource {
        inner: vivo16_source(),
        fetches: AtomicUsize::new(0),
    };
    let config = MappingConfig::default();
    let (_, report) = Harvester::new(&source, &config)
        .run(&HarvestOptions::article("3117808"))
        .unwrap();

    // StaticSource answers an article listing without calling our fetch.
    assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    assert_eq!(report.fetched, 1);
    assert_eq!(report.accepted, 1);
}
