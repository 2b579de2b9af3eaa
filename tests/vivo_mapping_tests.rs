//! End-to-end mapping of saved repository records.

mod common;

use common::{map_default, record, vivo16_records};
use figvivo::vivo::{
    canonical_doi_key, classes, datatypes, map_record, merge, properties, EventContext,
    MappingConfig, RdfFormat, RdfGraph, RdfNode, WorkKeyPolicy,
};
use serde_json::json;

const WORK: &str = "http://openvivo.org/a/doi10.6084/m9.figshare.3117808";

fn status_talk() -> RdfGraph {
    map_default(&vivo16_records()[0]).graph
}

#[test]
fn test_work_description() {
    let g = status_talk();
    let work = RdfNode::uri(WORK);

    assert!(g.contains(&work, properties::TYPE, &RdfNode::uri(classes::SLIDESHOW)));
    assert_eq!(
        g.value(&work, properties::LABEL).and_then(RdfNode::literal_value),
        Some("VIVO Status -- Duraspace Summit March 16, 2016")
    );
    assert!(g.contains(
        &work,
        properties::DOI,
        &RdfNode::literal("10.6084/m9.figshare.3117808.v2")
    ));
    let keywords: Vec<_> = g
        .objects(&work, properties::FREETEXT_KEYWORD)
        .filter_map(RdfNode::literal_value)
        .collect();
    assert_eq!(keywords, vec!["vivo16", "VIVO", "Duraspace"]);
    assert!(g.value(&work, properties::ABSTRACT).is_some());
}

#[test]
fn test_dates_are_reified_with_precision() {
    let g = status_talk();
    let work = RdfNode::uri(WORK);
    let date = RdfNode::uri("http://openvivo.org/a/date2016-03-17");

    assert!(g.contains(&work, properties::PUBLISHED_DATE, &date));
    assert!(g.contains(&work, properties::CREATED_DATE, &date));
    assert_eq!(g.objects(&work, properties::MODIFIED_DATE).count(), 0);
    assert!(g.contains(
        &date,
        properties::DATE_TIME,
        &RdfNode::typed_literal("2016-03-17T00:00:00", datatypes::DATE_TIME)
    ));
    assert!(g.contains(
        &date,
        properties::DATE_TIME_PRECISION,
        &RdfNode::uri(properties::YEAR_MONTH_DAY_PRECISION)
    ));
    // Shared date entity: typed once.
    assert_eq!(g.objects(&date, properties::TYPE).count(), 1);
}

#[test]
fn test_authors_by_rank() {
    let g = status_talk();
    let krafft = RdfNode::uri("http://openvivo.org/a/person-Krafft--Dean--");
    let conlon = RdfNode::uri("http://openvivo.org/a/orcid0000-0002-1304-8447");
    let first = RdfNode::uri(format!("{WORK}-authorship1"));
    let second = RdfNode::uri(format!("{WORK}-authorship2"));

    assert!(g.contains(&first, properties::RELATES, &krafft));
    assert!(g.contains(&second, properties::RELATES, &conlon));
    assert!(g.contains(
        &second,
        properties::RANK,
        &RdfNode::typed_literal("2", datatypes::INTEGER)
    ));
    assert!(g.contains(&krafft, properties::TYPE, &RdfNode::uri(classes::VCARD_INDIVIDUAL)));
    assert!(g.contains(&conlon, properties::TYPE, &RdfNode::uri(classes::PERSON)));
    assert!(g.contains(
        &conlon,
        properties::LABEL,
        &RdfNode::literal("Conlon, Michael")
    ));
}

#[test]
fn test_categories_and_contact_card() {
    let g = status_talk();
    let work = RdfNode::uri(WORK);
    let concept = RdfNode::uri("http://openvivo.org/a/category2");
    assert!(g.contains(&work, properties::HAS_SUBJECT_AREA, &concept));
    assert!(g.contains(&concept, properties::LABEL, &RdfNode::literal("Information Systems")));

    let vcard = RdfNode::uri(format!("{WORK}-vcard"));
    assert!(g.contains(&work, properties::HAS_CONTACT_INFO, &vcard));
    let urls: Vec<_> = g.objects(&vcard, properties::HAS_URL).collect();
    assert_eq!(urls.len(), 2);
    assert!(g.contains(urls[0], properties::LABEL, &RdfNode::literal("Figshare Page")));
    assert!(g.contains(
        urls[1],
        properties::RANK,
        &RdfNode::typed_literal("2", datatypes::INTEGER)
    ));
}

#[test]
fn test_source_id_policy() {
    let config = MappingConfig::default().with_work_key(WorkKeyPolicy::SourceId);
    let records = vivo16_records();

    let fragment = map_record(&records[3], &config).expect("has an id");
    assert_eq!(fragment.work_uri, RdfNode::uri("http://openvivo.org/a/figshare4000002"));
    assert!(fragment.graph.contains(
        &fragment.work_uri,
        properties::TYPE,
        &RdfNode::uri(classes::DATASET)
    ));
    assert!(map_record(&records[3], &MappingConfig::default()).is_none());
}

#[test]
fn test_unknown_type_falls_back_to_document() {
    for code in [json!(0), json!(99), json!(null), json!("-1")] {
        let fragment = map_default(&record(json!({"doi": "10.1/x", "defined_type": code})));
        assert!(fragment.graph.contains(
            &fragment.work_uri,
            properties::TYPE,
            &RdfNode::uri(classes::DOCUMENT)
        ));
    }
}

#[test]
fn test_versions_share_one_work() {
    let records = vivo16_records();
    let (graph, stats) = merge(
        [map_default(&records[0]), map_default(&records[1])],
        Some(canonical_doi_key),
    );
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.duplicates, 1);
    // Only the first-seen version describes the shared work.
    assert_eq!(graph.objects(&RdfNode::uri(WORK), properties::LABEL).count(), 1);
    let individuals: Vec<_> = graph
        .subjects(properties::TYPE, &RdfNode::uri(classes::VCARD_INDIVIDUAL))
        .collect();
    assert_eq!(individuals.len(), 1);
}

#[test]
fn test_event_membership() {
    let config = MappingConfig::default()
        .with_event(EventContext::new("vivo2016").with_label("VIVO 2016 Conference"));
    let fragment = map_record(&vivo16_records()[0], &config).unwrap();
    let event = RdfNode::uri("http://openvivo.org/a/eventvivo2016");

    assert!(fragment.graph.contains(&fragment.work_uri, properties::PART_OF, &event));
    assert!(fragment.graph.contains(&event, properties::HAS_PART, &fragment.work_uri));
    assert!(fragment.graph.contains(
        &event,
        properties::LABEL,
        &RdfNode::literal("VIVO 2016 Conference")
    ));
}

#[test]
fn test_every_format_serializes() {
    let g = status_talk();
    for format in [
        RdfFormat::NTriples,
        RdfFormat::Turtle,
        RdfFormat::RdfXml,
        RdfFormat::JsonLd,
    ] {
        let text = g.serialize(format).unwrap();
        assert!(text.contains("3117808"), "{format} output lacks the work");
    }
}

#[test]
fn test_ntriples_roundtrip_preserves_graph() {
    let g = status_talk();
    let nt = g.serialize(RdfFormat::NTriples).unwrap();
    assert_eq!(RdfGraph::parse(&nt, RdfFormat::NTriples).unwrap(), g);
}
