//! Work record to VIVO graph mapping.
//!
//! [`map_record`] turns one [`WorkRecord`] into one self-contained
//! [`Fragment`]. It reads nothing but the record and the configuration and
//! writes nothing but the fragment it returns, so any number of records can
//! be mapped concurrently and the same record always maps to the same triples.

use tracing::{debug, trace};

use crate::record::{non_empty, WorkRecord};

use super::authors::add_authors;
use super::config::{EventContext, MappingConfig, WorkKeyPolicy};
use super::namespaces::{classes, datatypes, properties};
use super::normalize::{date_prefix, normalize_persistent_id, sanitize_key, sanitize_path_key};
use super::rdf::{RdfGraph, RdfNode};
use super::uri::{derived, EntityKind, Namespaces};

/// The statements produced by mapping one work record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// URI of the mapped work.
    pub work_uri: RdfNode,
    /// The record's source id, if it had one.
    pub source_id: Option<String>,
    /// The record's DOI with any version suffix removed.
    pub canonical_doi: Option<String>,
    /// All statements about the work and its dependent entities.
    pub graph: RdfGraph,
}

impl Fragment {
    /// Number of statements in the fragment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns true if the fragment holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Maps one work record to a graph fragment.
///
/// Returns `None`, emitting nothing, when the record lacks the field the
/// configured [`WorkKeyPolicy`] keys on.
#[must_use]
pub fn map_record(record: &WorkRecord, config: &MappingConfig) -> Option<Fragment> {
    let canonical_doi = record.raw_doi().map(normalize_persistent_id);
    let source_id = record.source_id().map(String::from);

    let (kind, key) = match config.work_key {
        WorkKeyPolicy::SourceId => (EntityKind::Work, source_id.as_deref().map(sanitize_key)),
        WorkKeyPolicy::NormalizedDoi => (
            EntityKind::DoiWork,
            canonical_doi.as_deref().map(sanitize_path_key),
        ),
    };
    let Some(key) = key.filter(|k| !k.is_empty()) else {
        debug!(
            id = source_id.as_deref().unwrap_or("-"),
            policy = ?config.work_key,
            "record has no stable key, not mapped"
        );
        return None;
    };

    let ns = &config.namespaces;
    let work = ns.mint(kind, &key);
    let mut graph = RdfGraph::new();

    add_description(&work, record, config, &mut graph);
    add_categories(&work, record, ns, &mut graph);
    add_dates(&work, record, ns, &mut graph);
    add_authors(&work, &record.authors, ns, &mut graph);
    if record.has_contact_fields() {
        add_contact_info(&work, record, &mut graph);
    }
    if let Some(event) = &config.event {
        add_event_membership(&work, event, ns, &mut graph);
    }
    if config.aggregation {
        add_aggregation(&work, record, &mut graph);
    }

    trace!(work = ?work, triples = graph.len(), "mapped record");
    Some(Fragment {
        work_uri: work,
        source_id,
        canonical_doi,
        graph,
    })
}

/// Type, label, abstract, identifier and keywords.
fn add_description(
    work: &RdfNode,
    record: &WorkRecord,
    config: &MappingConfig,
    graph: &mut RdfGraph,
) {
    graph.add_type(work, config.type_table.map_type(record.defined_type));

    if let Some(title) = non_empty(&record.title) {
        graph.add(work.clone(), properties::LABEL, RdfNode::literal(title));
    }
    if let Some(description) = non_empty(&record.description) {
        graph.add(work.clone(), properties::ABSTRACT, RdfNode::literal(description));
    }
    if let Some(doi) = record.raw_doi() {
        graph.add(work.clone(), properties::DOI, RdfNode::literal(doi));
    }
    for tag in &record.tags {
        graph.add(
            work.clone(),
            properties::FREETEXT_KEYWORD,
            RdfNode::literal(tag.as_str()),
        );
    }
}

fn add_categories(work: &RdfNode, record: &WorkRecord, ns: &Namespaces, graph: &mut RdfGraph) {
    for category in &record.categories {
        let Some(id) = non_empty(&category.id).map(sanitize_key).filter(|k| !k.is_empty()) else {
            continue;
        };
        let concept = ns.mint(EntityKind::Concept, &id);
        graph.add(work.clone(), properties::HAS_SUBJECT_AREA, concept.clone());
        graph.add_type(&concept, classes::CONCEPT);
        let title = category.title.trim();
        if !title.is_empty() {
            graph.add(concept, properties::LABEL, RdfNode::literal(title));
        }
    }
}

/// Reifies each of the published/created/modified dates present.
fn add_dates(work: &RdfNode, record: &WorkRecord, ns: &Namespaces, graph: &mut RdfGraph) {
    let dates = [
        (properties::PUBLISHED_DATE, &record.published_date),
        (properties::CREATED_DATE, &record.created_date),
        (properties::MODIFIED_DATE, &record.modified_date),
    ];
    for (relation, raw) in dates {
        let Some(date) = non_empty(raw).and_then(date_prefix) else {
            continue;
        };
        let date_uri = ns.mint(EntityKind::Date, &date);
        graph.add_type(&date_uri, classes::DATE_TIME_VALUE);
        graph.add(
            date_uri.clone(),
            properties::DATE_TIME,
            RdfNode::typed_literal(format!("{date}T00:00:00"), datatypes::DATE_TIME),
        );
        graph.add(
            date_uri.clone(),
            properties::DATE_TIME_PRECISION,
            RdfNode::uri(properties::YEAR_MONTH_DAY_PRECISION),
        );
        graph.add(work.clone(), relation, date_uri);
    }
}

/// Builds the contact card: first address, geo point, ranked URLs, email.
fn add_contact_info(work: &RdfNode, record: &WorkRecord, graph: &mut RdfGraph) {
    let vcard = derived(work, "vcard");
    graph.add_type(&vcard, classes::VCARD_ORGANIZATION);
    graph.add(work.clone(), properties::HAS_CONTACT_INFO, vcard.clone());

    // Later addresses are ignored.
    if let Some(address) = record.addresses.first().filter(|a| !a.is_empty()) {
        let address_uri = derived(&vcard, "address");
        graph.add(vcard.clone(), properties::HAS_ADDRESS, address_uri.clone());
        graph.add_type(&address_uri, classes::VCARD_ADDRESS);
        for (property, value) in [
            (properties::STREET_ADDRESS, &address.street_address),
            (properties::LOCALITY, &address.locality),
            (properties::REGION, &address.region),
            (properties::POSTAL_CODE, &address.postal_code),
            (properties::COUNTRY_NAME, &address.country),
        ] {
            if let Some(value) = non_empty(value) {
                graph.add(address_uri.clone(), property, RdfNode::literal(value));
            }
        }
    }

    if let (Some(lat), Some(long)) = (record.latitude, record.longitude) {
        let geo = derived(&vcard, "geo");
        graph.add(vcard.clone(), properties::HAS_GEO, geo.clone());
        graph.add_type(&geo, classes::GEO_POINT);
        graph.add(
            geo.clone(),
            properties::LAT,
            RdfNode::typed_literal(lat.to_string(), datatypes::DECIMAL),
        );
        graph.add(
            geo,
            properties::LONG,
            RdfNode::typed_literal(long.to_string(), datatypes::DECIMAL),
        );
    }

    let urls = [
        (non_empty(&record.figshare_url), "Figshare Page"),
        (non_empty(&record.url_public_html), "Public Page"),
    ]
    .into_iter()
    .chain(record.links.iter().map(|l| {
        let l = l.trim();
        ((!l.is_empty()).then_some(l), "Related Link")
    }))
    .filter_map(|(url, label)| url.map(|u| (u, label)));

    for (index, (url, label)) in urls.enumerate() {
        let rank = index + 1;
        let url_uri = derived(&vcard, &format!("url{rank}"));
        graph.add(vcard.clone(), properties::HAS_URL, url_uri.clone());
        graph.add_type(&url_uri, classes::VCARD_URL);
        graph.add(
            url_uri.clone(),
            properties::URL,
            RdfNode::typed_literal(url, datatypes::ANY_URI),
        );
        graph.add(
            url_uri.clone(),
            properties::RANK,
            RdfNode::typed_literal(rank.to_string(), datatypes::INTEGER),
        );
        graph.add(url_uri, properties::LABEL, RdfNode::literal(label));
    }

    if let Some(email) = non_empty(&record.email) {
        let email_uri = derived(&vcard, "email");
        graph.add(vcard.clone(), properties::HAS_EMAIL, email_uri.clone());
        graph.add_type(&email_uri, classes::VCARD_EMAIL);
        graph.add(email_uri, properties::EMAIL, RdfNode::literal(email));
    }
}

fn add_event_membership(
    work: &RdfNode,
    event: &EventContext,
    ns: &Namespaces,
    graph: &mut RdfGraph,
) {
    let key = sanitize_key(&event.key);
    if key.is_empty() {
        return;
    }
    let event_uri = ns.mint(EntityKind::Event, &key);
    graph.add(work.clone(), properties::PART_OF, event_uri.clone());
    graph.add(event_uri.clone(), properties::HAS_PART, work.clone());
    if let Some(label) = event.label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        graph.add(event_uri, properties::LABEL, RdfNode::literal(label));
    }
}

/// Repository download endpoint for deposited files.
const FILE_DOWNLOAD_BASE: &str = "https://ndownloader.figshare.com/files/";

/// Repository article pages; citation exports hang off `<id>/<version>/citations/`.
const ARTICLE_PAGE_BASE: &str = "https://figshare.com/articles/";

/// Citation export formats offered for every article version.
const CITATION_FORMATS: [&str; 8] = [
    "refworks",
    "bibtex",
    "reference_manager",
    "mendeley",
    "endnote",
    "datacite",
    "nlm",
    "dc",
];

/// Describes the work as an OAI-ORE aggregation of its deposited files.
fn add_aggregation(work: &RdfNode, record: &WorkRecord, graph: &mut RdfGraph) {
    graph.add_type(work, classes::AGGREGATION);
    graph.add(work.clone(), properties::ORE_DESCRIBES, work.clone());

    if let Some(created) = non_empty(&record.created_date) {
        graph.add(work.clone(), properties::DC_CREATED, RdfNode::literal(created));
    }
    if let Some(modified) = non_empty(&record.modified_date) {
        graph.add(work.clone(), properties::DC_MODIFIED, RdfNode::literal(modified));
    }

    let id = record.source_id().map(sanitize_key).filter(|id| !id.is_empty());
    if let (Some(id), Some(version)) = (id, record.version) {
        for format in CITATION_FORMATS {
            graph.add(
                work.clone(),
                properties::ORE_IS_DESCRIBED_BY,
                RdfNode::uri(format!("{ARTICLE_PAGE_BASE}{id}/{version}/citations/{format}")),
            );
        }
    }

    for file in &record.files {
        let Some(file_id) = non_empty(&file.id).map(sanitize_key).filter(|k| !k.is_empty()) else {
            continue;
        };
        let file_uri = RdfNode::uri(format!("{FILE_DOWNLOAD_BASE}{file_id}"));
        graph.add(work.clone(), properties::ORE_AGGREGATES, file_uri.clone());
        graph.add(file_uri.clone(), properties::ORE_AGGREGATED_BY, work.clone());
        if let Some(name) = non_empty(&file.name) {
            graph.add(file_uri, properties::DC_TITLE, RdfNode::literal(name));
        }
    }
}
