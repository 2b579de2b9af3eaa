//! VIVO graph mapping for scholarly work records.
//!
//! This module turns [`WorkRecord`]s into RDF compatible with the VIVO
//! research-information ontology. A single record typically becomes several
//! linked entities:
//!
//! - **Work**: the scholarly item, typed by its source type code
//! - **Author**: a confirmed person (ORCID) or a synthesized identity keyed
//!   by name parts
//! - **Authorship**: the ranked relationship between the two
//! - **Date**: a reified calendar date shared by every work with that date
//! - **Contact card**: address, geolocation, ranked URLs and email
//!
//! # Quick Start
//!
//! ```
//! use figvivo::record::WorkRecord;
//! use figvivo::vivo::{map_record, merge, canonical_doi_key, MappingConfig, RdfFormat};
//!
//! let record = WorkRecord::from_json(r#"{
//!     "id": 7, "doi": "10.1/7.v2", "title": "X", "defined_type": 3,
//!     "authors": [{"full_name": "Jane Q. Smith", "orcid_id": "0000-1"}]
//! }"#)?;
//!
//! let config = MappingConfig::default();
//! let fragment = map_record(&record, &config).expect("record has a DOI");
//! let (graph, stats) = merge([fragment], Some(canonical_doi_key));
//! assert_eq!(stats.accepted, 1);
//! let nt = graph.serialize(RdfFormat::NTriples)?;
//! assert!(nt.contains("<http://openvivo.org/a/doi10.1/7>"));
//! # Ok::<(), figvivo::HarvestError>(())
//! ```
//!
//! # Modules
//!
//! - `config`: mapping configuration and output formats
//! - `namespaces`: vocabulary prefixes and term URIs
//! - `rdf`: RDF graph representation and serialization
//! - `normalize`: identifier and name canonicalisation
//! - `types`: type code to class table
//! - `uri`: URI minting policy
//! - `authors`: author resolution and authorship emission
//! - `mapper`: record to fragment mapping
//! - `assembler`: fragment merging and deduplication
//!
//! [`WorkRecord`]: crate::record::WorkRecord

mod assembler;
mod authors;
mod config;
mod mapper;
pub mod namespaces;
mod normalize;
mod rdf;
mod types;
mod uri;

pub use assembler::{canonical_doi_key, merge, GraphAssembler, MergeStats};
pub use authors::{add_authors, resolve_authors, Author, Authorship};
pub use config::{EventContext, MappingConfig, RdfFormat, WorkKeyPolicy};
pub use mapper::{map_record, Fragment};
pub use namespaces::{classes, datatypes, properties};
pub use normalize::{
    date_prefix, normalize_orcid, normalize_persistent_id, sanitize_key, sanitize_path_key,
    split_name, PersonName,
};
pub use rdf::{RdfGraph, RdfNode, RdfTriple};
pub use types::TypeTable;
pub use uri::{derived, EntityKind, Namespaces};
