#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # figvivo: Figshare to VIVO
//!
//! Maps scholarly work records harvested from a Figshare-style repository
//! into RDF statements using the VIVO research-information ontology.
//!
//! ## Quick Start
//!
//! ```
//! use figvivo::{HarvestOptions, Harvester, StaticSource, WorkRecord};
//! use figvivo::vivo::{MappingConfig, RdfFormat};
//!
//! let record = WorkRecord::from_json(r#"{
//!     "id": 3117808,
//!     "doi": "10.6084/m9.figshare.3117808.v2",
//!     "title": "VIVO Status",
//!     "defined_type": 7,
//!     "tags": ["vivo16"],
//!     "authors": [{"full_name": "Dean Krafft"}]
//! }"#)?;
//!
//! let source = StaticSource::new(vec![record]);
//! let config = MappingConfig::default();
//! let (graph, report) = Harvester::new(&source, &config)
//!     .run(&HarvestOptions::tagged("vivo16"))?;
//!
//! assert_eq!(report.accepted, 1);
//! let ttl = graph.serialize(RdfFormat::Turtle)?;
//! assert!(!ttl.is_empty());
//! # Ok::<(), figvivo::HarvestError>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`]: source work records and tolerant decoding
//! - [`vivo`]: the mapping engine (URIs, authors, fragments, merging)
//! - [`harvest`]: the harvest driver, sources, enrichment and reporting
//! - [`figshare`]: HTTP client for the Figshare v2 API
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types and result type

pub mod error;
#[cfg(feature = "figshare-client")]
pub mod figshare;
pub mod harvest;
pub mod logging;
/// Source work records (`WorkRecord`, `AuthorEntry`, `Category`)
pub mod record;
pub mod vivo;

pub use error::{HarvestError, Result};
#[cfg(feature = "figshare-client")]
pub use figshare::FigshareClient;
pub use harvest::{
    enrich_record, map_records, write_graph, AuthorEnricher, HarvestOptions, HarvestReport,
    Harvester, NoEnrichment, OrcidDirectory, RecordSource, StaticSource, WorkQuery,
};
pub use record::{AuthorEntry, Category, FileEntry, PostalAddress, WorkRecord};
