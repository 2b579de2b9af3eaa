//! Configuration options for VIVO mapping.
//!
//! This module provides the [`MappingConfig`] struct which controls how work
//! records are keyed and typed, which URI namespaces are used, and how the
//! resulting RDF is serialized.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HarvestError, Result};

use super::types::TypeTable;
use super::uri::Namespaces;

/// Output format for RDF serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RdfFormat {
    /// RDF/XML format (application/rdf+xml)
    RdfXml,
    /// JSON-LD format (application/ld+json)
    JsonLd,
    /// Turtle format (text/turtle)
    Turtle,
    /// N-Triples format (application/n-triples) - Simple, line-based
    #[default]
    NTriples,
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RdfXml => write!(f, "RDF/XML"),
            Self::JsonLd => write!(f, "JSON-LD"),
            Self::Turtle => write!(f, "Turtle"),
            Self::NTriples => write!(f, "N-Triples"),
        }
    }
}

impl FromStr for RdfFormat {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nt" | "ntriples" | "n-triples" => Ok(Self::NTriples),
            "ttl" | "turtle" => Ok(Self::Turtle),
            "rdf" | "xml" | "rdfxml" | "rdf-xml" | "rdf/xml" => Ok(Self::RdfXml),
            "jsonld" | "json-ld" => Ok(Self::JsonLd),
            other => Err(HarvestError::Config(format!("unknown RDF format '{other}'"))),
        }
    }
}

impl RdfFormat {
    /// Returns the MIME type for this RDF format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::JsonLd => "application/ld+json",
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
        }
    }

    /// Returns the typical file extension for this RDF format.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::RdfXml => "rdf",
            Self::JsonLd => "jsonld",
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}

/// Which record field a Work URI is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkKeyPolicy {
    /// The repository's internal `id`.
    SourceId,
    /// The `doi` with any version suffix removed, so all versions of a work
    /// share one URI.
    #[default]
    NormalizedDoi,
}

impl FromStr for WorkKeyPolicy {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "source-id" => Ok(Self::SourceId),
            "doi" | "normalized-doi" => Ok(Self::NormalizedDoi),
            other => Err(HarvestError::Config(format!(
                "unknown work key policy '{other}'"
            ))),
        }
    }
}

/// An aggregating event (conference, meeting) every mapped work belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    /// Natural key of the event, minted into the event namespace.
    pub key: String,
    /// Optional display label emitted on the event.
    #[serde(default)]
    pub label: Option<String>,
}

impl EventContext {
    /// Creates an event context with no label.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
        }
    }

    /// Sets the event label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Configuration for record-to-graph mapping.
///
/// # Examples
///
/// ```
/// use figvivo::vivo::{EventContext, MappingConfig, RdfFormat, WorkKeyPolicy};
///
/// let config = MappingConfig::new()
///     .with_work_key(WorkKeyPolicy::SourceId)
///     .with_event(EventContext::new("vivo2016").with_label("VIVO 2016"))
///     .with_output_format(RdfFormat::Turtle);
/// assert_eq!(config.work_key, WorkKeyPolicy::SourceId);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Field the Work URI is derived from.
    pub work_key: WorkKeyPolicy,

    /// URI prefixes per entity kind.
    pub namespaces: Namespaces,

    /// Type code to ontology class table.
    pub type_table: TypeTable,

    /// Event all works are linked to, if any.
    pub event: Option<EventContext>,

    /// Also describe each work as an OAI-ORE aggregation of its files.
    pub aggregation: bool,

    /// Output format for RDF serialization.
    pub output_format: RdfFormat,
}

impl MappingConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| HarvestError::Config(format!("{}: {e}", path.display())))
    }

    /// Sets the work key policy.
    #[must_use]
    pub const fn with_work_key(mut self, policy: WorkKeyPolicy) -> Self {
        self.work_key = policy;
        self
    }

    /// Replaces the namespace table.
    #[must_use]
    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    /// Replaces the type table.
    #[must_use]
    pub fn with_type_table(mut self, table: TypeTable) -> Self {
        self.type_table = table;
        self
    }

    /// Links every mapped work to an aggregating event.
    #[must_use]
    pub fn with_event(mut self, event: EventContext) -> Self {
        self.event = Some(event);
        self
    }

    /// Enables or disables OAI-ORE aggregation statements.
    #[must_use]
    pub const fn with_aggregation(mut self, enabled: bool) -> Self {
        self.aggregation = enabled;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_output_format(mut self, format: RdfFormat) -> Self {
        self.output_format = format;
        self
    }
}
