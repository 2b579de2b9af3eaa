//! URI minting policy.
//!
//! Every entity the mapper emits gets its URI from [`Namespaces::mint`], a
//! pure concatenation of a per-kind namespace and a natural key. The same key
//! always yields the same URI, which is what makes re-mapping idempotent and
//! lets two works share a date entity without any post-hoc deduplication.

use serde::{Deserialize, Serialize};

use super::normalize::is_path_char;
use super::rdf::RdfNode;

/// The kinds of entity that receive minted URIs. Namespaces are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Work keyed by source id.
    Work,
    /// Work keyed by normalized DOI.
    DoiWork,
    /// Reified calendar date.
    Date,
    /// Person with a confirmed researcher identifier.
    ConfirmedAuthor,
    /// Person known only by name.
    SyntheticAuthor,
    /// Aggregating event.
    Event,
    /// Subject category concept.
    Concept,
}

/// URI prefix for each [`EntityKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespaces {
    /// Prefix for id-keyed works.
    pub work: String,
    /// Prefix for DOI-keyed works.
    pub doi_work: String,
    /// Prefix for date entities.
    pub date: String,
    /// Prefix for confirmed authors.
    pub confirmed_author: String,
    /// Prefix for synthesized authors.
    pub synthetic_author: String,
    /// Prefix for events.
    pub event: String,
    /// Prefix for category concepts.
    pub concept: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::with_base("http://openvivo.org/a/")
    }
}

impl Namespaces {
    /// Derives all namespaces from one base URI.
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        Self {
            work: format!("{base}figshare"),
            doi_work: format!("{base}doi"),
            date: format!("{base}date"),
            confirmed_author: format!("{base}orcid"),
            synthetic_author: format!("{base}person-"),
            event: format!("{base}event"),
            concept: format!("{base}category"),
        }
    }

    /// Returns the namespace for an entity kind.
    #[must_use]
    pub fn namespace_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Work => &self.work,
            EntityKind::DoiWork => &self.doi_work,
            EntityKind::Date => &self.date,
            EntityKind::ConfirmedAuthor => &self.confirmed_author,
            EntityKind::SyntheticAuthor => &self.synthetic_author,
            EntityKind::Event => &self.event,
            EntityKind::Concept => &self.concept,
        }
    }

    /// Mints the URI for `key` in the namespace of `kind`.
    ///
    /// The key must already be IRI-safe (see
    /// [`sanitize_key`](super::normalize::sanitize_key)); minting does no
    /// validation beyond a debug assertion, and an unsafe key surfaces as an
    /// error only when the graph is serialized.
    #[must_use]
    pub fn mint(&self, kind: EntityKind, key: &str) -> RdfNode {
        debug_assert!(is_iri_safe(key), "unsanitized key passed to mint: {key:?}");
        RdfNode::uri(format!("{}{key}", self.namespace_for(kind)))
    }
}

/// Appends a suffix to a minted URI to name a dependent entity
/// (`<work>-authorship1`, `<vcard>-address`).
#[must_use]
pub fn derived(parent: &RdfNode, suffix: &str) -> RdfNode {
    match parent {
        RdfNode::Uri(uri) => RdfNode::uri(format!("{uri}-{suffix}")),
        other => other.clone(),
    }
}

/// True if `key` contains nothing that is illegal in an IRI path.
fn is_iri_safe(key: &str) -> bool {
    key.chars().all(|c| c == '/' || is_path_char(c))
}
