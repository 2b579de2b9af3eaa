//! RDF statement model and serialization layer.
//!
//! [`RdfGraph`] is an insertion-ordered, duplicate-free set of triples backed
//! by [`IndexSet`]. Adding a statement twice is a no-op and [`RdfGraph::union`]
//! keeps first-seen order, so merged output is deterministic. Parsing and
//! serialization go through oxrdfio.

use std::io::{Read, Write};

use indexmap::IndexSet;
use oxrdf::{BlankNode, Literal, NamedNode, NamedOrBlankNode, Quad, Term, Triple};
use oxrdfio::{JsonLdProfileSet, RdfFormat as OxRdfFormat, RdfParser, RdfSerializer};

use crate::error::{HarvestError, Result};

use super::config::RdfFormat;
use super::namespaces::{datatypes, properties};

/// A single RDF triple (subject, predicate, object).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfTriple {
    /// The subject of the triple.
    pub subject: RdfNode,
    /// The predicate (property) of the triple.
    pub predicate: String,
    /// The object of the triple.
    pub object: RdfNode,
}

impl RdfTriple {
    /// Creates a new RDF triple.
    #[must_use]
    pub fn new(subject: RdfNode, predicate: impl Into<String>, object: RdfNode) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// An RDF node (subject or object in a triple).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfNode {
    /// A named node (IRI/URI).
    Uri(String),
    /// A blank node with a local identifier. Only produced by parsing.
    BlankNode(String),
    /// A literal value with optional language tag or datatype.
    Literal {
        /// The literal value.
        value: String,
        /// Optional language tag (e.g., "en", "ja").
        language: Option<String>,
        /// Optional datatype URI.
        datatype: Option<String>,
    },
}

impl RdfNode {
    /// Creates a new URI node.
    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Creates a new blank node.
    #[must_use]
    pub fn blank(id: impl Into<String>) -> Self {
        Self::BlankNode(id.into())
    }

    /// Creates a new plain literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a new typed literal.
    #[must_use]
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// Returns true if this is a URI node.
    #[must_use]
    pub const fn is_uri(&self) -> bool {
        matches!(self, Self::Uri(_))
    }

    /// Returns true if this is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Returns the IRI of a URI node.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the lexical value of a literal node.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// An ordered, duplicate-free set of RDF triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RdfGraph {
    triples: IndexSet<RdfTriple>,
}

impl RdfGraph {
    /// Creates a new empty RDF graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph. Returns false if it was already present.
    pub fn add_triple(&mut self, triple: RdfTriple) -> bool {
        self.triples.insert(triple)
    }

    /// Adds a triple from components.
    pub fn add(&mut self, subject: RdfNode, predicate: impl Into<String>, object: RdfNode) {
        self.add_triple(RdfTriple::new(subject, predicate, object));
    }

    /// Adds an `rdf:type` statement.
    pub fn add_type(&mut self, subject: &RdfNode, class: &str) {
        self.add(subject.clone(), properties::TYPE, RdfNode::uri(class));
    }

    /// Adds every triple of `other` not already present, preserving order.
    pub fn union(&mut self, other: RdfGraph) {
        self.triples.extend(other.triples);
    }

    /// Returns true if the exact triple is present.
    #[must_use]
    pub fn contains(&self, subject: &RdfNode, predicate: &str, object: &RdfNode) -> bool {
        self.triples
            .contains(&RdfTriple::new(subject.clone(), predicate, object.clone()))
    }

    /// Returns the number of triples in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns an iterator over the triples in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = &RdfTriple> {
        self.triples.iter()
    }

    /// Returns the objects of all statements with the given subject and predicate.
    ///
    /// The iterator borrows only the graph, not the lookup arguments.
    pub fn objects<'a>(
        &'a self,
        subject: &RdfNode,
        predicate: &str,
    ) -> impl Iterator<Item = &'a RdfNode> + 'a {
        let subject = subject.clone();
        let predicate = predicate.to_string();
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Returns the subjects of all statements with the given predicate and object.
    pub fn subjects<'a>(
        &'a self,
        predicate: &str,
        object: &RdfNode,
    ) -> impl Iterator<Item = &'a RdfNode> + 'a {
        let predicate = predicate.to_string();
        let object = object.clone();
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && t.object == object)
            .map(|t| &t.subject)
    }

    /// Returns the first object for a subject/predicate pair.
    #[must_use]
    pub fn value(&self, subject: &RdfNode, predicate: &str) -> Option<&RdfNode> {
        self.objects(subject, predicate).next()
    }

    /// Serializes the graph to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if a node is not valid RDF or serialization fails.
    pub fn serialize(&self, format: RdfFormat) -> Result<String> {
        let mut output = Vec::new();
        self.serialize_to_writer(&mut output, format)?;
        String::from_utf8(output).map_err(|e| HarvestError::Rdf(e.to_string()))
    }

    /// Serializes the graph to a writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if a node is not valid RDF or the writer fails.
    pub fn serialize_to_writer<W: Write>(&self, writer: W, format: RdfFormat) -> Result<()> {
        let ox_format = to_oxrdf_format(format);
        let mut serializer = RdfSerializer::from_format(ox_format).for_writer(writer);

        for triple in &self.triples {
            let ox_triple = to_oxrdf_triple(triple)?;
            serializer
                .serialize_triple(&ox_triple)
                .map_err(|e| HarvestError::Rdf(e.to_string()))?;
        }

        serializer
            .finish()
            .map_err(|e| HarvestError::Rdf(e.to_string()))?;
        Ok(())
    }

    /// Parses an RDF graph from a reader in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn parse_from_reader<R: Read>(reader: R, format: RdfFormat) -> Result<Self> {
        let ox_format = to_oxrdf_format(format);
        let parser = RdfParser::from_format(ox_format).for_reader(reader);

        let mut graph = Self::new();

        for result in parser {
            let quad = result.map_err(|e| HarvestError::Rdf(e.to_string()))?;
            graph.add_triple(from_oxrdf_quad(&quad)?);
        }

        Ok(graph)
    }

    /// Parses an RDF graph from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn parse(input: &str, format: RdfFormat) -> Result<Self> {
        Self::parse_from_reader(input.as_bytes(), format)
    }
}

impl Extend<RdfTriple> for RdfGraph {
    fn extend<I: IntoIterator<Item = RdfTriple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<RdfTriple> for RdfGraph {
    fn from_iter<I: IntoIterator<Item = RdfTriple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

/// Converts our [`RdfFormat`] to oxrdfio's format.
fn to_oxrdf_format(format: RdfFormat) -> OxRdfFormat {
    match format {
        RdfFormat::RdfXml => OxRdfFormat::RdfXml,
        RdfFormat::JsonLd => OxRdfFormat::JsonLd {
            profile: JsonLdProfileSet::default(),
        },
        RdfFormat::Turtle => OxRdfFormat::Turtle,
        RdfFormat::NTriples => OxRdfFormat::NTriples,
    }
}

fn named_node(iri: &str) -> Result<NamedNode> {
    NamedNode::new(iri).map_err(|e| HarvestError::Rdf(format!("Invalid IRI <{iri}>: {e}")))
}

fn blank_node(id: &str) -> Result<BlankNode> {
    BlankNode::new(id).map_err(|e| HarvestError::Rdf(format!("Invalid blank node ID: {e}")))
}

/// Converts an [`RdfTriple`] to an oxrdf Triple.
fn to_oxrdf_triple(triple: &RdfTriple) -> Result<Triple> {
    let subject = match &triple.subject {
        RdfNode::Uri(uri) => NamedOrBlankNode::NamedNode(named_node(uri)?),
        RdfNode::BlankNode(id) => NamedOrBlankNode::BlankNode(blank_node(id)?),
        RdfNode::Literal { .. } => {
            return Err(HarvestError::Rdf("Literals cannot be triple subjects".into()));
        },
    };

    let predicate = named_node(&triple.predicate)?;

    let object = match &triple.object {
        RdfNode::Uri(uri) => Term::NamedNode(named_node(uri)?),
        RdfNode::BlankNode(id) => Term::BlankNode(blank_node(id)?),
        RdfNode::Literal {
            value,
            language,
            datatype,
        } => {
            let lit = if let Some(lang) = language {
                Literal::new_language_tagged_literal(value, lang)
                    .map_err(|e| HarvestError::Rdf(format!("Invalid language tag: {e}")))?
            } else if let Some(dt) = datatype {
                Literal::new_typed_literal(value, named_node(dt)?)
            } else {
                Literal::new_simple_literal(value)
            };
            Term::Literal(lit)
        },
    };

    Ok(Triple::new(subject, predicate, object))
}

/// Converts an oxrdf Quad back to our [`RdfTriple`].
fn from_oxrdf_quad(quad: &Quad) -> Result<RdfTriple> {
    let subject = match &quad.subject {
        NamedOrBlankNode::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        NamedOrBlankNode::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        #[allow(unreachable_patterns)]
        _ => {
            return Err(HarvestError::Rdf("Unsupported subject type".into()));
        },
    };

    let predicate = quad.predicate.as_str().to_string();

    let object = match &quad.object {
        Term::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        Term::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        Term::Literal(lit) => {
            let value = lit.value().to_string();
            let language = lit.language().map(String::from);
            let datatype = lit.datatype().as_str();
            let datatype = if language.is_none() && datatype != datatypes::STRING {
                Some(datatype.to_string())
            } else {
                None
            };
            RdfNode::Literal {
                value,
                language,
                datatype,
            }
        },
        #[allow(unreachable_patterns)]
        _ => {
            return Err(HarvestError::Rdf("Unsupported object type".into()));
        },
    };

    Ok(RdfTriple::new(subject, predicate, object))
}
