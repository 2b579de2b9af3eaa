//! Author identity resolution and authorship emission.
//!
//! Each entry of a work's author list becomes an [`Author`], either a
//! [`Author::ConfirmedPerson`] when a researcher identifier is present or a
//! [`Author::SyntheticIdentity`] keyed by the normalized name otherwise, plus
//! an [`Authorship`] relationship carrying the author's 1-based rank.

use crate::record::{non_empty, AuthorEntry};

use super::namespaces::{classes, datatypes, properties, ORCID_ORG};
use super::normalize::{normalize_orcid, sanitize_key, split_name, PersonName};
use super::rdf::{RdfGraph, RdfNode};
use super::uri::{derived, EntityKind, Namespaces};

/// A resolved author identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    /// Author with a confirmed external researcher identifier.
    ConfirmedPerson {
        /// URI minted from the identifier.
        uri: RdfNode,
        /// Bare researcher identifier.
        orcid: String,
        /// Name parts, used for the label.
        name: PersonName,
    },
    /// Author known only by name; URI minted from the name key.
    SyntheticIdentity {
        /// URI minted from `family--given-additional-`.
        uri: RdfNode,
        /// Name parts.
        name: PersonName,
    },
}

impl Author {
    /// Resolves one author list entry.
    #[must_use]
    pub fn resolve(entry: &AuthorEntry, namespaces: &Namespaces) -> Self {
        let name = split_name(&entry.full_name);
        let orcid = non_empty(&entry.orcid_id)
            .and_then(normalize_orcid)
            .map(|id| sanitize_key(&id))
            .filter(|id| !id.is_empty());

        match orcid {
            Some(orcid) => Self::ConfirmedPerson {
                uri: namespaces.mint(EntityKind::ConfirmedAuthor, &orcid),
                orcid,
                name,
            },
            None => Self::SyntheticIdentity {
                uri: namespaces.mint(EntityKind::SyntheticAuthor, &sanitize_key(&name.key())),
                name,
            },
        }
    }

    /// The author's URI.
    #[must_use]
    pub fn uri(&self) -> &RdfNode {
        match self {
            Self::ConfirmedPerson { uri, .. } | Self::SyntheticIdentity { uri, .. } => uri,
        }
    }

    /// The author's name parts.
    #[must_use]
    pub fn name(&self) -> &PersonName {
        match self {
            Self::ConfirmedPerson { name, .. } | Self::SyntheticIdentity { name, .. } => name,
        }
    }

    /// Display label, `family, given additional`.
    #[must_use]
    pub fn label(&self) -> String {
        self.name().label()
    }

    /// Returns true for [`Author::ConfirmedPerson`].
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::ConfirmedPerson { .. })
    }

    /// Emits the author's own statements.
    pub fn emit(&self, graph: &mut RdfGraph) {
        match self {
            Self::ConfirmedPerson { uri, orcid, name } => {
                graph.add_type(uri, classes::PERSON);
                graph.add(
                    uri.clone(),
                    properties::ORCID_ID,
                    RdfNode::uri(format!("{ORCID_ORG}{orcid}")),
                );
                let label = name.label();
                if !label.is_empty() {
                    graph.add(uri.clone(), properties::LABEL, RdfNode::literal(label));
                }
            },
            Self::SyntheticIdentity { uri, name } => {
                graph.add_type(uri, classes::VCARD_INDIVIDUAL);
                let name_uri = derived(uri, "name");
                graph.add(uri.clone(), properties::HAS_NAME, name_uri.clone());
                graph.add_type(&name_uri, classes::VCARD_NAME);
                for (property, value) in [
                    (properties::GIVEN_NAME, &name.given),
                    (properties::FAMILY_NAME, &name.family),
                    (properties::ADDITIONAL_NAME, &name.additional),
                ] {
                    if !value.is_empty() {
                        graph.add(name_uri.clone(), property, RdfNode::literal(value.as_str()));
                    }
                }
            },
        }
    }
}

/// The relationship between one work and one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorship {
    /// URI derived from the work URI and rank.
    pub uri: RdfNode,
    /// 1-based position in the source author list.
    pub rank: usize,
    /// The resolved author.
    pub author: Author,
}

impl Authorship {
    /// Emits the authorship, its author, and the links to the work.
    pub fn emit(&self, work: &RdfNode, graph: &mut RdfGraph) {
        self.author.emit(graph);

        graph.add_type(&self.uri, classes::AUTHORSHIP);
        graph.add(
            self.uri.clone(),
            properties::RANK,
            RdfNode::typed_literal(self.rank.to_string(), datatypes::INTEGER),
        );
        graph.add(self.uri.clone(), properties::RELATES, self.author.uri().clone());
        graph.add(self.uri.clone(), properties::RELATES, work.clone());
        graph.add(work.clone(), properties::RELATED_BY, self.uri.clone());
        graph.add(self.author.uri().clone(), properties::RELATED_BY, self.uri.clone());
    }
}

/// Resolves every author of a work, in source order, ranking from 1.
#[must_use]
pub fn resolve_authors(
    work: &RdfNode,
    entries: &[AuthorEntry],
    namespaces: &Namespaces,
) -> Vec<Authorship> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = index + 1;
            Authorship {
                uri: derived(work, &format!("authorship{rank}")),
                rank,
                author: Author::resolve(entry, namespaces),
            }
        })
        .collect()
}

/// Resolves and emits all authorships of a work into `graph`.
pub fn add_authors(
    work: &RdfNode,
    entries: &[AuthorEntry],
    namespaces: &Namespaces,
    graph: &mut RdfGraph,
) {
    for authorship in resolve_authors(work, entries, namespaces) {
        authorship.emit(work, graph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(full_name: &str, orcid: Option<&str>) -> AuthorEntry {
        AuthorEntry {
            full_name: full_name.to_string(),
            orcid_id: orcid.map(String::from),
            ..AuthorEntry::default()
        }
    }

    fn work() -> RdfNode {
        RdfNode::uri("http://openvivo.org/a/figshare7")
    }

    #[test]
    fn test_confirmed_person() {
        let ns = Namespaces::default();
        let author = Author::resolve(
            &entry("Jane Q. Smith", Some("https://orcid.org/0000-0002-1825-0097")),
            &ns,
        );
        assert!(author.is_confirmed());
        assert_eq!(
            author.uri(),
            &RdfNode::uri("http://openvivo.org/a/orcid0000-0002-1825-0097")
        );
        assert_eq!(author.label(), "Smith, Jane Q");

        let mut graph = RdfGraph::new();
        author.emit(&mut graph);
        assert!(graph.contains(
            author.uri(),
            properties::ORCID_ID,
            &RdfNode::uri("http://orcid.org/0000-0002-1825-0097")
        ));
        assert!(graph.contains(
            author.uri(),
            properties::LABEL,
            &RdfNode::literal("Smith, Jane Q")
        ));
        assert!(graph.contains(author.uri(), properties::TYPE, &RdfNode::uri(classes::PERSON)));
    }

    #[test]
    fn test_blank_orcid_is_synthetic() {
        let ns = Namespaces::default();
        let author = Author::resolve(&entry("Jane Smith", Some("  ")), &ns);
        assert!(!author.is_confirmed());
        assert_eq!(
            author.uri(),
            &RdfNode::uri("http://openvivo.org/a/person-Smith--Jane--")
        );
    }

    #[test]
    fn test_synthetic_name_parts_only_when_present() {
        let ns = Namespaces::default();
        let author = Author::resolve(&entry("Jane Smith", None), &ns);
        let mut graph = RdfGraph::new();
        author.emit(&mut graph);

        let name_uri = derived(author.uri(), "name");
        assert!(graph.contains(author.uri(), properties::HAS_NAME, &name_uri));
        assert!(graph.contains(&name_uri, properties::GIVEN_NAME, &RdfNode::literal("Jane")));
        assert!(graph.contains(&name_uri, properties::FAMILY_NAME, &RdfNode::literal("Smith")));
        assert_eq!(graph.objects(&name_uri, properties::ADDITIONAL_NAME).count(), 0);
        assert!(graph.contains(
            author.uri(),
            properties::TYPE,
            &RdfNode::uri(classes::VCARD_INDIVIDUAL)
        ));
    }

    #[test]
    fn test_same_name_same_synthetic_uri() {
        let ns = Namespaces::default();
        let a = Author::resolve(&entry("Jane Q. Smith", None), &ns);
        let b = Author::resolve(&entry("  Jane  Q  Smith ", None), &ns);
        assert_eq!(a.uri(), b.uri());
    }

    #[test]
    fn test_four_token_name_key_is_sanitized() {
        let ns = Namespaces::default();
        let author = Author::resolve(&entry("Maria del Carmen Lopez", None), &ns);
        assert_eq!(
            author.uri(),
            &RdfNode::uri("http://openvivo.org/a/person-Carmen_Lopez--Maria-del-")
        );
    }

    #[test]
    fn test_ranks_follow_source_order() {
        let ns = Namespaces::default();
        let entries = vec![
            entry("Dean Krafft", None),
            entry("Michael Conlon", Some("0000-0002-1304-8447")),
            entry("Smith", None),
        ];
        let authorships = resolve_authors(&work(), &entries, &ns);
        let ranks: Vec<_> = authorships.iter().map(|a| a.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(
            authorships[1].uri,
            RdfNode::uri("http://openvivo.org/a/figshare7-authorship2")
        );
        assert!(authorships[1].author.is_confirmed());
    }

    #[test]
    fn test_authorship_links_both_parties() {
        let ns = Namespaces::default();
        let mut graph = RdfGraph::new();
        add_authors(&work(), &[entry("Jane Smith", None)], &ns, &mut graph);

        let authorship = RdfNode::uri("http://openvivo.org/a/figshare7-authorship1");
        let author = RdfNode::uri("http://openvivo.org/a/person-Smith--Jane--");
        assert!(graph.contains(&authorship, properties::RELATES, &author));
        assert!(graph.contains(&authorship, properties::RELATES, &work()));
        assert!(graph.contains(&work(), properties::RELATED_BY, &authorship));
        assert!(graph.contains(&author, properties::RELATED_BY, &authorship));
        assert!(graph.contains(
            &authorship,
            properties::RANK,
            &RdfNode::typed_literal("1", datatypes::INTEGER)
        ));
    }

    proptest! {
        #[test]
        fn prop_ranks_are_one_to_k(names in prop::collection::vec("\\PC{0,24}", 0..12)) {
            let ns = Namespaces::default();
            let entries: Vec<_> = names.iter().map(|n| entry(n, None)).collect();
            let authorships = resolve_authors(&work(), &entries, &ns);

            let ranks: Vec<_> = authorships.iter().map(|a| a.rank).collect();
            prop_assert_eq!(ranks, (1..=entries.len()).collect::<Vec<_>>());

            let mut uris: Vec<_> = authorships.iter().map(|a| a.uri.clone()).collect();
            uris.dedup();
            prop_assert_eq!(uris.len(), entries.len());
        }
    }
}
