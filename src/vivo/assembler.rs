//! Merging per-record fragments into one result graph.

use std::collections::HashSet;

use tracing::debug;

use super::mapper::Fragment;
use super::rdf::RdfGraph;

/// Counts of fragments accepted and dropped by a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Fragments unioned into the result.
    pub accepted: usize,
    /// Fragments dropped because their business key was already merged.
    pub duplicates: usize,
}

impl MergeStats {
    /// Total fragments offered.
    #[must_use]
    pub const fn offered(&self) -> usize {
        self.accepted + self.duplicates
    }
}

/// Single owner of the merged graph.
///
/// Fragments are unioned in the order offered. When a key function is
/// installed, the first fragment for each key wins and later ones are
/// dropped. Fragments for which the key function returns `None` are always
/// accepted.
pub struct GraphAssembler<'k> {
    graph: RdfGraph,
    seen: HashSet<String>,
    key_fn: Option<Box<dyn Fn(&Fragment) -> Option<String> + Send + Sync + 'k>>,
    stats: MergeStats,
}

impl std::fmt::Debug for GraphAssembler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphAssembler")
            .field("triples", &self.graph.len())
            .field("seen", &self.seen.len())
            .field("deduplicating", &self.key_fn.is_some())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for GraphAssembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k> GraphAssembler<'k> {
    /// Creates an assembler that accepts every fragment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: RdfGraph::new(),
            seen: HashSet::new(),
            key_fn: None,
            stats: MergeStats::default(),
        }
    }

    /// Creates an assembler that drops fragments whose key was already merged.
    #[must_use]
    pub fn with_key<F>(key_fn: F) -> Self
    where
        F: Fn(&Fragment) -> Option<String> + Send + Sync + 'k,
    {
        Self {
            key_fn: Some(Box::new(key_fn)),
            ..Self::new()
        }
    }

    /// Offers one fragment. Returns true if it was merged.
    pub fn offer(&mut self, fragment: Fragment) -> bool {
        if let Some(key_fn) = &self.key_fn {
            if let Some(key) = key_fn(&fragment) {
                if !self.seen.insert(key) {
                    debug!(work = ?fragment.work_uri, "duplicate key, fragment dropped");
                    self.stats.duplicates += 1;
                    return false;
                }
            }
        }
        self.graph.union(fragment.graph);
        self.stats.accepted += 1;
        true
    }

    /// Counts so far.
    #[must_use]
    pub const fn stats(&self) -> MergeStats {
        self.stats
    }

    /// The graph merged so far.
    #[must_use]
    pub const fn graph(&self) -> &RdfGraph {
        &self.graph
    }

    /// Consumes the assembler, returning the merged graph and counts.
    #[must_use]
    pub fn finish(self) -> (RdfGraph, MergeStats) {
        (self.graph, self.stats)
    }
}

/// Business key: the version-free DOI.
#[must_use]
pub fn canonical_doi_key(fragment: &Fragment) -> Option<String> {
    fragment.canonical_doi.clone()
}

/// Unions fragments in order, optionally dropping later duplicates by key.
pub fn merge<I, F>(fragments: I, key_fn: Option<F>) -> (RdfGraph, MergeStats)
where
    I: IntoIterator<Item = Fragment>,
    F: Fn(&Fragment) -> Option<String> + Send + Sync,
{
    let mut assembler = match key_fn {
        Some(key_fn) => GraphAssembler::with_key(key_fn),
        None => GraphAssembler::new(),
    };
    for fragment in fragments {
        assembler.offer(fragment);
    }
    assembler.finish()
}
