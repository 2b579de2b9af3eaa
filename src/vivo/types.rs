//! Work type code to ontology class mapping.

use serde::{Deserialize, Serialize};

use super::namespaces::classes;

/// Ordered table from 1-based source type codes to ontology class URIs.
///
/// Entry `i` (0-based) holds the class for source code `i + 1`. Codes outside
/// the table, and records with no code, map to `fallback`. The table is plain
/// data so it can be swapped per target ontology version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTable {
    /// Class URIs indexed by `code - 1`.
    pub classes: Vec<String>,
    /// Class for unknown or missing codes.
    pub fallback: String,
}

impl Default for TypeTable {
    /// Figshare v2 `defined_type` codes mapped onto VIVO/BIBO classes.
    fn default() -> Self {
        Self::new(
            [
                classes::IMAGE,                 // 1 figure
                classes::AUDIO_VISUAL_DOCUMENT, // 2 media
                classes::DATASET,               // 3 dataset
                classes::COLLECTION,            // 4 fileset
                classes::CONFERENCE_POSTER,     // 5 poster
                classes::ACADEMIC_ARTICLE,      // 6 journal contribution
                classes::SLIDESHOW,             // 7 presentation
                classes::THESIS,                // 8 thesis
                classes::SOFTWARE,              // 9 software
            ],
            classes::DOCUMENT,
        )
    }
}

impl TypeTable {
    /// Builds a table from class URIs in code order.
    #[must_use]
    pub fn new<I, S>(classes: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            fallback: fallback.into(),
        }
    }

    /// Maps a source type code to its class, falling back for unknown codes.
    #[must_use]
    pub fn map_type(&self, code: Option<i64>) -> &str {
        code.and_then(|c| c.checked_sub(1))
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.classes.get(index))
            .map_or(self.fallback.as_str(), String::as_str)
    }

    /// Number of known codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the table knows no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_codes() {
        let table = TypeTable::default();
        assert_eq!(table.map_type(Some(1)), classes::IMAGE);
        assert_eq!(table.map_type(Some(3)), classes::DATASET);
        assert_eq!(table.map_type(Some(7)), classes::SLIDESHOW);
        assert_eq!(table.map_type(Some(9)), classes::SOFTWARE);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        let table = TypeTable::default();
        assert_eq!(table.map_type(None), classes::DOCUMENT);
        assert_eq!(table.map_type(Some(0)), classes::DOCUMENT);
        assert_eq!(table.map_type(Some(-4)), classes::DOCUMENT);
        assert_eq!(table.map_type(Some(10)), classes::DOCUMENT);
        assert_eq!(table.map_type(Some(i64::MIN)), classes::DOCUMENT);
        assert_eq!(table.map_type(Some(i64::MAX)), classes::DOCUMENT);
    }

    #[test]
    fn test_custom_table() {
        let table = TypeTable::new(["http://example.org/A"], "http://example.org/Thing");
        assert_eq!(table.len(), 1);
        assert_eq!(table.map_type(Some(1)), "http://example.org/A");
        assert_eq!(table.map_type(Some(2)), "http://example.org/Thing");
    }

    proptest! {
        #[test]
        fn prop_table_law(code in -20i64..40) {
            let table = TypeTable::default();
            let expected = if (1..=table.len() as i64).contains(&code) {
                table.classes[(code - 1) as usize].as_str()
            } else {
                table.fallback.as_str()
            };
            prop_assert_eq!(table.map_type(Some(code)), expected);
        }
    }
}
