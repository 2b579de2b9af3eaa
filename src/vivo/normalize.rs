//! Canonicalisation of ambiguous source identifiers and names.
//!
//! Persistent identifiers arrive versioned (`10.6084/m9.figshare.3117808.v2`),
//! researcher identifiers arrive either bare or as profile URLs, and author
//! names are free text. The functions here reduce each to one canonical form
//! so that the URIs minted from them are stable.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref DOI_VERSION: Regex = Regex::new(r"\.v\d+$").expect("static pattern");
    static ref ORCID_URL: Regex =
        Regex::new(r"(?i)^https?://(www\.)?orcid\.org/").expect("static pattern");
    static ref CALENDAR_DATE: Regex =
        Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])").expect("static pattern");
}

/// Strips a trailing `.v<digits>` version marker from a persistent identifier.
///
/// No-op when no marker is present. Surrounding whitespace is removed.
///
/// ```
/// use figvivo::vivo::normalize_persistent_id;
///
/// assert_eq!(normalize_persistent_id("10.x/y.v3"), "10.x/y");
/// assert_eq!(normalize_persistent_id("10.x/y"), "10.x/y");
/// ```
#[must_use]
pub fn normalize_persistent_id(raw: &str) -> String {
    DOI_VERSION.replace(raw.trim(), "").into_owned()
}

/// Reduces an ORCID given bare or as an `orcid.org` URL to the bare identifier.
///
/// Returns `None` for blank input.
#[must_use]
pub fn normalize_orcid(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = ORCID_URL.replace(trimmed, "");
    let bare = bare.trim_end_matches('/');
    (!bare.is_empty()).then(|| bare.to_string())
}

/// A free-text personal name split into its three vCard parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PersonName {
    /// First name.
    pub given: String,
    /// Middle names or initials.
    pub additional: String,
    /// Surname.
    pub family: String,
}

impl PersonName {
    /// Display label in `family, given additional` order.
    ///
    /// A name with no given parts is labelled by its family part alone.
    #[must_use]
    pub fn label(&self) -> String {
        let forenames = format!("{} {}", self.given, self.additional);
        let forenames = forenames.trim();
        if forenames.is_empty() {
            self.family.trim().to_string()
        } else {
            format!("{}, {forenames}", self.family).trim().to_string()
        }
    }

    /// Natural key for a synthesized identity: `family--given-additional-`.
    ///
    /// Not sanitized; pass through [`sanitize_key`] before minting.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}--{}-{}-", self.family, self.given, self.additional)
    }
}

/// Splits a personal name into given, additional and family parts.
///
/// The name is NFC-normalised, tokenised on whitespace, and each token loses
/// its trailing periods. By token count:
///
/// - 1: family only
/// - 2: given, family
/// - 3: given, additional, family
/// - 4 or more: given = first, additional = second, family = the rest joined
///   by single spaces
///
/// This is a heuristic. Particles, suffixes and family-name-first orders are
/// not recognised; they land in whichever bucket their position implies.
///
/// ```
/// use figvivo::vivo::split_name;
///
/// let name = split_name("Jane Q. Smith");
/// assert_eq!((name.given.as_str(), name.additional.as_str(), name.family.as_str()),
///            ("Jane", "Q", "Smith"));
/// ```
#[must_use]
pub fn split_name(full_name: &str) -> PersonName {
    let normalized: String = full_name.nfc().collect();
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => PersonName::default(),
        [family] => PersonName {
            family: (*family).to_string(),
            ..PersonName::default()
        },
        [given, family] => PersonName {
            given: (*given).to_string(),
            additional: String::new(),
            family: (*family).to_string(),
        },
        [given, additional, family] => PersonName {
            given: (*given).to_string(),
            additional: (*additional).to_string(),
            family: (*family).to_string(),
        },
        [given, additional, rest @ ..] => PersonName {
            given: (*given).to_string(),
            additional: (*additional).to_string(),
            family: rest.join(" "),
        },
    }
}

/// Makes a natural key safe to append to a namespace IRI.
///
/// Whitespace runs become `_`. Anything that is not a plain IRI path
/// character is dropped, including `/`, `?`, `#` and `%`.
#[must_use]
pub fn sanitize_key(raw: &str) -> String {
    sanitize(raw, false)
}

/// Like [`sanitize_key`] but keeps `/`, for keys that are themselves
/// hierarchical identifiers (DOIs).
#[must_use]
pub fn sanitize_path_key(raw: &str) -> String {
    sanitize(raw, true)
}

fn sanitize(raw: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if (c == '/' && keep_slash) || is_path_char(c) {
            out.push(c);
        }
    }
    out
}

/// True if `c` may appear unescaped in an IRI path segment (RFC 3987
/// `ipchar`, minus percent-encoding).
pub(crate) fn is_path_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@".contains(c);
    }
    let cp = u32::from(c);
    match cp {
        0xA0..=0xD7FF | 0xF900..=0xFDCF | 0xFDF0..=0xFFEF => true,
        0xE_0000..=0xE_0FFF => false,
        0x1_0000..=0xE_FFFF => cp & 0xFFFF <= 0xFFFD,
        _ => false,
    }
}

/// Extracts the `YYYY-MM-DD` calendar date that starts an ISO-8601 timestamp.
///
/// Returns `None` for anything else (`"2016"`, `"March 2016"`), so no
/// malformed `xsd:dateTime` literal is ever built from it.
#[must_use]
pub fn date_prefix(raw: &str) -> Option<String> {
    CALENDAR_DATE
        .find(raw.trim())
        .map(|m| m.as_str().to_string())
}
