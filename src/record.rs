//! Inbound work records as returned by the repository API.
//!
//! A [`WorkRecord`] is the deserialized form of one Figshare v2 article. Every
//! field is optional: the API omits keys freely, sends `null` for empty lists,
//! and is inconsistent about whether identifiers are numbers or strings. The
//! deserializers here absorb those differences so the mapper only ever sees
//! `Option<String>`, `Option<i64>` and plain vectors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{HarvestError, Result};

/// One scholarly work record as fetched from the repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkRecord {
    /// Internal source identifier (numeric in Figshare, kept as text).
    #[serde(deserialize_with = "de_opt_string")]
    pub id: Option<String>,
    /// Persistent identifier, possibly carrying a `.vN` version suffix.
    #[serde(deserialize_with = "de_opt_string")]
    pub doi: Option<String>,
    /// Work title.
    #[serde(deserialize_with = "de_opt_string")]
    pub title: Option<String>,
    /// Abstract / description.
    #[serde(deserialize_with = "de_opt_string")]
    pub description: Option<String>,
    /// Free-text keywords.
    #[serde(deserialize_with = "de_string_list")]
    pub tags: Vec<String>,
    /// Source-defined 1-based work type code.
    #[serde(deserialize_with = "de_opt_int")]
    pub defined_type: Option<i64>,
    /// ISO-8601 publication timestamp.
    #[serde(deserialize_with = "de_opt_string")]
    pub published_date: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(deserialize_with = "de_opt_string")]
    pub created_date: Option<String>,
    /// ISO-8601 modification timestamp.
    #[serde(deserialize_with = "de_opt_string")]
    pub modified_date: Option<String>,
    /// Version number of this deposit.
    #[serde(deserialize_with = "de_opt_int")]
    pub version: Option<i64>,
    /// Authors in credit order.
    #[serde(deserialize_with = "de_lenient_list")]
    pub authors: Vec<AuthorEntry>,
    /// Subject categories.
    #[serde(deserialize_with = "de_lenient_list")]
    pub categories: Vec<Category>,
    /// Files deposited with the work.
    #[serde(deserialize_with = "de_lenient_list")]
    pub files: Vec<FileEntry>,
    /// Declared primary landing page.
    #[serde(deserialize_with = "de_opt_string")]
    pub figshare_url: Option<String>,
    /// Public HTML page, ranked after the primary link.
    #[serde(deserialize_with = "de_opt_string")]
    pub url_public_html: Option<String>,
    /// Further related links, ranked after the public page.
    #[serde(deserialize_with = "de_string_list")]
    pub links: Vec<String>,
    /// Postal addresses; only the first is mapped.
    #[serde(deserialize_with = "de_lenient_list")]
    pub addresses: Vec<PostalAddress>,
    /// WGS84 latitude.
    #[serde(deserialize_with = "de_opt_f64")]
    pub latitude: Option<f64>,
    /// WGS84 longitude.
    #[serde(deserialize_with = "de_opt_f64")]
    pub longitude: Option<f64>,
    /// Contact email.
    #[serde(deserialize_with = "de_opt_string")]
    pub email: Option<String>,
}

/// One entry of a record's author list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorEntry {
    /// Source-local author identifier.
    #[serde(deserialize_with = "de_opt_string")]
    pub id: Option<String>,
    /// Display name as typed by the depositor.
    #[serde(deserialize_with = "de_string_or_empty")]
    pub full_name: String,
    /// Confirmed researcher identifier, when the author linked one.
    #[serde(alias = "orcid", deserialize_with = "de_opt_string")]
    pub orcid_id: Option<String>,
    /// URL slug of the author's profile page.
    #[serde(deserialize_with = "de_opt_string")]
    pub url_name: Option<String>,
}

/// A subject category attached to a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Source category identifier.
    #[serde(deserialize_with = "de_opt_string")]
    pub id: Option<String>,
    /// Category title.
    #[serde(deserialize_with = "de_string_or_empty")]
    pub title: String,
}

/// A file deposited with a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    /// Source file identifier, used in the download URL.
    #[serde(deserialize_with = "de_opt_string")]
    pub id: Option<String>,
    /// Original file name.
    #[serde(deserialize_with = "de_opt_string")]
    pub name: Option<String>,
}

/// A postal address on an organization-shaped record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    /// Street line.
    #[serde(deserialize_with = "de_opt_string")]
    pub street_address: Option<String>,
    /// City or town.
    #[serde(deserialize_with = "de_opt_string")]
    pub locality: Option<String>,
    /// State or province.
    #[serde(deserialize_with = "de_opt_string")]
    pub region: Option<String>,
    /// Postal code.
    #[serde(deserialize_with = "de_opt_string")]
    pub postal_code: Option<String>,
    /// Country name.
    #[serde(deserialize_with = "de_opt_string")]
    pub country: Option<String>,
}

impl PostalAddress {
    /// Returns true if no address component carries text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.street_address,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|part| non_empty(part).is_none())
    }
}

impl WorkRecord {
    /// Parses a record from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object of the expected shape.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Converts an already-parsed JSON value into a record.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidRecord`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(HarvestError::InvalidRecord(format!(
                "expected a JSON object, got {value}"
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns true if one of the record's tags equals `tag` exactly.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The source identifier, if present and non-blank.
    #[must_use]
    pub fn source_id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// The raw persistent identifier, if present and non-blank.
    #[must_use]
    pub fn raw_doi(&self) -> Option<&str> {
        non_empty(&self.doi)
    }

    /// Returns true if any contact-card field is populated.
    #[must_use]
    pub fn has_contact_fields(&self) -> bool {
        non_empty(&self.figshare_url).is_some()
            || non_empty(&self.url_public_html).is_some()
            || self.links.iter().any(|l| !l.trim().is_empty())
            || self.addresses.first().is_some_and(|a| !a.is_empty())
            || (self.latitude.is_some() && self.longitude.is_some())
            || non_empty(&self.email).is_some()
    }
}

/// Trims an optional string and discards it if nothing is left.
#[must_use]
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Accepts a string, number or null and yields an optional string.
fn de_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts an integer, a numeric string, or anything else (treated as absent).
fn de_opt_int<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts a string, number or anything else (treated as empty).
fn de_string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_string(deserializer)?.unwrap_or_default())
}

/// Accepts a number, a numeric string, or anything else (treated as absent).
fn de_opt_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// A list of strings. Numbers are stringified; other items are dropped; a
/// non-array value is an empty list.
fn de_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// A list of sub-records. Items that do not decode are dropped; a non-array
/// value is an empty list.
fn de_lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
