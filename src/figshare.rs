//! Figshare v2 API client.
//!
//! A blocking [`RecordSource`] over the public Figshare REST API. Listings
//! return article summaries; [`RecordSource::fetch`] retrieves the full
//! record with authors, categories and dates.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{HarvestError, Result};
use crate::harvest::{RecordSource, WorkQuery};
use crate::record::WorkRecord;

/// Public API root.
pub const DEFAULT_BASE_URL: &str = "https://api.figshare.com/v2";

/// Listing page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Blocking HTTP client for the Figshare v2 API.
#[derive(Debug, Clone)]
pub struct FigshareClient {
    http: reqwest::blocking::Client,
    base_url: String,
    page_size: usize,
    max_pages: usize,
}

impl FigshareClient {
    /// Creates a client against the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against another API root (a mirror or test server).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("figvivo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: 100,
        })
    }

    /// Sets the listing page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Caps the number of listing pages requested per query.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// URL of one article's full record.
    #[must_use]
    pub fn article_url(&self, id: &str) -> String {
        format!("{}/articles/{id}", self.base_url)
    }

    /// Query parameters for one listing page.
    #[must_use]
    pub fn listing_params(&self, query: &WorkQuery, page: usize) -> Vec<(&'static str, String)> {
        let mut params = match query {
            WorkQuery::Institution(id) => vec![("institution", id.clone())],
            WorkQuery::Search(term) => vec![("search_for", term.clone())],
            WorkQuery::Article(_) => Vec::new(),
        };
        params.push(("page_size", self.page_size.to_string()));
        params.push(("page", page.to_string()));
        params
    }

    fn get_json(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value> {
        debug!(url, ?params, "GET");
        let response = self
            .http
            .get(url)
            .query(params)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

impl RecordSource for FigshareClient {
    fn list(&self, query: &WorkQuery) -> Result<Vec<WorkRecord>> {
        if let WorkQuery::Article(id) = query {
            return Ok(vec![self.fetch(id)?]);
        }

        let url = format!("{}/articles", self.base_url);
        let mut records = Vec::new();
        for page in 1..=self.max_pages {
            let body = self.get_json(&url, &self.listing_params(query, page))?;
            let (page_records, count) = decode_listing_page(body)?;
            records.extend(page_records);
            debug!(page, count, "listing page");
            if count < self.page_size {
                break;
            }
        }
        Ok(records)
    }

    fn fetch(&self, id: &str) -> Result<WorkRecord> {
        WorkRecord::from_value(self.get_json(&self.article_url(id), &[])?)
    }
}

/// Decodes one listing page, returning its readable records and the number
/// of entries the page held. Unreadable entries are logged and skipped.
fn decode_listing_page(body: Value) -> Result<(Vec<WorkRecord>, usize)> {
    let Value::Array(items) = body else {
        return Err(HarvestError::InvalidRecord(
            "article listing is not a JSON array".to_string(),
        ));
    };
    let count = items.len();
    let records = items
        .into_iter()
        .filter_map(|item| match WorkRecord::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "unreadable listing entry skipped");
                None
            },
        })
        .collect();
    Ok((records, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_page_skips_unreadable_entries() {
        let (records, count) = decode_listing_page(json!([
            {"id": 1, "tags": ["a", 5], "latitude": "29.6"},
            "not an article",
            {"id": 3}
        ]))
        .unwrap();
        assert_eq!(count, 3);
        let ids: Vec<_> = records.iter().filter_map(WorkRecord::source_id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(records[0].latitude, Some(29.6));

        assert!(decode_listing_page(json!({"message": "rate limited"})).is_err());
    }

    #[test]
    fn test_article_url() {
        let client = FigshareClient::with_base_url("http://localhost:1/v2/").unwrap();
        assert_eq!(client.article_url("3117808"), "http://localhost:1/v2/articles/3117808");
    }

    #[test]
    fn test_listing_params() {
        let client = FigshareClient::new().unwrap().with_page_size(50);
        assert_eq!(
            client.listing_params(&WorkQuery::Institution("2".into()), 3),
            vec![
                ("institution", "2".to_string()),
                ("page_size", "50".to_string()),
                ("page", "3".to_string()),
            ]
        );
        let search = client.listing_params(&WorkQuery::Search("vivo16".into()), 1);
        assert_eq!(search[0], ("search_for", "vivo16".to_string()));
    }
}
