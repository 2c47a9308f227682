//! Stateless request builder and response parser for the book catalog.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the round-trip in between, so this module stays
//! deterministic and free of I/O.
//!
//! The service reports logical errors inside 200 responses as an object with
//! a `detail` field. Bodies are decoded eagerly into an [`Envelope`] so that a
//! `detail` always wins over any payload that may sit next to it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::query::Query;
use crate::types::{RawWork, Work};

/// Public instance used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com";

/// Preferred plain-text format key.
pub const TEXT_PLAIN: &str = "text/plain";
/// Plain-text key used when `TEXT_PLAIN` is absent.
pub const TEXT_PLAIN_ASCII: &str = "text/plain; charset=us-ascii";
/// Cover image format key.
pub const IMAGE_JPEG: &str = "image/jpeg";

/// A decoded response body: either the payload or the service's rejection.
#[derive(Debug, PartialEq, Eq)]
pub enum Envelope<T> {
    Accepted(T),
    Rejected(String),
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn decode(body: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| CatalogError::Deserialization(e.to_string()))?;

        if let Some(detail) = value.get("detail").and_then(detail_message) {
            return Ok(Envelope::Rejected(detail));
        }

        serde_json::from_value(value)
            .map(Envelope::Accepted)
            .map_err(|e| CatalogError::Deserialization(e.to_string()))
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Envelope::Accepted(payload) => Ok(payload),
            Envelope::Rejected(detail) => Err(CatalogError::RemoteRejection(detail)),
        }
    }
}

/// Message carried by a `detail` value, or `None` when the value is empty
/// (`null`, `false`, `0`, `""`) and the payload should be decoded instead.
fn detail_message(detail: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// One page of the collection endpoint. Only `results` is consumed.
#[derive(Debug, Deserialize)]
struct Page {
    results: Vec<RawWork>,
}

/// Synchronous, stateless client for the book catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_works(&self, query: &Query) -> HttpRequest {
        let params = query.params();
        let url = if params.is_empty() {
            format!("{}/books", self.base_url)
        } else {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())))
                .finish();
            format!("{}/books?{encoded}", self.base_url)
        };
        json_request(url)
    }

    pub fn build_get_work(&self, id: u64) -> HttpRequest {
        json_request(format!("{}/books/{id}", self.base_url))
    }

    /// Request for the work's plain-text body, see [`CatalogClient::text_url`].
    pub fn build_text_request(&self, work: &Work) -> Result<HttpRequest> {
        Ok(HttpRequest {
            url: self.text_url(work)?.to_string(),
            headers: Vec::new(),
        })
    }

    pub fn parse_list_works(&self, response: HttpResponse) -> Result<Vec<Work>> {
        check_status(&response)?;
        let page = Envelope::<Page>::decode(&response.body)?.into_result()?;
        debug!(count = page.results.len(), "decoded result page");
        page.results.into_iter().map(Work::decode).collect()
    }

    pub fn parse_get_work(&self, response: HttpResponse) -> Result<Work> {
        check_status(&response)?;
        let raw = Envelope::<RawWork>::decode(&response.body)?.into_result()?;
        Work::decode(raw)
    }

    pub fn parse_text(&self, response: HttpResponse) -> Result<String> {
        check_status(&response)?;
        Ok(response.body)
    }

    /// Plain-text URL for `work`: `text/plain`, falling back to
    /// `text/plain; charset=us-ascii`.
    pub fn text_url<'w>(&self, work: &'w Work) -> Result<&'w str> {
        if let Some(url) = work.format(TEXT_PLAIN) {
            return Ok(url);
        }
        debug!(id = work.id(), "no {TEXT_PLAIN} format, trying {TEXT_PLAIN_ASCII}");
        work.format(TEXT_PLAIN_ASCII)
            .ok_or_else(|| CatalogError::FormatUnavailable {
                id: work.id(),
                format: TEXT_PLAIN.to_string(),
            })
    }

    /// Cover image URL for `work`. Only the URL is resolved; nothing is fetched.
    pub fn cover_url<'w>(&self, work: &'w Work) -> Result<&'w str> {
        work.format(IMAGE_JPEG)
            .ok_or_else(|| CatalogError::FormatUnavailable {
                id: work.id(),
                format: IMAGE_JPEG.to_string(),
            })
    }
}

fn json_request(url: String) -> HttpRequest {
    HttpRequest {
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

/// Map any non-2xx status to `CatalogError::Transport`.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(CatalogError::Transport {
        status: response.status,
        body: response.body.clone(),
    })
}
