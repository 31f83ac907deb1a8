//! Page fetching from the paginated orders API.
//!
//! [`PageFetcher`] is the capability the aggregator drives. Implementations
//! must return pages in non-increasing `createdAt` order (newest first);
//! the year-boundary stop condition depends on it.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;

use crate::config;
use crate::credential::Credential;
use crate::error::Result;
use crate::models::{OrderRecord, RawOrder};

// ---------------------------------------------------------------------------
// PageFetcher
// ---------------------------------------------------------------------------

/// Source of order pages, indexed from zero.
///
/// One call is one request; implementations do not retry or cache.
pub trait PageFetcher {
    fn fetch_page(&mut self, credential: &Credential, page: u32) -> Result<Vec<OrderRecord>>;
}

impl<F> PageFetcher for F
where
    F: FnMut(&Credential, u32) -> Result<Vec<OrderRecord>>,
{
    fn fetch_page(&mut self, credential: &Credential, page: u32) -> Result<Vec<OrderRecord>> {
        self(credential, page)
    }
}

// ---------------------------------------------------------------------------
// HttpPageFetcher
// ---------------------------------------------------------------------------

/// Fetches pages over HTTP with a blocking `reqwest` client.
pub struct HttpPageFetcher {
    base_url: String,
    page_size: u32,
    timeout: Duration,
    client: Option<Client>,
}

impl HttpPageFetcher {
    pub fn new(base_url: &str, page_size: u32, timeout: Duration) -> Self {
        Self {
            base_url: base_url.to_string(),
            page_size,
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use. Clones share one pool.
    fn client(&mut self) -> Result<Client> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Drop the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch_page(&mut self, credential: &Credential, page: u32) -> Result<Vec<OrderRecord>> {
        let url = config::orders_url(&self.base_url, page, self.page_size);
        log::debug!("GET {}", url);

        let client = self.client()?;
        let resp = client
            .get(&url)
            .header(AUTHORIZATION, credential.header_value())
            .header(ACCEPT, "application/json")
            .send()?
            .error_for_status()?;
        let body: Value = resp.json()?;
        parse_page(body)
    }
}

/// Normalize a decoded response body into order records.
///
/// The body must be a JSON array of orders; any other shape, or an element
/// missing `payments.total.value`, `createdAt` or `lastStatus`, is an error.
pub fn parse_page(body: Value) -> Result<Vec<OrderRecord>> {
    let raw: Vec<RawOrder> = serde_json::from_value(body)?;
    raw.into_iter().map(RawOrder::normalize).collect()
}
