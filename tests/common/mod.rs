//! Shared test fixtures for the order recap integration tests.
//!
//! Provides order builders, a scripted in-memory `PageFetcher`, and
//! helpers for stubbing orders pages on a `mockito` server.

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server};
use order_recap::{config, Credential, OrderRecord, PageFetcher, Result};

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

pub fn order(value: i64, created_at: &str, status: &str) -> OrderRecord {
    OrderRecord::new(value, created_at, status).unwrap()
}

pub fn concluded(value: i64, created_at: &str) -> OrderRecord {
    order(value, created_at, "CONCLUDED")
}

pub fn credential() -> Credential {
    Credential::new("test-token").unwrap()
}

/// One order element shaped like the API response, with some unrelated
/// fields the normalizer must ignore.
pub fn api_order(value: i64, created_at: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("order-{value}"),
        "createdAt": created_at,
        "lastStatus": status,
        "merchant": { "name": "Pizzaria" },
        "payments": {
            "total": { "value": value, "currency": "BRL" },
            "methods": []
        }
    })
}

// ---------------------------------------------------------------------------
// ScriptedFetcher
// ---------------------------------------------------------------------------

/// Serves fixed pages and records every requested index. Pages past the
/// end of the script are empty.
pub struct ScriptedFetcher {
    pages: Vec<Vec<OrderRecord>>,
    pub requested: Vec<u32>,
}

impl ScriptedFetcher {
    pub fn new(pages: Vec<Vec<OrderRecord>>) -> Self {
        Self {
            pages,
            requested: Vec::new(),
        }
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch_page(&mut self, _credential: &Credential, page: u32) -> Result<Vec<OrderRecord>> {
        self.requested.push(page);
        Ok(self.pages.get(page as usize).cloned().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// mockito helpers
// ---------------------------------------------------------------------------

/// Query matcher for `page=<page>&size=25`.
pub fn page_query(page: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("size".into(), config::PAGE_SIZE.to_string()),
    ])
}

/// Stub one orders page answered only for the given bearer token.
/// Expects exactly one hit.
pub fn mock_page(server: &mut Server, page: u32, token: &str, body: &serde_json::Value) -> Mock {
    server
        .mock("GET", config::ORDERS_PATH)
        .match_query(page_query(page))
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create()
}

/// Stub a page that must never be requested.
pub fn mock_unrequested_page(server: &mut Server, page: u32) -> Mock {
    server
        .mock("GET", config::ORDERS_PATH)
        .match_query(page_query(page))
        .with_status(200)
        .with_body("[]")
        .expect(0)
        .create()
}

/// Stub page 0 with a fixed status and raw body, for any token.
pub fn mock_status(server: &mut Server, status: usize, body: &str) -> Mock {
    server
        .mock("GET", config::ORDERS_PATH)
        .match_query(page_query(0))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create()
}
