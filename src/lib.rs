//! Yearly order recap.
//!
//! Walks a user's paginated order history newest-first, keeps the concluded
//! orders of one calendar year, and derives spending statistics from them.
//!
//! # Quick start
//!
//! ```no_run
//! use order_recap::OrderRecap;
//!
//! let mut recap = OrderRecap::builder().build().unwrap();
//! let report = recap.analyze_year("my-token", 2025).unwrap();
//! println!("{}", report.summary());
//! ```

pub mod aggregator;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod credential;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod stats;

pub use aggregator::{collect_year_orders, YearFilter, YearlyOrderSet};
#[cfg(feature = "async")]
pub use async_client::AsyncOrderRecap;
pub use credential::Credential;
pub use error::{ErrorCategory, RecapError, Result};
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use models::{OrderRecord, ReportSummary, StatisticsReport};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// OrderRecapBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OrderRecap`] client.
pub struct OrderRecapBuilder {
    base_url: String,
    page_size: u32,
    timeout: Duration,
}

impl Default for OrderRecapBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            page_size: config::PAGE_SIZE,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl OrderRecapBuilder {
    /// Override the API origin (scheme, host and optional port).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Number of orders requested per page. Defaults to 25.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Per-request HTTP timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No request is made until the first analysis.
    pub fn build(self) -> Result<OrderRecap> {
        if self.page_size == 0 {
            return Err(RecapError::InvalidArgument(
                "page size must be greater than zero".into(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(RecapError::InvalidArgument("base URL is empty".into()));
        }
        Ok(OrderRecap {
            fetcher: HttpPageFetcher::new(&self.base_url, self.page_size, self.timeout),
            base_url: self.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// OrderRecap
// ---------------------------------------------------------------------------

/// Client that analyzes a user's orders for a target year.
///
/// Each call to [`analyze_year`](Self::analyze_year) is an independent run
/// starting from page 0; nothing is carried over between runs.
pub struct OrderRecap {
    fetcher: HttpPageFetcher,
    base_url: String,
}

impl OrderRecap {
    /// Create a new builder for configuring the client.
    pub fn builder() -> OrderRecapBuilder {
        OrderRecapBuilder::default()
    }

    /// Fetch the year's concluded orders over HTTP and build the report.
    ///
    /// The credential is validated before any request is made.
    pub fn analyze_year(&mut self, credential: &str, year: i32) -> Result<StatisticsReport> {
        analyze_year_with(&mut self.fetcher, credential, year)
    }

    /// Release the HTTP client. A later analysis opens a new one.
    pub fn close(&mut self) {
        self.fetcher.close();
    }
}

/// Run one analysis against any [`PageFetcher`].
pub fn analyze_year_with<F>(fetcher: &mut F, credential: &str, year: i32) -> Result<StatisticsReport>
where
    F: PageFetcher + ?Sized,
{
    let credential = Credential::new(credential)?;
    let orders = collect_year_orders(fetcher, &credential, year)?;
    log::info!(
        "Collected {} concluded orders for {} from {} pages",
        orders.len(),
        year,
        orders.pages_fetched()
    );
    StatisticsReport::from_orders(&orders)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for OrderRecap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderRecap(base_url={}, page_size={})",
            self.base_url,
            self.fetcher.page_size()
        )
    }
}
