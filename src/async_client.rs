//! Async wrapper around [`OrderRecap`] for use in async runtimes (Tokio, etc.).
//!
//! Runs each analysis on the blocking thread pool via
//! [`tokio::task::spawn_blocking`]. Pages are still fetched one at a time.
//! Dropping the returned future discards the run's result; the blocking
//! task finishes its current page loop in the background.
//!
//! # Example
//!
//! ```no_run
//! use order_recap::AsyncOrderRecap;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let recap = AsyncOrderRecap::builder().build().await.unwrap();
//!     let report = recap.analyze_year("my-token", 2025).await.unwrap();
//!     println!("{}", report.summary());
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{RecapError, Result};
use crate::{OrderRecap, StatisticsReport};

// ---------------------------------------------------------------------------
// AsyncOrderRecapBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncOrderRecap`] instance.
#[derive(Default)]
pub struct AsyncOrderRecapBuilder {
    base_url: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
}

impl AsyncOrderRecapBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the async client on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncOrderRecap> {
        tokio::task::spawn_blocking(move || {
            let mut builder = OrderRecap::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(&url);
            }
            if let Some(size) = self.page_size {
                builder = builder.page_size(size);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            Ok(AsyncOrderRecap {
                inner: Arc::new(Mutex::new(builder.build()?)),
            })
        })
        .await
        .map_err(|e| RecapError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncOrderRecap
// ---------------------------------------------------------------------------

/// Async wrapper around [`OrderRecap`].
///
/// The blocking client lives behind a [`Mutex`], so concurrent calls on the
/// same instance run one after the other.
pub struct AsyncOrderRecap {
    inner: Arc<Mutex<OrderRecap>>,
}

impl AsyncOrderRecap {
    pub fn builder() -> AsyncOrderRecapBuilder {
        AsyncOrderRecapBuilder::default()
    }

    /// Run a blocking client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut OrderRecap) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let recap = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = recap
                .lock()
                .map_err(|_| RecapError::InvalidArgument("client lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| RecapError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Analyze a year asynchronously.
    ///
    /// The HTTP client is released on the blocking thread once the run ends;
    /// a blocking client must not be dropped inside the runtime.
    pub async fn analyze_year(&self, credential: &str, year: i32) -> Result<StatisticsReport> {
        let credential = credential.to_string();
        self.run(move |r| {
            let result = r.analyze_year(&credential, year);
            r.close();
            result
        })
        .await
    }
}
