//! Year aggregation: drives a [`PageFetcher`] page by page and keeps the
//! concluded orders of the target year.
//!
//! Pages are requested strictly one at a time in increasing index order.
//! The loop stops after the first page that holds an order older than the
//! target year (that page is still filtered), or at the first empty page.

use crate::config;
use crate::credential::Credential;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::models::OrderRecord;

// ---------------------------------------------------------------------------
// YearFilter
// ---------------------------------------------------------------------------

/// Predicate selecting concluded orders created in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFilter {
    pub year: i32,
}

impl YearFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn matches(&self, order: &OrderRecord) -> bool {
        order.year() == self.year && order.last_status == config::CONCLUDED_STATUS
    }

    /// True if the order predates the target year.
    pub fn is_older(&self, order: &OrderRecord) -> bool {
        order.year() < self.year
    }

    /// Keep matching orders, preserving their order.
    pub fn apply<'a, I>(&self, orders: I) -> Vec<OrderRecord>
    where
        I: IntoIterator<Item = &'a OrderRecord>,
    {
        orders
            .into_iter()
            .filter(|o| self.matches(o))
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// YearlyOrderSet
// ---------------------------------------------------------------------------

/// Concluded orders of the target year, in fetch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyOrderSet {
    year: i32,
    orders: Vec<OrderRecord>,
    pages_fetched: u32,
}

impl YearlyOrderSet {
    /// Build a set from already fetched orders, keeping only those the
    /// year filter accepts.
    pub fn filtered<'a, I>(year: i32, orders: I) -> Self
    where
        I: IntoIterator<Item = &'a OrderRecord>,
    {
        Self {
            year,
            orders: YearFilter::new(year).apply(orders),
            pages_fetched: 0,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of page requests it took to build the set.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }
}

// ---------------------------------------------------------------------------
// Pagination loop
// ---------------------------------------------------------------------------

/// Fetch pages from index 0 until the year boundary or an empty page, and
/// collect the orders accepted by [`YearFilter`].
///
/// Any fetch error aborts the run; nothing partial is returned.
pub fn collect_year_orders<F>(
    fetcher: &mut F,
    credential: &Credential,
    year: i32,
) -> Result<YearlyOrderSet>
where
    F: PageFetcher + ?Sized,
{
    let filter = YearFilter::new(year);
    let mut accumulated = Vec::new();
    let mut has_older_year_order = false;
    let mut page = 0u32;

    while !has_older_year_order {
        let orders = fetcher.fetch_page(credential, page)?;
        page += 1;

        if orders.is_empty() {
            log::info!("Page {} is empty; no more orders", page - 1);
            break;
        }

        has_older_year_order = orders.iter().any(|o| filter.is_older(o));

        let before = accumulated.len();
        accumulated.extend(filter.apply(&orders));
        log::debug!(
            "Page {}: {} orders, {} kept for {}",
            page - 1,
            orders.len(),
            accumulated.len() - before,
            year
        );
    }

    if has_older_year_order {
        log::info!("Reached orders before {} on page {}", year, page - 1);
    }

    Ok(YearlyOrderSet {
        year,
        orders: accumulated,
        pages_fetched: page,
    })
}
