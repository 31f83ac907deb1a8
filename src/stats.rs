//! Statistics derivation over a finalized [`YearlyOrderSet`].
//!
//! Ties resolve to the first candidate in iteration order: for orders that
//! is fetch order (newest first), for months it is the order in which each
//! month first appears in the set.

use crate::aggregator::YearlyOrderSet;
use crate::config;
use crate::error::{RecapError, Result};
use crate::models::{MonthCount, OrderHighlight, OrderRecord, StatisticsReport};

impl StatisticsReport {
    /// Compute the report for a set of yearly orders.
    ///
    /// An empty set is a [`RecapError::EmptyResult`] error.
    pub fn from_orders(set: &YearlyOrderSet) -> Result<Self> {
        let orders = set.orders();
        let (first, rest) = orders
            .split_first()
            .ok_or(RecapError::EmptyResult { year: set.year() })?;

        let total_spent: i64 = orders.iter().map(|o| o.value).sum();
        let number_of_orders = orders.len();

        let mut most_expensive = first;
        let mut cheapest = first;
        for order in rest {
            if order.value > most_expensive.value {
                most_expensive = order;
            }
            if order.value < cheapest.value {
                cheapest = order;
            }
        }

        let orders_by_month = count_by_month(orders);
        let (most, least) = month_extremes(&orders_by_month);
        let counted: usize = orders_by_month.iter().map(|m| m.count).sum();

        log::info!(
            "Built report for {}: {} orders over {} months",
            set.year(),
            number_of_orders,
            orders_by_month.len()
        );

        Ok(StatisticsReport {
            year: set.year(),
            total_spent,
            number_of_orders,
            average_per_order: total_spent as f64 / number_of_orders as f64,
            most_expensive: highlight(most_expensive),
            cheapest: highlight(cheapest),
            average_orders_per_month: counted as f64 / orders_by_month.len() as f64,
            month_with_most_orders: most,
            month_with_least_orders: least,
            average_daily_spending: total_spent as f64 / config::DAYS_IN_YEAR as f64,
            orders_by_month,
        })
    }
}

fn highlight(order: &OrderRecord) -> OrderHighlight {
    OrderHighlight {
        value: order.value,
        created_at: order.created_at,
    }
}

/// Per-month counts, keyed in order of first appearance.
fn count_by_month(orders: &[OrderRecord]) -> Vec<MonthCount> {
    let mut months: Vec<MonthCount> = Vec::new();
    for order in orders {
        let month = order.month();
        match months.iter_mut().find(|m| m.month == month) {
            Some(entry) => entry.count += 1,
            None => months.push(MonthCount { month, count: 1 }),
        }
    }
    months
}

/// Months with the most and the fewest orders. `months` is non-empty.
fn month_extremes(months: &[MonthCount]) -> (MonthCount, MonthCount) {
    let mut most = months[0];
    let mut least = months[0];
    for &m in &months[1..] {
        if m.count > most.count {
            most = m;
        }
        if m.count < least.count {
            least = m;
        }
    }
    (most, least)
}
