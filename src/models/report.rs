use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::config;

// ---------------------------------------------------------------------------
// OrderHighlight — An order singled out by the report (most expensive, cheapest)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHighlight {
    pub value: i64,
    pub created_at: DateTime<FixedOffset>,
}

// ---------------------------------------------------------------------------
// MonthCount — Orders placed in one calendar month
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: u32,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// StatisticsReport — Derived yearly statistics
// ---------------------------------------------------------------------------

/// Read-only statistics for one target year.
///
/// Built once by [`StatisticsReport::from_orders`]; there are
/// no mutating methods. Money fields are in minor currency units; averages
/// keep their fractional part until formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub(crate) year: i32,
    pub(crate) total_spent: i64,
    pub(crate) number_of_orders: usize,
    pub(crate) average_per_order: f64,
    pub(crate) most_expensive: OrderHighlight,
    pub(crate) cheapest: OrderHighlight,
    pub(crate) orders_by_month: Vec<MonthCount>,
    pub(crate) average_orders_per_month: f64,
    pub(crate) month_with_most_orders: MonthCount,
    pub(crate) month_with_least_orders: MonthCount,
    pub(crate) average_daily_spending: f64,
}

impl StatisticsReport {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn total_spent(&self) -> i64 {
        self.total_spent
    }

    pub fn number_of_orders(&self) -> usize {
        self.number_of_orders
    }

    pub fn average_per_order(&self) -> f64 {
        self.average_per_order
    }

    pub fn most_expensive(&self) -> &OrderHighlight {
        &self.most_expensive
    }

    pub fn cheapest(&self) -> &OrderHighlight {
        &self.cheapest
    }

    /// Monthly counts in order of each month's first appearance in the data.
    /// Months without orders are absent.
    pub fn orders_by_month(&self) -> &[MonthCount] {
        &self.orders_by_month
    }

    /// Count for a single month, or `None` if no order fell in it.
    pub fn orders_in_month(&self, month: u32) -> Option<usize> {
        self.orders_by_month
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.count)
    }

    pub fn average_orders_per_month(&self) -> f64 {
        self.average_orders_per_month
    }

    pub fn month_with_most_orders(&self) -> MonthCount {
        self.month_with_most_orders
    }

    pub fn month_with_least_orders(&self) -> MonthCount {
        self.month_with_least_orders
    }

    pub fn average_daily_spending(&self) -> f64 {
        self.average_daily_spending
    }

    /// Presentation view with currency in major units and formatted dates.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            year: self.year,
            total_spent: format_major(self.total_spent as f64),
            number_of_orders: self.number_of_orders,
            average_per_order: format_major(self.average_per_order),
            most_expensive: HighlightSummary::from(&self.most_expensive),
            cheapest: HighlightSummary::from(&self.cheapest),
            orders_by_month: self.orders_by_month.clone(),
            average_orders_per_month: format_ratio(self.average_orders_per_month),
            month_with_most_orders: self.month_with_most_orders,
            month_with_least_orders: self.month_with_least_orders,
            average_daily_spending: format_major(self.average_daily_spending),
        }
    }
}

/// Convert minor units to a two-decimal major-unit string. Half-cent ties
/// round away from zero.
pub fn format_major(minor: f64) -> String {
    format!("{:.2}", minor.round() / 100.0)
}

/// Two-decimal string for a plain ratio, ties away from zero.
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

// ---------------------------------------------------------------------------
// ReportSummary — Flat, display-ready report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSummary {
    pub value: String,
    pub date: String,
}

impl From<&OrderHighlight> for HighlightSummary {
    fn from(h: &OrderHighlight) -> Self {
        Self {
            value: format_major(h.value as f64),
            date: h.created_at.format(config::DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub year: i32,
    pub total_spent: String,
    pub number_of_orders: usize,
    pub average_per_order: String,
    pub most_expensive: HighlightSummary,
    pub cheapest: HighlightSummary,
    pub orders_by_month: Vec<MonthCount>,
    pub average_orders_per_month: String,
    pub month_with_most_orders: MonthCount,
    pub month_with_least_orders: MonthCount,
    pub average_daily_spending: String,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let y = self.year;
        writeln!(f, "Total spent in {y}: R$ {}", self.total_spent)?;
        writeln!(f, "Number of orders in {y}: {}", self.number_of_orders)?;
        writeln!(f, "Average per order in {y}: R$ {}", self.average_per_order)?;
        writeln!(
            f,
            "Most expensive order in {y}: R$ {} on {}",
            self.most_expensive.value, self.most_expensive.date
        )?;
        writeln!(
            f,
            "Cheapest order in {y}: R$ {} on {}",
            self.cheapest.value, self.cheapest.date
        )?;
        let months: Vec<String> = self
            .orders_by_month
            .iter()
            .map(|m| format!("{}: {}", m.month, m.count))
            .collect();
        writeln!(f, "Orders by month in {y}: {}", months.join(", "))?;
        writeln!(
            f,
            "Average orders per month in {y}: {}",
            self.average_orders_per_month
        )?;
        writeln!(
            f,
            "Month with most orders in {y}: {} with {} orders",
            self.month_with_most_orders.month, self.month_with_most_orders.count
        )?;
        writeln!(
            f,
            "Month with least orders in {y}: {} with {} orders",
            self.month_with_least_orders.month, self.month_with_least_orders.count
        )?;
        write!(
            f,
            "Average daily spending in {y}: R$ {}",
            self.average_daily_spending
        )
    }
}
