//! Statistics derivation tests.

mod common;

use common::{concluded, ScriptedFetcher};
use order_recap::models::MonthCount;
use order_recap::{analyze_year_with, RecapError, StatisticsReport, YearlyOrderSet};
use serde_json::json;

fn report_for(orders: &[order_recap::OrderRecord]) -> StatisticsReport {
    StatisticsReport::from_orders(&YearlyOrderSet::filtered(2025, orders)).unwrap()
}

// ---------------------------------------------------------------------------
// end-to-end example
// ---------------------------------------------------------------------------

#[test]
fn two_page_example() {
    let mut fetcher = ScriptedFetcher::new(vec![
        vec![concluded(1000, "2025-01-15"), concluded(500, "2025-02-01")],
        vec![concluded(300, "2024-12-20")],
    ]);

    let report = analyze_year_with(&mut fetcher, "test-token", 2025).unwrap();

    assert_eq!(fetcher.requested, vec![0, 1]);
    assert_eq!(report.year(), 2025);
    assert_eq!(report.total_spent(), 1500);
    assert_eq!(report.number_of_orders(), 2);
    assert_eq!(report.average_per_order(), 750.0);
    assert_eq!(report.most_expensive().value, 1000);
    assert_eq!(report.cheapest().value, 500);
    assert_eq!(
        report.orders_by_month(),
        &[
            MonthCount { month: 1, count: 1 },
            MonthCount { month: 2, count: 1 }
        ]
    );
    assert_eq!(report.average_orders_per_month(), 1.0);
}

// ---------------------------------------------------------------------------
// invariants
// ---------------------------------------------------------------------------

#[test]
fn totals_and_extremes_cover_every_order() {
    let orders = vec![
        concluded(4590, "2025-12-02"),
        concluded(1200, "2025-11-20"),
        concluded(8999, "2025-11-03"),
        concluded(350, "2025-07-14"),
        concluded(2710, "2025-03-30"),
    ];
    let report = report_for(&orders);

    let sum: i64 = orders.iter().map(|o| o.value).sum();
    assert_eq!(report.total_spent(), sum);
    assert_eq!(
        report.average_per_order(),
        sum as f64 / orders.len() as f64
    );
    assert!(orders.iter().all(|o| report.most_expensive().value >= o.value));
    assert!(orders.iter().all(|o| report.cheapest().value <= o.value));

    let counted: usize = report.orders_by_month().iter().map(|m| m.count).sum();
    assert_eq!(counted, report.number_of_orders());
}

#[test]
fn average_orders_per_month_ignores_months_without_orders() {
    let report = report_for(&[
        concluded(100, "2025-12-20"),
        concluded(100, "2025-12-10"),
        concluded(100, "2025-12-01"),
        concluded(100, "2025-01-05"),
    ]);

    assert_eq!(report.average_orders_per_month(), 2.0);
    assert_eq!(report.orders_in_month(12), Some(3));
    assert_eq!(report.orders_in_month(6), None);
}

#[test]
fn average_daily_spending_uses_fixed_year_length() {
    let report = report_for(&[concluded(36_500, "2025-06-01")]);

    assert_eq!(report.average_daily_spending(), 100.0);
}

// ---------------------------------------------------------------------------
// tie-breaking
// ---------------------------------------------------------------------------

#[test]
fn extreme_orders_prefer_first_encountered() {
    let report = report_for(&[
        concluded(1000, "2025-08-10"),
        concluded(200, "2025-07-01"),
        concluded(1000, "2025-05-05"),
        concluded(200, "2025-02-02"),
    ]);

    assert_eq!(
        report.most_expensive().created_at.format("%Y-%m-%d").to_string(),
        "2025-08-10"
    );
    assert_eq!(
        report.cheapest().created_at.format("%Y-%m-%d").to_string(),
        "2025-07-01"
    );
}

#[test]
fn months_keep_first_appearance_order_and_break_ties_by_it() {
    let report = report_for(&[
        concluded(100, "2025-03-20"),
        concluded(100, "2025-01-15"),
        concluded(100, "2025-03-02"),
        concluded(100, "2025-01-01"),
        concluded(100, "2025-02-11"),
    ]);

    let months: Vec<u32> = report.orders_by_month().iter().map(|m| m.month).collect();
    assert_eq!(months, vec![3, 1, 2]);
    assert_eq!(
        report.month_with_most_orders(),
        MonthCount { month: 3, count: 2 }
    );
    assert_eq!(
        report.month_with_least_orders(),
        MonthCount { month: 2, count: 1 }
    );
}

// ---------------------------------------------------------------------------
// empty input
// ---------------------------------------------------------------------------

#[test]
fn empty_set_is_an_empty_result_error() {
    let set = YearlyOrderSet::filtered(2025, &[concluded(100, "2024-01-01")]);

    let err = StatisticsReport::from_orders(&set).unwrap_err();

    assert!(matches!(err, RecapError::EmptyResult { year: 2025 }));
    assert_eq!(err.user_message(), "No orders found for 2025.");
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

#[test]
fn summary_formats_major_units_and_dates() {
    let report = report_for(&[
        concluded(123_456, "2025-01-15T19:42:10.000Z"),
        concluded(1000, "2025-03-02T12:00:00Z"),
        concluded(2000, "2025-03-05T12:00:00Z"),
    ]);

    let summary = report.summary();

    assert_eq!(summary.total_spent, "1264.56");
    assert_eq!(summary.number_of_orders, 3);
    assert_eq!(summary.average_per_order, "421.52");
    assert_eq!(summary.most_expensive.value, "1234.56");
    assert_eq!(summary.most_expensive.date, "15/01/2025");
    assert_eq!(summary.cheapest.value, "10.00");
    assert_eq!(summary.cheapest.date, "02/03/2025");
    assert_eq!(
        summary.orders_by_month,
        vec![
            MonthCount { month: 1, count: 1 },
            MonthCount { month: 3, count: 2 }
        ]
    );
    assert_eq!(summary.average_orders_per_month, "1.50");
    assert_eq!(summary.month_with_most_orders, MonthCount { month: 3, count: 2 });
    assert_eq!(summary.month_with_least_orders, MonthCount { month: 1, count: 1 });
    assert_eq!(summary.average_daily_spending, "3.46");
}

#[test]
fn summary_renders_as_text_and_json() {
    let report = report_for(&[concluded(2590, "2025-04-10")]);
    let summary = report.summary();

    let text = summary.to_string();
    assert!(text.contains("Total spent in 2025: R$ 25.90"));
    assert!(text.contains("Orders by month in 2025: 4: 1"));
    assert!(text.contains("Month with most orders in 2025: 4 with 1 orders"));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["totalSpent"], "25.90");
    assert_eq!(json["numberOfOrders"], 1);
    assert_eq!(json["mostExpensive"]["date"], "10/04/2025");
    assert_eq!(json["monthWithLeastOrders"]["month"], 4);
    assert_eq!(json["ordersByMonth"], json!([{ "month": 4, "count": 1 }]));
}

#[test]
fn orders_by_month_listed_in_first_appearance_order() {
    let report = report_for(&[
        concluded(100, "2025-11-02"),
        concluded(100, "2025-02-14"),
        concluded(100, "2025-11-20"),
    ]);

    let text = report.summary().to_string();

    assert!(text.contains("Orders by month in 2025: 11: 2, 2: 1"));
}

#[test]
fn half_cent_averages_round_up() {
    let report = report_for(&[
        concluded(25, "2025-06-10"),
        concluded(0, "2025-06-01"),
    ]);

    let summary = report.summary();

    assert_eq!(report.average_per_order(), 12.5);
    assert_eq!(summary.average_per_order, "0.13");
}

#[test]
fn average_orders_per_month_ties_round_up() {
    let report = report_for(&[
        concluded(100, "2025-08-01"),
        concluded(100, "2025-07-01"),
        concluded(100, "2025-06-01"),
        concluded(100, "2025-05-01"),
        concluded(100, "2025-04-01"),
        concluded(100, "2025-03-01"),
        concluded(100, "2025-02-01"),
        concluded(100, "2025-01-20"),
        concluded(100, "2025-01-10"),
    ]);

    assert_eq!(report.average_orders_per_month(), 1.125);
    assert_eq!(report.summary().average_orders_per_month, "1.13");
}
