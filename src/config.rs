use std::time::Duration;

pub const API_BASE: &str = "https://cw-marketplace.ifood.com.br";
pub const ORDERS_PATH: &str = "/v4/customers/me/orders";

/// Nominal number of orders per page requested from the API.
pub const PAGE_SIZE: u32 = 25;

/// Lifecycle status of an order that was delivered and paid.
pub const CONCLUDED_STATUS: &str = "CONCLUDED";

/// Fixed divisor for the daily spending average (not leap-year aware).
pub const DAYS_IN_YEAR: i64 = 365;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_TARGET_YEAR: i32 = 2025;

/// pt-BR locale date layout used in report summaries.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn orders_url(base: &str, page: u32, size: u32) -> String {
    format!(
        "{}{}?page={}&size={}",
        base.trim_end_matches('/'),
        ORDERS_PATH,
        page,
        size
    )
}
