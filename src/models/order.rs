use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::{RecapError, Result};

// ---------------------------------------------------------------------------
// RawOrder — One element of the orders API response
// ---------------------------------------------------------------------------

/// Order as returned by the API. Only the projected fields are modeled;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    pub payments: RawPayments,
    pub created_at: String,
    pub last_status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPayments {
    pub total: RawAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAmount {
    pub value: i64,
}

impl RawOrder {
    /// Project the API shape onto an [`OrderRecord`].
    pub fn normalize(self) -> Result<OrderRecord> {
        Ok(OrderRecord {
            value: self.payments.total.value,
            created_at: parse_timestamp(&self.created_at)?,
            last_status: self.last_status,
        })
    }
}

// ---------------------------------------------------------------------------
// OrderRecord — Normalized order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    /// Total paid, in minor currency units (cents).
    pub value: i64,
    pub created_at: DateTime<FixedOffset>,
    pub last_status: String,
}

impl OrderRecord {
    /// Build a record from a timestamp string, parsed the same way as API data.
    pub fn new(value: i64, created_at: &str, last_status: &str) -> Result<Self> {
        Ok(Self {
            value,
            created_at: parse_timestamp(created_at)?,
            last_status: last_status.to_string(),
        })
    }

    pub fn year(&self) -> i32 {
        self.created_at.year()
    }

    /// Calendar month, 1-12.
    pub fn month(&self) -> u32 {
        self.created_at.month()
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, a naive date-time (seconds optional),
/// or a bare date.
/// Values without an offset are taken as UTC. The calendar fields of the
/// result are those of the timestamp's own offset.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc().fixed_offset());
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset()),
        Err(source) => Err(RecapError::Timestamp {
            value: value.to_string(),
            source,
        }),
    }
}
