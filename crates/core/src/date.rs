//! Calendar utilities: today resolution, ISO parsing, month bucketing.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{DomainError, DomainResult};

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a strict ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Dates are validated at the store boundary so that every stored date
/// compares the same whether ordered as a `NaiveDate` or as its ISO string.
pub fn parse_iso_date(raw: &str) -> DomainResult<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DomainError::invalid_date("empty date"));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| DomainError::invalid_date(format!("{text}: {e}")))
}

/// Year-month bucket key (`YYYY-MM`) for monthly rollups.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
