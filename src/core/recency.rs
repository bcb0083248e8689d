// src/core/recency.rs
//! Recency ordering for CV entries
//!
//! Education and experience carry free-text year strings ("2022", "2015-2019",
//! "02/2021-Present"). Certificates, badges and posts carry exact dates.
//! Both are listed most recent first.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// End marker for an ongoing timeframe
pub const PRESENT: &str = "Present";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Records ordered by a human-authored year or year-range string
pub trait YearRange {
    fn year_range(&self) -> &str;
}

/// Records ordered by an exact date
pub trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

/// End component of a year-range string: the part after the first hyphen,
/// or the whole string when there is none.
pub fn end_token(range: &str) -> &str {
    let mut parts = range.split('-');
    let first = parts.next().unwrap_or(range);
    parts.next().unwrap_or(first)
}

/// Compare two year-range strings by their end component.
///
/// `Greater` means `a` is more recent. A range ending in "Present" outranks
/// any year; two "Present" ranges are equal. Remaining tokens are compared
/// as strings, so "999" sorts after "1000".
pub fn compare_year_ranges(a: &str, b: &str) -> Ordering {
    let end_a = end_token(a);
    let end_b = end_token(b);

    match (end_a == PRESENT, end_b == PRESENT) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => end_a.cmp(end_b),
    }
}

/// Sort year-range records most recent first
pub fn sort_by_recency<T: YearRange>(records: &mut [T]) {
    records.sort_by(|a, b| compare_year_ranges(b.year_range(), a.year_range()));
}

/// Sort dated records most recent first
pub fn sort_by_date<T: Dated>(records: &mut [T]) {
    records.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// Parse a `YYYY-MM-DD` literal to midnight UTC
pub fn parse_date(literal: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(literal, DATE_FORMAT)
        .with_context(|| format!("Invalid date literal: {:?}", literal))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
