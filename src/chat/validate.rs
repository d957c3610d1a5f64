//! Per-kind input validation and correction.
//!
//! Every function here is total: dates return a named fault instead of
//! panicking, numbers are silently corrected into range, free text is only
//! trimmed.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

/// Why a date reply was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFault {
    /// Not in `Month D, YYYY` form at all.
    Malformed,
    /// Matched the pattern but is not a real calendar date.
    Invalid,
    /// A real date, but before today.
    Past,
}

/// Party size bounds. Out-of-range numbers clamp rather than reject.
pub const MIN_PARTY_SIZE: i64 = 1;
pub const MAX_PARTY_SIZE: i64 = 20;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),\s+(\d{4})$",
    )
    .expect("date regex is valid")
});

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(n)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `Month D, YYYY` string into a calendar date, if well formed.
pub fn parse_long_date(input: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(input.trim())?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a calendar date in the script's `Month D, YYYY` form.
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize).saturating_sub(1).min(11)]
}

/// Validate a date reply.
///
/// Accepted input is returned verbatim (trimmed only, never reformatted);
/// rejection names exactly one fault.
pub fn validate_date(input: &str) -> Result<String, DateFault> {
    let cleaned = input.trim();
    let caps = DATE_RE.captures(cleaned).ok_or(DateFault::Malformed)?;

    let month = month_number(&caps[1]).ok_or(DateFault::Malformed)?;
    let day: u32 = caps[2].parse().map_err(|_| DateFault::Invalid)?;
    let year: i32 = caps[3].parse().map_err(|_| DateFault::Invalid)?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateFault::Invalid)?;
    if date < today() {
        return Err(DateFault::Past);
    }
    Ok(cleaned.to_string())
}

/// Correct a party-size reply into `[MIN_PARTY_SIZE, MAX_PARTY_SIZE]`.
///
/// Parses the leading integer the way a forgiving form would ("5+" → 5);
/// anything non-numeric or below the minimum becomes the minimum.
pub fn correct_integer(input: &str) -> i64 {
    let trimmed = input.trim();
    let (sign, digits_start) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, 1),
        Some(b'+') => (1, 1),
        _ => (1, 0),
    };
    let digits: String = trimmed[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let parsed = digits.parse::<i64>().map(|n| sign * n);
    match parsed {
        Ok(n) if n > MAX_PARTY_SIZE => MAX_PARTY_SIZE,
        Ok(n) if n >= MIN_PARTY_SIZE => n,
        _ => MIN_PARTY_SIZE,
    }
}

/// Clean a free-text reply: trim surrounding whitespace only.
pub fn clean_text(input: &str) -> String {
    input.trim().to_string()
}
