//! Date and time helpers: instant breakdowns, age, day arithmetic.
//!
//! Functions take the reference "now"/"today" as an argument so results
//! are reproducible; the CLI passes the current clock.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::ToolError;

// ── Parsing ─────────────────────────────────────────────────────────

/// Accepted input forms, tried in order: RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DD` (midnight), and epoch seconds. Bare forms are read as UTC.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, ToolError> {
    let trimmed = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(epoch) = trimmed.parse::<i64>() {
        if let Some(instant) = DateTime::from_timestamp(epoch, 0) {
            return Ok(instant);
        }
    }
    Err(ToolError::Parse {
        format: "date".to_string(),
        reason: format!("'{trimmed}' is not RFC 3339, YYYY-MM-DD [HH:MM:SS], or epoch seconds"),
    })
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| ToolError::Parse {
        format: "date".to_string(),
        reason: format!("'{}': {e}", input.trim()),
    })
}

// ── Instant breakdown ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBreakdown {
    pub iso: String,
    pub utc: String,
    pub local: String,
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub relative: String,
}

pub fn breakdown(instant: DateTime<Utc>, now: DateTime<Utc>) -> DateBreakdown {
    DateBreakdown {
        iso: instant.to_rfc3339(),
        utc: instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        local: instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        unix_seconds: instant.timestamp(),
        unix_millis: instant.timestamp_millis(),
        relative: relative_day(instant.date_naive(), now.date_naive()),
    }
}

/// Calendar-day distance in words.
pub fn relative_day(target: NaiveDate, today: NaiveDate) -> String {
    let days = (target - today).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d => format!("In {d} days"),
    }
}

// ── Age ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeInfo {
    pub years: i32,
    pub days_until_birthday: i64,
}

/// Age in completed years plus days until the next birthday (0 on the
/// birthday itself). A Feb 29 birthday falls on Mar 1 in common years.
pub fn age(birth: NaiveDate, today: NaiveDate) -> Result<AgeInfo, ToolError> {
    if birth > today {
        return Err(ToolError::Range {
            field: "birth date".to_string(),
            reason: "birth date is in the future".to_string(),
        });
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    let upcoming = next_birthday(birth, today);
    Ok(AgeInfo {
        years,
        days_until_birthday: (upcoming - today).num_days(),
    })
}

fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday_in_year(birth, today.year());
    if this_year >= today {
        this_year
    } else {
        birthday_in_year(birth, today.year() + 1)
    }
}

fn birthday_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

// ── Day arithmetic ──────────────────────────────────────────────────

/// Whole days between two dates, regardless of argument order.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}

pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, ToolError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| ToolError::Range {
            field: "days".to_string(),
            reason: format!("adding {days} days leaves the supported calendar"),
        })
}
