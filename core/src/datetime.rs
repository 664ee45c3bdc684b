// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, Time};
use jiff::{SignedDuration, Span};

const FORMAT_DATE: &str = "%Y-%m-%d";
const FORMAT_DATETIME: &str = "%Y-%m-%d %H:%M";

/// Errors from parsing user supplied dates and times.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not a recognized date.
    #[error("Invalid date '{0}'. Expected format: YYYY-MM-DD, today, tomorrow or yesterday")]
    InvalidDate(String),

    /// Not a recognized date and time.
    #[error(
        "Invalid time '{0}'. Expected format: YYYY-MM-DD HH:MM, YYYY-MM-DD, HH:MM, now, tomorrow, or a relative time like 30m, 2h, 3d"
    )]
    InvalidDateTime(String),
}

/// The current local date and time in the system time zone.
pub fn now_local() -> DateTime {
    jiff::Zoned::now().datetime()
}

/// `now` shifted by `minutes`, saturating at the supported range.
pub fn minutes_from_now(now: DateTime, minutes: i64) -> DateTime {
    now.saturating_add(SignedDuration::from_mins(minutes))
}

/// Formats as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(dt: DateTime) -> String {
    dt.strftime(FORMAT_DATETIME).to_string()
}

/// Formats as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.strftime(FORMAT_DATE).to_string()
}

/// Parses a date and time relative to `now`.
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DD` (midnight), `HH:MM` (today),
/// `now`, `tomorrow` (9:00 tomorrow) and relative offsets such as `30m`,
/// `2h` or `3d`.
pub fn parse_datetime(s: &str, now: DateTime) -> Result<DateTime, ParseError> {
    let s = s.trim();
    let invalid = || ParseError::InvalidDateTime(s.to_string());

    match s.to_ascii_lowercase().as_str() {
        "" => return Err(invalid()),
        "now" => return Ok(now),
        "tomorrow" => {
            let tomorrow = now.date().tomorrow().map_err(|_| invalid())?;
            return Ok(tomorrow.at(9, 0, 0, 0));
        }
        _ => {}
    }

    if let Ok(dt) = s.parse::<DateTime>() {
        Ok(dt)
    } else if let Ok(time) = s.parse::<Time>() {
        Ok(now.date().to_datetime(time))
    } else if let Some(offset) = parse_relative(s) {
        now.checked_add(offset).map_err(|_| invalid())
    } else {
        Err(invalid())
    }
}

/// Parses a calendar date relative to `today`.
pub fn parse_date(s: &str, today: Date) -> Result<Date, ParseError> {
    let s = s.trim();
    let invalid = || ParseError::InvalidDate(s.to_string());
    match s.to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today.tomorrow().map_err(|_| invalid()),
        "yesterday" => today.yesterday().map_err(|_| invalid()),
        _ => s.parse::<Date>().map_err(|_| invalid()),
    }
}

fn parse_relative(s: &str) -> Option<Span> {
    let unit = s.chars().last()?;
    let amount: i64 = s[..s.len() - unit.len_utf8()].parse().ok()?;
    match unit {
        'm' => Span::new().try_minutes(amount).ok(),
        'h' => Span::new().try_hours(amount).ok(),
        'd' => Span::new().try_days(amount).ok(),
        _ => None,
    }
}
