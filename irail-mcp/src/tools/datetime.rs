//! Date and time arguments.
//!
//! Tools accept loose, human-style dates and times. Anything that cannot
//! be recognised falls back to the current moment, except a malformed
//! relative date, which is reported.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::error::ToolError;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];
const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// Resolve optional date and time arguments against `now`.
///
/// Dates: `today`, `tomorrow`, `+N days`, or a calendar date (`YYYY-MM-DD`,
/// `DD/MM/YYYY`, `DD.MM.YYYY`). An explicit calendar date starts at
/// midnight. Times replace the hour and minute; an unrecognised time
/// leaves the date's time as it is.
pub fn parse_datetime(
    date: Option<&str>,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ToolError> {
    let target = match date.map(str::trim) {
        None => now,
        Some(d) if d.eq_ignore_ascii_case("today") => now,
        Some(d) if d.eq_ignore_ascii_case("tomorrow") => {
            now.checked_add_days(Days::new(1)).unwrap_or(now)
        }
        Some(d) if d.starts_with('+') => now
            .checked_add_days(Days::new(relative_days(d)?))
            .ok_or_else(|| ToolError::InvalidDate(d.to_string()))?,
        Some(d) => parse_date(d).map_or(now, |day| day.and_time(NaiveTime::MIN)),
    };

    let Some(time) = time else {
        return Ok(target);
    };

    Ok(parse_time(time.trim())
        .and_then(|t| target.with_hour(t.hour())?.with_minute(t.minute()))
        .unwrap_or(target))
}

/// Days in "+N days" (the unit word is optional).
fn relative_days(text: &str) -> Result<u64, ToolError> {
    text[1..]
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| ToolError::InvalidDate(text.to_string()))
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}
