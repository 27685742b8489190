//! Decoding header date and time tokens into naive timestamps.
//!
//! Dates are read day-first (`DD/MM/YYYY`, `D/M/YY`); two-digit years land in
//! the 2000s. Times keep hours and minutes only. A trailing meridiem is
//! stripped without shifting the hour, so `3:30 PM` decodes to 03:30.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{RecapError, Result};

/// Decodes a date token such as `20/06/2024`, `1/2/24` or `20-06-2024`.
pub fn decode_date(date: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = date.trim().split(['/', '-']).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(RecapError::datetime_decode(
            date,
            "expected day, month and year",
        ));
    };

    let day = parse_field(date, day, "day")?;
    let month = parse_field(date, month, "month")?;
    let year = if year.len() == 2 {
        parse_field(date, &format!("20{year}"), "year")?
    } else {
        parse_field(date, year, "year")?
    };

    let year = i32::try_from(year)
        .map_err(|_| RecapError::datetime_decode(date, format!("year {year} out of range")))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| RecapError::datetime_decode(date, "no such calendar date"))
}

/// Decodes a time token such as `15:30`, `15:30:12` or `3:30 PM`.
///
/// Seconds are ignored.
pub fn decode_time(time: &str) -> Result<NaiveTime> {
    let stripped = strip_meridiem(time);
    let mut parts = stripped.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return Err(RecapError::datetime_decode(time, "expected hours and minutes"));
    };

    let hours = parse_field(time, hours, "hour")?;
    let minutes = parse_field(time, minutes, "minute")?;

    NaiveTime::from_hms_opt(hours, minutes, 0)
        .ok_or_else(|| RecapError::datetime_decode(time, "no such time of day"))
}

/// Decodes a header's date and time tokens into one naive timestamp.
pub fn decode_timestamp(date: &str, time: &str) -> Result<NaiveDateTime> {
    Ok(decode_date(date)?.and_time(decode_time(time)?))
}

/// Removes an `AM`/`PM` suffix (any case) and surrounding whitespace.
fn strip_meridiem(time: &str) -> &str {
    let trimmed = time.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.ends_with("am") || lower.ends_with("pm") {
        trimmed[..trimmed.len() - 2].trim_end()
    } else {
        trimmed
    }
}

fn parse_field(input: &str, field: &str, what: &str) -> Result<u32> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|e| RecapError::datetime_decode(input, format!("invalid {what} '{field}': {e}")))
}
