/// Utilities for date formatting and parsing
///
/// Dates are shown as DD.MM.YYYY; `<input type="date">` uses YYYY-MM-DD.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format a date as DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a reservation period, collapsing single-day ranges
/// Example: 01.03.2024 – 04.03.2024
pub fn format_period(from: NaiveDate, until: NaiveDate) -> String {
    if from == until {
        format_date(from)
    } else {
        format!("{} – {}", format_date(from), format_date(until))
    }
}

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
///
/// Shows the wall-clock time as written, whatever the offset.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    const DISPLAY: &str = "%d.%m.%Y %H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.naive_local().format(DISPLAY).to_string();
    }
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format(DISPLAY).to_string())
        .unwrap_or_else(|_| datetime_str.to_string())
}

/// Parse the value of a date input
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

/// Value for a date input
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}
