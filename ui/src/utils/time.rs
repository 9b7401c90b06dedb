use jiff::{Timestamp, tz};

/// Date and time in the browser's timezone, e.g. `Mon, 03 Mar 2025 10:30`.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%a, %d %b %Y %H:%M")
        .to_string()
}

/// Value for an `<input type="date">`, empty when unset.
pub fn date_input_value(date: Option<jiff::civil::Date>) -> String {
    date.map(|date| date.to_string()).unwrap_or_default()
}
