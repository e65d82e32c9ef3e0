//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse a frontmatter date string
///
/// Zone-less values are read as UTC, so `2024-01-01` is midnight UTC.
/// Returns `None` for anything unrecognised.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Offsets written without a colon or after a space
    let offset_formats = [
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S %:z",
        "%Y-%m-%d %H:%M:%S %z",
    ];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Convert epoch milliseconds into a timestamp
pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// ISO 8601 with millisecond precision in UTC (`2024-01-15T10:30:00.000Z`)
pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Long human date for the given locale ("15 de janeiro de 2024")
pub fn format_long(date: &DateTime<Utc>, locale: &str) -> String {
    if locale.to_ascii_lowercase().starts_with("pt") {
        let month = MONTHS_PT[date.month0() as usize];
        format!("{} de {} de {}", date.day(), month, date.year())
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}

/// Format a date using a Moment.js-style pattern (`DD/MM/YYYY`)
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    date.format(&moment_to_chrono_format(pattern)).to_string()
}

fn moment_to_chrono_format(pattern: &str) -> String {
    // Longest tokens first so `MMMM` is not eaten by `MM`
    let tokens = [
        ("YYYY", "%Y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("mm", "%M"),
        ("ss", "%S"),
    ];

    let mut out = pattern.to_string();
    for (from, to) in tokens {
        out = out.replace(from, to);
    }
    out
}
