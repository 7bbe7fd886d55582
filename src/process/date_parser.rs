use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Fast parse of `"YYYY-MM-DD"` (or `/` separated) without going through the format parser.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 || !s.is_ascii() {
        return None;
    }
    let sep = &s[4..5];
    if (sep != "-" && sep != "/") || &s[7..8] != sep {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Recognise a flight date in any of the layouts seen in flight exports.
/// Date-only values resolve to midnight. Returns None for anything else,
/// including impossible calendar dates.
pub fn parse_flight_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Some(date) = parse_iso_date(s) {
        return date.and_hms_opt(0, 0, 0);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        })
}
